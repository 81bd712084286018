//! Frame buffer layout shared with the TypeScript canvas renderer.
//! Must stay in sync with `protocol.ts`.
//!
//! Layout (all values in f32 / 4 bytes):
//! ```text
//! [Header: 16 floats]
//! [Discs: max_discs × 8 floats]
//! [Links: max_links × 8 floats]
//! [Overlay: max_overlay × 10 floats]
//! ```
//!
//! Capacities are written once into the header at init; TypeScript reads them
//! back to compute section offsets dynamically.

use crate::api::config::SimConfig;
use crate::renderer::frame::{DiscInstance, LinkInstance, OverlayInstance};

/// Number of floats in the header section.
pub const HEADER_FLOATS: usize = 16;

/// Header field indices.
pub const HEADER_FRAME_COUNTER: usize = 0;
pub const HEADER_MAX_DISCS: usize = 1;
pub const HEADER_DISC_COUNT: usize = 2;
pub const HEADER_MAX_LINKS: usize = 3;
pub const HEADER_LINK_COUNT: usize = 4;
pub const HEADER_MAX_OVERLAY: usize = 5;
pub const HEADER_OVERLAY_COUNT: usize = 6;
pub const HEADER_SURFACE_WIDTH: usize = 7;
pub const HEADER_SURFACE_HEIGHT: usize = 8;
pub const HEADER_THEME: usize = 9;
pub const HEADER_PROTOCOL_VERSION: usize = 10;

/// Protocol version written into the header.
pub const PROTOCOL_VERSION: f32 = 1.0;

/// Runtime-computed buffer layout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProtocolLayout {
    /// Maximum disc instances (the particle population size).
    pub max_discs: usize,
    /// Maximum link instances (every unordered particle pair).
    pub max_links: usize,
    /// Maximum overlay instances.
    pub max_overlay: usize,

    /// Size of each data section in floats.
    pub disc_data_floats: usize,
    pub link_data_floats: usize,
    pub overlay_data_floats: usize,

    /// Offset (in floats) where each data section begins.
    pub disc_data_offset: usize,
    pub link_data_offset: usize,
    pub overlay_data_offset: usize,

    /// Total buffer size.
    pub buffer_total_floats: usize,
    pub buffer_total_bytes: usize,
}

impl ProtocolLayout {
    /// Compute layout from raw capacity values.
    pub fn new(max_discs: usize, max_links: usize, max_overlay: usize) -> Self {
        let disc_data_floats = max_discs * DiscInstance::FLOATS;
        let link_data_floats = max_links * LinkInstance::FLOATS;
        let overlay_data_floats = max_overlay * OverlayInstance::FLOATS;

        let disc_data_offset = HEADER_FLOATS;
        let link_data_offset = disc_data_offset + disc_data_floats;
        let overlay_data_offset = link_data_offset + link_data_floats;

        let buffer_total_floats = overlay_data_offset + overlay_data_floats;
        let buffer_total_bytes = buffer_total_floats * 4;

        Self {
            max_discs,
            max_links,
            max_overlay,
            disc_data_floats,
            link_data_floats,
            overlay_data_floats,
            disc_data_offset,
            link_data_offset,
            overlay_data_offset,
            buffer_total_floats,
            buffer_total_bytes,
        }
    }

    /// Derive capacities from the configuration. The link section is sized
    /// for the worst case: every unordered pair of the population linked.
    pub fn from_config(config: &SimConfig) -> Self {
        let n = config.field.count;
        let max_links = n * n.saturating_sub(1) / 2;
        #[cfg(feature = "effects")]
        let max_overlay = config.effects.max_overlay;
        #[cfg(not(feature = "effects"))]
        let max_overlay = 0;
        Self::new(n, max_links, max_overlay)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sections_are_contiguous() {
        let layout = ProtocolLayout::new(50, 1225, 256);
        assert_eq!(layout.disc_data_offset, HEADER_FLOATS);
        assert_eq!(
            layout.link_data_offset,
            layout.disc_data_offset + layout.disc_data_floats
        );
        assert_eq!(
            layout.overlay_data_offset,
            layout.link_data_offset + layout.link_data_floats
        );
        assert_eq!(
            layout.buffer_total_floats,
            layout.overlay_data_offset + layout.overlay_data_floats
        );
        assert_eq!(layout.buffer_total_bytes, layout.buffer_total_floats * 4);
    }

    #[test]
    fn link_capacity_covers_every_pair() {
        let layout = ProtocolLayout::from_config(&SimConfig::default());
        assert_eq!(layout.max_discs, 50);
        assert_eq!(layout.max_links, 50 * 49 / 2);
    }

    #[test]
    fn empty_population_is_valid() {
        let config = SimConfig {
            field: crate::api::config::FieldConfig {
                count: 0,
                ..Default::default()
            },
            ..Default::default()
        };
        let layout = ProtocolLayout::from_config(&config);
        assert_eq!(layout.max_links, 0);
    }
}
