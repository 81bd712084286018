use bytemuck::{Pod, Zeroable};
use glam::Vec2;

use crate::core::theme::Rgba;

/// One filled disc (a particle) in the frame buffer.
/// Must match the TypeScript canvas renderer: 8 floats = 32-byte stride.
///
/// Color channels are the raw 0-255 values as f32 so the whole buffer can be
/// read through a single Float32Array view.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, Pod, Zeroable)]
pub struct DiscInstance {
    pub x: f32,
    pub y: f32,
    /// Disc radius in canvas units.
    pub radius: f32,
    pub r: f32,
    pub g: f32,
    pub b: f32,
    /// 0.0 = invisible, 1.0 = opaque.
    pub alpha: f32,
    pub _pad: f32,
}

impl DiscInstance {
    pub const FLOATS: usize = 8;

    pub fn new(pos: Vec2, radius: f32, color: Rgba) -> Self {
        DiscInstance {
            x: pos.x,
            y: pos.y,
            radius,
            r: color.r as f32,
            g: color.g as f32,
            b: color.b as f32,
            alpha: color.a,
            _pad: 0.0,
        }
    }
}

/// One proximity link (a line between two particles). 8 floats.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, Pod, Zeroable)]
pub struct LinkInstance {
    pub x1: f32,
    pub y1: f32,
    pub x2: f32,
    pub y2: f32,
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub alpha: f32,
}

impl LinkInstance {
    pub const FLOATS: usize = 8;

    pub fn new(a: Vec2, b: Vec2, color: Rgba) -> Self {
        LinkInstance {
            x1: a.x,
            y1: a.y,
            x2: b.x,
            y2: b.y,
            r: color.r as f32,
            g: color.g as f32,
            b: color.b as f32,
            alpha: color.a,
        }
    }
}

/// Overlay sprite kinds, matched by the canvas renderer.
pub mod overlay_kind {
    pub const CONFETTI_SQUARE: f32 = 0.0;
    pub const CONFETTI_DISC: f32 = 1.0;
    pub const SPARKLE: f32 = 2.0;
    pub const TRAIL_DOT: f32 = 3.0;
}

/// One overlay sprite (confetti piece, sparkle, trail dot). 10 floats.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, Pod, Zeroable)]
pub struct OverlayInstance {
    /// One of the [`overlay_kind`] constants.
    pub kind: f32,
    pub x: f32,
    pub y: f32,
    /// Side length for squares, diameter for discs, font size for sparkles.
    pub size: f32,
    /// Degrees; only meaningful for confetti.
    pub rotation: f32,
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub alpha: f32,
    pub _pad: f32,
}

impl OverlayInstance {
    pub const FLOATS: usize = 10;

    pub fn new(kind: f32, pos: Vec2, size: f32, rotation: f32, color: Rgba, alpha: f32) -> Self {
        OverlayInstance {
            kind,
            x: pos.x,
            y: pos.y,
            size,
            rotation,
            r: color.r as f32,
            g: color.g as f32,
            b: color.b as f32,
            alpha,
            _pad: 0.0,
        }
    }
}

/// All render output for one frame, rebuilt from scratch every tick.
/// The JS side clears the canvas and replays the sections in order:
/// discs, links, overlay.
pub struct FrameBuffer {
    pub discs: Vec<DiscInstance>,
    pub links: Vec<LinkInstance>,
    pub overlay: Vec<OverlayInstance>,
}

impl FrameBuffer {
    pub fn new() -> Self {
        Self {
            discs: Vec::with_capacity(64),
            links: Vec::with_capacity(256),
            overlay: Vec::with_capacity(64),
        }
    }

    pub fn clear(&mut self) {
        self.discs.clear();
        self.links.clear();
        self.overlay.clear();
    }

    pub fn disc_count(&self) -> u32 {
        self.discs.len() as u32
    }

    pub fn link_count(&self) -> u32 {
        self.links.len() as u32
    }

    pub fn overlay_count(&self) -> u32 {
        self.overlay.len() as u32
    }

    /// Raw pointers for direct Float32Array reads out of wasm memory.
    pub fn discs_ptr(&self) -> *const f32 {
        self.discs.as_ptr() as *const f32
    }

    pub fn links_ptr(&self) -> *const f32 {
        self.links.as_ptr() as *const f32
    }

    pub fn overlay_ptr(&self) -> *const f32 {
        self.overlay.as_ptr() as *const f32
    }
}

impl Default for FrameBuffer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn instance_strides_match_wire_format() {
        assert_eq!(std::mem::size_of::<DiscInstance>(), 32);
        assert_eq!(std::mem::size_of::<LinkInstance>(), 32);
        assert_eq!(std::mem::size_of::<OverlayInstance>(), 40);
    }

    #[test]
    fn disc_packs_color_channels() {
        let d = DiscInstance::new(Vec2::new(1.0, 2.0), 3.0, Rgba::new(139, 92, 246, 0.3));
        assert_eq!(d.r, 139.0);
        assert_eq!(d.g, 92.0);
        assert_eq!(d.b, 246.0);
        assert_eq!(d.alpha, 0.3);
    }

    #[test]
    fn clear_empties_all_sections() {
        let mut buf = FrameBuffer::new();
        buf.discs.push(DiscInstance::default());
        buf.links.push(LinkInstance::default());
        buf.overlay.push(OverlayInstance::default());
        buf.clear();
        assert_eq!(buf.disc_count(), 0);
        assert_eq!(buf.link_count(), 0);
        assert_eq!(buf.overlay_count(), 0);
    }
}
