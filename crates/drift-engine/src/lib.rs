pub mod api;
pub mod bridge;
pub mod core;
#[cfg(feature = "effects")]
pub mod effects;
pub mod extensions;
pub mod input;
pub mod renderer;
pub mod systems;

// Re-export key types at crate root for convenience
pub use api::config::{FieldConfig, SimConfig};
pub use bridge::protocol::ProtocolLayout;
pub use core::field::Field;
pub use core::particle::Particle;
pub use core::rng::Rng;
pub use core::theme::{Rgba, Theme};
pub use input::queue::{InputEvent, InputQueue};
pub use renderer::frame::{
    overlay_kind, DiscInstance, FrameBuffer, LinkInstance, OverlayInstance,
};
pub use systems::links::build_links;
pub use systems::render::build_discs;

#[cfg(feature = "effects")]
pub use api::config::EffectsConfig;
#[cfg(feature = "effects")]
pub use effects::{Confetti, EffectsState, Sparkle, TrailDot};

// Extensions — decoupled page-glue helpers
pub use extensions::{
    active_section, magnetic_offset, navbar_scrolled, orb_offset, pupil_offset, shape_offset,
    tilt_angles, Easing, Section, Typewriter,
};
