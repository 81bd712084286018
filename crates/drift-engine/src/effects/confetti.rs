use glam::Vec2;

use crate::api::config::EffectsConfig;
use crate::core::theme::Rgba;
use crate::renderer::frame::{overlay_kind, OverlayInstance};

/// How far below the bottom edge a piece may fall before it is retired.
pub const FLOOR_MARGIN: f32 = 50.0;

/// One piece of a confetti burst.
#[derive(Debug, Clone)]
pub struct Confetti {
    pub pos: Vec2,
    /// Units per second.
    pub vel: Vec2,
    pub size: f32,
    /// Degrees.
    pub rotation: f32,
    pub opacity: f32,
    pub round: bool,
    pub color: Rgba,
}

impl Confetti {
    /// Advance physics one tick. Gravity integrates with dt; damping, spin,
    /// and fade are per tick, like the page's per-frame loop. Returns false
    /// once invisible or fallen past the floor.
    pub fn tick(&mut self, config: &EffectsConfig, dt: f32, floor: f32) -> bool {
        self.vel.y += config.confetti_gravity * dt;
        self.vel *= config.confetti_friction;
        self.pos += self.vel * dt;
        self.rotation += self.vel.x * 0.1;
        self.opacity -= config.confetti_fade;
        self.opacity > 0.0 && self.pos.y < floor + FLOOR_MARGIN
    }

    pub fn to_instance(&self) -> OverlayInstance {
        let kind = if self.round {
            overlay_kind::CONFETTI_DISC
        } else {
            overlay_kind::CONFETTI_SQUARE
        };
        OverlayInstance::new(kind, self.pos, self.size, self.rotation, self.color, self.opacity)
    }
}
