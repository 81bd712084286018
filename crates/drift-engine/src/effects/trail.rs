use glam::Vec2;

use crate::core::theme::Rgba;
use crate::extensions::Easing;
use crate::renderer::frame::{overlay_kind, OverlayInstance};

/// Peak alpha of a freshly spawned trail dot.
const START_ALPHA: f32 = 0.7;

/// One cursor-trail dot: spawns at the pointer, then fades and shrinks to
/// nothing with an exponential ease-out.
#[derive(Debug, Clone)]
pub struct TrailDot {
    pub pos: Vec2,
    pub color: Rgba,
    pub age: f32,
}

impl TrailDot {
    /// Age one tick. Returns false once past `lifetime`.
    pub fn tick(&mut self, dt: f32, lifetime: f32) -> bool {
        self.age += dt;
        self.age < lifetime
    }

    pub fn to_instance(&self, size: f32, lifetime: f32) -> OverlayInstance {
        let progress = Easing::ExpoOut.eval(self.age / lifetime);
        OverlayInstance::new(
            overlay_kind::TRAIL_DOT,
            self.pos,
            size * (1.0 - progress),
            0.0,
            self.color,
            START_ALPHA * (1.0 - progress),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::effects::palette;

    #[test]
    fn starts_at_peak_alpha_and_full_size() {
        let dot = TrailDot {
            pos: Vec2::ZERO,
            color: palette::CYAN,
            age: 0.0,
        };
        let inst = dot.to_instance(12.0, 0.5);
        assert!((inst.alpha - 0.7).abs() < 1e-6);
        assert!((inst.size - 12.0).abs() < 1e-6);
    }

    #[test]
    fn shrinks_and_fades_with_age() {
        let mut dot = TrailDot {
            pos: Vec2::ZERO,
            color: palette::CYAN,
            age: 0.0,
        };
        let mut last_size = f32::INFINITY;
        let mut last_alpha = f32::INFINITY;
        while dot.tick(0.05, 0.5) {
            let inst = dot.to_instance(12.0, 0.5);
            assert!(inst.size < last_size);
            assert!(inst.alpha < last_alpha);
            last_size = inst.size;
            last_alpha = inst.alpha;
        }
    }

    #[test]
    fn expires_at_lifetime() {
        let mut dot = TrailDot {
            pos: Vec2::ZERO,
            color: palette::CYAN,
            age: 0.0,
        };
        assert!(dot.tick(0.25, 0.5));
        assert!(!dot.tick(0.25, 0.5));
    }
}
