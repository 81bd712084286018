use glam::Vec2;

use crate::api::config::FieldConfig;
use crate::core::rng::Rng;
use crate::core::theme::{Rgba, Theme};

/// One simulated point of the background field.
#[derive(Debug, Clone)]
pub struct Particle {
    /// Canvas-space position.
    pub pos: Vec2,
    /// Velocity in canvas units per frame. There is no delta-time scaling:
    /// effective speed tracks the display refresh rate.
    pub vel: Vec2,
    /// Disc radius, always > 0.
    pub size: f32,
    /// Fixed at spawn. Theme changes recompute `color` from it in place.
    pub opacity: f32,
    pub color: Rgba,
}

impl Particle {
    /// Spawn a particle at a uniformly random spot on the surface.
    /// A zero-sized surface collapses all positions to the origin.
    pub fn spawn(config: &FieldConfig, theme: Theme, bounds: Vec2, rng: &mut Rng) -> Self {
        let opacity = rng.range(config.opacity_range.0, config.opacity_range.1);
        Particle {
            pos: Vec2::new(rng.range(0.0, bounds.x), rng.range(0.0, bounds.y)),
            vel: Vec2::new(
                rng.range(config.speed_range.0, config.speed_range.1),
                rng.range(config.speed_range.0, config.speed_range.1),
            ),
            size: rng.range(config.size_range.0, config.size_range.1),
            opacity,
            color: theme.particle_color(opacity),
        }
    }

    /// One Euler step plus boundary reflection. The position may overshoot an
    /// edge by one frame's travel; only the velocity sign flips, the position
    /// is never clamped.
    pub fn advance(&mut self, bounds: Vec2) {
        self.pos += self.vel;
        if self.pos.x < 0.0 || self.pos.x > bounds.x {
            self.vel.x = -self.vel.x;
        }
        if self.pos.y < 0.0 || self.pos.y > bounds.y {
            self.vel.y = -self.vel.y;
        }
    }

    /// Recompute the color from the stored opacity under a new theme.
    pub fn recolor(&mut self, theme: Theme) {
        self.color = theme.particle_color(self.opacity);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spawn_one(seed: u64) -> Particle {
        let mut rng = Rng::new(seed);
        Particle::spawn(
            &FieldConfig::default(),
            Theme::Dark,
            Vec2::new(800.0, 600.0),
            &mut rng,
        )
    }

    #[test]
    fn spawn_within_ranges() {
        for seed in 1..50 {
            let p = spawn_one(seed);
            assert!(p.pos.x >= 0.0 && p.pos.x < 800.0);
            assert!(p.pos.y >= 0.0 && p.pos.y < 600.0);
            assert!(p.size >= 1.0 && p.size < 4.0);
            assert!(p.vel.x >= -0.25 && p.vel.x < 0.25);
            assert!(p.vel.y >= -0.25 && p.vel.y < 0.25);
            assert!(p.opacity >= 0.1 && p.opacity < 0.6);
        }
    }

    #[test]
    fn spawn_is_deterministic() {
        let a = spawn_one(99);
        let b = spawn_one(99);
        assert_eq!(a.pos, b.pos);
        assert_eq!(a.vel, b.vel);
        assert_eq!(a.size, b.size);
    }

    #[test]
    fn advance_reflects_at_right_edge() {
        let mut p = spawn_one(1);
        p.pos = Vec2::new(799.9, 300.0);
        p.vel = Vec2::new(0.2, 0.0);
        p.advance(Vec2::new(800.0, 600.0));
        assert_eq!(p.vel.x, -0.2);
        // overshoot is allowed for one frame
        assert!(p.pos.x > 800.0);
        // subsequent steps move it back inside
        p.advance(Vec2::new(800.0, 600.0));
        p.advance(Vec2::new(800.0, 600.0));
        assert!(p.pos.x < 800.0);
    }

    #[test]
    fn advance_reflects_at_top_edge() {
        let mut p = spawn_one(2);
        p.pos = Vec2::new(400.0, 0.05);
        p.vel = Vec2::new(0.0, -0.2);
        p.advance(Vec2::new(800.0, 600.0));
        assert_eq!(p.vel.y, 0.2);
    }

    #[test]
    fn opacity_survives_recolor() {
        let mut p = spawn_one(3);
        let opacity = p.opacity;
        p.recolor(Theme::Light);
        assert_eq!(p.opacity, opacity);
        assert!((p.color.a - opacity * 0.8).abs() < 1e-6);
        p.recolor(Theme::Dark);
        assert_eq!(p.color.a, opacity);
    }

    #[test]
    fn zero_surface_degrades_silently() {
        let mut rng = Rng::new(5);
        let p = Particle::spawn(&FieldConfig::default(), Theme::Dark, Vec2::ZERO, &mut rng);
        assert_eq!(p.pos, Vec2::ZERO);
        assert!(p.size > 0.0);
    }
}
