//! Overlay effects: confetti bursts, hover sparkles, and the cursor trail.
//!
//! Headless counterparts of the page's DOM-node effects, rendered through the
//! overlay section of the frame buffer instead of throwaway elements.

mod confetti;
pub mod palette;
mod sparkle;
mod trail;

pub use confetti::{Confetti, FLOOR_MARGIN};
pub use sparkle::Sparkle;
pub use trail::TrailDot;

use glam::Vec2;
use std::f32::consts::TAU;

use crate::api::config::EffectsConfig;
use crate::core::rng::Rng;
use crate::renderer::frame::FrameBuffer;

/// Container for all overlay effect populations. Advanced once per frame by
/// the runner, after the field tick.
pub struct EffectsState {
    pub confetti: Vec<Confetti>,
    pub sparkles: Vec<Sparkle>,
    pub trail: Vec<TrailDot>,
    config: EffectsConfig,
    rng: Rng,
    /// Simulated time, accumulated from tick dt. The trail throttle works in
    /// this clock, not wall time.
    clock: f32,
    last_trail_emit: f32,
    trail_color: usize,
}

impl EffectsState {
    pub fn new(config: EffectsConfig, seed: u64) -> Self {
        EffectsState {
            confetti: Vec::new(),
            sparkles: Vec::new(),
            trail: Vec::new(),
            config,
            rng: Rng::new(seed.wrapping_add(0x9e37_79b9)),
            clock: 0.0,
            last_trail_emit: f32::NEG_INFINITY,
            trail_color: 0,
        }
    }

    pub fn config(&self) -> &EffectsConfig {
        &self.config
    }

    /// Burst a full ring of confetti from one point: pieces fan out evenly by
    /// angle with randomized launch speed, size, shape, and color, plus an
    /// upward kick.
    pub fn spawn_confetti(&mut self, at: Vec2) {
        let count = self.config.confetti_count;
        for i in 0..count {
            let angle = TAU * i as f32 / count as f32;
            let speed = self
                .rng
                .range(self.config.confetti_speed.0, self.config.confetti_speed.1);
            self.confetti.push(Confetti {
                pos: at,
                vel: Vec2::new(
                    angle.cos() * speed,
                    angle.sin() * speed + self.config.confetti_kick,
                ),
                size: self
                    .rng
                    .range(self.config.confetti_size.0, self.config.confetti_size.1),
                rotation: 0.0,
                opacity: 1.0,
                round: self.rng.chance(0.5),
                color: palette::pick(&palette::CONFETTI, &mut self.rng),
            });
        }
    }

    /// Scatter a staggered handful of sparkles inside a hovered rectangle.
    pub fn spawn_sparkles(&mut self, origin: Vec2, size: Vec2) {
        for i in 0..self.config.sparkle_count {
            let pos = origin
                + Vec2::new(
                    self.rng.range(0.0, size.x),
                    self.rng.range(0.0, size.y),
                );
            self.sparkles.push(Sparkle {
                pos,
                size: self
                    .rng
                    .range(self.config.sparkle_size.0, self.config.sparkle_size.1),
                color: palette::pick(&palette::SPARKLE, &mut self.rng),
                delay: i as f32 * self.config.sparkle_stagger,
                age: 0.0,
                lifetime: self.config.sparkle_lifetime,
            });
        }
    }

    /// Maybe spawn a trail dot at the pointer. Throttled to one dot per
    /// `trail_throttle` of simulated time, cycling the trail palette.
    pub fn pointer_moved(&mut self, at: Vec2) {
        if self.clock - self.last_trail_emit < self.config.trail_throttle {
            return;
        }
        self.last_trail_emit = self.clock;
        let color = palette::TRAIL[self.trail_color % palette::TRAIL.len()];
        self.trail_color = self.trail_color.wrapping_add(1);
        self.trail.push(TrailDot {
            pos: at,
            color,
            age: 0.0,
        });
    }

    /// Advance every live effect and drop the expired ones. `floor` is the
    /// surface height, used to retire confetti that has fallen off-screen.
    pub fn tick(&mut self, dt: f32, floor: f32) {
        self.clock += dt;
        let config = &self.config;
        self.confetti.retain_mut(|c| c.tick(config, dt, floor));
        self.sparkles.retain_mut(|s| s.tick(dt));
        let lifetime = config.trail_lifetime;
        self.trail.retain_mut(|d| d.tick(dt, lifetime));
    }

    /// Rebuild the overlay section: confetti, then visible sparkles, then
    /// trail dots, truncated to the protocol capacity.
    pub fn rebuild_overlay(&self, buffer: &mut FrameBuffer) {
        buffer.overlay.clear();
        let max = self.config.max_overlay;
        for c in &self.confetti {
            if buffer.overlay.len() >= max {
                return;
            }
            buffer.overlay.push(c.to_instance());
        }
        for s in &self.sparkles {
            if buffer.overlay.len() >= max {
                return;
            }
            if let Some(inst) = s.to_instance() {
                buffer.overlay.push(inst);
            }
        }
        for d in &self.trail {
            if buffer.overlay.len() >= max {
                return;
            }
            buffer
                .overlay
                .push(d.to_instance(self.config.trail_size, self.config.trail_lifetime));
        }
    }
}
