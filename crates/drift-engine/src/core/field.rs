use glam::Vec2;

use crate::api::config::FieldConfig;
use crate::core::particle::Particle;
use crate::core::rng::Rng;
use crate::core::theme::Theme;

/// The full simulation state: particle population, surface bounds, the
/// last-known pointer position, and the active theme.
///
/// Owned by the host runner and advanced by exactly one [`Field::tick`] per
/// display frame; the frame loop itself lives host-side, which keeps this
/// type directly drivable from unit tests.
pub struct Field {
    particles: Vec<Particle>,
    bounds: Vec2,
    /// None until the first pointer-move notification.
    pointer: Option<Vec2>,
    theme: Theme,
    config: FieldConfig,
}

impl Field {
    /// Build the field and spawn its fixed population. Surface dimensions of
    /// zero are accepted and degrade silently (all spawns land at the origin).
    pub fn new(config: FieldConfig, theme: Theme, width: f32, height: f32, rng: &mut Rng) -> Self {
        if !(width > 0.0 && height > 0.0) {
            log::debug!("field: degenerate surface {}x{}", width, height);
        }
        let bounds = Vec2::new(width, height);
        let particles = (0..config.count)
            .map(|_| Particle::spawn(&config, theme, bounds, rng))
            .collect();
        Field {
            particles,
            bounds,
            pointer: None,
            theme,
            config,
        }
    }

    /// Advance every particle one frame: Euler integration plus boundary
    /// reflection. Rendering is a separate pass over the resulting state.
    pub fn tick(&mut self) {
        for p in &mut self.particles {
            p.advance(self.bounds);
        }
    }

    /// Record a pointer move and apply its one-shot positional nudge: every
    /// particle within `pointer_radius` slides toward the pointer by
    /// `(pointer - pos) * force * pointer_strength`, where force falls off
    /// linearly from 1 at distance zero to 0 at the radius. Velocity is
    /// untouched, so the effect does not persist beyond this event.
    pub fn pointer_moved(&mut self, at: Vec2) {
        let radius = self.config.pointer_radius;
        for p in &mut self.particles {
            let delta = at - p.pos;
            let dist = delta.length();
            if dist < radius {
                let force = (radius - dist) / radius;
                p.pos += delta * force * self.config.pointer_strength;
            }
        }
        self.pointer = Some(at);
    }

    /// Recolor the live population in place for a new theme. Opacities are
    /// preserved; only the derived colors change.
    pub fn set_theme(&mut self, theme: Theme) {
        self.theme = theme;
        for p in &mut self.particles {
            p.recolor(theme);
        }
    }

    /// Adopt new surface dimensions. Particle positions are deliberately not
    /// rescaled; stragglers outside a shrunk surface drift back in through
    /// boundary reflection.
    pub fn resize(&mut self, width: f32, height: f32) {
        self.bounds = Vec2::new(width, height);
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    /// Mutable access for external collaborators (tests force layouts, the
    /// page could recolor or pin particles directly).
    pub fn particles_mut(&mut self) -> &mut [Particle] {
        &mut self.particles
    }

    pub fn bounds(&self) -> Vec2 {
        self.bounds
    }

    pub fn pointer(&self) -> Option<Vec2> {
        self.pointer
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn config(&self) -> &FieldConfig {
        &self.config
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }
}
