use glam::Vec2;

use crate::core::theme::Rgba;
use crate::extensions::Easing;
use crate::renderer::frame::{overlay_kind, OverlayInstance};

/// One hover sparkle. Invisible until its stagger `delay` has elapsed, then
/// fades over `lifetime` with a quadratic ease-out.
#[derive(Debug, Clone)]
pub struct Sparkle {
    pub pos: Vec2,
    /// Glyph size.
    pub size: f32,
    pub color: Rgba,
    /// Stagger before the sparkle appears, seconds.
    pub delay: f32,
    pub age: f32,
    pub lifetime: f32,
}

impl Sparkle {
    /// Age one tick. Returns false once the sparkle has lived out its delay
    /// plus lifetime.
    pub fn tick(&mut self, dt: f32) -> bool {
        self.age += dt;
        self.age < self.delay + self.lifetime
    }

    /// None while still waiting out the stagger delay.
    pub fn to_instance(&self) -> Option<OverlayInstance> {
        let t = (self.age - self.delay) / self.lifetime;
        if t < 0.0 {
            return None;
        }
        let alpha = 1.0 - Easing::QuadOut.eval(t);
        Some(OverlayInstance::new(
            overlay_kind::SPARKLE,
            self.pos,
            self.size,
            0.0,
            self.color,
            alpha,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::effects::palette;

    fn sparkle(delay: f32) -> Sparkle {
        Sparkle {
            pos: Vec2::new(10.0, 10.0),
            size: 12.0,
            color: palette::PINK,
            delay,
            age: 0.0,
            lifetime: 0.8,
        }
    }

    #[test]
    fn hidden_until_delay_elapses() {
        let mut s = sparkle(0.2);
        s.tick(0.1);
        assert!(s.to_instance().is_none());
        s.tick(0.15);
        assert!(s.to_instance().is_some());
    }

    #[test]
    fn fades_monotonically_after_delay() {
        let mut s = sparkle(0.0);
        let mut last = f32::INFINITY;
        for _ in 0..40 {
            if !s.tick(0.016) {
                break;
            }
            let alpha = s.to_instance().unwrap().alpha;
            assert!(alpha < last);
            last = alpha;
        }
    }

    #[test]
    fn dies_after_delay_plus_lifetime() {
        let mut s = sparkle(0.25);
        let mut alive = true;
        let mut elapsed = 0.0f32;
        while alive {
            alive = s.tick(0.05);
            elapsed += 0.05;
        }
        assert!((elapsed - 1.05).abs() < 0.051, "elapsed={}", elapsed);
    }
}
