use crate::core::field::Field;
use crate::renderer::frame::{FrameBuffer, LinkInstance};

/// Link alpha for a pair at the given distance: falls off linearly from
/// `base` at distance zero to exactly zero at `max_distance`.
pub fn link_alpha(distance: f32, max_distance: f32, base: f32) -> f32 {
    (1.0 - distance / max_distance) * base
}

/// Rebuild the link section: every unordered pair of particles closer than
/// `link_distance` gets a connecting line, theme-tinted, with alpha falling
/// off by distance.
///
/// This is O(n²) over the population each frame. Acceptable only because the
/// population is small and fixed; growing it would call for a spatial index.
pub fn build_links(field: &Field, buffer: &mut FrameBuffer) {
    buffer.links.clear();
    let config = field.config();
    let theme = field.theme();
    let particles = field.particles();
    for i in 0..particles.len() {
        for j in (i + 1)..particles.len() {
            let distance = particles[i].pos.distance(particles[j].pos);
            if distance < config.link_distance {
                let alpha = link_alpha(distance, config.link_distance, config.link_alpha);
                buffer.links.push(LinkInstance::new(
                    particles[i].pos,
                    particles[j].pos,
                    theme.link_color(alpha),
                ));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::config::FieldConfig;
    use crate::core::rng::Rng;
    use crate::core::theme::Theme;
    use glam::Vec2;

    fn two_particle_field(a: Vec2, b: Vec2, theme: Theme) -> Field {
        let config = FieldConfig {
            count: 2,
            ..Default::default()
        };
        let mut rng = Rng::new(3);
        let mut field = Field::new(config, theme, 200.0, 200.0, &mut rng);
        field.particles_mut()[0].pos = a;
        field.particles_mut()[1].pos = b;
        field
    }

    #[test]
    fn alpha_decreases_with_distance_and_dies_at_threshold() {
        let mut last = f32::INFINITY;
        for d in [0.0, 30.0, 75.0, 120.0, 149.9] {
            let a = link_alpha(d, 150.0, 0.15);
            assert!(a < last, "not decreasing at d={}", d);
            assert!(a > 0.0);
            last = a;
        }
        assert_eq!(link_alpha(150.0, 150.0, 0.15), 0.0);
    }

    #[test]
    fn coincident_pair_links_at_full_alpha() {
        // the end-to-end scenario: two particles at (10,10) on a 200x200
        // surface must yield one line at (1 - 0/150) * 0.15 = 0.15
        let mut field = two_particle_field(
            Vec2::new(10.0, 10.0),
            Vec2::new(10.0, 10.0),
            Theme::Dark,
        );
        field.particles_mut()[0].vel = Vec2::new(-0.1, 0.0);
        field.particles_mut()[1].vel = Vec2::ZERO;
        field.tick();
        let mut buffer = FrameBuffer::new();
        build_links(&field, &mut buffer);
        assert_eq!(buffer.link_count(), 1);
        let link = &buffer.links[0];
        assert!((link.alpha - 0.15).abs() < 1e-3, "alpha={}", link.alpha);
    }

    #[test]
    fn distant_pair_is_not_linked() {
        let field = two_particle_field(
            Vec2::new(0.0, 0.0),
            Vec2::new(160.0, 0.0),
            Theme::Dark,
        );
        let mut buffer = FrameBuffer::new();
        build_links(&field, &mut buffer);
        assert_eq!(buffer.link_count(), 0);
    }

    #[test]
    fn light_theme_scales_link_alpha() {
        let dark = two_particle_field(Vec2::new(0.0, 0.0), Vec2::new(75.0, 0.0), Theme::Dark);
        let light = two_particle_field(Vec2::new(0.0, 0.0), Vec2::new(75.0, 0.0), Theme::Light);
        let mut dark_buf = FrameBuffer::new();
        let mut light_buf = FrameBuffer::new();
        build_links(&dark, &mut dark_buf);
        build_links(&light, &mut light_buf);
        assert!((light_buf.links[0].alpha - dark_buf.links[0].alpha * 0.8).abs() < 1e-6);
    }

    #[test]
    fn pair_count_is_bounded_by_worst_case() {
        let config = FieldConfig {
            count: 10,
            ..Default::default()
        };
        let mut rng = Rng::new(4);
        // tiny surface: every pair within link distance
        let field = Field::new(config, Theme::Dark, 10.0, 10.0, &mut rng);
        let mut buffer = FrameBuffer::new();
        build_links(&field, &mut buffer);
        assert_eq!(buffer.link_count(), 10 * 9 / 2);
    }
}
