use serde::{Deserialize, Serialize};

/// The page's two-valued color scheme. Owned and persisted by the page
/// (the theme toggle writes it to localStorage); the engine only reads it
/// when computing colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

/// 8-bit RGB channels plus a float alpha, matching canvas `rgba()` notation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f32,
}

impl Rgba {
    pub const fn new(r: u8, g: u8, b: u8, a: f32) -> Self {
        Rgba { r, g, b, a }
    }

    pub const fn opaque(r: u8, g: u8, b: u8) -> Self {
        Rgba { r, g, b, a: 1.0 }
    }

    pub const fn with_alpha(self, a: f32) -> Self {
        Rgba {
            r: self.r,
            g: self.g,
            b: self.b,
            a,
        }
    }

    /// CSS color string, e.g. `rgba(139, 92, 246, 0.3)`.
    pub fn css(&self) -> String {
        format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
    }
}

/// Violet accent used by the dark theme.
const DARK_BASE: Rgba = Rgba::opaque(139, 92, 246);
/// Dark goldenrod used by the light theme.
const LIGHT_BASE: Rgba = Rgba::opaque(184, 134, 11);

impl Theme {
    pub fn from_flag(dark: bool) -> Self {
        if dark {
            Theme::Dark
        } else {
            Theme::Light
        }
    }

    pub fn is_dark(&self) -> bool {
        matches!(self, Theme::Dark)
    }

    /// Fill color for a particle of the given opacity.
    /// The light theme renders particles at 0.8x their stored opacity.
    pub fn particle_color(&self, opacity: f32) -> Rgba {
        match self {
            Theme::Dark => DARK_BASE.with_alpha(opacity),
            Theme::Light => LIGHT_BASE.with_alpha(opacity * 0.8),
        }
    }

    /// Stroke color for a proximity link of the given alpha.
    /// Same 0.8x scaling under the light theme, at every distance.
    pub fn link_color(&self, alpha: f32) -> Rgba {
        match self {
            Theme::Dark => DARK_BASE.with_alpha(alpha),
            Theme::Light => LIGHT_BASE.with_alpha(alpha * 0.8),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dark_particle_color_string() {
        assert_eq!(
            Theme::Dark.particle_color(0.3).css(),
            "rgba(139, 92, 246, 0.3)"
        );
    }

    #[test]
    fn light_particle_color_scales_opacity() {
        assert_eq!(
            Theme::Light.particle_color(0.5).css(),
            "rgba(184, 134, 11, 0.4)"
        );
    }

    #[test]
    fn link_color_light_scale_applies_at_every_alpha() {
        for alpha in [0.0, 0.05, 0.1, 0.15] {
            let dark = Theme::Dark.link_color(alpha);
            let light = Theme::Light.link_color(alpha);
            assert!((light.a - dark.a * 0.8).abs() < 1e-6);
        }
    }

    #[test]
    fn theme_flag_round_trip() {
        assert_eq!(Theme::from_flag(true), Theme::Dark);
        assert_eq!(Theme::from_flag(false), Theme::Light);
        assert!(Theme::Dark.is_dark());
        assert!(!Theme::Light.is_dark());
    }

    #[test]
    fn theme_deserializes_from_lowercase() {
        let t: Theme = serde_json::from_str("\"light\"").unwrap();
        assert_eq!(t, Theme::Light);
    }
}
