use serde::{Deserialize, Serialize};

/// Tuning for the particle field simulation.
///
/// Defaults reproduce the page's shipped behavior; the bridge accepts a JSON
/// override so the page can retune without rebuilding the wasm module.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FieldConfig {
    /// Fixed population size.
    pub count: usize,
    /// Particles closer than this get a connecting line.
    pub link_distance: f32,
    /// Link alpha at distance zero; falls off linearly to zero at `link_distance`.
    pub link_alpha: f32,
    /// Pointer influence radius.
    pub pointer_radius: f32,
    /// Positional nudge scale per pointer-move event.
    pub pointer_strength: f32,
    /// Particle radius range [lo, hi).
    pub size_range: (f32, f32),
    /// Per-axis velocity range [lo, hi), in canvas units per frame.
    pub speed_range: (f32, f32),
    /// Particle opacity range [lo, hi). Fixed at spawn, never mutated.
    pub opacity_range: (f32, f32),
}

impl Default for FieldConfig {
    fn default() -> Self {
        Self {
            count: 50,
            link_distance: 150.0,
            link_alpha: 0.15,
            pointer_radius: 100.0,
            pointer_strength: 0.03,
            size_range: (1.0, 4.0),
            speed_range: (-0.25, 0.25),
            opacity_range: (0.1, 0.6),
        }
    }
}

/// Tuning for the overlay effects (confetti, sparkles, cursor trail).
#[cfg(feature = "effects")]
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EffectsConfig {
    /// Pieces per confetti burst.
    pub confetti_count: usize,
    /// Downward acceleration, units per second squared.
    pub confetti_gravity: f32,
    /// Per-tick velocity damping factor.
    pub confetti_friction: f32,
    /// Per-tick opacity loss.
    pub confetti_fade: f32,
    /// Launch speed range [lo, hi), units per second.
    pub confetti_speed: (f32, f32),
    /// Piece side/diameter range [lo, hi).
    pub confetti_size: (f32, f32),
    /// Upward bias added to every piece's initial vy.
    pub confetti_kick: f32,
    /// Sparkles per hover burst.
    pub sparkle_count: usize,
    /// Stagger between consecutive sparkles of one burst, seconds.
    pub sparkle_stagger: f32,
    /// Sparkle lifetime after its delay, seconds.
    pub sparkle_lifetime: f32,
    /// Sparkle glyph size range [lo, hi).
    pub sparkle_size: (f32, f32),
    /// Minimum simulated time between trail dots, seconds.
    pub trail_throttle: f32,
    /// Trail dot lifetime, seconds.
    pub trail_lifetime: f32,
    /// Trail dot diameter.
    pub trail_size: f32,
    /// Capacity of the overlay section of the frame buffer.
    pub max_overlay: usize,
}

#[cfg(feature = "effects")]
impl Default for EffectsConfig {
    fn default() -> Self {
        Self {
            confetti_count: 30,
            confetti_gravity: 400.0,
            confetti_friction: 0.98,
            confetti_fade: 0.015,
            confetti_speed: (100.0, 300.0),
            confetti_size: (5.0, 15.0),
            confetti_kick: -150.0,
            sparkle_count: 5,
            sparkle_stagger: 0.05,
            sparkle_lifetime: 0.8,
            sparkle_size: (8.0, 18.0),
            trail_throttle: 0.05,
            trail_lifetime: 0.5,
            trail_size: 12.0,
            max_overlay: 256,
        }
    }
}

/// Complete engine configuration, loadable from a JSON string at runtime.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    pub field: FieldConfig,
    #[cfg(feature = "effects")]
    pub effects: EffectsConfig,
}

impl SimConfig {
    /// Parse a configuration from a JSON string. Unknown keys are ignored;
    /// missing keys keep their defaults.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}
