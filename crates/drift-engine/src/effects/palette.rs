//! The page's accent colors, shared by the overlay effects.

use crate::core::rng::Rng;
use crate::core::theme::Rgba;

/// `#8b5cf6`
pub const VIOLET: Rgba = Rgba::opaque(0x8b, 0x5c, 0xf6);
/// `#06b6d4`
pub const CYAN: Rgba = Rgba::opaque(0x06, 0xb6, 0xd4);
/// `#ec4899`
pub const PINK: Rgba = Rgba::opaque(0xec, 0x48, 0x99);
/// `#22c55e`
pub const GREEN: Rgba = Rgba::opaque(0x22, 0xc5, 0x5e);
/// `#f59e0b`
pub const AMBER: Rgba = Rgba::opaque(0xf5, 0x9e, 0x0b);
/// `#ef4444`
pub const RED: Rgba = Rgba::opaque(0xef, 0x44, 0x44);

/// Confetti cycles through all six accents.
pub const CONFETTI: [Rgba; 6] = [VIOLET, CYAN, PINK, GREEN, AMBER, RED];
/// The cursor trail omits red.
pub const TRAIL: [Rgba; 5] = [VIOLET, CYAN, PINK, GREEN, AMBER];
/// Sparkles use the four brightest accents.
pub const SPARKLE: [Rgba; 4] = [VIOLET, CYAN, PINK, AMBER];

/// Pick a uniformly random entry.
pub fn pick(palette: &[Rgba], rng: &mut Rng) -> Rgba {
    palette[rng.next_int(palette.len() as u32) as usize]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accents_match_page_hex_values() {
        assert_eq!((VIOLET.r, VIOLET.g, VIOLET.b), (139, 92, 246));
        assert_eq!((AMBER.r, AMBER.g, AMBER.b), (245, 158, 11));
    }

    #[test]
    fn pick_stays_in_palette() {
        let mut rng = Rng::new(11);
        for _ in 0..100 {
            let c = pick(&CONFETTI, &mut rng);
            assert!(CONFETTI.contains(&c));
        }
    }
}
