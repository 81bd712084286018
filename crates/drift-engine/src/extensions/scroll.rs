//! Scroll-position math for the page chrome: navbar state, active-section
//! highlighting, and parallax offsets.

/// The navbar switches to its compact treatment past this scroll offset.
pub const NAV_SCROLL_THRESHOLD: f32 = 50.0;

/// Sections activate this many units before their top edge reaches the viewport top.
pub const SECTION_LEAD: f32 = 100.0;

pub fn navbar_scrolled(scroll_y: f32) -> bool {
    scroll_y > NAV_SCROLL_THRESHOLD
}

/// One section's on-page extent.
#[derive(Debug, Clone, Copy)]
pub struct Section {
    pub top: f32,
    pub height: f32,
}

/// Index of the section the given scroll position is inside, honoring the
/// activation lead. When sections overlap, the last match wins.
pub fn active_section(scroll_y: f32, sections: &[Section]) -> Option<usize> {
    let mut current = None;
    for (i, s) in sections.iter().enumerate() {
        let top = s.top - SECTION_LEAD;
        if scroll_y >= top && scroll_y < top + s.height {
            current = Some(i);
        }
    }
    current
}

/// Parallax translation for the i-th gradient orb.
pub fn orb_offset(index: usize, scroll_y: f32) -> f32 {
    scroll_y * (0.3 + index as f32 * 0.1)
}

/// Parallax translation and rotation (degrees) for the i-th floating shape.
pub fn shape_offset(index: usize, scroll_y: f32) -> (f32, f32) {
    (scroll_y * (0.2 + index as f32 * 0.05), scroll_y * 0.02)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn navbar_flips_past_threshold() {
        assert!(!navbar_scrolled(0.0));
        assert!(!navbar_scrolled(50.0));
        assert!(navbar_scrolled(50.1));
    }

    #[test]
    fn active_section_honors_lead() {
        let sections = [
            Section { top: 0.0, height: 500.0 },
            Section { top: 500.0, height: 500.0 },
        ];
        assert_eq!(active_section(0.0, &sections), Some(0));
        // 100 units before the second section's top, it takes over
        assert_eq!(active_section(399.0, &sections), Some(0));
        assert_eq!(active_section(400.0, &sections), Some(1));
    }

    #[test]
    fn no_section_past_the_end() {
        let sections = [Section { top: 0.0, height: 300.0 }];
        assert_eq!(active_section(1000.0, &sections), None);
    }

    #[test]
    fn later_section_wins_overlap() {
        let sections = [
            Section { top: 0.0, height: 1000.0 },
            Section { top: 200.0, height: 100.0 },
        ];
        assert_eq!(active_section(150.0, &sections), Some(1));
    }

    #[test]
    fn parallax_speeds_grow_with_index() {
        assert_eq!(orb_offset(0, 100.0), 30.0);
        assert_eq!(orb_offset(2, 100.0), 50.0);
        let (dy0, rot) = shape_offset(0, 100.0);
        assert_eq!(dy0, 20.0);
        assert_eq!(rot, 2.0);
        let (dy3, _) = shape_offset(3, 100.0);
        assert!((dy3 - 35.0).abs() < 1e-4);
    }
}
