//! Decoupled page-glue helpers: the pure math behind the DOM-side effects.
//! Nothing here touches the simulation or the frame buffer.

mod easing;
mod hover;
mod scroll;
mod typewriter;

pub use easing::Easing;
pub use hover::{magnetic_offset, pupil_offset, tilt_angles, MAGNETIC_PULL, PUPIL_RANGE, TILT_DIVISOR};
pub use scroll::{
    active_section, navbar_scrolled, orb_offset, shape_offset, Section, NAV_SCROLL_THRESHOLD,
    SECTION_LEAD,
};
pub use typewriter::{Typewriter, DELETE_MS, HOLD_MS, SWITCH_MS, TYPE_MS};
