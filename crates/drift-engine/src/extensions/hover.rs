//! Pointer-driven hover math for the page's micro-interactions.
//!
//! Pure functions over element-relative cursor positions; the page applies
//! the results as CSS transforms.

use glam::Vec2;

/// Fraction of the cursor's offset from center that a magnetic button follows.
pub const MAGNETIC_PULL: f32 = 0.2;

/// Tilt divisor: cursor offset in units per degree of card rotation.
pub const TILT_DIVISOR: f32 = 10.0;

/// Cap on how far a googly-eye pupil wanders from its rest position.
pub const PUPIL_RANGE: f32 = 8.0;

/// Magnetic button pull: the translation for a cursor at `cursor` inside an
/// element of the given `size` (both element-relative).
pub fn magnetic_offset(size: Vec2, cursor: Vec2) -> Vec2 {
    (cursor - size * 0.5) * MAGNETIC_PULL
}

/// Card tilt angles in degrees, `(rotate_x, rotate_y)`, for a cursor inside
/// an element of the given size. Cursor below center tips the card toward the
/// viewer; cursor right of center turns it away.
pub fn tilt_angles(size: Vec2, cursor: Vec2) -> (f32, f32) {
    let center = size * 0.5;
    (
        (cursor.y - center.y) / TILT_DIVISOR,
        (center.x - cursor.x) / TILT_DIVISOR,
    )
}

/// Googly-eye pupil offset toward the cursor: along the cursor direction,
/// with magnitude `hypot / 30` capped at [`PUPIL_RANGE`]. `center` and
/// `cursor` share any common coordinate space.
pub fn pupil_offset(center: Vec2, cursor: Vec2) -> Vec2 {
    let delta = cursor - center;
    let distance = (delta.length() / 30.0).min(PUPIL_RANGE);
    let angle = delta.y.atan2(delta.x);
    Vec2::new(angle.cos(), angle.sin()) * distance
}
