use crate::core::field::Field;
use crate::renderer::frame::{DiscInstance, FrameBuffer};

/// Rebuild the disc section from the live population: one filled disc per
/// particle at its current position, size, and color. The section is cleared
/// and fully rewritten; the JS side clears the canvas before replaying it,
/// which together realize the clear-then-draw frame.
pub fn build_discs(field: &Field, buffer: &mut FrameBuffer) {
    buffer.discs.clear();
    for p in field.particles() {
        buffer.discs.push(DiscInstance::new(p.pos, p.size, p.color));
    }
}
