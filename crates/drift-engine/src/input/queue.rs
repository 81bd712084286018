/// Pointer notifications from the page, in surface-relative coordinates.
/// The engine consumes x/y only.
#[derive(Debug, Clone, Copy)]
pub enum InputEvent {
    /// The cursor moved to (x, y). Drives the field nudge and the cursor trail.
    PointerMove { x: f32, y: f32 },
    /// A press landed at (x, y). Drives the confetti burst.
    PointerDown { x: f32, y: f32 },
}

/// A queue of pointer events.
/// JS pushes events as they arrive; the runner drains them at the top of each
/// tick, in arrival order. Single logical thread, run-to-completion callbacks:
/// whether a move lands before or after a given frame is whatever the host
/// event queue delivered, and no further ordering is promised.
pub struct InputQueue {
    events: Vec<InputEvent>,
}

impl InputQueue {
    pub fn new() -> Self {
        Self {
            events: Vec::with_capacity(32),
        }
    }

    /// Push a new event (called from JS via the wasm exports).
    pub fn push(&mut self, event: InputEvent) {
        self.events.push(event);
    }

    /// Drain all pending events. Returns a Vec and clears the queue.
    pub fn drain(&mut self) -> Vec<InputEvent> {
        std::mem::take(&mut self.events)
    }

    /// Iterate over pending events without consuming them.
    pub fn iter(&self) -> impl Iterator<Item = &InputEvent> {
        self.events.iter()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }
}

impl Default for InputQueue {
    fn default() -> Self {
        Self::new()
    }
}
