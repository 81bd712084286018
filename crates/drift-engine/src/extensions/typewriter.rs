/// Delay after appending a character, ms.
pub const TYPE_MS: u32 = 100;
/// Delay after removing a character, ms.
pub const DELETE_MS: u32 = 50;
/// Hold at a fully typed word, ms.
pub const HOLD_MS: u32 = 2000;
/// Pause before starting the next word, ms.
pub const SWITCH_MS: u32 = 500;

/// The hero typing loop as an explicit state machine over a word list.
///
/// The host owns the timer: each `step()` applies one character's worth of
/// progress and returns how long to wait before calling it again. Wraps
/// around the word list forever.
pub struct Typewriter {
    words: Vec<String>,
    word: usize,
    chars: usize,
    deleting: bool,
}

impl Typewriter {
    pub fn new(words: Vec<String>) -> Self {
        Typewriter {
            words,
            word: 0,
            chars: 0,
            deleting: false,
        }
    }

    /// The currently visible prefix.
    pub fn text(&self) -> String {
        self.words
            .get(self.word)
            .map(|w| w.chars().take(self.chars).collect())
            .unwrap_or_default()
    }

    /// Advance one character and return the delay until the next step, in ms.
    /// An empty word list is a permanent no-op at the hold cadence.
    pub fn step(&mut self) -> u32 {
        let Some(current) = self.words.get(self.word) else {
            return HOLD_MS;
        };
        let len = current.chars().count();

        let mut delay = if self.deleting {
            self.chars = self.chars.saturating_sub(1);
            DELETE_MS
        } else {
            self.chars = (self.chars + 1).min(len);
            TYPE_MS
        };

        if !self.deleting && self.chars == len {
            self.deleting = true;
            delay = HOLD_MS;
        } else if self.deleting && self.chars == 0 {
            self.deleting = false;
            self.word = (self.word + 1) % self.words.len();
            delay = SWITCH_MS;
        }

        delay
    }
}
