//! Rotating-word typewriter.
//!
//! The hero headline cycles through a list of `(word, color)` pairs, typing
//! each word out, holding it, deleting it and moving on to the next:
//!
//! ```text
//!   ┌────────┐ full  ┌───────┐       ┌──────────┐ empty ┌─────────┐
//!   │ Typing │──────▶│ Pause │──────▶│ Deleting │──────▶│ Advance │
//!   └────────┘       └───────┘       └──────────┘       └─────────┘
//!        ▲                                                    │
//!        └────────────────────────────────────────────────────┘
//! ```
//!
//! [`Typewriter`] is the pure state machine; [`run_typewriter`] is the single
//! scheduling loop that drives it against a [`Clock`] until its cancellation
//! token fires.

mod clock;
mod machine;
mod runner;
mod words;

use std::time::Duration;

use serde::{Deserialize, Serialize};

pub use clock::{Clock, VirtualClock};
pub use machine::{Effect, Phase, Typewriter};
pub use runner::{run_typewriter, TypewriterView};
pub use words::{RotatingWord, WordList, COLORS_ATTRIBUTE, WORDS_ATTRIBUTE};

/// Class carrying a word's color, e.g. `color-green`.
pub fn color_class(prefix: &str, color: &str) -> String {
    format!("{prefix}{color}")
}

/// Delays of the typewriter cycle, in milliseconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TypewriterTiming {
    /// Wait after page readiness before the first character
    pub initial_delay_ms: u64,
    /// Between typed characters
    pub type_ms: u64,
    /// Full word held on screen
    pub pause_ms: u64,
    /// Between deleted characters
    pub delete_ms: u64,
    /// Between the last deletion and switching to the next word
    pub advance_ms: u64,
}

impl Default for TypewriterTiming {
    fn default() -> Self {
        Self {
            initial_delay_ms: 3000,
            type_ms: 100,
            pause_ms: 2000,
            delete_ms: 50,
            advance_ms: 0,
        }
    }
}

impl TypewriterTiming {
    pub fn initial_delay(&self) -> Duration {
        Duration::from_millis(self.initial_delay_ms)
    }

    /// Delay spent in `phase` before its action runs.
    pub fn delay(&self, phase: Phase) -> Duration {
        let ms = match phase {
            Phase::Typing => self.type_ms,
            Phase::Pause => self.pause_ms,
            Phase::Deleting => self.delete_ms,
            Phase::Advance => self.advance_ms,
        };
        Duration::from_millis(ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_timing_table() {
        let timing = TypewriterTiming::default();
        assert_eq!(timing.initial_delay(), Duration::from_millis(3000));
        assert_eq!(timing.delay(Phase::Typing), Duration::from_millis(100));
        assert_eq!(timing.delay(Phase::Pause), Duration::from_millis(2000));
        assert_eq!(timing.delay(Phase::Deleting), Duration::from_millis(50));
        assert_eq!(timing.delay(Phase::Advance), Duration::ZERO);
    }

    #[test]
    fn test_color_class() {
        assert_eq!(color_class("color-", "green"), "color-green");
    }
}
