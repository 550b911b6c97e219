//! Typewriter state machine.

use super::words::{RotatingWord, WordList};

/// Where the typewriter is in its cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Phase {
    /// Appending one character per step
    Typing,
    /// Holding the full word
    Pause,
    /// Removing one character per step
    Deleting,
    /// Moving to the next word and swapping its color
    Advance,
}

/// Visible change produced by one step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Replace the element's text with the current buffer
    Text(String),
    /// Replace the previous word's color with the next word's
    Color { from: String, to: String },
}

/// Pure typewriter state: current word, how much of it is shown, and phase.
///
/// Every call to [`step`](Typewriter::step) performs the action of the current
/// phase; the caller is responsible for waiting the phase's delay first.
#[derive(Debug, Clone)]
pub struct Typewriter {
    words: WordList,
    index: usize,
    typed: usize,
    phase: Phase,
    cycles: u64,
}

impl Typewriter {
    /// Start typing the first word from an empty buffer.
    pub fn new(words: WordList) -> Self {
        Self {
            words,
            index: 0,
            typed: 0,
            phase: Phase::Typing,
            cycles: 0,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn word(&self) -> &RotatingWord {
        self.words.get(self.index)
    }

    pub fn words(&self) -> &WordList {
        &self.words
    }

    /// Characters of the current word currently shown.
    pub fn typed(&self) -> usize {
        self.typed
    }

    /// Visible buffer.
    pub fn text(&self) -> &str {
        self.word().prefix(self.typed)
    }

    /// Number of completed type/pause/delete/advance cycles.
    pub fn completed_cycles(&self) -> u64 {
        self.cycles
    }

    /// Run the current phase's action and move to the next phase.
    pub fn step(&mut self) -> Option<Effect> {
        match self.phase {
            Phase::Typing => {
                let len = self.word().char_len();
                self.typed = (self.typed + 1).min(len);
                if self.typed == len {
                    self.phase = Phase::Pause;
                }
                Some(Effect::Text(self.text().to_string()))
            }
            Phase::Pause => {
                self.phase = Phase::Deleting;
                None
            }
            Phase::Deleting => {
                self.typed = self.typed.saturating_sub(1);
                if self.typed == 0 {
                    self.phase = Phase::Advance;
                }
                Some(Effect::Text(self.text().to_string()))
            }
            Phase::Advance => {
                let from = self.word().color.clone();
                self.index = (self.index + 1) % self.words.len();
                self.cycles += 1;
                self.phase = Phase::Typing;
                Some(Effect::Color {
                    from,
                    to: self.word().color.clone(),
                })
            }
        }
    }
}
