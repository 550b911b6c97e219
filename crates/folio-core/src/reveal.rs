//! Fade-in-on-view bookkeeping.
//!
//! Each observed card moves from hidden to revealed exactly once. The tracker
//! never forgets a reveal, so scrolling back up cannot hide a card again.

use std::collections::BTreeSet;

/// Slack for ratios reported a hair under the threshold that fired them.
const RATIO_TOLERANCE: f64 = 1e-3;

/// Whether an intersection report is strong enough to reveal its element.
pub fn crosses_threshold(is_intersecting: bool, ratio: f64, threshold: f64) -> bool {
    is_intersecting && ratio + RATIO_TOLERANCE >= threshold
}

/// Revealed state of every observed card, keyed by document-order index.
#[derive(Debug, Clone, Default)]
pub struct RevealTracker {
    threshold: f64,
    revealed: BTreeSet<usize>,
}

impl RevealTracker {
    pub fn new(threshold: f64) -> Self {
        Self {
            threshold,
            revealed: BTreeSet::new(),
        }
    }

    /// Feed one intersection report. Returns `true` only on the transition
    /// into the revealed state; repeats and weak reports return `false`.
    pub fn observe(&mut self, index: usize, is_intersecting: bool, ratio: f64) -> bool {
        if !crosses_threshold(is_intersecting, ratio, self.threshold) {
            return false;
        }
        self.revealed.insert(index)
    }

    pub fn is_revealed(&self, index: usize) -> bool {
        self.revealed.contains(&index)
    }

    pub fn revealed_count(&self) -> usize {
        self.revealed.len()
    }
}
