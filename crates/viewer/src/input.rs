//! Controller select state.

use serde::{Deserialize, Serialize};

/// Which controller a select event came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Hand {
    Left = 0,
    Right = 1,
}

impl Hand {
    /// Map a runtime input-source index to a hand.
    ///
    /// Indices other than 0 and 1 name no controller we track; the
    /// session logs and ignores them.
    pub fn from_index(index: usize) -> Option<Self> {
        match index {
            0 => Some(Hand::Left),
            1 => Some(Hand::Right),
            _ => None,
        }
    }
}

/// Edge-triggered select state for both controllers.
///
/// The runtime reports select as start/end events rather than a pollable
/// button, so the tracker latches each hand's state between events.
/// Repeated identical edges are idempotent.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectTracker {
    pressed: [bool; 2],
}

impl SelectTracker {
    /// Create a tracker with both hands released.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a select-start edge.
    pub fn on_select_start(&mut self, hand: Hand) {
        self.pressed[hand as usize] = true;
    }

    /// Record a select-end edge.
    pub fn on_select_end(&mut self, hand: Hand) {
        self.pressed[hand as usize] = false;
    }

    /// Whether the given hand is holding select.
    #[inline]
    pub fn is_pressed(&self, hand: Hand) -> bool {
        self.pressed[hand as usize]
    }

    /// Whether either hand is holding select.
    #[inline]
    pub fn any_pressed(&self) -> bool {
        self.pressed[0] || self.pressed[1]
    }
}

// ============================================================================
// Tests
// ============================================================================
