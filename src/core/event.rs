//! Round events: the typed entry points into the controller.
//!
//! The round is driven by exactly two external event sources - the
//! countdown timer and the presentation layer - plus the reset control.
//! Each arrives as a tagged variant, so dispatch is a `match` on the
//! event rather than a branch on where it came from.

use serde::{Deserialize, Serialize};

/// An input event for one round.
///
/// ## Example
///
/// ```
/// use rust_trivia::core::RoundEvent;
///
/// let tick = RoundEvent::Tick;
/// let guess = RoundEvent::guess("John Wayne");
///
/// assert!(!tick.is_guess());
/// assert!(guess.is_guess());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoundEvent {
    /// One elapsed countdown interval.
    Tick,
    /// A guess submitted by the player, carrying the literal text.
    Guess(String),
    /// Discard the current round and start over.
    Reset,
}

impl RoundEvent {
    /// Create a guess event.
    #[must_use]
    pub fn guess(text: impl Into<String>) -> Self {
        RoundEvent::Guess(text.into())
    }

    /// Check if this is a guess event.
    #[must_use]
    pub fn is_guess(&self) -> bool {
        matches!(self, RoundEvent::Guess(_))
    }

    /// Check if this is a tick event.
    #[must_use]
    pub fn is_tick(&self) -> bool {
        matches!(self, RoundEvent::Tick)
    }
}
