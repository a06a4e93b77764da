//! Round state: the single mutable entity of a play-through.
//!
//! ## Round
//!
//! Owns everything that changes while a round is live:
//! - Remaining seconds on the countdown
//! - The clue currently on display
//! - The terminal outcome, once reached
//! - The guess transcript
//!
//! A `Round` is mutated exclusively by `RoundController`; every other
//! component observes it through emitted notifications. It is discarded
//! and replaced wholesale on reset - there is no partial teardown.

use serde::{Deserialize, Serialize};

use super::transcript::{GuessRecord, Transcript};

/// Terminal classification of a round.
///
/// `InProgress` is the only non-terminal state. Once a round reaches
/// `Won` or `TimedOut` it stays there until an external reset replaces
/// the round entirely.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// The round is live and accepting guesses.
    InProgress,
    /// Every clue was guessed correctly before the timer lapsed.
    Won,
    /// The countdown reached zero on some clue.
    TimedOut,
}

impl Outcome {
    /// Check if this outcome is terminal.
    #[must_use]
    pub fn is_terminal(self) -> bool {
        !matches!(self, Outcome::InProgress)
    }

    /// Check if the round is still live.
    #[must_use]
    pub fn is_in_progress(self) -> bool {
        matches!(self, Outcome::InProgress)
    }
}

/// One complete play-through from first clue to a terminal outcome.
///
/// ## Invariants
///
/// - `remaining_seconds` never exceeds the starting value and never wraps
///   below zero.
/// - Input is enabled iff the outcome is `InProgress` and a clue is on
///   display.
/// - Once the outcome is terminal, no mutation method has any effect to
///   have: the controller stops calling them.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Round {
    /// Countdown value each clue starts from.
    starting_seconds: u32,

    /// Seconds left on the current clue.
    remaining_seconds: u32,

    /// Terminal classification; `InProgress` while live.
    outcome: Outcome,

    /// The clue on display. `None` until the round is started.
    current_clue: Option<String>,

    /// Append-only guess history.
    transcript: Transcript,
}

impl Round {
    /// Create a fresh round with a full countdown and empty transcript.
    #[must_use]
    pub fn new(starting_seconds: u32) -> Self {
        Self {
            starting_seconds,
            remaining_seconds: starting_seconds,
            outcome: Outcome::InProgress,
            current_clue: None,
            transcript: Transcript::new(),
        }
    }

    // === Queries ===

    /// Seconds left on the current clue.
    #[must_use]
    pub fn remaining_seconds(&self) -> u32 {
        self.remaining_seconds
    }

    /// Countdown value each clue starts from.
    #[must_use]
    pub fn starting_seconds(&self) -> u32 {
        self.starting_seconds
    }

    /// Current outcome.
    #[must_use]
    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    /// The clue currently on display, if the round has started.
    #[must_use]
    pub fn current_clue(&self) -> Option<&str> {
        self.current_clue.as_deref()
    }

    /// Check if the round has been started (a clue has been displayed).
    #[must_use]
    pub fn started(&self) -> bool {
        self.current_clue.is_some()
    }

    /// Check if guesses are currently accepted.
    ///
    /// True iff the round is in progress and a clue is on display.
    /// Derived rather than stored so it can never disagree with the
    /// outcome.
    #[must_use]
    pub fn input_enabled(&self) -> bool {
        self.outcome.is_in_progress() && self.started()
    }

    /// The guess transcript.
    #[must_use]
    pub fn transcript(&self) -> &Transcript {
        &self.transcript
    }

    // === Transitions (RoundController only) ===

    /// Put a new clue on display and refill the countdown.
    ///
    /// Used for the first clue at start and for every advance on a
    /// correct guess.
    pub fn show_clue(&mut self, text: impl Into<String>) {
        self.current_clue = Some(text.into());
        self.remaining_seconds = self.starting_seconds;
    }

    /// Count down by one second, saturating at zero.
    ///
    /// Returns the new remaining value.
    pub fn count_down(&mut self) -> u32 {
        self.remaining_seconds = self.remaining_seconds.saturating_sub(1);
        self.remaining_seconds
    }

    /// Append a guess record to the transcript.
    ///
    /// Returns the sequence number assigned to the record.
    pub fn record_guess(
        &mut self,
        guess: impl Into<String>,
        correct: bool,
        message: impl Into<String>,
        clue: impl Into<String>,
    ) -> u32 {
        self.transcript.record(guess, correct, message, clue)
    }

    /// Move the round to a terminal outcome.
    ///
    /// Panics if called with `InProgress` - termination is one-way.
    pub fn finish(&mut self, outcome: Outcome) {
        assert!(outcome.is_terminal(), "finish requires a terminal outcome");
        self.outcome = outcome;
    }

    /// The most recent guess record, if any.
    #[must_use]
    pub fn last_guess(&self) -> Option<&GuessRecord> {
        self.transcript.last()
    }
}
