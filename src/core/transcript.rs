//! Guess transcript: append-only history of guess/result pairs.
//!
//! Used for:
//! - Presentation (the scrolling guess area)
//! - Replay/debugging
//!
//! Uses `im::Vector` so a presentation layer can take an O(1) snapshot
//! of the history without blocking further appends.

use im::Vector;
use serde::{Deserialize, Serialize};

/// A recorded guess with its evaluation result.
///
/// One record is appended per submitted guess while the round is in
/// progress. `clue` is the clue shown alongside the result: the next
/// clue on a correct guess, the current clue re-shown on an incorrect
/// one, and empty on the guess that wins the round.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GuessRecord {
    /// The literal guess text as submitted.
    pub guess: String,

    /// Whether the clue provider accepted the guess.
    pub correct: bool,

    /// The banner message shown with the result.
    pub message: String,

    /// The clue displayed with the result.
    pub clue: String,

    /// Sequence number within the round (for ordering).
    pub sequence: u32,
}

/// Append-only ordered guess history for one round.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Transcript {
    records: Vector<GuessRecord>,
    next_sequence: u32,
}

impl Transcript {
    /// Create an empty transcript.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a guess record, assigning the next sequence number.
    ///
    /// Returns the sequence number assigned.
    pub fn record(
        &mut self,
        guess: impl Into<String>,
        correct: bool,
        message: impl Into<String>,
        clue: impl Into<String>,
    ) -> u32 {
        let sequence = self.next_sequence;
        self.next_sequence += 1;
        self.records.push_back(GuessRecord {
            guess: guess.into(),
            correct,
            message: message.into(),
            clue: clue.into(),
            sequence,
        });
        sequence
    }

    /// Number of recorded guesses.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Check if no guesses have been recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Get a record by position.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&GuessRecord> {
        self.records.get(index)
    }

    /// The most recent record.
    #[must_use]
    pub fn last(&self) -> Option<&GuessRecord> {
        self.records.back()
    }

    /// Iterate over records in append order.
    pub fn iter(&self) -> impl Iterator<Item = &GuessRecord> {
        self.records.iter()
    }

    /// Take an O(1) snapshot of the history.
    #[must_use]
    pub fn snapshot(&self) -> Vector<GuessRecord> {
        self.records.clone()
    }
}
