//! Celebrity game implementation.

use serde::{Deserialize, Serialize};

use crate::core::GameRng;
use crate::provider::ClueProvider;

use super::roster::{Celebrity, CelebrityId, CelebrityRegistry};

/// Builder for creating a CelebrityGame.
///
/// Entries whose name or clue is blank after trimming are rejected at
/// `add_celebrity` and never enter the roster.
pub struct CelebrityGameBuilder {
    entries: Vec<(String, String)>,
    shuffle: bool,
}

impl Default for CelebrityGameBuilder {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
            shuffle: true,
        }
    }
}

impl CelebrityGameBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a celebrity: the answer name and the clue shown for it.
    ///
    /// Blank names or clues are rejected.
    #[must_use]
    pub fn add_celebrity(mut self, name: impl Into<String>, clue: impl Into<String>) -> Self {
        let name = name.into();
        let clue = clue.into();
        if !name.trim().is_empty() && !clue.trim().is_empty() {
            self.entries.push((name, clue));
        }
        self
    }

    /// Control whether the draw order is shuffled (default true).
    #[must_use]
    pub fn shuffle(mut self, shuffle: bool) -> Self {
        self.shuffle = shuffle;
        self
    }

    /// Build the game with a deterministic draw order for `seed`.
    #[must_use]
    pub fn build(self, seed: u64) -> CelebrityGame {
        let mut registry = CelebrityRegistry::new();
        for (name, clue) in &self.entries {
            registry.add(name.clone(), clue.clone());
        }

        let mut draw_order = registry.ids();
        if self.shuffle {
            GameRng::new(seed).shuffle(&mut draw_order);
        }

        CelebrityGame {
            registry,
            draw_order,
            next_index: 0,
            current: None,
        }
    }
}

/// The celebrity guessing game: roster plus draw state.
///
/// Implements [`ClueProvider`]: the controller draws clues in the
/// built order and checks guesses against the celebrity currently in
/// play. Matching trims whitespace and ignores ASCII case.
///
/// ## Example
///
/// ```
/// use rust_trivia::games::celebrity::CelebrityGameBuilder;
/// use rust_trivia::provider::ClueProvider;
///
/// let mut game = CelebrityGameBuilder::new()
///     .add_celebrity("Amelia Earhart", "First woman to fly the Atlantic solo")
///     .shuffle(false)
///     .build(42);
///
/// let clue = game.next_clue().unwrap();
/// assert!(clue.contains("Atlantic"));
/// assert!(game.evaluate("  amelia earhart "));
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CelebrityGame {
    /// Roster definitions.
    registry: CelebrityRegistry,

    /// Draw order fixed at build time.
    draw_order: Vec<CelebrityId>,

    /// Position of the next undrawn entry in `draw_order`.
    next_index: usize,

    /// The entry currently in play.
    current: Option<CelebrityId>,
}

impl CelebrityGame {
    /// The roster registry.
    #[must_use]
    pub fn registry(&self) -> &CelebrityRegistry {
        &self.registry
    }

    /// The celebrity currently in play.
    #[must_use]
    pub fn current(&self) -> Option<&Celebrity> {
        self.current.and_then(|id| self.registry.get(id))
    }

    /// Total roster size.
    #[must_use]
    pub fn roster_size(&self) -> usize {
        self.draw_order.len()
    }

    /// Rewind the deck to its built draw order for another round.
    ///
    /// The controller's reset never reaches into the provider; hosts
    /// call this before resetting when they want a replay.
    pub fn restock(&mut self) {
        self.next_index = 0;
        self.current = None;
    }

    fn matches(guess: &str, answer: &str) -> bool {
        guess.trim().eq_ignore_ascii_case(answer.trim())
    }
}

impl ClueProvider for CelebrityGame {
    fn evaluate(&self, guess: &str) -> bool {
        match self.current() {
            Some(celebrity) => Self::matches(guess, &celebrity.name),
            None => false,
        }
    }

    fn next_clue(&mut self) -> Option<String> {
        let id = *self.draw_order.get(self.next_index)?;
        self.next_index += 1;
        self.current = Some(id);
        self.registry.get(id).map(|c| c.clue.clone())
    }

    fn remaining_count(&self) -> usize {
        self.draw_order.len() - self.next_index
    }
}
