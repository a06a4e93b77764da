//! # rust-trivia
//!
//! A timed single-round guessing game engine.
//!
//! ## Design Principles
//!
//! 1. **Core owns policy, not presentation**: widget layout, fonts and
//!    rendering live behind the [`RoundView`] seam; the core only emits
//!    notifications after each mutation.
//!
//! 2. **Providers own content**: clue supply and answer matching are
//!    behind the [`ClueProvider`] seam. The engine never hardcodes a
//!    clue set.
//!
//! 3. **Deterministic transitions**: every operation takes the current
//!    instant explicitly and deck shuffles are seeded, so any round can
//!    be replayed exactly.
//!
//! ## Architecture
//!
//! - **Serialized event stream**: ticks and guesses arrive one at a
//!   time on a single control thread; no locking anywhere.
//!
//! - **Typed events**: [`RoundEvent`] variants replace branching on
//!   event-source identity.
//!
//! - **Persistent transcript**: `im::Vector` history gives O(1)
//!   snapshots for display.
//!
//! ## Modules
//!
//! - `core`: Round state, outcome, transcript, events, RNG, configuration
//! - `provider`: ClueProvider trait for clue supplies
//! - `view`: Notifications and the RoundView presentation seam
//! - `timer`: CountdownTimer tick source
//! - `controller`: RoundController state machine
//! - `games`: Shipped games (celebrity guessing)

pub mod controller;
pub mod core;
pub mod games;
pub mod provider;
pub mod timer;
pub mod view;

// Re-export commonly used types
pub use crate::core::{
    GameRng, GuessRecord, Outcome, Round, RoundConfig, RoundEvent, Transcript,
};

pub use crate::controller::{RoundController, RoundError};

pub use crate::provider::ClueProvider;

pub use crate::timer::CountdownTimer;

pub use crate::view::{Notification, Notifications, NullView, RoundView};

pub use crate::games::celebrity::{
    Celebrity, CelebrityGame, CelebrityGameBuilder, CelebrityId, CelebrityRegistry,
};
