//! Core round types: state, transcript, events, RNG, configuration.
//!
//! This module contains the fundamental building blocks of a round.
//! Hosts configure them via `RoundConfig` rather than modifying the core.

pub mod config;
pub mod event;
pub mod rng;
pub mod round;
pub mod transcript;

pub use config::RoundConfig;
pub use event::RoundEvent;
pub use rng::GameRng;
pub use round::{Outcome, Round};
pub use transcript::{GuessRecord, Transcript};
