//! Celebrity guessing game: the shipped clue provider.
//!
//! A roster of celebrities, each with an answer name and a clue. The
//! deck is drawn in a seeded shuffle order; the player must name the
//! celebrity behind each clue before the countdown lapses.
//!
//! - Matching is trimmed and case-insensitive
//! - Identical seeds produce identical draw orders
//! - `restock()` rebuilds the deck so a host can replay after a
//!   terminal outcome

mod game;
mod roster;

pub use game::{CelebrityGame, CelebrityGameBuilder};
pub use roster::{Celebrity, CelebrityId, CelebrityRegistry};
