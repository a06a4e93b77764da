//! Presentation notifications.
//!
//! The controller never renders anything. After every mutation it emits
//! `Notification` values describing what changed; a presentation layer
//! implements `RoundView` and receives them in emission order. Reads go
//! one way - views never poll round state directly, so a multi-threaded
//! host cannot observe a torn update.
//!
//! ## Key Components
//!
//! - [`Notification`]: a value describing one state change
//! - [`Notifications`]: the batch one operation emits
//! - [`RoundView`]: the callback seam a presentation layer implements
//! - [`NullView`]: ignores everything; useful for headless tests

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// A state change announced to the presentation layer.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Notification {
    /// A clue was put on display (round start or advance).
    ClueDisplayed {
        /// The clue text.
        text: String,
    },
    /// The countdown changed.
    TimeUpdated {
        /// Seconds left on the current clue.
        seconds_remaining: u32,
    },
    /// A guess was evaluated.
    GuessResult {
        /// Whether the provider accepted the guess.
        correct: bool,
        /// The banner message for this result.
        message: String,
        /// The next clue on a correct guess, the current clue re-shown
        /// on an incorrect one, empty on the winning guess.
        clue: String,
    },
    /// The round was won: every clue guessed before the timer lapsed.
    Won,
    /// The round was lost: the countdown reached zero.
    TimedOut,
}

/// Notification batch emitted by one controller operation.
///
/// SmallVec optimizes for the 0-4 notifications a single operation
/// emits without heap allocation.
pub type Notifications = SmallVec<[Notification; 4]>;

/// Presentation layer seam.
///
/// One method per notification variant. The provided [`dispatch`]
/// routes a `Notification` value to the matching method, so hosts can
/// either implement the callbacks or consume values directly.
///
/// [`dispatch`]: RoundView::dispatch
pub trait RoundView {
    /// A clue was put on display.
    fn on_clue_displayed(&mut self, text: &str);

    /// The countdown changed.
    fn on_time_updated(&mut self, seconds_remaining: u32);

    /// A guess was evaluated.
    fn on_guess_result(&mut self, correct: bool, message: &str, clue: &str);

    /// The round was won.
    fn on_won(&mut self);

    /// The round was lost to the timer.
    fn on_timed_out(&mut self);

    /// Route a notification value to the matching callback.
    fn dispatch(&mut self, notification: &Notification) {
        match notification {
            Notification::ClueDisplayed { text } => self.on_clue_displayed(text),
            Notification::TimeUpdated { seconds_remaining } => {
                self.on_time_updated(*seconds_remaining);
            }
            Notification::GuessResult {
                correct,
                message,
                clue,
            } => self.on_guess_result(*correct, message, clue),
            Notification::Won => self.on_won(),
            Notification::TimedOut => self.on_timed_out(),
        }
    }

    /// Route a batch of notifications in emission order.
    fn dispatch_all(&mut self, notifications: &[Notification]) {
        for notification in notifications {
            self.dispatch(notification);
        }
    }
}

/// A view that ignores every notification.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullView;

impl RoundView for NullView {
    fn on_clue_displayed(&mut self, _text: &str) {}
    fn on_time_updated(&mut self, _seconds_remaining: u32) {}
    fn on_guess_result(&mut self, _correct: bool, _message: &str, _clue: &str) {}
    fn on_won(&mut self) {}
    fn on_timed_out(&mut self) {}
}
