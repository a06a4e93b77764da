//! Round configuration.
//!
//! Hosts configure a round at startup: countdown length, tick interval,
//! and the banner messages appended to the transcript on each guess
//! result. Defaults match the observed game text.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Configuration for a round.
///
/// ## Example
///
/// ```
/// use std::time::Duration;
/// use rust_trivia::core::RoundConfig;
///
/// let config = RoundConfig::default()
///     .with_starting_seconds(60)
///     .with_tick_interval(Duration::from_millis(500));
///
/// assert_eq!(config.starting_seconds, 60);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundConfig {
    /// Countdown value each clue starts from, in seconds.
    pub starting_seconds: u32,

    /// Real-time length of one countdown tick.
    pub tick_interval: Duration,

    /// Banner message recorded with a correct guess.
    pub success_message: String,

    /// Banner message recorded with an incorrect guess.
    pub retry_message: String,
}

impl Default for RoundConfig {
    fn default() -> Self {
        Self {
            starting_seconds: 30,
            tick_interval: Duration::from_secs(1),
            success_message: "You guessed correctly!!!".to_string(),
            retry_message: "You have chosen poorly, try again!".to_string(),
        }
    }
}

impl RoundConfig {
    /// Create a configuration with default messages and intervals.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the countdown length in seconds.
    #[must_use]
    pub fn with_starting_seconds(mut self, seconds: u32) -> Self {
        assert!(seconds > 0, "Countdown must start above zero");
        self.starting_seconds = seconds;
        self
    }

    /// Set the real-time tick interval.
    #[must_use]
    pub fn with_tick_interval(mut self, interval: Duration) -> Self {
        assert!(!interval.is_zero(), "Tick interval must be non-zero");
        self.tick_interval = interval;
        self
    }

    /// Set the correct-guess banner message.
    #[must_use]
    pub fn with_success_message(mut self, message: impl Into<String>) -> Self {
        self.success_message = message.into();
        self
    }

    /// Set the incorrect-guess banner message.
    #[must_use]
    pub fn with_retry_message(mut self, message: impl Into<String>) -> Self {
        self.retry_message = message.into();
        self
    }
}
