//! Round controller: the single source of truth for round progress.
//!
//! `RoundController` is the only component permitted to mutate `Round`
//! state or declare outcomes. It is driven by a serialized stream of
//! events - countdown ticks and player guesses - and calls out to its
//! `ClueProvider` for clue supply and guess evaluation. Every operation
//! returns the notification batch it emitted, in emission order, for
//! the presentation layer.
//!
//! ## State machine
//!
//! ```text
//! [Init] --start()--> InProgress
//! InProgress --tick(), remaining>0--> InProgress (remaining -= 1)
//! InProgress --tick(), remaining==0--> TimedOut (terminal)
//! InProgress --submit_guess(correct), clues remain--> InProgress (countdown refilled, new clue)
//! InProgress --submit_guess(correct), none remain--> Won (terminal)
//! InProgress --submit_guess(incorrect)--> InProgress (countdown unchanged, same clue)
//! {Won, TimedOut} --reset()--> InProgress
//! ```
//!
//! Inputs outside contract - a guess while input is disabled, a tick
//! after a terminal outcome - are defined no-ops (empty batches), not
//! failures.

use std::time::Instant;

use log::{debug, info};
use smallvec::smallvec;
use thiserror::Error;

use crate::core::{Outcome, Round, RoundConfig, RoundEvent};
use crate::provider::ClueProvider;
use crate::timer::CountdownTimer;
use crate::view::{Notification, Notifications};

/// Failure modes for round control.
///
/// The taxonomy is deliberately narrow: out-of-contract inputs are
/// silent no-ops, so the only error left is an empty clue supply when
/// a round is started.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum RoundError {
    /// The clue provider had no clues when a round was started.
    ///
    /// A precondition violation the host must handle by refilling the
    /// provider; the core does not recover from it.
    #[error("clue provider has no clues to start a round")]
    ProviderExhausted,
}

/// Owns round state, the countdown timer, and the clue provider.
///
/// Generic over the provider so hosts can plug in any clue supply; the
/// shipped [`CelebrityGame`](crate::games::celebrity::CelebrityGame) is
/// one implementation.
///
/// All operations take the current `Instant` explicitly - the
/// controller never reads a clock, which keeps every transition
/// deterministic and testable with synthetic time.
#[derive(Clone, Debug)]
pub struct RoundController<P> {
    provider: P,
    config: RoundConfig,
    round: Round,
    timer: CountdownTimer,
}

impl<P: ClueProvider> RoundController<P> {
    /// Create a controller with an idle round and a stopped timer.
    ///
    /// Nothing happens until [`start`](Self::start) is called.
    #[must_use]
    pub fn new(provider: P, config: RoundConfig) -> Self {
        let round = Round::new(config.starting_seconds);
        let timer = CountdownTimer::new(config.tick_interval);
        Self {
            provider,
            config,
            round,
            timer,
        }
    }

    // === Accessors ===

    /// The current round state.
    #[must_use]
    pub fn round(&self) -> &Round {
        &self.round
    }

    /// The countdown timer.
    #[must_use]
    pub fn timer(&self) -> &CountdownTimer {
        &self.timer
    }

    /// The clue provider.
    #[must_use]
    pub fn provider(&self) -> &P {
        &self.provider
    }

    /// Mutable access to the clue provider, for host-side refills
    /// between rounds.
    pub fn provider_mut(&mut self) -> &mut P {
        &mut self.provider
    }

    /// The round configuration.
    #[must_use]
    pub fn config(&self) -> &RoundConfig {
        &self.config
    }

    // === Operations ===

    /// Start a fresh round.
    ///
    /// Requests the first clue, arms the timer so the first tick lands
    /// one interval after `now`, and emits `ClueDisplayed` followed by
    /// `TimeUpdated`. The previous round and transcript, if any, are
    /// discarded.
    ///
    /// Fails with [`RoundError::ProviderExhausted`] if the provider has
    /// no clues; the current round is left untouched in that case.
    pub fn start(&mut self, now: Instant) -> Result<Notifications, RoundError> {
        let clue = self
            .provider
            .next_clue()
            .ok_or(RoundError::ProviderExhausted)?;

        self.round = Round::new(self.config.starting_seconds);
        self.round.show_clue(clue.clone());
        self.timer.restart(now);
        debug!(
            "round started: {} clues after the current one",
            self.provider.remaining_count()
        );

        Ok(smallvec![
            Notification::ClueDisplayed { text: clue },
            Notification::TimeUpdated {
                seconds_remaining: self.round.remaining_seconds(),
            },
        ])
    }

    /// Discard the current round and start over.
    ///
    /// Valid from any state, including terminal ones. Equivalent to
    /// [`start`](Self::start) plus cancelling any pending ticks first.
    pub fn reset(&mut self, now: Instant) -> Result<Notifications, RoundError> {
        debug!("round reset");
        self.timer.stop();
        self.start(now)
    }

    /// Submit a guess.
    ///
    /// No-op (empty batch) unless input is enabled. Otherwise the guess
    /// is recorded literally and evaluated by the provider:
    ///
    /// - Incorrect: emits `GuessResult` with the retry message and the
    ///   current clue re-shown. The countdown is NOT refilled.
    /// - Correct with clues remaining: advances to the next clue,
    ///   refills the countdown, restarts the timer; emits `GuessResult`,
    ///   `ClueDisplayed`, `TimeUpdated`.
    /// - Correct with no clues remaining: the round is won; emits
    ///   `GuessResult` (empty clue slot) then `Won`, and stops the
    ///   timer.
    pub fn submit_guess(&mut self, guess: &str, now: Instant) -> Notifications {
        if !self.round.input_enabled() {
            return Notifications::new();
        }

        if !self.provider.evaluate(guess) {
            let clue = self.round.current_clue().unwrap_or_default().to_string();
            let message = self.config.retry_message.clone();
            self.round
                .record_guess(guess, false, message.as_str(), clue.as_str());
            return smallvec![Notification::GuessResult {
                correct: false,
                message,
                clue,
            }];
        }

        // Correct guess: a zero remaining count wins; otherwise advance.
        // A provider that reports clues remaining but fails to produce
        // one is treated as exhausted.
        let next = if self.provider.remaining_count() == 0 {
            None
        } else {
            self.provider.next_clue()
        };
        let message = self.config.success_message.clone();

        match next {
            Some(clue) => {
                self.round
                    .record_guess(guess, true, message.as_str(), clue.as_str());
                self.round.show_clue(clue.clone());
                self.timer.restart(now);
                debug!(
                    "clue advanced: {} clues after the current one",
                    self.provider.remaining_count()
                );
                smallvec![
                    Notification::GuessResult {
                        correct: true,
                        message,
                        clue: clue.clone(),
                    },
                    Notification::ClueDisplayed { text: clue },
                    Notification::TimeUpdated {
                        seconds_remaining: self.round.remaining_seconds(),
                    },
                ]
            }
            None => {
                self.round.record_guess(guess, true, message.as_str(), "");
                self.round.finish(Outcome::Won);
                self.timer.stop();
                info!(
                    "round won after {} guesses",
                    self.round.transcript().len()
                );
                smallvec![
                    Notification::GuessResult {
                        correct: true,
                        message,
                        clue: String::new(),
                    },
                    Notification::Won,
                ]
            }
        }
    }

    /// Apply one elapsed countdown interval.
    ///
    /// No-op unless the round is in progress. Decrements the countdown
    /// and emits `TimeUpdated`; at zero the round times out, the timer
    /// stops, and `TimedOut` is emitted. The transition is final: a
    /// guess arriving later in the same scheduling slot is dropped.
    pub fn tick(&mut self) -> Notifications {
        if !self.round.input_enabled() {
            return Notifications::new();
        }

        let remaining = self.round.count_down();
        let mut notifications: Notifications = smallvec![Notification::TimeUpdated {
            seconds_remaining: remaining,
        }];

        if remaining == 0 {
            self.round.finish(Outcome::TimedOut);
            self.timer.stop();
            info!(
                "round timed out after {} guesses",
                self.round.transcript().len()
            );
            notifications.push(Notification::TimedOut);
        }

        notifications
    }

    /// Deliver every tick the timer has accumulated by `now`.
    ///
    /// Ticks are applied one interval at a time, in order; a terminal
    /// transition stops the timer and therefore the delivery loop, so
    /// nothing fires past the end of the round.
    pub fn poll(&mut self, now: Instant) -> Notifications {
        let mut notifications = Notifications::new();
        while self.timer.fire_due(now) {
            notifications.extend(self.tick());
        }
        notifications
    }

    /// Dispatch a [`RoundEvent`] to the matching operation.
    pub fn handle(&mut self, event: RoundEvent, now: Instant) -> Result<Notifications, RoundError> {
        match event {
            RoundEvent::Tick => Ok(self.tick()),
            RoundEvent::Guess(text) => Ok(self.submit_guess(&text, now)),
            RoundEvent::Reset => self.reset(now),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    /// Scripted provider: fixed answer per clue, drawn front to back.
    #[derive(Clone, Debug)]
    struct ScriptedProvider {
        /// (clue, answer) pairs still to be drawn.
        pending: Vec<(String, String)>,
        /// Answer for the clue currently in play.
        current_answer: Option<String>,
    }

    impl ScriptedProvider {
        fn new(pairs: &[(&str, &str)]) -> Self {
            Self {
                pending: pairs
                    .iter()
                    .map(|(clue, answer)| (clue.to_string(), answer.to_string()))
                    .collect(),
                current_answer: None,
            }
        }
    }

    impl ClueProvider for ScriptedProvider {
        fn evaluate(&self, guess: &str) -> bool {
            self.current_answer.as_deref() == Some(guess)
        }

        fn next_clue(&mut self) -> Option<String> {
            if self.pending.is_empty() {
                return None;
            }
            let (clue, answer) = self.pending.remove(0);
            self.current_answer = Some(answer);
            Some(clue)
        }

        fn remaining_count(&self) -> usize {
            self.pending.len()
        }
    }

    fn controller(pairs: &[(&str, &str)]) -> RoundController<ScriptedProvider> {
        RoundController::new(ScriptedProvider::new(pairs), RoundConfig::default())
    }

    #[test]
    fn test_start_emits_clue_and_time() {
        let mut ctrl = controller(&[("clue one", "a"), ("clue two", "b")]);
        let notes = ctrl.start(Instant::now()).unwrap();

        assert_eq!(
            notes.as_slice(),
            &[
                Notification::ClueDisplayed {
                    text: "clue one".to_string()
                },
                Notification::TimeUpdated {
                    seconds_remaining: 30
                },
            ]
        );
        assert!(ctrl.round().input_enabled());
        assert!(ctrl.timer().is_running());
    }

    #[test]
    fn test_start_with_empty_provider_fails() {
        let mut ctrl = controller(&[]);

        assert_eq!(
            ctrl.start(Instant::now()),
            Err(RoundError::ProviderExhausted)
        );
        assert!(!ctrl.round().started());
        assert!(!ctrl.timer().is_running());
    }

    #[test]
    fn test_guess_before_start_is_noop() {
        let mut ctrl = controller(&[("clue", "a")]);
        let notes = ctrl.submit_guess("a", Instant::now());

        assert!(notes.is_empty());
        assert!(ctrl.round().transcript().is_empty());
    }

    #[test]
    fn test_tick_before_start_is_noop() {
        let mut ctrl = controller(&[("clue", "a")]);
        let notes = ctrl.tick();

        assert!(notes.is_empty());
        assert_eq!(ctrl.round().remaining_seconds(), 30);
    }

    #[test]
    fn test_incorrect_guess_keeps_clue_and_countdown() {
        let mut ctrl = controller(&[("clue one", "a"), ("clue two", "b")]);
        let t0 = Instant::now();
        ctrl.start(t0).unwrap();
        ctrl.tick();
        ctrl.tick();
        let deadline = ctrl.timer().next_deadline();

        let notes = ctrl.submit_guess("wrong", t0);

        assert_eq!(
            notes.as_slice(),
            &[Notification::GuessResult {
                correct: false,
                message: "You have chosen poorly, try again!".to_string(),
                clue: "clue one".to_string(),
            }]
        );
        assert_eq!(ctrl.round().remaining_seconds(), 28);
        assert_eq!(ctrl.round().current_clue(), Some("clue one"));
        assert_eq!(ctrl.round().outcome(), Outcome::InProgress);
        // No timer restart on an incorrect guess.
        assert_eq!(ctrl.timer().next_deadline(), deadline);
    }

    #[test]
    fn test_correct_guess_advances_and_refills() {
        let mut ctrl = controller(&[("clue one", "a"), ("clue two", "b")]);
        let t0 = Instant::now();
        ctrl.start(t0).unwrap();
        ctrl.tick();
        ctrl.tick();
        assert_eq!(ctrl.round().remaining_seconds(), 28);

        let t5 = t0 + Duration::from_secs(5);
        let notes = ctrl.submit_guess("a", t5);

        assert_eq!(
            notes.as_slice(),
            &[
                Notification::GuessResult {
                    correct: true,
                    message: "You guessed correctly!!!".to_string(),
                    clue: "clue two".to_string(),
                },
                Notification::ClueDisplayed {
                    text: "clue two".to_string()
                },
                Notification::TimeUpdated {
                    seconds_remaining: 30
                },
            ]
        );
        assert_eq!(ctrl.round().remaining_seconds(), 30);
        assert_eq!(ctrl.round().current_clue(), Some("clue two"));
        // Timer restarted from the guess instant.
        assert_eq!(
            ctrl.timer().next_deadline(),
            Some(t5 + Duration::from_secs(1))
        );
    }

    #[test]
    fn test_winning_guess() {
        let mut ctrl = controller(&[("only clue", "a")]);
        ctrl.start(Instant::now()).unwrap();
        assert_eq!(ctrl.provider().remaining_count(), 0);

        let notes = ctrl.submit_guess("a", Instant::now());

        assert_eq!(
            notes.as_slice(),
            &[
                Notification::GuessResult {
                    correct: true,
                    message: "You guessed correctly!!!".to_string(),
                    clue: String::new(),
                },
                Notification::Won,
            ]
        );
        assert_eq!(ctrl.round().outcome(), Outcome::Won);
        assert!(!ctrl.round().input_enabled());
        assert!(!ctrl.timer().is_running());
    }

    #[test]
    fn test_countdown_to_timeout() {
        let mut ctrl = controller(&[("clue", "a")]);
        ctrl.start(Instant::now()).unwrap();

        for expected in (1..30).rev() {
            let notes = ctrl.tick();
            assert_eq!(
                notes.as_slice(),
                &[Notification::TimeUpdated {
                    seconds_remaining: expected
                }]
            );
        }

        let notes = ctrl.tick();
        assert_eq!(
            notes.as_slice(),
            &[
                Notification::TimeUpdated {
                    seconds_remaining: 0
                },
                Notification::TimedOut,
            ]
        );
        assert_eq!(ctrl.round().outcome(), Outcome::TimedOut);
        assert!(!ctrl.timer().is_running());
    }

    #[test]
    fn test_terminal_round_ignores_everything() {
        let mut ctrl = controller(&[("clue", "a")]);
        ctrl.start(Instant::now()).unwrap();
        for _ in 0..30 {
            ctrl.tick();
        }
        assert_eq!(ctrl.round().outcome(), Outcome::TimedOut);
        let transcript_len = ctrl.round().transcript().len();

        assert!(ctrl.tick().is_empty());
        assert!(ctrl.submit_guess("a", Instant::now()).is_empty());
        assert_eq!(ctrl.round().outcome(), Outcome::TimedOut);
        assert_eq!(ctrl.round().remaining_seconds(), 0);
        assert_eq!(ctrl.round().transcript().len(), transcript_len);
    }

    #[test]
    fn test_poll_delivers_accumulated_ticks() {
        let mut ctrl = controller(&[("clue", "a")]);
        let t0 = Instant::now();
        ctrl.start(t0).unwrap();

        let notes = ctrl.poll(t0 + Duration::from_secs(3));

        assert_eq!(
            notes.as_slice(),
            &[
                Notification::TimeUpdated {
                    seconds_remaining: 29
                },
                Notification::TimeUpdated {
                    seconds_remaining: 28
                },
                Notification::TimeUpdated {
                    seconds_remaining: 27
                },
            ]
        );
    }

    #[test]
    fn test_poll_stops_at_timeout() {
        let mut ctrl = controller(&[("clue", "a")]);
        let t0 = Instant::now();
        ctrl.start(t0).unwrap();

        // Way past the end of the round: exactly 30 ticks, one TimedOut.
        let notes = ctrl.poll(t0 + Duration::from_secs(500));

        let time_updates = notes
            .iter()
            .filter(|n| matches!(n, Notification::TimeUpdated { .. }))
            .count();
        let timeouts = notes
            .iter()
            .filter(|n| matches!(n, Notification::TimedOut))
            .count();
        assert_eq!(time_updates, 30);
        assert_eq!(timeouts, 1);
        assert_eq!(notes.last(), Some(&Notification::TimedOut));
    }

    #[test]
    fn test_reset_from_terminal_state() {
        let mut ctrl = controller(&[("clue one", "a"), ("clue two", "b")]);
        let t0 = Instant::now();
        ctrl.start(t0).unwrap();
        ctrl.submit_guess("wrong", t0);
        for _ in 0..30 {
            ctrl.tick();
        }
        assert_eq!(ctrl.round().outcome(), Outcome::TimedOut);

        let notes = ctrl.reset(t0).unwrap();

        assert_eq!(ctrl.round().outcome(), Outcome::InProgress);
        assert_eq!(ctrl.round().remaining_seconds(), 30);
        assert!(ctrl.round().transcript().is_empty());
        assert_eq!(ctrl.round().current_clue(), Some("clue two"));
        assert!(matches!(notes[0], Notification::ClueDisplayed { .. }));
    }

    #[test]
    fn test_handle_dispatches_events() {
        let mut ctrl = controller(&[("clue one", "a"), ("clue two", "b")]);
        let t0 = Instant::now();
        ctrl.start(t0).unwrap();

        let tick_notes = ctrl.handle(RoundEvent::Tick, t0).unwrap();
        assert_eq!(
            tick_notes.as_slice(),
            &[Notification::TimeUpdated {
                seconds_remaining: 29
            }]
        );

        let guess_notes = ctrl.handle(RoundEvent::guess("a"), t0).unwrap();
        assert!(matches!(
            guess_notes[0],
            Notification::GuessResult { correct: true, .. }
        ));

        let reset_notes = ctrl.handle(RoundEvent::Reset, t0);
        // Both clues drawn already: reset finds the provider exhausted.
        assert_eq!(reset_notes, Err(RoundError::ProviderExhausted));
    }

    #[test]
    fn test_transcript_records_guesses_in_order() {
        let mut ctrl = controller(&[("clue one", "a"), ("clue two", "b")]);
        let t0 = Instant::now();
        ctrl.start(t0).unwrap();

        ctrl.submit_guess("wrong", t0);
        ctrl.submit_guess("a", t0);

        let transcript = ctrl.round().transcript();
        assert_eq!(transcript.len(), 2);
        assert_eq!(transcript.get(0).unwrap().guess, "wrong");
        assert!(!transcript.get(0).unwrap().correct);
        assert_eq!(transcript.get(1).unwrap().guess, "a");
        assert!(transcript.get(1).unwrap().correct);
        assert_eq!(transcript.get(1).unwrap().clue, "clue two");
    }

    #[test]
    fn test_round_error_display() {
        assert_eq!(
            RoundError::ProviderExhausted.to_string(),
            "clue provider has no clues to start a round"
        );
    }
}
