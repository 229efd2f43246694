//! Countdown engine: duration validation, start/stop, display publishing
//!
//! The engine mirrors the original controller contract: a duration is set
//! before starting, the tick task decrements it once per second, and display
//! snapshots flow to subscribers over a watch channel. The canonical duration
//! unit is seconds; [`CountdownEngine::set_duration_mins`] is the documented
//! minute-based conversion.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use thiserror::Error;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::{info, warn};

use crate::display::DigitFrame;
use crate::state::{CountdownState, DisplayState};
use crate::tasks::countdown_tick_task;

/// Smallest accepted minute-based duration
pub const MIN_MINUTES: i64 = 1;
/// Largest accepted minute-based duration
pub const MAX_MINUTES: i64 = 99;
/// Largest accepted second-based duration (99 minutes 59 seconds)
pub const MAX_SECONDS: i64 = 5999;

/// Rejection of an out-of-range duration input
///
/// Rejection never mutates engine state; the previously set duration (if
/// any) stays usable.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DurationError {
    #[error("minute value {0} outside accepted range 1..=99")]
    MinutesOutOfRange(i64),
    #[error("second value {0} outside accepted range 1..=5999")]
    SecondsOutOfRange(i64),
}

/// Countdown engine holding the remaining duration and the display channel
#[derive(Debug)]
pub struct CountdownEngine {
    state: Mutex<CountdownState>,
    display_tx: watch::Sender<DisplayState>,
    /// Keep one receiver alive so publishing never hits a closed channel
    _display_rx: watch::Receiver<DisplayState>,
}

impl CountdownEngine {
    /// Create an engine with no duration set
    pub fn new() -> Self {
        let (display_tx, display_rx) = watch::channel(DisplayState::new());

        Self {
            state: Mutex::new(CountdownState::new()),
            display_tx,
            _display_rx: display_rx,
        }
    }

    // The lock is only held for short field updates that cannot panic, so a
    // poisoned mutex still carries a consistent state.
    fn lock_state(&self) -> MutexGuard<'_, CountdownState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Set the countdown duration in seconds, the canonical unit
    ///
    /// Accepts `1..=5999` (anything longer would not fit the two minute
    /// digits). Out-of-range input is rejected without touching state.
    /// Intended to be called before [`CountdownEngine::start`]; a valid call
    /// also clears the completion flag for the next run.
    pub fn set_duration_secs(&self, seconds: i64) -> Result<(), DurationError> {
        if seconds <= 0 || seconds > MAX_SECONDS {
            warn!("Rejecting duration of {}s: outside accepted range", seconds);
            return Err(DurationError::SecondsOutOfRange(seconds));
        }

        let mut state = self.lock_state();
        state.remaining_seconds = seconds;
        state.finished = false;
        info!("Countdown duration set to {}s", seconds);
        Ok(())
    }

    /// Set the countdown duration in whole minutes (`1..=99`)
    ///
    /// Convenience conversion onto [`CountdownEngine::set_duration_secs`].
    pub fn set_duration_mins(&self, minutes: i64) -> Result<(), DurationError> {
        if !(MIN_MINUTES..=MAX_MINUTES).contains(&minutes) {
            warn!(
                "Rejecting duration of {}min: outside accepted range",
                minutes
            );
            return Err(DurationError::MinutesOutOfRange(minutes));
        }
        self.set_duration_secs(minutes * 60)
    }

    /// Subscribe to display snapshots
    ///
    /// The tick task is the only writer; any number of renderers can await
    /// changes on their own context.
    pub fn subscribe(&self) -> watch::Receiver<DisplayState> {
        self.display_tx.subscribe()
    }

    /// Start the countdown, returning an owned handle to the tick task
    ///
    /// Returns `None` (logging a diagnostic, not an error) when no valid
    /// duration is set or a countdown is already running.
    pub fn start(self: &Arc<Self>) -> Option<CountdownHandle> {
        {
            let mut state = self.lock_state();
            if state.is_running() {
                warn!("Start requested while a countdown is already running, ignoring");
                return None;
            }
            if !state.has_valid_duration() {
                warn!("Start requested without a valid duration, ignoring");
                return None;
            }
            state.running = true;
        }

        let (cancel_tx, cancel_rx) = watch::channel(false);
        let engine = Arc::clone(self);
        let task = tokio::spawn(async move {
            countdown_tick_task(engine, cancel_rx).await;
        });

        info!("Countdown started");
        Some(CountdownHandle { cancel_tx, task })
    }

    /// Get the remaining duration in seconds (negative once exhausted or unset)
    pub fn remaining_seconds(&self) -> i64 {
        self.lock_state().remaining_seconds
    }

    /// Check if the last countdown ran to completion
    pub fn is_finished(&self) -> bool {
        self.lock_state().is_finished()
    }

    /// Check if a countdown is currently running
    pub fn is_running(&self) -> bool {
        self.lock_state().is_running()
    }

    /// Publish a live frame to all subscribers
    pub(crate) fn publish_frame(&self, frame: DigitFrame) {
        let update = DisplayState {
            digits: Some(frame),
            active: true,
            finished: false,
        };
        if let Err(e) = self.display_tx.send(update) {
            warn!("Failed to send display update: {}", e);
        }
    }

    /// Take one second off the remaining duration
    pub(crate) fn decrement(&self) {
        self.lock_state().remaining_seconds -= 1;
    }

    /// Terminal transition: the duration is exhausted
    pub(crate) fn finish(&self) {
        {
            let mut state = self.lock_state();
            state.running = false;
            state.finished = true;
        }
        // Last rendered digits stay visible under the stopped styling.
        self.display_tx.send_modify(|display| {
            display.active = false;
            display.finished = true;
        });
        info!("Countdown finished");
    }

    /// Manual stop: mark the display inactive without the completion flag
    pub(crate) fn mark_stopped(&self) {
        {
            let mut state = self.lock_state();
            state.running = false;
        }
        self.display_tx.send_modify(|display| display.active = false);
        info!("Countdown stopped");
    }
}

impl Default for CountdownEngine {
    fn default() -> Self {
        Self::new()
    }
}

/// Owned handle to a running countdown
///
/// Returned by [`CountdownEngine::start`] and held by the caller; consume it
/// with [`CountdownHandle::stop`] to cancel early. Dropping the handle also
/// cancels the run.
#[derive(Debug)]
pub struct CountdownHandle {
    cancel_tx: watch::Sender<bool>,
    task: JoinHandle<()>,
}

impl CountdownHandle {
    /// Cancel the tick task and wait for it to wind down
    ///
    /// Safe to call after the countdown already reached its terminal state;
    /// the cancel signal is simply dropped and the join returns immediately.
    pub async fn stop(self) {
        let _ = self.cancel_tx.send(true);
        if let Err(e) = self.task.await {
            warn!("Countdown task ended abnormally: {}", e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn minute_durations_accepted_between_1_and_99() {
        let engine = CountdownEngine::new();

        assert_eq!(
            engine.set_duration_mins(0),
            Err(DurationError::MinutesOutOfRange(0))
        );
        assert_eq!(
            engine.set_duration_mins(100),
            Err(DurationError::MinutesOutOfRange(100))
        );
        assert_eq!(
            engine.set_duration_mins(-3),
            Err(DurationError::MinutesOutOfRange(-3))
        );

        assert!(engine.set_duration_mins(1).is_ok());
        assert_eq!(engine.remaining_seconds(), 60);
        assert!(engine.set_duration_mins(99).is_ok());
        assert_eq!(engine.remaining_seconds(), 99 * 60);
    }

    #[test]
    fn second_durations_accepted_up_to_5999() {
        let engine = CountdownEngine::new();

        assert_eq!(
            engine.set_duration_secs(0),
            Err(DurationError::SecondsOutOfRange(0))
        );
        assert_eq!(
            engine.set_duration_secs(-1),
            Err(DurationError::SecondsOutOfRange(-1))
        );
        assert_eq!(
            engine.set_duration_secs(6000),
            Err(DurationError::SecondsOutOfRange(6000))
        );

        assert!(engine.set_duration_secs(1).is_ok());
        assert!(engine.set_duration_secs(59).is_ok());
        assert!(engine.set_duration_secs(60).is_ok());
        assert!(engine.set_duration_secs(5999).is_ok());
        assert_eq!(engine.remaining_seconds(), 5999);
    }

    #[test]
    fn rejected_input_leaves_prior_duration_untouched() {
        let engine = CountdownEngine::new();
        engine.set_duration_secs(10).unwrap();

        assert!(engine.set_duration_secs(0).is_err());
        assert!(engine.set_duration_mins(100).is_err());
        assert_eq!(engine.remaining_seconds(), 10);
    }

    #[test]
    fn setting_a_duration_clears_the_completion_flag() {
        let engine = CountdownEngine::new();
        engine.finish();
        assert!(engine.is_finished());

        engine.set_duration_secs(5).unwrap();
        assert!(!engine.is_finished());
        assert_eq!(engine.remaining_seconds(), 5);
    }

    #[test]
    fn duration_errors_format_the_rejected_value() {
        assert_eq!(
            DurationError::MinutesOutOfRange(120).to_string(),
            "minute value 120 outside accepted range 1..=99"
        );
        assert_eq!(
            DurationError::SecondsOutOfRange(0).to_string(),
            "second value 0 outside accepted range 1..=5999"
        );
    }
}
