//! Countdown state structure and management

/// Countdown state tracked by the engine
///
/// `remaining_seconds` starts at a negative sentinel until a valid duration
/// is set; while a countdown runs it only ever decreases.
#[derive(Debug, Clone)]
pub struct CountdownState {
    pub remaining_seconds: i64,
    pub finished: bool,
    pub running: bool,
}

impl CountdownState {
    /// Create a new state with no duration set
    pub fn new() -> Self {
        Self {
            remaining_seconds: -1,
            finished: false,
            running: false,
        }
    }

    /// Check whether a usable duration has been set
    pub fn has_valid_duration(&self) -> bool {
        self.remaining_seconds > 0
    }

    /// Check if a countdown is currently running
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Check if the last countdown ran to completion
    pub fn is_finished(&self) -> bool {
        self.finished
    }
}

impl Default for CountdownState {
    fn default() -> Self {
        Self::new()
    }
}
