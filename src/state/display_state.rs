//! Display snapshot published to renderers

use serde::{Deserialize, Serialize};

use crate::display::DigitFrame;

/// Snapshot of the rendering surface
///
/// `active` is false when the countdown is stopped or exhausted, so renderers
/// can apply their "stopped" styling; `finished` is the completion signal.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DisplayState {
    pub digits: Option<DigitFrame>,
    pub active: bool,
    pub finished: bool,
}

impl DisplayState {
    /// Create an inactive display with nothing rendered yet
    pub fn new() -> Self {
        Self {
            digits: None,
            active: false,
            finished: false,
        }
    }

    /// Check if the display is showing a live countdown
    pub fn is_active(&self) -> bool {
        self.active
    }
}

impl Default for DisplayState {
    fn default() -> Self {
        Self::new()
    }
}
