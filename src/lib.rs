//! Countdown Clock - a four-digit MM:SS countdown timer engine
//!
//! The engine holds a remaining duration in seconds, decrements it once per
//! second on a background tick task, and publishes four-digit display
//! snapshots (tens/units of minutes and seconds) to subscribers.

pub mod config;
pub mod display;
pub mod engine;
pub mod state;
pub mod tasks;
pub mod utils;

// Re-export commonly used types
pub use config::Config;
pub use display::DigitFrame;
pub use engine::{CountdownEngine, CountdownHandle, DurationError};
pub use state::DisplayState;
pub use utils::signals::shutdown_signal;
