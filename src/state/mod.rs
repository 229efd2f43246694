//! State management module
//!
//! This module contains the countdown and display state structures.

pub mod countdown_state;
pub mod display_state;

// Re-export main types
pub use countdown_state::CountdownState;
pub use display_state::DisplayState;
