//! Background tasks module
//!
//! This module contains the tick task that drives a running countdown.

pub mod countdown_tick;

// Re-export main functions
pub use countdown_tick::countdown_tick_task;
