//! Digit derivation for the four-label MM:SS readout

use std::fmt;

use serde::{Deserialize, Serialize};

/// The four decimal digits of an MM:SS readout
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DigitFrame {
    pub minute_tens: u8,
    pub minute_units: u8,
    pub second_tens: u8,
    pub second_units: u8,
}

impl DigitFrame {
    /// Derive the digit frame for a remaining-second count
    pub fn from_seconds(remaining: u64) -> Self {
        let minutes = remaining / 60;
        let seconds = remaining % 60;

        Self {
            minute_tens: (minutes / 10) as u8,
            minute_units: (minutes % 10) as u8,
            second_tens: (seconds / 10) as u8,
            second_units: (seconds % 10) as u8,
        }
    }

    /// The digits in label order: minute tens, minute units, second tens, second units
    pub fn digits(&self) -> (u8, u8, u8, u8) {
        (
            self.minute_tens,
            self.minute_units,
            self.second_tens,
            self.second_units,
        )
    }
}

impl fmt::Display for DigitFrame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{}:{}{}",
            self.minute_tens, self.minute_units, self.second_tens, self.second_units
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_renders_as_00_00() {
        let frame = DigitFrame::from_seconds(0);
        assert_eq!(frame.digits(), (0, 0, 0, 0));
        assert_eq!(frame.to_string(), "00:00");
    }

    #[test]
    fn one_minute_splits_into_minute_units() {
        let frame = DigitFrame::from_seconds(60);
        assert_eq!(frame.digits(), (0, 1, 0, 0));
        assert_eq!(frame.to_string(), "01:00");
    }

    #[test]
    fn fifty_nine_seconds_stays_below_a_minute() {
        let frame = DigitFrame::from_seconds(59);
        assert_eq!(frame.digits(), (0, 0, 5, 9));
        assert_eq!(frame.to_string(), "00:59");
    }

    #[test]
    fn largest_accepted_duration_renders_99_59() {
        let frame = DigitFrame::from_seconds(5999);
        assert_eq!(frame.digits(), (9, 9, 5, 9));
        assert_eq!(frame.to_string(), "99:59");
    }

    #[test]
    fn mixed_minutes_and_seconds() {
        let frame = DigitFrame::from_seconds(754);
        assert_eq!(frame.digits(), (1, 2, 3, 4));
        assert_eq!(frame.to_string(), "12:34");
    }
}
