//! Wall-clock time as the face displays it.

use serde::{Deserialize, Serialize};

/// Time format for the clock display.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TimeFormat {
    #[default]
    TwentyFourHour,
    TwelveHour,
}

impl TimeFormat {
    /// Toggle between 12-hour and 24-hour format.
    pub fn toggle(&self) -> Self {
        match self {
            TimeFormat::TwentyFourHour => TimeFormat::TwelveHour,
            TimeFormat::TwelveHour => TimeFormat::TwentyFourHour,
        }
    }

    /// Pick the format matching a host's "24-hour style" flag.
    pub fn from_24_hour(is_24_hour: bool) -> Self {
        if is_24_hour {
            TimeFormat::TwentyFourHour
        } else {
            TimeFormat::TwelveHour
        }
    }
}

/// Which digits the swarm spells out.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Face {
    /// Four digit slots with a colon between hours and minutes.
    #[default]
    HoursMinutes,
    /// Two digit slots for the minutes, no separator.
    Minutes,
}

impl Face {
    /// Number of digit slots on the face.
    pub fn slots(self) -> usize {
        match self {
            Face::HoursMinutes => 4,
            Face::Minutes => 2,
        }
    }

    /// Whether the face draws a colon separator.
    pub fn has_separator(self) -> bool {
        matches!(self, Face::HoursMinutes)
    }
}

/// Map a 0-23 hour onto the hour shown for `format`.
///
/// In 12-hour mode midnight and noon both show as 12.
pub fn display_hour(hour: u32, format: TimeFormat) -> u32 {
    match format {
        TimeFormat::TwentyFourHour => hour,
        TimeFormat::TwelveHour => match hour % 12 {
            0 => 12,
            h => h,
        },
    }
}

/// Hour and minute of the wall clock.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ClockTime {
    /// Hour, 0-23.
    pub hour: u32,
    /// Minute, 0-59.
    pub minute: u32,
}

impl ClockTime {
    pub fn new(hour: u32, minute: u32) -> Self {
        Self { hour, minute }
    }

    /// Digits to draw, as `(slot, digit)` pairs in slot order.
    ///
    /// A zero leading hour digit is left out in 12-hour mode, so " 9:05"
    /// yields three pairs starting at slot 1.
    pub fn digits(&self, format: TimeFormat, face: Face) -> Vec<(usize, u8)> {
        let m1 = (self.minute / 10 % 10) as u8;
        let m2 = (self.minute % 10) as u8;

        match face {
            Face::Minutes => vec![(0, m1), (1, m2)],
            Face::HoursMinutes => {
                let hours = display_hour(self.hour, format);
                let h1 = (hours / 10 % 10) as u8;
                let h2 = (hours % 10) as u8;

                let mut digits = Vec::with_capacity(4);
                if h1 != 0 || format == TimeFormat::TwentyFourHour {
                    digits.push((0, h1));
                }
                digits.extend([(1, h2), (2, m1), (3, m2)]);
                digits
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_hour_twelve_hour() {
        assert_eq!(display_hour(0, TimeFormat::TwelveHour), 12);
        assert_eq!(display_hour(13, TimeFormat::TwelveHour), 1);
        assert_eq!(display_hour(12, TimeFormat::TwelveHour), 12);
        assert_eq!(display_hour(23, TimeFormat::TwelveHour), 11);
    }

    #[test]
    fn test_display_hour_twenty_four_hour() {
        assert_eq!(display_hour(13, TimeFormat::TwentyFourHour), 13);
        assert_eq!(display_hour(0, TimeFormat::TwentyFourHour), 0);
    }

    #[test]
    fn test_toggle() {
        assert_eq!(TimeFormat::TwelveHour.toggle(), TimeFormat::TwentyFourHour);
        assert_eq!(TimeFormat::TwentyFourHour.toggle(), TimeFormat::TwelveHour);
        assert_eq!(TimeFormat::from_24_hour(false), TimeFormat::TwelveHour);
    }

    #[test]
    fn test_digits_suppress_leading_zero_in_twelve_hour() {
        let time = ClockTime::new(9, 5);
        assert_eq!(
            time.digits(TimeFormat::TwelveHour, Face::HoursMinutes),
            vec![(1, 9), (2, 0), (3, 5)]
        );
    }

    #[test]
    fn test_digits_keep_leading_zero_in_twenty_four_hour() {
        let time = ClockTime::new(9, 5);
        assert_eq!(
            time.digits(TimeFormat::TwentyFourHour, Face::HoursMinutes),
            vec![(0, 0), (1, 9), (2, 0), (3, 5)]
        );
    }

    #[test]
    fn test_digits_midnight_twelve_hour() {
        let time = ClockTime::new(0, 42);
        assert_eq!(
            time.digits(TimeFormat::TwelveHour, Face::HoursMinutes),
            vec![(0, 1), (1, 2), (2, 4), (3, 2)]
        );
    }

    #[test]
    fn test_digits_minutes_face() {
        let time = ClockTime::new(18, 7);
        assert_eq!(
            time.digits(TimeFormat::TwelveHour, Face::Minutes),
            vec![(0, 0), (1, 7)]
        );
    }
}
