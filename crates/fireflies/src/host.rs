//! Wall clock backed by the local timezone.

use chrono::{Local, Timelike};
use fireflies_core::{ClockTime, TimeFormat};
use fireflies_swarm::Clock;

/// Local time plus the user's 12/24-hour preference.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalClock {
    format: TimeFormat,
}

impl LocalClock {
    pub fn new(format: TimeFormat) -> Self {
        Self { format }
    }

    pub fn format(&self) -> TimeFormat {
        self.format
    }

    /// Toggle between 12-hour and 24-hour format.
    pub fn toggle_format(&mut self) {
        self.format = self.format.toggle();
    }
}

impl Clock for LocalClock {
    fn current_time(&self) -> ClockTime {
        let now = Local::now();
        ClockTime::new(now.hour(), now.minute())
    }

    fn is_24_hour(&self) -> bool {
        self.format == TimeFormat::TwentyFourHour
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_flips_preference() {
        let mut clock = LocalClock::new(TimeFormat::TwentyFourHour);
        assert!(clock.is_24_hour());
        clock.toggle_format();
        assert!(!clock.is_24_hour());
        assert_eq!(clock.format(), TimeFormat::TwelveHour);
    }

    #[test]
    fn test_current_time_in_range() {
        let time = LocalClock::default().current_time();
        assert!(time.hour < 24);
        assert!(time.minute < 60);
    }
}
