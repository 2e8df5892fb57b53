//! Timer periods and swarm behaviour switches.

use serde::{Deserialize, Serialize};

use crate::TuningError;

/// How often each timer fires and what the swarm timer does.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Timing {
    /// Frame period in milliseconds.
    pub frame_ms: u64,
    /// Ambient drift shown before the first digits form.
    pub intro_ms: u64,
    /// How often the wall clock is checked for a new minute.
    pub clock_poll_ms: u64,
    /// Lower bound of the randomized swarm timer delay.
    pub swarm_min_ms: u64,
    /// Upper bound of the randomized swarm timer delay.
    pub swarm_max_ms: u64,
    /// Move the ambient target to a random point on every swarm tick.
    pub relocate_ambient: bool,
    /// Keep digits formed until the next minute instead of scattering them
    /// on the next swarm tick.
    pub hold_digits: bool,
}

impl Default for Timing {
    fn default() -> Self {
        Self {
            frame_ms: 50,
            intro_ms: 2000,
            clock_poll_ms: 1000,
            swarm_min_ms: 5000,
            swarm_max_ms: 15000,
            relocate_ambient: true,
            hold_digits: true,
        }
    }
}

impl Timing {
    pub fn validate(&self) -> Result<(), TuningError> {
        if self.frame_ms == 0 {
            return Err(TuningError::NotPositive("frame_ms"));
        }
        if self.clock_poll_ms == 0 {
            return Err(TuningError::NotPositive("clock_poll_ms"));
        }
        let limit = i32::MAX as u64;
        if self.swarm_min_ms > self.swarm_max_ms || self.swarm_max_ms > limit {
            return Err(TuningError::SwarmInterval {
                min_ms: self.swarm_min_ms,
                max_ms: self.swarm_max_ms,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        assert_eq!(Timing::default().validate(), Ok(()));
    }

    #[test]
    fn test_rejects_zero_frame_period() {
        let timing = Timing {
            frame_ms: 0,
            ..Default::default()
        };
        assert_eq!(timing.validate(), Err(TuningError::NotPositive("frame_ms")));
    }

    #[test]
    fn test_rejects_inverted_swarm_interval() {
        let timing = Timing {
            swarm_min_ms: 9000,
            swarm_max_ms: 100,
            ..Default::default()
        };
        assert_eq!(
            timing.validate(),
            Err(TuningError::SwarmInterval {
                min_ms: 9000,
                max_ms: 100
            })
        );
    }
}
