//! Tunable simulation constants.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Inclusive-low, exclusive-high range for randomized parameters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub low: f32,
    pub high: f32,
}

impl Bounds {
    pub const fn new(low: f32, high: f32) -> Self {
        Self { low, high }
    }

    fn is_ordered(&self) -> bool {
        self.low <= self.high
    }

    fn is_positive(&self) -> bool {
        positive_finite(self.low) && positive_finite(self.high) && self.is_ordered()
    }
}

/// Finite and strictly above zero. False for NaN.
fn positive_finite(value: f32) -> bool {
    value.is_finite() && value > 0.0
}

/// Finite and not below zero. False for NaN.
fn non_negative_finite(value: f32) -> bool {
    value.is_finite() && value >= 0.0
}

/// Reasons a [`Tuning`] cannot drive a simulation.
#[derive(Debug, Error, PartialEq)]
pub enum TuningError {
    #[error("{0} must be finite and strictly positive")]
    NotPositive(&'static str),
    #[error("{0} range is inverted (low > high)")]
    Inverted(&'static str),
    #[error("min_size {min} is larger than max_size {max}")]
    SizeRange { min: f32, max: f32 },
    #[error("{reserve} reserved particles leave no room in a swarm of {total}")]
    ReserveTooLarge { reserve: usize, total: usize },
    #[error("{0} must be a probability in [0, 1]")]
    NotProbability(&'static str),
    #[error("{0} must be finite and not negative")]
    Negative(&'static str),
    #[error("{0} must lie in [0, 1]")]
    NotFraction(&'static str),
    #[error("swarm interval {min_ms}..={max_ms} ms is inverted or out of range")]
    SwarmInterval { min_ms: u64, max_ms: u64 },
}

/// Numeric parameters of the particle simulation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    /// Swarm size, fixed for the lifetime of a simulation.
    pub num_particles: usize,
    /// Per-axis velocity limit in pixels per frame.
    pub max_speed: f32,
    pub min_size: f32,
    pub max_size: f32,
    /// Largest per-axis jitter kick.
    pub jitter: f32,
    /// Chance per frame that an ambient particle receives a jitter kick.
    pub jitter_probability: f32,
    /// Velocity decay per frame while drifting.
    pub ambient_damping: f32,
    /// Velocity decay per frame while holding a digit.
    pub formation_damping: f32,
    /// Chance per frame that a resting ambient particle starts to glow.
    pub twinkle_probability: f32,
    pub size_epsilon: f32,
    /// Relaxation divisor range for the size spring, drawn per particle.
    pub size_relax: Bounds,
    /// Loose stiffness range for drifting particles.
    pub ambient_stiffness: Bounds,
    /// Tight stiffness used for digit and separator targets.
    pub formation_stiffness: f32,
    /// Goal radius range for particles forming a digit.
    pub digit_size: Bounds,
    /// Particles pinned to the colon dots.
    pub separator_particles: usize,
    /// Particles that keep drifting while digits are shown.
    pub floaters: usize,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            num_particles: 200,
            max_speed: 2.0,
            min_size: 0.0,
            max_size: 4.0,
            jitter: 0.3,
            jitter_probability: 0.4,
            ambient_damping: 0.999,
            formation_damping: 0.88,
            twinkle_probability: 0.0008,
            size_epsilon: 0.001,
            size_relax: Bounds::new(30.0, 300.0),
            ambient_stiffness: Bounds::new(600.0, 1200.0),
            formation_stiffness: 12.0,
            digit_size: Bounds::new(2.0, 3.5),
            separator_particles: 5,
            floaters: 0,
        }
    }
}

impl Tuning {
    /// Reject parameters that would divide by zero or break the size and
    /// speed invariants.
    pub fn validate(&self) -> Result<(), TuningError> {
        if !positive_finite(self.max_speed) {
            return Err(TuningError::NotPositive("max_speed"));
        }
        for (name, value) in [
            ("jitter", self.jitter),
            ("size_epsilon", self.size_epsilon),
        ] {
            if !non_negative_finite(value) {
                return Err(TuningError::Negative(name));
            }
        }
        for (name, value) in [
            ("ambient_damping", self.ambient_damping),
            ("formation_damping", self.formation_damping),
        ] {
            if !(0.0..=1.0).contains(&value) {
                return Err(TuningError::NotFraction(name));
            }
        }
        if !positive_finite(self.formation_stiffness) {
            return Err(TuningError::NotPositive("formation_stiffness"));
        }
        if !self.ambient_stiffness.is_ordered() {
            return Err(TuningError::Inverted("ambient_stiffness"));
        }
        if !self.ambient_stiffness.is_positive() {
            return Err(TuningError::NotPositive("ambient_stiffness"));
        }
        if !self.size_relax.is_ordered() {
            return Err(TuningError::Inverted("size_relax"));
        }
        if !self.size_relax.is_positive() {
            return Err(TuningError::NotPositive("size_relax"));
        }
        if !self.digit_size.is_ordered() {
            return Err(TuningError::Inverted("digit_size"));
        }
        if !non_negative_finite(self.digit_size.low) || !self.digit_size.high.is_finite() {
            return Err(TuningError::Negative("digit_size"));
        }
        let sizes_finite =
            non_negative_finite(self.min_size) && non_negative_finite(self.max_size);
        if !sizes_finite || self.min_size > self.max_size {
            return Err(TuningError::SizeRange {
                min: self.min_size,
                max: self.max_size,
            });
        }
        for (name, p) in [
            ("jitter_probability", self.jitter_probability),
            ("twinkle_probability", self.twinkle_probability),
        ] {
            if !(0.0..=1.0).contains(&p) {
                return Err(TuningError::NotProbability(name));
            }
        }
        let reserve = self.separator_particles + self.floaters;
        if reserve > self.num_particles {
            return Err(TuningError::ReserveTooLarge {
                reserve,
                total: self.num_particles,
            });
        }
        Ok(())
    }

    /// Clamp a digit goal radius into the drawable size range.
    pub fn clamp_size(&self, size: f32) -> f32 {
        size.clamp(self.min_size, self.max_size)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        assert_eq!(Tuning::default().validate(), Ok(()));
    }

    #[test]
    fn test_rejects_zero_stiffness() {
        let tuning = Tuning {
            formation_stiffness: 0.0,
            ..Default::default()
        };
        assert_eq!(
            tuning.validate(),
            Err(TuningError::NotPositive("formation_stiffness"))
        );

        let tuning = Tuning {
            ambient_stiffness: Bounds::new(0.0, 10.0),
            ..Default::default()
        };
        assert_eq!(
            tuning.validate(),
            Err(TuningError::NotPositive("ambient_stiffness"))
        );
    }

    #[test]
    fn test_rejects_inverted_ranges() {
        let tuning = Tuning {
            size_relax: Bounds::new(50.0, 10.0),
            ..Default::default()
        };
        assert_eq!(tuning.validate(), Err(TuningError::Inverted("size_relax")));

        let tuning = Tuning {
            min_size: 5.0,
            max_size: 1.0,
            ..Default::default()
        };
        assert!(matches!(
            tuning.validate(),
            Err(TuningError::SizeRange { .. })
        ));
    }

    #[test]
    fn test_rejects_oversized_reserve() {
        let tuning = Tuning {
            num_particles: 4,
            separator_particles: 5,
            ..Default::default()
        };
        assert_eq!(
            tuning.validate(),
            Err(TuningError::ReserveTooLarge {
                reserve: 5,
                total: 4
            })
        );
    }

    #[test]
    fn test_rejects_nan() {
        let nan = f32::NAN;
        let cases = [
            (
                Tuning {
                    formation_stiffness: nan,
                    ..Default::default()
                },
                TuningError::NotPositive("formation_stiffness"),
            ),
            (
                Tuning {
                    max_speed: nan,
                    ..Default::default()
                },
                TuningError::NotPositive("max_speed"),
            ),
            (
                Tuning {
                    jitter: nan,
                    ..Default::default()
                },
                TuningError::Negative("jitter"),
            ),
            (
                Tuning {
                    ambient_damping: nan,
                    ..Default::default()
                },
                TuningError::NotFraction("ambient_damping"),
            ),
        ];
        for (tuning, expected) in cases {
            assert_eq!(tuning.validate(), Err(expected));
        }

        let tuning = Tuning {
            min_size: nan,
            ..Default::default()
        };
        assert!(matches!(
            tuning.validate(),
            Err(TuningError::SizeRange { .. })
        ));

        let tuning = Tuning {
            ambient_stiffness: Bounds::new(600.0, nan),
            ..Default::default()
        };
        assert!(tuning.validate().is_err());
    }

    #[test]
    fn test_rejects_infinite_stiffness() {
        let tuning = Tuning {
            formation_stiffness: f32::INFINITY,
            ..Default::default()
        };
        assert_eq!(
            tuning.validate(),
            Err(TuningError::NotPositive("formation_stiffness"))
        );
    }

    #[test]
    fn test_rejects_bad_probability() {
        let tuning = Tuning {
            jitter_probability: 1.5,
            ..Default::default()
        };
        assert_eq!(
            tuning.validate(),
            Err(TuningError::NotProbability("jitter_probability"))
        );
    }
}
