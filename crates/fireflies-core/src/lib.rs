//! Core types for the fireflies particle clock.
//!
//! Holds the pieces every other crate agrees on: the deterministic random
//! stream, clock time with 12/24-hour handling, and the tunable simulation
//! constants.

mod rng;
mod time;
mod timing;
mod tuning;

pub use rng::Prng;
pub use time::{ClockTime, Face, TimeFormat, display_hour};
pub use timing::Timing;
pub use tuning::{Bounds, Tuning, TuningError};
