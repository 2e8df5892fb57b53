//! Seedable pseudo-random stream shared by the whole simulation.

use rand::{RngCore, SeedableRng};

/// Replacement state for a zero seed; xorshift never leaves zero.
const ZERO_SEED_STATE: u32 = 0x9E37_79B9;

/// Scale for turning the top 24 bits of a draw into a float in `[0, 1)`.
const FLOAT_SCALE: f32 = 1.0 / (1u32 << 24) as f32;

/// Deterministic xorshift32 generator.
///
/// Every randomized decision of the animation draws from one instance, so a
/// fixed seed and a fixed call sequence reproduce the same trajectory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Prng {
    state: u32,
}

impl Prng {
    /// Create a generator seeded with `seed`.
    pub fn new(seed: u32) -> Self {
        let mut rng = Self { state: 0 };
        rng.seed(seed);
        rng
    }

    /// Reset the stream.
    pub fn seed(&mut self, seed: u32) {
        self.state = if seed == 0 { ZERO_SEED_STATE } else { seed };
    }

    fn advance(&mut self) -> u32 {
        let mut x = self.state;
        x ^= x << 13;
        x ^= x >> 17;
        x ^= x << 5;
        self.state = x;
        x
    }

    /// Uniform float in `[0, 1)`.
    pub fn next_float01(&mut self) -> f32 {
        (self.advance() >> 8) as f32 * FLOAT_SCALE
    }

    /// Uniform integer in the inclusive range `[min, max]`.
    pub fn next_int(&mut self, min: i32, max: i32) -> i32 {
        debug_assert!(min <= max, "next_int called with min > max");
        let span = i64::from(max) - i64::from(min) + 1;
        let offset = (f64::from(self.next_float01()) * span as f64) as i64;
        (i64::from(min) + offset.min(span - 1)) as i32
    }

    /// Uniform float in `[min, max)`. Returns `min` when the range is empty.
    pub fn next_float(&mut self, min: f32, max: f32) -> f32 {
        debug_assert!(min <= max, "next_float called with min > max");
        let value = min + (max - min) * self.next_float01();
        // Rounding can land exactly on `max` for wide ranges.
        if value < max { value } else { min }
    }

    /// True with probability `p`.
    pub fn chance(&mut self, p: f32) -> bool {
        self.next_float01() < p
    }
}

impl Default for Prng {
    fn default() -> Self {
        Self::new(ZERO_SEED_STATE)
    }
}

impl RngCore for Prng {
    fn next_u32(&mut self) -> u32 {
        self.advance()
    }

    fn next_u64(&mut self) -> u64 {
        let high = u64::from(self.advance());
        let low = u64::from(self.advance());
        (high << 32) | low
    }

    fn fill_bytes(&mut self, dst: &mut [u8]) {
        for chunk in dst.chunks_mut(4) {
            let bytes = self.advance().to_le_bytes();
            chunk.copy_from_slice(&bytes[..chunk.len()]);
        }
    }
}

impl SeedableRng for Prng {
    type Seed = [u8; 4];

    fn from_seed(seed: Self::Seed) -> Self {
        Self::new(u32::from_le_bytes(seed))
    }
}
