//! RNG module - seeded randomness for scatter and eagle strikes
//!
//! The game only ever asks for "a uniform integer below N", so the engine is
//! generic over [`RandomSource`]. Two sources are provided:
//!
//! - [`SimpleRng`]: a small LCG, deterministic per seed (replays depend on this)
//! - [`SequenceRng`]: cycles through fixed values, for scripted games and tests

/// A source of uniform integers
pub trait RandomSource {
    /// Uniform value in `[0, bound)`. `bound` must be non-zero.
    fn next_below(&mut self, bound: u32) -> u32;
}

/// Simple LCG (Linear Congruential Generator) RNG
/// Uses constants from Numerical Recipes
#[derive(Debug, Clone)]
pub struct SimpleRng {
    state: u32,
}

impl SimpleRng {
    /// Create a new RNG with the given seed
    pub fn new(seed: u32) -> Self {
        // Avoid 0 seed which would produce all zeros
        let state = if seed == 0 { 1 } else { seed };
        Self { state }
    }

    /// Generate next random u32
    pub fn next_u32(&mut self) -> u32 {
        // LCG formula: (a * state + c) mod m
        // Using Numerical Recipes constants: a=1664525, c=1013904223, m=2^32
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Generate random value in range [0, max)
    ///
    /// Scales by the high bits; the low bits of a power-of-two LCG have short
    /// periods (the lowest five repeat every 32 draws).
    pub fn next_range(&mut self, max: u32) -> u32 {
        ((self.next_u32() as u64 * max as u64) >> 32) as u32
    }
}

impl Default for SimpleRng {
    fn default() -> Self {
        Self::new(1)
    }
}

impl RandomSource for SimpleRng {
    fn next_below(&mut self, bound: u32) -> u32 {
        self.next_range(bound)
    }
}

/// Replays a fixed list of values, wrapping around at the end
///
/// Each value is reduced modulo the requested bound.
#[derive(Debug, Clone)]
pub struct SequenceRng {
    values: Vec<u32>,
    index: usize,
}

impl SequenceRng {
    pub fn new(values: Vec<u32>) -> Self {
        assert!(!values.is_empty(), "SequenceRng needs at least one value");
        Self { values, index: 0 }
    }

    /// Always yields `value`
    pub fn repeat(value: u32) -> Self {
        Self::new(vec![value])
    }

    /// Number of values drawn so far
    pub fn draws(&self) -> usize {
        self.index
    }
}

impl RandomSource for SequenceRng {
    fn next_below(&mut self, bound: u32) -> u32 {
        let v = self.values[self.index % self.values.len()];
        self.index += 1;
        v % bound
    }
}
