//! RNG module - spawn colour generation
//!
//! Spawned tiles draw one of the three primary components uniformly. The draw goes
//! through the [`ColorSource`] trait so sessions can be driven by a seeded LCG in
//! play and by a fixed sequence in tests.

use crate::types::Mask;

/// Supplies the colour of each spawned tile
pub trait ColorSource {
    /// Next single-component mask (C, M or Y)
    fn next_mask(&mut self) -> Mask;
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
    pub fn next_range(&mut self, max: u32) -> u32 {
        // High bits: the low bits of a power-of-two LCG have short periods.
        (self.next_u32() >> 16) % max.max(1)
    }

    /// Current state (for restarting a session with the same sequence)
    pub fn seed(&self) -> u32 {
        self.state
    }
}

impl Default for SimpleRng {
    fn default() -> Self {
        Self::new(1)
    }
}

impl ColorSource for SimpleRng {
    fn next_mask(&mut self) -> Mask {
        Mask::PRIMARIES[self.next_range(Mask::PRIMARIES.len() as u32) as usize]
    }
}

/// Replays a fixed colour sequence, cycling when exhausted
#[derive(Debug, Clone)]
pub struct FixedColors {
    sequence: Vec<Mask>,
    index: usize,
}

impl FixedColors {
    /// Empty masks in `sequence` are skipped. An empty sequence yields cyan forever.
    pub fn new(sequence: impl IntoIterator<Item = Mask>) -> Self {
        let mut sequence: Vec<Mask> = sequence
            .into_iter()
            .filter(|mask| !mask.is_empty())
            .collect();
        if sequence.is_empty() {
            sequence.push(Mask::C);
        }
        Self { sequence, index: 0 }
    }

    /// A source that always yields `mask`
    pub fn repeat(mask: Mask) -> Self {
        Self::new([mask])
    }
}

impl ColorSource for FixedColors {
    fn next_mask(&mut self) -> Mask {
        let mask = self.sequence[self.index % self.sequence.len()];
        self.index = self.index.wrapping_add(1);
        mask
    }
}
