//! Random sources for randomized casts.
//!
//! Engines never reach for ambient randomness. They take a `RandomSource`
//! so callers can pass a seeded generator, the thread generator, or a fixed
//! replay sequence.

use rand::Rng;
use rand::rngs::{StdRng, ThreadRng};

/// A source of uniform draws in `[0, 1)`.
pub trait RandomSource {
    /// The next uniform draw in `[0, 1)`.
    fn next_float(&mut self) -> f64;

    /// A uniform position in `0..len`, taken as `floor(draw * len)`.
    fn next_index(&mut self, len: usize) -> usize {
        debug_assert!(len > 0, "cannot draw from an empty table");
        let index = (self.next_float() * len as f64) as usize;
        index.min(len.saturating_sub(1))
    }

    /// A fair coin: heads when the draw lies above one half.
    fn coin(&mut self) -> bool {
        self.next_float() > 0.5
    }
}

impl RandomSource for StdRng {
    fn next_float(&mut self) -> f64 {
        self.random::<f64>()
    }
}

impl RandomSource for ThreadRng {
    fn next_float(&mut self) -> f64 {
        self.random::<f64>()
    }
}

/// Replays a fixed list of draws, cycling when exhausted.
///
/// Values are clamped into `[0, 1)`. An empty sequence always yields `0.0`.
#[derive(Debug, Clone, Default)]
pub struct SequenceSource {
    values: Vec<f64>,
    cursor: usize,
}

impl SequenceSource {
    /// Create a source that replays `values` in order.
    pub fn new(values: impl Into<Vec<f64>>) -> Self {
        Self {
            values: values.into(),
            cursor: 0,
        }
    }

    /// Number of draws taken so far.
    pub fn draws(&self) -> usize {
        self.cursor
    }
}

impl RandomSource for SequenceSource {
    fn next_float(&mut self) -> f64 {
        if self.values.is_empty() {
            return 0.0;
        }
        let value = self.values[self.cursor % self.values.len()];
        self.cursor += 1;
        value.clamp(0.0, 1.0 - f64::EPSILON)
    }
}
