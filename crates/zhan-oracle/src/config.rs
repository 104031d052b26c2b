//! Configuration for a divination session.

pub use crate::liuren::CourseSeed;
pub use crate::liuyao::CastMode;

/// Configuration for a [`Diviner`](crate::Diviner).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OracleConfig {
    /// RNG seed for reproducible casts. `None` seeds from the OS.
    pub seed: Option<u64>,
    /// How six-line charts obtain their lines.
    pub cast_mode: CastMode,
    /// Where Da Liu Ren courses take their base pair from.
    pub course_seed: CourseSeed,
}

impl OracleConfig {
    /// Set the RNG seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Set the six-line cast mode.
    pub fn with_cast_mode(mut self, mode: CastMode) -> Self {
        self.cast_mode = mode;
        self
    }

    /// Set the Da Liu Ren course seed.
    pub fn with_course_seed(mut self, seed: CourseSeed) -> Self {
        self.course_seed = seed;
        self
    }
}
