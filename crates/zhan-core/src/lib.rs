//! Core vocabulary for the zhan divination engines.
//!
//! Provides the heavenly stems and earthly branches, their sexagesimal
//! pairs, the simplified four-pillars calendar, the `Moment` timestamp every
//! chart is cast from, and the random source that randomized casts draw on.

pub mod calendar;
pub mod cycle;
pub mod error;
pub mod ganzhi;
pub mod source;
mod table;

pub use calendar::{FourPillars, Moment, compute_four_pillars};
pub use error::{ZhanError, ZhanResult};
pub use ganzhi::{Branch, Stem, StemBranch};
pub use source::{RandomSource, SequenceSource};

#[doc(hidden)]
pub mod __private {
    pub use serde;
}
