//! Qi Men Dun Jia (奇门遁甲).
//!
//! A cycle number derived from the month, day and hour rotates stems,
//! branches, gates, stars and spirits through the nine palaces. A post-pass
//! flags clashes, tombs, echoes and void branches on each palace.
//!
//! The cycle number here is a plain modular simplification. Solar terms and
//! the yin/yang escapement are not modelled.

pub mod chart;
pub mod symbols;
pub mod tables;
pub mod text;

pub use chart::{HorseStar, PalaceFlags, PalaceRecord, QiMenChart, cast, cycle_number};
pub use symbols::{Symbol, SymbolKind, glossary, lookup};
pub use tables::{GRID, Gate, Palace, Spirit, Star};
pub use text::to_text;
