//! Chart engines for four Chinese divination methods.
//!
//! Each method turns a [`Moment`](zhan_core::Moment), and for the
//! randomized casts a [`RandomSource`](zhan_core::RandomSource), into an
//! immutable chart with a matching line-oriented transcript:
//!
//! - [`liuyao`]: six-line hexagram casting (六爻)
//! - [`qimen`]: Qi Men Dun Jia (奇门遁甲)
//! - [`liuren`]: Da Liu Ren (大六壬)
//! - [`ziwei`]: Zi Wei Dou Shu (紫微斗数)
//!
//! [`Chart`] ties them together, [`Diviner`] runs a seeded session and
//! [`prompt::build_prompt`] wraps a transcript for interpretation.

pub mod chart;
pub mod config;
pub mod diviner;
pub mod error;
pub mod liuren;
pub mod liuyao;
pub mod prompt;
pub mod qimen;
mod transcript;
pub mod ziwei;

pub use chart::{Chart, Method, cast};
pub use config::{CastMode, CourseSeed, OracleConfig};
pub use diviner::Diviner;
pub use error::{OracleError, OracleResult};
pub use prompt::build_prompt;
pub use transcript::PLACEHOLDER;
