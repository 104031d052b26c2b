//! A divination session.
//!
//! `Diviner` owns an [`OracleConfig`] and the seeded generator every
//! randomized cast in the session draws from, so a fixed seed replays the
//! whole sequence of charts.

use log::debug;
use rand::SeedableRng;
use rand::rngs::StdRng;

use zhan_core::Moment;

use crate::chart::{self, Chart, Method};
use crate::config::OracleConfig;
use crate::error::OracleResult;

/// A divination session.
pub struct Diviner {
    config: OracleConfig,
    rng: StdRng,
}

impl Diviner {
    /// Create a session. Without a configured seed the generator is seeded
    /// from the OS.
    pub fn new(config: OracleConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        debug!("diviner started with {config:?}");
        Self { config, rng }
    }

    /// Get the configuration.
    pub fn config(&self) -> &OracleConfig {
        &self.config
    }

    /// Cast a chart. `None` casts for the current local time.
    pub fn cast(&mut self, method: Method, moment: Option<Moment>) -> Chart {
        let moment = moment.unwrap_or_else(Moment::now);
        debug!("casting {} for {moment}", method.slug());
        chart::cast(method, moment, &self.config, &mut self.rng)
    }

    /// Cast a chart for a method given by name.
    pub fn cast_named(&mut self, method: &str, moment: Option<Moment>) -> OracleResult<Chart> {
        let method = Method::parse(method)?;
        Ok(self.cast(method, moment))
    }
}

impl Default for Diviner {
    fn default() -> Self {
        Self::new(OracleConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::CastMode;

    fn moment() -> Option<Moment> {
        Some(Moment::new(2024, 3, 15, 8))
    }

    #[test]
    fn same_seed_same_charts() {
        let config = OracleConfig::default().with_seed(42);
        let mut a = Diviner::new(config.clone());
        let mut b = Diviner::new(config);
        for method in [Method::LiuYao, Method::DaLiuRen, Method::LiuYao] {
            assert_eq!(a.cast(method, moment()), b.cast(method, moment()));
        }
    }

    #[test]
    fn time_cast_ignores_seed() {
        let config = OracleConfig::default().with_cast_mode(CastMode::Time);
        let mut a = Diviner::new(config.clone().with_seed(1));
        let mut b = Diviner::new(config.with_seed(2));
        assert_eq!(a.cast(Method::LiuYao, moment()), b.cast(Method::LiuYao, moment()));
    }

    #[test]
    fn cast_named_parses_method() {
        let mut diviner = Diviner::new(OracleConfig::default().with_seed(3));
        let chart = diviner.cast_named("qimen", moment()).unwrap();
        assert_eq!(chart.method(), Method::QiMen);
        assert!(diviner.cast_named("runes", moment()).is_err());
    }

    #[test]
    fn omitted_moment_defaults_to_now() {
        let mut diviner = Diviner::default();
        let before = Moment::now();
        let chart = diviner.cast(Method::ZiWei, None);
        assert!(chart.moment().year >= before.year);
    }
}
