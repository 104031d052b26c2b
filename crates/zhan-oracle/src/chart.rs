//! The four chart kinds behind one type.

use serde::{Deserialize, Serialize};

use zhan_core::{Moment, RandomSource};

use crate::config::OracleConfig;
use crate::error::{OracleError, OracleResult};
use crate::liuren::DaLiuRenChart;
use crate::liuyao::LiuYaoChart;
use crate::qimen::QiMenChart;
use crate::ziwei::ZiWeiChart;
use crate::{liuren, liuyao, qimen, ziwei};

/// A divination method.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Method {
    /// Six-line hexagram casting (六爻).
    LiuYao,
    /// Qi Men Dun Jia (奇门遁甲).
    QiMen,
    /// Da Liu Ren (大六壬).
    DaLiuRen,
    /// Zi Wei Dou Shu (紫微斗数).
    ZiWei,
}

impl Method {
    /// Every method.
    pub const ALL: [Method; 4] = [Self::LiuYao, Self::QiMen, Self::DaLiuRen, Self::ZiWei];

    /// Parse a method name, in pinyin or Chinese.
    pub fn parse(s: &str) -> OracleResult<Self> {
        match s.trim().to_lowercase().as_str() {
            "liuyao" | "六爻" => Ok(Self::LiuYao),
            "qimen" | "奇门" | "奇门遁甲" => Ok(Self::QiMen),
            "daliuren" | "liuren" | "六壬" | "大六壬" => Ok(Self::DaLiuRen),
            "ziwei" | "紫微" | "紫微斗数" => Ok(Self::ZiWei),
            _ => Err(OracleError::UnknownMethod(s.to_string())),
        }
    }

    /// Short pinyin name, as accepted by [`Method::parse`].
    pub fn slug(self) -> &'static str {
        match self {
            Self::LiuYao => "liuyao",
            Self::QiMen => "qimen",
            Self::DaLiuRen => "daliuren",
            Self::ZiWei => "ziwei",
        }
    }

    /// Whether casting draws on the random source under `config`.
    pub fn is_randomized(self, config: &OracleConfig) -> bool {
        match self {
            Self::LiuYao => config.cast_mode == liuyao::CastMode::Random,
            Self::DaLiuRen => config.course_seed == liuren::CourseSeed::Random,
            Self::QiMen | Self::ZiWei => false,
        }
    }
}

impl std::fmt::Display for Method {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::LiuYao => write!(f, "六爻"),
            Self::QiMen => write!(f, "奇门遁甲"),
            Self::DaLiuRen => write!(f, "大六壬"),
            Self::ZiWei => write!(f, "紫微斗数"),
        }
    }
}

/// A cast chart of any method.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "method", content = "chart", rename_all = "lowercase")]
pub enum Chart {
    /// Six-line chart.
    LiuYao(LiuYaoChart),
    /// Qi Men chart.
    QiMen(QiMenChart),
    /// Da Liu Ren chart.
    DaLiuRen(DaLiuRenChart),
    /// Zi Wei chart.
    ZiWei(ZiWeiChart),
}

impl Chart {
    /// The method that produced this chart.
    pub fn method(&self) -> Method {
        match self {
            Self::LiuYao(_) => Method::LiuYao,
            Self::QiMen(_) => Method::QiMen,
            Self::DaLiuRen(_) => Method::DaLiuRen,
            Self::ZiWei(_) => Method::ZiWei,
        }
    }

    /// The moment the chart was cast for.
    pub fn moment(&self) -> Moment {
        match self {
            Self::LiuYao(c) => c.moment,
            Self::QiMen(c) => c.moment,
            Self::DaLiuRen(c) => c.moment,
            Self::ZiWei(c) => c.moment,
        }
    }

    /// Line-oriented transcript of the chart.
    pub fn to_text(&self) -> String {
        match self {
            Self::LiuYao(c) => liuyao::to_text(c),
            Self::QiMen(c) => qimen::to_text(c),
            Self::DaLiuRen(c) => liuren::to_text(c),
            Self::ZiWei(c) => ziwei::to_text(c),
        }
    }

    /// Pretty-printed JSON export.
    pub fn to_json(&self) -> OracleResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Cast a chart of `method` for `moment`.
pub fn cast<S: RandomSource + ?Sized>(
    method: Method,
    moment: Moment,
    config: &OracleConfig,
    source: &mut S,
) -> Chart {
    match method {
        Method::LiuYao => Chart::LiuYao(liuyao::cast(config.cast_mode, moment, source)),
        Method::QiMen => Chart::QiMen(qimen::cast(moment)),
        Method::DaLiuRen => Chart::DaLiuRen(liuren::cast(moment, config.course_seed, source)),
        Method::ZiWei => Chart::ZiWei(ziwei::cast(moment)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{CastMode, CourseSeed};
    use zhan_core::SequenceSource;

    fn moment() -> Moment {
        Moment::new(2024, 3, 15, 8)
    }

    #[test]
    fn parse_method_names() {
        assert_eq!(Method::parse("liuyao").unwrap(), Method::LiuYao);
        assert_eq!(Method::parse("QiMen").unwrap(), Method::QiMen);
        assert_eq!(Method::parse("六壬").unwrap(), Method::DaLiuRen);
        assert_eq!(Method::parse("liuren").unwrap(), Method::DaLiuRen);
        assert_eq!(Method::parse("紫微").unwrap(), Method::ZiWei);
        let err = Method::parse("tarot").unwrap_err();
        assert!(matches!(err, OracleError::UnknownMethod(ref s) if s == "tarot"));
        for method in Method::ALL {
            assert_eq!(Method::parse(method.slug()).unwrap(), method);
        }
    }

    #[test]
    fn dispatch_matches_method() {
        let config = OracleConfig::default().with_cast_mode(CastMode::Time);
        for method in Method::ALL {
            let chart = cast(method, moment(), &config, &mut SequenceSource::new([0.4]));
            assert_eq!(chart.method(), method);
            assert_eq!(chart.moment(), moment());
            assert_eq!(chart.to_text(), chart.to_text());
        }
    }

    #[test]
    fn randomized_methods() {
        let config = OracleConfig::default();
        assert!(Method::LiuYao.is_randomized(&config));
        assert!(Method::DaLiuRen.is_randomized(&config));
        assert!(!Method::QiMen.is_randomized(&config));
        let config = config
            .with_cast_mode(CastMode::Time)
            .with_course_seed(CourseSeed::DayPillar);
        assert!(Method::ALL.iter().all(|m| !m.is_randomized(&config)));
    }

    #[test]
    fn json_export_is_tagged_and_reloads() {
        let chart = cast(Method::ZiWei, moment(), &OracleConfig::default(), &mut SequenceSource::default());
        let json = chart.to_json().unwrap();
        assert!(json.contains(r#""method": "ziwei""#));
        assert!(json.contains(r#""life_palace": "父母宫""#));
        let back: Chart = serde_json::from_str(&json).unwrap();
        assert_eq!(back, chart);
    }
}
