//! Zi Wei Dou Shu (紫微斗数).
//!
//! The life palace comes from the month and hour. The twelve palaces are
//! then walked from it, each taking the branch at its own table position
//! and one or two of the fourteen main stars.

pub mod text;

pub use text::to_text;

use log::debug;
use serde::{Deserialize, Serialize};

use zhan_core::{Branch, FourPillars, Moment};

zhan_core::symbol_table! {
    /// One of the twelve palaces of a destiny chart.
    pub struct Palace: 12 = [
        "命宫", "兄弟宫", "夫妻宫", "子女宫", "财帛宫", "疾厄宫",
        "迁移宫", "奴仆宫", "官禄宫", "田宅宫", "福德宫", "父母宫",
    ];
}

zhan_core::symbol_table! {
    /// One of the fourteen main stars (主星).
    pub struct MainStar: 14 = [
        "紫微", "天机", "太阳", "武曲", "天同", "廉贞", "天府",
        "太阴", "贪狼", "巨门", "天相", "天梁", "七杀", "破军",
    ];
}

/// One palace of the chart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PalaceRecord {
    /// Which palace.
    pub palace: Palace,
    /// Branch at the palace's table position.
    pub branch: Branch,
    /// One or two distinct main stars.
    pub stars: Vec<MainStar>,
}

/// A Zi Wei Dou Shu chart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ZiWeiChart {
    /// When the chart was drawn.
    pub moment: Moment,
    /// Four pillars of the moment.
    pub pillars: FourPillars,
    /// The life palace (命宫位置).
    pub life_palace: Palace,
    /// The twelve palaces, walked from the life palace.
    pub palaces: [PalaceRecord; 12],
}

/// The life palace, `(month + hour) mod 12`.
pub fn life_palace(moment: Moment) -> Palace {
    Palace::from_index(i64::from(moment.month) + i64::from(moment.hour))
}

/// Main stars of `palace`: `(p + y + m) mod 14` and, when different,
/// `(p + d) mod 14`.
pub fn main_stars(palace: Palace, moment: Moment) -> Vec<MainStar> {
    let p = palace.index() as i64;
    let first = MainStar::from_index(p + i64::from(moment.year) + i64::from(moment.month));
    let second = MainStar::from_index(p + i64::from(moment.day));
    if first == second {
        vec![first]
    } else {
        vec![first, second]
    }
}

/// Draw the chart for a moment.
pub fn cast(moment: Moment) -> ZiWeiChart {
    let life = life_palace(moment);
    debug!("ziwei life palace {life}");

    let palaces = std::array::from_fn(|i| {
        let palace = life.offset(i as i64);
        PalaceRecord {
            palace,
            branch: Branch::from_index(palace.index() as i64),
            stars: main_stars(palace, moment),
        }
    });

    ZiWeiChart {
        moment,
        pillars: moment.four_pillars(),
        life_palace: life,
        palaces,
    }
}
