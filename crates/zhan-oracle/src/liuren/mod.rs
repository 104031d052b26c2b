//! Da Liu Ren (大六壬).
//!
//! Four courses step a base stem-branch pair by three positions at a time,
//! each carrying the heavenly general of its branch. The three
//! transmissions are the first three courses; the classical selection
//! rules are not applied.

pub mod text;

pub use text::to_text;

use log::debug;
use serde::{Deserialize, Serialize};

use zhan_core::{Branch, FourPillars, Moment, RandomSource, Stem, StemBranch};

zhan_core::symbol_table! {
    /// One of the twelve heavenly generals (天将).
    pub struct General: 12 = [
        "贵人", "腾蛇", "朱雀", "六合", "勾陈", "青龙", "天空", "白虎", "太常", "玄武", "太阴", "天后",
    ];
}

/// Ordinal names of the four courses.
pub const COURSE_NAMES: [&str; 4] = ["第一课", "第二课", "第三课", "第四课"];

/// Role names of the three transmissions.
pub const TRANSMISSION_NAMES: [&str; 3] = ["初传", "中传", "末传"];

/// Positions each course steps from the base pair.
const COURSE_STEP: i64 = 3;

/// Where the base pair of the first course comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CourseSeed {
    /// An independent uniform draw of stem, then branch.
    #[default]
    Random,
    /// The day pillar of the moment.
    DayPillar,
}

impl CourseSeed {
    /// Parse a course seed from a user-supplied string.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "random" | "随机" => Some(Self::Random),
            "day" | "day-pillar" | "day_pillar" | "日柱" => Some(Self::DayPillar),
            _ => None,
        }
    }
}

impl std::fmt::Display for CourseSeed {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Random => write!(f, "随机"),
            Self::DayPillar => write!(f, "日柱"),
        }
    }
}

/// One course (课): a stem over a branch and the general riding it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Course {
    /// Heavenly stem.
    pub stem: Stem,
    /// Earthly branch.
    pub branch: Branch,
    /// General of the branch.
    pub general: General,
}

impl Course {
    /// The course on `branch` with `stem`; the general follows the branch.
    pub fn new(stem: Stem, branch: Branch) -> Self {
        Self {
            stem,
            branch,
            general: General::from_index(branch.index() as i64),
        }
    }
}

impl std::fmt::Display for Course {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{} {}", self.stem, self.branch, self.general)
    }
}

/// A Da Liu Ren chart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DaLiuRenChart {
    /// When the chart was raised.
    pub moment: Moment,
    /// Four pillars of the moment.
    pub pillars: FourPillars,
    /// What the base pair was taken from.
    pub seed: CourseSeed,
    /// The four courses (四课).
    pub courses: [Course; 4],
    /// The three transmissions (三传): initial, middle, final.
    pub transmissions: [Course; 3],
}

/// The four courses stepping from `base`.
pub fn courses_from(base: StemBranch) -> [Course; 4] {
    std::array::from_fn(|i| {
        let step = COURSE_STEP * i as i64;
        Course::new(base.stem.offset(step), base.branch.offset(step))
    })
}

/// Raise a chart for a moment.
///
/// With [`CourseSeed::Random`] the base pair takes two draws from `source`,
/// the stem first. With [`CourseSeed::DayPillar`] nothing is drawn.
pub fn cast<S: RandomSource + ?Sized>(
    moment: Moment,
    seed: CourseSeed,
    source: &mut S,
) -> DaLiuRenChart {
    let pillars = moment.four_pillars();
    let base = match seed {
        CourseSeed::Random => {
            let stem = Stem::from_index(source.next_index(Stem::COUNT) as i64);
            let branch = Branch::from_index(source.next_index(Branch::COUNT) as i64);
            StemBranch::new(stem, branch)
        }
        CourseSeed::DayPillar => pillars.day,
    };
    debug!("liuren base pair {base} ({seed})");

    let courses = courses_from(base);
    let transmissions = [courses[0], courses[1], courses[2]];
    DaLiuRenChart {
        moment,
        pillars,
        seed,
        courses,
        transmissions,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use zhan_core::SequenceSource;

    #[test]
    fn day_pillar_courses() {
        let mut source = SequenceSource::new([0.3]);
        let chart = cast(Moment::new(2024, 3, 15, 8), CourseSeed::DayPillar, &mut source);
        assert_eq!(source.draws(), 0);
        let courses: Vec<String> = chart.courses.iter().map(Course::to_string).collect();
        assert_eq!(courses, ["丙寅 朱雀", "己巳 青龙", "壬申 太常", "乙亥 天后"]);
    }

    #[test]
    fn random_seed_draws_stem_then_branch() {
        let mut source = SequenceSource::new([0.25, 0.5]);
        let chart = cast(Moment::new(2024, 3, 15, 8), CourseSeed::Random, &mut source);
        assert_eq!(source.draws(), 2);
        assert_eq!(chart.courses[0].to_string(), "丙午 天空");
        assert_eq!(chart.seed, CourseSeed::Random);
        // pillars are still computed from the moment
        assert_eq!(chart.pillars.day.to_string(), "丙寅");
    }

    #[test]
    fn courses_wrap_both_cycles() {
        let base = StemBranch::new(Stem::from_name("壬").unwrap(), Branch::from_name("戌").unwrap());
        let courses = courses_from(base);
        assert_eq!(courses[1].to_string(), "乙丑 腾蛇");
        assert_eq!(courses[3].to_string(), "辛未 白虎");
    }

    #[test]
    fn course_seed_parse() {
        assert_eq!(CourseSeed::parse("day"), Some(CourseSeed::DayPillar));
        assert_eq!(CourseSeed::parse("RANDOM"), Some(CourseSeed::Random));
        assert_eq!(CourseSeed::parse("hour"), None);
    }

    proptest! {
        #[test]
        fn transmissions_are_the_first_three_courses(seed in any::<u64>(), hour in 0u32..24) {
            let mut rng = StdRng::seed_from_u64(seed);
            let chart = cast(Moment::new(2024, 3, 15, hour), CourseSeed::Random, &mut rng);
            prop_assert_eq!(&chart.transmissions[..], &chart.courses[..3]);
            for course in &chart.courses {
                prop_assert_eq!(course.general.index(), course.branch.index());
            }
        }
    }
}
