//! The simplified four-pillars calendar.
//!
//! Maps a wall-clock moment to year, month, day and hour stem-branch pairs
//! with plain modular arithmetic. This is not an astronomical calendar: the
//! month pillar ignores solar terms and the day pillar is not a true
//! sexagenary day count. Out-of-calendar inputs (month 13, hour 30) are
//! accepted as-is and simply wrap.

use chrono::{Datelike, Local, NaiveDate, NaiveDateTime, Timelike};
use serde::{Deserialize, Serialize};

use crate::error::{ZhanError, ZhanResult};
use crate::ganzhi::{Branch, Stem, StemBranch};

/// Layouts accepted by [`Moment::parse`] before falling back to date-and-hour forms.
const DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M",
];

/// A wall-clock moment at hour resolution. Every chart is cast from one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Moment {
    /// Calendar year.
    pub year: i32,
    /// Month of year, 1-based.
    pub month: u32,
    /// Day of month, 1-based.
    pub day: u32,
    /// Hour of day, 0-23.
    pub hour: u32,
}

impl Moment {
    /// Create a moment. No calendar validation is performed.
    pub fn new(year: i32, month: u32, day: u32, hour: u32) -> Self {
        Self {
            year,
            month,
            day,
            hour,
        }
    }

    /// The current local time.
    pub fn now() -> Self {
        Self::from(Local::now().naive_local())
    }

    /// Parse `YYYY-MM-DD HH:MM[:SS]`, `YYYY-MM-DDTHH:MM[:SS]`,
    /// `YYYY-MM-DD HH`, or `YYYY-MM-DD` (hour 0).
    pub fn parse(input: &str) -> ZhanResult<Self> {
        let input = input.trim();
        for format in DATETIME_FORMATS {
            if let Ok(datetime) = NaiveDateTime::parse_from_str(input, format) {
                return Ok(Self::from(datetime));
            }
        }

        let invalid = || ZhanError::InvalidTimestamp(input.to_string());
        let (date, hour) = match input.split_once(|c: char| c == ' ' || c == 'T') {
            Some((date, hour)) => {
                let hour = hour
                    .trim()
                    .parse::<u32>()
                    .ok()
                    .filter(|h| *h < 24)
                    .ok_or_else(invalid)?;
                (date, hour)
            }
            None => (input, 0),
        };
        let date = NaiveDate::parse_from_str(date, "%Y-%m-%d").map_err(|_| invalid())?;
        Ok(Self::new(date.year(), date.month(), date.day(), hour))
    }

    /// Sum of year, month and day, the seed of most date-driven derivations.
    pub fn date_sum(self) -> i64 {
        i64::from(self.year) + i64::from(self.month) + i64::from(self.day)
    }

    /// The two-hour watch (时辰) this hour falls in.
    pub fn hour_branch(self) -> Branch {
        Branch::from_index(i64::from(self.hour / 2))
    }

    /// The four pillars of this moment.
    pub fn four_pillars(self) -> FourPillars {
        compute_four_pillars(self)
    }
}

impl From<NaiveDateTime> for Moment {
    fn from(datetime: NaiveDateTime) -> Self {
        Self::new(
            datetime.year(),
            datetime.month(),
            datetime.day(),
            datetime.hour(),
        )
    }
}

impl std::fmt::Display for Moment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}年{}月{}日 {}时",
            self.year, self.month, self.day, self.hour
        )
    }
}

/// Year, month, day and hour pillars of a moment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FourPillars {
    /// Year pillar (年柱).
    pub year: StemBranch,
    /// Month pillar (月柱).
    pub month: StemBranch,
    /// Day pillar (日柱).
    pub day: StemBranch,
    /// Hour pillar (时柱).
    pub hour: StemBranch,
}

impl std::fmt::Display for FourPillars {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {} {} {}", self.year, self.month, self.day, self.hour)
    }
}

/// Compute the four pillars of a moment.
///
/// - year: stem `(y - 4) mod 10`, branch `(y - 4) mod 12`
/// - month: stem `((y - 4) * 12 + m - 1) mod 10`, branch `(m + 1) mod 12`
/// - day: stem `(y + m + d) mod 10`, branch `(y + m + d) mod 12`
/// - hour: branch `floor(h / 2) mod 12`, stem `(2 * day stem + hour branch) mod 10`
pub fn compute_four_pillars(moment: Moment) -> FourPillars {
    let year = i64::from(moment.year);
    let month = i64::from(moment.month);
    let date_sum = moment.date_sum();

    let day_stem = Stem::from_index(date_sum);
    let hour_branch = moment.hour_branch();

    FourPillars {
        year: StemBranch::new(Stem::from_index(year - 4), Branch::from_index(year - 4)),
        month: StemBranch::new(
            Stem::from_index((year - 4) * 12 + month - 1),
            Branch::from_index(month + 1),
        ),
        day: StemBranch::new(day_stem, Branch::from_index(date_sum)),
        hour: StemBranch::new(
            Stem::from_index(2 * day_stem.index() as i64 + hour_branch.index() as i64),
            hour_branch,
        ),
    }
}
