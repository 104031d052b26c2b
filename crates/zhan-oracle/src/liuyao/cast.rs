//! Casting the six lines.

use log::debug;
use serde::{Deserialize, Serialize};

use zhan_core::{Moment, RandomSource, cycle};

use super::hexagram::Hexagram;
use super::trigram::Trigram;
use super::{Line, Polarity};

/// Value of a coin landing heads.
const HEADS: u8 = 3;
/// Value of a coin landing tails.
const TAILS: u8 = 2;

/// How the six lines are obtained.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CastMode {
    /// Three simulated coins per line.
    #[default]
    Random,
    /// Numbers derived from the date and hour.
    Time,
}

impl CastMode {
    /// Parse a cast mode from a user-supplied string.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "random" | "coin" | "coins" | "随机" => Some(Self::Random),
            "time" | "date" | "时间" => Some(Self::Time),
            _ => None,
        }
    }
}

impl std::fmt::Display for CastMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Random => write!(f, "随机起卦"),
            Self::Time => write!(f, "时间起卦"),
        }
    }
}

/// The numbers a time cast derives from its moment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeCastNumbers {
    /// Upper trigram number, `(y + m + d) mod 8`, zero read as 8.
    pub upper: usize,
    /// Lower trigram number, `(y + m + d + h) mod 8`, zero read as 8.
    pub lower: usize,
    /// Changing line position, `(y + m + d + h) mod 6`, zero read as 6.
    pub changing: usize,
}

impl TimeCastNumbers {
    /// Derive the cast numbers of a moment.
    pub fn from_moment(moment: Moment) -> Self {
        let date = moment.date_sum();
        let with_hour = date + i64::from(moment.hour);
        Self {
            upper: cycle::one_based(date, 8),
            lower: cycle::one_based(with_hour, 8),
            changing: cycle::one_based(with_hour, 6),
        }
    }
}

/// A cast six-line chart: the primary hexagram and, when lines change, the
/// resulting one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LiuYaoChart {
    /// When the cast was made.
    pub moment: Moment,
    /// How the lines were obtained.
    pub mode: CastMode,
    /// Cast numbers, for time casts only.
    pub numbers: Option<TimeCastNumbers>,
    /// The primary hexagram (本卦).
    pub primary: Hexagram,
    /// The resulting hexagram (变卦), when any line is changing.
    pub changed: Option<Hexagram>,
}

impl LiuYaoChart {
    /// Whether the primary hexagram has changing lines.
    pub fn has_changing_lines(&self) -> bool {
        self.primary.has_changing_lines()
    }
}

fn line_from_coins(position: u8, total: u8) -> Line {
    match total {
        6 => Line::new(position, Polarity::Yin, true),
        7 => Line::new(position, Polarity::Yang, false),
        8 => Line::new(position, Polarity::Yin, false),
        9 => Line::new(position, Polarity::Yang, true),
        _ => unreachable!("three coins of 2 or 3 sum to 6..=9"),
    }
}

/// Cast six lines by tossing three coins per line, bottom line first.
///
/// Heads count 3 and tails 2: 6 is a changing yin line, 7 a stable yang,
/// 8 a stable yin, 9 a changing yang.
pub fn random_lines<S: RandomSource + ?Sized>(source: &mut S) -> [Line; 6] {
    let mut lines = [Line::new(0, Polarity::Yin, false); 6];
    for (i, line) in lines.iter_mut().enumerate() {
        let mut total = 0;
        for _ in 0..3 {
            total += if source.coin() { HEADS } else { TAILS };
        }
        *line = line_from_coins(i as u8 + 1, total);
    }
    lines
}

/// Cast six lines from a moment.
///
/// Lines 1-3 take the lower trigram's pattern, lines 4-6 the upper's, and
/// exactly one line (at the changing position) is marked changing.
pub fn time_lines(moment: Moment) -> ([Line; 6], TimeCastNumbers) {
    let numbers = TimeCastNumbers::from_moment(moment);
    let lower = Trigram::from_number(numbers.lower).lines();
    let upper = Trigram::from_number(numbers.upper).lines();

    let lines = std::array::from_fn(|i| {
        let polarity = if i < 3 { lower[i] } else { upper[i - 3] };
        Line::new(i as u8 + 1, polarity, i + 1 == numbers.changing)
    });
    (lines, numbers)
}

/// Cast a six-line chart.
pub fn cast<S: RandomSource + ?Sized>(mode: CastMode, moment: Moment, source: &mut S) -> LiuYaoChart {
    let (lines, numbers) = match mode {
        CastMode::Random => (random_lines(source), None),
        CastMode::Time => {
            let (lines, numbers) = time_lines(moment);
            debug!(
                "time cast numbers: upper {} lower {} changing {}",
                numbers.upper, numbers.lower, numbers.changing
            );
            (lines, Some(numbers))
        }
    };

    let primary = Hexagram::from_lines(lines);
    let changed = primary.changed();
    debug!(
        "cast {} -> {}",
        primary.name,
        changed.as_ref().map_or("-", |h| h.name.as_str())
    );

    LiuYaoChart {
        moment,
        mode,
        numbers,
        primary,
        changed,
    }
}
