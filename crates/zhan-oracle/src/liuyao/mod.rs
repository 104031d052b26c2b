//! Six-line (六爻) divination.
//!
//! Six lines are cast bottom to top, either by simulated coin tosses or from
//! the date. Lines 1-3 and 4-6 name the lower and upper trigrams, which in
//! turn name one of the sixty-four hexagrams. Changing lines produce a
//! second, resulting hexagram.

pub mod cast;
pub mod hexagram;
pub mod text;
pub mod trigram;

pub use cast::{CastMode, LiuYaoChart, TimeCastNumbers, cast, random_lines, time_lines};
pub use hexagram::{Hexagram, UNKNOWN_HEXAGRAM};
pub use text::to_text;
pub use trigram::{Element, Trigram, UNKNOWN_TRIGRAM};

use serde::{Deserialize, Serialize};

/// Polarity of a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Polarity {
    /// Solid line (阳).
    #[serde(rename = "阳")]
    Yang,
    /// Broken line (阴).
    #[serde(rename = "阴")]
    Yin,
}

impl Polarity {
    /// The opposite polarity.
    pub fn flipped(self) -> Self {
        match self {
            Self::Yang => Self::Yin,
            Self::Yin => Self::Yang,
        }
    }

    /// Whether this is a solid line.
    pub fn is_yang(self) -> bool {
        self == Self::Yang
    }

    /// Name of a line of this polarity (阳爻 / 阴爻).
    pub fn line_name(self) -> &'static str {
        match self {
            Self::Yang => "阳爻",
            Self::Yin => "阴爻",
        }
    }
}

impl std::fmt::Display for Polarity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Yang => write!(f, "阳"),
            Self::Yin => write!(f, "阴"),
        }
    }
}

/// One line of a hexagram.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Line {
    /// Position from the bottom, 1-6.
    pub position: u8,
    /// Solid or broken.
    pub polarity: Polarity,
    /// Whether the line is changing (动爻) and flips in the resulting hexagram.
    pub changing: bool,
}

impl Line {
    /// Create a line.
    pub fn new(position: u8, polarity: Polarity, changing: bool) -> Self {
        Self {
            position,
            polarity,
            changing,
        }
    }
}

impl std::fmt::Display for Line {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}爻：{}", self.position, self.polarity.line_name())?;
        if self.changing {
            write!(f, "（动爻）")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flipped_twice_is_identity() {
        assert_eq!(Polarity::Yang.flipped(), Polarity::Yin);
        assert_eq!(Polarity::Yin.flipped().flipped(), Polarity::Yin);
    }

    #[test]
    fn line_display() {
        assert_eq!(Line::new(1, Polarity::Yang, false).to_string(), "1爻：阳爻");
        assert_eq!(
            Line::new(4, Polarity::Yin, true).to_string(),
            "4爻：阴爻（动爻）"
        );
    }

    #[test]
    fn polarity_serializes_as_label() {
        assert_eq!(serde_json::to_string(&Polarity::Yin).unwrap(), r#""阴""#);
    }
}
