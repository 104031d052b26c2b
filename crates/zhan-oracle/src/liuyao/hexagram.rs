//! The sixty-four hexagrams (六十四卦).
//!
//! A hexagram is named by its upper and lower trigrams through a fully
//! populated 8×8 table, so an unnamed hexagram can only arise from a line
//! pattern the trigram table does not know. That case yields
//! [`UNKNOWN_HEXAGRAM`] instead of failing.

use serde::{Deserialize, Serialize};

use super::trigram::{Trigram, UNKNOWN_TRIGRAM};
use super::{Line, Polarity};

/// Sentinel name for an unmapped trigram pair.
pub const UNKNOWN_HEXAGRAM: &str = "未知卦";

/// Hexagram names: `NAMES[upper][lower]`, both in trigram order.
const NAMES: [[&str; 8]; 8] = [
    ["乾为天", "天泽履", "天火同人", "天雷无妄", "天风姤", "天水讼", "天山遁", "天地否"],
    ["泽天夬", "兑为泽", "泽火革", "泽雷随", "泽风大过", "泽水困", "泽山咸", "泽地萃"],
    ["火天大有", "火泽睽", "离为火", "火雷噬嗑", "火风鼎", "火水未济", "火山旅", "火地晋"],
    ["雷天大壮", "雷泽归妹", "雷火丰", "震为雷", "雷风恒", "雷水解", "雷山小过", "雷地豫"],
    ["风天小畜", "风泽中孚", "风火家人", "风雷益", "巽为风", "风水涣", "风山渐", "风地观"],
    ["水天需", "水泽节", "水火既济", "水雷屯", "水风井", "坎为水", "水山蹇", "水地比"],
    ["山天大畜", "山泽损", "山火贲", "山雷颐", "山风蛊", "山水蒙", "艮为山", "山地剥"],
    ["地天泰", "地泽临", "地火明夷", "地雷复", "地风升", "地水师", "地山谦", "坤为地"],
];

/// King Wen sequence numbers (卦序), laid out like [`NAMES`].
const KING_WEN: [[u8; 8]; 8] = [
    [1, 10, 13, 25, 44, 6, 33, 12],
    [43, 58, 49, 17, 28, 47, 31, 45],
    [14, 38, 30, 21, 50, 64, 56, 35],
    [34, 54, 55, 51, 32, 40, 62, 16],
    [9, 61, 37, 42, 57, 59, 53, 20],
    [5, 60, 63, 3, 48, 29, 39, 8],
    [26, 41, 22, 27, 18, 4, 52, 23],
    [11, 19, 36, 24, 46, 7, 15, 2],
];

/// Name of the hexagram with the given upper and lower trigrams.
pub fn hexagram_name(upper: Trigram, lower: Trigram) -> &'static str {
    NAMES[upper.index()][lower.index()]
}

/// King Wen number of the hexagram with the given upper and lower trigrams.
pub fn hexagram_number(upper: Trigram, lower: Trigram) -> u8 {
    KING_WEN[upper.index()][lower.index()]
}

/// Six lines with the name and trigrams derived from them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hexagram {
    /// Hexagram name, or [`UNKNOWN_HEXAGRAM`].
    pub name: String,
    /// King Wen sequence number, when the hexagram is known.
    pub number: Option<u8>,
    /// Trigram of lines 4-6.
    pub upper: Option<Trigram>,
    /// Trigram of lines 1-3.
    pub lower: Option<Trigram>,
    /// Lines bottom to top.
    pub lines: [Line; 6],
}

impl Hexagram {
    /// Derive name and trigrams from six lines.
    pub fn from_lines(lines: [Line; 6]) -> Self {
        let polarities = lines.map(|line| line.polarity);
        let lower = Trigram::from_lines([polarities[0], polarities[1], polarities[2]]);
        let upper = Trigram::from_lines([polarities[3], polarities[4], polarities[5]]);

        let (name, number) = match (upper, lower) {
            (Some(upper), Some(lower)) => (
                hexagram_name(upper, lower),
                Some(hexagram_number(upper, lower)),
            ),
            _ => (UNKNOWN_HEXAGRAM, None),
        };

        Self {
            name: name.to_string(),
            number,
            upper,
            lower,
            lines,
        }
    }

    /// Whether any line is changing.
    pub fn has_changing_lines(&self) -> bool {
        self.lines.iter().any(|line| line.changing)
    }

    /// Positions (1-6) of the changing lines.
    pub fn changing_positions(&self) -> Vec<u8> {
        self.lines
            .iter()
            .filter(|line| line.changing)
            .map(|line| line.position)
            .collect()
    }

    /// The resulting hexagram (变卦): every changing line flips polarity and
    /// settles. `None` when no line is changing.
    pub fn changed(&self) -> Option<Hexagram> {
        if !self.has_changing_lines() {
            return None;
        }
        let lines = self.lines.map(|line| Line {
            polarity: if line.changing {
                line.polarity.flipped()
            } else {
                line.polarity
            },
            changing: false,
            ..line
        });
        Some(Self::from_lines(lines))
    }

    /// Name of the upper trigram, or the unknown sentinel.
    pub fn upper_name(&self) -> &'static str {
        self.upper.map_or(UNKNOWN_TRIGRAM, Trigram::name)
    }

    /// Name of the lower trigram, or the unknown sentinel.
    pub fn lower_name(&self) -> &'static str {
        self.lower.map_or(UNKNOWN_TRIGRAM, Trigram::name)
    }

    /// Polarities bottom to top.
    pub fn polarities(&self) -> [Polarity; 6] {
        self.lines.map(|line| line.polarity)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::liuyao::Polarity::{Yang, Yin};

    fn lines_of(upper: Trigram, lower: Trigram) -> [Line; 6] {
        let l = lower.lines();
        let u = upper.lines();
        let polarities = [l[0], l[1], l[2], u[0], u[1], u[2]];
        std::array::from_fn(|i| Line::new(i as u8 + 1, polarities[i], false))
    }

    #[test]
    fn every_table_entry_names_itself() {
        for upper in Trigram::all() {
            for lower in Trigram::all() {
                let hexagram = Hexagram::from_lines(lines_of(upper, lower));
                assert_eq!(hexagram.name, hexagram_name(upper, lower));
                assert_eq!(hexagram.upper, Some(upper));
                assert_eq!(hexagram.lower, Some(lower));
            }
        }
    }

    #[test]
    fn king_wen_numbers_cover_one_to_sixty_four() {
        let mut seen: Vec<u8> = KING_WEN.iter().flatten().copied().collect();
        seen.sort_unstable();
        let expected: Vec<u8> = (1..=64).collect();
        assert_eq!(seen, expected);
    }

    #[test]
    fn names_are_distinct() {
        let mut names: Vec<&str> = NAMES.iter().flatten().copied().collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), 64);
    }

    #[test]
    fn pure_hexagrams() {
        let qian = Trigram::from_name("乾").unwrap();
        let kun = Trigram::from_name("坤").unwrap();
        let h = Hexagram::from_lines(lines_of(qian, qian));
        assert_eq!(h.name, "乾为天");
        assert_eq!(h.number, Some(1));
        let h = Hexagram::from_lines(lines_of(kun, kun));
        assert_eq!(h.name, "坤为地");
        assert_eq!(h.number, Some(2));
        let h = Hexagram::from_lines(lines_of(kun, qian));
        assert_eq!(h.name, "地天泰");
        assert_eq!(h.upper_name(), "坤");
        assert_eq!(h.lower_name(), "乾");
    }

    #[test]
    fn changed_flips_only_changing_lines() {
        let qian = Trigram::from_name("乾").unwrap();
        let mut lines = lines_of(qian, qian);
        lines[0].changing = true;
        let primary = Hexagram::from_lines(lines);
        let changed = primary.changed().unwrap();

        assert_eq!(changed.polarities(), [Yin, Yang, Yang, Yang, Yang, Yang]);
        assert!(!changed.has_changing_lines());
        // the lower trigram 011 is 兑 in the pattern table
        assert_eq!(changed.name, "天泽履");
        assert_eq!(primary.changing_positions(), vec![1]);
    }

    #[test]
    fn no_changing_lines_no_changed_hexagram() {
        let primary = Hexagram::from_lines(lines_of(
            Trigram::from_name("坎").unwrap(),
            Trigram::from_name("离").unwrap(),
        ));
        assert_eq!(primary.name, "水火既济");
        assert!(primary.changed().is_none());
        assert!(primary.changing_positions().is_empty());
    }
}
