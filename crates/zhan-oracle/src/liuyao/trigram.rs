//! The eight trigrams (八卦) and the five phases they belong to.

use super::Polarity;

zhan_core::symbol_table! {
    /// One of the eight trigrams, in casting-number order (1 = 乾 … 8 = 坤).
    pub struct Trigram: 8 = ["乾", "兑", "离", "震", "巽", "坎", "艮", "坤"];
}

zhan_core::symbol_table! {
    /// One of the five phases (五行).
    pub struct Element: 5 = ["金", "木", "水", "火", "土"];
}

/// Sentinel name for a line pattern missing from the trigram table.
pub const UNKNOWN_TRIGRAM: &str = "未知";

const SYMBOLS: [&str; 8] = ["☰", "☱", "☲", "☳", "☴", "☵", "☶", "☷"];

/// Element of each trigram, as positions in [`Element::NAMES`].
const ELEMENTS: [u8; 8] = [0, 0, 3, 1, 1, 2, 4, 4];

use super::Polarity::{Yang, Yin};

/// Lines of each trigram, bottom to top.
const LINES: [[Polarity; 3]; 8] = [
    [Yang, Yang, Yang], // 乾
    [Yin, Yang, Yang],  // 兑
    [Yang, Yin, Yang],  // 离
    [Yang, Yang, Yin],  // 震
    [Yin, Yang, Yin],   // 巽
    [Yin, Yin, Yang],   // 坎
    [Yang, Yin, Yin],   // 艮
    [Yin, Yin, Yin],    // 坤
];

/// Bit pattern (yang = 1, bottom line first) naming each trigram.
const PATTERNS: [(&str, &str); 8] = [
    ("111", "乾"),
    ("011", "兑"),
    ("101", "离"),
    ("110", "震"),
    ("010", "巽"),
    ("001", "坎"),
    ("100", "艮"),
    ("000", "坤"),
];

impl Trigram {
    /// The trigram for a casting number, wrapping into `1..=8`.
    pub fn from_number(number: usize) -> Self {
        Self::from_index(number as i64 - 1)
    }

    /// Casting number of this trigram, `1..=8`.
    pub fn number(self) -> usize {
        self.index() + 1
    }

    /// Unicode trigram symbol.
    pub fn symbol(self) -> &'static str {
        SYMBOLS[self.index()]
    }

    /// The phase this trigram belongs to.
    pub fn element(self) -> Element {
        Element::from_index(i64::from(ELEMENTS[self.index()]))
    }

    /// Lines of this trigram, bottom to top.
    pub fn lines(self) -> [Polarity; 3] {
        LINES[self.index()]
    }

    /// Identify the trigram drawn by three lines read bottom to top.
    pub fn from_lines(lines: [Polarity; 3]) -> Option<Self> {
        let pattern: String = lines
            .iter()
            .map(|p| if p.is_yang() { '1' } else { '0' })
            .collect();
        PATTERNS
            .iter()
            .find(|(bits, _)| *bits == pattern)
            .and_then(|(_, name)| Self::from_name(name))
    }
}
