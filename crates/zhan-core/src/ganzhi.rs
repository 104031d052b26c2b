//! Heavenly stems, earthly branches, and their sexagesimal pairs.
//!
//! Both label sets are cyclic. Every derivation in the chart engines is
//! positional arithmetic over these two tables, so their order is fixed.

use serde::{Deserialize, Serialize};

crate::symbol_table! {
    /// One of the ten heavenly stems (天干).
    pub struct Stem: 10 = ["甲", "乙", "丙", "丁", "戊", "己", "庚", "辛", "壬", "癸"];
}

crate::symbol_table! {
    /// One of the twelve earthly branches (地支).
    pub struct Branch: 12 = [
        "子", "丑", "寅", "卯", "辰", "巳", "午", "未", "申", "酉", "戌", "亥",
    ];
}

/// Opposing branch of each branch (六冲), by branch position.
const BRANCH_OPPOSITE: [u8; 12] = [6, 7, 8, 9, 10, 11, 0, 1, 2, 3, 4, 5];

/// Stems stored inside each branch (地支藏干), principal stem first.
const HIDDEN_STEMS: [&[u8]; 12] = [
    &[9],       // 子: 癸
    &[5, 9, 7], // 丑: 己 癸 辛
    &[0, 2, 4], // 寅: 甲 丙 戊
    &[1],       // 卯: 乙
    &[4, 1, 9], // 辰: 戊 乙 癸
    &[2, 4, 6], // 巳: 丙 戊 庚
    &[3, 5],    // 午: 丁 己
    &[5, 3, 1], // 未: 己 丁 乙
    &[6, 8, 4], // 申: 庚 壬 戊
    &[7],       // 酉: 辛
    &[4, 7, 3], // 戌: 戊 辛 丁
    &[8, 0],    // 亥: 壬 甲
];

impl Branch {
    /// The branch this one clashes with across the zodiac.
    pub fn opposite(self) -> Branch {
        Branch::from_index(i64::from(BRANCH_OPPOSITE[self.index()]))
    }

    /// Stems hidden in this branch, principal stem first.
    pub fn hidden_stems(self) -> Vec<Stem> {
        HIDDEN_STEMS[self.index()]
            .iter()
            .map(|&i| Stem::from_index(i64::from(i)))
            .collect()
    }
}

/// One position of the sexagesimal cycle: a stem paired with a branch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct StemBranch {
    /// The heavenly stem.
    pub stem: Stem,
    /// The earthly branch.
    pub branch: Branch,
}

impl StemBranch {
    /// Pair a stem with a branch.
    pub fn new(stem: Stem, branch: Branch) -> Self {
        Self { stem, branch }
    }
}

impl std::fmt::Display for StemBranch {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.stem, self.branch)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_sizes() {
        assert_eq!(Stem::all().count(), 10);
        assert_eq!(Branch::all().count(), 12);
    }

    #[test]
    fn from_index_wraps_both_ways() {
        assert_eq!(Stem::from_index(10), Stem::from_index(0));
        assert_eq!(Stem::from_index(-1).name(), "癸");
        assert_eq!(Branch::from_index(25).name(), "丑");
        assert_eq!(Branch::from_index(-12).name(), "子");
    }

    #[test]
    fn from_name_is_inverse_of_name() {
        for stem in Stem::all() {
            assert_eq!(Stem::from_name(stem.name()), Some(stem));
        }
        for branch in Branch::all() {
            assert_eq!(Branch::from_name(branch.name()), Some(branch));
        }
        assert_eq!(Stem::from_name("子"), None);
        assert_eq!(Branch::from_name(" 午 ").map(Branch::index), Some(6));
    }

    #[test]
    fn offset_moves_along_cycle() {
        let ren = Stem::from_name("壬").unwrap();
        assert_eq!(ren.offset(1).name(), "癸");
        assert_eq!(ren.offset(2).name(), "甲");
        assert_eq!(ren.offset(-8).name(), "甲");
    }

    #[test]
    fn opposite_is_an_involution() {
        for branch in Branch::all() {
            assert_ne!(branch.opposite(), branch);
            assert_eq!(branch.opposite().opposite(), branch);
        }
        assert_eq!(Branch::from_index(0).opposite().name(), "午");
        assert_eq!(Branch::from_index(2).opposite().name(), "申");
    }

    #[test]
    fn hidden_stems() {
        let zi = Branch::from_name("子").unwrap();
        assert_eq!(zi.hidden_stems(), vec![Stem::from_name("癸").unwrap()]);
        let yin: Vec<_> = Branch::from_name("寅")
            .unwrap()
            .hidden_stems()
            .into_iter()
            .map(Stem::name)
            .collect();
        assert_eq!(yin, ["甲", "丙", "戊"]);
        for branch in Branch::all() {
            assert!((1..=3).contains(&branch.hidden_stems().len()));
        }
    }

    #[test]
    fn stem_branch_display() {
        let pair = StemBranch::new(Stem::from_index(0), Branch::from_index(4));
        assert_eq!(pair.to_string(), "甲辰");
    }

    #[test]
    fn serializes_as_labels() {
        let pair = StemBranch::new(Stem::from_index(2), Branch::from_index(2));
        let json = serde_json::to_string(&pair).unwrap();
        assert_eq!(json, r#"{"stem":"丙","branch":"寅"}"#);
        let back: StemBranch = serde_json::from_str(&json).unwrap();
        assert_eq!(back, pair);
        assert!(serde_json::from_str::<Stem>(r#""子""#).is_err());
    }
}
