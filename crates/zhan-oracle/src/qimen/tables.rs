//! Qi Men symbol tables and the fixed relations between them.

use zhan_core::{Branch, Stem};

zhan_core::symbol_table! {
    /// One of the eight gates (八门).
    pub struct Gate: 8 = ["休门", "生门", "伤门", "杜门", "景门", "死门", "惊门", "开门"];
}

zhan_core::symbol_table! {
    /// One of the nine stars (九星).
    pub struct Star: 9 = [
        "天蓬", "天任", "天冲", "天辅", "天英", "天芮", "天柱", "天心", "天禽",
    ];
}

zhan_core::symbol_table! {
    /// One of the eight spirits (八神).
    pub struct Spirit: 8 = ["值符", "腾蛇", "太阴", "六合", "白虎", "玄武", "九地", "九天"];
}

zhan_core::symbol_table! {
    /// One of the nine palaces, in Luo Shu number order (坎一宫 = 1).
    pub struct Palace: 9 = [
        "坎一宫", "坤二宫", "震三宫", "巽四宫", "中五宫", "乾六宫", "兑七宫", "艮八宫", "离九宫",
    ];
}

/// Palace numbers laid out on the 3×3 Luo Shu grid, top row first.
pub const GRID: [[usize; 3]; 3] = [[4, 9, 2], [3, 5, 7], [8, 1, 6]];

/// Stem each stem strikes (击刑), by stem position. 戊 and 己 strike none.
const STEM_CLASH: [Option<u8>; 10] = [
    Some(6), // 甲 → 庚
    Some(7), // 乙 → 辛
    Some(8), // 丙 → 壬
    Some(9), // 丁 → 癸
    None,
    None,
    Some(0), // 庚 → 甲
    Some(1), // 辛 → 乙
    Some(2), // 壬 → 丙
    Some(3), // 癸 → 丁
];

/// Tomb branch (墓) of each stem.
const TOMB_BRANCH: [u8; 10] = [7, 10, 10, 1, 10, 1, 1, 4, 4, 7];

/// Void branches (空亡) of the decade headed by each stem.
const VOID_BRANCHES: [[u8; 2]; 10] = [
    [10, 11],
    [8, 9],
    [6, 7],
    [4, 5],
    [2, 3],
    [0, 1],
    [10, 11],
    [8, 9],
    [6, 7],
    [4, 5],
];

/// Horse branch (驿马) of each branch's triad: 申子辰 → 寅, 寅午戌 → 申,
/// 巳酉丑 → 亥, 亥卯未 → 巳.
const HORSE_BRANCH: [u8; 12] = [2, 11, 8, 5, 2, 11, 8, 5, 2, 11, 8, 5];

/// Palace number each branch sits in.
const BRANCH_PALACE: [u8; 12] = [1, 8, 8, 3, 4, 4, 9, 2, 2, 7, 6, 6];

impl Palace {
    /// The palace with Luo Shu number `number`, wrapping into `1..=9`.
    pub fn from_number(number: usize) -> Self {
        Self::from_index(number as i64 - 1)
    }

    /// Luo Shu number, `1..=9`.
    pub fn number(self) -> usize {
        self.index() + 1
    }

    /// `(row, column)` of this palace on the grid.
    pub fn grid_position(self) -> (usize, usize) {
        for (row, numbers) in GRID.iter().enumerate() {
            if let Some(col) = numbers.iter().position(|&n| n == self.number()) {
                return (row, col);
            }
        }
        unreachable!("every palace number appears on the grid")
    }
}

/// The stem `stem` strikes, if any.
pub fn stem_clash(stem: Stem) -> Option<Stem> {
    STEM_CLASH[stem.index()].map(|i| Stem::from_index(i64::from(i)))
}

/// The branch `stem` is entombed in.
pub fn tomb_branch(stem: Stem) -> Branch {
    Branch::from_index(i64::from(TOMB_BRANCH[stem.index()]))
}

/// The two void branches of the decade headed by `head`.
pub fn void_branches(head: Stem) -> [Branch; 2] {
    VOID_BRANCHES[head.index()].map(|i| Branch::from_index(i64::from(i)))
}

/// The horse branch for `branch`.
pub fn horse_branch(branch: Branch) -> Branch {
    Branch::from_index(i64::from(HORSE_BRANCH[branch.index()]))
}

/// The palace `branch` sits in.
pub fn branch_palace(branch: Branch) -> Palace {
    Palace::from_number(usize::from(BRANCH_PALACE[branch.index()]))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stem(name: &str) -> Stem {
        Stem::from_name(name).unwrap()
    }

    fn branch(name: &str) -> Branch {
        Branch::from_name(name).unwrap()
    }

    #[test]
    fn table_sizes() {
        assert_eq!(Gate::COUNT, 8);
        assert_eq!(Star::COUNT, 9);
        assert_eq!(Spirit::COUNT, 8);
        assert_eq!(Palace::COUNT, 9);
    }

    #[test]
    fn grid_holds_every_palace_once() {
        let mut numbers: Vec<usize> = GRID.iter().flatten().copied().collect();
        numbers.sort_unstable();
        assert_eq!(numbers, (1..=9).collect::<Vec<_>>());
        assert_eq!(Palace::from_number(4).grid_position(), (0, 0));
        assert_eq!(Palace::from_number(5).grid_position(), (1, 1));
        assert_eq!(Palace::from_number(1).grid_position(), (2, 1));
        assert_eq!(Palace::from_number(6).name(), "乾六宫");
    }

    #[test]
    fn clash_pairs_are_mutual() {
        for s in Stem::all() {
            if let Some(target) = stem_clash(s) {
                assert_eq!(stem_clash(target), Some(s));
            }
        }
        assert_eq!(stem_clash(stem("戊")), None);
        assert_eq!(stem_clash(stem("甲")), Some(stem("庚")));
    }

    #[test]
    fn tombs_and_voids() {
        assert_eq!(tomb_branch(stem("甲")), branch("未"));
        assert_eq!(tomb_branch(stem("丙")), branch("戌"));
        assert_eq!(void_branches(stem("甲")), [branch("戌"), branch("亥")]);
        assert_eq!(void_branches(stem("丙")), [branch("午"), branch("未")]);
    }

    #[test]
    fn horse_follows_triads() {
        for name in ["申", "子", "辰"] {
            assert_eq!(horse_branch(branch(name)), branch("寅"));
        }
        for name in ["亥", "卯", "未"] {
            assert_eq!(horse_branch(branch(name)), branch("巳"));
        }
        assert_eq!(branch_palace(branch("寅")).name(), "艮八宫");
        assert_eq!(branch_palace(branch("午")).name(), "离九宫");
    }
}
