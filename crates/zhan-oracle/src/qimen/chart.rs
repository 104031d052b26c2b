//! Laying out a Qi Men chart.

use log::{debug, trace};
use serde::{Deserialize, Serialize};

use zhan_core::{Branch, FourPillars, Moment, Stem};

use super::tables::{
    Gate, Palace, Spirit, Star, branch_palace, horse_branch, stem_clash, tomb_branch,
    void_branches,
};

/// Symbolic relations flagged on a palace.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PalaceFlags {
    /// 击刑: the stem this palace's heaven stem strikes sits in another palace.
    pub clash: bool,
    /// 入墓: the heaven stem's tomb branch is this palace's earth branch.
    pub tomb: bool,
    /// 伏吟: never detected, always false.
    pub stillness_echo: bool,
    /// 反吟: the earth branch opposes the branch this palace holds unshifted.
    pub reverse_echo: bool,
    /// 空亡: the earth branch is one of the chart's void branches.
    pub void: bool,
}

/// One palace of the chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PalaceRecord {
    /// Which palace.
    pub palace: Palace,
    /// Heaven stem (天盘).
    pub heaven_stem: Stem,
    /// Earth branch (地盘).
    pub earth_branch: Branch,
    /// Gate.
    pub gate: Gate,
    /// Star.
    pub star: Star,
    /// Spirit.
    pub spirit: Spirit,
    /// The two stems following the heaven stem (暗干).
    pub hidden_stems: [Stem; 2],
    /// Derived annotations.
    pub flags: PalaceFlags,
}

/// Where the horse star (驿马) falls.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HorseStar {
    /// Horse branch of the hour branch's triad.
    pub branch: Branch,
    /// Palace holding that branch.
    pub palace: Palace,
}

/// A Qi Men Dun Jia chart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QiMenChart {
    /// When the chart was laid out.
    pub moment: Moment,
    /// Four pillars of the moment.
    pub pillars: FourPillars,
    /// Cycle number (局数), `1..=9`.
    pub cycle_number: u8,
    /// Duty star (值符).
    pub duty_star: Star,
    /// Duty gate (值使).
    pub duty_gate: Gate,
    /// Cycle-head stem (旬首).
    pub head_stem: Stem,
    /// Void branches of the cycle-head stem.
    pub void_branches: [Branch; 2],
    /// Horse star position.
    pub horse: HorseStar,
    /// Palace the duty star lands in (值符落宫).
    pub duty_star_palace: Option<Palace>,
    /// Palace the duty gate lands in (值使落宫).
    pub duty_gate_palace: Option<Palace>,
    /// The nine palaces in Luo Shu number order.
    pub palaces: [PalaceRecord; 9],
}

impl QiMenChart {
    /// The record of `palace`.
    pub fn palace(&self, palace: Palace) -> &PalaceRecord {
        &self.palaces[palace.index()]
    }
}

/// `((month + day + hour) mod 9) + 1`.
pub fn cycle_number(moment: Moment) -> u8 {
    let sum = i64::from(moment.month) + i64::from(moment.day) + i64::from(moment.hour);
    zhan_core::cycle::wrap(sum, 9) as u8 + 1
}

fn lay_palace(palace: Palace, cycle: i64, hour_branch: Branch) -> PalaceRecord {
    let offset = palace.index() as i64;
    let heaven_stem = Stem::from_index(cycle + offset);
    PalaceRecord {
        palace,
        heaven_stem,
        earth_branch: hour_branch.offset(offset),
        gate: Gate::from_index(cycle + offset),
        star: Star::from_index(cycle + offset),
        spirit: Spirit::from_index(cycle + offset),
        hidden_stems: [heaven_stem.offset(1), heaven_stem.offset(2)],
        flags: PalaceFlags::default(),
    }
}

fn annotate(palaces: &[PalaceRecord; 9], record: &PalaceRecord, voids: [Branch; 2]) -> PalaceFlags {
    let clash = stem_clash(record.heaven_stem).is_some_and(|target| {
        palaces
            .iter()
            .any(|other| other.palace != record.palace && other.heaven_stem == target)
    });
    let baseline = Branch::from_index(record.palace.index() as i64);

    PalaceFlags {
        clash,
        tomb: tomb_branch(record.heaven_stem) == record.earth_branch,
        stillness_echo: false,
        reverse_echo: record.earth_branch.opposite() == baseline,
        void: voids.contains(&record.earth_branch),
    }
}

/// Lay out the chart for a moment.
pub fn cast(moment: Moment) -> QiMenChart {
    let cycle = cycle_number(moment);
    let pillars = moment.four_pillars();
    let duty_star = Star::from_index(i64::from(cycle) - 1);
    let duty_gate = Gate::from_index(i64::from(cycle) - 1);
    let head_stem = Stem::from_index(moment.date_sum());
    let voids = void_branches(head_stem);
    debug!("qimen cycle {cycle}: duty star {duty_star}, duty gate {duty_gate}, head stem {head_stem}");

    let hour_branch = moment.hour_branch();
    let mut palaces: [PalaceRecord; 9] =
        std::array::from_fn(|i| lay_palace(Palace::from_index(i as i64), i64::from(cycle), hour_branch));
    let flags = palaces.map(|record| annotate(&palaces, &record, voids));
    for (record, flags) in palaces.iter_mut().zip(flags) {
        record.flags = flags;
        trace!("{} {record:?}", record.palace);
    }

    let horse_at = horse_branch(hour_branch);
    let duty_star_palace = palaces.iter().find(|p| p.star == duty_star).map(|p| p.palace);
    let duty_gate_palace = palaces.iter().find(|p| p.gate == duty_gate).map(|p| p.palace);

    QiMenChart {
        moment,
        pillars,
        cycle_number: cycle,
        duty_star,
        duty_gate,
        head_stem,
        void_branches: voids,
        horse: HorseStar {
            branch: horse_at,
            palace: branch_palace(horse_at),
        },
        duty_star_palace,
        duty_gate_palace,
        palaces,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn golden() -> QiMenChart {
        cast(Moment::new(2024, 3, 15, 8))
    }

    #[test]
    fn chart_header_for_fixed_moment() {
        let chart = golden();
        assert_eq!(chart.cycle_number, 9);
        assert_eq!(chart.duty_star.name(), "天禽");
        assert_eq!(chart.duty_gate.name(), "休门");
        assert_eq!(chart.head_stem.name(), "丙");
        assert_eq!(chart.void_branches.map(Branch::name), ["午", "未"]);
        assert_eq!(chart.horse.branch.name(), "寅");
        assert_eq!(chart.horse.palace.number(), 8);
        assert_eq!(chart.duty_star_palace.map(Palace::number), Some(9));
        assert_eq!(chart.duty_gate_palace.map(Palace::number), Some(8));
    }

    #[test]
    fn palaces_for_fixed_moment() {
        let rows: Vec<String> = golden()
            .palaces
            .iter()
            .map(|p| {
                format!(
                    "{} {} {} {} {} {}{}",
                    p.heaven_stem,
                    p.earth_branch,
                    p.gate,
                    p.star,
                    p.spirit,
                    p.hidden_stems[0],
                    p.hidden_stems[1]
                )
            })
            .collect();
        assert_eq!(
            rows,
            [
                "癸 辰 生门 天蓬 腾蛇 甲乙",
                "甲 巳 伤门 天任 太阴 乙丙",
                "乙 午 杜门 天冲 六合 丙丁",
                "丙 未 景门 天辅 白虎 丁戊",
                "丁 申 死门 天英 玄武 戊己",
                "戊 酉 惊门 天芮 九地 己庚",
                "己 戌 开门 天柱 九天 庚辛",
                "庚 亥 休门 天心 值符 辛壬",
                "辛 子 生门 天禽 腾蛇 壬癸",
            ]
        );
    }

    #[test]
    fn flags_for_fixed_moment() {
        let chart = golden();
        let clash: Vec<bool> = chart.palaces.iter().map(|p| p.flags.clash).collect();
        assert_eq!(clash, [true, true, true, false, true, false, false, true, true]);
        let void: Vec<usize> = chart
            .palaces
            .iter()
            .filter(|p| p.flags.void)
            .map(|p| p.palace.number())
            .collect();
        assert_eq!(void, [3, 4]);
        assert!(chart.palaces.iter().all(|p| !p.flags.tomb));
        assert!(chart.palaces.iter().all(|p| !p.flags.reverse_echo));
    }

    #[test]
    fn noon_shift_puts_every_palace_in_reverse_echo() {
        let chart = cast(Moment::new(2024, 3, 15, 12));
        assert!(chart.palaces.iter().all(|p| p.flags.reverse_echo));
    }

    #[test]
    fn tomb_entry_is_detected() {
        // cycle 5 puts 己 over 丑 in 坎一宫, and 丑 is 己's tomb
        let chart = cast(Moment::new(2024, 1, 1, 2));
        assert_eq!(chart.cycle_number, 5);
        let kan = chart.palace(Palace::from_number(1));
        assert_eq!(kan.heaven_stem.name(), "己");
        assert_eq!(kan.earth_branch.name(), "丑");
        assert!(kan.flags.tomb);
    }

    #[test]
    fn stillness_echo_is_never_flagged() {
        for hour in 0..24 {
            let chart = cast(Moment::new(2024, 6, 1, hour));
            assert!(chart.palaces.iter().all(|p| !p.flags.stillness_echo));
        }
    }

    proptest! {
        #[test]
        fn nine_palaces_cover_every_offset(
            year in 1i32..4000,
            month in 1u32..=12,
            day in 1u32..=31,
            hour in 0u32..24,
        ) {
            let chart = cast(Moment::new(year, month, day, hour));
            prop_assert!((1..=9).contains(&chart.cycle_number));

            let mut numbers: Vec<usize> = chart.palaces.iter().map(|p| p.palace.number()).collect();
            numbers.sort_unstable();
            prop_assert_eq!(numbers, (1..=9).collect::<Vec<_>>());

            let cycle = i64::from(chart.cycle_number);
            for (offset, p) in chart.palaces.iter().enumerate() {
                prop_assert_eq!(p.heaven_stem, Stem::from_index(cycle + offset as i64));
                prop_assert_eq!(p.star, Star::from_index(cycle + offset as i64));
            }
            // nine consecutive stars hold every star once
            let mut stars: Vec<usize> = chart.palaces.iter().map(|p| p.star.index()).collect();
            stars.sort_unstable();
            prop_assert_eq!(stars, (0..9).collect::<Vec<_>>());
        }
    }
}
