//! Zi Wei transcript.

use crate::transcript::{Transcript, or_placeholder};

use super::ZiWeiChart;

/// Render a Zi Wei chart as a line-oriented transcript.
pub fn to_text(chart: &ZiWeiChart) -> String {
    let mut t = Transcript::new();
    t.field("排盘时间", chart.moment);
    t.field("四柱", chart.pillars);
    t.field("命宫", chart.life_palace);

    t.blank();
    t.line("十二宫位：");
    for record in &chart.palaces {
        let stars: Vec<&str> = record.stars.iter().map(|s| s.name()).collect();
        t.blank();
        t.line(format!("【{}】{}", record.palace, record.branch));
        t.field(
            "  主星",
            or_placeholder((!stars.is_empty()).then(|| stars.join("、"))),
        );
    }
    t.finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ziwei::cast;
    use zhan_core::Moment;

    #[test]
    fn transcript_for_fixed_moment() {
        let text = to_text(&cast(Moment::new(2024, 3, 15, 8)));
        let head: Vec<&str> = text.lines().take(11).collect();
        insta::assert_snapshot!(head.join("\n"), @r"
        排盘时间：2024年3月15日 8时
        四柱：甲辰 丙辰 丙寅 壬辰
        命宫：父母宫

        十二宫位：

        【父母宫】亥
          主星：贪狼、七杀

        【命宫】子
          主星：天梁、天机
        ");
        assert_eq!(text.matches("  主星：").count(), 12);
        assert!(text.ends_with("【福德宫】戌\n  主星：太阴、天梁\n"));
    }
}
