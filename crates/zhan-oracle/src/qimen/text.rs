//! Qi Men transcript.

use crate::transcript::{Transcript, or_placeholder, yes_no};

use super::chart::{PalaceRecord, QiMenChart};

fn palace_block(t: &mut Transcript, record: &PalaceRecord) {
    t.blank();
    t.line(format!("【{}】", record.palace));
    t.field("  天干", record.heaven_stem);
    t.field("  地支", record.earth_branch);
    t.field("  八门", record.gate);
    t.field("  九星", record.star);
    t.field("  八神", record.spirit);
    t.field(
        "  暗干",
        format!("{}、{}", record.hidden_stems[0], record.hidden_stems[1]),
    );
    let flags = record.flags;
    t.field(
        "  标记",
        format!(
            "击刑={} 入墓={} 伏吟={} 反吟={} 空亡={}",
            yes_no(flags.clash),
            yes_no(flags.tomb),
            yes_no(flags.stillness_echo),
            yes_no(flags.reverse_echo),
            yes_no(flags.void)
        ),
    );
}

/// Render a Qi Men chart as a line-oriented transcript.
pub fn to_text(chart: &QiMenChart) -> String {
    let mut t = Transcript::new();
    t.field("起局时间", chart.moment);
    t.field("四柱", chart.pillars);
    t.field("局数", chart.cycle_number);
    t.field("值符", chart.duty_star);
    t.field("值使", chart.duty_gate);
    t.field("旬首", chart.head_stem);
    t.field(
        "空亡",
        format!("{}、{}", chart.void_branches[0], chart.void_branches[1]),
    );
    t.field(
        "驿马",
        format!("{}（{}）", chart.horse.branch, chart.horse.palace),
    );
    t.field("值符落宫", or_placeholder(chart.duty_star_palace));
    t.field("值使落宫", or_placeholder(chart.duty_gate_palace));

    t.blank();
    t.line("九宫布局：");
    for record in &chart.palaces {
        palace_block(&mut t, record);
    }
    t.finish()
}
