//! Six-line transcript.

use crate::transcript::{PLACEHOLDER, Transcript, or_placeholder};

use super::cast::LiuYaoChart;
use super::hexagram::Hexagram;
use super::trigram::Trigram;

fn describe_hexagram(hexagram: &Hexagram) -> String {
    match hexagram.number {
        Some(number) => format!("{}（第{number}卦）", hexagram.name),
        None => hexagram.name.clone(),
    }
}

fn describe_trigram(trigram: Option<Trigram>) -> String {
    or_placeholder(trigram.map(|t| format!("{} {} {}", t.name(), t.symbol(), t.element())))
}

/// Render a six-line chart as a line-oriented transcript.
pub fn to_text(chart: &LiuYaoChart) -> String {
    let mut t = Transcript::new();
    t.field("起卦时间", chart.moment);
    t.field("起卦方式", chart.mode);
    t.field(
        "卦数",
        or_placeholder(
            chart
                .numbers
                .map(|n| format!("上卦{} 下卦{} 动爻{}", n.upper, n.lower, n.changing)),
        ),
    );

    t.field("本卦", describe_hexagram(&chart.primary));
    t.field("上卦", describe_trigram(chart.primary.upper));
    t.field("下卦", describe_trigram(chart.primary.lower));

    match &chart.changed {
        Some(changed) => {
            t.field("变卦", describe_hexagram(changed));
            t.field("变卦上卦", describe_trigram(changed.upper));
            t.field("变卦下卦", describe_trigram(changed.lower));
        }
        None => {
            t.field("变卦", PLACEHOLDER);
            t.field("变卦上卦", PLACEHOLDER);
            t.field("变卦下卦", PLACEHOLDER);
        }
    }

    t.blank();
    t.line("爻象：");
    for line in &chart.primary.lines {
        t.line(line);
    }
    t.finish()
}
