//! Da Liu Ren transcript.

use crate::transcript::Transcript;

use super::{COURSE_NAMES, DaLiuRenChart, TRANSMISSION_NAMES};

/// Render a Da Liu Ren chart as a line-oriented transcript.
pub fn to_text(chart: &DaLiuRenChart) -> String {
    let mut t = Transcript::new();
    t.field("起课时间", chart.moment);
    t.field("年干支", chart.pillars.year);
    t.field("月干支", chart.pillars.month);
    t.field("日干支", chart.pillars.day);
    t.field("时干支", chart.pillars.hour);
    t.field("起课依据", chart.seed);

    t.blank();
    t.line("四课：");
    for (name, course) in COURSE_NAMES.iter().zip(&chart.courses) {
        t.field(name, course);
    }

    t.blank();
    t.line("三传：");
    for (name, course) in TRANSMISSION_NAMES.iter().zip(&chart.transmissions) {
        t.field(name, course);
    }
    t.finish()
}
