//! Terminal rendering of charts.

use std::fmt::Write;

use colored::Colorize;
use comfy_table::{Cell, CellAlignment, ContentArrangement, Table};
use zhan_oracle::liuren::{COURSE_NAMES, DaLiuRenChart, TRANSMISSION_NAMES};
use zhan_oracle::liuyao::{Hexagram, LiuYaoChart, Polarity};
use zhan_oracle::qimen::{GRID, Palace, PalaceRecord, QiMenChart};
use zhan_oracle::ziwei::ZiWeiChart;
use zhan_oracle::{Chart, PLACEHOLDER};

const YANG_BAR: &str = "▅▅▅▅▅▅▅";
const YIN_BAR: &str = "▅▅▅ ▅▅▅";

/// Render a chart for the terminal.
pub fn pretty(chart: &Chart) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "  {} [{}]",
        chart.method().to_string().bold(),
        chart.moment().to_string().dimmed()
    );
    let _ = writeln!(out);
    let body = match chart {
        Chart::LiuYao(c) => liuyao(c),
        Chart::QiMen(c) => qimen(c),
        Chart::DaLiuRen(c) => liuren(c),
        Chart::ZiWei(c) => ziwei(c),
    };
    out.push_str(&body);
    out
}

fn bar(polarity: Polarity) -> &'static str {
    if polarity.is_yang() { YANG_BAR } else { YIN_BAR }
}

fn hexagram_title(hexagram: &Hexagram) -> String {
    match hexagram.number {
        Some(n) => format!("{} (#{n})", hexagram.name),
        None => hexagram.name.clone(),
    }
}

fn liuyao(chart: &LiuYaoChart) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "  {}  {}", "起卦方式".dimmed(), chart.mode);
    if let Some(n) = chart.numbers {
        let _ = writeln!(
            out,
            "  {}  上卦{} 下卦{} 动爻{}",
            "卦数".dimmed(),
            n.upper,
            n.lower,
            n.changing
        );
    }

    let changed_title = chart
        .changed
        .as_ref()
        .map_or_else(|| PLACEHOLDER.to_string(), hexagram_title);

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec![
        "爻".to_string(),
        format!("本卦 {}", hexagram_title(&chart.primary)),
        "动".to_string(),
        format!("变卦 {changed_title}"),
    ]);

    // top line first, as the figure is drawn
    for line in chart.primary.lines.iter().rev() {
        let mark = match (line.changing, line.polarity) {
            (false, _) => "",
            (true, Polarity::Yang) => "○",
            (true, Polarity::Yin) => "×",
        };
        let changed_bar = chart.changed.as_ref().map_or("", |changed| {
            bar(changed.lines[usize::from(line.position) - 1].polarity)
        });
        let primary_bar = if line.changing {
            bar(line.polarity).yellow().to_string()
        } else {
            bar(line.polarity).to_string()
        };
        table.add_row(vec![
            Cell::new(line.position),
            Cell::new(primary_bar),
            Cell::new(mark).set_alignment(CellAlignment::Center),
            Cell::new(changed_bar),
        ]);
    }
    let _ = writeln!(out);
    let _ = writeln!(out, "{table}");
    let _ = writeln!(
        out,
        "  上卦 {}  下卦 {}",
        chart.primary.upper_name(),
        chart.primary.lower_name()
    );
    out
}

fn palace_cell(record: &PalaceRecord, chart: &QiMenChart) -> String {
    let mut cell = format!(
        "{}\n{} / {}\n{} {} {}\n暗干 {}{}",
        record.palace.to_string().bold(),
        record.heaven_stem,
        record.earth_branch,
        record.gate,
        record.star,
        record.spirit,
        record.hidden_stems[0],
        record.hidden_stems[1],
    );
    let flags = record.flags;
    let marks: Vec<&str> = [
        (flags.clash, "击刑"),
        (flags.tomb, "入墓"),
        (flags.stillness_echo, "伏吟"),
        (flags.reverse_echo, "反吟"),
        (flags.void, "空亡"),
    ]
    .into_iter()
    .filter_map(|(set, name)| set.then_some(name))
    .collect();
    if !marks.is_empty() {
        let _ = write!(cell, "\n{}", marks.join(" ").red());
    }
    if chart.horse.palace == record.palace {
        let _ = write!(cell, "\n{}", "驿马".cyan());
    }
    cell
}

fn qimen(chart: &QiMenChart) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "  {}  {}", "四柱".dimmed(), chart.pillars);
    let _ = writeln!(
        out,
        "  {}  {}   {}  {}   {}  {}   {}  {}",
        "局数".dimmed(),
        chart.cycle_number,
        "值符".dimmed(),
        chart.duty_star,
        "值使".dimmed(),
        chart.duty_gate,
        "旬首".dimmed(),
        chart.head_stem
    );
    let _ = writeln!(
        out,
        "  {}  {}、{}   {}  {}（{}）",
        "空亡".dimmed(),
        chart.void_branches[0],
        chart.void_branches[1],
        "驿马".dimmed(),
        chart.horse.branch,
        chart.horse.palace
    );

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    for row in GRID {
        table.add_row(
            row.map(|number| palace_cell(chart.palace(Palace::from_number(number)), chart)),
        );
    }
    let _ = writeln!(out);
    let _ = writeln!(out, "{table}");
    out
}

fn liuren(chart: &DaLiuRenChart) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "  {}  {}   {}  {}",
        "四柱".dimmed(),
        chart.pillars,
        "起课依据".dimmed(),
        chart.seed
    );

    let mut courses = Table::new();
    courses.set_content_arrangement(ContentArrangement::Dynamic);
    courses.set_header(vec!["四课", "干支", "天将"]);
    for (name, course) in COURSE_NAMES.iter().zip(&chart.courses) {
        courses.add_row(vec![
            name.to_string(),
            format!("{}{}", course.stem, course.branch),
            course.general.to_string(),
        ]);
    }

    let mut transmissions = Table::new();
    transmissions.set_content_arrangement(ContentArrangement::Dynamic);
    transmissions.set_header(vec!["三传", "干支", "天将"]);
    for (name, course) in TRANSMISSION_NAMES.iter().zip(&chart.transmissions) {
        transmissions.add_row(vec![
            name.to_string(),
            format!("{}{}", course.stem, course.branch),
            course.general.to_string(),
        ]);
    }

    let _ = writeln!(out);
    let _ = writeln!(out, "{courses}");
    let _ = writeln!(out);
    let _ = writeln!(out, "{transmissions}");
    out
}

fn ziwei(chart: &ZiWeiChart) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "  {}  {}", "四柱".dimmed(), chart.pillars);
    let _ = writeln!(out, "  {}  {}", "命宫".dimmed(), chart.life_palace.to_string().bold());

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["宫位", "地支", "主星"]);
    for record in &chart.palaces {
        let stars: Vec<&str> = record.stars.iter().map(|s| s.name()).collect();
        let name = if record.palace == chart.life_palace {
            record.palace.to_string().yellow().bold().to_string()
        } else {
            record.palace.to_string()
        };
        table.add_row(vec![name, record.branch.to_string(), stars.join("、")]);
    }
    let _ = writeln!(out);
    let _ = writeln!(out, "{table}");
    out
}
