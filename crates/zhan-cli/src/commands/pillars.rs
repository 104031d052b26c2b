use colored::Colorize;
use comfy_table::{ContentArrangement, Table};
use zhan_core::{Stem, StemBranch};

pub fn run(at: Option<&str>) -> Result<(), String> {
    let moment = super::parse_moment(at)?;
    let pillars = moment.four_pillars();

    println!("  {} {}", "四柱".bold(), moment.to_string().dimmed());
    println!();

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["柱", "干支", "天干", "地支", "藏干"]);

    let rows: [(&str, StemBranch); 4] = [
        ("年柱", pillars.year),
        ("月柱", pillars.month),
        ("日柱", pillars.day),
        ("时柱", pillars.hour),
    ];
    for (label, pair) in rows {
        let hidden: Vec<&str> = pair.branch.hidden_stems().into_iter().map(Stem::name).collect();
        table.add_row(vec![
            label.to_string(),
            pair.to_string(),
            pair.stem.to_string(),
            pair.branch.to_string(),
            hidden.join("、"),
        ]);
    }

    println!("{table}");
    println!();
    println!("  {pillars}");

    Ok(())
}
