use colored::Colorize;
use zhan_oracle::qimen;

pub fn run(name: &str) -> Result<(), String> {
    let symbol = qimen::lookup(name).map_err(|e| e.to_string())?;

    println!("  {} [{}]", symbol.name.bold(), symbol.kind.to_string().dimmed());
    println!();
    println!("  {}", symbol.meaning);

    Ok(())
}
