pub mod cast;
pub mod methods;
pub mod pillars;
mod render;
pub mod symbol;

use std::path::Path;

use log::debug;
use zhan_core::Moment;

/// Parse `--at`, defaulting to the current local time.
fn parse_moment(at: Option<&str>) -> Result<Moment, String> {
    match at {
        Some(text) => Moment::parse(text).map_err(|e| e.to_string()),
        None => Ok(Moment::now()),
    }
}

/// Write `content` to `output`, or print it when no file is given.
fn emit(content: &str, output: Option<&Path>) -> Result<(), String> {
    match output {
        Some(path) => {
            debug!("writing {} bytes to {}", content.len(), path.display());
            std::fs::write(path, content)
                .map_err(|e| format!("cannot write to {}: {e}", path.display()))?;
            println!("  Written to {}", path.display());
        }
        None => print!("{content}"),
    }
    Ok(())
}
