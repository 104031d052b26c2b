//! CLI frontend for the zhan divination engines.

mod commands;

use std::process;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "zhan",
    about = "zhan: cast six-line, Qi Men, Da Liu Ren and Zi Wei charts",
    version,
    propagate_version = true
)]
struct Cli {
    /// Log engine details to stderr (RUST_LOG takes precedence)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Cast a chart
    Cast(commands::cast::CastArgs),

    /// Show the four pillars of a moment
    Pillars {
        /// Moment to use, e.g. "2024-03-15 08:00" (default: now)
        #[arg(short, long)]
        at: Option<String>,
    },

    /// Explain a Qi Men gate, star or spirit
    Symbol {
        /// Symbol name, e.g. 开门, 天蓬, 值符
        name: String,
    },

    /// List the divination methods
    Methods,
}

fn init_logging(verbose: bool) {
    let default_filter = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let result = match cli.command {
        Commands::Cast(args) => commands::cast::run(&args),
        Commands::Pillars { at } => commands::pillars::run(at.as_deref()),
        Commands::Symbol { name } => commands::symbol::run(&name),
        Commands::Methods => commands::methods::run(),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}
