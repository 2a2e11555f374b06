use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

/// Color output control
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum ColorChoice {
    /// Auto-detect terminal capability
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

#[derive(Parser, Debug)]
#[command(name = "aptlog")]
#[command(author, version, about = "Browse apt-style transaction history logs")]
#[command(long_about = "Parses the package manager's transaction history log into structured \
    records and renders them as a summary table or a per-transaction detail view.\n\n\
    Exit codes:\n  \
    0 - Success\n  \
    1 - Invalid transaction ID\n  \
    2 - Configuration or load error")]
pub struct Cli {
    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Control color output
    #[arg(long, value_enum, default_value = "auto", global = true)]
    pub color: ColorChoice,

    /// Path to configuration file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Skip loading configuration file
    #[arg(long, global = true)]
    pub no_config: bool,

    /// History log path prefix (overrides config)
    #[arg(long, global = true)]
    pub log_path: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print a summary table of all logged transactions
    List(ListArgs),

    /// Show the detail view for one transaction
    Info(InfoArgs),
}

#[derive(Parser, Debug)]
pub struct ListArgs {
    /// Width of the command-line and changes columns
    #[arg(long, default_value_t = 25)]
    pub width: usize,
}

#[derive(Parser, Debug)]
pub struct InfoArgs {
    /// Zero-based transaction ID as shown by `aptlog list`
    pub id: usize,
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
