use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "vaccine-finder")]
#[command(about = "Find the nearest vaccine appointment locations from one or more feeds")]
pub struct CliArgs {
    /// Path to the configuration file (JSON, or TOML with a .toml extension)
    #[arg(value_name = "CONFIG")]
    pub config: PathBuf,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Emit logs as JSON lines
    #[arg(long)]
    pub json_logs: bool,
}
