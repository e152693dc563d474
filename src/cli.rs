//! Command-line interface definitions.

use clap::{Args, Parser, Subcommand};

/// Work out where an audiobook should resume after a pause.
#[derive(Debug, Parser)]
#[command(name = "seekback", version, about)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Compute the playhead to resume from
    Resume(ResumeArgs),
    /// Show how long ago playback last happened
    Since(SinceArgs),
    /// Look up the seek-back offset for a number of elapsed seconds
    Offset(OffsetArgs),
    /// Inspect the configuration
    #[command(subcommand)]
    Config(ConfigCommands),
}

/// Timestamp inputs shared by `resume` and `since`.
#[derive(Debug, Args)]
pub struct TimestampArgs {
    /// When playback last happened, in milliseconds since the Unix epoch
    #[arg(long, value_name = "MS", allow_negative_numbers = true)]
    pub last_played_ms: Option<f64>,

    /// Use this instant as "now" instead of the system clock
    #[arg(long, value_name = "MS", allow_negative_numbers = true)]
    pub now_ms: Option<f64>,
}

#[derive(Debug, Args)]
pub struct ResumeArgs {
    /// Current playhead position in seconds
    #[arg(value_name = "CURRENT_TIME", allow_negative_numbers = true)]
    pub current_time: f64,

    #[command(flatten)]
    pub timestamps: TimestampArgs,

    /// Print the full decision as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Args)]
pub struct SinceArgs {
    #[command(flatten)]
    pub timestamps: TimestampArgs,

    /// Print the result as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Args)]
pub struct OffsetArgs {
    /// Seconds since last played; omit for "never played"
    #[arg(value_name = "ELAPSED", allow_negative_numbers = true)]
    pub elapsed: Option<f64>,
}

#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Show the effective configuration as TOML
    Show,
    /// Print the config file path
    Path,
}
