use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use qkit_core::TimezoneSpec;

/// QKit quick text and date utilities.
#[derive(Parser)]
#[command(
    name = "qkit",
    version,
    about = "Full/half-width conversion, character counts, clock, and date calculations"
)]
pub struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Print results as JSON.
    #[arg(long, global = true)]
    pub json: bool,

    /// Path to TOML configuration file.
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Timezone for "today" and the clock: local, UTC, or UTC±H. Overrides config.
    #[arg(short, long, global = true)]
    pub timezone: Option<TimezoneSpec>,

    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands.
#[derive(Subcommand)]
pub enum Command {
    /// Convert full-width characters to half-width.
    Half(TextArgs),
    /// Convert half-width characters to full-width.
    Full(TextArgs),
    /// Count characters (with and without whitespace) and UTF-8 bytes.
    Count(TextArgs),
    /// Print today's date in the selected timezone.
    Today,
    /// Print the date N days from today (negative for past dates).
    Add(AddArgs),
    /// Print the difference between two YYYY-MM-DD dates.
    Diff(DiffArgs),
    /// Print the current time in the selected timezone.
    Clock,
}

/// Text input shared by the conversion and counting subcommands.
#[derive(Args)]
pub struct TextArgs {
    /// Input text. Read from stdin when omitted or "-".
    pub text: Option<String>,
}

/// Arguments for the `add` subcommand.
#[derive(Args)]
pub struct AddArgs {
    /// Days to add to today.
    #[arg(allow_negative_numbers = true)]
    pub days: i64,
}

/// Arguments for the `diff` subcommand.
#[derive(Args)]
pub struct DiffArgs {
    /// First date (YYYY-MM-DD).
    pub date1: String,
    /// Second date (YYYY-MM-DD).
    pub date2: String,
}
