//! Subcommand execution and output formatting.

use std::io::{self, IsTerminal, Read};

use anyhow::{Context, Result};
use chrono::Utc;
use qkit_core::{
    calc_from_today_at, clock_reading, count, date_difference, format_iso_date,
    timezone_description, to_full_width, to_half_width, today_in_timezone_at, TimezoneSpec,
};
use serde::Serialize;
use tracing::{debug, info, info_span};

use crate::cli::{Cli, Command, TextArgs};
use crate::config::QkitConfig;

/// Result of a width conversion.
#[derive(Serialize)]
struct ConvertedText {
    text: String,
}

/// Result of `today` and `add`.
#[derive(Serialize)]
struct DateOutput {
    date: String,
    timezone: TimezoneSpec,
    description: String,
}

/// Run the subcommand selected on the command line.
pub fn run(cli: Cli) -> Result<()> {
    let config = match cli.config {
        Some(ref path) => {
            info!(path = %path.display(), "loading config");
            QkitConfig::load(path)?
        }
        None => QkitConfig::default(),
    };

    // CLI flag overrides the config file. Only the clock-reading commands
    // resolve it.
    let flag_timezone = cli.timezone;
    let resolve_timezone = || -> Result<TimezoneSpec> {
        let timezone = match flag_timezone {
            Some(tz) => tz,
            None => config.timezone()?,
        };
        debug!(%timezone, "resolved timezone");
        Ok(timezone)
    };

    let json = cli.json;
    match cli.command {
        Command::Half(args) => {
            let _cmd = info_span!("half").entered();
            let text = to_half_width(&read_text(args)?);
            emit(json, &ConvertedText { text }, |c| c.text.clone())
        }
        Command::Full(args) => {
            let _cmd = info_span!("full").entered();
            let text = to_full_width(&read_text(args)?);
            emit(json, &ConvertedText { text }, |c| c.text.clone())
        }
        Command::Count(args) => {
            let _cmd = info_span!("count").entered();
            let counts = count(&read_text(args)?);
            emit(json, &counts, |c| {
                format!(
                    "Characters (with spaces):    {}\nCharacters (without spaces): {}\nBytes (UTF-8):               {}",
                    c.with_spaces, c.without_spaces, c.bytes
                )
            })
        }
        Command::Today => {
            let _cmd = info_span!("today").entered();
            let timezone = resolve_timezone()?;
            let now = Utc::now();
            let output = DateOutput {
                date: format_iso_date(today_in_timezone_at(now, timezone)),
                timezone,
                description: timezone_description(now, timezone),
            };
            emit(json, &output, |o| o.date.clone())
        }
        Command::Add(args) => {
            let _cmd = info_span!("add", days = args.days).entered();
            let timezone = resolve_timezone()?;
            let now = Utc::now();
            let date = calc_from_today_at(now, args.days, timezone)
                .with_context(|| format!("cannot add {} days to today", args.days))?;
            let output = DateOutput {
                date,
                timezone,
                description: timezone_description(now, timezone),
            };
            emit(json, &output, |o| o.date.clone())
        }
        Command::Diff(args) => {
            let _cmd = info_span!("diff").entered();
            let diff = date_difference(&args.date1, &args.date2)
                .context("cannot compute date difference")?;
            info!(total_days = diff.total_days, "computed difference");
            emit(json, &diff, |d| d.human_readable.clone())
        }
        Command::Clock => {
            let _cmd = info_span!("clock").entered();
            let reading = clock_reading(Utc::now(), resolve_timezone()?);
            emit(json, &reading, ToString::to_string)
        }
    }
}

/// Print `value` as pretty JSON, or as the plain line `plain` renders.
fn emit<T, F>(json: bool, value: &T, plain: F) -> Result<()>
where
    T: Serialize,
    F: FnOnce(&T) -> String,
{
    if json {
        let out = serde_json::to_string_pretty(value).context("failed to serialize output")?;
        println!("{out}");
    } else {
        println!("{}", plain(value));
    }
    Ok(())
}

/// The text argument, or stdin when it is absent or `-`.
///
/// A single trailing line ending from stdin is dropped so that
/// `echo "text" | qkit count` counts only `text`.
fn read_text(args: TextArgs) -> Result<String> {
    match args.text {
        Some(text) if text != "-" => Ok(text),
        _ => {
            let stdin = io::stdin();
            if stdin.is_terminal() {
                info!("reading text from terminal; finish with EOF (Ctrl-D)");
            }
            let mut buf = String::new();
            stdin
                .lock()
                .read_to_string(&mut buf)
                .context("failed to read text from stdin")?;
            if buf.ends_with('\n') {
                buf.pop();
                if buf.ends_with('\r') {
                    buf.pop();
                }
            }
            debug!(bytes = buf.len(), "read stdin");
            Ok(buf)
        }
    }
}
