//! Command-line interface for the deadline date/time extractor
//!
//! Usage:
//!   multimatum-dates parse `<title>`... [--today `<YYYY-MM-DD>`] [--format `<format>`]
//!   multimatum-dates patterns                 - List the pattern table in priority order
//!
//! Logging goes to stderr and is controlled by `RUST_LOG`
//! (`RUST_LOG=multimatum_dates=trace` shows every pattern match).

use chrono::NaiveDate;
use clap::{Arg, ArgAction, Command};
use multimatum_dates::datetime::{patterns, DateTimeExtractor, Extraction, FixedClock};
use thiserror::Error;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Error)]
enum CliError {
    #[error("invalid --today value {value:?}, expected YYYY-MM-DD: {source}")]
    InvalidToday {
        value: String,
        source: chrono::ParseError,
    },
    #[error("failed to serialize extraction as JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("failed to serialize extraction as YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let matches = Command::new("multimatum-dates")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Extract dates and times from deadline titles")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(
            Command::new("parse")
                .about("Extract the date and time from a title")
                .arg(
                    Arg::new("title")
                        .help("Deadline title; several arguments are joined with spaces")
                        .required(true)
                        .num_args(1..)
                        .action(ArgAction::Append)
                        .index(1),
                )
                .arg(
                    Arg::new("today")
                        .long("today")
                        .short('t')
                        .env("MULTIMATUM_TODAY")
                        .help("Resolve relative dates against this day instead of the system date"),
                )
                .arg(
                    Arg::new("format")
                        .long("format")
                        .short('f')
                        .help("Output format")
                        .value_parser(["text", "json", "yaml"])
                        .default_value("text"),
                ),
        )
        .subcommand(Command::new("patterns").about("List the pattern table in priority order"))
        .get_matches();

    let result = match matches.subcommand() {
        Some(("parse", parse_matches)) => {
            let title = parse_matches
                .get_many::<String>("title")
                .map(|parts| parts.cloned().collect::<Vec<_>>().join(" "))
                .unwrap_or_default();
            let today = parse_matches.get_one::<String>("today");
            let format = parse_matches
                .get_one::<String>("format")
                .map(String::as_str)
                .unwrap_or("text");
            handle_parse_command(&title, today.map(String::as_str), format)
        }
        Some(("patterns", _)) => {
            handle_patterns_command();
            Ok(())
        }
        _ => Ok(()),
    };

    if let Err(error) = result {
        eprintln!("Error: {}", error);
        std::process::exit(1);
    }
}

/// Handle the parse command
fn handle_parse_command(title: &str, today: Option<&str>, format: &str) -> Result<(), CliError> {
    let extraction = match today {
        Some(value) => {
            let date =
                NaiveDate::parse_from_str(value, "%Y-%m-%d").map_err(|source| {
                    CliError::InvalidToday {
                        value: value.to_owned(),
                        source,
                    }
                })?;
            DateTimeExtractor::with_clock(FixedClock(date)).parse(title)
        }
        None => DateTimeExtractor::new().parse(title),
    };

    let output = match format {
        "json" => serde_json::to_string_pretty(&extraction)?,
        "yaml" => serde_yaml::to_string(&extraction)?,
        _ => render_text(&extraction),
    };
    println!("{}", output.trim_end());
    Ok(())
}

/// Handle the patterns command
fn handle_patterns_command() {
    for (index, pattern) in patterns().iter().enumerate() {
        println!("{:>3}  {}", index + 1, pattern);
    }
}

fn render_text(extraction: &Extraction) -> String {
    let date = extraction
        .date()
        .map(|date| date.format("%Y-%m-%d").to_string())
        .unwrap_or_else(|| "-".to_owned());
    let time = extraction
        .time()
        .map(|time| time.format("%H:%M").to_string())
        .unwrap_or_else(|| "-".to_owned());
    format!(
        "title: {}\ndate:  {}\ntime:  {}",
        extraction.title(),
        date,
        time
    )
}
