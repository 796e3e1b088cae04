use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

use crate::core::types::WireDate;

/// Cindersky calendar and sky almanac.
#[derive(Parser)]
#[command(name = "cindersky", version, about = "Calendar arithmetic and moon tracking for invented worlds")]
pub struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Path to the calendar description TOML.
    #[arg(short, long, global = true, default_value = "calendars/veiled_reach.toml")]
    pub calendar: PathBuf,

    /// Emit results as pretty JSON instead of text.
    #[arg(long, global = true)]
    pub json: bool,

    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands.
#[derive(Subcommand)]
pub enum Command {
    /// Show the loaded calendar's structure.
    Info,
    /// Era placement of a year.
    Year(YearArgs),
    /// Moon phases on a date.
    Moons(DateArgs),
    /// Full summary of one day: era, weekday, season, moons.
    Today(DateArgs),
    /// Every eclipse in a date range.
    Eclipses(RangeArgs),
    /// Every conjunction of the designated moon pair in a date range.
    Conjunctions(ConjunctionArgs),
    /// First upcoming sky event of a kind.
    Next(NextArgs),
}

/// Arguments for the `year` subcommand.
#[derive(clap::Args)]
pub struct YearArgs {
    /// Year to place; defaults to the calendar's current date.
    #[arg(short, long)]
    pub year: Option<i64>,
}

/// A single optional date, shared by `moons` and `today`.
#[derive(clap::Args)]
pub struct DateArgs {
    /// Date as YYYY-M-D; defaults to the calendar's current date.
    #[arg(short, long, value_parser = parse_date)]
    pub date: Option<WireDate>,
}

/// Arguments for range scans.
#[derive(clap::Args)]
pub struct RangeArgs {
    /// Start of the range, as YYYY-M-D.
    #[arg(long, value_parser = parse_date)]
    pub from: WireDate,

    /// End of the range, as YYYY-M-D.
    #[arg(long, value_parser = parse_date)]
    pub to: WireDate,
}

/// Arguments for the `conjunctions` subcommand.
#[derive(clap::Args)]
pub struct ConjunctionArgs {
    #[command(flatten)]
    pub range: RangeArgs,

    /// Angular separation threshold in degrees.
    #[arg(short, long, default_value_t = 5.0)]
    pub tolerance: f64,

    /// Moon pair to watch, by name; defaults to the calendar's first two.
    #[arg(long, num_args = 2, value_names = ["FIRST", "SECOND"])]
    pub moons: Option<Vec<String>>,
}

/// Arguments for the `next` subcommand.
#[derive(clap::Args)]
pub struct NextArgs {
    /// Kind of event to look for.
    pub kind: NextKind,

    /// Date to search from, as YYYY-M-D; defaults to the current date.
    #[arg(short, long, value_parser = parse_date)]
    pub from: Option<WireDate>,

    /// Search into the past instead of the future.
    #[arg(short, long)]
    pub backward: bool,

    /// Angular separation threshold for conjunctions, in degrees.
    #[arg(short, long, default_value_t = 5.0)]
    pub tolerance: f64,
}

/// Sky events `next` can search for.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum NextKind {
    /// Every moon new on the same day.
    Darkest,
    /// Every moon full on the same day.
    Brightest,
    /// Designated moon pair within tolerance.
    Conjunction,
}

fn parse_date(s: &str) -> Result<WireDate, String> {
    WireDate::parse(s).ok_or_else(|| format!("expected a YYYY-M-D date, got '{s}'"))
}
