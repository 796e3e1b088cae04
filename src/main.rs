//! Cindersky entry point: loads a calendar file, runs one almanac query,
//! prints the result as text or JSON.

use std::process;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use cindersky::almanac::Almanac;
use cindersky::cli::{Cli, Command, NextKind};
use cindersky::core::error::Result;
use cindersky::events::conjunction::ConjunctionConfig;
use cindersky::events::eclipse::EclipseKind;
use cindersky::events::scan::ScanDirection;
use cindersky::format;
use cindersky::provider::{CalendarProvider, StaticProvider};

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(e) = run(&cli) {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}

/// Verbosity flag count to log level: warn by default, then info, debug,
/// trace. `RUST_LOG` overrides the flag when set.
fn init_tracing(verbosity: u8) {
    let level = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("cindersky={level}")));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

fn run(cli: &Cli) -> Result<()> {
    let provider = StaticProvider::from_path(&cli.calendar)?;
    let almanac = Almanac::new(&provider);

    match &cli.command {
        Command::Info => {
            let Some(calendar) = provider.active_calendar() else {
                return Ok(());
            };
            if cli.json {
                println!("{}", format::to_json(calendar.as_ref())?);
            } else {
                println!("{}", format::format_calendar_info(&calendar));
            }
        }
        Command::Year(args) => {
            let info = almanac.year_info(args.year)?;
            if cli.json {
                println!("{}", format::to_json(&info)?);
            } else {
                println!("{}", format::format_year_info(&info));
            }
        }
        Command::Moons(args) => {
            let records = almanac.moon_phases(args.date)?;
            if cli.json {
                println!("{}", format::to_json(&records)?);
            } else if records.is_empty() {
                println!("No usable moons are configured.");
            } else {
                for record in &records {
                    println!("{}", format::format_moon(record));
                }
            }
        }
        Command::Today(args) => {
            let summary = almanac.day_summary(args.date)?;
            if cli.json {
                println!("{}", format::to_json(&summary)?);
            } else {
                println!("{}", format::format_summary(&summary));
            }
        }
        Command::Eclipses(args) => {
            let events = almanac.eclipses_in(args.from, args.to)?;
            if cli.json {
                println!("{}", format::to_json(&events)?);
            } else if events.is_empty() {
                println!("No eclipses in that range.");
            } else {
                for event in &events {
                    println!("{}", format::format_eclipse(event));
                }
            }
        }
        Command::Conjunctions(args) => {
            let config = conjunction_config(args.tolerance, args.moons.as_deref());
            let events = almanac.conjunctions_in(args.range.from, args.range.to, &config)?;
            if cli.json {
                println!("{}", format::to_json(&events)?);
            } else if events.is_empty() {
                println!("No conjunctions in that range.");
            } else {
                for event in &events {
                    println!("{}", format::format_conjunction(event));
                }
            }
        }
        Command::Next(args) => {
            let direction =
                if args.backward { ScanDirection::Backward } else { ScanDirection::Forward };
            match args.kind {
                NextKind::Darkest | NextKind::Brightest => {
                    let kind = match args.kind {
                        NextKind::Darkest => EclipseKind::Darkest,
                        _ => EclipseKind::Brightest,
                    };
                    let event = almanac.find_eclipse(kind, direction, args.from)?;
                    match event {
                        Some(event) if cli.json => println!("{}", format::to_json(&event)?),
                        Some(event) => println!("{}", format::format_eclipse(&event)),
                        None => println!("Nothing found within the search horizon."),
                    }
                }
                NextKind::Conjunction => {
                    let config = conjunction_config(args.tolerance, None);
                    let event = almanac.find_conjunction(direction, args.from, &config)?;
                    match event {
                        Some(event) if cli.json => println!("{}", format::to_json(&event)?),
                        Some(event) => println!("{}", format::format_conjunction(&event)),
                        None => println!("Nothing found within the search horizon."),
                    }
                }
            }
        }
    }

    Ok(())
}

fn conjunction_config(tolerance: f64, moons: Option<&[String]>) -> ConjunctionConfig {
    let moons = match moons {
        Some([first, second]) => Some((first.clone(), second.clone())),
        _ => None,
    };
    ConjunctionConfig { tolerance_deg: tolerance, moons }
}
