//! `slots` CLI — list bookable appointment slots from calendar files.
//!
//! ## Usage
//!
//! ```sh
//! # Bookable 30-minute units on 10 April 2023 for calendar 1
//! slots spots --calendar 1 --date 10-04-2023 --duration 30
//!
//! # Same, single-line JSON
//! slots spots -c 1 -d 10-04-2023 --duration 30 --compact
//!
//! # Free intervals left after removing booked sessions
//! slots free --calendar 1 --date 10-04-2023
//!
//! # Read calendars from another directory
//! SLOTS_CALENDARS_DIR=/srv/calendars slots spots -c 2 -d 11-04-2023 --duration 45
//! ```

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde::Serialize;
use slot_engine::FileCalendarStore;
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "slots", version, about = "Bookable appointment slot finder")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Directory holding calendar.<id>.json files
    #[arg(long, global = true, env = "SLOTS_CALENDARS_DIR", default_value = "calendars")]
    calendars_dir: String,

    /// Log engine decisions to stderr
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// List bookable units of the requested duration
    Spots {
        /// Calendar identifier
        #[arg(short, long)]
        calendar: String,
        /// Day to query, DD-MM-YYYY
        #[arg(short, long)]
        date: String,
        /// Appointment length in minutes
        #[arg(long)]
        duration: i64,
        /// Print single-line JSON
        #[arg(long)]
        compact: bool,
    },
    /// List free intervals after removing booked sessions
    Free {
        /// Calendar identifier
        #[arg(short, long)]
        calendar: String,
        /// Day to query, DD-MM-YYYY
        #[arg(short, long)]
        date: String,
        /// Print single-line JSON
        #[arg(long)]
        compact: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let store = FileCalendarStore::new(&cli.calendars_dir);
    debug!(dir = %store.dir().display(), "using calendar directory");

    match cli.command {
        Commands::Spots {
            calendar,
            date,
            duration,
            compact,
        } => {
            let spots = slot_engine::get_available_spots(&store, &calendar, &date, duration)
                .with_context(|| format!("Failed to compute spots for calendar '{}'", calendar))?;
            print_json(&spots, compact)?;
        }
        Commands::Free {
            calendar,
            date,
            compact,
        } => {
            let free = slot_engine::get_free_slots(&store, &calendar, &date).with_context(|| {
                format!("Failed to compute free intervals for calendar '{}'", calendar)
            })?;
            print_json(&free, compact)?;
        }
    }

    Ok(())
}

/// Logs go to stderr so stdout stays valid JSON. `RUST_LOG` overrides the default.
fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn print_json<T: Serialize>(value: &T, compact: bool) -> Result<()> {
    let json = if compact {
        serde_json::to_string(value)
    } else {
        serde_json::to_string_pretty(value)
    }
    .context("Failed to serialize output")?;
    println!("{}", json);
    Ok(())
}
