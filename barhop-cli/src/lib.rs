//! Command-line interface for the barhop route planner.
//!
//! `barhop plan` orders venues for an evening and prints a JSON report;
//! `barhop venues` and `barhop venue` browse the catalog. Options layer
//! through `ortho_config`: CLI flags over `BARHOP_*` environment variables
//! over configuration files.
#![forbid(unsafe_code)]

mod catalog;
mod error;
mod narrator;
mod plan;
mod report;
mod venues;

use std::io::Write;

use chrono::{Datelike, Local, Weekday};
use clap::{ArgAction, Parser, Subcommand};
use serde::Serialize;
use tracing_subscriber::filter::LevelFilter;

pub use error::CliError;
pub use narrator::{NarrationStyle, Narrator, PlanReportContext, TemplateNarrator};
pub use report::{ItineraryStop, PlanReport, ReportDiagnostics, VenueList, VenueSummary};

use plan::{PlanArgs, run_plan_with};
use venues::{VenueArgs, VenuesArgs, run_venue_with, run_venues_with};

const ARG_VENUE: &str = "venue";
const ARG_START_HOUR: &str = "start-hour";
const ARG_GROUP_SIZE: &str = "group-size";
const ARG_EVENT_DAY: &str = "event-day";
const ARG_WEEKDAY: &str = "weekday";
const ARG_REQUEST: &str = "request";
const ARG_CATALOG: &str = "catalog";
const ARG_OUTPUT: &str = "output";
const ARG_NARRATION: &str = "narration";
const ARG_NO_NARRATION: &str = "no-narration";
const ARG_NAME: &str = "name";
const ENV_PLAN_VENUES: &str = "BARHOP_CMDS_PLAN_VENUES";
const ENV_VENUE_NAME: &str = "BARHOP_CMDS_VENUE_NAME";

/// Run the barhop CLI with the current process arguments and environment.
pub fn run() -> Result<(), CliError> {
    let cli = Cli::try_parse().map_err(CliError::ArgumentParsing)?;
    init_logging(cli.verbose);
    let mut stdout = std::io::stdout().lock();
    dispatch(cli.command, Local::now().weekday(), &mut stdout)
}

fn dispatch(command: Command, today: Weekday, writer: &mut dyn Write) -> Result<(), CliError> {
    match command {
        Command::Plan(args) => run_plan_with(args, today, writer),
        Command::Venues(args) => run_venues_with(args, writer),
        Command::Venue(args) => run_venue_with(args, writer),
    }
}

fn init_logging(verbosity: u8) {
    let level = match verbosity {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    };
    let installed = tracing_subscriber::fmt()
        .without_time()
        .compact()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .try_init();
    if installed.is_err() {
        log::debug!("log subscriber already installed");
    }
}

/// Pretty-print `value` as JSON followed by a newline.
fn write_json<T: Serialize>(writer: &mut dyn Write, value: &T) -> Result<(), CliError> {
    let payload = serde_json::to_string_pretty(value).map_err(CliError::SerializeOutput)?;
    writer
        .write_all(payload.as_bytes())
        .map_err(CliError::WriteOutput)?;
    writer.write_all(b"\n").map_err(CliError::WriteOutput)?;
    Ok(())
}

#[derive(Debug, Parser)]
#[command(
    name = "barhop",
    about = "Plan the order of a night out to spend the least time in line",
    version
)]
struct Cli {
    /// Log more; repeat for debug and trace output.
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Plan the order to visit a set of venues.
    Plan(PlanArgs),
    /// List the venues in the catalog.
    Venues(VenuesArgs),
    /// Show one venue in detail.
    Venue(VenueArgs),
}

#[cfg(test)]
mod tests;
