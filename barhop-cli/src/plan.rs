//! Plan command implementation for the barhop CLI.

use std::io::{BufReader, Write};

use barhop_core::{
    Infeasibility, PlanOutcome, PlanRequest, Planner, StaticCatalog, VenueCatalog,
};
use barhop_fs::open_utf8_file;
use barhop_nlu::VenueMatcher;
use barhop_solver::ExhaustivePlanner;
use camino::{Utf8Path, Utf8PathBuf};
use chrono::Weekday;
use clap::Parser;
use log::{debug, info};
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize};

use crate::catalog::{load_catalog, require_existing};
use crate::narrator::{NarrationStyle, Narrator, PlanReportContext, TemplateNarrator};
use crate::report::{ItineraryStop, PlanReport, ReportDiagnostics};
use crate::{
    ARG_CATALOG, ARG_EVENT_DAY, ARG_GROUP_SIZE, ARG_NARRATION, ARG_NO_NARRATION, ARG_OUTPUT,
    ARG_REQUEST, ARG_START_HOUR, ARG_VENUE, ARG_WEEKDAY, CliError, ENV_PLAN_VENUES, write_json,
};

/// CLI arguments for the `plan` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    long_about = "Order a set of venues to keep the total wait at the door as \
                 short as possible. Venues can come from a free-text message, \
                 repeated --venue flags, or a JSON-encoded PlanRequest; \
                 explicit flags override what the message or file says.",
    about = "Plan the order to visit a set of venues"
)]
#[ortho_config(prefix = "BARHOP")]
pub(crate) struct PlanArgs {
    /// Free-text request, e.g. "chimys and crickets at 9pm, me and 3 friends".
    #[arg(value_name = "message")]
    #[serde(default)]
    pub(crate) message: Option<String>,
    /// Venue to visit; repeat for several.
    #[arg(long = ARG_VENUE, value_name = "name")]
    #[serde(default)]
    pub(crate) venues: Vec<String>,
    /// Start of the evening in decimal hours (25.5 is 01:30 next morning).
    #[arg(long = ARG_START_HOUR, value_name = "hours")]
    #[serde(default)]
    pub(crate) start_hour: Option<f64>,
    /// Number of people in the group.
    #[arg(long = ARG_GROUP_SIZE, value_name = "people")]
    #[serde(default)]
    pub(crate) group_size: Option<u8>,
    /// Expect event-day crowds.
    #[arg(long = ARG_EVENT_DAY)]
    #[serde(default)]
    pub(crate) event_day: bool,
    /// Weekday whose opening hours apply; defaults to today.
    #[arg(long = ARG_WEEKDAY, value_name = "day")]
    #[serde(default)]
    pub(crate) weekday: Option<Weekday>,
    /// Path to a JSON file containing a PlanRequest.
    #[arg(long = ARG_REQUEST, value_name = "path")]
    #[serde(default)]
    pub(crate) request_path: Option<Utf8PathBuf>,
    /// Path to a JSON venue catalog replacing the built-in roster.
    #[arg(long = ARG_CATALOG, value_name = "path")]
    #[serde(default)]
    pub(crate) catalog: Option<Utf8PathBuf>,
    /// Write the report here instead of standard output.
    #[arg(long = ARG_OUTPUT, value_name = "path")]
    #[serde(default)]
    pub(crate) output: Option<Utf8PathBuf>,
    /// Narration style for planned routes.
    #[arg(long = ARG_NARRATION, value_enum, value_name = "style")]
    #[serde(default)]
    pub(crate) narration: Option<NarrationStyle>,
    /// Leave the report message empty.
    #[arg(long = ARG_NO_NARRATION)]
    #[serde(default)]
    pub(crate) no_narration: bool,
}

impl PlanArgs {
    pub(crate) fn into_config(self) -> Result<PlanConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        PlanConfig::try_from(merged)
    }
}

/// Resolved `plan` command configuration.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct PlanConfig {
    /// Free-text request, if any.
    pub(crate) message: Option<String>,
    /// Venues named by flag; replace any others when non-empty.
    pub(crate) venues: Vec<String>,
    pub(crate) start_hour: Option<f64>,
    pub(crate) group_size: Option<u8>,
    pub(crate) event_day: bool,
    pub(crate) weekday: Option<Weekday>,
    pub(crate) request_path: Option<Utf8PathBuf>,
    pub(crate) catalog: Option<Utf8PathBuf>,
    pub(crate) output: Option<Utf8PathBuf>,
    /// `None` when narration is disabled.
    pub(crate) narration: Option<NarrationStyle>,
}

impl PlanConfig {
    pub(crate) fn validate_sources(&self) -> Result<(), CliError> {
        require_existing(self.request_path.as_deref(), ARG_REQUEST)?;
        require_existing(self.catalog.as_deref(), ARG_CATALOG)?;
        Ok(())
    }

    /// Build the request from the file or message, then apply explicit
    /// flags on top.
    fn build_request(
        &self,
        catalog: &StaticCatalog,
        today: Weekday,
    ) -> Result<PlanRequest, CliError> {
        let weekday = self.weekday.unwrap_or(today);
        let mut request = match (&self.request_path, &self.message) {
            (Some(path), _) => load_plan_request(path)?,
            (None, Some(message)) => VenueMatcher::new(catalog)
                .parse(message)
                .into_plan_request(weekday),
            (None, None) => PlanRequest::new(Vec::<String>::new(), weekday),
        };
        if !self.venues.is_empty() {
            request.venues.clone_from(&self.venues);
        }
        if let Some(start_hour) = self.start_hour {
            request.start_hour = start_hour;
        }
        if let Some(group_size) = self.group_size {
            request.group_size = group_size;
        }
        if let Some(day) = self.weekday {
            request.weekday = day;
        }
        request.is_event_day |= self.event_day;
        Ok(request.sanitised())
    }
}

impl TryFrom<PlanArgs> for PlanConfig {
    type Error = CliError;

    fn try_from(args: PlanArgs) -> Result<Self, Self::Error> {
        let message = args
            .message
            .map(|text| text.trim().to_owned())
            .filter(|text| !text.is_empty());
        if message.is_none() && args.venues.is_empty() && args.request_path.is_none() {
            return Err(CliError::MissingArgument {
                field: ARG_VENUE,
                env: ENV_PLAN_VENUES,
            });
        }
        let narration = if args.no_narration {
            None
        } else {
            Some(args.narration.unwrap_or_default())
        };
        Ok(Self {
            message,
            venues: args.venues,
            start_hour: args.start_hour,
            group_size: args.group_size,
            event_day: args.event_day,
            weekday: args.weekday,
            request_path: args.request_path,
            catalog: args.catalog,
            output: args.output,
            narration,
        })
    }
}

pub(crate) fn run_plan_with(
    args: PlanArgs,
    today: Weekday,
    writer: &mut dyn Write,
) -> Result<(), CliError> {
    let config = resolve_plan_config(args)?;
    let report = execute_plan(&config, today)?;
    match &config.output {
        Some(path) => {
            let mut file = barhop_fs::create_utf8_file(path).map_err(CliError::WriteOutput)?;
            write_json(&mut file, &report)?;
            info!("wrote plan report to {path}");
            Ok(())
        }
        None => write_json(writer, &report),
    }
}

fn resolve_plan_config(args: PlanArgs) -> Result<PlanConfig, CliError> {
    let config = args.into_config()?;
    config.validate_sources()?;
    Ok(config)
}

pub(crate) fn execute_plan(config: &PlanConfig, today: Weekday) -> Result<PlanReport, CliError> {
    let catalog = load_catalog(config.catalog.as_deref())?;
    let request = config.build_request(&catalog, today)?;
    debug!(
        "planning {} venue(s) on {} from {}",
        request.venues.len(),
        request.weekday,
        request.start_time()
    );
    let narrator = config.narration.map(TemplateNarrator::new);

    if request.venues.is_empty() {
        let available: Vec<String> = catalog
            .all()
            .iter()
            .map(|venue| venue.name.clone())
            .collect();
        let context = PlanReportContext::NoVenues {
            available: &available,
        };
        return Ok(PlanReport {
            success: false,
            message: narrator.map(|n| n.narrate(&context)),
            reason: Some(Infeasibility::NoRecognizedVenues.to_string()),
            itinerary: Vec::new(),
            total_wait_time: 0,
            parsed_venues: Vec::new(),
            parsed_time: request.start_time().to_string(),
            group_size: request.group_size,
            is_event_day: request.is_event_day,
            weekday: request.weekday,
            diagnostics: None,
        });
    }

    let outcome = ExhaustivePlanner::new(&*catalog).plan(&request);
    Ok(build_report(&request, &outcome, narrator.as_ref()))
}

fn build_report(
    request: &PlanRequest,
    outcome: &PlanOutcome,
    narrator: Option<&TemplateNarrator>,
) -> PlanReport {
    let result = &outcome.result;
    let context = match result.reason() {
        Some(reason) => PlanReportContext::Infeasible { reason },
        None => PlanReportContext::Planned {
            steps: result.steps(),
            total_wait_minutes: result.total_wait_minutes(),
            is_event_day: request.is_event_day,
        },
    };
    PlanReport {
        success: outcome.is_planned(),
        message: narrator.map(|n| n.narrate(&context)),
        reason: result.reason().map(ToString::to_string),
        itinerary: result.steps().iter().map(ItineraryStop::from).collect(),
        total_wait_time: result.total_wait_minutes(),
        parsed_venues: request.venues.clone(),
        parsed_time: request.start_time().to_string(),
        group_size: request.group_size,
        is_event_day: request.is_event_day,
        weekday: request.weekday,
        diagnostics: Some(ReportDiagnostics {
            solve_time_ms: u64::try_from(outcome.diagnostics.solve_time.as_millis())
                .unwrap_or(u64::MAX),
            orderings_evaluated: outcome.diagnostics.orderings_evaluated,
        }),
    }
}

/// Loads a JSON-encoded [`PlanRequest`] from disk.
pub(crate) fn load_plan_request(path: &Utf8Path) -> Result<PlanRequest, CliError> {
    let file = open_utf8_file(path).map_err(|source| CliError::OpenInput {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_reader(BufReader::new(file)).map_err(|source| CliError::ParsePlanRequest {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
pub(crate) fn config_from_layers_for_test(
    layers: Vec<ortho_config::MergeLayer<'static>>,
) -> Result<PlanConfig, CliError> {
    let merged = PlanArgs::merge_from_layers(layers).map_err(CliError::from)?;
    PlanConfig::try_from(merged)
}
