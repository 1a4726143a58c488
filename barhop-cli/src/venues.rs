//! Catalog browsing commands: `venues` and `venue`.

use std::io::Write;

use barhop_core::{Venue, VenueCatalog};
use barhop_nlu::{MATCH_THRESHOLD, VenueMatcher};
use camino::{Utf8Path, Utf8PathBuf};
use clap::Parser;
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize};

use crate::catalog::{load_catalog, require_existing};
use crate::report::{VenueList, VenueSummary};
use crate::{ARG_CATALOG, ARG_NAME, CliError, ENV_VENUE_NAME, write_json};

/// CLI arguments for the `venues` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(about = "List the venues in the catalog")]
#[ortho_config(prefix = "BARHOP")]
pub(crate) struct VenuesArgs {
    /// Path to a JSON venue catalog replacing the built-in roster.
    #[arg(long = ARG_CATALOG, value_name = "path")]
    #[serde(default)]
    pub(crate) catalog: Option<Utf8PathBuf>,
}

/// CLI arguments for the `venue` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    long_about = "Show one venue with its opening hours. Loose spellings such \
                 as \"chimys\" resolve to the closest catalog name.",
    about = "Show one venue in detail"
)]
#[ortho_config(prefix = "BARHOP")]
pub(crate) struct VenueArgs {
    /// Venue name.
    #[arg(value_name = "name")]
    #[serde(default)]
    pub(crate) name: Option<String>,
    /// Path to a JSON venue catalog replacing the built-in roster.
    #[arg(long = ARG_CATALOG, value_name = "path")]
    #[serde(default)]
    pub(crate) catalog: Option<Utf8PathBuf>,
}

pub(crate) fn run_venues_with(args: VenuesArgs, writer: &mut dyn Write) -> Result<(), CliError> {
    let merged = args.load_and_merge().map_err(CliError::Configuration)?;
    write_json(writer, &list_venues(merged.catalog.as_deref())?)
}

pub(crate) fn list_venues(catalog_path: Option<&Utf8Path>) -> Result<VenueList, CliError> {
    require_existing(catalog_path, ARG_CATALOG)?;
    let catalog = load_catalog(catalog_path)?;
    let venues: Vec<VenueSummary> = catalog.all().iter().map(VenueSummary::from).collect();
    Ok(VenueList {
        count: venues.len(),
        venues,
    })
}

pub(crate) fn run_venue_with(args: VenueArgs, writer: &mut dyn Write) -> Result<(), CliError> {
    let merged = args.load_and_merge().map_err(CliError::Configuration)?;
    let name = merged.name.ok_or(CliError::MissingArgument {
        field: ARG_NAME,
        env: ENV_VENUE_NAME,
    })?;
    write_json(writer, &find_venue(&name, merged.catalog.as_deref())?)
}

/// Look `name` up exactly, then through the fuzzy matcher.
pub(crate) fn find_venue(name: &str, catalog_path: Option<&Utf8Path>) -> Result<Venue, CliError> {
    require_existing(catalog_path, ARG_CATALOG)?;
    let catalog = load_catalog(catalog_path)?;
    catalog
        .lookup(name)
        .or_else(|| {
            VenueMatcher::new(&*catalog)
                .best(name, MATCH_THRESHOLD)
                .and_then(|candidate| catalog.lookup(&candidate.venue))
        })
        .cloned()
        .ok_or_else(|| CliError::UnknownVenue {
            name: name.to_owned(),
        })
}
