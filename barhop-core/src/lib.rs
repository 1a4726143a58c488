//! Core domain types for the barhop route planner.
//!
//! A [`Venue`] carries a popularity tier, a base wait and a
//! [`WeeklySchedule`] of opening windows. Venues live in a
//! [`VenueCatalog`]; [`StaticCatalog::builtin`] provides the ten-venue
//! roster. A [`PlanRequest`] asks a [`Planner`] to order a set of venues,
//! and the answer is a [`PlanOutcome`] whose [`SimulationResult`] either
//! lists the [`RouteStep`]s or names the [`Infeasibility`] that stopped the
//! plan.
//!
//! Times are whole minutes after the evening's midnight ([`ClockTime`]), so
//! an evening that runs to 01:30 ends at `25:30`.

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

mod catalog;
mod clock;
mod hours;
mod planner;
mod request;
mod simulation;
mod venue;

#[cfg(any(test, feature = "test-support"))]
#[cfg_attr(docsrs, doc(cfg(feature = "test-support")))]
pub mod test_support;

pub use catalog::{CatalogError, StaticCatalog, VenueCatalog};
pub use clock::{ClockTime, ClockTimeParseError, MINUTES_PER_DAY, MINUTES_PER_HOUR};
pub use hours::{OpeningHours, WeeklySchedule};
pub use planner::{Diagnostics, PlanOutcome, Planner};
pub use request::{
    DEFAULT_GROUP_SIZE, DEFAULT_START_HOUR, LAST_START_MINUTE, MAX_GROUP_SIZE, MIN_GROUP_SIZE,
    PlanRequest,
};
pub use simulation::{Infeasibility, RouteStep, SimulationResult};
pub use venue::{MAX_POPULARITY, MIN_POPULARITY, NEUTRAL_POPULARITY, Venue, VenueError};
