//! Facade crate for the barhop route planner.
//!
//! Re-exports the core domain types, with the exhaustive planner and the
//! free-text request parser behind feature flags.

#![forbid(unsafe_code)]

pub use barhop_core::{
    CatalogError, ClockTime, Diagnostics, Infeasibility, OpeningHours, PlanOutcome, PlanRequest,
    Planner, RouteStep, SimulationResult, StaticCatalog, Venue, VenueCatalog, VenueError,
    WeeklySchedule,
};

#[cfg(feature = "solver")]
pub use barhop_solver::{ExhaustivePlanner, ExhaustivePlannerConfig, WaitModel, optimize};

#[cfg(feature = "nlu")]
pub use barhop_nlu::{ParsedRequest, VenueMatcher, parse_request};
