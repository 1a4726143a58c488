//! Route simulation and ordering search for barhop.
//!
//! [`Simulator`] walks one ordering through the evening: it walks between
//! venues, checks each venue is open on arrival, and adds the wait from
//! [`WaitModel`] and a fixed stay. [`ExhaustivePlanner`] implements
//! [`Planner`](barhop_core::Planner) by simulating every permutation of up to
//! five venues and keeping the feasible one with the lowest total wait.
//! [`optimize`] wraps the planner for one-off calls.

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

mod optimizer;
mod simulator;
mod wait;

pub use optimizer::{ExhaustivePlanner, ExhaustivePlannerConfig, MAX_VENUES, optimize};
pub use simulator::{Conditions, RouteTimings, STAY_MINUTES, Simulator, TRAVEL_MINUTES};
pub use wait::{HourlyTiers, WaitModel};
