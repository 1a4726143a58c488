//! Outcomes of walking a route through the evening.

use thiserror::Error;

use crate::ClockTime;

/// One stop on a simulated route.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RouteStep {
    /// Venue name.
    pub venue: String,
    /// When the group reaches the door.
    pub arrival: ClockTime,
    /// When the group leaves, after waiting and staying.
    pub departure: ClockTime,
    /// Expected wait at the door, never below one minute.
    pub wait_minutes: u32,
}

/// Why a route or plan could not be produced.
///
/// Infeasibility is an ordinary outcome, carried inside
/// [`SimulationResult`] rather than returned as an `Err`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(tag = "kind", rename_all = "snake_case")
)]
pub enum Infeasibility {
    /// A venue was not in the catalog.
    #[error("Unknown bar: {name}")]
    UnknownVenue {
        /// The unrecognised name.
        name: String,
    },
    /// The route reached a venue outside its opening hours.
    #[error("{venue} is closed at {at}")]
    Closed {
        /// The closed venue.
        venue: String,
        /// The arrival time that missed the window.
        at: ClockTime,
    },
    /// The route had no stops.
    #[error("Empty route")]
    EmptyRoute,
    /// None of the requested names matched the catalog.
    #[error("no recognized venues")]
    NoRecognizedVenues,
    /// No ordering works because these venues are shut at the start time.
    #[error("These venues are closed at that time: {}", venues.join(", "))]
    ClosedAtStart {
        /// The venues closed at the start of the evening, in request order.
        venues: Vec<String>,
    },
    /// Every venue is open at the start, yet no ordering fits the hours.
    #[error("no feasible ordering found")]
    NoFeasibleOrdering,
    /// The planning deadline passed before any feasible ordering turned up.
    #[error("planning deadline exceeded")]
    DeadlineExceeded,
}

/// The schedule produced by simulating one ordering.
///
/// # Examples
/// ```
/// use barhop_core::{ClockTime, Infeasibility, RouteStep, SimulationResult};
///
/// let step = RouteStep {
///     venue: "Atomic".into(),
///     arrival: ClockTime::from_hm(21, 0),
///     departure: ClockTime::from_hm(22, 6),
///     wait_minutes: 6,
/// };
/// let done = SimulationResult::completed(vec![step]);
/// assert!(done.is_feasible());
/// assert_eq!(done.total_wait_minutes(), 6);
///
/// let failed = SimulationResult::rejected(Infeasibility::EmptyRoute);
/// assert_eq!(failed.total_wait_minutes(), 0);
/// assert_eq!(failed.reason().map(ToString::to_string).as_deref(), Some("Empty route"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimulationResult {
    feasible: bool,
    total_wait_minutes: u32,
    steps: Vec<RouteStep>,
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none", default))]
    reason: Option<Infeasibility>,
}

impl SimulationResult {
    /// A feasible result; the total is the sum of the steps' waits.
    #[must_use]
    pub fn completed(steps: Vec<RouteStep>) -> Self {
        let total_wait_minutes = steps
            .iter()
            .fold(0_u32, |total, step| total.saturating_add(step.wait_minutes));
        Self {
            feasible: true,
            total_wait_minutes,
            steps,
            reason: None,
        }
    }

    /// An infeasible result with no steps and no wait.
    #[must_use]
    pub const fn rejected(reason: Infeasibility) -> Self {
        Self {
            feasible: false,
            total_wait_minutes: 0,
            steps: Vec::new(),
            reason: Some(reason),
        }
    }

    /// Report whether every stop was open on arrival.
    #[must_use]
    pub const fn is_feasible(&self) -> bool {
        self.feasible
    }

    /// Sum of waits across the route; zero when infeasible.
    #[must_use]
    pub const fn total_wait_minutes(&self) -> u32 {
        self.total_wait_minutes
    }

    /// The stops in visiting order; empty when infeasible.
    #[must_use]
    pub fn steps(&self) -> &[RouteStep] {
        &self.steps
    }

    /// The reason the route failed, if it did.
    #[must_use]
    pub const fn reason(&self) -> Option<&Infeasibility> {
        self.reason.as_ref()
    }

    /// Departure from the final stop.
    #[must_use]
    pub fn end_time(&self) -> Option<ClockTime> {
        self.steps.last().map(|step| step.departure)
    }
}
