//! Walk one ordering through the evening.

use barhop_core::{
    ClockTime, Infeasibility, PlanRequest, RouteStep, SimulationResult, VenueCatalog,
};
use chrono::Weekday;

use crate::WaitModel;

/// Minutes spent walking between consecutive venues.
pub const TRAVEL_MINUTES: u32 = 7;
/// Minutes spent inside each venue once through the door.
pub const STAY_MINUTES: u32 = 60;

/// The evening a route is simulated against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Conditions {
    /// Arrival time at the first venue.
    pub start: ClockTime,
    /// Number of people in the group.
    pub group_size: u8,
    /// Whether crowds are swollen by an event.
    pub is_event_day: bool,
    /// The evening's weekday, which selects opening hours.
    pub weekday: Weekday,
}

impl Conditions {
    /// Derive conditions from a request after clamping its numeric fields.
    #[must_use]
    pub fn from_request(request: &PlanRequest) -> Self {
        let sanitised = request.clone().sanitised();
        Self {
            start: sanitised.start_time(),
            group_size: sanitised.group_size,
            is_event_day: sanitised.is_event_day,
            weekday: sanitised.weekday,
        }
    }
}

/// Fixed walking and visiting durations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RouteTimings {
    /// Minutes between leaving one venue and reaching the next.
    pub travel_minutes: u32,
    /// Minutes spent inside each venue.
    pub stay_minutes: u32,
}

impl Default for RouteTimings {
    fn default() -> Self {
        Self {
            travel_minutes: TRAVEL_MINUTES,
            stay_minutes: STAY_MINUTES,
        }
    }
}

/// Scores orderings against a catalog.
///
/// # Examples
/// ```
/// use barhop_core::{ClockTime, StaticCatalog};
/// use barhop_solver::{Conditions, Simulator};
/// use chrono::Weekday;
///
/// let simulator = Simulator::new(StaticCatalog::builtin());
/// let conditions = Conditions {
///     start: ClockTime::from_hm(21, 0),
///     group_size: 2,
///     is_event_day: false,
///     weekday: Weekday::Fri,
/// };
/// let result = simulator.simulate(&["Chimy's"], &conditions);
/// assert_eq!(result.total_wait_minutes(), 21);
/// assert_eq!(result.end_time(), Some(ClockTime::from_hm(22, 21)));
/// ```
#[derive(Debug, Clone)]
pub struct Simulator<C> {
    catalog: C,
    wait_model: WaitModel,
    timings: RouteTimings,
}

impl<C: VenueCatalog> Simulator<C> {
    /// Construct a simulator with the default wait model and timings.
    #[must_use]
    pub fn new(catalog: C) -> Self {
        Self::with_model(catalog, WaitModel::default(), RouteTimings::default())
    }

    /// Construct a simulator with explicit parameters.
    #[must_use]
    pub const fn with_model(catalog: C, wait_model: WaitModel, timings: RouteTimings) -> Self {
        Self {
            catalog,
            wait_model,
            timings,
        }
    }

    /// The catalog venues are resolved against.
    #[must_use]
    pub const fn catalog(&self) -> &C {
        &self.catalog
    }

    /// Simulate visiting `ordering` in sequence.
    ///
    /// The first venue is reached at `conditions.start`; each later one a
    /// fixed walk after leaving the previous. The walk stops at the first
    /// venue that is unknown or closed on arrival, and the whole route is
    /// then rejected.
    #[must_use]
    pub fn simulate<S: AsRef<str>>(
        &self,
        ordering: &[S],
        conditions: &Conditions,
    ) -> SimulationResult {
        if ordering.is_empty() {
            return SimulationResult::rejected(Infeasibility::EmptyRoute);
        }
        let mut steps = Vec::with_capacity(ordering.len());
        let mut current = conditions.start;
        for (position, name) in ordering.iter().map(AsRef::as_ref).enumerate() {
            if position > 0 {
                current = current.add_minutes(self.timings.travel_minutes);
            }
            let Some(venue) = self.catalog.lookup(name) else {
                return SimulationResult::rejected(Infeasibility::UnknownVenue {
                    name: name.to_owned(),
                });
            };
            if !venue.is_open(conditions.weekday, current) {
                return SimulationResult::rejected(Infeasibility::Closed {
                    venue: name.to_owned(),
                    at: current,
                });
            }
            let wait_minutes = self.wait_model.wait_minutes(
                Some(venue),
                current,
                conditions.group_size,
                conditions.is_event_day,
            );
            let departure = current
                .add_minutes(wait_minutes)
                .add_minutes(self.timings.stay_minutes);
            steps.push(RouteStep {
                venue: venue.name.clone(),
                arrival: current,
                departure,
                wait_minutes,
            });
            current = departure;
        }
        SimulationResult::completed(steps)
    }
}
