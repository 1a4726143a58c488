//! JSON documents printed by the CLI.

use barhop_core::{RouteStep, Venue};
use chrono::Weekday;
use serde::{Deserialize, Serialize};

/// One stop in a printed itinerary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItineraryStop {
    /// Venue name.
    pub venue_name: String,
    /// Arrival as wall-clock `HH:MM`.
    pub arrival_time: String,
    /// Departure as wall-clock `HH:MM`.
    pub departure_time: String,
    /// Expected wait at the door in minutes.
    pub expected_wait: u32,
}

impl From<&RouteStep> for ItineraryStop {
    fn from(step: &RouteStep) -> Self {
        Self {
            venue_name: step.venue.clone(),
            arrival_time: step.arrival.to_string(),
            departure_time: step.departure.to_string(),
            expected_wait: step.wait_minutes,
        }
    }
}

/// Planner effort for a report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportDiagnostics {
    /// Wall time spent planning, in milliseconds.
    pub solve_time_ms: u64,
    /// Orderings simulated.
    pub orderings_evaluated: usize,
}

/// Result of `barhop plan`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanReport {
    /// Whether a route was planned.
    pub success: bool,
    /// Narration, unless disabled.
    pub message: Option<String>,
    /// Why planning failed, when it did.
    pub reason: Option<String>,
    /// Stops in visiting order; empty on failure.
    pub itinerary: Vec<ItineraryStop>,
    /// Sum of the stop waits.
    pub total_wait_time: u32,
    /// Venues the request named, after parsing.
    pub parsed_venues: Vec<String>,
    /// Requested start as wall-clock `HH:MM`.
    pub parsed_time: String,
    /// Group size used for planning.
    pub group_size: u8,
    /// Whether event-day crowds were assumed.
    pub is_event_day: bool,
    /// Weekday whose opening hours applied.
    pub weekday: Weekday,
    /// Present when the planner ran.
    pub diagnostics: Option<ReportDiagnostics>,
}

/// One row of `barhop venues`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VenueSummary {
    /// Venue name.
    pub name: String,
    /// Capacity, informational only.
    pub capacity: u32,
    /// Popularity tier 1 to 5.
    pub popularity: u8,
    /// Base wait in minutes.
    pub base_wait_minutes: u32,
}

impl From<&Venue> for VenueSummary {
    fn from(venue: &Venue) -> Self {
        Self {
            name: venue.name.clone(),
            capacity: venue.capacity,
            popularity: venue.popularity,
            base_wait_minutes: venue.base_wait_minutes,
        }
    }
}

/// Result of `barhop venues`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VenueList {
    /// Venues in catalog order.
    pub venues: Vec<VenueSummary>,
    /// Number of venues.
    pub count: usize,
}
