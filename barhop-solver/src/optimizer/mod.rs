//! Exhaustive ordering search.
//!
//! Requests are small (five venues at most), so every permutation is
//! simulated and the lowest total wait wins. Permutations are visited in
//! lexicographic order of the venues' positions in the request, which makes
//! ties resolve toward the caller's order.

use std::collections::HashSet;
use std::time::{Duration, Instant};

use barhop_core::{
    Diagnostics, Infeasibility, PlanOutcome, PlanRequest, Planner, SimulationResult,
    VenueCatalog,
};
use chrono::Weekday;
use itertools::Itertools;
use log::{debug, warn};

use crate::{Conditions, RouteTimings, Simulator, WaitModel};

/// Most venues a single plan will order.
pub const MAX_VENUES: usize = 5;

/// Configuration for [`ExhaustivePlanner`].
#[derive(Debug, Clone)]
pub struct ExhaustivePlannerConfig {
    /// Venues beyond this many, after deduplication, are dropped.
    pub max_venues: usize,
    /// Optional time limit; checked after each simulated permutation.
    pub deadline: Option<Duration>,
    /// Wait estimate parameters.
    pub wait_model: WaitModel,
    /// Walking and visiting durations.
    pub timings: RouteTimings,
}

impl Default for ExhaustivePlannerConfig {
    fn default() -> Self {
        Self {
            max_venues: MAX_VENUES,
            deadline: None,
            wait_model: WaitModel::default(),
            timings: RouteTimings::default(),
        }
    }
}

/// Planner that simulates every ordering of the requested venues.
///
/// # Examples
/// ```
/// use barhop_core::{PlanRequest, Planner, StaticCatalog};
/// use barhop_solver::ExhaustivePlanner;
/// use chrono::Weekday;
///
/// let planner = ExhaustivePlanner::new(StaticCatalog::builtin());
/// let request = PlanRequest::new(["Chimy's", "Cricket's"], Weekday::Fri);
/// let outcome = planner.plan(&request);
/// assert!(outcome.is_planned());
/// assert_eq!(outcome.diagnostics.orderings_evaluated, 2);
/// ```
#[derive(Debug, Clone)]
pub struct ExhaustivePlanner<C> {
    simulator: Simulator<C>,
    max_venues: usize,
    deadline: Option<Duration>,
}

impl<C: VenueCatalog> ExhaustivePlanner<C> {
    /// Construct a planner using default configuration.
    #[must_use]
    pub fn new(catalog: C) -> Self {
        Self::with_config(catalog, ExhaustivePlannerConfig::default())
    }

    /// Construct a planner with explicit configuration.
    #[must_use]
    pub const fn with_config(catalog: C, config: ExhaustivePlannerConfig) -> Self {
        Self {
            simulator: Simulator::with_model(catalog, config.wait_model, config.timings),
            max_venues: config.max_venues,
            deadline: config.deadline,
        }
    }

    /// The simulator used to score orderings.
    #[must_use]
    pub const fn simulator(&self) -> &Simulator<C> {
        &self.simulator
    }

    /// Deduplicate, drop unknown names and cap the count.
    fn candidates(&self, requested: &[String]) -> Vec<String> {
        let catalog = self.simulator.catalog();
        let mut seen = HashSet::new();
        let mut known: Vec<String> = requested
            .iter()
            .filter(|name| seen.insert(name.as_str()))
            .filter(|name| catalog.contains(name))
            .cloned()
            .collect();
        if known.len() > self.max_venues {
            warn!(
                "considering only the first {} of {} venues",
                self.max_venues,
                known.len()
            );
            known.truncate(self.max_venues);
        }
        known
    }

    fn search(&self, venues: &[String], conditions: &Conditions, started_at: Instant) -> Search {
        let mut search = Search::default();
        for ordering in venues.iter().permutations(venues.len()) {
            let result = self.simulator.simulate(&ordering, conditions);
            search.evaluated += 1;
            if result.is_feasible() && search.improves_on_best(&result) {
                search.best = Some((ordering.into_iter().cloned().collect(), result));
            }
            if self
                .deadline
                .is_some_and(|deadline| started_at.elapsed() >= deadline)
            {
                search.timed_out = true;
                break;
            }
        }
        search
    }

    /// Explain why no ordering worked: name the venues already shut at the
    /// start, if any.
    fn diagnose(&self, venues: &[String], conditions: &Conditions) -> Infeasibility {
        let closed: Vec<String> = venues
            .iter()
            .filter(|name| {
                matches!(
                    self.simulator
                        .simulate(std::slice::from_ref(*name), conditions)
                        .reason(),
                    Some(Infeasibility::Closed { .. })
                )
            })
            .cloned()
            .collect();
        if closed.is_empty() {
            Infeasibility::NoFeasibleOrdering
        } else {
            Infeasibility::ClosedAtStart { venues: closed }
        }
    }
}

#[derive(Debug, Default)]
struct Search {
    best: Option<(Vec<String>, SimulationResult)>,
    evaluated: usize,
    timed_out: bool,
}

impl Search {
    fn improves_on_best(&self, candidate: &SimulationResult) -> bool {
        self.best.as_ref().is_none_or(|(_, best)| {
            candidate.total_wait_minutes() < best.total_wait_minutes()
        })
    }
}

impl<C: VenueCatalog> Planner for ExhaustivePlanner<C> {
    fn plan(&self, request: &PlanRequest) -> PlanOutcome {
        let started_at = Instant::now();
        let conditions = Conditions::from_request(request);
        let venues = self.candidates(&request.venues);

        let (ordering, result, evaluated) = match venues.as_slice() {
            [] => (
                None,
                SimulationResult::rejected(Infeasibility::NoRecognizedVenues),
                0,
            ),
            [_] => {
                let result = self.simulator.simulate(&venues, &conditions);
                let ordering = result.is_feasible().then(|| venues.clone());
                (ordering, result, 1)
            }
            _ => {
                let search = self.search(&venues, &conditions, started_at);
                match search.best {
                    Some((ordering, result)) => (Some(ordering), result, search.evaluated),
                    None if search.timed_out => {
                        warn!("planning deadline passed before any feasible ordering");
                        (
                            None,
                            SimulationResult::rejected(Infeasibility::DeadlineExceeded),
                            search.evaluated,
                        )
                    }
                    None => (
                        None,
                        SimulationResult::rejected(self.diagnose(&venues, &conditions)),
                        search.evaluated,
                    ),
                }
            }
        };

        let diagnostics = Diagnostics {
            solve_time: started_at.elapsed(),
            orderings_evaluated: evaluated,
        };
        debug!(
            "planned {} venue(s) in {:?} across {} ordering(s): {}",
            venues.len(),
            diagnostics.solve_time,
            diagnostics.orderings_evaluated,
            result
                .reason()
                .map_or_else(|| "feasible".to_owned(), ToString::to_string)
        );
        PlanOutcome {
            ordering,
            result,
            diagnostics,
        }
    }
}

/// Plan with default configuration and return the ordering and its result.
///
/// # Examples
/// ```
/// use barhop_core::StaticCatalog;
/// use barhop_solver::optimize;
/// use chrono::Weekday;
///
/// let (ordering, result) = optimize(
///     StaticCatalog::builtin(),
///     &["Nowhere"],
///     21.0,
///     2,
///     false,
///     Weekday::Sat,
/// );
/// assert!(ordering.is_none());
/// assert_eq!(result.reason().map(ToString::to_string).as_deref(), Some("no recognized venues"));
/// ```
#[must_use]
pub fn optimize<C, S>(
    catalog: C,
    venues: &[S],
    start_hour: f64,
    group_size: u8,
    is_event_day: bool,
    weekday: Weekday,
) -> (Option<Vec<String>>, SimulationResult)
where
    C: VenueCatalog,
    S: AsRef<str>,
{
    let request = PlanRequest::new(venues.iter().map(AsRef::as_ref), weekday)
        .with_start_hour(start_hour)
        .with_group_size(group_size)
        .with_event_day(is_event_day);
    ExhaustivePlanner::new(catalog).plan(&request).into_parts()
}
