use std::time::Duration;

use crate::{PlanRequest, SimulationResult};

/// Counters describing how a plan was reached.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Diagnostics {
    /// Wall-clock time spent planning.
    pub solve_time: Duration,
    /// Number of permutations simulated.
    pub orderings_evaluated: usize,
}

/// Result of [`Planner::plan`].
///
/// `ordering` is present exactly when `result` is feasible.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PlanOutcome {
    /// The chosen visiting order.
    pub ordering: Option<Vec<String>>,
    /// The simulated schedule, or the reason planning failed.
    pub result: SimulationResult,
    /// Timing and search counters.
    pub diagnostics: Diagnostics,
}

impl PlanOutcome {
    /// Report whether a feasible ordering was found.
    #[must_use]
    pub const fn is_planned(&self) -> bool {
        self.ordering.is_some()
    }

    /// Split into the ordering and result, dropping diagnostics.
    #[must_use]
    pub fn into_parts(self) -> (Option<Vec<String>>, SimulationResult) {
        (self.ordering, self.result)
    }
}

/// Order a set of venues to minimise the evening's total wait.
///
/// Planners never fail: an impossible request yields a [`PlanOutcome`]
/// without an ordering and with the reason in its result.
/// Planners must be `Send + Sync` to operate safely across threads.
pub trait Planner: Send + Sync {
    /// Plan a route for `request`.
    fn plan(&self, request: &PlanRequest) -> PlanOutcome;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Infeasibility;
    use chrono::Weekday;
    use rstest::rstest;

    struct RefusingPlanner;

    impl Planner for RefusingPlanner {
        fn plan(&self, request: &PlanRequest) -> PlanOutcome {
            let reason = if request.venues.is_empty() {
                Infeasibility::EmptyRoute
            } else {
                Infeasibility::NoFeasibleOrdering
            };
            PlanOutcome {
                ordering: None,
                result: SimulationResult::rejected(reason),
                diagnostics: Diagnostics::default(),
            }
        }
    }

    #[rstest]
    fn outcome_without_ordering_is_not_planned() {
        let outcome = RefusingPlanner.plan(&PlanRequest::new(["Atomic"], Weekday::Tue));
        assert!(!outcome.is_planned());
        let (ordering, result) = outcome.into_parts();
        assert!(ordering.is_none());
        assert_eq!(result.reason(), Some(&Infeasibility::NoFeasibleOrdering));
    }

    #[rstest]
    fn planners_are_object_safe() {
        let planner: Box<dyn Planner> = Box::new(RefusingPlanner);
        let outcome = planner.plan(&PlanRequest::new(Vec::<String>::new(), Weekday::Tue));
        assert_eq!(outcome.result.reason(), Some(&Infeasibility::EmptyRoute));
    }
}
