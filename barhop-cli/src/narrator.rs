//! Human-readable summaries of plan outcomes.

use std::fmt::Write as _;

use barhop_core::{Infeasibility, RouteStep};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Total waits below this many minutes count as minimal.
const SHORT_WAIT_MINUTES: u32 = 30;
/// Total waits below this many minutes count as reasonable.
const MODERATE_WAIT_MINUTES: u32 = 60;

/// What a narrator is asked to describe.
#[derive(Debug, Clone, Copy)]
pub enum PlanReportContext<'a> {
    /// A feasible route was found.
    Planned {
        /// Stops in visiting order.
        steps: &'a [RouteStep],
        /// Sum of the stop waits.
        total_wait_minutes: u32,
        /// Whether event-day crowds were assumed.
        is_event_day: bool,
    },
    /// Planning ran but no route works.
    Infeasible {
        /// Why the plan failed.
        reason: &'a Infeasibility,
    },
    /// The request named no venue the catalog knows.
    NoVenues {
        /// Catalog venue names, for the hint.
        available: &'a [String],
    },
}

/// Turns a plan outcome into a message for people.
pub trait Narrator {
    /// Describe `context`.
    fn narrate(&self, context: &PlanReportContext<'_>) -> String;
}

/// Shape of the template text.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NarrationStyle {
    /// One sentence naming the route and its total wait.
    #[default]
    Summary,
    /// One block per stop with 12-hour arrival and departure times.
    Itinerary,
}

/// Fixed-text narrator.
///
/// # Examples
/// ```
/// use barhop_cli::{NarrationStyle, Narrator, PlanReportContext, TemplateNarrator};
///
/// let narrator = TemplateNarrator::new(NarrationStyle::Summary);
/// let message = narrator.narrate(&PlanReportContext::Planned {
///     steps: &[],
///     total_wait_minutes: 0,
///     is_event_day: false,
/// });
/// assert!(message.starts_with("Here's your optimized route"));
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct TemplateNarrator {
    style: NarrationStyle,
}

impl TemplateNarrator {
    /// Narrator using `style` for planned routes.
    #[must_use]
    pub const fn new(style: NarrationStyle) -> Self {
        Self { style }
    }

    fn summary(steps: &[RouteStep], total_wait_minutes: u32, is_event_day: bool) -> String {
        let route = steps
            .iter()
            .map(|step| step.venue.as_str())
            .collect::<Vec<_>>()
            .join(" → ");
        let event_note = if is_event_day {
            " It's game day, so expect bigger crowds!"
        } else {
            ""
        };
        format!(
            "Here's your optimized route: {route}. Total expected wait: ~{total_wait_minutes} minutes.{event_note} Have fun!"
        )
    }

    fn itinerary(steps: &[RouteStep], total_wait_minutes: u32, is_event_day: bool) -> String {
        let mut text = String::from("Here's your optimized route!\n");
        for (position, step) in steps.iter().enumerate() {
            // Writing to a String cannot fail.
            let _ignored = write!(
                text,
                "\n{}. {}\n   Arrive: {} → Leave: {}\n   Wait: ~{} min\n",
                position + 1,
                step.venue,
                step.arrival.to_12h_string(),
                step.departure.to_12h_string(),
                step.wait_minutes
            );
        }
        let verdict = if total_wait_minutes < SHORT_WAIT_MINUTES {
            "Minimal waiting tonight!"
        } else if total_wait_minutes < MODERATE_WAIT_MINUTES {
            "Pretty reasonable wait times!"
        } else {
            "Some waiting, but worth it!"
        };
        let _ignored = write!(text, "\nTotal wait: {total_wait_minutes} min - {verdict}");
        if is_event_day {
            text.push_str("\nGame day crowds factored in!");
        }
        text
    }
}

impl Narrator for TemplateNarrator {
    fn narrate(&self, context: &PlanReportContext<'_>) -> String {
        match *context {
            PlanReportContext::Planned {
                steps,
                total_wait_minutes,
                is_event_day,
            } => match self.style {
                NarrationStyle::Summary => Self::summary(steps, total_wait_minutes, is_event_day),
                NarrationStyle::Itinerary => {
                    Self::itinerary(steps, total_wait_minutes, is_event_day)
                }
            },
            PlanReportContext::Infeasible { reason } => format!(
                "Couldn't plan that route: {reason}. Try an earlier time or different venues."
            ),
            PlanReportContext::NoVenues { available } => format!(
                "I couldn't find any venue names in your request. Available venues: {}. \
                 Try something like 'Chimy's and Cricket's at 9pm'",
                available.join(", ")
            ),
        }
    }
}
