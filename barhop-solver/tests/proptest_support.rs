//! Proptest strategies for planner property tests.
//!
//! Inputs draw on the built-in roster so every generated request names real
//! venues with real opening hours.

use barhop_core::{PlanRequest, StaticCatalog, VenueCatalog};
use chrono::Weekday;
use proptest::prelude::*;
use proptest::sample::subsequence;

/// Names from the built-in roster.
pub fn roster_names() -> Vec<String> {
    StaticCatalog::builtin()
        .all()
        .iter()
        .map(|venue| venue.name.clone())
        .collect()
}

/// Strategy for any weekday.
pub fn weekday_strategy() -> impl Strategy<Value = Weekday> {
    prop_oneof![
        Just(Weekday::Mon),
        Just(Weekday::Tue),
        Just(Weekday::Wed),
        Just(Weekday::Thu),
        Just(Weekday::Fri),
        Just(Weekday::Sat),
        Just(Weekday::Sun),
    ]
}

/// Strategy for distinct roster venues in shuffled order.
pub fn venue_list_strategy(
    min_count: usize,
    max_count: usize,
) -> impl Strategy<Value = Vec<String>> {
    subsequence(roster_names(), min_count..=max_count).prop_shuffle()
}

/// Strategy for a request over `min_count..=max_count` distinct venues.
///
/// Start hours cover the late afternoon through the small hours, in
/// quarter-hour steps.
#[expect(
    clippy::float_arithmetic,
    reason = "quarter hours convert to decimal hours"
)]
pub fn request_strategy(
    min_count: usize,
    max_count: usize,
) -> impl Strategy<Value = PlanRequest> {
    (
        venue_list_strategy(min_count, max_count),
        68_u32..=108,
        1_u8..=12,
        any::<bool>(),
        weekday_strategy(),
    )
        .prop_map(|(venues, quarter_hours, group_size, is_event_day, weekday)| {
            PlanRequest::new(venues, weekday)
                .with_start_hour(f64::from(quarter_hours) / 4.0)
                .with_group_size(group_size)
                .with_event_day(is_event_day)
        })
}
