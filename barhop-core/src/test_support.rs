//! Venue and catalog builders shared by unit and behaviour tests.

use crate::{CatalogError, OpeningHours, StaticCatalog, Venue, WeeklySchedule};

/// A neutral-popularity venue open from 16:00 to 04:00 every day.
#[must_use]
pub fn late_venue(name: &str, base_wait_minutes: u32) -> Venue {
    Venue::new(
        name,
        100,
        3,
        base_wait_minutes,
        WeeklySchedule::every_day(OpeningHours::from_hours(16, 4)),
    )
}

/// A venue with the given popularity and daily window.
#[must_use]
pub fn venue_with_hours(
    name: &str,
    popularity: u8,
    base_wait_minutes: u32,
    hours: OpeningHours,
) -> Venue {
    Venue::new(
        name,
        100,
        popularity,
        base_wait_minutes,
        WeeklySchedule::every_day(hours),
    )
}

/// A venue that never opens.
#[must_use]
pub fn shuttered_venue(name: &str) -> Venue {
    Venue::new(name, 100, 3, 5, WeeklySchedule::closed())
}

/// Build a validated catalog from `venues`.
///
/// # Errors
/// Propagates [`StaticCatalog::new`] failures.
pub fn catalog_of<I>(venues: I) -> Result<StaticCatalog, CatalogError>
where
    I: IntoIterator<Item = Venue>,
{
    StaticCatalog::new(venues.into_iter().collect())
}
