//! Venue records and their validation.

use chrono::Weekday;
use thiserror::Error;

use crate::{ClockTime, WeeklySchedule};

/// Lowest popularity tier.
pub const MIN_POPULARITY: u8 = 1;
/// Highest popularity tier.
pub const MAX_POPULARITY: u8 = 5;
/// The tier at which popularity neither lengthens nor shortens waits.
pub const NEUTRAL_POPULARITY: u8 = 3;

/// A bar in the catalog.
///
/// Venues are static reference data: built once and only ever read.
///
/// # Examples
/// ```
/// use chrono::Weekday;
/// use barhop_core::{ClockTime, OpeningHours, Venue, WeeklySchedule};
///
/// let venue = Venue::new(
///     "Chimy's",
///     200,
///     5,
///     15,
///     WeeklySchedule::every_day(OpeningHours::from_hours(17, 2)),
/// );
/// assert!(venue.validate().is_ok());
/// assert!(venue.is_open(Weekday::Wed, ClockTime::from_hm(21, 0)));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Venue {
    /// Unique display name, also the lookup key.
    pub name: String,
    /// Nominal head count; informational only.
    pub capacity: u32,
    /// Popularity tier from 1 to 5.
    pub popularity: u8,
    /// Typical wait in minutes before any adjustment.
    pub base_wait_minutes: u32,
    /// Opening windows by weekday.
    #[cfg_attr(feature = "serde", serde(default))]
    pub schedule: WeeklySchedule,
}

/// Reasons a [`Venue`] fails validation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum VenueError {
    /// The name was empty or only whitespace.
    #[error("venue name must not be blank")]
    BlankName,
    /// Capacity was zero.
    #[error("capacity must be positive")]
    ZeroCapacity,
    /// Popularity fell outside the supported tiers.
    #[error("popularity {popularity} is outside {MIN_POPULARITY}..={MAX_POPULARITY}")]
    PopularityOutOfRange {
        /// The rejected tier.
        popularity: u8,
    },
    /// Base wait was zero.
    #[error("base wait must be positive")]
    ZeroBaseWait,
}

impl Venue {
    /// Construct a venue without validating it.
    ///
    /// Catalogs validate on insertion; call [`Venue::validate`] to check a
    /// record in isolation.
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        capacity: u32,
        popularity: u8,
        base_wait_minutes: u32,
        schedule: WeeklySchedule,
    ) -> Self {
        Self {
            name: name.into(),
            capacity,
            popularity,
            base_wait_minutes,
            schedule,
        }
    }

    /// Check the record's numeric ranges and name.
    ///
    /// # Errors
    /// Returns the first [`VenueError`] found.
    pub fn validate(&self) -> Result<(), VenueError> {
        if self.name.trim().is_empty() {
            return Err(VenueError::BlankName);
        }
        if self.capacity == 0 {
            return Err(VenueError::ZeroCapacity);
        }
        if !(MIN_POPULARITY..=MAX_POPULARITY).contains(&self.popularity) {
            return Err(VenueError::PopularityOutOfRange {
                popularity: self.popularity,
            });
        }
        if self.base_wait_minutes == 0 {
            return Err(VenueError::ZeroBaseWait);
        }
        Ok(())
    }

    /// Report whether the venue admits guests at `time` on `weekday`'s
    /// evening.
    #[must_use]
    pub fn is_open(&self, weekday: Weekday, time: ClockTime) -> bool {
        self.schedule.is_open(weekday, time)
    }
}
