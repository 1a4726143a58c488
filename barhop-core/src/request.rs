//! Planning requests and their input clamping.

use chrono::Weekday;

use crate::{ClockTime, MINUTES_PER_DAY};

/// Start hour used when none is given or the given one is not a number.
pub const DEFAULT_START_HOUR: f64 = 21.0;
/// Group size used when none is given.
pub const DEFAULT_GROUP_SIZE: u8 = 2;
/// Smallest accepted group.
pub const MIN_GROUP_SIZE: u8 = 1;
/// Largest accepted group.
pub const MAX_GROUP_SIZE: u8 = 20;
/// Last minute at which an evening may start: 47:59, the end of the
/// following day.
pub const LAST_START_MINUTE: u32 = 2 * MINUTES_PER_DAY - 1;

/// A request to order a set of venues.
///
/// Venue names may repeat; repeats are ignored by planners.
///
/// # Examples
/// ```
/// use chrono::Weekday;
/// use barhop_core::PlanRequest;
///
/// let request = PlanRequest::new(["Chimy's", "Cricket's"], Weekday::Fri)
///     .with_group_size(40)
///     .with_start_hour(f64::NAN)
///     .sanitised();
/// assert_eq!(request.group_size, 20);
/// assert_eq!(request.start_hour, 21.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PlanRequest {
    /// Venue names to visit, in the caller's order.
    pub venues: Vec<String>,
    /// Start of the evening in decimal hours; values past 24 are the next
    /// morning.
    #[cfg_attr(feature = "serde", serde(default = "default_start_hour"))]
    pub start_hour: f64,
    /// Number of people in the group.
    #[cfg_attr(feature = "serde", serde(default = "default_group_size"))]
    pub group_size: u8,
    /// Whether a special event (game day) swells the crowds.
    #[cfg_attr(feature = "serde", serde(default))]
    pub is_event_day: bool,
    /// The evening's weekday, which selects opening hours.
    pub weekday: Weekday,
}

#[cfg(feature = "serde")]
const fn default_start_hour() -> f64 {
    DEFAULT_START_HOUR
}

#[cfg(feature = "serde")]
const fn default_group_size() -> u8 {
    DEFAULT_GROUP_SIZE
}

impl PlanRequest {
    /// Build a request with the default start hour, group size and no
    /// event.
    #[must_use]
    pub fn new<I, S>(venues: I, weekday: Weekday) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            venues: venues.into_iter().map(Into::into).collect(),
            start_hour: DEFAULT_START_HOUR,
            group_size: DEFAULT_GROUP_SIZE,
            is_event_day: false,
            weekday,
        }
    }

    /// Set the start hour.
    #[must_use]
    pub const fn with_start_hour(mut self, start_hour: f64) -> Self {
        self.start_hour = start_hour;
        self
    }

    /// Set the group size.
    #[must_use]
    pub const fn with_group_size(mut self, group_size: u8) -> Self {
        self.group_size = group_size;
        self
    }

    /// Mark the evening as an event day.
    #[must_use]
    pub const fn with_event_day(mut self, is_event_day: bool) -> Self {
        self.is_event_day = is_event_day;
        self
    }

    /// Clamp numeric fields into their supported ranges.
    ///
    /// Group size is clamped to `1..=20`. A non-finite start hour becomes
    /// [`DEFAULT_START_HOUR`]; finite ones are clamped between midnight and
    /// [`LAST_START_MINUTE`].
    #[must_use]
    pub fn sanitised(mut self) -> Self {
        self.group_size = self.group_size.clamp(MIN_GROUP_SIZE, MAX_GROUP_SIZE);
        let latest = ClockTime::from_minutes(LAST_START_MINUTE).as_hours();
        self.start_hour = if self.start_hour.is_finite() {
            self.start_hour.clamp(0.0, latest)
        } else {
            DEFAULT_START_HOUR
        };
        self
    }

    /// The start of the evening, rounded to the minute.
    ///
    /// Applies the same clamping as [`PlanRequest::sanitised`].
    #[must_use]
    pub fn start_time(&self) -> ClockTime {
        let start = if self.start_hour.is_finite() {
            ClockTime::from_hours(self.start_hour)
        } else {
            ClockTime::from_hours(DEFAULT_START_HOUR)
        };
        start.min(ClockTime::from_minutes(LAST_START_MINUTE))
    }
}
