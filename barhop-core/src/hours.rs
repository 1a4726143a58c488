//! Opening hours: a daily window per weekday.
//!
//! A window whose close precedes its open runs overnight, e.g. 17:00–02:00.
//! A day without a window is closed all day. The weekday is the evening's
//! day: hours after midnight are checked against the same day's window,
//! which is how an overnight window reads on a venue's door.

use chrono::Weekday;

use crate::ClockTime;

/// A single day's opening window.
///
/// # Examples
/// ```
/// use barhop_core::{ClockTime, OpeningHours};
///
/// let hours = OpeningHours::new(ClockTime::from_hm(17, 0), ClockTime::from_hm(2, 0));
/// assert!(hours.is_overnight());
/// assert!(hours.contains(ClockTime::from_hm(23, 30)));
/// assert!(hours.contains(ClockTime::from_hm(25, 0)));
/// assert!(!hours.contains(ClockTime::from_hm(2, 0)));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct OpeningHours {
    /// Time the doors open.
    pub open: ClockTime,
    /// Time the doors close; earlier than `open` for overnight windows.
    pub close: ClockTime,
}

impl OpeningHours {
    /// Construct a window, folding both ends into the 24-hour day.
    #[must_use]
    pub const fn new(open: ClockTime, close: ClockTime) -> Self {
        Self {
            open: open.wrapped(),
            close: close.wrapped(),
        }
    }

    /// Construct a window from whole hours, e.g. `(17, 2)`.
    #[must_use]
    pub const fn from_hours(open_hour: u32, close_hour: u32) -> Self {
        Self::new(
            ClockTime::from_hm(open_hour, 0),
            ClockTime::from_hm(close_hour, 0),
        )
    }

    /// Report whether the window runs past midnight.
    #[must_use]
    pub fn is_overnight(&self) -> bool {
        self.close.wrapped() < self.open.wrapped()
    }

    /// Report whether `time` (folded into the day) falls inside the window.
    ///
    /// The open end is inclusive and the close end exclusive. A window whose
    /// ends coincide is empty.
    #[must_use]
    pub fn contains(&self, time: ClockTime) -> bool {
        let at = time.wrapped();
        let open = self.open.wrapped();
        let close = self.close.wrapped();
        if close > open {
            open <= at && at < close
        } else if close < open {
            at >= open || at < close
        } else {
            false
        }
    }
}

/// Opening windows for each day of the week.
///
/// # Examples
/// ```
/// use chrono::Weekday;
/// use barhop_core::{ClockTime, OpeningHours, WeeklySchedule};
///
/// let schedule = WeeklySchedule::with_weekend(
///     OpeningHours::from_hours(18, 1),
///     OpeningHours::from_hours(18, 2),
/// );
/// let late = ClockTime::from_hm(25, 30);
/// assert!(!schedule.is_open(Weekday::Tue, late));
/// assert!(schedule.is_open(Weekday::Fri, late));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(from = "ScheduleRepr", into = "ScheduleRepr")
)]
pub struct WeeklySchedule {
    days: [Option<OpeningHours>; 7],
}

impl WeeklySchedule {
    /// A schedule closed every day.
    #[must_use]
    pub const fn closed() -> Self {
        Self { days: [None; 7] }
    }

    /// A schedule with the same window every day.
    #[must_use]
    pub const fn every_day(hours: OpeningHours) -> Self {
        Self {
            days: [Some(hours); 7],
        }
    }

    /// A schedule using `weekend` on Friday and Saturday and `default` on
    /// the other days.
    #[must_use]
    pub fn with_weekend(default: OpeningHours, weekend: OpeningHours) -> Self {
        Self::every_day(default)
            .with_day(Weekday::Fri, Some(weekend))
            .with_day(Weekday::Sat, Some(weekend))
    }

    /// Replace one day's window, returning `self` for chaining.
    #[must_use]
    pub fn with_day(mut self, weekday: Weekday, hours: Option<OpeningHours>) -> Self {
        if let Some(slot) = self.days.get_mut(weekday.num_days_from_monday() as usize) {
            *slot = hours;
        }
        self
    }

    /// The window for `weekday`, or `None` when closed all day.
    #[must_use]
    pub fn hours_on(&self, weekday: Weekday) -> Option<OpeningHours> {
        self.days
            .get(weekday.num_days_from_monday() as usize)
            .copied()
            .flatten()
    }

    /// Report whether the venue is open at `time` on `weekday`'s evening.
    #[must_use]
    pub fn is_open(&self, weekday: Weekday, time: ClockTime) -> bool {
        self.hours_on(weekday)
            .is_some_and(|hours| hours.contains(time))
    }

    /// Iterate over the week from Monday, paired with each day's window.
    pub fn iter(&self) -> impl Iterator<Item = (Weekday, Option<OpeningHours>)> + '_ {
        std::iter::successors(Some(Weekday::Mon), |day| {
            (*day != Weekday::Sun).then(|| day.succ())
        })
        .map(|day| (day, self.hours_on(day)))
    }
}

#[cfg(feature = "serde")]
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
#[serde(default)]
struct ScheduleRepr {
    mon: Option<OpeningHours>,
    tue: Option<OpeningHours>,
    wed: Option<OpeningHours>,
    thu: Option<OpeningHours>,
    fri: Option<OpeningHours>,
    sat: Option<OpeningHours>,
    sun: Option<OpeningHours>,
}

#[cfg(feature = "serde")]
impl From<ScheduleRepr> for WeeklySchedule {
    fn from(repr: ScheduleRepr) -> Self {
        Self {
            days: [
                repr.mon, repr.tue, repr.wed, repr.thu, repr.fri, repr.sat, repr.sun,
            ],
        }
    }
}

#[cfg(feature = "serde")]
impl From<WeeklySchedule> for ScheduleRepr {
    fn from(schedule: WeeklySchedule) -> Self {
        let [mon, tue, wed, thu, fri, sat, sun] = schedule.days;
        Self {
            mon,
            tue,
            wed,
            thu,
            fri,
            sat,
            sun,
        }
    }
}
