//! Expected door wait at a venue.
//!
//! The wait is the venue's base wait scaled by four factors: the hour of
//! arrival, the venue's popularity tier, the size of the group and whether
//! it is an event day. The product is rounded half away from zero and never
//! drops below one minute.

use barhop_core::{ClockTime, NEUTRAL_POPULARITY, Venue};

/// Multipliers for the busiest hours of the evening.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HourlyTiers {
    /// Arrivals from 20:00 to 20:59.
    pub early_evening: f64,
    /// Arrivals from 21:00 to 21:59.
    pub peak: f64,
    /// Arrivals from 22:00 to 23:59.
    pub late: f64,
}

impl Default for HourlyTiers {
    fn default() -> Self {
        Self {
            early_evening: 1.1,
            peak: 1.2,
            late: 1.4,
        }
    }
}

impl HourlyTiers {
    /// The multiplier for an arrival at `time`, judged on the wrapped hour.
    ///
    /// Hours outside 20:00–23:59, including those after midnight, are
    /// unscaled.
    #[must_use]
    pub const fn multiplier(&self, time: ClockTime) -> f64 {
        match time.hour_of_day() {
            22.. => self.late,
            21 => self.peak,
            20 => self.early_evening,
            _ => 1.0,
        }
    }
}

/// Parameters of the wait estimate.
///
/// # Examples
/// ```
/// use barhop_core::{ClockTime, OpeningHours, Venue, WeeklySchedule};
/// use barhop_solver::WaitModel;
///
/// let chimys = Venue::new(
///     "Chimy's",
///     200,
///     5,
///     15,
///     WeeklySchedule::every_day(OpeningHours::from_hours(17, 2)),
/// );
/// let model = WaitModel::default();
/// assert_eq!(model.wait_minutes(Some(&chimys), ClockTime::from_hm(21, 0), 2, false), 21);
/// assert_eq!(model.wait_minutes(None, ClockTime::from_hm(21, 0), 2, false), 10);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WaitModel {
    /// Time-of-day multipliers.
    pub hourly: HourlyTiers,
    /// Change in wait per popularity tier away from the neutral tier.
    pub popularity_step: f64,
    /// Group size at and below which the group adds no wait.
    pub baseline_group_size: u8,
    /// Added wait per person above the baseline group.
    pub group_step: f64,
    /// Multiplier applied on event days.
    pub event_multiplier: f64,
    /// Wait assumed for a venue missing from the catalog.
    pub unknown_venue_minutes: u32,
}

impl Default for WaitModel {
    fn default() -> Self {
        Self {
            hourly: HourlyTiers::default(),
            popularity_step: 0.08,
            baseline_group_size: 2,
            group_step: 0.05,
            event_multiplier: 1.5,
            unknown_venue_minutes: 10,
        }
    }
}

impl WaitModel {
    /// Expected wait in whole minutes for arriving at `venue` at `arrival`.
    ///
    /// `None` stands for a venue the catalog does not know and yields
    /// [`WaitModel::unknown_venue_minutes`].
    #[must_use]
    pub fn wait_minutes(
        &self,
        venue: Option<&Venue>,
        arrival: ClockTime,
        group_size: u8,
        is_event_day: bool,
    ) -> u32 {
        let Some(venue) = venue else {
            return self.unknown_venue_minutes;
        };
        let factors = [
            self.hourly.multiplier(arrival),
            self.popularity_factor(venue.popularity),
            self.group_factor(group_size),
            if is_event_day {
                self.event_multiplier
            } else {
                1.0
            },
        ];
        whole_minutes(factors.iter().fold(f64::from(venue.base_wait_minutes), |wait, factor| {
            scale(wait, *factor)
        }))
    }

    #[expect(
        clippy::float_arithmetic,
        reason = "popularity scales the wait linearly"
    )]
    fn popularity_factor(&self, popularity: u8) -> f64 {
        let offset = f64::from(popularity) - f64::from(NEUTRAL_POPULARITY);
        offset.mul_add(self.popularity_step, 1.0)
    }

    fn group_factor(&self, group_size: u8) -> f64 {
        let extra = group_size.saturating_sub(self.baseline_group_size);
        f64::from(extra).mul_add(self.group_step, 1.0)
    }
}

#[expect(clippy::float_arithmetic, reason = "wait factors are multiplicative")]
fn scale(wait: f64, factor: f64) -> f64 {
    wait * factor
}

#[expect(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    reason = "the rounded value is range-checked before the cast"
)]
fn whole_minutes(wait: f64) -> u32 {
    let rounded = wait.round();
    if !rounded.is_finite() || rounded < 1.0 {
        1
    } else if rounded >= f64::from(u32::MAX) {
        u32::MAX
    } else {
        rounded as u32
    }
}
