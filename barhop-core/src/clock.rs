//! Wall-clock times measured in minutes after the evening's midnight.
//!
//! An evening out routinely runs past midnight, so a [`ClockTime`] may
//! exceed 24 hours: `25:30` is half past one on the following morning.
//! [`Display`](fmt::Display) wraps into the 24-hour day, which is the format
//! shown to people; serialisation keeps the unwrapped value so nothing is
//! lost on a round trip.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Minutes in one hour.
pub const MINUTES_PER_HOUR: u32 = 60;

/// Minutes in one day.
pub const MINUTES_PER_DAY: u32 = 24 * MINUTES_PER_HOUR;

/// A time of day with minute resolution.
///
/// # Examples
/// ```
/// use barhop_core::ClockTime;
///
/// let arrival = ClockTime::from_hours(21.0);
/// let departure = arrival.add_minutes(81);
/// assert_eq!(departure.to_string(), "22:21");
/// assert_eq!(ClockTime::from_hm(25, 30).to_string(), "01:30");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "String", into = "String")
)]
pub struct ClockTime(u32);

impl ClockTime {
    /// The start of the evening's day.
    pub const MIDNIGHT: Self = Self(0);

    /// Construct a time from minutes after midnight.
    #[must_use]
    pub const fn from_minutes(minutes: u32) -> Self {
        Self(minutes)
    }

    /// Construct a time from whole hours and minutes.
    ///
    /// Hours beyond 23 describe the following morning.
    #[must_use]
    pub const fn from_hm(hours: u32, minutes: u32) -> Self {
        Self(hours.saturating_mul(MINUTES_PER_HOUR).saturating_add(minutes))
    }

    /// Convert a decimal hour (`21.5` is half past nine) to the nearest
    /// minute.
    ///
    /// Negative and non-finite inputs collapse to [`ClockTime::MIDNIGHT`].
    #[expect(
        clippy::float_arithmetic,
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss,
        reason = "decimal hours are rounded to whole minutes after range checks"
    )]
    #[must_use]
    pub fn from_hours(hours: f64) -> Self {
        if !hours.is_finite() || hours <= 0.0 {
            return Self::MIDNIGHT;
        }
        let minutes = (hours * f64::from(MINUTES_PER_HOUR)).round();
        if minutes >= f64::from(u32::MAX) {
            return Self(u32::MAX);
        }
        Self(minutes as u32)
    }

    /// Minutes after midnight, unwrapped.
    #[must_use]
    pub const fn minutes(self) -> u32 {
        self.0
    }

    /// Decimal hours after midnight, unwrapped.
    #[expect(
        clippy::float_arithmetic,
        reason = "decimal hours are a boundary format"
    )]
    #[must_use]
    pub fn as_hours(self) -> f64 {
        f64::from(self.0) / f64::from(MINUTES_PER_HOUR)
    }

    /// Fold the time into the 24-hour day.
    #[expect(
        clippy::integer_division_remainder_used,
        reason = "wrapping into the day is a modulo by definition"
    )]
    #[must_use]
    pub const fn wrapped(self) -> Self {
        Self(self.0 % MINUTES_PER_DAY)
    }

    /// The hour of the (wrapped) day, `0..=23`.
    #[expect(
        clippy::integer_division,
        reason = "whole hours are the intended truncation"
    )]
    #[must_use]
    pub const fn hour_of_day(self) -> u32 {
        self.wrapped().0 / MINUTES_PER_HOUR
    }

    /// The minute within the hour, `0..=59`.
    #[expect(
        clippy::integer_division_remainder_used,
        reason = "minute-of-hour is a modulo by definition"
    )]
    #[must_use]
    pub const fn minute_of_hour(self) -> u32 {
        self.0 % MINUTES_PER_HOUR
    }

    /// Advance the time by `minutes`, saturating at the representable
    /// maximum.
    #[must_use]
    pub const fn add_minutes(self, minutes: u32) -> Self {
        Self(self.0.saturating_add(minutes))
    }

    /// Minutes elapsed since `earlier`; zero when `earlier` is later.
    #[must_use]
    pub const fn minutes_since(self, earlier: Self) -> u32 {
        self.0.saturating_sub(earlier.0)
    }

    /// Format as a 12-hour clock, e.g. `9:05 PM`.
    #[expect(
        clippy::integer_division_remainder_used,
        reason = "12-hour display folds the hour modulo 12"
    )]
    #[must_use]
    pub fn to_12h_string(self) -> String {
        let hour = self.hour_of_day();
        let period = if hour >= 12 { "PM" } else { "AM" };
        let display_hour = match hour % 12 {
            0 => 12,
            other => other,
        };
        format!("{display_hour}:{:02} {period}", self.minute_of_hour())
    }

    #[expect(
        clippy::integer_division,
        reason = "whole hours are the intended truncation"
    )]
    const fn unwrapped_hours(self) -> u32 {
        self.0 / MINUTES_PER_HOUR
    }
}

impl fmt::Display for ClockTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour_of_day(), self.minute_of_hour())
    }
}

/// Errors from parsing a [`ClockTime`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClockTimeParseError {
    /// The text was not of the form `HH:MM`.
    #[error("expected HH:MM, found {0:?}")]
    Format(String),
    /// The minute component was 60 or more.
    #[error("minutes must be below 60 in {0:?}")]
    MinutesOutOfRange(String),
}

impl FromStr for ClockTime {
    type Err = ClockTimeParseError;

    /// Parse `HH:MM`; hours above 23 are accepted and mean the next morning.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let (hours, minutes) = trimmed
            .split_once(':')
            .ok_or_else(|| ClockTimeParseError::Format(trimmed.to_owned()))?;
        let parse = |part: &str| {
            if part.is_empty() || part.len() > 2 || !part.bytes().all(|b| b.is_ascii_digit()) {
                return Err(ClockTimeParseError::Format(trimmed.to_owned()));
            }
            part.parse::<u32>()
                .map_err(|_| ClockTimeParseError::Format(trimmed.to_owned()))
        };
        let hours_value = parse(hours)?;
        let minutes_value = parse(minutes)?;
        if minutes_value >= MINUTES_PER_HOUR {
            return Err(ClockTimeParseError::MinutesOutOfRange(trimmed.to_owned()));
        }
        Ok(Self::from_hm(hours_value, minutes_value))
    }
}

impl TryFrom<String> for ClockTime {
    type Error = ClockTimeParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<ClockTime> for String {
    fn from(time: ClockTime) -> Self {
        format!("{:02}:{:02}", time.unwrapped_hours(), time.minute_of_hour())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(21.0, 1260)]
    #[case(22.35, 1341)]
    #[case(21.5, 1290)]
    #[case(-3.0, 0)]
    #[case(f64::NAN, 0)]
    fn converts_decimal_hours_to_minutes(#[case] hours: f64, #[case] minutes: u32) {
        assert_eq!(ClockTime::from_hours(hours).minutes(), minutes);
    }

    #[rstest]
    #[case(ClockTime::from_hm(22, 21), "22:21")]
    #[case(ClockTime::from_hm(24, 0), "00:00")]
    #[case(ClockTime::from_hm(25, 7), "01:07")]
    fn display_wraps_into_the_day(#[case] time: ClockTime, #[case] expected: &str) {
        assert_eq!(time.to_string(), expected);
    }

    #[rstest]
    #[case(ClockTime::from_hm(21, 5), "9:05 PM")]
    #[case(ClockTime::from_hm(24, 30), "12:30 AM")]
    #[case(ClockTime::from_hm(12, 0), "12:00 PM")]
    fn formats_twelve_hour_clock(#[case] time: ClockTime, #[case] expected: &str) {
        assert_eq!(time.to_12h_string(), expected);
    }

    #[rstest]
    fn string_form_keeps_hours_past_midnight() {
        let time = ClockTime::from_hm(26, 0);
        let text = String::from(time);
        assert_eq!(text, "26:00");
        assert_eq!(text.parse::<ClockTime>(), Ok(time));
    }

    #[rstest]
    #[case("9pm")]
    #[case("21:60")]
    #[case("21:")]
    #[case("123:00")]
    fn rejects_malformed_times(#[case] text: &str) {
        assert!(text.parse::<ClockTime>().is_err());
    }

    #[rstest]
    fn minutes_since_saturates() {
        let early = ClockTime::from_hm(20, 0);
        let late = ClockTime::from_hm(21, 7);
        assert_eq!(late.minutes_since(early), 67);
        assert_eq!(early.minutes_since(late), 0);
    }
}
