//! Whole-message parsing into a plan request.

use barhop_core::PlanRequest;
use chrono::Weekday;
use log::debug;

use crate::extract::{detect_event_day, extract_group_size, extract_start_hour};
use crate::matcher::VenueMatcher;

/// Everything read from a free-text request.
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedRequest {
    /// Venues mentioned, in discovery order.
    pub venues: Vec<String>,
    /// Start of the evening in decimal hours.
    pub start_hour: f64,
    /// Group size in `1..=20`.
    pub group_size: u8,
    /// Whether the text mentions a game day.
    pub is_event_day: bool,
}

impl ParsedRequest {
    /// Whether any venue was recognised.
    #[must_use]
    pub fn is_understood(&self) -> bool {
        !self.venues.is_empty()
    }

    /// Turn the parsed fields into a request for `weekday`.
    #[must_use]
    pub fn into_plan_request(self, weekday: Weekday) -> PlanRequest {
        PlanRequest::new(self.venues, weekday)
            .with_start_hour(self.start_hour)
            .with_group_size(self.group_size)
            .with_event_day(self.is_event_day)
    }
}

impl VenueMatcher {
    /// Parse `text` against this matcher's catalog.
    #[must_use]
    pub fn parse(&self, text: &str) -> ParsedRequest {
        let parsed = ParsedRequest {
            venues: self.extract_venues(text),
            start_hour: extract_start_hour(text),
            group_size: extract_group_size(text),
            is_event_day: detect_event_day(text),
        };
        debug!(
            "parsed {} venue(s), start {}, group {}, event {}",
            parsed.venues.len(),
            parsed.start_hour,
            parsed.group_size,
            parsed.is_event_day
        );
        parsed
    }
}

/// Parse `text` against the built-in roster.
///
/// # Examples
/// ```
/// use barhop_nlu::parse_request;
///
/// let parsed = parse_request("Chimy's and crickets at 9pm, me and 3 friends, game day");
/// assert_eq!(parsed.venues, ["Chimy's", "Cricket's"]);
/// assert_eq!(parsed.start_hour, 21.0);
/// assert_eq!(parsed.group_size, 4);
/// assert!(parsed.is_event_day);
/// ```
#[must_use]
pub fn parse_request(text: &str) -> ParsedRequest {
    VenueMatcher::builtin().parse(text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use barhop_core::DEFAULT_START_HOUR;
    use rstest::rstest;

    #[rstest]
    fn blank_text_yields_defaults() {
        let parsed = parse_request("   ");
        assert!(!parsed.is_understood());
        assert_eq!(parsed.group_size, 2);
        assert!(!parsed.is_event_day);
        assert!(parsed.start_hour.total_cmp(&DEFAULT_START_HOUR).is_eq());
    }

    #[rstest]
    fn converts_into_plan_request() {
        let request = parse_request("party of 6 at logies and atomic around 11")
            .into_plan_request(Weekday::Sat);
        assert_eq!(request.venues, ["Logie's", "Atomic"]);
        assert_eq!(request.group_size, 6);
        assert_eq!(request.weekday, Weekday::Sat);
        assert!(request.start_hour.total_cmp(&23.0).is_eq());
        assert!(!request.is_event_day);
    }
}
