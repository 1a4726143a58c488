//! Free-text request parsing for the barhop planner.
//!
//! [`parse_request`] reads a message such as "chimys and crickets at 9pm,
//! me and 3 friends" into venues, a start hour, a group size and an event
//! flag. Venue names go through a [`VenueMatcher`]: an alias table first,
//! then edit-distance [`similarity`] against catalog names.

#![forbid(unsafe_code)]

mod aliases;
mod extract;
mod lexer;
mod matcher;
mod request;
mod similarity;

pub use aliases::{ALIASES, resolve_alias};
pub use extract::{EVENT_KEYWORDS, detect_event_day, extract_group_size, extract_start_hour};
pub use matcher::{CONTAINMENT_SCORE, Candidate, MATCH_THRESHOLD, MENTION_THRESHOLD, VenueMatcher};
pub use request::{ParsedRequest, parse_request};
pub use similarity::{levenshtein, similarity};

/// Venues mentioned in `text`, matched against the built-in roster.
#[must_use]
pub fn extract_venues(text: &str) -> Vec<String> {
    VenueMatcher::builtin().extract_venues(text)
}
