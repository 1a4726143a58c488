//! Start time, group size and event extraction from free text.
//!
//! Each extractor tries its patterns in a fixed order and falls back to the
//! request default when nothing matches.

use barhop_core::{
    ClockTime, DEFAULT_GROUP_SIZE, DEFAULT_START_HOUR, MAX_GROUP_SIZE, MIN_GROUP_SIZE,
};

use crate::lexer::{Token, tokenize};

/// Phrases that mark an event day.
pub const EVENT_KEYWORDS: [&str; 8] = [
    "game day",
    "gameday",
    "game night",
    "football",
    "basketball",
    "tech game",
    "red raiders",
    "raiders game",
];

/// Words after which a bare number reads as an hour.
const TIME_PREPOSITIONS: [&str; 3] = ["at", "around", "like"];

/// Earliest start that is left untouched.
const EARLIEST_START: ClockTime = ClockTime::from_hm(17, 0);
const NOON: ClockTime = ClockTime::from_hm(12, 0);
const HALF_DAY_MINUTES: u32 = 12 * 60;

/// Every suffix of `tokens`, longest first.
fn suffixes(tokens: &[Token]) -> impl Iterator<Item = &[Token]> {
    (0..tokens.len()).filter_map(|start| tokens.get(start..))
}

/// Read `hour[:minutes] am|pm` as a 24-hour time.
fn clock_12h(hour: u32, minutes: u32, meridiem: &str) -> Option<ClockTime> {
    if !(1..=12).contains(&hour) || minutes >= 60 {
        return None;
    }
    let hour_of_day = match (meridiem, hour) {
        ("am", 12) => 0,
        ("am", _) | ("pm", 12) => hour,
        ("pm", _) => hour + 12,
        _ => return None,
    };
    Some(ClockTime::from_hm(hour_of_day, minutes))
}

/// Read a bare hour, treating 1 to 11 as evening hours.
fn evening_hour(hour: u32, minutes: u32) -> Option<ClockTime> {
    if hour > 23 || minutes >= 60 {
        return None;
    }
    let hour_of_day = if (1..=11).contains(&hour) { hour + 12 } else { hour };
    Some(ClockTime::from_hm(hour_of_day, minutes))
}

fn meridiem_time(tokens: &[Token]) -> Option<ClockTime> {
    suffixes(tokens).find_map(|rest| match rest {
        [hour, Token::Colon, minutes, meridiem, ..] => clock_12h(
            hour.short_number()?,
            minutes.two_digits()?,
            meridiem.word()?,
        ),
        [hour, meridiem, ..] => clock_12h(hour.short_number()?, 0, meridiem.word()?),
        _ => None,
    })
}

fn is_time_preposition(token: &Token) -> bool {
    matches!(token, Token::At)
        || token
            .word()
            .is_some_and(|word| TIME_PREPOSITIONS.contains(&word))
}

fn prepositional_time(tokens: &[Token]) -> Option<ClockTime> {
    suffixes(tokens).find_map(|rest| match rest {
        [marker, hour, Token::Colon, minutes, ..] if is_time_preposition(marker) => {
            evening_hour(hour.short_number()?, minutes.two_digits()?)
        }
        [marker, hour, ..] if is_time_preposition(marker) => {
            evening_hour(hour.short_number()?, 0)
        }
        _ => None,
    })
}

fn mentions_evening(tokens: &[Token]) -> bool {
    tokens.iter().filter_map(Token::word).any(|word| {
        word.contains("night") || word.contains("evening") || word.contains("pm")
    })
}

fn bare_evening_hour(tokens: &[Token]) -> Option<ClockTime> {
    if !mentions_evening(tokens) {
        return None;
    }
    tokens
        .iter()
        .find_map(Token::short_number)
        .and_then(|hour| evening_hour(hour, 0))
}

/// Move starts before 17:00 into the evening: morning hours gain twelve,
/// afternoon hours fall back to the default start.
fn into_evening(time: ClockTime) -> ClockTime {
    if time >= EARLIEST_START {
        time
    } else if time < NOON {
        time.add_minutes(HALF_DAY_MINUTES)
    } else {
        ClockTime::from_hours(DEFAULT_START_HOUR)
    }
}

/// Extract the start of the evening in decimal hours.
///
/// Tries `9pm`/`9:30 pm`/`12am`, then `at|around|like|@ 9[:30]`, then a bare
/// number when the text mentions the night or evening. Anything before 17:00
/// is moved into the evening.
///
/// # Examples
/// ```
/// use barhop_nlu::extract_start_hour;
///
/// assert_eq!(extract_start_hour("drinks at 9:30 pm"), 21.5);
/// assert_eq!(extract_start_hour("around 10"), 22.0);
/// assert_eq!(extract_start_hour("whenever"), 21.0);
/// ```
#[must_use]
pub fn extract_start_hour(text: &str) -> f64 {
    let tokens = tokenize(text);
    meridiem_time(&tokens)
        .or_else(|| prepositional_time(&tokens))
        .or_else(|| bare_evening_hour(&tokens))
        .map_or(DEFAULT_START_HOUR, |time| into_evening(time).as_hours())
}

fn companions(tokens: &[Token]) -> Option<u32> {
    suffixes(tokens).find_map(|rest| match rest {
        [me, and, Token::Number { value, .. }, ..] if me.is_word("me") && and.is_word("and") => {
            Some(value.saturating_add(1))
        }
        _ => None,
    })
}

fn group_of(tokens: &[Token]) -> Option<u32> {
    suffixes(tokens).find_map(|rest| match rest {
        [noun, of, Token::Number { value, .. }, ..]
            if (noun.is_word("group") || noun.is_word("party")) && of.is_word("of") =>
        {
            Some(*value)
        }
        _ => None,
    })
}

fn headcount(tokens: &[Token]) -> Option<u32> {
    suffixes(tokens).find_map(|rest| match rest {
        [Token::Number { value, .. }, of, us, ..] if of.is_word("of") && us.is_word("us") => {
            Some(*value)
        }
        [Token::Number { value, .. }, noun, ..]
            if noun.is_word("people") || noun.is_word("friends") =>
        {
            Some(*value)
        }
        _ => None,
    })
}

/// Extract the group size, clamped to the supported range.
///
/// `me and 3` counts the speaker; `group of 5`, `party of 5`, `5 people`,
/// `5 friends` and `5 of us` are taken as given.
///
/// # Examples
/// ```
/// use barhop_nlu::extract_group_size;
///
/// assert_eq!(extract_group_size("me and 3 friends"), 4);
/// assert_eq!(extract_group_size("party of 40"), 20);
/// assert_eq!(extract_group_size("just us"), 2);
/// ```
#[must_use]
pub fn extract_group_size(text: &str) -> u8 {
    let tokens = tokenize(text);
    companions(&tokens)
        .or_else(|| group_of(&tokens))
        .or_else(|| headcount(&tokens))
        .map_or(DEFAULT_GROUP_SIZE, |size| {
            let clamped = size.clamp(u32::from(MIN_GROUP_SIZE), u32::from(MAX_GROUP_SIZE));
            u8::try_from(clamped).unwrap_or(MAX_GROUP_SIZE)
        })
}

/// Whether the text mentions a game or other crowd-drawing event.
#[must_use]
pub fn detect_event_day(text: &str) -> bool {
    let lowered = text.to_lowercase();
    EVENT_KEYWORDS
        .iter()
        .any(|keyword| lowered.contains(keyword))
}
