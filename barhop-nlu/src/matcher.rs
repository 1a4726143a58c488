//! Fuzzy venue-name matching against a catalog.

use std::sync::LazyLock;

use barhop_core::{StaticCatalog, VenueCatalog};
use log::debug;

use crate::aliases::ALIASES;
use crate::similarity::similarity;

/// Minimum score for [`VenueMatcher::best`] in request parsing.
pub const MATCH_THRESHOLD: f64 = 0.7;
/// Score a fuzzy hit must exceed to count as a venue mention in free text.
pub const MENTION_THRESHOLD: f64 = 0.75;
/// Floor applied when the query and a venue name contain one another.
pub const CONTAINMENT_SCORE: f64 = 0.85;
/// Shortest single word considered for a fuzzy mention.
const MIN_WORD_CHARS: usize = 3;

static BUILTIN: LazyLock<VenueMatcher> =
    LazyLock::new(|| VenueMatcher::new(StaticCatalog::builtin()));

/// A venue and how well it matched a query.
#[derive(Debug, Clone, PartialEq)]
pub struct Candidate {
    /// Catalog name of the venue.
    pub venue: String,
    /// Match score in `[0, 1]`; 1.0 for an exact alias.
    pub score: f64,
}

/// Matches loosely spelled venue names to catalog entries.
///
/// # Examples
/// ```
/// use barhop_nlu::{MATCH_THRESHOLD, VenueMatcher};
///
/// let matcher = VenueMatcher::builtin();
/// let hit = matcher.best("cricketts", MATCH_THRESHOLD).map(|c| c.venue);
/// assert_eq!(hit.as_deref(), Some("Cricket's"));
/// ```
#[derive(Debug, Clone)]
pub struct VenueMatcher {
    venues: Vec<String>,
    aliases: Vec<(&'static str, &'static str)>,
}

impl VenueMatcher {
    /// Build a matcher over `catalog`, keeping only aliases of venues the
    /// catalog knows.
    #[must_use]
    pub fn new<C>(catalog: &C) -> Self
    where
        C: VenueCatalog + ?Sized,
    {
        let aliases = ALIASES
            .iter()
            .copied()
            .filter(|(_, venue)| catalog.contains(venue))
            .collect();
        Self {
            venues: catalog.all().iter().map(|venue| venue.name.clone()).collect(),
            aliases,
        }
    }

    /// Matcher over the built-in roster.
    #[must_use]
    pub fn builtin() -> &'static Self {
        &BUILTIN
    }

    fn alias_target(&self, needle: &str) -> Option<&'static str> {
        self.aliases
            .iter()
            .find(|(alias, _)| *alias == needle)
            .map(|(_, venue)| *venue)
    }

    /// Score every venue against `query`, best first.
    ///
    /// Ties keep catalog order. A blank query matches nothing.
    #[must_use]
    pub fn rank(&self, query: &str) -> Vec<Candidate> {
        let needle = query.trim().to_lowercase();
        if needle.is_empty() {
            return Vec::new();
        }
        let alias = self.alias_target(&needle);
        let mut ranked: Vec<Candidate> = self
            .venues
            .iter()
            .map(|venue| Candidate {
                venue: venue.clone(),
                score: if alias == Some(venue.as_str()) {
                    1.0
                } else {
                    fuzzy_score(&needle, venue)
                },
            })
            .collect();
        ranked.sort_by(|left, right| right.score.total_cmp(&left.score));
        ranked
    }

    /// The top-ranked venue, if it scores at least `threshold`.
    #[must_use]
    pub fn best(&self, query: &str, threshold: f64) -> Option<Candidate> {
        self.rank(query)
            .into_iter()
            .next()
            .filter(|candidate| candidate.score >= threshold)
    }

    /// Venues mentioned in `text`, in discovery order.
    ///
    /// Aliases found as whole phrases come first, in alias-table order. Single
    /// words of three or more characters and then adjacent word pairs are
    /// matched fuzzily after that.
    #[must_use]
    pub fn extract_venues(&self, text: &str) -> Vec<String> {
        let lowered = text.to_lowercase();
        let mut found: Vec<String> = Vec::new();
        for (alias, venue) in &self.aliases {
            if contains_phrase(&lowered, alias) && !found.iter().any(|name| name == venue) {
                found.push((*venue).to_owned());
            }
        }

        let words = words(text);
        let singles = words
            .iter()
            .filter(|word| word.chars().count() >= MIN_WORD_CHARS)
            .cloned();
        let pairs = words.windows(2).filter_map(|pair| match pair {
            [first, second] => Some(format!("{first} {second}")),
            _ => None,
        });
        for phrase in singles.chain(pairs) {
            let mention = self
                .best(&phrase, MATCH_THRESHOLD)
                .filter(|candidate| candidate.score > MENTION_THRESHOLD);
            if let Some(candidate) = mention {
                if !found.contains(&candidate.venue) {
                    debug!(
                        "matched {phrase:?} to {} (score {:.2})",
                        candidate.venue, candidate.score
                    );
                    found.push(candidate.venue);
                }
            }
        }
        found
    }
}

fn fuzzy_score(needle: &str, venue: &str) -> f64 {
    let name = venue.to_lowercase();
    let score = similarity(needle, &name);
    if name.contains(needle) || needle.contains(name.as_str()) {
        score.max(CONTAINMENT_SCORE)
    } else {
        score
    }
}

/// Whether `phrase` occurs in `text` bounded by non-alphanumeric characters.
fn contains_phrase(text: &str, phrase: &str) -> bool {
    text.match_indices(phrase).any(|(start, matched)| {
        let before = text.get(..start).and_then(|head| head.chars().next_back());
        let after = text
            .get(start + matched.len()..)
            .and_then(|tail| tail.chars().next());
        !before.is_some_and(char::is_alphanumeric) && !after.is_some_and(char::is_alphanumeric)
    })
}

/// Word-like runs (letters, digits, underscores, inner apostrophes).
fn words(text: &str) -> Vec<String> {
    text.split(|c: char| !(c.is_alphanumeric() || c == '_' || c == '\''))
        .map(|word| word.trim_matches('\''))
        .filter(|word| !word.is_empty())
        .map(str::to_owned)
        .collect()
}
