//! Venue lookup.
//!
//! [`VenueCatalog`] is the read-only seam the simulator and matcher consume.
//! [`StaticCatalog`] keeps venues in insertion order with a name index and
//! ships the built-in roster through [`StaticCatalog::builtin`].

use std::collections::HashMap;
use std::sync::LazyLock;

use thiserror::Error;

use crate::{Venue, VenueError};

mod roster;

/// Read access to a set of venues.
///
/// Implementations must be `Send + Sync` so planners can share them across
/// threads without locking.
pub trait VenueCatalog: Send + Sync {
    /// Every venue, in a stable order.
    fn all(&self) -> &[Venue];

    /// Find a venue by exact name.
    fn lookup(&self, name: &str) -> Option<&Venue> {
        self.all().iter().find(|venue| venue.name == name)
    }

    /// Report whether `name` is a known venue.
    fn contains(&self, name: &str) -> bool {
        self.lookup(name).is_some()
    }
}

impl<T: VenueCatalog + ?Sized> VenueCatalog for &T {
    fn all(&self) -> &[Venue] {
        (**self).all()
    }

    fn lookup(&self, name: &str) -> Option<&Venue> {
        (**self).lookup(name)
    }
}

/// Errors raised while building a [`StaticCatalog`].
#[derive(Debug, Error)]
pub enum CatalogError {
    /// Two venues shared a name.
    #[error("duplicate venue: {name}")]
    DuplicateVenue {
        /// The repeated name.
        name: String,
    },
    /// A venue failed validation.
    #[error("invalid venue {name:?}")]
    InvalidVenue {
        /// Name of the rejected venue.
        name: String,
        /// What was wrong with it.
        #[source]
        source: VenueError,
    },
    /// The catalog document could not be decoded.
    #[cfg(feature = "serde")]
    #[error("failed to parse catalog")]
    Parse(#[from] serde_json::Error),
}

/// An in-memory catalog.
///
/// # Examples
/// ```
/// use barhop_core::{StaticCatalog, VenueCatalog};
///
/// let catalog = StaticCatalog::builtin();
/// assert_eq!(catalog.len(), 10);
/// assert!(catalog.contains("Chimy's"));
/// assert!(catalog.lookup("Nowhere").is_none());
/// ```
#[derive(Debug, Clone, Default)]
pub struct StaticCatalog {
    venues: Vec<Venue>,
    index: HashMap<String, usize>,
}

static BUILTIN: LazyLock<StaticCatalog> =
    LazyLock::new(|| StaticCatalog::from_trusted(roster::venues()));

impl StaticCatalog {
    /// Build a catalog, validating every venue and rejecting duplicates.
    ///
    /// # Errors
    /// Returns [`CatalogError::InvalidVenue`] for the first invalid record
    /// and [`CatalogError::DuplicateVenue`] for the first repeated name.
    pub fn new(venues: Vec<Venue>) -> Result<Self, CatalogError> {
        let mut index = HashMap::with_capacity(venues.len());
        for (position, venue) in venues.iter().enumerate() {
            venue
                .validate()
                .map_err(|source| CatalogError::InvalidVenue {
                    name: venue.name.clone(),
                    source,
                })?;
            if index.insert(venue.name.clone(), position).is_some() {
                return Err(CatalogError::DuplicateVenue {
                    name: venue.name.clone(),
                });
            }
        }
        Ok(Self { venues, index })
    }

    /// The built-in ten-venue roster, initialised on first use.
    #[must_use]
    pub fn builtin() -> &'static Self {
        &BUILTIN
    }

    /// Decode a JSON array of venues and validate it.
    ///
    /// # Errors
    /// Returns [`CatalogError::Parse`] for malformed JSON, otherwise the
    /// errors of [`StaticCatalog::new`].
    #[cfg(feature = "serde")]
    pub fn from_json_reader<R: std::io::Read>(reader: R) -> Result<Self, CatalogError> {
        let venues: Vec<Venue> = serde_json::from_reader(reader)?;
        Self::new(venues)
    }

    /// Number of venues.
    #[must_use]
    pub fn len(&self) -> usize {
        self.venues.len()
    }

    /// Report whether the catalog holds no venues.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.venues.is_empty()
    }

    /// Index a roster known to be valid.
    fn from_trusted(venues: Vec<Venue>) -> Self {
        let index = venues
            .iter()
            .enumerate()
            .map(|(position, venue)| (venue.name.clone(), position))
            .collect();
        Self { venues, index }
    }
}

impl VenueCatalog for StaticCatalog {
    fn all(&self) -> &[Venue] {
        &self.venues
    }

    fn lookup(&self, name: &str) -> Option<&Venue> {
        self.index
            .get(name)
            .and_then(|position| self.venues.get(*position))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{OpeningHours, WeeklySchedule};
    use rstest::rstest;

    fn venue(name: &str) -> Venue {
        Venue::new(
            name,
            50,
            3,
            5,
            WeeklySchedule::every_day(OpeningHours::from_hours(18, 2)),
        )
    }

    #[rstest]
    fn builtin_roster_passes_validation() {
        let roster = roster::venues();
        let catalog = StaticCatalog::new(roster).expect("built-in roster is valid");
        assert_eq!(catalog.len(), StaticCatalog::builtin().len());
    }

    #[rstest]
    fn keeps_insertion_order() {
        let catalog = StaticCatalog::new(vec![venue("B"), venue("A")]).expect("valid catalog");
        let names: Vec<_> = catalog.all().iter().map(|v| v.name.as_str()).collect();
        assert_eq!(names, ["B", "A"]);
        assert_eq!(catalog.lookup("A").map(|v| v.name.as_str()), Some("A"));
    }

    #[rstest]
    fn rejects_duplicates() {
        let err = StaticCatalog::new(vec![venue("A"), venue("A")]).expect_err("duplicate");
        assert!(matches!(err, CatalogError::DuplicateVenue { ref name } if name == "A"));
    }

    #[rstest]
    fn rejects_invalid_venue() {
        let mut bad = venue("Broken");
        bad.popularity = 9;
        let err = StaticCatalog::new(vec![bad]).expect_err("invalid popularity");
        assert!(matches!(
            err,
            CatalogError::InvalidVenue {
                source: VenueError::PopularityOutOfRange { popularity: 9 },
                ..
            }
        ));
    }

    #[rstest]
    fn borrowed_catalog_delegates() {
        let catalog = StaticCatalog::builtin();
        let borrowed: &dyn VenueCatalog = &catalog;
        assert!(borrowed.contains("Wrecked"));
    }
}
