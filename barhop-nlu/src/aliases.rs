//! Spellings people use for the built-in venues.
//!
//! Keys are lower case. Order matters: text is scanned alias by alias, so
//! venues are reported in the order their first alias appears here.

/// `(alias, venue)` pairs.
pub const ALIASES: &[(&str, &str)] = &[
    ("chimy's", "Chimy's"),
    ("chimys", "Chimy's"),
    ("chimmys", "Chimy's"),
    ("chimmy's", "Chimy's"),
    ("chimmies", "Chimy's"),
    ("chimies", "Chimy's"),
    ("chimi's", "Chimy's"),
    ("chimis", "Chimy's"),
    ("cricket's", "Cricket's"),
    ("crickets", "Cricket's"),
    ("cricketts", "Cricket's"),
    ("crikets", "Cricket's"),
    ("criket's", "Cricket's"),
    ("bier haus", "Bier Haus"),
    ("bierhaus", "Bier Haus"),
    ("beer haus", "Bier Haus"),
    ("beerhaus", "Bier Haus"),
    ("bier house", "Bier Haus"),
    ("beer house", "Bier Haus"),
    ("logie's", "Logie's"),
    ("logies", "Logie's"),
    ("logeys", "Logie's"),
    ("logi's", "Logie's"),
    ("logis", "Logie's"),
    ("atomic", "Atomic"),
    ("atomics", "Atomic"),
    ("atomic's", "Atomic"),
    ("bar pm", "Bar PM"),
    ("barpm", "Bar PM"),
    ("bar p.m.", "Bar PM"),
    ("pm bar", "Bar PM"),
    ("wrecked", "Wrecked"),
    ("wreckd", "Wrecked"),
    ("rekt", "Wrecked"),
    ("miguel's", "Miguel's"),
    ("miguels", "Miguel's"),
    ("miguel", "Miguel's"),
    ("miguell's", "Miguel's"),
    ("crafthouse", "Crafthouse"),
    ("craft house", "Crafthouse"),
    ("the crafthouse", "Crafthouse"),
    ("bikini's", "Bikini's"),
    ("bikinis", "Bikini's"),
    ("bikinnis", "Bikini's"),
];

/// Resolve an exact (lower-case, trimmed) alias.
#[must_use]
pub fn resolve_alias(alias: &str) -> Option<&'static str> {
    ALIASES
        .iter()
        .find(|(key, _)| *key == alias)
        .map(|(_, venue)| *venue)
}

#[cfg(test)]
mod tests {
    use super::*;
    use barhop_core::{StaticCatalog, VenueCatalog};
    use rstest::rstest;

    #[rstest]
    fn every_alias_names_a_builtin_venue() {
        let catalog = StaticCatalog::builtin();
        for (alias, venue) in ALIASES {
            assert!(catalog.contains(venue), "{alias} points at unknown {venue}");
        }
    }

    #[rstest]
    fn aliases_are_lower_case() {
        for (alias, _) in ALIASES {
            assert_eq!(*alias, alias.to_lowercase());
        }
    }

    #[rstest]
    #[case("rekt", Some("Wrecked"))]
    #[case("beer house", Some("Bier Haus"))]
    #[case("Rekt", None)]
    #[case("moon", None)]
    fn resolves_exact_aliases(#[case] alias: &str, #[case] expected: Option<&str>) {
        assert_eq!(resolve_alias(alias), expected);
    }
}
