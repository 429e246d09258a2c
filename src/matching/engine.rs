use serde::Serialize;

use crate::catalog::store::Catalog;
use crate::core::entry::CatalogEntry;
use crate::matching::tiers::{
    first_accepting, NameQuery, Strategy, CLOSEST_MATCH_TIERS, MULTI_MATCH_TIERS,
};

/// Smallest edit distance the fuzzy tier always tolerates
pub const DEFAULT_MIN_FUZZY_THRESHOLD: usize = 3;

/// Fraction of the query length the fuzzy tier tolerates for long queries
pub const DEFAULT_FUZZY_THRESHOLD_RATIO: f64 = 0.25;

/// Configuration for the matching engine
#[derive(Debug, Clone, Serialize)]
pub struct MatchingConfig {
    /// Floor of the fuzzy acceptance threshold
    pub min_fuzzy_threshold: usize,
    /// Threshold as a fraction of the query length, rounded down
    pub fuzzy_threshold_ratio: f64,
}

impl Default for MatchingConfig {
    fn default() -> Self {
        Self {
            min_fuzzy_threshold: DEFAULT_MIN_FUZZY_THRESHOLD,
            fuzzy_threshold_ratio: DEFAULT_FUZZY_THRESHOLD_RATIO,
        }
    }
}

impl MatchingConfig {
    /// Largest accepted edit distance for a query of `query_len` characters:
    /// `max(min_fuzzy_threshold, floor(fuzzy_threshold_ratio × query_len))`
    #[must_use]
    pub fn fuzzy_threshold(&self, query_len: usize) -> usize {
        #[allow(
            clippy::cast_precision_loss,
            clippy::cast_possible_truncation,
            clippy::cast_sign_loss
        )]
        let scaled = (self.fuzzy_threshold_ratio.max(0.0) * query_len as f64).floor() as usize;
        self.min_fuzzy_threshold.max(scaled)
    }
}

/// Entries matched for one query
#[derive(Debug, Clone)]
pub struct MatchResult<'c> {
    /// Tier that produced the entries; `None` when nothing matched
    pub tier: Option<Strategy>,

    /// Matched entries in catalog order
    pub entries: Vec<&'c CatalogEntry>,
}

impl<'c> MatchResult<'c> {
    fn empty() -> Self {
        Self {
            tier: None,
            entries: Vec::new(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &'c CatalogEntry> + '_ {
        self.entries.iter().copied()
    }
}

/// Resolves monster names against the STL catalog
///
/// Two entry points with deliberately different guarantees:
///
/// - [`find_matches`](Self::find_matches) collects every plausible entry
///   (exact, adjacent phrase, whole word) and only falls back to a single fuzzy
///   match when it is within the configured distance threshold.
/// - [`find_closest_match`](Self::find_closest_match) returns one entry
///   (exact, substring, first-word substring) and its fuzzy fallback has no
///   threshold, so it returns something for any query, even an empty one,
///   against a non-empty catalog. Whether that unbounded acceptance is intended is an
///   open question; callers wanting a guarded answer should use `find_matches`.
pub struct MatchingEngine<'a> {
    catalog: &'a Catalog,
    config: MatchingConfig,
}

impl<'a> MatchingEngine<'a> {
    /// Create a new matching engine with default configuration
    pub fn new(catalog: &'a Catalog) -> Self {
        Self {
            catalog,
            config: MatchingConfig::default(),
        }
    }

    /// Create a new matching engine with custom configuration
    pub fn with_config(catalog: &'a Catalog, config: MatchingConfig) -> Self {
        Self { catalog, config }
    }

    pub fn config(&self) -> &MatchingConfig {
        &self.config
    }

    /// All catalog entries that plausibly name the same creature as `query`
    pub fn find_matches(&self, query: &str) -> MatchResult<'a> {
        let query = NameQuery::new(query);
        match first_accepting(&MULTI_MATCH_TIERS, &query, self.catalog, &self.config) {
            Some((tier, entries)) => MatchResult {
                tier: Some(tier),
                entries,
            },
            None => MatchResult::empty(),
        }
    }

    /// The single closest entry for `query`, with no distance limit on the fuzzy step
    pub fn find_closest_match(&self, query: &str) -> Option<&'a CatalogEntry> {
        self.find_closest_match_with_tier(query).map(|(_, entry)| entry)
    }

    /// Like [`find_closest_match`](Self::find_closest_match), also reporting the tier used
    pub fn find_closest_match_with_tier(
        &self,
        query: &str,
    ) -> Option<(Strategy, &'a CatalogEntry)> {
        let query = NameQuery::new(query);
        first_accepting(&CLOSEST_MATCH_TIERS, &query, self.catalog, &self.config)
            .and_then(|(tier, entries)| entries.into_iter().next().map(|e| (tier, e)))
    }
}

/// [`MatchingEngine::find_matches`] with default configuration
pub fn find_matches<'c>(query: &str, catalog: &'c Catalog) -> MatchResult<'c> {
    MatchingEngine::new(catalog).find_matches(query)
}

/// [`MatchingEngine::find_closest_match`] with default configuration
pub fn find_closest_match<'c>(query: &str, catalog: &'c Catalog) -> Option<&'c CatalogEntry> {
    MatchingEngine::new(catalog).find_closest_match(query)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_test_catalog() -> Catalog {
        [
            "Goblin Archer",
            "Goblin Boss",
            "Cave Giant Ape Statue",
            "Rat Swarm",
            "Ratfolk",
            "Adult Red Dragon",
            "Oozu",
        ]
        .into_iter()
        .map(CatalogEntry::new)
        .collect()
    }

    fn names(result: &MatchResult<'_>) -> Vec<String> {
        result.iter().map(|e| e.name.clone()).collect()
    }

    #[test]
    fn test_fuzzy_threshold_formula() {
        let config = MatchingConfig::default();
        assert_eq!(config.fuzzy_threshold(4), 3);
        assert_eq!(config.fuzzy_threshold(12), 3);
        assert_eq!(config.fuzzy_threshold(16), 4);
        assert_eq!(config.fuzzy_threshold(23), 5);
        assert_eq!(config.fuzzy_threshold(0), 3);
    }

    #[test]
    fn test_exact_tier() {
        let catalog = make_test_catalog();
        let engine = MatchingEngine::new(&catalog);

        let result = engine.find_matches("goblin archer");
        assert_eq!(result.tier, Some(Strategy::Exact));
        assert_eq!(names(&result), vec!["Goblin Archer"]);
    }

    #[test]
    fn test_phrase_tier() {
        let catalog = make_test_catalog();
        let engine = MatchingEngine::new(&catalog);

        let result = engine.find_matches("Giant Ape");
        assert_eq!(result.tier, Some(Strategy::AdjacentPhrase));
        assert_eq!(names(&result), vec!["Cave Giant Ape Statue"]);
    }

    #[test]
    fn test_single_word_skips_phrase_tier() {
        let catalog = make_test_catalog();
        let engine = MatchingEngine::new(&catalog);

        let result = engine.find_matches("Giant");
        assert_eq!(result.tier, Some(Strategy::WholeWord));
        assert_eq!(names(&result), vec!["Cave Giant Ape Statue"]);
    }

    #[test]
    fn test_word_tier_keeps_catalog_order() {
        let catalog = make_test_catalog();
        let engine = MatchingEngine::new(&catalog);

        let result = engine.find_matches("Goblin Shaman");
        assert_eq!(result.tier, Some(Strategy::WholeWord));
        assert_eq!(names(&result), vec!["Goblin Archer", "Goblin Boss"]);
    }

    #[test]
    fn test_word_boundary_not_substring() {
        let catalog = make_test_catalog();
        let engine = MatchingEngine::new(&catalog);

        let result = engine.find_matches("Rat");
        assert_eq!(names(&result), vec!["Rat Swarm"]);
    }

    #[test]
    fn test_fuzzy_tier_accepts_within_threshold() {
        let catalog: Catalog = ["Oozu", "Dragon Turtle"]
            .into_iter()
            .map(CatalogEntry::new)
            .collect();
        let engine = MatchingEngine::new(&catalog);

        let result = engine.find_matches("Ooze");
        assert_eq!(result.tier, Some(Strategy::FuzzyWithinThreshold));
        assert_eq!(names(&result), vec!["Oozu"]);
    }

    #[test]
    fn test_fuzzy_tier_rejects_beyond_threshold() {
        // "Ooze" -> "Ziggurat" is far beyond 3 edits
        let catalog: Catalog = ["Ziggurat"].into_iter().map(CatalogEntry::new).collect();
        let engine = MatchingEngine::new(&catalog);

        let result = engine.find_matches("Ooze");
        assert!(result.is_empty());
        assert_eq!(result.tier, None);
    }

    #[test]
    fn test_custom_threshold() {
        let catalog: Catalog = ["Oozu"].into_iter().map(CatalogEntry::new).collect();
        let config = MatchingConfig {
            min_fuzzy_threshold: 0,
            fuzzy_threshold_ratio: 0.0,
        };
        let engine = MatchingEngine::with_config(&catalog, config);
        assert!(engine.find_matches("Ooze").is_empty());
    }

    #[test]
    fn test_closest_match_tiers() {
        let catalog = make_test_catalog();
        let engine = MatchingEngine::new(&catalog);

        let (tier, entry) = engine.find_closest_match_with_tier("goblin boss").unwrap();
        assert_eq!((tier, entry.name.as_str()), (Strategy::Exact, "Goblin Boss"));

        // Substring, not word boundary: "rat" is inside "Rat Swarm" first
        let (tier, entry) = engine.find_closest_match_with_tier("rat").unwrap();
        assert_eq!((tier, entry.name.as_str()), (Strategy::Contains, "Rat Swarm"));

        let (tier, entry) = engine.find_closest_match_with_tier("Adult Blue Dragon").unwrap();
        assert_eq!(
            (tier, entry.name.as_str()),
            (Strategy::FirstWordContains, "Adult Red Dragon")
        );
    }

    #[test]
    fn test_closest_match_has_no_threshold() {
        let catalog: Catalog = ["Ziggurat"].into_iter().map(CatalogEntry::new).collect();

        assert!(find_matches("Ooze", &catalog).is_empty());
        let closest = find_closest_match("Ooze", &catalog).unwrap();
        assert_eq!(closest.name, "Ziggurat");
    }

    #[test]
    fn test_empty_catalog() {
        let empty = Catalog::new();
        assert!(find_matches("Ogre", &empty).is_empty());
        assert!(find_matches("", &empty).is_empty());
        assert!(find_closest_match("Ogre", &empty).is_none());
        assert!(find_closest_match("", &empty).is_none());
    }

    #[test]
    fn test_blank_query_reaches_distance_tiers() {
        let catalog: Catalog = ["Imp", "Tarrasque"]
            .into_iter()
            .map(CatalogEntry::new)
            .collect();
        let engine = MatchingEngine::new(&catalog);

        // No words, so only the fuzzy tier can answer: "Imp" is 3 edits away
        for query in ["", "  "] {
            let result = engine.find_matches(query);
            assert_eq!(result.tier, Some(Strategy::FuzzyWithinThreshold), "{query:?}");
            assert_eq!(names(&result), vec!["Imp"]);
        }

        let (tier, entry) = engine.find_closest_match_with_tier("").unwrap();
        assert_eq!((tier, entry.name.as_str()), (Strategy::Contains, "Imp"));
        let (tier, entry) = engine.find_closest_match_with_tier("  ").unwrap();
        assert_eq!((tier, entry.name.as_str()), (Strategy::NearestFuzzy, "Imp"));
    }
}
