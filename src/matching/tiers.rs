//! Named matching strategies and the driver that runs them in order.
//!
//! Each strategy is a total function from a query and a catalog to the entries
//! it accepts, in catalog order. A tier list is tried front to back and the
//! first strategy that accepts anything decides the result.

use regex::Regex;
use serde::Serialize;

use crate::catalog::store::Catalog;
use crate::core::entry::CatalogEntry;
use crate::matching::distance::distance;
use crate::matching::engine::MatchingConfig;

/// Tiers used when collecting every plausible match
pub const MULTI_MATCH_TIERS: [Strategy; 4] = [
    Strategy::Exact,
    Strategy::AdjacentPhrase,
    Strategy::WholeWord,
    Strategy::FuzzyWithinThreshold,
];

/// Tiers used when picking a single closest entry; the fuzzy step has no threshold
pub const CLOSEST_MATCH_TIERS: [Strategy; 4] = [
    Strategy::Exact,
    Strategy::Contains,
    Strategy::FirstWordContains,
    Strategy::NearestFuzzy,
];

/// A name query, normalized once and shared by every tier
#[derive(Debug, Clone)]
pub struct NameQuery {
    raw: String,
    lower: String,
    words: Vec<String>,
}

impl NameQuery {
    pub fn new(query: &str) -> Self {
        let lower = query.to_lowercase();
        let words = lower.split_whitespace().map(str::to_string).collect();
        Self {
            raw: query.to_string(),
            lower,
            words,
        }
    }

    pub fn raw(&self) -> &str {
        &self.raw
    }

    pub fn lower(&self) -> &str {
        &self.lower
    }

    pub fn words(&self) -> &[String] {
        &self.words
    }

    pub fn first_word(&self) -> Option<&str> {
        self.words.first().map(String::as_str)
    }

    /// Length in characters, used to scale the fuzzy threshold
    pub fn char_len(&self) -> usize {
        self.raw.chars().count()
    }
}

/// One matching strategy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Strategy {
    /// Lowercased name equals the lowercased query
    Exact,
    /// Two adjacent query words appear, adjacent and in order, as whole words
    AdjacentPhrase,
    /// The first query word appears as a whole word
    WholeWord,
    /// Single nearest entry by edit distance, if within the configured threshold
    FuzzyWithinThreshold,
    /// Lowercased name contains the lowercased query
    Contains,
    /// Lowercased name contains the first query word, anywhere
    FirstWordContains,
    /// Single nearest entry by edit distance, however far
    NearestFuzzy,
}

impl Strategy {
    /// Entries this strategy accepts, in catalog order
    pub fn select<'c>(
        self,
        query: &NameQuery,
        catalog: &'c Catalog,
        config: &MatchingConfig,
    ) -> Vec<&'c CatalogEntry> {
        match self {
            Self::Exact => exact(query, catalog),
            Self::AdjacentPhrase => adjacent_phrase(query, catalog),
            Self::WholeWord => whole_word(query, catalog),
            Self::FuzzyWithinThreshold => {
                fuzzy_within(query, catalog, config.fuzzy_threshold(query.char_len()))
            }
            Self::Contains => contains(query, catalog),
            Self::FirstWordContains => first_word_contains(query, catalog),
            Self::NearestFuzzy => nearest(query, catalog)
                .map(|(entry, _)| vec![entry])
                .unwrap_or_default(),
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Exact => "exact",
            Self::AdjacentPhrase => "phrase",
            Self::WholeWord => "word",
            Self::FuzzyWithinThreshold => "fuzzy",
            Self::Contains => "contains",
            Self::FirstWordContains => "first-word",
            Self::NearestFuzzy => "nearest",
        }
    }
}

impl std::fmt::Display for Strategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Run `tiers` in order and return the first non-empty selection with its strategy
pub fn first_accepting<'c>(
    tiers: &[Strategy],
    query: &NameQuery,
    catalog: &'c Catalog,
    config: &MatchingConfig,
) -> Option<(Strategy, Vec<&'c CatalogEntry>)> {
    tiers.iter().find_map(|&strategy| {
        let selected = strategy.select(query, catalog, config);
        (!selected.is_empty()).then_some((strategy, selected))
    })
}

pub fn exact<'c>(query: &NameQuery, catalog: &'c Catalog) -> Vec<&'c CatalogEntry> {
    catalog
        .iter()
        .filter(|e| e.name.to_lowercase() == query.lower())
        .collect()
}

pub fn adjacent_phrase<'c>(query: &NameQuery, catalog: &'c Catalog) -> Vec<&'c CatalogEntry> {
    let words = query.words();
    if words.len() < 2 {
        return Vec::new();
    }

    let phrases: Vec<Regex> = words
        .windows(2)
        .filter_map(|pair| {
            whole_word_regex(&format!(
                r"{}\s+{}",
                regex::escape(&pair[0]),
                regex::escape(&pair[1])
            ))
        })
        .collect();

    catalog
        .iter()
        .filter(|e| {
            let name = e.name.to_lowercase();
            phrases.iter().any(|re| re.is_match(&name))
        })
        .collect()
}

pub fn whole_word<'c>(query: &NameQuery, catalog: &'c Catalog) -> Vec<&'c CatalogEntry> {
    let Some(re) = query
        .first_word()
        .and_then(|word| whole_word_regex(&regex::escape(word)))
    else {
        return Vec::new();
    };

    catalog
        .iter()
        .filter(|e| re.is_match(&e.name.to_lowercase()))
        .collect()
}

pub fn fuzzy_within<'c>(
    query: &NameQuery,
    catalog: &'c Catalog,
    threshold: usize,
) -> Vec<&'c CatalogEntry> {
    match nearest(query, catalog) {
        Some((entry, dist)) if dist <= threshold => vec![entry],
        _ => Vec::new(),
    }
}

pub fn contains<'c>(query: &NameQuery, catalog: &'c Catalog) -> Vec<&'c CatalogEntry> {
    catalog
        .iter()
        .filter(|e| e.name.to_lowercase().contains(query.lower()))
        .collect()
}

pub fn first_word_contains<'c>(query: &NameQuery, catalog: &'c Catalog) -> Vec<&'c CatalogEntry> {
    let Some(word) = query.first_word() else {
        return Vec::new();
    };
    catalog
        .iter()
        .filter(|e| e.name.to_lowercase().contains(word))
        .collect()
}

/// Entry with the smallest edit distance to the query; the earliest wins ties
pub fn nearest<'c>(query: &NameQuery, catalog: &'c Catalog) -> Option<(&'c CatalogEntry, usize)> {
    let mut best: Option<(&CatalogEntry, usize)> = None;
    for entry in catalog.iter() {
        let dist = distance(query.raw(), &entry.name);
        if best.map_or(true, |(_, min)| dist < min) {
            best = Some((entry, dist));
        }
    }
    best
}

/// `pattern` anchored on word boundaries; `None` if it does not compile
fn whole_word_regex(pattern: &str) -> Option<Regex> {
    Regex::new(&format!(r"\b{pattern}\b")).ok()
}
