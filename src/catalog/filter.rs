use regex::Regex;
use std::sync::LazyLock;

use super::types::{Card, Talent};

static KEYWORD_SEPARATOR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r",|\s+or\s+").expect("valid keyword separator regex"));

/// Split search terms into keywords.
///
/// Terms are joined with spaces, then split on commas or on the word "or",
/// so `fire, frost` and `fire or frost` both give two keywords.
pub fn parse_keywords<S: AsRef<str>>(terms: &[S]) -> Vec<String> {
    let joined = terms
        .iter()
        .map(|t| t.as_ref())
        .collect::<Vec<_>>()
        .join(" ");
    KEYWORD_SEPARATOR
        .split(&joined)
        .map(|k| k.trim().to_string())
        .collect()
}

/// Digits of an exclusion flag, e.g. `"567"` gives `[5, 6, 7]`.
/// Non-digit characters are ignored and repeated digits kept once.
pub fn parse_digit_list(digits: &str) -> Vec<u32> {
    let mut out = Vec::new();
    for d in digits.chars().filter_map(|c| c.to_digit(10)) {
        if !out.contains(&d) {
            out.push(d);
        }
    }
    out
}

/// Which records to drop before keyword matching.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchFilter {
    pub keywords: Vec<String>,
    pub excluded_categories: Vec<u32>,
    pub excluded_expansions: Vec<u32>,
    pub excluded_rarities: Vec<u32>,
    pub excluded_names: Vec<String>,
}

impl SearchFilter {
    pub fn matches(&self, card: &Card) -> bool {
        !self.excluded_categories.contains(&card.category)
            && !self.excluded_expansions.contains(&card.expansion)
            && !self.excluded_rarities.contains(&card.rarity)
            && !self
                .excluded_names
                .iter()
                .any(|n| n.to_lowercase() == card.name.to_lowercase())
            && self.keywords.iter().any(|k| card.matches_keyword(k))
    }

    fn apply<T: AsRef<Card> + Clone>(&self, records: &[T]) -> Vec<T> {
        records
            .iter()
            .filter(|r| self.matches(r.as_ref()))
            .cloned()
            .collect()
    }
}

/// Matching cards grouped by color, rarest first within a color.
pub fn search_cards(cards: &[Card], filter: &SearchFilter) -> Vec<Card> {
    let mut results = filter.apply(cards);
    results.sort_by(|a, b| a.color.cmp(&b.color).then(b.rarity.cmp(&a.rarity)));
    results
}

/// Matching talents ordered by tier, lowest first.
pub fn search_talents(talents: &[Talent], filter: &SearchFilter) -> Vec<Talent> {
    let mut results = filter.apply(talents);
    results.sort_by_key(|t| t.card.rarity);
    results
}
