//! Deduplication and ordering of generated identifiers.

use std::collections::HashSet;

use crate::domain::{SortMode, handle_part, number_part};

/// Remove repeated identifiers, keeping the first occurrence of each.
#[must_use]
pub fn dedupe(mut identifiers: Vec<String>) -> Vec<String> {
    let mut seen = HashSet::with_capacity(identifiers.len());
    identifiers.retain(|id| seen.insert(id.clone()));
    identifiers
}

/// Number of distinct identifiers.
#[must_use]
pub fn unique_count(identifiers: &[String]) -> usize {
    identifiers.iter().collect::<HashSet<_>>().len()
}

/// Sort identifiers in place. Sorting is stable and ascending.
pub fn sort(identifiers: &mut [String], mode: SortMode) {
    match mode {
        SortMode::None => {}
        SortMode::ByNumberPart => identifiers.sort_by(|a, b| number_part(a).cmp(number_part(b))),
        SortMode::ByHandlePart => identifiers.sort_by(|a, b| handle_part(a).cmp(handle_part(b))),
        SortMode::Lexicographic => identifiers.sort(),
    }
}

/// Apply the dedupe and sort policies to a generated list.
#[must_use]
pub fn postprocess(identifiers: Vec<String>, dedupe_enabled: bool, mode: SortMode) -> Vec<String> {
    let mut identifiers = if dedupe_enabled {
        dedupe(identifiers)
    } else {
        identifiers
    };
    sort(&mut identifiers, mode);
    identifiers
}
