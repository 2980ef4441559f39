//! Identifier helpers and sort modes.
//!
//! Identifiers are plain strings; the parts before and after the first `@`
//! are treated as the number and handle parts.

use serde::{Deserialize, Serialize};

/// Separator between the number and handle parts.
pub const HANDLE_SEPARATOR: char = '@';

/// Split an identifier at its first `@`.
///
/// Returns `None` when the identifier has no `@`.
#[must_use]
pub fn split_identifier(identifier: &str) -> Option<(&str, &str)> {
    identifier.split_once(HANDLE_SEPARATOR)
}

/// Text before the first `@`, or the whole identifier.
#[must_use]
pub fn number_part(identifier: &str) -> &str {
    split_identifier(identifier).map_or(identifier, |(number, _)| number)
}

/// Text after the first `@`, or the whole identifier.
#[must_use]
pub fn handle_part(identifier: &str) -> &str {
    split_identifier(identifier).map_or(identifier, |(_, handle)| handle)
}

/// Output ordering policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortMode {
    /// Keep generation (or dedupe) order.
    #[default]
    None,
    /// Sort by the number part.
    #[serde(rename = "number")]
    ByNumberPart,
    /// Sort by the handle part.
    #[serde(rename = "handle")]
    ByHandlePart,
    /// Sort by the whole identifier.
    #[serde(rename = "alphabetical")]
    Lexicographic,
}

impl std::fmt::Display for SortMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::None => write!(f, "none"),
            Self::ByNumberPart => write!(f, "number"),
            Self::ByHandlePart => write!(f, "handle"),
            Self::Lexicographic => write!(f, "alphabetical"),
        }
    }
}
