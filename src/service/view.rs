//! Table and list views over generated identifiers.

use serde::{Deserialize, Serialize};

use crate::domain::{ResultsQuery, split_identifier};

/// An identifier split into its number and handle columns.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VpaRow {
    /// Text before the first `@`.
    pub phone_number: String,
    /// Text after the first `@`.
    pub upi_handle: String,
    /// The whole identifier.
    pub full_vpa: String,
}

impl VpaRow {
    /// Split an identifier; `None` when it has no `@`.
    #[must_use]
    pub fn split(identifier: &str) -> Option<Self> {
        split_identifier(identifier).map(|(number, handle)| Self {
            phone_number: number.to_string(),
            upi_handle: handle.to_string(),
            full_vpa: identifier.to_string(),
        })
    }
}

/// Filtered table view.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TableView {
    /// Rows that passed the filters.
    pub rows: Vec<VpaRow>,
    /// Number of rows shown.
    pub shown: usize,
    /// Number of rows before filtering.
    pub total: usize,
    /// Distinct handles across all rows, in first-seen order.
    pub handles: Vec<String>,
}

/// Filtered plain list view.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListView {
    /// Number of identifiers shown.
    pub count: usize,
    /// Identifiers that passed the filter.
    pub vpas: Vec<String>,
}

fn matches_search(identifier: &str, needle: Option<&str>) -> bool {
    needle.is_none_or(|n| identifier.to_lowercase().contains(n))
}

fn normalized_search(query: &ResultsQuery) -> Option<String> {
    query
        .search
        .as_deref()
        .filter(|s| !s.is_empty())
        .map(str::to_lowercase)
}

/// Build the table view; identifiers without `@` are not shown.
#[must_use]
pub fn table(identifiers: &[String], query: &ResultsQuery) -> TableView {
    let rows: Vec<VpaRow> = identifiers.iter().filter_map(|id| VpaRow::split(id)).collect();

    let mut handles: Vec<String> = Vec::new();
    for row in &rows {
        if !handles.contains(&row.upi_handle) {
            handles.push(row.upi_handle.clone());
        }
    }

    let needle = normalized_search(query);
    let handle = query.handle.as_deref().filter(|h| !h.is_empty());
    let total = rows.len();

    let rows: Vec<VpaRow> = rows
        .into_iter()
        .filter(|row| matches_search(&row.full_vpa, needle.as_deref()))
        .filter(|row| handle.is_none_or(|h| row.upi_handle == h))
        .collect();

    TableView {
        shown: rows.len(),
        rows,
        total,
        handles,
    }
}

/// Build the list view.
#[must_use]
pub fn list(identifiers: &[String], query: &ResultsQuery) -> ListView {
    let needle = normalized_search(query);
    let vpas: Vec<String> = identifiers
        .iter()
        .filter(|id| matches_search(id, needle.as_deref()))
        .cloned()
        .collect();

    ListView {
        count: vpas.len(),
        vpas,
    }
}
