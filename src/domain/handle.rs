//! Handle catalog.
//!
//! Built-in provider handles, category presets, per-session custom handles and
//! the selection that combines them.

use serde::{Deserialize, Serialize};

use crate::error::{AppError, Result};

/// Built-in provider handles, in display order.
pub const DEFAULT_HANDLES: &[&str] = &[
    "paytm",
    "ybl",
    "okaxis",
    "oksbi",
    "okicici",
    "okhdfc",
    "ibl",
    "axl",
    "apl",
    "barodampay",
    "cnrb",
    "federal",
    "ikwik",
    "indus",
    "kmbl",
    "pockets",
    "timecosmos",
    "yapl",
    "airtel",
    "fbl",
    "hsbc",
    "icici",
    "kotak",
    "pingpay",
    "sib",
    "unionbank",
    "jupiter",
    "fbpe",
    "aubank",
    "bandhan",
    "citi",
    "dbs",
    "equitas",
    "idfc",
    "indianbank",
    "iob",
    "jio",
    "kvb",
    "lvb",
    "mybank",
    "niyogin",
    "obc",
    "pnb",
    "rbl",
    "scb",
    "synb",
    "tjsb",
    "uco",
    "unionbankofindia",
    "united",
    "vijb",
    "yesbank",
    "postbank",
];

const POPULAR_BANKS: &[&str] = &["ybl", "paytm", "okaxis", "oksbi", "okicici", "okhdfc"];
const PAYMENT_APPS: &[&str] = &["paytm", "ybl", "airtel", "jio", "jupiter"];

/// Check whether a handle is part of the built-in catalog.
#[must_use]
pub fn is_default_handle(handle: &str) -> bool {
    DEFAULT_HANDLES.contains(&handle)
}

/// Preset groups over the built-in catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HandleCategory {
    /// The most common bank handles.
    PopularBanks,
    /// Wallet and payment-app handles.
    PaymentApps,
    /// Every built-in handle that is not a payment app.
    AllBanks,
}

impl HandleCategory {
    /// All categories, in display order.
    pub const ALL: [Self; 3] = [Self::PopularBanks, Self::PaymentApps, Self::AllBanks];

    /// Human-readable label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::PopularBanks => "Popular Banks",
            Self::PaymentApps => "Payment Apps",
            Self::AllBanks => "All Banks",
        }
    }

    /// Handles in this category.
    #[must_use]
    pub fn handles(self) -> Vec<&'static str> {
        match self {
            Self::PopularBanks => POPULAR_BANKS.to_vec(),
            Self::PaymentApps => PAYMENT_APPS.to_vec(),
            Self::AllBanks => DEFAULT_HANDLES
                .iter()
                .copied()
                .filter(|h| !matches!(*h, "paytm" | "ybl" | "airtel" | "jio"))
                .collect(),
        }
    }
}

impl std::fmt::Display for HandleCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Handles added by the user during a session.
///
/// Never contains a built-in handle or a duplicate, and never grows past its limit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct CustomHandles {
    handles: Vec<String>,
    #[serde(skip)]
    limit: usize,
}

impl CustomHandles {
    /// Create an empty, unbounded list.
    #[must_use]
    pub const fn new() -> Self {
        Self::with_limit(usize::MAX)
    }

    /// Create an empty list holding at most `limit` handles.
    #[must_use]
    pub const fn with_limit(limit: usize) -> Self {
        Self {
            handles: Vec::new(),
            limit,
        }
    }

    /// Whether the handle is already known (built-in or custom).
    #[must_use]
    pub fn contains(&self, handle: &str) -> bool {
        is_default_handle(handle) || self.handles.iter().any(|h| h == handle)
    }

    /// Whether the limit has been reached.
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.handles.len() >= self.limit
    }

    /// Add a single handle.
    ///
    /// # Errors
    ///
    /// Returns `BadRequest` for a blank handle or a full list, and
    /// `HandleExists` for a known one.
    pub fn add(&mut self, handle: &str) -> Result<String> {
        let handle = handle.trim();
        if handle.is_empty() {
            return Err(AppError::BadRequest("handle cannot be empty".to_string()));
        }
        if self.contains(handle) {
            return Err(AppError::HandleExists(handle.to_string()));
        }
        if self.is_full() {
            return Err(AppError::BadRequest(format!(
                "custom handle limit reached ({})",
                self.limit
            )));
        }
        self.handles.push(handle.to_string());
        Ok(handle.to_string())
    }

    /// Add one handle per line, skipping blanks and known handles.
    ///
    /// Stops once the limit is reached. Returns the number of handles actually added.
    pub fn add_bulk(&mut self, text: &str) -> usize {
        let mut added = 0;
        for line in text.lines().map(str::trim).filter(|l| !l.is_empty()) {
            if self.is_full() {
                break;
            }
            if !self.contains(line) {
                self.handles.push(line.to_string());
                added += 1;
            }
        }
        added
    }

    /// Remove the handle at `index`.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if the index is out of range.
    pub fn remove(&mut self, index: usize) -> Result<String> {
        if index >= self.handles.len() {
            return Err(AppError::NotFound(format!("custom handle #{index}")));
        }
        Ok(self.handles.remove(index))
    }

    /// Remove every custom handle.
    pub fn clear(&mut self) {
        self.handles.clear();
    }

    /// Custom handles in insertion order.
    #[must_use]
    pub fn as_slice(&self) -> &[String] {
        &self.handles
    }

    /// Number of custom handles.
    #[must_use]
    pub fn len(&self) -> usize {
        self.handles.len()
    }

    /// Whether there are no custom handles.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.handles.is_empty()
    }
}

impl Default for CustomHandles {
    fn default() -> Self {
        Self::new()
    }
}

/// Which handles to combine with the phone numbers.
#[derive(Debug, Clone, Deserialize)]
pub struct HandleSelection {
    /// Use the whole built-in catalog.
    #[serde(default = "default_true")]
    pub all: bool,

    /// Category preset, used when `all` is false.
    #[serde(default)]
    pub category: Option<HandleCategory>,

    /// Explicitly chosen handles, used when `all` is false.
    #[serde(default)]
    pub handles: Vec<String>,

    /// Append the session's custom handles.
    #[serde(default = "default_true")]
    pub include_custom: bool,
}

const fn default_true() -> bool {
    true
}

impl Default for HandleSelection {
    fn default() -> Self {
        Self {
            all: true,
            category: None,
            handles: Vec::new(),
            include_custom: true,
        }
    }
}

impl HandleSelection {
    /// Resolve the selection to an ordered, duplicate-free handle list.
    ///
    /// Blank explicit handles are ignored.
    #[must_use]
    pub fn resolve(&self, custom: &CustomHandles) -> Vec<String> {
        let mut selected: Vec<String> = Vec::new();
        let mut push = |handle: &str| {
            let handle = handle.trim();
            if !handle.is_empty() && !selected.iter().any(|h| h == handle) {
                selected.push(handle.to_string());
            }
        };

        if self.all {
            DEFAULT_HANDLES.iter().for_each(|h| push(*h));
        } else {
            if let Some(category) = self.category {
                category.handles().into_iter().for_each(&mut push);
            }
            self.handles.iter().for_each(|h| push(h.as_str()));
        }

        if self.include_custom {
            custom.as_slice().iter().for_each(|h| push(h.as_str()));
        }

        selected
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_catalog_is_unique() {
        let mut seen = std::collections::HashSet::new();
        assert!(DEFAULT_HANDLES.iter().all(|h| seen.insert(*h)));
        assert_eq!(DEFAULT_HANDLES.len(), 53);
    }

    #[test]
    fn test_categories() {
        assert_eq!(HandleCategory::PopularBanks.handles()[0], "ybl");
        assert_eq!(HandleCategory::PaymentApps.handles().len(), 5);

        let banks = HandleCategory::AllBanks.handles();
        assert_eq!(banks.len(), DEFAULT_HANDLES.len() - 4);
        assert!(!banks.contains(&"paytm"));
        assert!(banks.contains(&"okaxis"));
    }

    #[test]
    fn test_add_custom_handle() {
        let mut custom = CustomHandles::new();
        assert_eq!(custom.add("  mybank1 ").unwrap(), "mybank1");
        assert_eq!(custom.as_slice(), ["mybank1"]);

        assert!(matches!(custom.add("mybank1"), Err(AppError::HandleExists(_))));
        assert!(matches!(custom.add("paytm"), Err(AppError::HandleExists(_))));
        assert!(matches!(custom.add("   "), Err(AppError::BadRequest(_))));
    }

    #[test]
    fn test_add_bulk_skips_known() {
        let mut custom = CustomHandles::new();
        custom.add("first").unwrap();

        let added = custom.add_bulk("first\n\nsecond\n  ybl \nthird\nsecond\n");
        assert_eq!(added, 2);
        assert_eq!(custom.as_slice(), ["first", "second", "third"]);
    }

    #[test]
    fn test_custom_handle_limit() {
        let mut custom = CustomHandles::with_limit(2);
        custom.add("first").unwrap();

        assert_eq!(custom.add_bulk("second\nthird\nfourth"), 1);
        assert_eq!(custom.as_slice(), ["first", "second"]);
        assert!(custom.is_full());
        assert!(matches!(custom.add("fifth"), Err(AppError::BadRequest(_))));

        // Duplicates still report as duplicates when full
        assert!(matches!(custom.add("first"), Err(AppError::HandleExists(_))));

        custom.remove(0).unwrap();
        assert_eq!(custom.add("fifth").unwrap(), "fifth");
    }

    #[test]
    fn test_remove_and_clear() {
        let mut custom = CustomHandles::new();
        custom.add_bulk("a\nb\nc");

        assert_eq!(custom.remove(1).unwrap(), "b");
        assert_eq!(custom.as_slice(), ["a", "c"]);
        assert!(matches!(custom.remove(5), Err(AppError::NotFound(_))));

        custom.clear();
        assert!(custom.is_empty());
    }

    #[test]
    fn test_select_all_with_custom() {
        let mut custom = CustomHandles::new();
        custom.add("zbank").unwrap();

        let handles = HandleSelection::default().resolve(&custom);
        assert_eq!(handles.len(), DEFAULT_HANDLES.len() + 1);
        assert_eq!(handles[0], "paytm");
        assert_eq!(handles.last().map(String::as_str), Some("zbank"));
    }

    #[test]
    fn test_select_category_and_explicit_dedupes() {
        let selection = HandleSelection {
            all: false,
            category: Some(HandleCategory::PaymentApps),
            handles: vec!["jio".to_string(), "hsbc".to_string(), String::new()],
            include_custom: false,
        };

        let handles = selection.resolve(&CustomHandles::new());
        assert_eq!(handles, ["paytm", "ybl", "airtel", "jio", "jupiter", "hsbc"]);
    }

    #[test]
    fn test_select_nothing() {
        let selection = HandleSelection {
            all: false,
            category: None,
            handles: Vec::new(),
            include_custom: true,
        };
        assert!(selection.resolve(&CustomHandles::new()).is_empty());
    }
}
