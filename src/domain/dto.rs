//! Data Transfer Objects for API requests and responses.

use serde::{Deserialize, Serialize};

use super::{HandleCategory, HandleSelection, HistoryEntry, SortMode};

/// Standard API response wrapper.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    /// Response code (0 = success, non-zero = error).
    pub code: i32,

    /// Human-readable message.
    pub message: String,

    /// Response data (null on error).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

impl<T> ApiResponse<T> {
    /// Create a success response.
    pub fn success(data: T) -> Self {
        Self {
            code: 0,
            message: "success".to_string(),
            data: Some(data),
        }
    }

    /// Create an error response.
    pub fn error(code: i32, message: impl Into<String>) -> ApiResponse<()> {
        ApiResponse {
            code,
            message: message.into(),
            data: None,
        }
    }
}

impl ApiResponse<()> {
    /// Create a success response with no data.
    #[must_use]
    pub fn ok() -> Self {
        Self {
            code: 0,
            message: "success".to_string(),
            data: None,
        }
    }
}

/// Where the raw phone numbers come from.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "method", rename_all = "snake_case")]
pub enum PhoneInput {
    /// Free text, one number per line.
    Text {
        /// Raw text.
        text: String,
    },
    /// Uploaded text/CSV file; the first column of each line is used.
    File {
        /// Decoded file content.
        content: String,
    },
    /// Sequential numbers starting at `start`.
    Range {
        /// First number; must itself be a valid phone number.
        start: String,
        /// How many numbers to produce.
        count: u32,
    },
}

/// Request to run a generation cycle.
#[derive(Debug, Clone, Deserialize)]
pub struct GenerateRequest {
    /// Phone number source.
    pub input: PhoneInput,

    /// Handle selection.
    #[serde(default)]
    pub selection: HandleSelection,

    /// Custom template; the default `{number}@{handle}` when absent.
    #[serde(default)]
    pub template: Option<String>,

    /// Text prepended to every number.
    #[serde(default)]
    pub prefix: Option<String>,

    /// Text appended to every number.
    #[serde(default)]
    pub suffix: Option<String>,

    /// Remove duplicate identifiers (default: true).
    #[serde(default = "default_dedupe")]
    pub dedupe: bool,

    /// Output ordering.
    #[serde(default)]
    pub sort: SortMode,
}

const fn default_dedupe() -> bool {
    true
}

/// Request to validate phone input without generating.
#[derive(Debug, Clone, Deserialize)]
pub struct ValidateRequest {
    /// Phone number source.
    pub input: PhoneInput,
}

/// Validation summary.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidateResponse {
    /// Number of accepted tokens.
    pub valid_count: usize,
    /// Number of rejected tokens.
    pub invalid_count: usize,
    /// Accepted tokens.
    pub valid: Vec<String>,
    /// Rejected tokens.
    pub invalid: Vec<String>,
}

/// Request to preview a template.
#[derive(Debug, Clone, Deserialize)]
pub struct TemplatePreviewRequest {
    /// Template text.
    pub template: String,
}

/// Request to add one custom handle.
#[derive(Debug, Clone, Deserialize)]
pub struct AddHandleRequest {
    /// Handle to add.
    pub handle: String,
}

/// Request to add custom handles in bulk.
#[derive(Debug, Clone, Deserialize)]
pub struct BulkHandlesRequest {
    /// One handle per line.
    pub text: String,
}

/// Result of a bulk add.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BulkHandlesResponse {
    /// Number of handles actually added.
    pub added: usize,
    /// Custom handles after the add.
    pub handles: Vec<String>,
}

/// A list of handles with its size.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HandleListResponse {
    /// Number of handles.
    pub count: usize,
    /// Handles in order.
    pub handles: Vec<String>,
}

impl HandleListResponse {
    /// Build from a handle list.
    #[must_use]
    pub fn new(handles: Vec<String>) -> Self {
        Self {
            count: handles.len(),
            handles,
        }
    }
}

/// One category preset.
#[derive(Debug, Clone, Serialize)]
pub struct CategoryResponse {
    /// Wire identifier.
    pub id: HandleCategory,
    /// Human-readable label.
    pub label: &'static str,
    /// Handles in the category.
    pub handles: Vec<&'static str>,
}

/// The built-in catalog.
#[derive(Debug, Clone, Serialize)]
pub struct CatalogResponse {
    /// Built-in handles.
    pub handles: Vec<&'static str>,
    /// Category presets.
    pub categories: Vec<CategoryResponse>,
}

/// A newly created session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionResponse {
    /// Bearer token identifying the session.
    pub token: String,
    /// Token type (always "session").
    pub token_type: String,
    /// Idle timeout in seconds.
    pub expires_in: u64,
}

/// Query parameters for result views.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ResultsQuery {
    /// Case-insensitive substring filter.
    #[serde(default)]
    pub search: Option<String>,
    /// Exact handle filter (table view only).
    #[serde(default)]
    pub handle: Option<String>,
}

/// Query parameters for the history view.
#[derive(Debug, Clone, Deserialize)]
pub struct HistoryQuery {
    /// Maximum number of records (default: 5).
    #[serde(default = "default_history_limit")]
    pub limit: usize,
}

const fn default_history_limit() -> usize {
    5
}

/// Recent history.
#[derive(Debug, Clone, Serialize)]
pub struct HistoryResponse {
    /// Total records in the session.
    pub total: usize,
    /// Most recent records, newest first.
    pub records: Vec<HistoryEntry>,
}
