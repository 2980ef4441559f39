//! JSON export and read-back.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::ExportResult;

/// The JSON export document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JsonExport {
    /// When the export was made.
    pub generated_at: DateTime<Utc>,
    /// Number of identifiers.
    pub total_vpas: usize,
    /// Identifiers in order.
    pub vpas: Vec<String>,
}

impl JsonExport {
    /// Build an export document.
    #[must_use]
    pub fn new(vpas: Vec<String>, generated_at: DateTime<Utc>) -> Self {
        Self {
            generated_at,
            total_vpas: vpas.len(),
            vpas,
        }
    }

    /// Pretty-printed JSON bytes.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_vec_pretty(&self) -> ExportResult<Vec<u8>> {
        Ok(serde_json::to_vec_pretty(self)?)
    }

    /// Parse a previously exported document.
    ///
    /// # Errors
    ///
    /// Returns an error if the bytes are not a valid export document.
    pub fn from_slice(bytes: &[u8]) -> ExportResult<Self> {
        Ok(serde_json::from_slice(bytes)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_back_preserves_order() {
        let vpas: Vec<String> = ["z@b", "a@a", "z@b", "m@c"]
            .iter()
            .map(ToString::to_string)
            .collect();
        let export = JsonExport::new(vpas.clone(), Utc::now());

        let bytes = export.to_vec_pretty().unwrap();
        let parsed = JsonExport::from_slice(&bytes).unwrap();

        assert_eq!(parsed.vpas, vpas);
        assert_eq!(parsed.total_vpas, 4);
    }

    #[test]
    fn test_document_shape() {
        let export = JsonExport::new(vec!["1@a".to_string()], Utc::now());
        let value: serde_json::Value =
            serde_json::from_slice(&export.to_vec_pretty().unwrap()).unwrap();

        assert_eq!(value["total_vpas"], 1);
        assert_eq!(value["vpas"][0], "1@a");
        assert!(value["generated_at"].is_string());
    }

    #[test]
    fn test_from_slice_rejects_garbage() {
        assert!(JsonExport::from_slice(b"{\"vpas\": 3}").is_err());
    }
}
