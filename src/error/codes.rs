//! Error code constants.
//!
//! Error codes are organized by category:
//! - 1xxx: Handle catalog errors
//! - 2xxx: Session errors
//! - 3xxx: Validation errors
//! - 4xxx: Resource errors
//! - 5xxx: Internal/System errors

/// Error code type with semantic categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ErrorCode(i32);

impl ErrorCode {
    // ===== Handle Catalog Errors (1xxx) =====

    /// Handle already present.
    pub const HANDLE_EXISTS: Self = Self(1001);

    // ===== Session Errors (2xxx) =====

    /// Session token missing or unknown.
    pub const UNAUTHORIZED: Self = Self(2001);

    /// Session idle timeout elapsed.
    pub const SESSION_EXPIRED: Self = Self(2002);

    // ===== Validation Errors (3xxx) =====

    /// Bad request / invalid parameters.
    pub const BAD_REQUEST: Self = Self(3001);

    /// No phone numbers or no handles supplied.
    pub const EMPTY_INPUT: Self = Self(3002);

    // ===== Resource Errors (4xxx) =====

    /// Resource not found.
    pub const NOT_FOUND: Self = Self(4001);

    /// Rate limit exceeded.
    pub const RATE_LIMITED: Self = Self(4002);

    // ===== Internal/System Errors (5xxx) =====

    /// Export serialization failed.
    pub const EXPORT_FAILED: Self = Self(5001);

    /// Internal server error.
    pub const INTERNAL_ERROR: Self = Self(5002);

    /// Service unavailable.
    pub const SERVICE_UNAVAILABLE: Self = Self(5003);

    /// Get the error code as an i32.
    #[must_use]
    pub const fn as_i32(self) -> i32 {
        self.0
    }

    /// Get the category of this error code.
    #[must_use]
    pub const fn category(&self) -> ErrorCategory {
        match self.0 {
            1000..=1999 => ErrorCategory::Catalog,
            2000..=2999 => ErrorCategory::Session,
            3000..=3999 => ErrorCategory::Validation,
            4000..=4999 => ErrorCategory::Resource,
            5000..=5999 => ErrorCategory::Internal,
            _ => ErrorCategory::Unknown,
        }
    }
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<ErrorCode> for i32 {
    fn from(code: ErrorCode) -> Self {
        code.0
    }
}

/// Error category based on error code range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// Handle catalog errors (1xxx).
    Catalog,
    /// Session errors (2xxx).
    Session,
    /// Validation errors (3xxx).
    Validation,
    /// Resource errors (4xxx).
    Resource,
    /// Internal/system errors (5xxx).
    Internal,
    /// Unknown category.
    Unknown,
}

impl std::fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Catalog => write!(f, "catalog"),
            Self::Session => write!(f, "session"),
            Self::Validation => write!(f, "validation"),
            Self::Resource => write!(f, "resource"),
            Self::Internal => write!(f, "internal"),
            Self::Unknown => write!(f, "unknown"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_code_values() {
        assert_eq!(ErrorCode::HANDLE_EXISTS.as_i32(), 1001);
        assert_eq!(ErrorCode::UNAUTHORIZED.as_i32(), 2001);
        assert_eq!(ErrorCode::EMPTY_INPUT.as_i32(), 3002);
        assert_eq!(ErrorCode::NOT_FOUND.as_i32(), 4001);
        assert_eq!(ErrorCode::INTERNAL_ERROR.as_i32(), 5002);
    }

    #[test]
    fn test_error_categories() {
        assert_eq!(ErrorCode::HANDLE_EXISTS.category(), ErrorCategory::Catalog);
        assert_eq!(ErrorCode::SESSION_EXPIRED.category(), ErrorCategory::Session);
        assert_eq!(ErrorCode::EMPTY_INPUT.category(), ErrorCategory::Validation);
        assert_eq!(ErrorCode::RATE_LIMITED.category(), ErrorCategory::Resource);
        assert_eq!(ErrorCode::EXPORT_FAILED.category(), ErrorCategory::Internal);
    }
}
