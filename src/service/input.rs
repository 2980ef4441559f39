//! Raw phone token sources.
//!
//! Every input method is reduced to an ordered list of raw tokens before
//! validation.

use crate::config::GenerationConfig;
use crate::domain::{PhoneInput, is_valid_phone};
use crate::error::{AppError, Result};

/// One token per non-blank line, trimmed.
#[must_use]
pub fn from_text(text: &str) -> Vec<String> {
    text.split('\n')
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(ToString::to_string)
        .collect()
}

/// First comma-separated column of every non-blank line.
#[must_use]
pub fn from_delimited(content: &str) -> Vec<String> {
    content
        .split('\n')
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(|line| line.split(',').next().unwrap_or(line).to_string())
        .collect()
}

/// `count` sequential numbers starting at `start`.
///
/// Values past `9999999999` are produced as-is and later rejected by validation.
///
/// # Errors
///
/// Returns `BadRequest` if `start` is not a valid phone number or `count` is
/// outside `1..=max_count`.
pub fn from_range(start: &str, count: u32, max_count: u32) -> Result<Vec<String>> {
    if !is_valid_phone(start) {
        return Err(AppError::BadRequest(format!(
            "range start is not a 10-digit number: {start}"
        )));
    }
    if count == 0 || count > max_count {
        return Err(AppError::BadRequest(format!(
            "range count must be between 1 and {max_count}"
        )));
    }

    let base: u64 = start
        .trim()
        .parse()
        .map_err(|_| AppError::BadRequest(format!("invalid range start: {start}")))?;

    Ok((0..u64::from(count))
        .map(|offset| (base + offset).to_string())
        .collect())
}

/// Resolve an input to raw tokens, enforcing the configured limits.
///
/// # Errors
///
/// Returns `BadRequest` for an invalid range or too many tokens.
pub fn resolve(input: &PhoneInput, limits: &GenerationConfig) -> Result<Vec<String>> {
    let tokens = match input {
        PhoneInput::Text { text } => from_text(text),
        PhoneInput::File { content } => from_delimited(content),
        PhoneInput::Range { start, count } => from_range(start, *count, limits.max_range_count)?,
    };

    if tokens.len() > limits.max_numbers {
        return Err(AppError::BadRequest(format!(
            "too many phone numbers: {} (max {})",
            tokens.len(),
            limits.max_numbers
        )));
    }

    Ok(tokens)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_text() {
        let tokens = from_text("9876543210\n\n  9123456789  \r\nabc\n");
        assert_eq!(tokens, vec!["9876543210", "9123456789", "abc"]);
    }

    #[test]
    fn test_from_delimited_first_column() {
        let tokens = from_delimited("9876543210,Alice,x\n\n9123456789\n ,empty\n");
        assert_eq!(tokens, vec!["9876543210", "9123456789", ""]);
    }

    #[test]
    fn test_from_range() {
        let tokens = from_range("9000000000", 3, 100).unwrap();
        assert_eq!(tokens, vec!["9000000000", "9000000001", "9000000002"]);
    }

    #[test]
    fn test_from_range_overflowing_ten_digits() {
        let tokens = from_range("9999999999", 2, 100).unwrap();
        assert_eq!(tokens, vec!["9999999999", "10000000000"]);
        assert!(!is_valid_phone(&tokens[1]));
    }

    #[test]
    fn test_from_range_rejects_bad_params() {
        assert!(matches!(
            from_range("12345", 3, 100),
            Err(AppError::BadRequest(_))
        ));
        assert!(matches!(
            from_range("9000000000", 0, 100),
            Err(AppError::BadRequest(_))
        ));
        assert!(matches!(
            from_range("9000000000", 101, 100),
            Err(AppError::BadRequest(_))
        ));
    }

    #[test]
    fn test_resolve_enforces_max_numbers() {
        let limits = GenerationConfig {
            max_numbers: 2,
            ..Default::default()
        };
        let input = PhoneInput::Text {
            text: "1\n2\n3".to_string(),
        };
        assert!(matches!(
            resolve(&input, &limits),
            Err(AppError::BadRequest(_))
        ));
    }
}
