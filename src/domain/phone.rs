//! Phone-number token validation.

use serde::Serialize;

/// Number of digits in an acceptable phone token.
pub const PHONE_DIGITS: usize = 10;

/// Check whether a raw token is an acceptable phone number.
///
/// Surrounding whitespace is ignored; the remainder must be exactly ten ASCII digits.
#[must_use]
pub fn is_valid_phone(token: &str) -> bool {
    let token = token.trim();
    token.len() == PHONE_DIGITS && token.bytes().all(|b| b.is_ascii_digit())
}

/// Raw tokens split into accepted and rejected phone numbers.
///
/// Input order is preserved within each side.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PhonePartition {
    /// Accepted tokens, trimmed.
    pub valid: Vec<String>,
    /// Rejected tokens, exactly as supplied.
    pub invalid: Vec<String>,
}

impl PhonePartition {
    /// Partition tokens with [`is_valid_phone`].
    pub fn partition<I, S>(tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut partition = Self::default();
        for token in tokens {
            let token = token.as_ref();
            if is_valid_phone(token) {
                partition.valid.push(token.trim().to_string());
            } else {
                partition.invalid.push(token.to_string());
            }
        }
        partition
    }

    /// Total number of tokens seen.
    #[must_use]
    pub fn total(&self) -> usize {
        self.valid.len() + self.invalid.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_phone() {
        assert!(is_valid_phone("9876543210"));
        assert!(is_valid_phone("  9876543210\t"));
        assert!(is_valid_phone("0000000000"));
    }

    #[test]
    fn test_invalid_phone() {
        assert!(!is_valid_phone(" 987654321 "));
        assert!(!is_valid_phone("98765432100"));
        assert!(!is_valid_phone("98765a3210"));
        assert!(!is_valid_phone(""));
        assert!(!is_valid_phone("+919876543"));
        assert!(!is_valid_phone("98765 43210"));
    }

    #[test]
    fn test_non_ascii_digits_rejected() {
        // Devanagari digits are decimal digits in Unicode but not accepted.
        assert!(!is_valid_phone("९८७६५४३२१०"));
    }

    #[test]
    fn test_partition_preserves_order() {
        let tokens = ["9000000002", "bad", "9000000001", "123", " 9000000003 "];
        let partition = PhonePartition::partition(tokens);

        assert_eq!(
            partition.valid,
            vec!["9000000002", "9000000001", "9000000003"]
        );
        assert_eq!(partition.invalid, vec!["bad", "123"]);
        assert_eq!(partition.total(), 5);
    }
}
