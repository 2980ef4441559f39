//! Cross-product identifier generation.

use crate::domain::Template;

/// Optional text added around every phone number before combination.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Decoration {
    prefix: Option<String>,
    suffix: Option<String>,
}

impl Decoration {
    /// Create a decoration. Empty strings count as absent.
    #[must_use]
    pub fn new(prefix: Option<String>, suffix: Option<String>) -> Self {
        Self {
            prefix: prefix.filter(|p| !p.is_empty()),
            suffix: suffix.filter(|s| !s.is_empty()),
        }
    }

    /// Whether neither prefix nor suffix is set.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.prefix.is_none() && self.suffix.is_none()
    }

    /// Decorate a single number.
    #[must_use]
    pub fn apply(&self, number: &str) -> String {
        let prefix = self.prefix.as_deref().unwrap_or_default();
        let suffix = self.suffix.as_deref().unwrap_or_default();
        format!("{prefix}{number}{suffix}")
    }

    /// Decorate every number, keeping order.
    #[must_use]
    pub fn apply_all(&self, numbers: &[String]) -> Vec<String> {
        if self.is_empty() {
            return numbers.to_vec();
        }
        numbers.iter().map(|n| self.apply(n)).collect()
    }
}

/// Combine every number with every handle.
///
/// Output is numbers-major, handles-minor, in input order. `None` uses the
/// default `{number}@{handle}` template. Either list being empty yields an
/// empty result.
#[must_use]
pub fn generate<N, H>(numbers: &[N], handles: &[H], template: Option<&Template>) -> Vec<String>
where
    N: AsRef<str>,
    H: AsRef<str>,
{
    let default_template;
    let template = match template {
        Some(t) => t,
        None => {
            default_template = Template::default();
            &default_template
        }
    };

    let mut identifiers = Vec::with_capacity(numbers.len() * handles.len());
    for number in numbers {
        for handle in handles {
            identifiers.push(template.render(number.as_ref(), handle.as_ref()));
        }
    }
    identifiers
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_template() {
        assert_eq!(
            generate(&["9876543210"], &["paytm"], None),
            vec!["9876543210@paytm"]
        );
    }

    #[test]
    fn test_custom_template() {
        let template = Template::parse("{handle}:{number}");
        assert_eq!(
            generate(&["9876543210"], &["paytm"], Some(&template)),
            vec!["paytm:9876543210"]
        );
    }

    #[test]
    fn test_cross_product_order() {
        let numbers = ["9000000001", "9000000002"];
        let handles = ["b", "a", "c"];
        let ids = generate(&numbers, &handles, None);

        assert_eq!(ids.len(), numbers.len() * handles.len());
        assert_eq!(
            ids,
            vec![
                "9000000001@b",
                "9000000001@a",
                "9000000001@c",
                "9000000002@b",
                "9000000002@a",
                "9000000002@c",
            ]
        );
    }

    #[test]
    fn test_empty_inputs() {
        let none: [&str; 0] = [];
        assert!(generate(&none, &["paytm"], None).is_empty());
        assert!(generate(&["9876543210"], &none, None).is_empty());
    }

    #[test]
    fn test_constant_template_keeps_multiplicity() {
        let template = Template::parse("fixed");
        let ids = generate(&["1", "2"], &["a", "b"], Some(&template));
        assert_eq!(ids, vec!["fixed"; 4]);
    }

    #[test]
    fn test_decoration() {
        let decoration = Decoration::new(Some("+91".to_string()), Some("-v".to_string()));
        let numbers = decoration.apply_all(&["9876543210".to_string()]);
        assert_eq!(generate(&numbers, &["x"], None), vec!["+919876543210-v@x"]);
    }

    #[test]
    fn test_apply_all_without_decoration() {
        let decoration = Decoration::new(None, Some(String::new()));
        let numbers = vec!["9876543210".to_string(), "9123456789".to_string()];
        assert_eq!(decoration.apply_all(&numbers), numbers);
    }

    #[test]
    fn test_decoration_empty_strings_are_absent() {
        let decoration = Decoration::new(Some(String::new()), None);
        assert!(decoration.is_empty());
        assert_eq!(decoration.apply("9876543210"), "9876543210");

        let suffix_only = Decoration::new(None, Some("-ok".to_string()));
        assert_eq!(suffix_only.apply("9876543210"), "9876543210-ok");
    }
}
