//! Plain text export.

/// One identifier per line, no trailing newline.
#[must_use]
pub fn to_text(vpas: &[String]) -> String {
    vpas.join("\n")
}
