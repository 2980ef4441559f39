//! Identifier templates.
//!
//! A template is literal text interleaved with the `{number}` and `{handle}`
//! placeholders, e.g. `{number}@{handle}` or `{handle}:{number}`.

use serde::Serialize;

/// Placeholder replaced by the (decorated) phone number.
pub const NUMBER_PLACEHOLDER: &str = "{number}";

/// Placeholder replaced by the handle.
pub const HANDLE_PLACEHOLDER: &str = "{handle}";

/// Format used when no custom template is supplied.
pub const DEFAULT_TEMPLATE: &str = "{number}@{handle}";

const PREVIEW_NUMBER: &str = "9876543210";
const PREVIEW_HANDLE: &str = "paytm";

/// Parsed template segment.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    /// Literal text.
    Literal(String),
    /// Phone number slot.
    Number,
    /// Handle slot.
    Handle,
}

/// Parsed identifier template.
///
/// Any text other than the two placeholders, including stray braces, is kept
/// verbatim. A template without placeholders is valid and renders to itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template {
    source: String,
    segments: Vec<Segment>,
}

impl Template {
    /// Parse a template string. Never fails.
    #[must_use]
    pub fn parse(source: &str) -> Self {
        let mut segments = Vec::new();
        let mut literal = String::new();
        let mut rest = source;

        while let Some(c) = rest.chars().next() {
            let slot = if rest.starts_with(NUMBER_PLACEHOLDER) {
                Some((Segment::Number, NUMBER_PLACEHOLDER.len()))
            } else if rest.starts_with(HANDLE_PLACEHOLDER) {
                Some((Segment::Handle, HANDLE_PLACEHOLDER.len()))
            } else {
                None
            };

            match slot {
                Some((segment, len)) => {
                    if !literal.is_empty() {
                        segments.push(Segment::Literal(std::mem::take(&mut literal)));
                    }
                    segments.push(segment);
                    rest = &rest[len..];
                }
                None => {
                    literal.push(c);
                    rest = &rest[c.len_utf8()..];
                }
            }
        }

        if !literal.is_empty() {
            segments.push(Segment::Literal(literal));
        }

        Self {
            source: source.to_string(),
            segments,
        }
    }

    /// The original template text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.source
    }

    /// Whether the template contains `{number}`.
    #[must_use]
    pub fn has_number(&self) -> bool {
        self.segments.contains(&Segment::Number)
    }

    /// Whether the template contains `{handle}`.
    #[must_use]
    pub fn has_handle(&self) -> bool {
        self.segments.contains(&Segment::Handle)
    }

    /// Substitute one number and one handle.
    ///
    /// Substituted values are never re-scanned for placeholders.
    #[must_use]
    pub fn render(&self, number: &str, handle: &str) -> String {
        let mut out = String::with_capacity(self.source.len() + number.len() + handle.len());
        for segment in &self.segments {
            match segment {
                Segment::Literal(s) => out.push_str(s),
                Segment::Number => out.push_str(number),
                Segment::Handle => out.push_str(handle),
            }
        }
        out
    }

    /// Render the sample pair shown to users while editing a template.
    #[must_use]
    pub fn preview(&self) -> String {
        self.render(PREVIEW_NUMBER, PREVIEW_HANDLE)
    }
}

impl Default for Template {
    fn default() -> Self {
        Self::parse(DEFAULT_TEMPLATE)
    }
}

/// Template preview returned to clients.
#[derive(Debug, Clone, Serialize)]
pub struct TemplatePreview {
    /// Template text.
    pub template: String,
    /// Rendered sample.
    pub example: String,
    /// Whether `{number}` appears.
    pub has_number: bool,
    /// Whether `{handle}` appears.
    pub has_handle: bool,
}

impl From<&Template> for TemplatePreview {
    fn from(template: &Template) -> Self {
        Self {
            template: template.as_str().to_string(),
            example: template.preview(),
            has_number: template.has_number(),
            has_handle: template.has_handle(),
        }
    }
}
