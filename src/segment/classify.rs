//! Line classification predicates.
//!
//! Each trimmed non-empty line gets exactly one classification. The
//! priority order is significant: a line can satisfy several predicates
//! (a bolded line containing a year matches both the heading and the
//! date patterns), so the first match wins.

use regex::Regex;

/// Classification of one trimmed, non-empty input line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    /// A section title (`## Title` or a fully bold-wrapped line)
    Heading,
    /// A fully italic-wrapped line (role or organization)
    Subheading,
    /// A date-range line, kept verbatim
    Meta,
    /// A bullet line (`- item` or `• item`)
    Bullet,
    /// Anything else
    Paragraph,
}

/// Compiled line classification patterns.
///
/// Compile once and reuse; classification itself is allocation-free.
pub struct LineClassifier {
    md_heading: Regex,
    bold_line: Regex,
    bold_wrap: Regex,
    italic_line: Regex,
    italic_wrap: Regex,
    date_range: Regex,
    bullet: Regex,
}

impl LineClassifier {
    /// Create a classifier with the standard patterns.
    pub fn new() -> Self {
        Self {
            md_heading: Regex::new(r"^##\s+").unwrap(),
            bold_line: Regex::new(r"^\*\*[^*]+\*\*$").unwrap(),
            bold_wrap: Regex::new(r"^\*\*|\*\*$").unwrap(),
            italic_line: Regex::new(r"^\*[^*]+\*$").unwrap(),
            italic_wrap: Regex::new(r"^\*|\*$").unwrap(),
            // Two alternatives: bare year ranges ("2019 - 2021",
            // "2019 – Present") and month-prefixed ranges
            // ("Jan 2019 - Present", "March 2020 - June 2022").
            // Month names are 3-9 letters, matched case-insensitively.
            date_range: Regex::new(
                r"(?i)(\b\d{4}\b\s*[–-]\s*(?:\b\d{4}\b|Present))|([A-Za-z]{3,9}\s+\d{4}\s*[–-]\s*(?:[A-Za-z]{3,9}\s+)?(?:\d{4}|Present))",
            )
            .unwrap(),
            bullet: Regex::new(r"^[-•]\s+").unwrap(),
        }
    }

    /// Classify a trimmed, non-empty line.
    pub fn classify(&self, line: &str) -> LineKind {
        if self.is_heading(line) {
            LineKind::Heading
        } else if self.italic_line.is_match(line) {
            LineKind::Subheading
        } else if self.date_range.is_match(line) {
            LineKind::Meta
        } else if self.bullet.is_match(line) {
            LineKind::Bullet
        } else {
            LineKind::Paragraph
        }
    }

    /// Check if a line is a heading (`## Title` prefix or `**Title**`).
    pub fn is_heading(&self, line: &str) -> bool {
        self.md_heading.is_match(line) || self.bold_line.is_match(line)
    }

    /// Extract heading text by stripping the `## ` prefix and the
    /// wrapping `**` markers.
    pub fn heading_text(&self, line: &str) -> String {
        let without_prefix = self.md_heading.replace(line, "");
        self.bold_wrap.replace_all(&without_prefix, "").into_owned()
    }

    /// Extract subheading text by stripping the wrapping `*` markers.
    pub fn subheading_text(&self, line: &str) -> String {
        self.italic_wrap.replace_all(line, "").into_owned()
    }

    /// Extract a bullet item's text by stripping the marker and the
    /// whitespace after it.
    pub fn bullet_text(&self, line: &str) -> String {
        self.bullet.replace(line, "").into_owned()
    }
}

impl Default for LineClassifier {
    fn default() -> Self {
        Self::new()
    }
}
