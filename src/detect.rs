//! Structure detection for raw text.
//!
//! Callers that offer both a formatted view and a plain-text fallback
//! can probe the input first: text with no recognizable structure is
//! better shown verbatim than pushed through the segmenter only to come
//! back as one long paragraph.

use crate::segment::{LineClassifier, LineKind};
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

/// Counts of structurally significant lines found in a text.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StructureHints {
    /// Lines that would classify as headings
    pub heading_lines: usize,

    /// Lines that would classify as subheadings
    pub subheading_lines: usize,

    /// Lines that would classify as date-range metadata
    pub meta_lines: usize,

    /// Lines that would classify as bullet items
    pub bullet_lines: usize,

    /// Remaining non-empty lines (paragraph prose)
    pub paragraph_lines: usize,
}

impl StructureHints {
    /// Total number of lines carrying structure markers.
    pub fn structured_lines(&self) -> usize {
        self.heading_lines + self.subheading_lines + self.meta_lines + self.bullet_lines
    }

    /// Total number of non-empty lines examined.
    pub fn total_lines(&self) -> usize {
        self.structured_lines() + self.paragraph_lines
    }

    /// Check if any structure marker was found.
    pub fn any(&self) -> bool {
        self.structured_lines() > 0
    }
}

/// Count structurally significant lines in a text.
pub fn structure_hints(text: &str) -> StructureHints {
    let classifier = shared_classifier();
    let mut hints = StructureHints::default();

    for line in text.lines().map(str::trim).filter(|l| !l.is_empty()) {
        match classifier.classify(line) {
            LineKind::Heading => hints.heading_lines += 1,
            LineKind::Subheading => hints.subheading_lines += 1,
            LineKind::Meta => hints.meta_lines += 1,
            LineKind::Bullet => hints.bullet_lines += 1,
            LineKind::Paragraph => hints.paragraph_lines += 1,
        }
    }

    hints
}

/// Check whether a text contains any recognizable structure markers.
pub fn looks_structured(text: &str) -> bool {
    structure_hints(text).any()
}

fn shared_classifier() -> &'static LineClassifier {
    static CLASSIFIER: OnceLock<LineClassifier> = OnceLock::new();
    CLASSIFIER.get_or_init(LineClassifier::new)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_structured_resume() {
        let text = "## Experience\n*Acme Corp*\nJan 2019 - Present\n- Shipped things\n- Fixed things\nSome prose.";
        let hints = structure_hints(text);
        assert_eq!(hints.heading_lines, 1);
        assert_eq!(hints.subheading_lines, 1);
        assert_eq!(hints.meta_lines, 1);
        assert_eq!(hints.bullet_lines, 2);
        assert_eq!(hints.paragraph_lines, 1);
        assert!(looks_structured(text));
    }

    #[test]
    fn test_plain_prose_has_no_structure() {
        let text = "I am a sentence.\nI am another sentence.";
        assert!(!looks_structured(text));
        assert_eq!(structure_hints(text).total_lines(), 2);
    }

    #[test]
    fn test_empty_text() {
        let hints = structure_hints("");
        assert_eq!(hints.total_lines(), 0);
        assert!(!hints.any());
    }
}
