//! Document-level types.

use super::Section;
use serde::{Deserialize, Serialize};

/// A structured document: the ordered sections recovered from one block
/// of freeform text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    /// Document metadata (display title, etc.)
    pub metadata: Metadata,

    /// Sections in document order
    pub sections: Vec<Section>,
}

impl Document {
    /// Create a new empty document.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a document from already-segmented sections.
    pub fn from_sections(sections: Vec<Section>) -> Self {
        Self {
            metadata: Metadata::default(),
            sections,
        }
    }

    /// Get the number of sections.
    pub fn section_count(&self) -> usize {
        self.sections.len()
    }

    /// Get the total number of blocks across all sections.
    pub fn block_count(&self) -> usize {
        self.sections.iter().map(Section::block_count).sum()
    }

    /// Add a section to the document.
    pub fn add_section(&mut self, section: Section) {
        self.sections.push(section);
    }

    /// Check if the document has any sections.
    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    /// Get plain text content of the entire document.
    pub fn plain_text(&self) -> String {
        self.sections
            .iter()
            .map(Section::plain_text)
            .collect::<Vec<_>>()
            .join("\n\n")
    }
}

/// Document metadata.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Metadata {
    /// Display title for rendered output
    pub title: Option<String>,
}

impl Metadata {
    /// Create metadata with a title.
    pub fn with_title(title: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
        }
    }

    /// Convert metadata to YAML frontmatter format.
    pub fn to_yaml_frontmatter(&self) -> String {
        let mut lines = vec!["---".to_string()];
        if let Some(ref title) = self.title {
            lines.push(format!("title: \"{}\"", escape_yaml(title)));
        }
        lines.push("---".to_string());
        lines.push(String::new());
        lines.join("\n")
    }
}

/// Escape special characters for YAML double-quoted strings.
fn escape_yaml(s: &str) -> String {
    s.replace('\\', "\\\\").replace('"', "\\\"")
}
