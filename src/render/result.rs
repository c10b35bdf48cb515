//! Rendering result with metadata and statistics.

use crate::model::Metadata;
use serde::{Deserialize, Serialize};

/// Result of rendering a document, including content and statistics.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RenderResult {
    /// The rendered content (HTML, Markdown, etc.)
    pub content: String,

    /// Document metadata (copied from the source document)
    pub metadata: Metadata,

    /// Structure statistics
    pub stats: StructureStats,
}

impl RenderResult {
    /// Create a new render result.
    pub fn new(content: String, metadata: Metadata, stats: StructureStats) -> Self {
        Self {
            content,
            metadata,
            stats,
        }
    }

    /// Get the content length in bytes.
    pub fn content_len(&self) -> usize {
        self.content.len()
    }
}

/// Statistics collected while rendering a structured document.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StructureStats {
    /// Number of sections rendered
    pub section_count: u32,

    /// Number of headings
    pub heading_count: u32,

    /// Number of subheadings
    pub subheading_count: u32,

    /// Number of date-range lines
    pub meta_count: u32,

    /// Number of paragraphs
    pub paragraph_count: u32,

    /// Number of list blocks
    pub list_count: u32,

    /// Number of list items
    pub list_item_count: u32,

    /// Approximate word count (whitespace-separated tokens)
    pub word_count: u32,

    /// Character count (excluding whitespace)
    pub char_count: u32,
}

impl StructureStats {
    /// Create new empty statistics.
    pub fn new() -> Self {
        Self::default()
    }

    /// Increment section count.
    pub fn add_section(&mut self) {
        self.section_count += 1;
    }

    /// Increment heading count.
    pub fn add_heading(&mut self) {
        self.heading_count += 1;
    }

    /// Increment subheading count.
    pub fn add_subheading(&mut self) {
        self.subheading_count += 1;
    }

    /// Increment meta count.
    pub fn add_meta(&mut self) {
        self.meta_count += 1;
    }

    /// Increment paragraph count.
    pub fn add_paragraph(&mut self) {
        self.paragraph_count += 1;
    }

    /// Record a list block with the given number of items.
    pub fn add_list(&mut self, items: usize) {
        self.list_count += 1;
        self.list_item_count += items as u32;
    }

    /// Count words and non-whitespace characters in final content.
    pub fn count_text(&mut self, text: &str) {
        self.word_count = text.split_whitespace().count() as u32;
        self.char_count = text.chars().filter(|c| !c.is_whitespace()).count() as u32;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stats_accumulation() {
        let mut stats = StructureStats::new();
        stats.add_section();
        stats.add_heading();
        stats.add_list(3);

        assert_eq!(stats.section_count, 1);
        assert_eq!(stats.heading_count, 1);
        assert_eq!(stats.list_count, 1);
        assert_eq!(stats.list_item_count, 3);
    }

    #[test]
    fn test_count_text() {
        let mut stats = StructureStats::new();
        stats.count_text("two words");
        assert_eq!(stats.word_count, 2);
        assert_eq!(stats.char_count, 8);
    }
}
