//! # resumark
//!
//! Structure freeform resume text into sections, typed blocks, and
//! inline emphasis spans.
//!
//! AI rewriting tools return a resume as one flat block of lightly
//! marked-up text. This library reconstructs a renderable document from
//! it using line-level heuristics — headings, subheadings, date-range
//! lines, paragraphs, and bullet lists — and tokenizes inline
//! `**bold**` / `*italic*` spans for rendering.
//!
//! ## Quick Start
//!
//! ```
//! use resumark::{segment, tokenize};
//!
//! let sections = segment("## Experience\n- Built systems\n- Shipped features");
//! assert_eq!(sections.len(), 1);
//! assert_eq!(sections[0].heading(), Some("Experience"));
//!
//! let fragments = tokenize("**Senior** Engineer");
//! assert_eq!(fragments[0].text(), "Senior");
//! ```
//!
//! ## Features
//!
//! - **Total transforms**: segmentation and tokenization never fail,
//!   for any input string
//! - **Multiple output formats**: HTML, Markdown, plain text, JSON
//! - **Structure detection**: probe text for markers before choosing a
//!   formatted or plain view
//! - **Cleanup pipeline**: output normalization for downstream
//!   consumers

pub mod detect;
pub mod error;
pub mod inline;
pub mod model;
pub mod render;
pub mod segment;

// Re-export commonly used types
pub use detect::{looks_structured, structure_hints, StructureHints};
pub use error::{Error, Result};
pub use inline::{tokenize, EmphasisTokenizer};
pub use model::{Block, Document, EmphasisFragment, Metadata, Section};
pub use render::{
    CleanupOptions, CleanupPreset, JsonFormat, RenderOptions, RenderResult, StructureStats,
};
pub use segment::{segment, LineClassifier, LineKind, Segmenter};

use std::path::Path;

/// Read a UTF-8 text file and segment it into a document.
///
/// # Example
///
/// ```no_run
/// use resumark::segment_file;
///
/// let doc = segment_file("adapted-cv.txt").unwrap();
/// println!("Sections: {}", doc.section_count());
/// ```
pub fn segment_file<P: AsRef<Path>>(path: P) -> Result<Document> {
    let text = std::fs::read_to_string(path)?;
    Ok(Document::from_sections(segment(&text)))
}

/// Segment text and render it as HTML.
///
/// # Example
///
/// ```
/// use resumark::{to_html, RenderOptions};
///
/// let html = to_html("## Skills\n- Rust", &RenderOptions::default()).unwrap();
/// assert!(html.contains("<h3>Skills</h3>"));
/// ```
pub fn to_html(text: &str, options: &RenderOptions) -> Result<String> {
    let doc = Document::from_sections(segment(text));
    render::to_html(&doc, options)
}

/// Segment text and render it as canonical Markdown.
pub fn to_markdown(text: &str, options: &RenderOptions) -> Result<String> {
    let doc = Document::from_sections(segment(text));
    render::to_markdown(&doc, options)
}

/// Segment text and render it as emphasis-stripped plain text.
pub fn to_text(text: &str, options: &RenderOptions) -> Result<String> {
    let doc = Document::from_sections(segment(text));
    render::to_text(&doc, options)
}

/// Segment text and render it as JSON.
pub fn to_json(text: &str, format: JsonFormat) -> Result<String> {
    let doc = Document::from_sections(segment(text));
    render::to_json(&doc, format)
}

/// Builder for segmenting and rendering resume text.
///
/// # Example
///
/// ```
/// use resumark::{CleanupPreset, Resumark};
///
/// let html = Resumark::new()
///     .with_title("Curriculum Vitae")
///     .with_cleanup(CleanupPreset::Standard)
///     .segment("## Experience\n- Built systems")
///     .to_html()
///     .unwrap();
/// assert!(html.contains("Curriculum Vitae"));
/// ```
pub struct Resumark {
    title: Option<String>,
    render_options: RenderOptions,
}

impl Resumark {
    /// Create a new builder.
    pub fn new() -> Self {
        Self {
            title: None,
            render_options: RenderOptions::default(),
        }
    }

    /// Set the document title used by renderers.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Set cleanup preset for rendered output.
    pub fn with_cleanup(mut self, preset: CleanupPreset) -> Self {
        self.render_options = self.render_options.with_cleanup_preset(preset);
        self
    }

    /// Enable YAML frontmatter in Markdown output.
    pub fn with_frontmatter(mut self) -> Self {
        self.render_options = self.render_options.with_frontmatter(true);
        self
    }

    /// Set the Markdown list marker character.
    pub fn with_list_marker(mut self, marker: char) -> Self {
        self.render_options = self.render_options.with_list_marker(marker);
        self
    }

    /// Segment text and return a result wrapper.
    pub fn segment(self, text: &str) -> ResumarkResult {
        let mut document = Document::from_sections(segment(text));
        document.metadata.title = self.title;
        ResumarkResult {
            document,
            render_options: self.render_options,
        }
    }
}

impl Default for Resumark {
    fn default() -> Self {
        Self::new()
    }
}

/// Result of segmenting resume text.
pub struct ResumarkResult {
    /// The structured document
    pub document: Document,
    /// Render options to use
    render_options: RenderOptions,
}

impl ResumarkResult {
    /// Convert to HTML.
    pub fn to_html(&self) -> Result<String> {
        render::to_html(&self.document, &self.render_options)
    }

    /// Convert to Markdown.
    pub fn to_markdown(&self) -> Result<String> {
        render::to_markdown(&self.document, &self.render_options)
    }

    /// Convert to emphasis-stripped plain text.
    pub fn to_text(&self) -> Result<String> {
        render::to_text(&self.document, &self.render_options)
    }

    /// Convert to JSON.
    pub fn to_json(&self, format: JsonFormat) -> Result<String> {
        render::to_json(&self.document, format)
    }

    /// Get plain text content without emphasis stripping.
    pub fn plain_text(&self) -> String {
        self.document.plain_text()
    }

    /// Get the document.
    pub fn document(&self) -> &Document {
        &self.document
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_threads_title() {
        let result = Resumark::new()
            .with_title("Curriculum Vitae")
            .segment("## Experience");
        assert_eq!(
            result.document().metadata.title.as_deref(),
            Some("Curriculum Vitae")
        );
    }

    #[test]
    fn test_builder_render_options() {
        let builder = Resumark::new().with_frontmatter().with_list_marker('•');
        assert!(builder.render_options.include_frontmatter);
        assert_eq!(builder.render_options.list_marker, '•');
    }

    #[test]
    fn test_convenience_functions_agree() {
        let input = "## Skills\n- Rust\n- SQL";
        let doc = Document::from_sections(segment(input));

        assert_eq!(
            to_html(input, &RenderOptions::default()).unwrap(),
            render::to_html(&doc, &RenderOptions::default()).unwrap()
        );
        assert_eq!(
            to_json(input, JsonFormat::Compact).unwrap(),
            render::to_json(&doc, JsonFormat::Compact).unwrap()
        );
    }

    #[test]
    fn test_segment_file_missing_path() {
        let result = segment_file("definitely/not/a/real/file.txt");
        assert!(matches!(result, Err(Error::Io(_))));
    }
}
