//! Markdown rendering for structured documents.
//!
//! Produces the canonical markdown form of a document: section headings
//! with a configurable prefix depth, subheadings re-wrapped in italic
//! markers, meta lines verbatim, and bullet lists with the configured
//! marker. Inline emphasis markers inside block text pass through
//! unchanged, since they are already markdown.

use crate::error::Result;
use crate::model::{Block, Document};

use super::visitor::{DefaultVisitor, DocumentVisitor};
use super::{CleanupPipeline, RenderOptions, RenderResult, StructureStats};

/// Convert a document to Markdown.
pub fn to_markdown(doc: &Document, options: &RenderOptions) -> Result<String> {
    let renderer = MarkdownRenderer::new(options.clone());
    renderer.render(doc)
}

/// Convert a document to Markdown with structure statistics.
pub fn to_markdown_with_stats(doc: &Document, options: &RenderOptions) -> Result<RenderResult> {
    let renderer = MarkdownRenderer::new(options.clone());
    renderer.render_with_stats(doc)
}

/// Markdown renderer.
pub struct MarkdownRenderer {
    options: RenderOptions,
    stats: StructureStats,
}

impl MarkdownRenderer {
    /// Create a new Markdown renderer.
    pub fn new(options: RenderOptions) -> Self {
        Self {
            options,
            stats: StructureStats::new(),
        }
    }

    /// Render a document to Markdown.
    pub fn render(mut self, doc: &Document) -> Result<String> {
        self.render_internal(doc, &mut DefaultVisitor)
    }

    /// Render a document to Markdown, letting a visitor override
    /// individual blocks.
    pub fn render_with(
        mut self,
        doc: &Document,
        visitor: &mut dyn DocumentVisitor,
    ) -> Result<String> {
        self.render_internal(doc, visitor)
    }

    /// Render a document to Markdown with structure statistics.
    pub fn render_with_stats(mut self, doc: &Document) -> Result<RenderResult> {
        let content = self.render_internal(doc, &mut DefaultVisitor)?;
        self.stats.count_text(&content);
        Ok(RenderResult::new(content, doc.metadata.clone(), self.stats))
    }

    fn render_internal(
        &mut self,
        doc: &Document,
        visitor: &mut dyn DocumentVisitor,
    ) -> Result<String> {
        let mut output = String::new();

        if self.options.include_frontmatter {
            output.push_str(&doc.metadata.to_yaml_frontmatter());
        }

        for section in &doc.sections {
            self.stats.add_section();
            for block in &section.blocks {
                self.render_block(&mut output, block, visitor);
            }
        }

        if let Some(ref cleanup_options) = self.options.cleanup {
            let pipeline = CleanupPipeline::new(cleanup_options.clone());
            output = pipeline.process(&output);
        }

        Ok(output.trim().to_string())
    }

    fn render_block(&mut self, output: &mut String, block: &Block, visitor: &mut dyn DocumentVisitor) {
        let action = match block {
            Block::Heading { text } => visitor.visit_heading(text),
            Block::Subheading { text } => visitor.visit_subheading(text),
            Block::Meta { text } => visitor.visit_meta(text),
            Block::Paragraph { text } => visitor.visit_paragraph(text),
            Block::List { items } => visitor.visit_list(items),
        };

        if action.should_skip() {
            return;
        }
        if let Some(replacement) = action.replacement() {
            output.push_str(replacement);
            output.push_str("\n\n");
            return;
        }

        match block {
            Block::Heading { text } => {
                self.stats.add_heading();
                let prefix = "#".repeat(self.options.heading_level as usize);
                output.push_str(&prefix);
                output.push(' ');
                output.push_str(text);
                output.push_str("\n\n");
            }
            Block::Subheading { text } => {
                self.stats.add_subheading();
                output.push_str(&format!("*{}*\n\n", text));
            }
            Block::Meta { text } => {
                self.stats.add_meta();
                output.push_str(text);
                output.push_str("\n\n");
            }
            Block::Paragraph { text } => {
                self.stats.add_paragraph();
                output.push_str(text);
                output.push_str("\n\n");
            }
            Block::List { items } => {
                self.stats.add_list(items.len());
                for item in items {
                    output.push(self.options.list_marker);
                    output.push(' ');
                    output.push_str(item);
                    output.push('\n');
                }
                output.push('\n');
            }
        }
    }
}
