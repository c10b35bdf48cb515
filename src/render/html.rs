//! HTML rendering for structured documents.
//!
//! Maps each block to the same elements the formatted résumé view uses:
//! headings become `<h3>`, subheadings an emphasized subtitle `<div>`,
//! meta lines a muted `<div>`, paragraphs `<p>`, and lists `<ul>`.
//! Inline emphasis fragments render as `<strong>` and `<em>` spans.

use html_escape::encode_text;

use crate::error::Result;
use crate::inline::EmphasisTokenizer;
use crate::model::{Block, Document, EmphasisFragment};

use super::visitor::{DefaultVisitor, DocumentVisitor};
use super::{CleanupPipeline, RenderOptions, RenderResult, StructureStats};

/// Convert a document to HTML.
pub fn to_html(doc: &Document, options: &RenderOptions) -> Result<String> {
    let renderer = HtmlRenderer::new(options.clone());
    renderer.render(doc)
}

/// Convert a document to HTML with structure statistics.
pub fn to_html_with_stats(doc: &Document, options: &RenderOptions) -> Result<RenderResult> {
    let renderer = HtmlRenderer::new(options.clone());
    renderer.render_with_stats(doc)
}

/// HTML renderer.
pub struct HtmlRenderer {
    options: RenderOptions,
    tokenizer: EmphasisTokenizer,
    stats: StructureStats,
}

impl HtmlRenderer {
    /// Create a new HTML renderer.
    pub fn new(options: RenderOptions) -> Self {
        Self {
            options,
            tokenizer: EmphasisTokenizer::new(),
            stats: StructureStats::new(),
        }
    }

    /// Render a document to HTML.
    pub fn render(mut self, doc: &Document) -> Result<String> {
        self.render_internal(doc, &mut DefaultVisitor)
    }

    /// Render a document to HTML, letting a visitor override individual
    /// blocks.
    pub fn render_with(mut self, doc: &Document, visitor: &mut dyn DocumentVisitor) -> Result<String> {
        self.render_internal(doc, visitor)
    }

    /// Render a document to HTML with structure statistics.
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

        if let Some(ref title) = doc.metadata.title {
            output.push_str(&format!(
                "<h1 class=\"{}title\">{}</h1>\n",
                self.options.class_prefix,
                encode_text(title)
            ));
        }

        for section in &doc.sections {
            self.stats.add_section();
            output.push_str("<section>\n");
            for block in &section.blocks {
                self.render_block(&mut output, block, visitor);
            }
            output.push_str("</section>\n");
        }

        if let Some(ref cleanup_options) = self.options.cleanup {
            let pipeline = CleanupPipeline::new(cleanup_options.clone());
            output = pipeline.process(&output);
        }

        Ok(output.trim_end().to_string())
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
            output.push('\n');
            return;
        }

        match block {
            Block::Heading { text } => {
                self.stats.add_heading();
                output.push_str(&format!("<h3>{}</h3>\n", self.inline(text)));
            }
            Block::Subheading { text } => {
                self.stats.add_subheading();
                output.push_str(&format!(
                    "<div class=\"{}subtitle\"><em>{}</em></div>\n",
                    self.options.class_prefix,
                    self.inline(text)
                ));
            }
            Block::Meta { text } => {
                self.stats.add_meta();
                output.push_str(&format!(
                    "<div class=\"{}meta\">{}</div>\n",
                    self.options.class_prefix,
                    self.inline(text)
                ));
            }
            Block::Paragraph { text } => {
                self.stats.add_paragraph();
                output.push_str(&format!("<p>{}</p>\n", self.inline(text)));
            }
            Block::List { items } => {
                self.stats.add_list(items.len());
                output.push_str("<ul>\n");
                for item in items {
                    output.push_str(&format!("<li>{}</li>\n", self.inline(item)));
                }
                output.push_str("</ul>\n");
            }
        }
    }

    /// Render one line's emphasis fragments as inline HTML.
    fn inline(&self, text: &str) -> String {
        let mut html = String::with_capacity(text.len());
        for fragment in self.tokenizer.tokenize(text) {
            match fragment {
                EmphasisFragment::Plain { text } => {
                    html.push_str(&encode_text(&text));
                }
                EmphasisFragment::Bold { text } => {
                    html.push_str(&format!("<strong>{}</strong>", encode_text(&text)));
                }
                EmphasisFragment::Italic { text } => {
                    html.push_str(&format!("<em>{}</em>", encode_text(&text)));
                }
            }
        }
        html
    }
}
