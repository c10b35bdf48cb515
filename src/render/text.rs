//! Plain text rendering for structured documents.
//!
//! Flattens the structure to readable text with all emphasis markers
//! stripped. List items keep a bullet prefix so the output stays
//! scannable.

use crate::error::Result;
use crate::inline::EmphasisTokenizer;
use crate::model::{Block, Document};

use super::{CleanupPipeline, RenderOptions};

/// Convert a document to emphasis-stripped plain text.
pub fn to_text(doc: &Document, options: &RenderOptions) -> Result<String> {
    let tokenizer = EmphasisTokenizer::new();
    let mut output = String::new();

    for section in &doc.sections {
        for block in &section.blocks {
            match block {
                Block::Heading { text }
                | Block::Subheading { text }
                | Block::Meta { text }
                | Block::Paragraph { text } => {
                    output.push_str(&strip_emphasis(&tokenizer, text));
                    output.push('\n');
                }
                Block::List { items } => {
                    for item in items {
                        output.push(options.list_marker);
                        output.push(' ');
                        output.push_str(&strip_emphasis(&tokenizer, item));
                        output.push('\n');
                    }
                }
            }
        }
        output.push('\n');
    }

    if let Some(ref cleanup_options) = options.cleanup {
        let pipeline = CleanupPipeline::new(cleanup_options.clone());
        output = pipeline.process(&output);
    }

    Ok(output.trim().to_string())
}

fn strip_emphasis(tokenizer: &EmphasisTokenizer, text: &str) -> String {
    tokenizer
        .tokenize(text)
        .iter()
        .map(|fragment| fragment.text())
        .collect()
}
