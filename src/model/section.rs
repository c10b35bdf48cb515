//! Section and block-level types.

use serde::{Deserialize, Serialize};

/// An ordered group of blocks, opened by a heading (or the first content
/// line) and closed by the next heading or end of input.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Section {
    /// Content blocks in document order
    pub blocks: Vec<Block>,
}

impl Section {
    /// Create a new empty section.
    pub fn new() -> Self {
        Self { blocks: Vec::new() }
    }

    /// Create a section whose first block is a heading.
    pub fn with_heading(text: impl Into<String>) -> Self {
        Self {
            blocks: vec![Block::Heading { text: text.into() }],
        }
    }

    /// Add a block to the section.
    pub fn add_block(&mut self, block: Block) {
        self.blocks.push(block);
    }

    /// Check if the section has no blocks.
    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    /// Get the number of blocks in the section.
    pub fn block_count(&self) -> usize {
        self.blocks.len()
    }

    /// Get the section heading text, if the section starts with one.
    pub fn heading(&self) -> Option<&str> {
        match self.blocks.first() {
            Some(Block::Heading { text }) => Some(text),
            _ => None,
        }
    }

    /// Get the last block, if any.
    pub fn last_block(&self) -> Option<&Block> {
        self.blocks.last()
    }

    /// Get plain text content of the section.
    pub fn plain_text(&self) -> String {
        self.blocks
            .iter()
            .map(Block::plain_text)
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// One typed unit of structured content within a section.
///
/// The `type` tag and field names match the JSON shape consumed by
/// downstream presentation layers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Block {
    /// A section title
    Heading {
        /// Title text with wrapping markers stripped
        text: String,
    },

    /// A role or organization line, rendered emphasized
    Subheading {
        /// Subtitle text with wrapping markers stripped
        text: String,
    },

    /// A date-range or tenure line, kept verbatim
    Meta {
        /// The full line as it appeared in the input
        text: String,
    },

    /// A free-form prose line
    Paragraph {
        /// Trimmed line text
        text: String,
    },

    /// One or more adjacent bullet lines
    List {
        /// Item texts with bullet markers stripped, in input order
        items: Vec<String>,
    },
}

impl Block {
    /// Create a paragraph block.
    pub fn paragraph(text: impl Into<String>) -> Self {
        Block::Paragraph { text: text.into() }
    }

    /// Create a list block with a single item.
    pub fn list_item(item: impl Into<String>) -> Self {
        Block::List {
            items: vec![item.into()],
        }
    }

    /// Check if this block is a heading.
    pub fn is_heading(&self) -> bool {
        matches!(self, Block::Heading { .. })
    }

    /// Check if this block is a list.
    pub fn is_list(&self) -> bool {
        matches!(self, Block::List { .. })
    }

    /// Get the text of a single-text block, or `None` for lists.
    pub fn text(&self) -> Option<&str> {
        match self {
            Block::Heading { text }
            | Block::Subheading { text }
            | Block::Meta { text }
            | Block::Paragraph { text } => Some(text),
            Block::List { .. } => None,
        }
    }

    /// Get plain text content of the block.
    ///
    /// List items are joined with newlines; emphasis markers are kept
    /// as-is (stripping them is the renderer's job).
    pub fn plain_text(&self) -> String {
        match self {
            Block::Heading { text }
            | Block::Subheading { text }
            | Block::Meta { text }
            | Block::Paragraph { text } => text.clone(),
            Block::List { items } => items.join("\n"),
        }
    }
}
