//! Line-level segmentation of freeform text into sections and blocks.
//!
//! The segmenter walks the input line by line, classifies each line, and
//! groups the results: a heading closes the open section and starts a new
//! one, adjacent bullet lines merge into a single list block, and
//! everything else appends to the section currently open. The whole pass
//! is a left-to-right fold over the lines with an explicit accumulator,
//! so repeated calls are independent and the function is total.

mod classify;

pub use classify::{LineClassifier, LineKind};

use crate::model::{Block, Document, Section};
use std::sync::OnceLock;

/// Segment text into sections using a shared classifier.
///
/// This is the core structuring operation: it never fails, and for any
/// input whose trimmed content is non-empty it returns at least one
/// section. See [`Segmenter::segment`] for the full contract.
pub fn segment(text: &str) -> Vec<Section> {
    shared().segment(text)
}

fn shared() -> &'static Segmenter {
    static SEGMENTER: OnceLock<Segmenter> = OnceLock::new();
    SEGMENTER.get_or_init(Segmenter::new)
}

/// Splits raw text into an ordered sequence of sections of typed blocks.
pub struct Segmenter {
    classifier: LineClassifier,
}

impl Segmenter {
    /// Create a segmenter with the standard classification patterns.
    pub fn new() -> Self {
        Self {
            classifier: LineClassifier::new(),
        }
    }

    /// Segment raw text into sections.
    ///
    /// Lines are split on `\n` (with any trailing `\r` dropped) and
    /// trimmed; blank lines neither open nor close anything. If nothing
    /// was captured — blank input, or input consisting only of
    /// whitespace lines — a single synthetic section holding the
    /// original untrimmed text as one paragraph is returned, so the
    /// result is always renderable.
    pub fn segment(&self, text: &str) -> Vec<Section> {
        let accumulator = text
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .fold(Accumulator::default(), |acc, line| self.step(acc, line));

        let sections = accumulator.finish(text);
        log::debug!("segmented input into {} section(s)", sections.len());
        sections
    }

    /// Segment raw text and wrap the result in a [`Document`].
    pub fn segment_document(&self, text: &str) -> Document {
        Document::from_sections(self.segment(text))
    }

    fn step(&self, mut acc: Accumulator, line: &str) -> Accumulator {
        match self.classifier.classify(line) {
            LineKind::Heading => {
                acc.start_section(self.classifier.heading_text(line));
            }
            LineKind::Subheading => {
                acc.push_block(Block::Subheading {
                    text: self.classifier.subheading_text(line),
                });
            }
            LineKind::Meta => {
                acc.push_block(Block::Meta {
                    text: line.to_string(),
                });
            }
            LineKind::Bullet => {
                acc.push_list_item(self.classifier.bullet_text(line));
            }
            LineKind::Paragraph => {
                acc.push_block(Block::paragraph(line));
            }
        }
        acc
    }
}

impl Default for Segmenter {
    fn default() -> Self {
        Self::new()
    }
}

/// Fold state: sections already closed plus the section currently open.
#[derive(Default)]
struct Accumulator {
    closed: Vec<Section>,
    open: Option<Section>,
}

impl Accumulator {
    /// Close the open section (kept only if non-empty) and start a new
    /// one whose first block is the heading.
    fn start_section(&mut self, heading: String) {
        self.close_open();
        self.open = Some(Section::with_heading(heading));
    }

    /// Append a block to the open section, opening one if needed.
    fn push_block(&mut self, block: Block) {
        self.open_mut().add_block(block);
    }

    /// Append a list item, merging into a trailing list block if the
    /// open section ends with one.
    fn push_list_item(&mut self, item: String) {
        let section = self.open_mut();
        match section.blocks.last_mut() {
            Some(Block::List { items }) => items.push(item),
            _ => section.add_block(Block::list_item(item)),
        }
    }

    fn open_mut(&mut self) -> &mut Section {
        self.open.get_or_insert_with(Section::new)
    }

    fn close_open(&mut self) {
        if let Some(section) = self.open.take() {
            if !section.is_empty() {
                self.closed.push(section);
            }
        }
    }

    /// Close any open section and return the result, substituting the
    /// single-paragraph fallback when nothing was captured.
    fn finish(mut self, raw: &str) -> Vec<Section> {
        self.close_open();
        if self.closed.is_empty() {
            vec![Section {
                blocks: vec![Block::paragraph(raw)],
            }]
        } else {
            self.closed
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_heading_starts_section() {
        let sections = segment("## Experience");
        assert_eq!(sections.len(), 1);
        assert_eq!(sections[0].heading(), Some("Experience"));
    }

    #[test]
    fn test_heading_closes_previous_section() {
        let sections = segment("## Experience\nDid things\n## Education\nLearned things");
        assert_eq!(sections.len(), 2);
        assert_eq!(sections[0].heading(), Some("Experience"));
        assert_eq!(sections[0].block_count(), 2);
        assert_eq!(sections[1].heading(), Some("Education"));
    }

    #[test]
    fn test_adjacent_bullets_merge() {
        let sections = segment("- A\n- B");
        assert_eq!(sections.len(), 1);
        assert_eq!(
            sections[0].blocks,
            vec![Block::List {
                items: vec!["A".to_string(), "B".to_string()],
            }]
        );
    }

    #[test]
    fn test_separated_bullets_do_not_merge() {
        let sections = segment("- A\nplain line\n- B");
        assert_eq!(sections.len(), 1);
        assert_eq!(sections[0].block_count(), 3);
        assert!(sections[0].blocks[0].is_list());
        assert!(!sections[0].blocks[1].is_list());
        assert!(sections[0].blocks[2].is_list());
    }

    #[test]
    fn test_blank_lines_do_not_split_lists() {
        // Blank lines are skipped entirely, so the bullets stay adjacent
        let sections = segment("- A\n\n- B");
        assert_eq!(
            sections[0].blocks,
            vec![Block::List {
                items: vec!["A".to_string(), "B".to_string()],
            }]
        );
    }

    #[test]
    fn test_content_before_first_heading() {
        let sections = segment("Jane Doe\n## Experience");
        assert_eq!(sections.len(), 2);
        assert_eq!(sections[0].heading(), None);
        assert_eq!(sections[1].heading(), Some("Experience"));
    }

    #[test]
    fn test_crlf_input() {
        let sections = segment("## Skills\r\n- Rust\r\n- SQL\r\n");
        assert_eq!(sections.len(), 1);
        assert_eq!(sections[0].heading(), Some("Skills"));
        assert_eq!(
            sections[0].blocks[1],
            Block::List {
                items: vec!["Rust".to_string(), "SQL".to_string()],
            }
        );
    }

    #[test]
    fn test_fallback_for_plain_sentence() {
        let input = "just one plain sentence with no structure";
        let sections = segment(input);
        assert_eq!(sections.len(), 1);
        assert_eq!(sections[0].blocks, vec![Block::paragraph(input)]);
    }

    #[test]
    fn test_fallback_for_whitespace_input() {
        let sections = segment("   \n\t\n");
        assert_eq!(sections.len(), 1);
        assert_eq!(sections[0].blocks, vec![Block::paragraph("   \n\t\n")]);
    }

    #[test]
    fn test_lone_heading_line_still_emitted() {
        let sections = segment("**Summary**");
        assert_eq!(sections.len(), 1);
        assert_eq!(sections[0].heading(), Some("Summary"));
    }

    #[test]
    fn test_every_section_is_non_empty() {
        let sections = segment("## A\n## B\n## C\ntext");
        assert!(sections.iter().all(|s| !s.is_empty()));
        assert_eq!(sections.len(), 3);
    }

    #[test]
    fn test_unbalanced_markers_fall_through_to_paragraph() {
        let sections = segment("**unclosed bold\n*unclosed italic");
        assert_eq!(sections.len(), 1);
        assert_eq!(
            sections[0].blocks,
            vec![
                Block::paragraph("**unclosed bold"),
                Block::paragraph("*unclosed italic"),
            ]
        );
    }
}
