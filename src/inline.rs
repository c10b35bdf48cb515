//! Inline emphasis tokenization.
//!
//! Scans one line of text for `**bold**` and `*italic*` spans and splits
//! it into an ordered sequence of renderable fragments. The grammar is
//! flat and non-nesting, and the bold pattern wins over italic at each
//! scan position, so `**text**` is never read as an empty italic span.

use crate::model::EmphasisFragment;
use regex::Regex;
use std::sync::OnceLock;

/// Tokenize a line into plain, bold, and italic fragments using a
/// shared tokenizer.
///
/// Never fails: unmatched markers are carried through as plain text,
/// and an empty line yields an empty sequence.
pub fn tokenize(line: &str) -> Vec<EmphasisFragment> {
    shared().tokenize(line)
}

fn shared() -> &'static EmphasisTokenizer {
    static TOKENIZER: OnceLock<EmphasisTokenizer> = OnceLock::new();
    TOKENIZER.get_or_init(EmphasisTokenizer::new)
}

/// Splits a line into plain-text and emphasis-marked fragments.
pub struct EmphasisTokenizer {
    token: Regex,
}

impl EmphasisTokenizer {
    /// Create a tokenizer with the standard emphasis patterns.
    pub fn new() -> Self {
        Self {
            // Bold first: two markers, any non-asterisk inner text.
            // Italic requires the first inner character to be neither
            // whitespace nor an asterisk, so stray asterisks next to
            // spaces ("3 * 4") stay plain text.
            token: Regex::new(r"\*\*[^*]+\*\*|\*[^*\s][^*]*\*").unwrap(),
        }
    }

    /// Tokenize one line into an ordered fragment sequence.
    pub fn tokenize(&self, line: &str) -> Vec<EmphasisFragment> {
        let mut fragments = Vec::new();
        let mut cursor = 0;

        for found in self.token.find_iter(line) {
            if found.start() > cursor {
                fragments.push(EmphasisFragment::plain(&line[cursor..found.start()]));
            }

            let token = found.as_str();
            if let Some(inner) = token
                .strip_prefix("**")
                .and_then(|rest| rest.strip_suffix("**"))
            {
                fragments.push(EmphasisFragment::bold(inner));
            } else {
                fragments.push(EmphasisFragment::italic(&token[1..token.len() - 1]));
            }

            cursor = found.end();
        }

        if cursor < line.len() {
            fragments.push(EmphasisFragment::plain(&line[cursor..]));
        }

        fragments
    }
}

impl Default for EmphasisTokenizer {
    fn default() -> Self {
        Self::new()
    }
}
