//! Inline emphasis fragment types.

use serde::{Deserialize, Serialize};

/// A minimal renderable unit of one line: plain text, a bold span, or an
/// italic span. An ordered sequence of fragments forms the line's
/// renderable content.
///
/// The grammar is flat: bold inside italic (or vice versa) is not
/// modeled.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum EmphasisFragment {
    /// Literal text with no emphasis
    Plain {
        /// The text content
        text: String,
    },

    /// A bold span with the `**` markers stripped
    Bold {
        /// The inner text
        text: String,
    },

    /// An italic span with the `*` markers stripped
    Italic {
        /// The inner text
        text: String,
    },
}

impl EmphasisFragment {
    /// Create a plain fragment.
    pub fn plain(text: impl Into<String>) -> Self {
        EmphasisFragment::Plain { text: text.into() }
    }

    /// Create a bold fragment.
    pub fn bold(text: impl Into<String>) -> Self {
        EmphasisFragment::Bold { text: text.into() }
    }

    /// Create an italic fragment.
    pub fn italic(text: impl Into<String>) -> Self {
        EmphasisFragment::Italic { text: text.into() }
    }

    /// Get the fragment's text content (markers already stripped).
    pub fn text(&self) -> &str {
        match self {
            EmphasisFragment::Plain { text }
            | EmphasisFragment::Bold { text }
            | EmphasisFragment::Italic { text } => text,
        }
    }

    /// Check if this fragment carries emphasis.
    pub fn is_emphasized(&self) -> bool {
        !matches!(self, EmphasisFragment::Plain { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fragment_text() {
        assert_eq!(EmphasisFragment::plain("a").text(), "a");
        assert_eq!(EmphasisFragment::bold("b").text(), "b");
        assert_eq!(EmphasisFragment::italic("c").text(), "c");
    }

    #[test]
    fn test_fragment_emphasis_flag() {
        assert!(!EmphasisFragment::plain("a").is_emphasized());
        assert!(EmphasisFragment::bold("b").is_emphasized());
        assert!(EmphasisFragment::italic("c").is_emphasized());
    }

    #[test]
    fn test_fragment_json_shape() {
        let bold = EmphasisFragment::bold("Senior");
        let json = serde_json::to_string(&bold).unwrap();
        assert_eq!(json, r#"{"type":"bold","text":"Senior"}"#);
    }
}
