//! Output cleanup pipeline.
//!
//! Normalizes rendered output strings. Cleanup never runs on the
//! segmenter's input: classification operates on the text exactly as
//! supplied, and only the rendered result is polished.

use regex::Regex;
use unicode_normalization::UnicodeNormalization;

/// Cleanup preset levels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CleanupPreset {
    /// Minimal cleanup: Unicode NFC normalization and trailing
    /// whitespace removal
    Minimal,
    /// Standard cleanup: NFC + replacement-char removal + blank line
    /// capping
    #[default]
    Standard,
    /// Aggressive cleanup: maximum compaction for machine consumers
    Aggressive,
}

/// Options for output cleanup.
#[derive(Debug, Clone)]
pub struct CleanupOptions {
    /// Normalize Unicode to NFC form
    pub normalize_unicode: bool,

    /// Standardize bullet characters (●, ○, ▪, ‣ → •)
    pub standardize_bullets: bool,

    /// Remove Unicode replacement characters (U+FFFD)
    pub remove_replacement_char: bool,

    /// Strip trailing whitespace from each line
    pub trim_trailing_whitespace: bool,

    /// Maximum consecutive newline characters (0 = unlimited)
    pub max_consecutive_newlines: u8,
}

impl CleanupOptions {
    /// Create options from a preset.
    pub fn from_preset(preset: CleanupPreset) -> Self {
        match preset {
            CleanupPreset::Minimal => Self::minimal(),
            CleanupPreset::Standard => Self::standard(),
            CleanupPreset::Aggressive => Self::aggressive(),
        }
    }

    /// Minimal cleanup options.
    pub fn minimal() -> Self {
        Self {
            normalize_unicode: true,
            standardize_bullets: false,
            remove_replacement_char: false,
            trim_trailing_whitespace: true,
            max_consecutive_newlines: 0,
        }
    }

    /// Standard cleanup options.
    pub fn standard() -> Self {
        Self {
            normalize_unicode: true,
            standardize_bullets: true,
            remove_replacement_char: true,
            trim_trailing_whitespace: true,
            max_consecutive_newlines: 2,
        }
    }

    /// Aggressive cleanup options.
    pub fn aggressive() -> Self {
        Self {
            normalize_unicode: true,
            standardize_bullets: true,
            remove_replacement_char: true,
            trim_trailing_whitespace: true,
            max_consecutive_newlines: 1,
        }
    }
}

impl Default for CleanupOptions {
    fn default() -> Self {
        Self::standard()
    }
}

/// Output cleanup pipeline.
pub struct CleanupPipeline {
    options: CleanupOptions,
    trailing_ws: Regex,
}

impl CleanupPipeline {
    /// Create a new cleanup pipeline with the given options.
    pub fn new(options: CleanupOptions) -> Self {
        Self {
            options,
            trailing_ws: Regex::new(r"(?m)[ \t]+$").unwrap(),
        }
    }

    /// Create a pipeline from a preset.
    pub fn from_preset(preset: CleanupPreset) -> Self {
        Self::new(CleanupOptions::from_preset(preset))
    }

    /// Process a rendered string through the configured steps.
    pub fn process(&self, text: &str) -> String {
        let mut result = text.to_string();

        if self.options.normalize_unicode {
            result = result.nfc().collect();
        }

        if self.options.standardize_bullets {
            result = standardize_bullets(&result);
        }

        if self.options.remove_replacement_char {
            result = result.replace('\u{FFFD}', "");
        }

        if self.options.trim_trailing_whitespace {
            result = self.trailing_ws.replace_all(&result, "").into_owned();
        }

        if self.options.max_consecutive_newlines > 0 {
            result = cap_newlines(&result, self.options.max_consecutive_newlines);
        }

        result
    }
}

fn standardize_bullets(text: &str) -> String {
    text.chars()
        .map(|c| match c {
            '●' | '○' | '▪' | '‣' => '•',
            other => other,
        })
        .collect()
}

fn cap_newlines(text: &str, max: u8) -> String {
    let mut result = String::with_capacity(text.len());
    let mut run = 0usize;

    for c in text.chars() {
        if c == '\n' {
            run += 1;
            if run <= max as usize {
                result.push(c);
            }
        } else {
            run = 0;
            result.push(c);
        }
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nfc_normalization() {
        // "é" as 'e' + combining acute accent normalizes to one scalar
        let pipeline = CleanupPipeline::from_preset(CleanupPreset::Minimal);
        let decomposed = "Re\u{301}sume\u{301}";
        assert_eq!(pipeline.process(decomposed), "Résumé");
    }

    #[test]
    fn test_bullet_standardization() {
        let pipeline = CleanupPipeline::from_preset(CleanupPreset::Standard);
        assert_eq!(pipeline.process("● one\n○ two"), "• one\n• two");
    }

    #[test]
    fn test_replacement_char_removal() {
        let pipeline = CleanupPipeline::from_preset(CleanupPreset::Standard);
        assert_eq!(pipeline.process("bad\u{FFFD}char"), "badchar");
    }

    #[test]
    fn test_trailing_whitespace_trim() {
        let pipeline = CleanupPipeline::from_preset(CleanupPreset::Minimal);
        assert_eq!(pipeline.process("line   \nnext\t\n"), "line\nnext\n");
    }

    #[test]
    fn test_blank_line_capping() {
        let standard = CleanupPipeline::from_preset(CleanupPreset::Standard);
        assert_eq!(standard.process("a\n\n\n\nb"), "a\n\nb");

        let aggressive = CleanupPipeline::from_preset(CleanupPreset::Aggressive);
        assert_eq!(aggressive.process("a\n\n\n\nb"), "a\nb");
    }

    #[test]
    fn test_minimal_preserves_blank_lines() {
        let pipeline = CleanupPipeline::from_preset(CleanupPreset::Minimal);
        assert_eq!(pipeline.process("a\n\n\n\nb"), "a\n\n\n\nb");
    }
}
