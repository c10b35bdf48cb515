//! Rendering options and configuration.

use super::CleanupOptions;

/// Options for rendering structured documents.
#[derive(Debug, Clone)]
pub struct RenderOptions {
    /// Include YAML frontmatter with metadata (Markdown output)
    pub include_frontmatter: bool,

    /// Markdown heading depth for section headings (1-6)
    pub heading_level: u8,

    /// Character to use for Markdown list markers
    pub list_marker: char,

    /// CSS class prefix for HTML output (e.g. "result-")
    pub class_prefix: String,

    /// Text cleanup options applied to rendered output
    pub cleanup: Option<CleanupOptions>,
}

impl RenderOptions {
    /// Create new render options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable or disable frontmatter.
    pub fn with_frontmatter(mut self, include: bool) -> Self {
        self.include_frontmatter = include;
        self
    }

    /// Set the Markdown heading depth for section headings.
    pub fn with_heading_level(mut self, level: u8) -> Self {
        self.heading_level = level.clamp(1, 6);
        self
    }

    /// Set the Markdown list marker character.
    pub fn with_list_marker(mut self, marker: char) -> Self {
        self.list_marker = marker;
        self
    }

    /// Set the CSS class prefix used in HTML output.
    pub fn with_class_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.class_prefix = prefix.into();
        self
    }

    /// Set cleanup options.
    pub fn with_cleanup(mut self, cleanup: CleanupOptions) -> Self {
        self.cleanup = Some(cleanup);
        self
    }

    /// Set cleanup preset.
    pub fn with_cleanup_preset(mut self, preset: super::CleanupPreset) -> Self {
        self.cleanup = Some(CleanupOptions::from_preset(preset));
        self
    }
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            include_frontmatter: false,
            heading_level: 2,
            list_marker: '-',
            class_prefix: "result-".to_string(),
            cleanup: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::CleanupPreset;

    #[test]
    fn test_render_options_builder() {
        let options = RenderOptions::new()
            .with_frontmatter(true)
            .with_heading_level(3)
            .with_list_marker('*');

        assert!(options.include_frontmatter);
        assert_eq!(options.heading_level, 3);
        assert_eq!(options.list_marker, '*');
    }

    #[test]
    fn test_heading_level_is_clamped() {
        let options = RenderOptions::new().with_heading_level(9);
        assert_eq!(options.heading_level, 6);

        let options = RenderOptions::new().with_heading_level(0);
        assert_eq!(options.heading_level, 1);
    }

    #[test]
    fn test_cleanup_preset_sets_options() {
        let options = RenderOptions::new().with_cleanup_preset(CleanupPreset::Standard);
        assert!(options.cleanup.is_some());
    }
}
