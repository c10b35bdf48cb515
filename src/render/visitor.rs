//! Visitor pattern for customizing document rendering.
//!
//! The visitor pattern allows callers to customize how individual blocks
//! are rendered without modifying the core rendering logic.
//!
//! # Example
//!
//! ```
//! use resumark::render::visitor::{DocumentVisitor, VisitorAction};
//!
//! struct MetaStripper;
//!
//! impl DocumentVisitor for MetaStripper {
//!     fn visit_meta(&mut self, _text: &str) -> VisitorAction {
//!         // Drop date-range lines from the output entirely
//!         VisitorAction::Skip
//!     }
//! }
//! ```

/// Action returned by visitor methods to control rendering behavior.
#[derive(Debug, Clone, Default)]
pub enum VisitorAction {
    /// Continue with default rendering.
    #[default]
    Continue,

    /// Replace the block with custom output.
    Replace(String),

    /// Skip this block entirely (produce no output).
    Skip,
}

impl VisitorAction {
    /// Check if this action indicates the block should be skipped.
    pub fn should_skip(&self) -> bool {
        matches!(self, VisitorAction::Skip)
    }

    /// Get replacement content if available.
    pub fn replacement(&self) -> Option<&str> {
        match self {
            VisitorAction::Replace(s) => Some(s),
            _ => None,
        }
    }
}

/// Trait for visiting blocks during rendering.
///
/// Implement this trait to customize how specific blocks are rendered.
/// All methods return `VisitorAction::Continue` by default.
pub trait DocumentVisitor: Send + Sync {
    /// Called before rendering a section heading.
    fn visit_heading(&mut self, text: &str) -> VisitorAction {
        let _ = text;
        VisitorAction::Continue
    }

    /// Called before rendering a subheading.
    fn visit_subheading(&mut self, text: &str) -> VisitorAction {
        let _ = text;
        VisitorAction::Continue
    }

    /// Called before rendering a date-range line.
    fn visit_meta(&mut self, text: &str) -> VisitorAction {
        let _ = text;
        VisitorAction::Continue
    }

    /// Called before rendering a paragraph.
    fn visit_paragraph(&mut self, text: &str) -> VisitorAction {
        let _ = text;
        VisitorAction::Continue
    }

    /// Called before rendering a list block.
    fn visit_list(&mut self, items: &[String]) -> VisitorAction {
        let _ = items;
        VisitorAction::Continue
    }
}

/// A visitor that renders everything with default behavior.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultVisitor;

impl DocumentVisitor for DefaultVisitor {}
