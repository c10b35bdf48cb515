//! Rendering module for converting structured documents to output
//! formats.

mod cleanup;
mod html;
mod json;
mod markdown;
mod options;
mod result;
mod text;
pub mod visitor;

pub use cleanup::{CleanupOptions, CleanupPipeline, CleanupPreset};
pub use html::{to_html, to_html_with_stats, HtmlRenderer};
pub use json::{to_json, JsonFormat};
pub use markdown::{to_markdown, to_markdown_with_stats, MarkdownRenderer};
pub use options::RenderOptions;
pub use result::{RenderResult, StructureStats};
pub use text::to_text;
pub use visitor::{DefaultVisitor, DocumentVisitor, VisitorAction};
