//! Document model types for structured resume content.
//!
//! This module defines the intermediate representation that bridges
//! line-level segmentation and content rendering. The model is
//! output-agnostic: the same values feed the HTML, Markdown, plain text,
//! and JSON renderers.

mod document;
mod fragment;
mod section;

pub use document::{Document, Metadata};
pub use fragment::EmphasisFragment;
pub use section::{Block, Section};
