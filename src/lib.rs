//! Parser for TaskPaper-style outlines.
//!
//! Every line is a project (`Title:`), a task (`- Title`) or a comment, and
//! may carry `@tag` / `@tag(value)` annotations. [`parse::classify`] handles
//! one line, [`model::Document`] a whole outline.

pub mod cli;
pub mod model;
pub mod ops;
pub mod parse;

pub use model::{Document, KindCounts, Line, LineKind, Tag};
pub use parse::{classify, extract_tags};
