//! Markdown conversion: outline extraction, table of contents, sanitized HTML pages.

pub mod outline;
pub mod renderer;
pub mod template;

pub use outline::{OutlineEntry, extract_outline, generate_table_of_contents, slugify};
pub use renderer::{MarkdownRenderer, PageStyle};
