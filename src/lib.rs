//! MarkUp: a small FLTK Markdown editor.
//!
//! - `app` holds the document store, the editor state machine and the FLTK coordinator
//! - `markdown` converts Markdown to sanitized HTML and builds outlines
//! - `ui` builds widgets, menus, dialogs and the color theme

pub mod app;
pub mod markdown;
pub mod ui;
