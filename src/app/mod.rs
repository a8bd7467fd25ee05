//! Application layer.
//!
//! - `controller` - toolkit-independent editor state machine
//! - `document` - thread-safe document store
//! - `settings` / `error` / `file_filters` / `text_ops` / `preview` - supporting services
//! - `state` - FLTK coordinator wiring widgets to the controller

pub mod buffer_utils;
pub mod controller;
pub mod document;
pub mod error;
pub mod file_filters;
pub mod messages;
pub mod preview;
pub mod settings;
pub mod state;
pub mod text_ops;

// Re-exports for convenient external access
pub use controller::{CloseAction, EditorController, Mode, SaveOutcome};
pub use document::{DocumentSnapshot, DocumentState};
pub use error::{AppError, Result};
pub use messages::Message;
pub use settings::AppSettings;
