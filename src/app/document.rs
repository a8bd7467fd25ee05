use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use parking_lot::RwLock;

use super::error::Result;
use crate::markdown::OutlineEntry;

#[derive(Debug, Default)]
struct Fields {
    file_path: Option<PathBuf>,
    current_content: String,
    original_content: String,
    outline: Vec<OutlineEntry>,
}

/// Copy of every field, taken under a single read lock.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DocumentSnapshot {
    pub file_path: Option<PathBuf>,
    pub current_content: String,
    pub original_content: String,
    pub outline: Vec<OutlineEntry>,
}

impl DocumentSnapshot {
    pub fn is_dirty(&self) -> bool {
        self.current_content != self.original_content
    }
}

/// The open document: path, live buffer text, last loaded/saved text and outline.
///
/// All accessors copy values out, so callers never hold a reference into the lock.
/// A document is dirty exactly when the live text differs from the snapshot.
#[derive(Debug, Default)]
pub struct DocumentState {
    fields: RwLock<Fields>,
}

impl DocumentState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn file_path(&self) -> Option<PathBuf> {
        self.fields.read().file_path.clone()
    }

    pub fn set_file_path(&self, path: Option<PathBuf>) {
        self.fields.write().file_path = path;
    }

    pub fn current_content(&self) -> String {
        self.fields.read().current_content.clone()
    }

    pub fn set_current_content(&self, content: impl Into<String>) {
        self.fields.write().current_content = content.into();
    }

    pub fn original_content(&self) -> String {
        self.fields.read().original_content.clone()
    }

    pub fn set_original_content(&self, content: impl Into<String>) {
        self.fields.write().original_content = content.into();
    }

    pub fn outline(&self) -> Vec<OutlineEntry> {
        self.fields.read().outline.clone()
    }

    pub fn set_outline(&self, outline: Vec<OutlineEntry>) {
        self.fields.write().outline = outline;
    }

    pub fn has_unsaved_changes(&self) -> bool {
        let fields = self.fields.read();
        fields.current_content != fields.original_content
    }

    pub fn snapshot(&self) -> DocumentSnapshot {
        let fields = self.fields.read();
        DocumentSnapshot {
            file_path: fields.file_path.clone(),
            current_content: fields.current_content.clone(),
            original_content: fields.original_content.clone(),
            outline: fields.outline.clone(),
        }
    }

    /// Read a whole file as UTF-8 text. Does not modify the document.
    pub fn load_file(&self, path: &Path) -> Result<String> {
        let content = fs::read_to_string(path)?;
        log::debug!("Loaded {} bytes from {}", content.len(), path.display());
        Ok(content)
    }

    /// Write `content` to `path`, replacing the file. Does not modify the document.
    ///
    /// The write is not atomic: a crash mid-write can leave a truncated file.
    pub fn save_file(&self, path: &Path, content: &str) -> Result<()> {
        let mut options = OpenOptions::new();
        options.write(true).create(true).truncate(true);
        #[cfg(unix)]
        {
            use std::os::unix::fs::OpenOptionsExt;
            options.mode(0o644);
        }

        let mut file = options.open(path)?;
        file.write_all(content.as_bytes())?;
        log::debug!("Wrote {} bytes to {}", content.len(), path.display());
        Ok(())
    }

    pub fn reset(&self) {
        *self.fields.write() = Fields::default();
    }
}
