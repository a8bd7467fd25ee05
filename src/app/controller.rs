use std::path::{Path, PathBuf};

use super::document::DocumentState;
use super::error::{AppError, Result};
use super::file_filters::{ensure_html_extension, ensure_markdown_extension, is_markdown_path};
use super::text_ops::{extract_filename, window_title};
use crate::markdown::{MarkdownRenderer, OutlineEntry, extract_outline};

/// Buffer contents for File > New.
pub const NEW_DOCUMENT_TEXT: &str = "# New Document\n\nStart writing your content...";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Welcome screen with New / Open buttons.
    Startup,
    /// Editor screen with a document loaded.
    Editing,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SaveOutcome {
    Saved(PathBuf),
    /// The document has never been saved; the caller must ask for a path.
    NeedsPath,
}

/// What the shell should do when the window is closing.
#[derive(Debug)]
pub enum CloseAction {
    /// Nothing unsaved.
    Quit,
    /// Unsaved edits were written to the document's file.
    Saved(PathBuf),
    /// Unsaved edits could not be written.
    SaveFailed(AppError),
    /// Unsaved edits in a document that has no file yet; ask before dropping them.
    ConfirmDiscard,
}

/// Toolkit-independent editor logic.
///
/// Every user action in the GUI maps to one method here. The controller owns the
/// document store and the renderer; widgets only mirror what it reports.
pub struct EditorController {
    mode: Mode,
    document: DocumentState,
    renderer: MarkdownRenderer,
}

impl EditorController {
    pub fn new(renderer: MarkdownRenderer) -> Self {
        Self {
            mode: Mode::Startup,
            document: DocumentState::new(),
            renderer,
        }
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn is_editing(&self) -> bool {
        self.mode == Mode::Editing
    }

    pub fn document(&self) -> &DocumentState {
        &self.document
    }

    /// Start an unsaved document. Returns the text to show in the editor.
    ///
    /// The snapshot stays empty, so a new document counts as modified.
    pub fn new_file(&mut self) -> String {
        self.document.set_file_path(None);
        self.document.set_current_content(NEW_DOCUMENT_TEXT);
        self.document.set_original_content("");
        self.document.set_outline(extract_outline(NEW_DOCUMENT_TEXT));
        self.mode = Mode::Editing;
        log::info!("Started a new document");
        NEW_DOCUMENT_TEXT.to_string()
    }

    /// Load a Markdown file. On error the current document is left untouched.
    pub fn open_file(&mut self, path: &Path) -> Result<String> {
        if !is_markdown_path(path) {
            log::warn!("Refusing to open non-Markdown file {}", path.display());
            return Err(AppError::NotMarkdown(path.to_path_buf()));
        }

        let content = match self.document.load_file(path) {
            Ok(content) => content,
            Err(e) => {
                log::error!("Failed to open {}: {}", path.display(), e);
                return Err(e);
            }
        };

        self.document.set_file_path(Some(path.to_path_buf()));
        self.document.set_current_content(content.clone());
        self.document.set_original_content(content.clone());
        self.document.set_outline(extract_outline(&content));
        self.mode = Mode::Editing;
        log::info!("Opened {}", path.display());
        Ok(content)
    }

    /// Mirror the editor buffer into the store.
    pub fn edit(&self, text: &str) {
        self.document.set_current_content(text);
    }

    pub fn save(&self) -> Result<SaveOutcome> {
        match self.document.file_path() {
            Some(path) => {
                self.write_current(&path)?;
                Ok(SaveOutcome::Saved(path))
            }
            None => Ok(SaveOutcome::NeedsPath),
        }
    }

    /// Save under a new name. `.md` is appended when the name has no Markdown suffix.
    pub fn save_as(&self, path: &Path) -> Result<PathBuf> {
        let path = ensure_markdown_extension(path);
        self.write_current(&path)?;
        self.document.set_file_path(Some(path.clone()));
        Ok(path)
    }

    /// Decide what happens to unsaved work when the window closes.
    ///
    /// Documents with a file are saved silently. Untitled documents are never
    /// dropped here; the shell has to confirm with the user.
    pub fn close(&self) -> CloseAction {
        if !self.is_editing() || !self.document.has_unsaved_changes() {
            return CloseAction::Quit;
        }

        match self.document.file_path() {
            Some(path) => match self.write_current(&path) {
                Ok(()) => CloseAction::Saved(path),
                Err(e) => CloseAction::SaveFailed(e),
            },
            None => CloseAction::ConfirmDiscard,
        }
    }

    /// Recompute the outline from the live text, store it and return it.
    pub fn refresh_outline(&self) -> Vec<OutlineEntry> {
        let outline = extract_outline(&self.document.current_content());
        self.document.set_outline(outline.clone());
        outline
    }

    /// Sanitized HTML fragment of the live text.
    pub fn render_fragment(&self) -> String {
        self.renderer.render_to_html(&self.document.current_content())
    }

    /// Full standalone page of the live text.
    pub fn render_page(&self, include_toc: bool) -> String {
        let content = self.document.current_content();
        let title = self.document_name();
        if include_toc {
            self.renderer.render_to_html_with_toc(&content, &title)
        } else {
            self.renderer.render_to_html_with_template(&content, &title)
        }
    }

    /// Write the rendered page to `path`, adding `.html` when missing.
    pub fn export_html(&self, path: &Path, include_toc: bool) -> Result<PathBuf> {
        let path = ensure_html_extension(path);
        let page = self.render_page(include_toc);
        self.document.save_file(&path, &page)?;
        log::info!("Exported HTML to {}", path.display());
        Ok(path)
    }

    pub fn validate(&self) -> Vec<String> {
        self.renderer
            .validate_markdown(&self.document.current_content())
    }

    /// File name of the document, or "Untitled".
    pub fn document_name(&self) -> String {
        self.document
            .file_path()
            .map(|p| extract_filename(&p))
            .unwrap_or_else(|| "Untitled".to_string())
    }

    pub fn window_title(&self) -> String {
        if !self.is_editing() {
            return "MarkUp".to_string();
        }
        let snapshot = self.document.snapshot();
        window_title(snapshot.file_path.as_deref(), snapshot.is_dirty())
    }

    fn write_current(&self, path: &Path) -> Result<()> {
        let content = self.document.current_content();
        if let Err(e) = self.document.save_file(path, &content) {
            log::error!("Failed to save {}: {}", path.display(), e);
            return Err(e);
        }
        self.document.set_original_content(content);
        log::info!("Saved {}", path.display());
        Ok(())
    }
}

impl Default for EditorController {
    fn default() -> Self {
        Self::new(MarkdownRenderer::new())
    }
}
