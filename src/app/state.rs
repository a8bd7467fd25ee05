use std::path::{Path, PathBuf};

use fltk::{
    button::Button,
    dialog,
    frame::Frame,
    group::Flex,
    menu::MenuBar,
    prelude::*,
    text::{TextBuffer, TextEditor, WrapMode},
    window::Window,
};

use super::buffer_utils::buffer_text_no_leak;
use super::controller::{CloseAction, EditorController, Mode, SaveOutcome};
use super::preview::{cleanup_preview_file, open_in_browser, preview_file_path, write_preview_file};
use super::settings::AppSettings;
use super::text_ops::{extract_filename, line_number_to_byte_position};
use crate::markdown::MarkdownRenderer;
use crate::ui::dialogs::about::show_about_dialog;
use crate::ui::dialogs::outline::show_outline_dialog;
use crate::ui::file_dialogs::{native_export_dialog, native_open_dialog, native_save_dialog};
use crate::ui::main_window::MainWidgets;
use crate::ui::menu::{DOCUMENT_ITEMS, TOC_ITEM, WORD_WRAP_ITEM};
use crate::ui::theme::{GitHubTheme, ThemedWidgets, apply_theme};

/// Warnings listed in the Check Markdown dialog before the rest are summarized.
const MAX_LISTED_WARNINGS: usize = 20;

/// Main application coordinator: routes channel messages to the controller
/// and mirrors its state into the widgets.
pub struct AppState {
    pub controller: EditorController,
    pub settings: AppSettings,
    pub window: Window,
    pub flex: Flex,
    pub menu: MenuBar,
    pub startup_screen: Flex,
    pub editor_screen: Flex,
    pub title_frame: Frame,
    pub buttons: Vec<Button>,
    pub editor: TextEditor,
    pub buffer: TextBuffer,
    /// Set once a browser preview page has been written, so quit can remove it.
    preview_path: Option<PathBuf>,
}

impl AppState {
    pub fn new(widgets: MainWidgets, settings: AppSettings) -> Self {
        let renderer = MarkdownRenderer::with_style(settings.page_style());
        let MainWidgets {
            wind,
            flex,
            menu,
            startup_screen,
            title_frame,
            new_button,
            open_button,
            editor_screen,
            save_button,
            text_editor,
            buffer,
        } = widgets;

        Self {
            controller: EditorController::new(renderer),
            settings,
            window: wind,
            flex,
            menu,
            startup_screen,
            editor_screen,
            title_frame,
            buttons: vec![new_button, open_button, save_button],
            editor: text_editor,
            buffer,
            preview_path: None,
        }
    }

    pub fn apply_theme(&mut self) {
        apply_theme(
            &GitHubTheme,
            ThemedWidgets {
                window: &mut self.window,
                menu: &mut self.menu,
                editor: &mut self.editor,
                title: &mut self.title_frame,
                buttons: &mut self.buttons,
            },
        );
    }

    /// Show the screen matching the controller's mode.
    pub fn show_current_screen(&mut self) {
        match self.controller.mode() {
            Mode::Startup => {
                self.editor_screen.hide();
                self.startup_screen.show();
            }
            Mode::Editing => {
                self.startup_screen.hide();
                self.editor_screen.show();
                let _ = self.editor.take_focus();
            }
        }
        self.set_document_items_active(self.controller.is_editing());
        self.flex.layout();
        self.update_window_title();
        self.window.redraw();
    }

    pub fn update_window_title(&mut self) {
        self.window.set_label(&self.controller.window_title());
    }

    /// Mirror the buffer into the document store.
    fn sync_from_buffer(&self) {
        if self.controller.is_editing() {
            self.controller.edit(&buffer_text_no_leak(&self.buffer));
        }
    }

    pub fn on_buffer_modified(&mut self) {
        if self.controller.is_editing() {
            self.sync_from_buffer();
            self.update_window_title();
        }
    }

    fn load_into_editor(&mut self, content: &str) {
        self.buffer.set_text(content);
        self.editor.set_insert_position(0);
        self.editor.show_insert_position();
        self.show_current_screen();
    }

    fn remember_directory(&mut self, path: &Path) {
        if let Some(parent) = path.parent() {
            self.settings.last_open_directory = Some(parent.to_string_lossy().to_string());
        }
    }

    // --- File operations ---

    pub fn file_new(&mut self) {
        if !self.resolve_unsaved_changes() {
            return;
        }
        let content = self.controller.new_file();
        self.load_into_editor(&content);
    }

    pub fn file_open(&mut self) {
        let dir = self.settings.last_open_directory.clone();
        let Some(path) = native_open_dialog(dir.as_deref()) else {
            return;
        };
        // Settle the current document only once there is something to replace it with
        if self.resolve_unsaved_changes() {
            self.open_file(&path);
        }
    }

    pub fn open_file(&mut self, path: &Path) {
        self.remember_directory(path);
        match self.controller.open_file(path) {
            Ok(content) => self.load_into_editor(&content),
            Err(e) => dialog::alert_default(&format!("Error opening file: {}", e)),
        }
    }

    pub fn file_save(&mut self) {
        if !self.controller.is_editing() {
            return;
        }
        self.sync_from_buffer();
        match self.controller.save() {
            Ok(SaveOutcome::Saved(path)) => {
                self.update_window_title();
                dialog::message_default(&saved_message(&path));
            }
            Ok(SaveOutcome::NeedsPath) => self.file_save_as(),
            Err(e) => dialog::alert_default(&format!("Error saving file: {}", e)),
        }
    }

    pub fn file_save_as(&mut self) {
        if !self.controller.is_editing() {
            return;
        }
        self.sync_from_buffer();
        let dir = self.settings.last_open_directory.clone();
        if let Some(path) = native_save_dialog(dir.as_deref()) {
            self.remember_directory(&path);
            match self.controller.save_as(&path) {
                Ok(written) => {
                    self.update_window_title();
                    dialog::message_default(&saved_message(&written));
                }
                Err(e) => dialog::alert_default(&format!("Error saving file: {}", e)),
            }
        }
    }

    pub fn export_html(&mut self) {
        if !self.controller.is_editing() {
            return;
        }
        self.sync_from_buffer();
        let dir = self.settings.last_open_directory.clone();
        if let Some(path) = native_export_dialog(dir.as_deref()) {
            match self.controller.export_html(&path, self.settings.include_toc) {
                Ok(written) => {
                    dialog::message_default(&format!("Exported to {}", written.display()))
                }
                Err(e) => dialog::alert_default(&format!("Error exporting HTML: {}", e)),
            }
        }
    }

    /// Settle unsaved work before the document is replaced or the app exits.
    /// Returns `false` when the user cancelled.
    fn resolve_unsaved_changes(&mut self) -> bool {
        self.sync_from_buffer();
        match self.controller.close() {
            CloseAction::Quit => true,
            CloseAction::Saved(path) => {
                log::info!("Saved pending changes to {}", path.display());
                true
            }
            CloseAction::SaveFailed(e) => {
                let choice = dialog::choice2_default(
                    &format!("Could not save your changes:\n{}", e),
                    "Save As...",
                    "Discard Changes",
                    "Cancel",
                );
                match choice {
                    Some(0) => {
                        self.file_save_as();
                        !self.controller.document().has_unsaved_changes()
                    }
                    Some(1) => true,
                    _ => false,
                }
            }
            CloseAction::ConfirmDiscard => {
                let choice = dialog::choice2_default(
                    "This document has never been saved.",
                    "Save",
                    "Discard",
                    "Cancel",
                );
                match choice {
                    Some(0) => {
                        self.file_save_as();
                        !self.controller.document().has_unsaved_changes()
                    }
                    Some(1) => {
                        log::info!("Discarded unsaved document");
                        true
                    }
                    _ => false,
                }
            }
        }
    }

    /// Handle quit request. Returns `true` if the app should exit.
    pub fn file_quit(&mut self) -> bool {
        if !self.resolve_unsaved_changes() {
            return false;
        }

        if let Some(path) = self.preview_path.take() {
            cleanup_preview_file(&path);
        }
        self.persist_settings();
        true
    }

    fn persist_settings(&mut self) {
        self.settings.window_width = self.window.w();
        self.settings.window_height = self.window.h();
        if let Err(e) = self.settings.save() {
            log::warn!("Failed to save settings: {}", e);
        }
    }

    // --- View ---

    pub fn show_outline(&mut self) {
        if !self.controller.is_editing() {
            return;
        }
        self.sync_from_buffer();
        let outline = self.controller.refresh_outline();
        if let Some(line) = show_outline_dialog(&outline) {
            self.jump_to_line(line);
        }
    }

    fn jump_to_line(&mut self, line: usize) {
        let text = buffer_text_no_leak(&self.buffer);
        if let Some(pos) = line_number_to_byte_position(&text, line) {
            self.buffer.unselect();
            self.editor.set_insert_position(pos as i32);
            self.editor.show_insert_position();
            let _ = self.editor.take_focus();
        }
    }

    pub fn preview_in_browser(&mut self) {
        if !self.controller.is_editing() {
            return;
        }
        self.sync_from_buffer();
        let page = self.controller.render_page(self.settings.include_toc);
        let path = preview_file_path();
        if let Err(e) = write_preview_file(&path, &page) {
            dialog::alert_default(&format!("Error writing preview: {}", e));
            return;
        }
        self.preview_path = Some(path.clone());
        if let Err(e) = open_in_browser(&path) {
            dialog::alert_default(&format!("Error opening preview: {}", e));
        }
    }

    pub fn toggle_word_wrap(&mut self) {
        self.settings.word_wrap_enabled = !self.settings.word_wrap_enabled;
        if self.settings.word_wrap_enabled {
            self.editor.wrap_mode(WrapMode::AtBounds, 0);
        } else {
            self.editor.wrap_mode(WrapMode::None, 0);
        }
        self.update_menu_checkbox(WORD_WRAP_ITEM, self.settings.word_wrap_enabled);
        self.editor.redraw();
    }

    pub fn toggle_toc(&mut self) {
        self.settings.include_toc = !self.settings.include_toc;
        self.update_menu_checkbox(TOC_ITEM, self.settings.include_toc);
    }

    // --- Tools & Help ---

    pub fn check_markdown(&mut self) {
        if !self.controller.is_editing() {
            return;
        }
        self.sync_from_buffer();
        let warnings = self.controller.validate();
        dialog::message_default(&validation_report(&warnings));
    }

    pub fn show_about(&self) {
        show_about_dialog();
    }

    // --- Menu helpers ---

    fn update_menu_checkbox(&self, path: &str, checked: bool) {
        let idx = self.menu.find_index(path);
        if idx >= 0 {
            if let Some(mut item) = self.menu.at(idx) {
                if checked {
                    item.set();
                } else {
                    item.clear();
                }
            }
        }
    }

    fn set_document_items_active(&mut self, active: bool) {
        for path in DOCUMENT_ITEMS {
            let idx = self.menu.find_index(path);
            if idx < 0 {
                continue;
            }
            if let Some(mut item) = self.menu.at(idx) {
                if active {
                    item.activate();
                } else {
                    item.deactivate();
                }
            }
        }
    }
}

/// Confirmation shown after a successful Save or Save As.
pub fn saved_message(path: &Path) -> String {
    format!("Saved {}", extract_filename(path))
}

/// Text for the Check Markdown dialog.
pub fn validation_report(warnings: &[String]) -> String {
    if warnings.is_empty() {
        return "No problems found.".to_string();
    }

    let mut report = format!("Found {} possible problem(s):\n\n", warnings.len());
    for warning in warnings.iter().take(MAX_LISTED_WARNINGS) {
        report.push_str(warning);
        report.push('\n');
    }
    if warnings.len() > MAX_LISTED_WARNINGS {
        report.push_str(&format!(
            "... and {} more",
            warnings.len() - MAX_LISTED_WARNINGS
        ));
    }
    report
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_saved_message_names_file() {
        assert_eq!(saved_message(Path::new("/home/user/notes.md")), "Saved notes.md");
    }

    #[test]
    fn test_validation_report_clean() {
        assert_eq!(validation_report(&[]), "No problems found.");
    }

    #[test]
    fn test_validation_report_lists_warnings() {
        let warnings = vec![
            "Line 1: malformed heading, '#' should be followed by a space".to_string(),
            "Line 4: link syntax may be malformed".to_string(),
        ];
        let report = validation_report(&warnings);
        assert!(report.starts_with("Found 2 possible problem(s)"));
        assert!(report.contains("Line 1: malformed heading"));
        assert!(report.contains("Line 4: link syntax"));
        assert!(!report.contains("more"));
    }

    #[test]
    fn test_validation_report_truncates() {
        let warnings: Vec<String> = (1..=25).map(|n| format!("Line {}: x", n)).collect();
        let report = validation_report(&warnings);
        assert!(report.contains("Line 20: x"));
        assert!(!report.contains("Line 21: x"));
        assert!(report.ends_with("... and 5 more"));
    }
}
