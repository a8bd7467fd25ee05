use std::path::PathBuf;

use fltk::dialog::{FileDialogType, NativeFileChooser, NativeFileChooserOptions};

use crate::app::file_filters::{html_files_filter, markdown_files_filter};

fn run_chooser(
    kind: FileDialogType,
    title: &str,
    filter: &str,
    directory: Option<&str>,
) -> Option<PathBuf> {
    let is_save = matches!(kind, FileDialogType::BrowseSaveFile);
    let mut nfc = NativeFileChooser::new(kind);
    nfc.set_title(title);
    nfc.set_filter(filter);
    if is_save {
        nfc.set_option(NativeFileChooserOptions::SaveAsConfirm);
    }
    if let Some(dir) = directory {
        if let Err(e) = nfc.set_directory(&dir) {
            log::debug!("Ignoring dialog directory {}: {:?}", dir, e);
        }
    }
    nfc.show(); // blocks until close

    let filename = nfc.filename();
    if filename.as_os_str().is_empty() {
        None
    } else {
        Some(filename)
    }
}

pub fn native_open_dialog(directory: Option<&str>) -> Option<PathBuf> {
    run_chooser(
        FileDialogType::BrowseFile,
        "Open Markdown File",
        &markdown_files_filter(),
        directory,
    )
}

pub fn native_save_dialog(directory: Option<&str>) -> Option<PathBuf> {
    run_chooser(
        FileDialogType::BrowseSaveFile,
        "Save Markdown File",
        &markdown_files_filter(),
        directory,
    )
}

pub fn native_export_dialog(directory: Option<&str>) -> Option<PathBuf> {
    run_chooser(
        FileDialogType::BrowseSaveFile,
        "Export HTML",
        &html_files_filter(),
        directory,
    )
}
