use std::fs;
use std::path::{Path, PathBuf};

use super::error::{AppError, Result};

const PREVIEW_FILE_NAME: &str = "markup-preview.html";

/// Location of the browser preview page.
pub fn preview_file_path() -> PathBuf {
    std::env::temp_dir().join(PREVIEW_FILE_NAME)
}

/// Write a rendered page to `path`, replacing any previous preview.
pub fn write_preview_file(path: &Path, html: &str) -> Result<()> {
    fs::write(path, html)?;
    Ok(())
}

/// Remove the preview page if one was written. Missing files are fine.
pub fn cleanup_preview_file(path: &Path) {
    if let Err(e) = fs::remove_file(path) {
        if e.kind() != std::io::ErrorKind::NotFound {
            log::debug!("Could not remove preview file {}: {}", path.display(), e);
        }
    }
}

/// Hand a page to the system browser.
pub fn open_in_browser(path: &Path) -> Result<()> {
    open::that(path)
        .map_err(|e| AppError::Preview(format!("could not open {}: {}", path.display(), e)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preview_path_is_in_temp_dir() {
        let path = preview_file_path();
        assert!(path.starts_with(std::env::temp_dir()));
        assert_eq!(path.extension().unwrap(), "html");
    }

    #[test]
    fn test_write_and_cleanup() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("preview.html");

        write_preview_file(&path, "<p>one</p>").unwrap();
        write_preview_file(&path, "<p>two</p>").unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "<p>two</p>");

        cleanup_preview_file(&path);
        assert!(!path.exists());

        // Second cleanup is a no-op
        cleanup_preview_file(&path);
    }
}
