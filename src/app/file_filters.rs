use std::path::{Path, PathBuf};

/// Filter for the open/save dialogs.
///
/// FLTK format: "Description\tPattern". Dialogs are not a guarantee, so opened
/// paths are still checked with [`is_markdown_path`].
pub fn markdown_files_filter() -> String {
    "Markdown Files\t*.{md,markdown}".to_string()
}

/// Filter for the HTML export dialog.
pub fn html_files_filter() -> String {
    "HTML Files\t*.{html,htm}".to_string()
}

/// True when the file name ends in `.md` or `.markdown`, ignoring case.
pub fn is_markdown_path(path: &Path) -> bool {
    path.file_name()
        .and_then(|n| n.to_str())
        .map(|name| {
            let lower = name.to_lowercase();
            lower.ends_with(".md") || lower.ends_with(".markdown")
        })
        .unwrap_or(false)
}

/// Append `.md` unless the name already carries a Markdown suffix.
pub fn ensure_markdown_extension(path: &Path) -> PathBuf {
    if is_markdown_path(path) {
        path.to_path_buf()
    } else {
        append_suffix(path, "md")
    }
}

/// Append `.html` unless the name already ends in `.html` or `.htm`.
pub fn ensure_html_extension(path: &Path) -> PathBuf {
    let has_html = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.eq_ignore_ascii_case("html") || e.eq_ignore_ascii_case("htm"))
        .unwrap_or(false);
    if has_html {
        path.to_path_buf()
    } else {
        append_suffix(path, "html")
    }
}

// `with_extension` would replace `notes.txt` with `notes.md`; we keep the full name.
fn append_suffix(path: &Path, suffix: &str) -> PathBuf {
    let mut name = path.as_os_str().to_os_string();
    name.push(".");
    name.push(suffix);
    PathBuf::from(name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_markdown_filter_format() {
        let filter = markdown_files_filter();
        assert!(filter.contains('\t'));
        assert!(filter.contains("*.{md,markdown}"));
    }

    #[test]
    fn test_html_filter_format() {
        assert!(html_files_filter().ends_with("*.{html,htm}"));
    }

    #[test]
    fn test_is_markdown_path() {
        assert!(is_markdown_path(Path::new("/home/user/notes.md")));
        assert!(is_markdown_path(Path::new("README.MD")));
        assert!(is_markdown_path(Path::new("doc.Markdown")));
        assert!(!is_markdown_path(Path::new("notes.txt")));
        assert!(!is_markdown_path(Path::new("notes.md.bak")));
        assert!(!is_markdown_path(Path::new("/")));
        assert!(!is_markdown_path(Path::new("")));
    }

    #[test]
    fn test_ensure_markdown_extension() {
        assert_eq!(ensure_markdown_extension(Path::new("/tmp/a.md")), PathBuf::from("/tmp/a.md"));
        assert_eq!(ensure_markdown_extension(Path::new("/tmp/a")), PathBuf::from("/tmp/a.md"));
        assert_eq!(
            ensure_markdown_extension(Path::new("/tmp/a.txt")),
            PathBuf::from("/tmp/a.txt.md")
        );
    }

    #[test]
    fn test_ensure_html_extension() {
        assert_eq!(ensure_html_extension(Path::new("out.HTML")), PathBuf::from("out.HTML"));
        assert_eq!(ensure_html_extension(Path::new("out.htm")), PathBuf::from("out.htm"));
        assert_eq!(ensure_html_extension(Path::new("out")), PathBuf::from("out.html"));
    }
}
