use std::path::Path;

/// Extract filename from a file path
///
/// Returns the filename component of a path, or "Unknown" if it can't be extracted.
pub fn extract_filename(path: &Path) -> String {
    path.file_name()
        .and_then(|n| n.to_str())
        .filter(|s| !s.is_empty() && *s != ".")
        .map(|s| s.to_string())
        .unwrap_or_else(|| "Unknown".to_string())
}

/// Byte offset of the first character of a 1-based line, or None if out of range.
pub fn line_number_to_byte_position(text: &str, line: usize) -> Option<usize> {
    if line == 0 {
        return None;
    }
    if line == 1 {
        return Some(0);
    }

    text.match_indices('\n')
        .nth(line - 2)
        .map(|(i, _)| i + 1)
}

/// Title shown in the window bar: `*name - MarkUp` when dirty.
pub fn window_title(path: Option<&Path>, dirty: bool) -> String {
    let name = path.map(extract_filename).unwrap_or_else(|| "Untitled".to_string());
    let prefix = if dirty { "*" } else { "" };
    format!("{}{} - MarkUp", prefix, name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_filename_from_path() {
        assert_eq!(extract_filename(Path::new("/home/user/test.md")), "test.md");
        assert_eq!(extract_filename(Path::new("notes.markdown")), "notes.markdown");
        assert_eq!(extract_filename(Path::new("/path/with/many/levels/file.md")), "file.md");
    }

    #[test]
    fn test_extract_filename_edge_cases() {
        assert_eq!(extract_filename(Path::new("/home/user/")), "user");
        assert_eq!(extract_filename(Path::new("")), "Unknown");
        assert_eq!(extract_filename(Path::new("/")), "Unknown");
    }

    #[test]
    fn test_line_positions() {
        let text = "first\nsecond\n\nfourth";
        assert_eq!(line_number_to_byte_position(text, 0), None);
        assert_eq!(line_number_to_byte_position(text, 1), Some(0));
        assert_eq!(line_number_to_byte_position(text, 2), Some(6));
        assert_eq!(line_number_to_byte_position(text, 3), Some(13));
        assert_eq!(line_number_to_byte_position(text, 4), Some(14));
        assert_eq!(line_number_to_byte_position(text, 5), None);
    }

    #[test]
    fn test_line_positions_multibyte() {
        let text = "标题\nnext";
        assert_eq!(line_number_to_byte_position(text, 2), Some("标题\n".len()));
    }

    #[test]
    fn test_window_title() {
        assert_eq!(window_title(None, false), "Untitled - MarkUp");
        assert_eq!(window_title(None, true), "*Untitled - MarkUp");
        assert_eq!(
            window_title(Some(Path::new("/docs/readme.md")), true),
            "*readme.md - MarkUp"
        );
    }
}
