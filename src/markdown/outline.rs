use std::sync::LazyLock;

use regex_lite::Regex;

/// Heading shown above the generated table of contents unless the page style overrides it.
pub const DEFAULT_TOC_HEADING: &str = "目录";

static HEADING_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(#{1,6})\s+(.+)$").expect("heading pattern is valid"));
static NON_SLUG_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^\w\s-]").expect("slug filter pattern is valid"));
static WHITESPACE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("whitespace pattern is valid"));

/// One ATX heading found in the document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutlineEntry {
    pub title: String,
    /// Number of leading `#` characters (1-6).
    pub level: usize,
    /// 1-based source line.
    pub line: usize,
}

/// Scan `text` line by line for `#`-style headings, in document order.
///
/// Lines are trimmed before matching, so indented headings count too. Level jumps
/// (an `###` right after a `#`) are kept as written.
pub fn extract_outline(text: &str) -> Vec<OutlineEntry> {
    text.split('\n')
        .enumerate()
        .filter_map(|(idx, line)| {
            let caps = HEADING_RE.captures(line.trim())?;
            Some(OutlineEntry {
                title: caps[2].trim().to_string(),
                level: caps[1].len(),
                line: idx + 1,
            })
        })
        .collect()
}

/// Turn a heading title into the anchor id used by both the TOC and the rendered headings.
///
/// Only ASCII word characters, whitespace and `-` survive; whitespace runs become a
/// single `-`. Titles that collapse to the same slug are not disambiguated.
pub fn slugify(title: &str) -> String {
    let lower = title.to_lowercase();
    let stripped = NON_SLUG_RE.replace_all(&lower, "");
    let dashed = WHITESPACE_RE.replace_all(&stripped, "-");
    dashed.trim_matches('-').to_string()
}

/// Render the outline as nested `<ul>` lists inside a `.toc` block.
pub fn generate_table_of_contents(entries: &[OutlineEntry]) -> String {
    table_of_contents_with_heading(entries, DEFAULT_TOC_HEADING)
}

pub fn table_of_contents_with_heading(entries: &[OutlineEntry], heading: &str) -> String {
    if entries.is_empty() {
        return String::new();
    }

    let mut toc = String::from(r#"<div class="toc">"#);
    toc.push_str("<h3>");
    toc.push_str(&escape_html(heading));
    toc.push_str("</h3>");

    let mut current_level = 0;
    for entry in entries {
        if entry.level > current_level {
            for _ in current_level..entry.level {
                toc.push_str("<ul>");
            }
        } else {
            for _ in entry.level..current_level {
                toc.push_str("</ul>");
            }
        }

        toc.push_str(r##"<li><a href="#"##);
        toc.push_str(&slugify(&entry.title));
        toc.push_str(r#"">"#);
        toc.push_str(&escape_html(&entry.title));
        toc.push_str("</a></li>");

        current_level = entry.level;
    }

    for _ in 0..current_level {
        toc.push_str("</ul>");
    }
    toc.push_str("</div>");
    toc
}

/// Escape text for use inside HTML element content or a quoted attribute.
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&#34;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}
