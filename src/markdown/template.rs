use std::fmt::{self, Write};

use super::outline::escape_html;

/// Inline stylesheet for exported and previewed pages.
pub const STYLESHEET: &str = r#"
        body {
            font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, "Helvetica Neue", Arial, sans-serif;
            line-height: 1.6;
            color: #333;
            max-width: 800px;
            margin: 0 auto;
            padding: 2rem;
            background-color: #fff;
        }
        h1, h2, h3, h4, h5, h6 {
            margin-top: 2rem;
            margin-bottom: 1rem;
            color: #2c3e50;
        }
        h1 { border-bottom: 2px solid #eaecef; padding-bottom: 0.3rem; }
        h2 { border-bottom: 1px solid #eaecef; padding-bottom: 0.3rem; }
        p { margin-bottom: 1rem; }
        pre {
            background: #f6f8fa;
            border-radius: 6px;
            padding: 16px;
            overflow: auto;
            line-height: 1.45;
        }
        code {
            background: #f6f8fa;
            padding: 0.2em 0.4em;
            border-radius: 3px;
            font-size: 85%;
        }
        blockquote {
            border-left: 4px solid #dfe2e5;
            padding-left: 1rem;
            color: #6a737d;
            margin: 1rem 0;
        }
        table {
            border-collapse: collapse;
            width: 100%;
            margin: 1rem 0;
        }
        th, td {
            border: 1px solid #dfe2e5;
            padding: 0.6rem 1rem;
            text-align: left;
        }
        th {
            background-color: #f6f8fa;
            font-weight: 600;
        }
        a {
            color: #0366d6;
            text-decoration: none;
        }
        a:hover {
            text-decoration: underline;
        }
        img {
            max-width: 100%;
            height: auto;
        }
        .toc {
            background: #f8f9fa;
            border: 1px solid #e1e4e8;
            border-radius: 6px;
            padding: 1rem;
            margin: 1rem 0;
        }
        .toc ul {
            list-style-type: none;
            padding-left: 1rem;
        }
        .toc > ul {
            padding-left: 0;
        }
        .toc a {
            color: #586069;
        }
"#;

/// Write a complete, self-contained HTML page around an already-sanitized `body`.
///
/// `lang` and `title` are escaped; `body` is inserted verbatim.
pub fn write_page<W: Write>(out: &mut W, lang: &str, title: &str, body: &str) -> fmt::Result {
    writeln!(out, "<!DOCTYPE html>")?;
    writeln!(out, r#"<html lang="{}">"#, escape_html(lang))?;
    writeln!(out, "<head>")?;
    writeln!(out, r#"    <meta charset="UTF-8">"#)?;
    writeln!(
        out,
        r#"    <meta name="viewport" content="width=device-width, initial-scale=1.0">"#
    )?;
    writeln!(out, "    <title>{}</title>", escape_html(title))?;
    writeln!(out, "    <style>{STYLESHEET}    </style>")?;
    writeln!(out, "</head>")?;
    writeln!(out, "<body>")?;
    writeln!(out, "    {body}")?;
    writeln!(out, "</body>")?;
    write!(out, "</html>")
}
