use std::sync::LazyLock;

use pulldown_cmark::{CowStr, Event, Options, Parser, Tag, TagEnd, html};
use regex_lite::Regex;

use super::outline::{DEFAULT_TOC_HEADING, extract_outline, slugify, table_of_contents_with_heading};
use super::template::write_page;

static HEADING_SYNTAX_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^#{1,6}\s+.+").expect("heading syntax pattern is valid"));
static LINK_SYNTAX_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[.*?\]\(.*?\)").expect("link syntax pattern is valid"));

/// Page-level presentation knobs for templated output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageStyle {
    /// Value of the `<html lang>` attribute.
    pub lang: String,
    /// Heading placed above the table of contents.
    pub toc_heading: String,
}

impl Default for PageStyle {
    fn default() -> Self {
        Self {
            lang: "zh-CN".to_string(),
            toc_heading: DEFAULT_TOC_HEADING.to_string(),
        }
    }
}

/// Markdown to sanitized HTML.
///
/// Parsing is done by pulldown-cmark, sanitizing by an ammonia allow-list. The
/// renderer keeps no document state and can be shared freely.
pub struct MarkdownRenderer {
    options: Options,
    sanitizer: ammonia::Builder<'static>,
    style: PageStyle,
}

impl MarkdownRenderer {
    pub fn new() -> Self {
        Self::with_style(PageStyle::default())
    }

    pub fn with_style(style: PageStyle) -> Self {
        let mut options = Options::empty();
        options.insert(Options::ENABLE_TABLES);
        options.insert(Options::ENABLE_STRIKETHROUGH);
        options.insert(Options::ENABLE_FOOTNOTES);
        // Heading attribute blocks stay off: a trailing `{...}` must remain heading text
        // so ids and outline anchors are slugs of the same string.

        // ammonia's defaults already drop script/style elements and on* handlers.
        let mut sanitizer = ammonia::Builder::default();
        sanitizer
            .add_generic_attributes(&["id"])
            .set_tag_attribute_value("a", "target", "_blank")
            .link_rel(Some("noopener noreferrer"));

        Self {
            options,
            sanitizer,
            style,
        }
    }

    /// Render Markdown to an HTML fragment that is safe to display.
    pub fn render_to_html(&self, markdown: &str) -> String {
        let parser = Parser::new_ext(markdown, self.options);
        let events = with_heading_ids(parser.collect());

        let mut raw_html = String::with_capacity(markdown.len() * 3 / 2);
        html::push_html(&mut raw_html, events.into_iter());

        self.sanitizer.clean(&raw_html).to_string()
    }

    /// Render Markdown into a full standalone page.
    pub fn render_to_html_with_template(&self, markdown: &str, title: &str) -> String {
        let body = self.render_to_html(markdown);
        self.wrap_page(title, &body)
    }

    /// Like [`render_to_html_with_template`](Self::render_to_html_with_template), with a
    /// table of contents built from the document's headings placed before the content.
    pub fn render_to_html_with_toc(&self, markdown: &str, title: &str) -> String {
        let outline = extract_outline(markdown);
        let toc = table_of_contents_with_heading(&outline, &self.style.toc_heading);
        let body = self.render_to_html(markdown);
        self.wrap_page(title, &format!("{toc}{body}"))
    }

    /// Heuristic lint pass. Warnings are advisory and never block rendering or saving.
    pub fn validate_markdown(&self, markdown: &str) -> Vec<String> {
        let mut warnings = Vec::new();

        for (idx, line) in markdown.split('\n').enumerate() {
            let line_num = idx + 1;

            if line.starts_with('#') && !HEADING_SYNTAX_RE.is_match(line) {
                warnings.push(format!(
                    "Line {line_num}: malformed heading, '#' should be followed by a space"
                ));
            }

            if line.contains("](") && !LINK_SYNTAX_RE.is_match(line) {
                warnings.push(format!("Line {line_num}: link syntax may be malformed"));
            }
        }

        warnings
    }

    /// Falls back to the bare body if the page cannot be written.
    fn wrap_page(&self, title: &str, body: &str) -> String {
        let mut page = String::with_capacity(body.len() + 4096);
        match write_page(&mut page, &self.style.lang, title, body) {
            Ok(()) => page,
            Err(e) => {
                log::warn!("Failed to render page template ({}), returning bare HTML", e);
                body.to_string()
            }
        }
    }
}

impl Default for MarkdownRenderer {
    fn default() -> Self {
        Self::new()
    }
}

/// Give every heading an id derived from its text, so the anchors emitted by the
/// table of contents resolve.
fn with_heading_ids(mut events: Vec<Event<'_>>) -> Vec<Event<'_>> {
    for i in 0..events.len() {
        if !matches!(events[i], Event::Start(Tag::Heading { id: None, .. })) {
            continue;
        }

        let mut text = String::new();
        for event in &events[i + 1..] {
            match event {
                Event::End(TagEnd::Heading(_)) => break,
                Event::Text(t) | Event::Code(t) => text.push_str(t),
                _ => {}
            }
        }

        let slug = slugify(&text);
        if slug.is_empty() {
            continue;
        }
        if let Event::Start(Tag::Heading { id, .. }) = &mut events[i] {
            *id = Some(CowStr::from(slug));
        }
    }
    events
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_rendering() {
        let renderer = MarkdownRenderer::new();
        let html = renderer.render_to_html("# Title\n\nHello **world**");
        assert!(html.contains("<h1"));
        assert!(html.contains("<strong>world</strong>"));
    }

    #[test]
    fn test_script_is_stripped() {
        let renderer = MarkdownRenderer::new();
        let html = renderer.render_to_html("before\n\n<script>alert(1)</script>\n\nafter");
        assert!(!html.contains("<script"));
        assert!(html.contains("before"));
        assert!(html.contains("after"));
    }

    #[test]
    fn test_event_handlers_and_styles_are_stripped() {
        let renderer = MarkdownRenderer::new();
        let html = renderer.render_to_html(
            "<img src=\"a.png\" onerror=\"alert(1)\">\n\n<style>body{display:none}</style>",
        );
        assert!(!html.contains("onerror"));
        assert!(!html.contains("<style"));
    }

    #[test]
    fn test_javascript_links_are_neutralized() {
        let renderer = MarkdownRenderer::new();
        let html = renderer.render_to_html("[click](javascript:alert(1))");
        assert!(!html.contains("javascript:"));
    }

    #[test]
    fn test_links_open_in_new_tab() {
        let renderer = MarkdownRenderer::new();
        let html = renderer.render_to_html("[Rust](https://www.rust-lang.org)");
        assert!(html.contains(r#"href="https://www.rust-lang.org"#));
        assert!(html.contains(r#"target="_blank""#));
        assert!(html.contains("noopener"));
    }

    #[test]
    fn test_headings_get_anchor_ids() {
        let renderer = MarkdownRenderer::new();
        let html = renderer.render_to_html("## Getting Started");
        assert!(html.contains(r#"id="getting-started""#));
    }

    #[test]
    fn test_trailing_braces_stay_in_heading_text() {
        let renderer = MarkdownRenderer::new();
        let html = renderer.render_to_html("# Config {debug}\n\n## Sets {a, b}");
        assert!(html.contains("Config {debug}</h1>"));
        assert!(html.contains("Sets {a, b}</h2>"));
        assert!(html.contains(r#"id="config-debug""#));
        assert!(html.contains(r#"id="sets-a-b""#));
    }

    #[test]
    fn test_toc_anchor_matches_heading_with_braces() {
        let renderer = MarkdownRenderer::new();
        let page = renderer.render_to_html_with_toc("# Config {debug}", "Doc");
        assert!(page.contains(r##"href="#config-debug""##));
        assert!(page.contains(r#"<h1 id="config-debug">Config {debug}</h1>"#));
    }

    #[test]
    fn test_tables_and_strikethrough() {
        let renderer = MarkdownRenderer::new();
        let html = renderer.render_to_html("| a | b |\n|---|---|\n| 1 | 2 |\n\n~~old~~");
        assert!(html.contains("<table>"));
        assert!(html.contains("<td>1</td>"));
        assert!(html.contains("<del>old</del>"));
    }

    #[test]
    fn test_template_wraps_content() {
        let renderer = MarkdownRenderer::new();
        let page = renderer.render_to_html_with_template("Hello", "My Doc");
        assert!(page.starts_with("<!DOCTYPE html>"));
        assert!(page.contains(r#"lang="zh-CN""#));
        assert!(page.contains("<title>My Doc</title>"));
        assert!(page.contains("<p>Hello</p>"));
    }

    #[test]
    fn test_custom_page_style() {
        let renderer = MarkdownRenderer::with_style(PageStyle {
            lang: "en".to_string(),
            toc_heading: "Contents".to_string(),
        });
        let page = renderer.render_to_html_with_toc("# Intro", "Doc");
        assert!(page.contains(r#"lang="en""#));
        assert!(page.contains("<h3>Contents</h3>"));
    }

    #[test]
    fn test_toc_precedes_content_and_anchors_match() {
        let renderer = MarkdownRenderer::new();
        let page = renderer.render_to_html_with_toc("# Intro\n\ntext\n\n## Usage", "Doc");
        let toc_pos = page.find(r#"<div class="toc">"#).unwrap();
        let h1_pos = page.find("<h1").unwrap();
        assert!(toc_pos < h1_pos);
        assert!(page.contains(r##"href="#intro""##));
        assert!(page.contains(r#"id="intro""#));
        assert!(page.contains(r##"href="#usage""##));
        assert!(page.contains(r#"id="usage""#));
    }

    #[test]
    fn test_toc_omitted_without_headings() {
        let renderer = MarkdownRenderer::new();
        let page = renderer.render_to_html_with_toc("just a paragraph", "Doc");
        assert!(!page.contains(r#"class="toc""#));
        assert!(page.contains("<p>just a paragraph</p>"));
    }

    #[test]
    fn test_validate_clean_document() {
        let renderer = MarkdownRenderer::new();
        let warnings = renderer.validate_markdown("# Title\n\nSee [docs](https://example.com).");
        assert!(warnings.is_empty());
    }

    #[test]
    fn test_validate_flags_heading_without_space() {
        let renderer = MarkdownRenderer::new();
        let warnings = renderer.validate_markdown("# Fine\n#Broken\n####### Too deep");
        assert_eq!(warnings.len(), 2);
        assert!(warnings[0].starts_with("Line 2:"));
        assert!(warnings[1].starts_with("Line 3:"));
    }

    #[test]
    fn test_validate_flags_broken_link() {
        let renderer = MarkdownRenderer::new();
        let warnings = renderer.validate_markdown("text\nsee docs](https://example.com");
        assert_eq!(warnings, vec!["Line 2: link syntax may be malformed".to_string()]);
    }
}
