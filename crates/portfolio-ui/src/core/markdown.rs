//! Markdown to HTML for project detail overlays.
//!
//! Raw HTML in the source is escaped and shown as text; only markdown constructs
//! produce markup.

use pulldown_cmark::{Event, Options, Parser, html};

/// Render `source` as an HTML fragment.
#[must_use]
pub fn render_markdown(source: &str) -> String {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_TABLES);
    options.insert(Options::ENABLE_STRIKETHROUGH);
    let events = Parser::new_ext(source, options).map(|event| match event {
        Event::Html(raw) | Event::InlineHtml(raw) => Event::Text(raw),
        other => other,
    });
    let mut out = String::with_capacity(source.len() * 3 / 2);
    html::push_html(&mut out, events);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn headings_lists_and_emphasis_render() {
        let html = render_markdown("# Title\n\n- **bold** item\n- second\n");
        assert!(html.contains("<h1>Title</h1>"));
        assert!(html.contains("<li><strong>bold</strong> item</li>"));
        assert!(html.contains("<li>second</li>"));
    }

    #[test]
    fn raw_html_is_escaped() {
        let html = render_markdown("hello <script>alert(1)</script>\n");
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;"));
    }

    #[test]
    fn horizontal_rules_and_tables_render() {
        let html = render_markdown("a\n\n---\n\n| k | v |\n|---|---|\n| 1 | 2 |\n");
        assert!(html.contains("<hr />"));
        assert!(html.contains("<table>"));
    }

    #[test]
    fn project_details_render_in_every_language() {
        use crate::core::content::projects;
        use crate::i18n::{Language, TranslationBundle};
        for language in Language::all() {
            for project in projects(TranslationBundle::for_language(language)).unwrap() {
                let detail = project.detail.unwrap_or_default();
                assert!(render_markdown(&detail).contains("<h1>"), "{}", project.id);
            }
        }
    }
}
