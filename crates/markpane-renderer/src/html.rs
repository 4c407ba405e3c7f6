//! HTML backend for markdown rendering.
//!
//! Produces semantic HTML5 suitable for a preview pane.

use std::fmt::Write;

use crate::backend::RenderBackend;
use crate::state::escape_html;

/// HTML render backend.
///
/// Produces:
/// - `<pre><code class="language-…">` for code blocks
/// - `<blockquote>` for blockquotes
/// - `<img>` for images
pub struct HtmlBackend;

impl HtmlBackend {
    fn code_open(lang: Option<&str>, out: &mut String) {
        match lang {
            Some(lang) => write!(
                out,
                r#"<pre><code class="language-{}">"#,
                escape_html(lang)
            )
            .unwrap(),
            None => out.push_str("<pre><code>"),
        }
    }
}

impl RenderBackend for HtmlBackend {
    fn code_block(lang: Option<&str>, content: &str, out: &mut String) {
        Self::code_open(lang, out);
        out.push_str(&escape_html(content));
        out.push_str("</code></pre>");
    }

    fn highlighted_code_block(lang: Option<&str>, markup: &str, out: &mut String) {
        Self::code_open(lang, out);
        out.push_str(markup);
        out.push_str("</code></pre>");
    }

    fn blockquote_start(out: &mut String) {
        out.push_str("<blockquote>");
    }

    fn blockquote_end(out: &mut String) {
        out.push_str("</blockquote>");
    }

    fn image(src: &str, alt: &str, title: &str, out: &mut String) {
        let title_attr = if title.is_empty() {
            String::new()
        } else {
            format!(r#" title="{}""#, escape_html(title))
        };
        write!(
            out,
            r#"<img src="{}"{title_attr} alt="{}">"#,
            escape_html(src),
            escape_html(alt)
        )
        .unwrap();
    }
}
