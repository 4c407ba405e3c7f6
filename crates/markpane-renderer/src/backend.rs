//! Render backend trait for format-specific output.

/// Backend trait for format-specific rendering operations.
///
/// The generic renderer handles structure (paragraphs, headings, lists,
/// tables, inline formatting) and delegates the elements whose markup
/// varies by output flavor to the backend.
pub trait RenderBackend {
    /// Render a code block whose body is plain text.
    ///
    /// The backend is responsible for escaping `content`.
    fn code_block(lang: Option<&str>, content: &str, out: &mut String);

    /// Render a code block whose body is already well-formed markup
    /// (produced by a [`CodeHighlighter`](crate::CodeHighlighter)).
    ///
    /// `markup` is embedded verbatim and must not be escaped again.
    fn highlighted_code_block(lang: Option<&str>, markup: &str, out: &mut String);

    /// Render blockquote start tag.
    fn blockquote_start(out: &mut String);

    /// Render blockquote end tag.
    fn blockquote_end(out: &mut String);

    /// Render an image with collected alt text and optional title.
    fn image(src: &str, alt: &str, title: &str, out: &mut String);

    /// Render a hard line break.
    fn hard_break(out: &mut String) {
        out.push_str("<br>");
    }

    /// Render a horizontal rule.
    fn horizontal_rule(out: &mut String) {
        out.push_str("<hr>");
    }

    /// Render a task list marker.
    fn task_list_marker(checked: bool, out: &mut String) {
        if checked {
            out.push_str(r#"<input type="checkbox" checked disabled> "#);
        } else {
            out.push_str(r#"<input type="checkbox" disabled> "#);
        }
    }
}
