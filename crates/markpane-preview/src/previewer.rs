//! The render→highlight→sanitize pipeline.

use markpane_highlight::Highlighter;
use markpane_renderer::{HtmlBackend, MarkdownRenderer, TocEntry};
use markpane_sanitize::Sanitizer;

use crate::options::PreviewOptions;

/// Result of one preview pass.
///
/// `html` has been sanitized and is the only representation that should
/// reach a display surface; the surface must insert it as-is, without
/// re-escaping.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PreviewResult {
    /// Sanitized HTML, safe for direct display.
    pub html: String,
    /// Title extracted from the first H1 heading (if enabled).
    pub title: Option<String>,
    /// Table of contents entries.
    pub toc: Vec<TocEntry>,
}

impl PreviewResult {
    pub(crate) fn empty() -> Self {
        Self {
            html: String::new(),
            title: None,
            toc: Vec::new(),
        }
    }
}

/// Markdown preview pipeline.
///
/// A pure function of (options, source): the same input always produces
/// the same [`PreviewResult`]. Stages run synchronously in memory; there
/// is no I/O and no failure path — any string in, displayable HTML out.
pub struct Previewer {
    options: PreviewOptions,
    sanitizer: Sanitizer,
}

impl Previewer {
    #[must_use]
    pub fn new(options: PreviewOptions) -> Self {
        Self {
            options,
            sanitizer: Sanitizer::new(),
        }
    }

    #[must_use]
    pub fn options(&self) -> &PreviewOptions {
        &self.options
    }

    /// Render markdown to sanitized HTML.
    pub fn render(&self, source: &str) -> PreviewResult {
        let mut renderer = MarkdownRenderer::<HtmlBackend>::new()
            .with_gfm(self.options.gfm)
            .with_hard_breaks(self.options.hard_breaks)
            .with_highlighter(Highlighter::new());
        if self.options.extract_title {
            renderer = renderer.with_title_extraction();
        }

        let rendered = renderer.render_markdown(source);
        let html = self.sanitizer.clean(&rendered.html);
        tracing::debug!(
            source_len = source.len(),
            html_len = html.len(),
            toc_entries = rendered.toc.len(),
            "rendered preview"
        );

        PreviewResult {
            html,
            title: rendered.title,
            toc: rendered.toc,
        }
    }
}

impl Default for Previewer {
    fn default() -> Self {
        Self::new(PreviewOptions::default())
    }
}
