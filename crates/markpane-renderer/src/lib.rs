//! Event-driven markdown renderer with pluggable backends.
//!
//! This crate converts markdown text into an HTML string by walking
//! [`pulldown_cmark`] events. Format-specific output goes through the
//! [`RenderBackend`] trait; fenced code block bodies go through the
//! [`CodeHighlighter`] seam so highlighting stays out of the parser walk.
//!
//! The output is *not* safe for direct display. Raw HTML embedded in the
//! source passes through unmodified, so callers must sanitize the result
//! before handing it to a viewer.
//!
//! # Example
//!
//! ```
//! use markpane_renderer::{HtmlBackend, MarkdownRenderer};
//!
//! let mut renderer = MarkdownRenderer::<HtmlBackend>::new();
//! let result = renderer.render_markdown("# Hello\n\n**Bold** text");
//! assert!(result.html.contains("<strong>Bold</strong>"));
//! ```

mod backend;
mod code;
mod html;
mod renderer;
mod state;

pub use backend::RenderBackend;
pub use code::{CodeHighlighter, fence_language};
pub use html::HtmlBackend;
pub use renderer::{MarkdownRenderer, RenderResult};
pub use state::{TocEntry, escape_html, slugify};
