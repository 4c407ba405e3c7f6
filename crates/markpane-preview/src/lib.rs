//! Markdown preview pipeline.
//!
//! Glues the three independent stages into the operation a preview UI
//! needs: markdown text in, safe HTML out.
//!
//! - [`markpane_renderer`] parses markdown into an HTML string,
//! - [`markpane_highlight`] supplies token markup for fenced code blocks,
//! - [`markpane_sanitize`] strips the result down to a whitelist before
//!   anything reaches a display surface.
//!
//! [`Previewer`] is the stateless pipeline; [`PreviewSession`] adds the
//! editing state around it (current source text, coalesced re-renders,
//! pane view state).
//!
//! # Example
//!
//! ```
//! use markpane_preview::{PreviewOptions, Previewer};
//!
//! let previewer = Previewer::new(PreviewOptions::default());
//! let result = previewer.render("# Hello\n\n<script>alert(1)</script>");
//! assert!(result.html.contains("<h1"));
//! assert!(!result.html.contains("script"));
//! ```

mod options;
mod previewer;
mod sample;
mod session;
mod view;

pub use markpane_renderer::TocEntry;
pub use options::{OptionsError, PreviewOptions};
pub use previewer::{PreviewResult, Previewer};
pub use sample::DEFAULT_DOCUMENT;
pub use session::PreviewSession;
pub use view::{PaneVisibility, ViewState};
