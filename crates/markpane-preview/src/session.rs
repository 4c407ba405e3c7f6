//! Editing session state around the preview pipeline.

use crate::previewer::{PreviewResult, Previewer};
use crate::sample::DEFAULT_DOCUMENT;
use crate::view::ViewState;

/// Holds the current source text and its rendered preview.
///
/// Every edit replaces the source wholesale (no diffing) and bumps a
/// revision counter. Rendering happens on [`flush`](Self::flush): an
/// embedder can call [`replace_source`](Self::replace_source) per
/// keystroke and flush on its own schedule, and the installed result
/// always corresponds to the *latest* source — a superseded revision is
/// never rendered, so a stale preview can never be shown after a newer
/// one.
pub struct PreviewSession {
    previewer: Previewer,
    source: String,
    /// Bumped on every edit.
    revision: u64,
    /// Revision the installed result was rendered from.
    rendered_revision: u64,
    result: PreviewResult,
    view: ViewState,
}

impl PreviewSession {
    /// Create a session seeded with the default sample document.
    #[must_use]
    pub fn new(previewer: Previewer) -> Self {
        Self::with_source(previewer, DEFAULT_DOCUMENT)
    }

    /// Create a session with the given initial source, already rendered.
    #[must_use]
    pub fn with_source(previewer: Previewer, source: impl Into<String>) -> Self {
        let mut session = Self {
            previewer,
            source: source.into(),
            revision: 1,
            rendered_revision: 0,
            result: PreviewResult::empty(),
            view: ViewState::default(),
        };
        session.flush();
        session
    }

    /// Replace the source text and render immediately.
    pub fn set_source(&mut self, source: impl Into<String>) -> &PreviewResult {
        self.replace_source(source);
        self.flush();
        self.result()
    }

    /// Replace the source text without rendering.
    ///
    /// Cheap enough to call on every keystroke; pair with
    /// [`flush`](Self::flush) to coalesce rapid edits into one render.
    pub fn replace_source(&mut self, source: impl Into<String>) {
        self.source = source.into();
        self.revision += 1;
    }

    /// Render the current source if it is newer than the installed result.
    ///
    /// Returns `true` if a render ran, `false` if the result was already
    /// current and the intermediate revisions were skipped.
    pub fn flush(&mut self) -> bool {
        if self.rendered_revision == self.revision {
            tracing::debug!(revision = self.revision, "preview already current");
            return false;
        }
        let revision = self.revision;
        self.result = self.previewer.render(&self.source);
        self.rendered_revision = revision;
        true
    }

    /// Whether edits are pending that the installed result doesn't show.
    #[must_use]
    pub fn is_dirty(&self) -> bool {
        self.rendered_revision != self.revision
    }

    #[must_use]
    pub fn source(&self) -> &str {
        &self.source
    }

    /// The preview for the most recently flushed source.
    #[must_use]
    pub fn result(&self) -> &PreviewResult {
        &self.result
    }

    #[must_use]
    pub fn view(&self) -> ViewState {
        self.view
    }

    pub fn toggle_editor_full_screen(&mut self) -> ViewState {
        self.view = self.view.toggle_editor();
        self.view
    }

    pub fn toggle_preview_full_screen(&mut self) -> ViewState {
        self.view = self.view.toggle_preview();
        self.view
    }
}

impl Default for PreviewSession {
    fn default() -> Self {
        Self::new(Previewer::default())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_new_session_renders_sample() {
        let session = PreviewSession::default();
        assert_eq!(session.source(), DEFAULT_DOCUMENT);
        assert!(session.result().html.contains("<h1"));
        assert!(!session.is_dirty());
    }

    #[test]
    fn test_set_source_rerenders() {
        let mut session = PreviewSession::default();
        let result = session.set_source("# Changed");
        assert!(result.html.contains("Changed"));
        assert!(!session.is_dirty());
    }

    #[test]
    fn test_replace_source_defers_render() {
        let mut session = PreviewSession::default();
        session.replace_source("# Pending");
        assert!(session.is_dirty());
        // The installed result still shows the previous source.
        assert!(!session.result().html.contains("Pending"));

        assert!(session.flush());
        assert!(session.result().html.contains("Pending"));
        assert!(!session.is_dirty());
    }

    #[test]
    fn test_flush_coalesces_rapid_edits() {
        let mut session = PreviewSession::default();
        session.replace_source("# One");
        session.replace_source("# Two");
        session.replace_source("# Three");

        assert!(session.flush());
        // Only the latest source is ever rendered.
        assert!(session.result().html.contains("Three"));
        assert!(!session.result().html.contains("One"));

        // Nothing new to render.
        assert!(!session.flush());
    }

    #[test]
    fn test_stale_result_never_survives_newer_edit() {
        let mut session = PreviewSession::default();
        session.set_source("# Old");
        session.replace_source("# New");
        session.flush();
        assert!(!session.result().html.contains("Old"));
        assert!(session.result().html.contains("New"));
    }

    #[test]
    fn test_view_toggles() {
        let mut session = PreviewSession::default();
        assert_eq!(session.view(), ViewState::default());

        let view = session.toggle_editor_full_screen();
        assert!(view.editor_full_screen);
        assert!(!view.visibility().preview);

        let view = session.toggle_editor_full_screen();
        assert_eq!(view, ViewState::default());
    }

    #[test]
    fn test_render_runs_regardless_of_view_state() {
        let mut session = PreviewSession::default();
        session.toggle_preview_full_screen();
        let result = session.set_source("# Hidden editor");
        assert!(result.html.contains("Hidden editor"));
    }
}
