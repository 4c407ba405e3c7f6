//! Pane view state for the surrounding UI.
//!
//! The editor and preview panes each have an independent full-screen
//! toggle. These are plain values re-derived on every redraw; the render
//! pipeline runs regardless of them.

/// Full-screen toggle state for the two panes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ViewState {
    /// Editor pane occupies the full window.
    pub editor_full_screen: bool,
    /// Preview pane occupies the full window.
    pub preview_full_screen: bool,
}

/// Which panes are currently visible.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PaneVisibility {
    pub editor: bool,
    pub preview: bool,
}

impl ViewState {
    /// Flip the editor full-screen toggle.
    #[must_use]
    pub fn toggle_editor(self) -> Self {
        Self {
            editor_full_screen: !self.editor_full_screen,
            ..self
        }
    }

    /// Flip the preview full-screen toggle.
    #[must_use]
    pub fn toggle_preview(self) -> Self {
        Self {
            preview_full_screen: !self.preview_full_screen,
            ..self
        }
    }

    /// Derive pane visibility from the toggles.
    ///
    /// Each pane hides when the *other* pane goes full-screen, so both
    /// toggles off shows the split view.
    #[must_use]
    pub fn visibility(self) -> PaneVisibility {
        PaneVisibility {
            editor: !self.preview_full_screen,
            preview: !self.editor_full_screen,
        }
    }
}
