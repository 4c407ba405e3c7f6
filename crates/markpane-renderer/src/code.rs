//! Code highlighting seam for fenced code blocks.
//!
//! The renderer buffers each fenced block's raw text together with the
//! language token from the fence info string, then asks the installed
//! [`CodeHighlighter`] for markup. A highlighter that declines (or the
//! absence of one) falls back to escaped plain text, so rendering never
//! depends on a highlighter being present or succeeding.

/// Trait for turning a fenced code block body into display markup.
///
/// Implementations must be total: a malformed or incomplete fragment
/// degrades to `None` (plain-text rendering), never an error.
pub trait CodeHighlighter {
    /// Highlight `code` according to `lang`.
    ///
    /// Returns balanced markup ready to embed inside `<pre><code>`, or
    /// `None` to let the renderer escape the literal text instead. `lang`
    /// is the raw fence token, if any; recognizing it is up to the
    /// implementation.
    fn highlight(&mut self, code: &str, lang: Option<&str>) -> Option<String>;
}

/// Extract the language token from a fence info string.
///
/// The token is everything up to the first whitespace; trailing
/// attributes some tools put after it (`rust ignore`, `python {.numbered}`)
/// are dropped. An empty info string yields `None`.
#[must_use]
pub fn fence_language(info: &str) -> Option<String> {
    let token = info.split_whitespace().next()?;
    if token.is_empty() {
        None
    } else {
        Some(token.to_owned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fence_language_plain() {
        assert_eq!(fence_language("rust"), Some("rust".to_owned()));
    }

    #[test]
    fn test_fence_language_trailing_attrs_dropped() {
        assert_eq!(fence_language("rust ignore"), Some("rust".to_owned()));
        assert_eq!(fence_language("python {.numbered}"), Some("python".to_owned()));
    }

    #[test]
    fn test_fence_language_empty() {
        assert_eq!(fence_language(""), None);
        assert_eq!(fence_language("   "), None);
    }

    #[test]
    fn test_fence_language_leading_whitespace() {
        assert_eq!(fence_language("  js"), Some("js".to_owned()));
    }
}
