//! Syntect-backed code block highlighting.
//!
//! [`Highlighter`] turns a fenced code block body into class-tagged
//! `<span>` markup, one class per token category, using syntect's bundled
//! syntax definitions. Unknown or absent languages fall back to escaped
//! plain text; nothing in this crate returns an error to the caller.
//!
//! Class names carry the `hl-` prefix; [`theme_css`] produces a matching
//! stylesheet so the host page can style them.

use std::sync::OnceLock;

use markpane_renderer::{CodeHighlighter, escape_html};
use syntect::highlighting::ThemeSet;
use syntect::html::{ClassStyle, ClassedHTMLGenerator, css_for_theme_with_class_style};
use syntect::parsing::{SyntaxReference, SyntaxSet};
use syntect::util::LinesWithEndings;

/// Class style shared by the generator and the theme CSS.
const CLASS_STYLE: ClassStyle = ClassStyle::SpacedPrefixed { prefix: "hl-" };

static SYNTAXES: OnceLock<SyntaxSet> = OnceLock::new();
static THEME_CSS: OnceLock<String> = OnceLock::new();

fn syntax_set() -> &'static SyntaxSet {
    SYNTAXES.get_or_init(SyntaxSet::load_defaults_newlines)
}

/// Stylesheet for the `hl-` token classes, generated once per process.
///
/// Uses the InspiredGitHub theme, matching the light editor chrome the
/// preview ships with.
pub fn theme_css() -> &'static str {
    THEME_CSS.get_or_init(|| {
        let themes = ThemeSet::load_defaults();
        let theme = themes
            .themes
            .get("InspiredGitHub")
            .or_else(|| themes.themes.values().next())
            .expect("syntect ships at least one theme");
        css_for_theme_with_class_style(theme, CLASS_STYLE).unwrap_or_default()
    })
}

/// Map common fence tokens to syntect syntax tokens.
///
/// Fence info strings use ad-hoc shorthands (`js`, `py`, `sh`) that don't
/// always match syntect's token/extension tables.
fn normalize_lang(lang: &str) -> &str {
    let l = lang.trim();
    match l.to_ascii_lowercase().as_str() {
        "sh" | "bash" | "zsh" | "shell" | "console" | "shellsession" => "bash",
        "js" | "javascript" | "mjs" | "cjs" => "javascript",
        "ts" | "typescript" => "typescript",
        "py" | "python" | "py3" => "python",
        "rb" | "ruby" => "ruby",
        "rs" | "rust" => "rust",
        "yml" | "yaml" => "yaml",
        "md" | "markdown" => "markdown",
        "html" | "htm" => "html",
        "c++" | "cpp" | "cxx" | "cc" => "cpp",
        "cs" | "csharp" => "cs",
        "kt" | "kotlin" => "kotlin",
        "docker" | "dockerfile" => "dockerfile",
        "make" | "makefile" => "makefile",
        _ => l,
    }
}

fn find_syntax(lang: &str) -> Option<&'static SyntaxReference> {
    let ps = syntax_set();
    let lang = normalize_lang(lang);
    ps.find_syntax_by_token(lang)
        .or_else(|| ps.find_syntax_by_extension(lang))
        .or_else(|| ps.find_syntax_by_name(lang))
}

/// Syntax highlighter for fenced code blocks.
///
/// Stateless per call; the syntax definitions behind it are loaded once
/// per process and shared.
#[derive(Clone, Copy, Debug, Default)]
pub struct Highlighter;

impl Highlighter {
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Check whether a fence language token maps to a known syntax.
    #[must_use]
    pub fn recognizes(&self, lang: &str) -> bool {
        find_syntax(lang).is_some()
    }

    /// Highlight `code` as `lang`, returning class-tagged span markup.
    ///
    /// Unknown languages and per-line tokenizer failures fall back to the
    /// escaped literal text, so the result is always balanced markup with
    /// the same visible content as the input.
    #[must_use]
    pub fn highlight(&self, code: &str, lang: Option<&str>) -> String {
        let Some(syntax) = lang.and_then(find_syntax) else {
            return escape_html(code);
        };
        highlight_with(syntax, code)
    }
}

fn highlight_with(syntax: &SyntaxReference, code: &str) -> String {
    let ps = syntax_set();
    let mut generator = ClassedHTMLGenerator::new_with_class_style(syntax, ps, CLASS_STYLE);
    for line in LinesWithEndings::from(code) {
        if let Err(e) = generator.parse_html_for_line_which_includes_newline(line) {
            tracing::warn!(error = %e, syntax = %syntax.name, "highlighting failed, using plain text");
            return escape_html(code);
        }
    }
    generator.finalize()
}

impl CodeHighlighter for Highlighter {
    /// Produce markup for the renderer, or decline.
    ///
    /// Declines when no language token is present or it maps to no known
    /// syntax — the renderer then escapes the literal text itself, which
    /// keeps a single escaping path for unhighlighted code.
    fn highlight(&mut self, code: &str, lang: Option<&str>) -> Option<String> {
        let syntax = lang.and_then(find_syntax)?;
        Some(highlight_with(syntax, code))
    }
}
