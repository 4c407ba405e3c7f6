//! Whitelist HTML sanitizer for rendered markdown.
//!
//! The renderer's output may contain anything the author typed, including
//! raw HTML. [`Sanitizer`] reduces it to an enumerated set of structural
//! and formatting elements before it reaches a display surface. Built on
//! `ammonia`, which parses with a real HTML5 tree builder, so entity
//! encoding, broken nesting, and mixed-case tag names don't get around
//! the whitelist.
//!
//! Cleaning is idempotent: output that went through once passes through
//! a second time unchanged.

use std::collections::{HashMap, HashSet};

use ammonia::Builder;

/// Elements preserved in sanitized output.
///
/// Everything the markdown renderer emits, and nothing more: headings,
/// paragraph-level structure, inline formatting, lists, tables, code,
/// links, and images.
const ALLOWED_TAGS: &[&str] = &[
    "h1", "h2", "h3", "h4", "h5", "h6", "p", "br", "hr", "em", "strong", "s", "ul", "ol", "li",
    "table", "thead", "tbody", "tr", "th", "td", "blockquote", "code", "pre", "span", "sup",
    "sub", "input", "a", "img",
];

/// Elements removed together with their contents.
const CLEAN_CONTENT_TAGS: &[&str] = &["script", "style", "iframe", "object", "embed", "form"];

/// Alignment values the renderer writes on table cells.
const ALIGN_STYLES: &[&str] = &[
    "text-align:left",
    "text-align:center",
    "text-align:right",
];

/// HTML sanitizer with a fixed whitelist.
///
/// Construction configures the underlying [`ammonia::Builder`] once;
/// [`clean`](Self::clean) can then be called any number of times.
pub struct Sanitizer {
    builder: Builder<'static>,
}

impl Sanitizer {
    #[must_use]
    pub fn new() -> Self {
        let mut builder = Builder::default();
        builder
            .tags(ALLOWED_TAGS.iter().copied().collect::<HashSet<_>>())
            .clean_content_tags(CLEAN_CONTENT_TAGS.iter().copied().collect::<HashSet<_>>())
            .generic_attributes(HashSet::new())
            .tag_attributes(tag_attributes())
            .url_schemes(["http", "https", "mailto"].into_iter().collect())
            .link_rel(None)
            .attribute_filter(filter_attribute);
        Self { builder }
    }

    /// Strip `html` down to the whitelist.
    ///
    /// Total over arbitrary input; unparseable fragments are handled by
    /// the HTML5 tree builder's error recovery, never by failing.
    #[must_use]
    pub fn clean(&self, html: &str) -> String {
        self.builder.clean(html).to_string()
    }
}

impl Default for Sanitizer {
    fn default() -> Self {
        Self::new()
    }
}

fn tag_attributes() -> HashMap<&'static str, HashSet<&'static str>> {
    let mut attrs: HashMap<&'static str, HashSet<&'static str>> = HashMap::new();
    attrs.insert("a", ["href"].into_iter().collect());
    attrs.insert("img", ["src", "alt", "title"].into_iter().collect());
    // Heading anchors.
    for tag in ["h1", "h2", "h3", "h4", "h5", "h6"] {
        attrs.insert(tag, ["id"].into_iter().collect());
    }
    // Highlighter token spans and fence language markers.
    for tag in ["span", "code", "pre"] {
        attrs.insert(tag, ["class"].into_iter().collect());
    }
    // Table cell alignment.
    for tag in ["th", "td"] {
        attrs.insert(tag, ["style"].into_iter().collect());
    }
    // Task list checkboxes.
    attrs.insert("input", ["type", "checked", "disabled"].into_iter().collect());
    // Ordered list start offset.
    attrs.insert("ol", ["start"].into_iter().collect());
    attrs
}

/// Per-attribute value policy, applied after the whitelist.
///
/// The whitelist says which attributes may exist; this pins the values
/// of the ones that could otherwise smuggle styling or behavior.
fn filter_attribute<'u>(
    element: &str,
    attribute: &str,
    value: &'u str,
) -> Option<std::borrow::Cow<'u, str>> {
    match (element, attribute) {
        ("th" | "td", "style") => {
            let normalized = value.trim().trim_end_matches(';').replace(' ', "");
            ALIGN_STYLES
                .contains(&normalized.as_str())
                .then(|| normalized.into())
        }
        ("span" | "code" | "pre", "class") => {
            let kept: Vec<&str> = value
                .split_ascii_whitespace()
                .filter(|c| c.starts_with("hl-") || c.starts_with("language-"))
                .collect();
            if kept.is_empty() {
                None
            } else {
                Some(kept.join(" ").into())
            }
        }
        ("input", "type") => (value == "checkbox").then(|| value.into()),
        ("ol", "start") => value.parse::<u64>().is_ok().then(|| value.into()),
        _ => Some(value.into()),
    }
}
