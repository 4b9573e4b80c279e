//! DOM operations adapter.
//!
//! Thin layer over the `dom_query` crate, the tolerant-HTML-parser
//! collaborator. The discovery engine depends only on this narrow surface
//! (parse, query, read attributes and text), never on parser internals,
//! and never mutates the parsed tree.

// Re-export core types for the discovery engine
pub use dom_query::{Document, Selection};

// Re-export StrTendril so callers can hold zero-copy text
pub use tendril::StrTendril;

/// Parse an HTML string into a queryable document.
///
/// `dom_query` is tolerant: malformed markup yields a best-effort tree
/// rather than an error, which is exactly what adversarial input needs.
#[must_use]
pub fn parse(html: &str) -> Document {
    Document::from(html)
}

/// Get any attribute value.
#[inline]
#[must_use]
pub fn get_attribute(sel: &Selection, name: &str) -> Option<String> {
    sel.attr(name).map(|s| s.to_string())
}

/// Check if attribute exists.
#[inline]
#[must_use]
pub fn has_attribute(sel: &Selection, name: &str) -> bool {
    sel.has_attr(name)
}

/// Get element class attribute.
#[inline]
#[must_use]
pub fn class_name(sel: &Selection) -> Option<String> {
    sel.attr("class").map(|s| s.to_string())
}

/// Get element ID attribute.
#[inline]
#[must_use]
pub fn id(sel: &Selection) -> Option<String> {
    sel.attr("id").map(|s| s.to_string())
}

/// Get all text content of node and descendants.
///
/// Returns `StrTendril` for zero-copy passing. Use `.to_string()` only
/// when you need owned storage.
#[inline]
#[must_use]
pub fn text_content(sel: &Selection) -> StrTendril {
    sel.text()
}

/// Get outer HTML content (the element itself plus its subtree).
#[inline]
#[must_use]
pub fn outer_html(sel: &Selection) -> StrTendril {
    sel.html()
}
