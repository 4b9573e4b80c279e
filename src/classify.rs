//! Logo-likeness heuristic.
//!
//! An element is logo-like if any of its URL, alt text, class list, or id
//! contains one of a fixed keyword set (case-insensitive substring match).
//! Intentionally permissive - it favors recall, and downstream
//! deduplication absorbs the over-collection.

/// Keywords whose presence marks an element as logo-like.
const LOGO_KEYWORDS: [&str; 4] = ["logo", "brand", "mark", "icon"];

/// Score whether an image/icon/vector node is logo-like.
#[must_use]
pub fn is_logo_like(url: &str, alt: Option<&str>, class: Option<&str>, id: Option<&str>) -> bool {
    contains_keyword(url)
        || alt.is_some_and(contains_keyword)
        || class.is_some_and(contains_keyword)
        || id.is_some_and(contains_keyword)
}

fn contains_keyword(text: &str) -> bool {
    let text = text.to_ascii_lowercase();
    LOGO_KEYWORDS.iter().any(|keyword| text.contains(keyword))
}
