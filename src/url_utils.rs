//! URL utility functions.
//!
//! Validation, resolution, and filename extraction for candidate URLs.
//! Every URL-bearing asset the pipeline emits must be absolute; resolution
//! happens here at discovery time, and a failure drops the one candidate
//! rather than aborting extraction.

use std::sync::LazyLock;

use url::Url;

/// Placeholder base used when the caller hands the pipeline a structurally
/// invalid base URL. Extraction degrades (relative candidates resolve
/// against a host that serves nothing) instead of failing.
#[allow(clippy::expect_used)]
static PLACEHOLDER_BASE: LazyLock<Url> =
    LazyLock::new(|| Url::parse("https://invalid.example/").expect("valid placeholder URL"));

/// Check if a string is a valid absolute http(s) URL.
///
/// # Returns
/// * `(is_absolute, parsed_url)` - Whether URL is absolute and the parsed URL if valid
#[must_use]
pub fn is_absolute_url(s: &str) -> (bool, Option<Url>) {
    let s = s.trim();

    if s.is_empty() {
        return (false, None);
    }

    if !s.starts_with("http://") && !s.starts_with("https://") {
        return (false, None);
    }

    match Url::parse(s) {
        Ok(url) => {
            if url.host().is_some() {
                (true, Some(url))
            } else {
                (false, None)
            }
        }
        Err(_) => (false, None),
    }
}

/// Parse a caller-supplied base URL, falling back to the placeholder base
/// when it is structurally invalid.
///
/// # Returns
/// * `(base, was_valid)` - The base to resolve against and whether the input parsed
#[must_use]
pub fn parse_base_url(base_url: &str) -> (Url, bool) {
    let (is_abs, parsed) = is_absolute_url(base_url);
    if is_abs {
        if let Some(url) = parsed {
            return (url, true);
        }
    }
    (PLACEHOLDER_BASE.clone(), false)
}

/// Resolve a raw candidate URL against the document base.
///
/// `data:` URLs pass through unchanged (inline-embedded images and vectors
/// live there). Non-fetchable schemes and resolution failures return `None`,
/// which drops exactly that one candidate.
#[must_use]
pub fn resolve_candidate_url(raw: &str, base: &Url) -> Option<String> {
    let raw = raw.trim();

    if raw.is_empty() {
        return None;
    }

    if raw.starts_with("data:") {
        return Some(raw.to_string());
    }

    let lower = raw.to_ascii_lowercase();
    if lower.starts_with("javascript:")
        || lower.starts_with("vbscript:")
        || lower.starts_with("mailto:")
        || lower.starts_with("tel:")
        || lower.starts_with('#')
    {
        return None;
    }

    let (is_abs, _) = is_absolute_url(raw);
    if is_abs {
        return Some(raw.to_string());
    }

    base.join(raw).ok().map(|resolved| resolved.to_string())
}

/// Extract the filename from a URL path, stripping query parameters and
/// fragments.
///
/// # Examples
/// ```
/// use brandsift::url_utils::extract_filename;
///
/// assert_eq!(extract_filename("https://example.com/images/photo.jpg"), "photo.jpg");
/// assert_eq!(extract_filename("https://example.com/icon-32.png?v=123"), "icon-32.png");
/// assert_eq!(extract_filename("/path/to/image.png#section"), "image.png");
/// assert_eq!(extract_filename("https://example.com/"), "");
/// ```
#[must_use]
pub fn extract_filename(url: &str) -> String {
    let url = url.trim();

    if url.is_empty() {
        return String::new();
    }

    let without_query = url.split('?').next().unwrap_or(url);
    let without_fragment = without_query.split('#').next().unwrap_or(without_query);

    let filename = without_fragment.split('/').next_back().unwrap_or("").trim();

    if filename.is_empty() || filename == "." || filename == ".." {
        return String::new();
    }

    filename.to_string()
}
