//! # brandsift
//!
//! Brand identity asset extraction from web page markup.
//!
//! This library takes the raw markup of a fetched page and produces a
//! ranked, deduplicated set of brand-representative assets: logos, color
//! palettes, font families, and illustrative imagery. It classifies
//! loosely-structured, adversarial, near-duplicate markup heuristically,
//! normalizes inconsistent value encodings (colors, font declarations,
//! relative URLs), and sanitizes hostile input without losing the markup
//! signal extraction depends on.
//!
//! ## Quick Start
//!
//! ```rust
//! use brandsift::extract_assets;
//!
//! let html = r#"<link rel="icon" href="/favicon.ico">
//! <img src="/logo.png" alt="Acme" class="logo">
//! <style>body { color: #336699 }</style>"#;
//!
//! let assets = extract_assets(html, "https://acme.test");
//! assert_eq!(assets.logos.len(), 2);
//! assert_eq!(assets.colors[0].value, "#336699");
//! ```
//!
//! ## Features
//!
//! - **Logo discovery**: icon links, logo-like images, inline vectors,
//!   `og:logo`, with near-duplicates collapsed to one best representative
//! - **Color/font normalization**: canonical color tokens, font-service
//!   link parsing, generic-family filtering
//! - **Dual-mode sanitization**: strict scrubbing for re-serving, and an
//!   extraction-preserving mode that keeps discovery signal intact
//! - **Rate limiting**: a fixed-window counter over a pluggable expiring
//!   key-value store, gating the upstream fetch

mod error;
mod options;
mod patterns;

/// Output data model: tagged asset variants and the extracted set.
pub mod asset;

/// Logo-likeness heuristic.
pub mod classify;

/// Color normalization to canonical comparable form.
pub mod color;

/// Logo deduplication and ranking.
pub mod dedup;

/// DOM operations adapter over the tolerant HTML parser.
pub mod dom;

/// Character encoding detection and transcoding.
pub mod encoding;

/// Fixed-window request rate limiting over a shared counter store.
pub mod ratelimit;

/// Dual-mode content sanitization.
pub mod sanitize;

/// URL validation, resolution, and filename utilities.
pub mod url_utils;

mod discovery;

// Public API - re-exports
pub use asset::{
    AssetSource, BrandAsset, ColorAsset, ExtractedAssetSet, FontAsset, IllustrationAsset,
    LogoAsset,
};
pub use error::{Error, Result};
pub use options::Options;
pub use ratelimit::{CounterStore, InMemoryStore, RateLimitDecision, RateLimiter};
pub use sanitize::{sanitize, SanitizeMode};

use std::borrow::Cow;

/// Extract brand assets from markup using default options.
///
/// Never fails: malformed markup yields empty collections, and a
/// structurally invalid `base_url` falls back to a placeholder base
/// (recorded in `warnings`) rather than erroring.
///
/// # Example
///
/// ```rust
/// use brandsift::extract_assets;
///
/// let assets = extract_assets("<img src='/logo.svg' class='logo'>", "https://acme.test");
/// assert!(assets.logos.iter().any(|logo| logo.url == "https://acme.test/logo.svg"));
/// ```
#[must_use]
pub fn extract_assets(raw_markup: &str, base_url: &str) -> ExtractedAssetSet {
    extract_assets_with_options(raw_markup, base_url, &Options::default())
}

/// Extract brand assets from markup with custom options.
///
/// # Example
///
/// ```rust
/// use brandsift::{extract_assets_with_options, Options};
///
/// let options = Options {
///     synthesize_favicon: false,
///     ..Options::default()
/// };
/// let assets = extract_assets_with_options("<p>plain page</p>", "https://acme.test", &options);
/// assert!(assets.is_empty());
/// ```
#[must_use]
pub fn extract_assets_with_options(
    raw_markup: &str,
    base_url: &str,
    options: &Options,
) -> ExtractedAssetSet {
    let (base, base_valid) = url_utils::parse_base_url(base_url);

    let markup: Cow<'_, str> = if options.sanitize_input {
        Cow::Owned(sanitize(raw_markup, SanitizeMode::ExtractionPreserving))
    } else {
        Cow::Borrowed(raw_markup)
    };

    let document = dom::parse(&markup);
    let mut set = discovery::discover_assets(&document, &base, options);

    if !base_valid {
        set.warnings.insert(
            0,
            format!("base URL {base_url:?} is not a valid absolute http(s) URL; candidates resolved against a placeholder base"),
        );
    }

    set
}

/// Extract brand assets from raw bytes with automatic encoding detection.
///
/// Detects the charset from meta tags and transcodes to UTF-8 before
/// extraction; invalid characters are replaced rather than failing.
#[must_use]
pub fn extract_assets_bytes(raw_markup: &[u8], base_url: &str) -> ExtractedAssetSet {
    let markup = encoding::transcode_to_utf8(raw_markup);
    extract_assets(&markup, base_url)
}

/// Extract brand assets from raw bytes with custom options and automatic
/// encoding detection.
#[must_use]
pub fn extract_assets_bytes_with_options(
    raw_markup: &[u8],
    base_url: &str,
    options: &Options,
) -> ExtractedAssetSet {
    let markup = encoding::transcode_to_utf8(raw_markup);
    extract_assets_with_options(&markup, base_url, options)
}
