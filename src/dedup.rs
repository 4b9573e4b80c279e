//! Logo deduplication and ranking.
//!
//! Discovery intentionally over-collects (multiple favicon sizes, the same
//! mark as raster and vector, header and footer copies); this module
//! collapses near-duplicates to one best representative per visual
//! identity. Losers are discarded outright, not merged or annotated.

use std::collections::HashMap;

use url::Url;

use crate::asset::AssetSource;
use crate::patterns::{DIGIT_RUN, WXH_TOKEN};
use crate::url_utils::extract_filename;

/// Filename tokens that carry no identity: favicon/touch-icon vendor noise.
const GENERIC_TOKENS: [&str; 6] = ["favicon", "icon", "touch", "apple", "android", "ms"];

/// A provisionally discovered logo, before deduplication.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogoCandidate {
    /// Absolute URL (or `data:` URL for inline vectors).
    pub url: String,
    /// Alt text, when the source element declared one.
    pub alt: Option<String>,
    /// Pixel size declared on the element (`sizes`/`width`/`height`).
    pub size_hint: Option<u32>,
    /// Where the candidate was discovered.
    pub source: AssetSource,
}

/// Collapse candidates to exactly one representative per group, preserving
/// first-seen group order.
#[must_use]
pub fn select_representatives(candidates: Vec<LogoCandidate>) -> Vec<LogoCandidate> {
    let mut group_order: Vec<String> = Vec::new();
    let mut best: HashMap<String, LogoCandidate> = HashMap::new();

    for candidate in candidates {
        let key = group_key(&candidate.url);
        match best.get(&key) {
            // Strictly-better rank replaces; ties keep the earlier candidate
            Some(current) if rank(&candidate) <= rank(current) => {}
            Some(_) => {
                best.insert(key, candidate);
            }
            None => {
                group_order.push(key.clone());
                best.insert(key, candidate);
            }
        }
    }

    group_order
        .into_iter()
        .filter_map(|key| best.remove(&key))
        .collect()
}

/// Grouping key: `(hostname, normalized filename)`. URLs that do not parse
/// or have no host (including `data:`) become singleton groups keyed by
/// their raw string and are never merged.
fn group_key(url: &str) -> String {
    match Url::parse(url) {
        Ok(parsed) => match parsed.host_str() {
            Some(host) => {
                let filename = extract_filename(parsed.path());
                format!("{}|{}", host.to_ascii_lowercase(), normalize_filename(&filename))
            }
            None => format!("raw|{url}"),
        },
        Err(_) => format!("raw|{url}"),
    }
}

/// Strip everything that varies between renditions of the same mark:
/// extension, generic vendor tokens, digit runs, separators.
fn normalize_filename(filename: &str) -> String {
    let mut name = filename.to_ascii_lowercase();

    if let Some((stem, _ext)) = name.rsplit_once('.') {
        name = stem.to_string();
    }

    // WxH tokens first, so `180x180` does not leave a stray `x` behind
    name = WXH_TOKEN.replace_all(&name, "").into_owned();

    for token in GENERIC_TOKENS {
        name = name.replace(token, "");
    }

    let name = DIGIT_RUN.replace_all(&name, "");
    name.chars()
        .filter(|c| !matches!(c, '-' | '_' | '.' | ' ' | '~'))
        .collect()
}

/// Ranking key, compared lexicographically in strict priority order:
/// larger size, then vector format, then meaningful alt text. Absent size
/// ranks below any declared size.
fn rank(candidate: &LogoCandidate) -> (Option<u32>, bool, bool) {
    (
        effective_size(candidate),
        is_vector(&candidate.url),
        has_meaningful_alt(candidate.alt.as_deref()),
    )
}

fn effective_size(candidate: &LogoCandidate) -> Option<u32> {
    let url_size = url_size_token(&candidate.url);
    match (candidate.size_hint, url_size) {
        (Some(declared), Some(implied)) => Some(declared.max(implied)),
        (declared, implied) => declared.or(implied),
    }
}

/// Parse an implied pixel size from the URL's filename: a `WxH` token
/// wins, otherwise the largest short digit run (`icon-192.png` -> 192).
fn url_size_token(url: &str) -> Option<u32> {
    let filename = extract_filename(url);

    if let Some(caps) = WXH_TOKEN.captures(&filename) {
        let width = caps.get(1)?.as_str().parse::<u32>().ok()?;
        let height = caps.get(2)?.as_str().parse::<u32>().ok()?;
        return Some(width.max(height));
    }

    DIGIT_RUN
        .find_iter(&filename)
        .filter(|m| m.as_str().len() <= 4)
        .filter_map(|m| m.as_str().parse::<u32>().ok())
        .max()
}

fn is_vector(url: &str) -> bool {
    url.to_ascii_lowercase().contains("svg")
}

fn has_meaningful_alt(alt: Option<&str>) -> bool {
    let Some(alt) = alt else { return false };
    let alt = alt.trim().to_ascii_lowercase();
    alt.len() > 3 && !alt.contains("favicon") && alt != "icon"
}
