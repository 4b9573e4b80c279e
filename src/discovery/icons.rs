//! Icon-link and `og:logo` candidate collection.

use url::Url;

use crate::asset::AssetSource;
use crate::dedup::LogoCandidate;
use crate::dom::{self, Document, Selection};
use crate::patterns::WXH_TOKEN;
use crate::url_utils::resolve_candidate_url;

/// Collect every icon-style `<link>` (favicon, shortcut icon, touch-icon,
/// mask-icon, any declared size) as a logo candidate.
///
/// Returns whether any favicon-style reference was present at all - the
/// engine only synthesizes the `/favicon.ico` fallback when none was.
pub(super) fn collect_icon_candidates(
    doc: &Document,
    base: &Url,
    out: &mut Vec<LogoCandidate>,
) -> bool {
    let mut found_reference = false;

    for node in doc.select("link").nodes() {
        let link = Selection::from(*node);

        let Some(rel) = dom::get_attribute(&link, "rel") else {
            continue;
        };
        let rel = rel.to_ascii_lowercase();
        if !rel.split_whitespace().any(|token| token.contains("icon")) {
            continue;
        }

        // The reference counts even when its href turns out unusable
        found_reference = true;

        let Some(href) = dom::get_attribute(&link, "href") else {
            continue;
        };
        let Some(url) = resolve_candidate_url(&href, base) else {
            continue;
        };

        let size_hint = dom::get_attribute(&link, "sizes").and_then(|s| parse_sizes_attr(&s));

        out.push(LogoCandidate {
            url,
            alt: None,
            size_hint,
            source: AssetSource::LinkReference,
        });
    }

    found_reference
}

/// Collect an `og:logo` meta reference when present. Publishers that set
/// it point straight at the brand mark, so it enters the candidate list
/// alongside the icon links.
pub(super) fn collect_meta_logo(doc: &Document, base: &Url, out: &mut Vec<LogoCandidate>) {
    for node in doc.select("meta[property='og:logo']").nodes() {
        let meta = Selection::from(*node);
        let Some(content) = dom::get_attribute(&meta, "content") else {
            continue;
        };
        let Some(url) = resolve_candidate_url(&content, base) else {
            continue;
        };
        out.push(LogoCandidate {
            url,
            alt: None,
            size_hint: None,
            source: AssetSource::MarkupAttribute,
        });
    }
}

/// Parse a `sizes` attribute (`"32x32"`, `"16x16 32x32"`, `"any"`) into
/// the largest declared dimension.
fn parse_sizes_attr(value: &str) -> Option<u32> {
    WXH_TOKEN
        .captures_iter(value)
        .filter_map(|caps| {
            let width = caps.get(1)?.as_str().parse::<u32>().ok()?;
            let height = caps.get(2)?.as_str().parse::<u32>().ok()?;
            Some(width.max(height))
        })
        .max()
}
