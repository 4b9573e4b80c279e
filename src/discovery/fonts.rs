//! Font candidate collection.
//!
//! Two paths: font-service `<link>` references (parsed for family names
//! where the service URL carries them, otherwise a per-service placeholder
//! name) and `font-family`/`font` shorthand declarations in style text.
//! Generic CSS family keywords and platform system-font aliases are never
//! emitted as candidates.

use std::collections::HashSet;
use std::sync::LazyLock;

use url::Url;

use crate::asset::AssetSource;
use crate::dom::{self, Document, Selection};
use crate::options::Options;
use crate::patterns::{FONT_FAMILY_DECL, FONT_SHORTHAND, FONT_SIZE_TOKEN};
use crate::url_utils::resolve_candidate_url;

use super::{styles, AssetCollector};

/// Generic family keywords, platform system-font aliases, and CSS-wide
/// values - none of these name a brand font.
static GENERIC_FAMILIES: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    [
        "serif",
        "sans-serif",
        "monospace",
        "cursive",
        "fantasy",
        "system-ui",
        "ui-serif",
        "ui-sans-serif",
        "ui-monospace",
        "ui-rounded",
        "math",
        "emoji",
        "fangsong",
        "-apple-system",
        "blinkmacsystemfont",
        "inherit",
        "initial",
        "unset",
        "revert",
        "revert-layer",
        "none",
    ]
    .into_iter()
    .collect()
});

/// Known font-service hosts. `family_param` marks services whose URLs
/// carry a parseable `family=` parameter; the rest get the placeholder
/// label as the candidate name.
const FONT_SERVICES: [(&str, &str, bool); 5] = [
    ("fonts.googleapis.com", "Google Fonts", true),
    ("fonts.bunny.net", "Bunny Fonts", true),
    ("use.typekit.net", "Adobe Fonts", false),
    ("cloud.typography.com", "Cloud.typography", false),
    ("fast.fonts.net", "Fonts.com", false),
];

pub(super) fn collect_font_assets(
    doc: &Document,
    base: &Url,
    options: &Options,
    collector: &mut AssetCollector,
) {
    for node in doc.select("link").nodes() {
        let link = Selection::from(*node);
        let Some(href) = dom::get_attribute(&link, "href") else {
            continue;
        };
        let Some(resolved) = resolve_candidate_url(&href, base) else {
            continue;
        };
        let Ok(parsed) = Url::parse(&resolved) else {
            continue;
        };
        let Some(host) = parsed.host_str() else {
            continue;
        };
        let host = host.to_ascii_lowercase();

        for (service_host, label, family_param) in FONT_SERVICES {
            if host != service_host {
                continue;
            }

            let families = if family_param { parse_family_param(&parsed) } else { Vec::new() };
            if families.is_empty() {
                collector.push_font(
                    label.to_string(),
                    Some(resolved.clone()),
                    AssetSource::LinkReference,
                );
            } else {
                for family in families {
                    collector.push_font(family, Some(resolved.clone()), AssetSource::LinkReference);
                }
            }
            break;
        }
    }

    for (text, source) in styles::style_texts(doc, options) {
        collect_declared_families(&text, source, collector);
    }
}

/// Family names from a `family=` query parameter: `|`-separated
/// multi-family lists with `:`-delimited weight suffixes stripped.
/// Query decoding already turned `+` into spaces.
fn parse_family_param(url: &Url) -> Vec<String> {
    let mut families = Vec::new();

    for (key, value) in url.query_pairs() {
        if key != "family" {
            continue;
        }
        for entry in value.split('|') {
            let name = entry.split(':').next().unwrap_or("").trim();
            if !name.is_empty() {
                families.push(name.to_string());
            }
        }
    }

    families
}

fn collect_declared_families(text: &str, source: AssetSource, collector: &mut AssetCollector) {
    for caps in FONT_FAMILY_DECL.captures_iter(text) {
        if let Some(list) = caps.get(1) {
            push_family_list(list.as_str(), source, collector);
        }
    }

    // `font` shorthand: the family list follows the size token
    for caps in FONT_SHORTHAND.captures_iter(text) {
        let Some(value) = caps.get(1) else { continue };
        let value = value.as_str();
        if let Some(size) = FONT_SIZE_TOKEN.find(value) {
            push_family_list(&value[size.end()..], source, collector);
        }
    }
}

fn push_family_list(list: &str, source: AssetSource, collector: &mut AssetCollector) {
    for raw in list.split(',') {
        let name = raw.trim().trim_matches('"').trim_matches('\'').trim();
        if name.is_empty() || name.contains("var(") {
            continue;
        }
        if GENERIC_FAMILIES.contains(name.to_ascii_lowercase().as_str()) {
            continue;
        }
        collector.push_font(name.to_string(), None, source);
    }
}
