//! Image and inline-vector candidate collection.
//!
//! Every `<img>` is either a logo candidate (classifier hit) or an
//! illustration. Inline `<svg>` elements only ever become logo candidates:
//! decorative vectors with no logo hints carry too little identity signal
//! to report as imagery.

use url::Url;

use crate::asset::AssetSource;
use crate::classify::is_logo_like;
use crate::dedup::LogoCandidate;
use crate::dom::{self, Document, Selection};
use crate::url_utils::resolve_candidate_url;

use super::AssetCollector;

pub(super) fn collect_image_candidates(
    doc: &Document,
    base: &Url,
    logo_candidates: &mut Vec<LogoCandidate>,
    collector: &mut AssetCollector,
) {
    for node in doc.select("img").nodes() {
        let img = Selection::from(*node);

        let raw_src = dom::get_attribute(&img, "src")
            .or_else(|| dom::get_attribute(&img, "data-src"))
            .or_else(|| dom::get_attribute(&img, "srcset").and_then(|s| first_srcset_url(&s)));
        let Some(raw_src) = raw_src else {
            continue;
        };
        let Some(url) = resolve_candidate_url(&raw_src, base) else {
            continue;
        };

        let alt = dom::get_attribute(&img, "alt")
            .map(|a| a.trim().to_string())
            .filter(|a| !a.is_empty());
        let class = dom::class_name(&img);
        let id = dom::id(&img);

        if is_logo_like(&url, alt.as_deref(), class.as_deref(), id.as_deref()) {
            logo_candidates.push(LogoCandidate {
                url,
                alt,
                size_hint: declared_size(&img),
                source: AssetSource::MarkupAttribute,
            });
        } else {
            collector.push_illustration(url, alt, AssetSource::MarkupAttribute);
        }
    }

    for node in doc.select("svg").nodes() {
        let svg = Selection::from(*node);
        let class = dom::class_name(&svg);
        let id = dom::id(&svg);

        if !is_logo_like("", None, class.as_deref(), id.as_deref()) {
            continue;
        }

        let markup = dom::outer_html(&svg).trim().to_string();
        if markup.is_empty() {
            continue;
        }

        logo_candidates.push(LogoCandidate {
            url: format!("data:image/svg+xml;utf8,{markup}"),
            alt: None,
            size_hint: declared_size(&svg),
            source: AssetSource::EmbeddedVector,
        });
    }
}

/// Largest of the element's declared `width`/`height` attributes.
fn declared_size(sel: &Selection) -> Option<u32> {
    ["width", "height"]
        .iter()
        .filter_map(|attr| dom::get_attribute(sel, attr))
        .filter_map(|value| value.trim().trim_end_matches("px").parse::<u32>().ok())
        .max()
}

/// First URL in a `srcset` attribute (`"a.png 1x, b.png 2x"` -> `a.png`).
fn first_srcset_url(srcset: &str) -> Option<String> {
    srcset
        .split(',')
        .next()?
        .trim()
        .split_whitespace()
        .next()
        .map(str::to_string)
}
