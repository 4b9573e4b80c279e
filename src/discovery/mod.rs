//! Asset discovery engine.
//!
//! Walks the parsed markup tree once and assembles the four candidate
//! collections: logos, colors, fonts, illustrations. Logo candidates pass
//! through deduplication/ranking before they reach the output set; the
//! other kinds are deduplicated inline by the collector. The engine reads
//! the tree through the `dom` adapter and never mutates it. A candidate
//! that fails URL resolution is dropped alone - never fatal for the pass.

mod fonts;
mod icons;
mod images;
mod styles;

use std::collections::HashSet;

use tracing::debug;
use url::Url;

use crate::asset::{
    AssetSource, ColorAsset, ExtractedAssetSet, FontAsset, IllustrationAsset, LogoAsset,
};
use crate::dedup::{self, LogoCandidate};
use crate::dom::Document;
use crate::options::Options;

/// Run one discovery pass over a parsed document.
pub(crate) fn discover_assets(doc: &Document, base: &Url, options: &Options) -> ExtractedAssetSet {
    let mut collector = AssetCollector::default();
    let mut logo_candidates: Vec<LogoCandidate> = Vec::new();

    let found_icon_link = icons::collect_icon_candidates(doc, base, &mut logo_candidates);
    icons::collect_meta_logo(doc, base, &mut logo_candidates);

    if !found_icon_link && options.synthesize_favicon {
        if let Ok(fallback) = base.join("/favicon.ico") {
            logo_candidates.push(LogoCandidate {
                url: fallback.to_string(),
                alt: None,
                size_hint: None,
                source: AssetSource::LinkReference,
            });
        }
    }

    images::collect_image_candidates(doc, base, &mut logo_candidates, &mut collector);
    styles::collect_style_assets(doc, base, options, &mut collector);
    fonts::collect_font_assets(doc, base, options, &mut collector);

    debug!(
        logo_candidates = logo_candidates.len(),
        colors = collector.set.colors.len(),
        fonts = collector.set.fonts.len(),
        illustrations = collector.set.illustrations.len(),
        "discovery pass complete"
    );

    for representative in dedup::select_representatives(logo_candidates) {
        collector.push_logo(LogoAsset {
            url: representative.url,
            alt: representative.alt,
            source: representative.source,
        });
    }

    collector.set
}

/// Accumulates assets with per-kind, insertion-ordered deduplication.
#[derive(Default)]
pub(crate) struct AssetCollector {
    set: ExtractedAssetSet,
    seen_logos: HashSet<String>,
    seen_colors: HashSet<String>,
    seen_fonts: HashSet<String>,
    seen_illustrations: HashSet<String>,
}

impl AssetCollector {
    fn push_logo(&mut self, asset: LogoAsset) {
        if self.seen_logos.insert(asset.url.clone()) {
            self.set.logos.push(asset);
        }
    }

    /// Record a canonical color token (see `color::normalize`).
    fn push_color(&mut self, value: String, source: AssetSource) {
        if self.seen_colors.insert(value.clone()) {
            self.set.colors.push(ColorAsset { value, source });
        }
    }

    /// Record a font family; names compare case-insensitively.
    fn push_font(&mut self, name: String, url: Option<String>, source: AssetSource) {
        if self.seen_fonts.insert(name.to_ascii_lowercase()) {
            self.set.fonts.push(FontAsset { name, url, source });
        }
    }

    fn push_illustration(&mut self, url: String, alt: Option<String>, source: AssetSource) {
        if self.seen_illustrations.insert(url.clone()) {
            self.set.illustrations.push(IllustrationAsset { url, alt, source });
        }
    }
}
