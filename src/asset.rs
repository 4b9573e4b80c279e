//! Output data model for asset extraction.
//!
//! One closed variant per asset kind - a candidate is a logo, a color, a
//! font, or an illustration, never an ad-hoc bag of optional fields. The
//! `ExtractedAssetSet` is the single value handed back to the proxy/UI
//! layer, serializable as-is.

use serde::{Deserialize, Serialize};

/// Where in the markup an asset was discovered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AssetSource {
    /// An element attribute (`src`, `alt`, `content`, ...).
    MarkupAttribute,
    /// An inline `style="..."` attribute.
    InlineStyle,
    /// A `<style>` block body.
    StyleBlock,
    /// A `<link>` reference (icon links, font-service stylesheets,
    /// caller-supplied stylesheet bodies).
    LinkReference,
    /// An inline `<svg>` element serialized to a `data:` URL.
    EmbeddedVector,
}

/// A logo asset. The URL is always absolute.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogoAsset {
    pub url: String,
    pub alt: Option<String>,
    pub source: AssetSource,
}

/// A color asset holding the canonical token (see `color::normalize`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorAsset {
    pub value: String,
    pub source: AssetSource,
}

/// A font family asset. `url` is set when the family came from a
/// font-service link reference.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FontAsset {
    pub name: String,
    pub url: Option<String>,
    pub source: AssetSource,
}

/// An illustrative image asset. The URL is always absolute.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IllustrationAsset {
    pub url: String,
    pub alt: Option<String>,
    pub source: AssetSource,
}

/// A discovered brand asset, tagged by kind.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum BrandAsset {
    Logo(LogoAsset),
    Color(ColorAsset),
    Font(FontAsset),
    Illustration(IllustrationAsset),
}

/// The complete result of one extraction call.
///
/// All four collections are insertion-ordered and duplicate-free
/// (logos/illustrations keyed by URL, colors by canonical value, fonts by
/// case-insensitive name). Constructed in a single synchronous pass over
/// the input and never mutated afterwards; no state is shared between
/// extraction calls.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExtractedAssetSet {
    pub logos: Vec<LogoAsset>,
    pub colors: Vec<ColorAsset>,
    pub fonts: Vec<FontAsset>,
    pub illustrations: Vec<IllustrationAsset>,

    /// Non-fatal issues encountered during extraction, such as an invalid
    /// base URL that forced the placeholder base.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub warnings: Vec<String>,
}

impl ExtractedAssetSet {
    /// Total number of assets across all four kinds.
    #[must_use]
    pub fn asset_count(&self) -> usize {
        self.logos.len() + self.colors.len() + self.fonts.len() + self.illustrations.len()
    }

    /// True when no assets of any kind were discovered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.asset_count() == 0
    }

    /// Iterate all assets as tagged `BrandAsset` values, logos first.
    pub fn iter(&self) -> impl Iterator<Item = BrandAsset> + '_ {
        self.logos
            .iter()
            .cloned()
            .map(BrandAsset::Logo)
            .chain(self.colors.iter().cloned().map(BrandAsset::Color))
            .chain(self.fonts.iter().cloned().map(BrandAsset::Font))
            .chain(self.illustrations.iter().cloned().map(BrandAsset::Illustration))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn asset_set_counts_across_kinds() {
        let mut set = ExtractedAssetSet::default();
        assert!(set.is_empty());

        set.colors.push(ColorAsset {
            value: "#007bff".to_string(),
            source: AssetSource::StyleBlock,
        });
        set.fonts.push(FontAsset {
            name: "Inter".to_string(),
            url: None,
            source: AssetSource::InlineStyle,
        });

        assert_eq!(set.asset_count(), 2);
        assert!(!set.is_empty());
        assert_eq!(set.iter().count(), 2);
    }

    #[test]
    fn asset_source_serializes_kebab_case() {
        let json = serde_json::to_string(&AssetSource::MarkupAttribute).unwrap_or_default();
        assert_eq!(json, "\"markup-attribute\"");
        let json = serde_json::to_string(&AssetSource::StyleBlock).unwrap_or_default();
        assert_eq!(json, "\"style-block\"");
    }
}
