//! Style-text scanning: colors, custom properties, background imagery.
//!
//! Three style sources feed the scan: inline `style` attributes, `<style>`
//! block bodies, and caller-supplied stylesheet bodies. The same source
//! list feeds font declaration scanning (see `fonts`).

use url::Url;

use crate::asset::AssetSource;
use crate::color;
use crate::dom::{self, Document, Selection};
use crate::options::Options;
use crate::patterns::{BACKGROUND_IMAGE, COLOR_TOKEN, CUSTOM_PROPERTY, RGB_TRIPLE};
use crate::url_utils::resolve_candidate_url;

use super::AssetCollector;

/// Collect every style text in the document, tagged with the source kind
/// its assets will carry.
pub(super) fn style_texts(doc: &Document, options: &Options) -> Vec<(String, AssetSource)> {
    let mut texts = Vec::new();

    for node in doc.select("[style]").nodes() {
        let styled = Selection::from(*node);
        if let Some(style) = dom::get_attribute(&styled, "style") {
            texts.push((style, AssetSource::InlineStyle));
        }
    }

    for node in doc.select("style").nodes() {
        let block = Selection::from(*node);
        texts.push((dom::text_content(&block).to_string(), AssetSource::StyleBlock));
    }

    for sheet in &options.stylesheets {
        texts.push((sheet.clone(), AssetSource::LinkReference));
    }

    texts
}

pub(super) fn collect_style_assets(
    doc: &Document,
    base: &Url,
    options: &Options,
    collector: &mut AssetCollector,
) {
    for (text, source) in style_texts(doc, options) {
        scan_style_text(&text, source, base, collector);
    }
}

fn scan_style_text(text: &str, source: AssetSource, base: &Url, collector: &mut AssetCollector) {
    for token in COLOR_TOKEN.find_iter(text) {
        if let Some(canonical) = color::normalize(token.as_str()) {
            collector.push_color(canonical, source);
        }
    }

    // Custom properties holding a bare R,G,B triple (used via
    // `rgb(var(--x))`); direct color values were already caught above.
    for caps in CUSTOM_PROPERTY.captures_iter(text) {
        let Some(value) = caps.get(1) else { continue };
        let value = value.as_str().trim();
        if RGB_TRIPLE.is_match(value) {
            if let Some(canonical) = color::normalize_property_value(value) {
                collector.push_color(canonical, source);
            }
        }
    }

    for caps in BACKGROUND_IMAGE.captures_iter(text) {
        let Some(raw) = caps.get(1) else { continue };
        if let Some(url) = resolve_candidate_url(raw.as_str(), base) {
            collector.push_illustration(url, None, source);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base() -> Url {
        match Url::parse("https://acme.test/") {
            Ok(u) => u,
            Err(err) => panic!("base should parse: {err}"),
        }
    }

    fn run(html: &str, options: &Options) -> AssetCollector {
        let doc = dom::parse(html);
        let mut collector = AssetCollector::default();
        collect_style_assets(&doc, &base(), options, &mut collector);
        collector
    }

    #[test]
    fn colors_carry_their_source_kind() {
        let collector = run(
            concat!(
                r#"<div style="color: #ABC"></div>"#,
                r#"<style>body { background: rgb(0,123,255) }</style>"#,
            ),
            &Options::default(),
        );

        let colors = &collector.set.colors;
        assert_eq!(colors.len(), 2);
        assert_eq!(colors[0].value, "#aabbcc");
        assert_eq!(colors[0].source, AssetSource::InlineStyle);
        assert_eq!(colors[1].value, "#007bff");
        assert_eq!(colors[1].source, AssetSource::StyleBlock);
    }

    #[test]
    fn duplicate_colors_collapse_on_canonical_form() {
        let collector = run(
            r#"<style>.a { color: #abc } .b { color: #AABBCC }</style>"#,
            &Options::default(),
        );
        assert_eq!(collector.set.colors.len(), 1);
    }

    #[test]
    fn custom_property_triples_decode_to_colors() {
        let collector = run(
            r#"<style>:root { --brand-rgb: 18, 52, 86; --spacing: 2rem }</style>"#,
            &Options::default(),
        );
        assert_eq!(collector.set.colors.len(), 1);
        assert_eq!(collector.set.colors[0].value, "#123456");
    }

    #[test]
    fn background_images_become_illustrations() {
        let collector = run(
            concat!(
                r#"<div style="background-image: url('/hero.svg')"></div>"#,
                r#"<style>.banner { background: #fff url(/img/banner.png) no-repeat }</style>"#,
            ),
            &Options::default(),
        );

        let illustrations = &collector.set.illustrations;
        assert_eq!(illustrations.len(), 2);
        assert_eq!(illustrations[0].url, "https://acme.test/hero.svg");
        assert_eq!(illustrations[0].source, AssetSource::InlineStyle);
        assert_eq!(illustrations[1].url, "https://acme.test/img/banner.png");
        assert_eq!(illustrations[1].source, AssetSource::StyleBlock);
    }

    #[test]
    fn caller_stylesheets_are_scanned_as_link_references() {
        let options = Options {
            stylesheets: vec![".cta { color: hsl(210, 100%, 50%) }".to_string()],
            ..Options::default()
        };
        let collector = run("<p>no styles here</p>", &options);

        assert_eq!(collector.set.colors.len(), 1);
        assert_eq!(collector.set.colors[0].value, "hsl(210, 100%, 50%)");
        assert_eq!(collector.set.colors[0].source, AssetSource::LinkReference);
    }
}
