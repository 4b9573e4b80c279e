//! Compiled regex patterns for asset discovery and sanitization.
//!
//! All patterns are compiled once at startup using `LazyLock` for efficiency.
//! Patterns are organized by their purpose in the extraction pipeline.

#![allow(clippy::expect_used)]

use std::sync::LazyLock;

use regex::Regex;

// =============================================================================
// Color Patterns
// =============================================================================

/// Matches any recognized color token inside style text: hex colors and
/// `rgb`/`rgba`/`hsl`/`hsla` functional notation.
pub static COLOR_TOKEN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)#[0-9a-f]{3,8}\b|rgba?\([^)]*\)|hsla?\([^)]*\)").expect("COLOR_TOKEN regex")
});

/// Matches an `rgb(r,g,b)` functional color with integer channels.
/// Channel values are not range-checked here; see `color::normalize`.
pub static RGB_FUNCTION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^rgb\(\s*(\d+)\s*,\s*(\d+)\s*,\s*(\d+)\s*\)$").expect("RGB_FUNCTION regex")
});

/// Matches a bare `R, G, B` numeric triple, the form custom properties use
/// when they feed `rgb(var(--x))` constructs.
pub static RGB_TRIPLE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(\d{1,3})\s*,\s*(\d{1,3})\s*,\s*(\d{1,3})$").expect("RGB_TRIPLE regex")
});

/// Matches a CSS custom property declaration, capturing its value.
pub static CUSTOM_PROPERTY: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"--[A-Za-z0-9_-]+\s*:\s*([^;{}]+)").expect("CUSTOM_PROPERTY regex")
});

// =============================================================================
// Imagery Patterns
// =============================================================================

/// Matches `background`/`background-image` declarations with a `url(...)`
/// reference, capturing the raw URL.
pub static BACKGROUND_IMAGE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)background(?:-image)?\s*:[^;{}]*?url\(\s*['"]?([^'")]+?)['"]?\s*\)"#)
        .expect("BACKGROUND_IMAGE regex")
});

/// Matches a `WxH` size token (e.g. `32x32`) in icon URLs and `sizes` attributes.
pub static WXH_TOKEN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(\d{2,4})\s*x\s*(\d{2,4})").expect("WXH_TOKEN regex")
});

/// Matches a run of decimal digits.
pub static DIGIT_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\d+").expect("DIGIT_RUN regex"));

// =============================================================================
// Font Patterns
// =============================================================================

/// Matches a `font-family` declaration, capturing the family list.
pub static FONT_FAMILY_DECL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)font-family\s*:\s*([^;{}]+)").expect("FONT_FAMILY_DECL regex")
});

/// Matches a `font` shorthand declaration, capturing its value.
/// Anchored so `font-family`/`font-size` longhands do not match twice.
pub static FONT_SHORTHAND: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(?:^|[;{\s])font\s*:\s*([^;{}]+)").expect("FONT_SHORTHAND regex")
});

/// Matches the size (optionally size/line-height) token inside a `font`
/// shorthand; the family list follows it.
pub static FONT_SIZE_TOKEN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b\d+(?:\.\d+)?(?:px|pt|pc|em|rem|ex|ch|%|vw|vh)(?:\s*/\s*[\w.%]+)?")
        .expect("FONT_SIZE_TOKEN regex")
});

// =============================================================================
// Sanitization Patterns
// =============================================================================

/// Matches a complete `<script>...</script>` block including its content.
pub static SCRIPT_BLOCK: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?is)<script\b[^>]*>.*?</script\s*>").expect("SCRIPT_BLOCK regex")
});

/// Matches orphan `<script>` open or close tags left behind when a block
/// never closes.
pub static SCRIPT_TAG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)</?script\b[^>]*>").expect("SCRIPT_TAG regex"));

/// Matches open/close/self-closing tags for elements strict sanitization
/// removes wholesale: frames, embeds, and form controls.
pub static STRICT_TAG: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)</?(?:iframe|object|embed|applet|form|input|button|textarea|select|frame|frameset)\b[^>]*>",
    )
    .expect("STRICT_TAG regex")
});

/// Matches any `on*` event-handler attribute with its value.
pub static EVENT_ATTR_ALL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)\son[a-z]+\s*=\s*(?:"[^"]*"|'[^']*'|[^\s>]+)"#).expect("EVENT_ATTR_ALL regex")
});

/// Matches only the `onload`/`onerror`/`onclick` handler attributes that
/// extraction-preserving sanitization strips.
pub static EVENT_ATTR_CORE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)\son(?:load|error|click)\s*=\s*(?:"[^"]*"|'[^']*'|[^\s>]+)"#)
        .expect("EVENT_ATTR_CORE regex")
});

/// Matches `href`/`src` attributes whose value carries an executable or
/// data-smuggling scheme (`javascript:`, `data:`, `vbscript:`).
pub static SCHEME_ATTR_STRICT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r#"(?i)\s(?:href|src)\s*=\s*(?:"\s*(?:javascript|data|vbscript):[^"]*"|'\s*(?:javascript|data|vbscript):[^']*'|(?:javascript|data|vbscript):[^\s>]*)"#,
    )
    .expect("SCHEME_ATTR_STRICT regex")
});

/// Matches `href`/`src` attributes with a `javascript:` scheme only.
/// `data:` URLs survive - inline-embedded images depend on them.
pub static SCHEME_ATTR_JS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r#"(?i)\s(?:href|src)\s*=\s*(?:"\s*javascript:[^"]*"|'\s*javascript:[^']*'|javascript:[^\s>]*)"#,
    )
    .expect("SCHEME_ATTR_JS regex")
});

/// Matches legacy IE `expression(...)` constructs in inline style.
pub static CSS_EXPRESSION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)expression\s*\([^)]*\)").expect("CSS_EXPRESSION regex")
});

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn color_token_matches_recognized_syntaxes() {
        assert!(COLOR_TOKEN.is_match("color: #fff"));
        assert!(COLOR_TOKEN.is_match("color: #a1B2c3"));
        assert!(COLOR_TOKEN.is_match("background: rgb(1, 2, 3)"));
        assert!(COLOR_TOKEN.is_match("border-color: hsla(120, 50%, 50%, 0.3)"));
        assert!(!COLOR_TOKEN.is_match("width: 100px"));
    }

    #[test]
    fn background_image_captures_url() {
        let caps = BACKGROUND_IMAGE.captures("background-image: url('/hero.svg')");
        assert_eq!(caps.and_then(|c| c.get(1)).map(|m| m.as_str()), Some("/hero.svg"));

        let caps = BACKGROUND_IMAGE.captures("background: #fff url(img/bg.png) no-repeat");
        assert_eq!(caps.and_then(|c| c.get(1)).map(|m| m.as_str()), Some("img/bg.png"));
    }

    #[test]
    fn font_shorthand_does_not_match_longhands() {
        assert!(FONT_SHORTHAND.is_match("font: 12px Georgia, serif"));
        assert!(FONT_SHORTHAND.is_match("p { font: bold 1em/1.5 Helvetica }"));
        assert!(!FONT_SHORTHAND.is_match("font-family: Georgia"));
        assert!(!FONT_SHORTHAND.is_match("font-size: 12px"));
    }

    #[test]
    fn script_block_spans_content() {
        let cleaned = SCRIPT_BLOCK.replace_all("<p>a</p><script>alert(1)</script><p>b</p>", "");
        assert_eq!(cleaned, "<p>a</p><p>b</p>");
    }

    #[test]
    fn event_attr_matches_quoted_and_bare_values() {
        assert!(EVENT_ATTR_ALL.is_match(r#"<img onerror="steal()">"#));
        assert!(EVENT_ATTR_ALL.is_match("<div onmouseover='x()'>"));
        assert!(EVENT_ATTR_ALL.is_match("<body onload=init()>"));
        assert!(!EVENT_ATTR_ALL.is_match("<div class=\"online\">"));
    }
}
