//! Color normalization.
//!
//! Canonicalizes any recognized color token to a comparable form: two
//! tokens are duplicates iff their canonical strings are byte-equal. The
//! canonical form for hex/rgb sources is a lowercase 6-hex-digit
//! `#`-prefixed string; `rgba`/`hsl`/`hsla` pass through lowercase-trimmed
//! and unconverted.

use crate::patterns::{RGB_FUNCTION, RGB_TRIPLE};

/// Normalize a raw matched token to its canonical string.
///
/// Returns `None` when the token is not a recognized color.
///
/// Numeric rgb channels are assumed 0-255 and are NOT clamped or rejected
/// when out of range; `rgb(999,0,0)` yields a wider-than-six hex string.
/// Relaxed validation at this boundary is deliberate - the caller owns
/// channel ranges.
///
/// # Examples
/// ```
/// use brandsift::color::normalize;
///
/// assert_eq!(normalize("#ABC").as_deref(), Some("#aabbcc"));
/// assert_eq!(normalize("rgb(0, 123, 255)").as_deref(), Some("#007bff"));
/// assert_eq!(normalize(" hsl(120, 50%, 50%) ").as_deref(), Some("hsl(120, 50%, 50%)"));
/// assert_eq!(normalize("bold"), None);
/// ```
#[must_use]
pub fn normalize(raw: &str) -> Option<String> {
    let token = raw.trim().to_ascii_lowercase();
    if token.is_empty() {
        return None;
    }

    if let Some(digits) = token.strip_prefix('#') {
        return normalize_hex(digits);
    }

    if let Some(caps) = RGB_FUNCTION.captures(&token) {
        let r = caps.get(1)?.as_str().parse::<u32>().ok()?;
        let g = caps.get(2)?.as_str().parse::<u32>().ok()?;
        let b = caps.get(3)?.as_str().parse::<u32>().ok()?;
        return Some(format!("#{r:02x}{g:02x}{b:02x}"));
    }

    if token.starts_with("rgba(") || token.starts_with("hsl(") || token.starts_with("hsla(") {
        return Some(token);
    }

    None
}

/// Normalize a CSS custom-property value that may itself be a color or a
/// bare `R, G, B` triple (the form used with `rgb(var(--x))`).
#[must_use]
pub fn normalize_property_value(value: &str) -> Option<String> {
    let value = value.trim();

    if let Some(caps) = RGB_TRIPLE.captures(value) {
        let r = caps.get(1)?.as_str().parse::<u32>().ok()?;
        let g = caps.get(2)?.as_str().parse::<u32>().ok()?;
        let b = caps.get(3)?.as_str().parse::<u32>().ok()?;
        return Some(format!("#{r:02x}{g:02x}{b:02x}"));
    }

    normalize(value)
}

fn normalize_hex(digits: &str) -> Option<String> {
    if digits.is_empty() || !digits.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }

    match digits.len() {
        // 3-digit shorthand expands by digit doubling
        3 => {
            let expanded: String = digits.chars().flat_map(|c| [c, c]).collect();
            Some(format!("#{expanded}"))
        }
        6 => Some(format!("#{digits}")),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hex_shorthand_expands_by_digit_doubling() {
        assert_eq!(normalize("#abc").as_deref(), Some("#aabbcc"));
        assert_eq!(normalize("#ABC").as_deref(), Some("#aabbcc"));
        assert_eq!(normalize("#f00").as_deref(), Some("#ff0000"));
    }

    #[test]
    fn six_digit_hex_lowercases() {
        assert_eq!(normalize("#A1B2C3").as_deref(), Some("#a1b2c3"));
        assert_eq!(normalize("  #ffffff  ").as_deref(), Some("#ffffff"));
    }

    #[test]
    fn rgb_converts_to_hex() {
        assert_eq!(normalize("rgb(0,123,255)").as_deref(), Some("#007bff"));
        assert_eq!(normalize("RGB(255, 255, 255)").as_deref(), Some("#ffffff"));
        assert_eq!(normalize("rgb(0, 0, 0)").as_deref(), Some("#000000"));
    }

    #[test]
    fn rgb_out_of_range_channels_are_not_clamped() {
        // Relaxed validation: 999 -> "3e7", wider than two digits
        assert_eq!(normalize("rgb(999,0,0)").as_deref(), Some("#3e70000"));
    }

    #[test]
    fn other_syntaxes_pass_through_lowercased() {
        assert_eq!(
            normalize("RGBA(0, 0, 0, 0.5)").as_deref(),
            Some("rgba(0, 0, 0, 0.5)")
        );
        assert_eq!(
            normalize("hsl(210, 100%, 50%)").as_deref(),
            Some("hsl(210, 100%, 50%)")
        );
    }

    #[test]
    fn unrecognized_tokens_are_rejected() {
        assert_eq!(normalize("bold"), None);
        assert_eq!(normalize("#xyz"), None);
        assert_eq!(normalize("#abcd"), None);
        assert_eq!(normalize(""), None);
        assert_eq!(normalize("url(#fff)"), None);
    }

    #[test]
    fn canonical_form_matches_hex_pattern() {
        for input in ["#fff", "#AbCdEf", "rgb(1,2,3)", "rgb(200, 100, 0)"] {
            let Some(canonical) = normalize(input) else {
                panic!("expected Some for {input}");
            };
            assert!(canonical.starts_with('#'));
            assert_eq!(canonical, canonical.to_ascii_lowercase());
            assert_eq!(canonical.len(), 7, "input {input} -> {canonical}");
        }
    }

    #[test]
    fn property_values_decode_bare_triples() {
        assert_eq!(normalize_property_value("18, 52, 86").as_deref(), Some("#123456"));
        assert_eq!(normalize_property_value("#336699").as_deref(), Some("#336699"));
        assert_eq!(normalize_property_value("1rem"), None);
    }
}
