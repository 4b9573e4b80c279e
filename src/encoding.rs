//! Character encoding detection and transcoding.
//!
//! The fetch layer hands the pipeline raw bytes plus a content type; pages
//! still ship in legacy encodings often enough that assuming UTF-8 would
//! silently corrupt alt text and font names. Charset is detected from meta
//! tags and the input transcoded before extraction.

use std::sync::LazyLock;

use encoding_rs::{Encoding, UTF_8};
use regex::Regex;

/// Match `<meta charset="...">`.
#[allow(clippy::expect_used)]
static CHARSET_META: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)<meta[^>]+charset\s*=\s*["']?([^"'\s>]+)"#).expect("valid regex")
});

/// Match `<meta http-equiv="Content-Type" content="...; charset=...">`.
#[allow(clippy::expect_used)]
static CONTENT_TYPE_CHARSET: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r#"(?i)<meta[^>]+http-equiv\s*=\s*["']?content-type["']?[^>]+content\s*=\s*["']?[^"'>]*;\s*charset\s*=\s*([^"'\s>]+)"#,
    )
    .expect("valid regex")
});

/// Detect character encoding from HTML bytes.
///
/// Checks `<meta charset>` first, then the `http-equiv` form, defaulting
/// to UTF-8. Only the first 1024 bytes are examined.
#[must_use]
pub fn detect_encoding(html: &[u8]) -> &'static Encoding {
    let head = &html[..html.len().min(1024)];
    let head_str = String::from_utf8_lossy(head);

    for pattern in [&CHARSET_META, &CONTENT_TYPE_CHARSET] {
        let label = pattern
            .captures(&head_str)
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str());
        if let Some(label) = label {
            if let Some(encoding) = Encoding::for_label(label.as_bytes()) {
                return encoding;
            }
        }
    }

    UTF_8
}

/// Transcode HTML bytes to a UTF-8 string.
///
/// Invalid sequences become the Unicode replacement character rather than
/// an error; a page that half-decodes still yields its extractable assets.
///
/// # Examples
///
/// ```
/// use brandsift::encoding::transcode_to_utf8;
///
/// let html = b"<html><body><img alt=\"logo\"></body></html>";
/// assert!(transcode_to_utf8(html).contains("logo"));
/// ```
#[must_use]
pub fn transcode_to_utf8(html: &[u8]) -> String {
    let encoding = detect_encoding(html);

    if encoding == UTF_8 {
        return String::from_utf8_lossy(html).into_owned();
    }

    let (decoded, _, _) = encoding.decode(html);
    decoded.into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_utf8_without_declaration() {
        assert_eq!(detect_encoding(b"<html><body></body></html>"), UTF_8);
    }

    #[test]
    fn detects_meta_charset() {
        let html = br#"<html><head><meta charset="windows-1252"></head></html>"#;
        assert_eq!(detect_encoding(html).name(), "windows-1252");
    }

    #[test]
    fn detects_http_equiv_charset() {
        let html =
            br#"<meta http-equiv="Content-Type" content="text/html; charset=ISO-8859-1">"#;
        // encoding_rs maps ISO-8859-1 to windows-1252 per WHATWG
        assert_eq!(detect_encoding(html).name(), "windows-1252");
    }

    #[test]
    fn transcodes_legacy_alt_text() {
        // ISO-8859-1 e-acute (0xE9) in an alt attribute
        let html =
            b"<html><head><meta charset=\"ISO-8859-1\"></head><body><img alt=\"Caf\xE9\"></body></html>";
        assert!(transcode_to_utf8(html).contains("Café"));
    }

    #[test]
    fn tolerates_invalid_sequences() {
        let html = b"<html><body>logo \xFF\xFE here</body></html>";
        let result = transcode_to_utf8(html);
        assert!(result.contains("logo"));
        assert!(result.contains("here"));
    }
}
