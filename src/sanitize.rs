//! Dual-mode content sanitization.
//!
//! Operates on raw markup text, never on an executed DOM - hostile input
//! must not reach a parser with script still attached. Strict mode scrubs
//! everything executable or interactive for generic re-serving;
//! extraction-preserving mode removes only what can execute while keeping
//! every link/meta/style/image/vector/class/id signal the discovery engine
//! reads, including `data:` URLs for inline-embedded imagery.
//!
//! Both modes are idempotent: re-applying to already-sanitized content
//! yields the same result.

use std::panic::{catch_unwind, AssertUnwindSafe};

use tracing::warn;

use crate::patterns::{
    CSS_EXPRESSION, EVENT_ATTR_ALL, EVENT_ATTR_CORE, SCHEME_ATTR_JS, SCHEME_ATTR_STRICT,
    SCRIPT_BLOCK, SCRIPT_TAG, STRICT_TAG,
};

/// Sanitization operating mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SanitizeMode {
    /// Full scrub for re-serving fetched content to a consumer that is not
    /// performing extraction: scripts, frames, embeds, and form controls
    /// removed; all `on*` handlers stripped; `javascript:`/`data:`/
    /// `vbscript:` schemes stripped from `href`/`src`; `expression(...)`
    /// constructs removed from inline style.
    Strict,
    /// Lighter scrub for input about to enter the discovery engine: only
    /// `<script>` blocks, `load`/`error`/`click` handlers, and
    /// `javascript:`-scheme `href`/`src` values are removed.
    ExtractionPreserving,
}

/// Sanitize raw markup in the given mode.
///
/// Total function: if the sanitizer itself fails, the entire input is
/// HTML-entity-escaped instead of returning partially-sanitized markup.
#[must_use]
pub fn sanitize(raw_markup: &str, mode: SanitizeMode) -> String {
    match catch_unwind(AssertUnwindSafe(|| apply_rules(raw_markup, mode))) {
        Ok(clean) => clean,
        Err(_) => {
            warn!(?mode, "sanitizer failed, falling back to full entity escaping");
            escape_markup(raw_markup)
        }
    }
}

fn apply_rules(input: &str, mode: SanitizeMode) -> String {
    // Script blocks go first in both modes; orphan open/close tags are
    // swept separately so an unclosed <script> cannot survive.
    let text = SCRIPT_BLOCK.replace_all(input, "");
    let text = SCRIPT_TAG.replace_all(&text, "");

    match mode {
        SanitizeMode::Strict => {
            let text = STRICT_TAG.replace_all(&text, "");
            let text = EVENT_ATTR_ALL.replace_all(&text, "");
            let text = SCHEME_ATTR_STRICT.replace_all(&text, "");
            let text = CSS_EXPRESSION.replace_all(&text, "");
            text.into_owned()
        }
        SanitizeMode::ExtractionPreserving => {
            let text = EVENT_ATTR_CORE.replace_all(&text, "");
            let text = SCHEME_ATTR_JS.replace_all(&text, "");
            text.into_owned()
        }
    }
}

/// Escape the full input as HTML entities. Fallback path only: safe to
/// serve, useless for extraction.
fn escape_markup(input: &str) -> String {
    let mut escaped = String::with_capacity(input.len() + input.len() / 8);
    for c in input.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
