//! Configuration options for asset extraction.
//!
//! The `Options` struct controls extraction behavior. Defaults match the
//! proxy use case: sanitize incoming markup, synthesize a favicon fallback.

/// Configuration options for asset extraction.
///
/// All fields are public for easy configuration. Use `Default::default()`
/// for standard settings.
///
/// # Example
///
/// ```rust
/// use brandsift::Options;
///
/// // Use defaults
/// let options = Options::default();
///
/// // Customize specific fields
/// let options = Options {
///     synthesize_favicon: false,
///     ..Options::default()
/// };
/// ```
#[derive(Debug, Clone)]
pub struct Options {
    /// Run extraction-preserving sanitization on the markup before discovery.
    ///
    /// Disable only when the caller has already sanitized the input.
    ///
    /// Default: `true`
    pub sanitize_input: bool,

    /// Synthesize a `/favicon.ico` logo candidate against the base URL when
    /// the markup declares no favicon-style icon link.
    ///
    /// Default: `true`
    pub synthesize_favicon: bool,

    /// Bodies of same-origin stylesheets the caller has already fetched.
    ///
    /// The pipeline performs no I/O of its own; linked stylesheet content
    /// is scanned for colors, fonts, and background imagery only when the
    /// caller supplies it here.
    ///
    /// Default: empty
    pub stylesheets: Vec<String>,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            sanitize_input: true,
            synthesize_favicon: true,
            stylesheets: Vec::new(),
        }
    }
}
