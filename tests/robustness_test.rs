use brandsift::{extract_assets, sanitize, SanitizeMode};

#[test]
fn extraction_survives_malformed_markup() {
    let samples = [
        "<p>text<div>more",
        "<p><div></p></div>",
        "<html><body><img src=/logo.png class=logo",
        "<div class=\"test id=broken>",
        "&amp text &lt;",
        "<<<<>>>>",
        "<link rel=icon href>",
        "<img><img src><svg>",
    ];

    for html in samples {
        // Must not panic; partial or empty output is acceptable
        let _ = extract_assets(html, "https://acme.test");
    }
}

#[test]
fn empty_input_yields_only_the_synthesized_favicon() {
    let assets = extract_assets("", "https://acme.test");
    assert!(assets.colors.is_empty());
    assert!(assets.fonts.is_empty());
    assert!(assets.illustrations.is_empty());
    assert_eq!(assets.logos.len(), 1);
    assert_eq!(assets.logos[0].url, "https://acme.test/favicon.ico");
}

#[test]
fn invalid_base_url_falls_back_to_placeholder_with_warning() {
    let assets = extract_assets(r#"<img src="/logo.png" class="logo">"#, "not a url at all");

    assert!(!assets.warnings.is_empty());
    assert!(assets.logos.iter().all(|logo| logo.url.starts_with("https://invalid.example/")));
}

#[test]
fn unresolvable_candidates_drop_without_losing_the_rest() {
    let html = concat!(
        r#"<img src="javascript:bad()" class="logo">"#,
        r#"<img src="mailto:x@y.z" class="logo">"#,
        r#"<img src="/good-logo.png" class="logo">"#,
    );
    let assets = extract_assets(html, "https://acme.test");

    let urls: Vec<&str> = assets.logos.iter().map(|logo| logo.url.as_str()).collect();
    assert!(urls.contains(&"https://acme.test/good-logo.png"));
    assert!(!urls.iter().any(|url| url.starts_with("javascript:")));
    assert!(!urls.iter().any(|url| url.starts_with("mailto:")));
}

#[test]
fn deeply_hostile_markup_produces_no_executable_output_urls() {
    let html = concat!(
        r#"<link rel="icon" href="javascript:steal()">"#,
        r#"<div style="background-image: url(javascript:run())"></div>"#,
        r#"<style>.x { background: url('vbscript:boom') }</style>"#,
    );
    let assets = extract_assets(html, "https://acme.test");

    for logo in &assets.logos {
        assert!(!logo.url.to_ascii_lowercase().starts_with("javascript:"));
    }
    for illustration in &assets.illustrations {
        let lower = illustration.url.to_ascii_lowercase();
        assert!(!lower.starts_with("javascript:"));
        assert!(!lower.starts_with("vbscript:"));
    }
}

#[test]
fn sanitizer_handles_pathological_nesting() {
    let mut nasty = String::new();
    for _ in 0..200 {
        nasty.push_str("<script><script>");
    }
    nasty.push_str("payload");
    for _ in 0..200 {
        nasty.push_str("</script>");
    }

    let clean = sanitize(&nasty, SanitizeMode::Strict);
    assert!(!clean.to_ascii_lowercase().contains("<script"));

    let clean = sanitize(&nasty, SanitizeMode::ExtractionPreserving);
    assert!(!clean.to_ascii_lowercase().contains("<script"));
}

#[test]
fn extraction_never_mutates_its_input_semantics_across_calls() {
    let html = r#"<link rel="icon" href="/favicon.ico"><style>p { color: #abc }</style>"#;

    let first = extract_assets(html, "https://acme.test");
    let second = extract_assets(html, "https://acme.test");

    // Stateless per call: identical input, identical output
    assert_eq!(first, second);
}
