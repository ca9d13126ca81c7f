//! CSS for the landing page.
//!
//! The stylesheet reads colors from CSS custom properties; [`page_css`]
//! prepends a `:root` block built from the configured [`Palette`].
//!
//! # Features
//!
//! - System font stack, no web fonts
//! - Sticky header, two-column hero on wide screens
//! - Image boxes keep their size when an image fails to load
//! - Native `<details>` accordion for the FAQ

use crate::config::Palette;

/// Layout and component styles. Colors come from `--primary`, `--accent`, etc.
pub const LANDING_CSS: &str = r#"
*, *::before, *::after {
    box-sizing: border-box;
}

html {
    scroll-behavior: smooth;
}

/* Components set display; keep the hidden attribute authoritative */
[hidden] {
    display: none !important;
}

body {
    margin: 0;
    font-family: system-ui, -apple-system, "Segoe UI", Roboto, "Helvetica Neue", Arial, sans-serif;
    color: var(--dark);
    background: #ffffff;
    line-height: 1.5;
    -webkit-font-smoothing: antialiased;
}

a {
    color: var(--primary);
}

a:focus-visible, button:focus-visible, input:focus-visible, select:focus-visible, summary:focus-visible {
    outline: 3px solid var(--accent);
    outline-offset: 2px;
}

.container {
    max-width: 72rem;
    margin: 0 auto;
    padding: 0 1rem;
}

.icon-sm {
    width: 1.1rem;
    height: 1.1rem;
    flex-shrink: 0;
}

.accent {
    color: var(--accent);
}

.muted {
    opacity: 0.7;
    font-size: 0.8rem;
}

/* Header */
.site-header {
    position: sticky;
    top: 0;
    z-index: 50;
    background: rgba(255, 255, 255, 0.92);
    backdrop-filter: blur(6px);
    border-bottom: 1px solid #e2e8f0;
}

.header-inner {
    display: flex;
    align-items: center;
    justify-content: space-between;
    gap: 1rem;
    padding-top: 0.75rem;
    padding-bottom: 0.75rem;
}

.brand {
    display: flex;
    align-items: center;
    gap: 0.75rem;
    color: inherit;
    text-decoration: none;
}

.brand-mark {
    display: grid;
    place-items: center;
    width: 2.25rem;
    height: 2.25rem;
    border-radius: 999px;
    background: var(--primary);
    color: #ffffff;
}

.brand-name {
    display: block;
    font-weight: 700;
    font-size: 1.1rem;
}

.brand-tagline {
    display: block;
    font-size: 0.75rem;
    opacity: 0.7;
}

.site-nav {
    display: none;
    gap: 1.5rem;
    font-size: 0.9rem;
}

.site-nav a {
    color: inherit;
    text-decoration: none;
}

.site-nav a:hover {
    text-decoration: underline;
}

.header-actions {
    display: flex;
    align-items: center;
    gap: 0.75rem;
}

.sms-link {
    display: inline-flex;
    align-items: center;
    gap: 0.4rem;
    font-size: 0.9rem;
    color: inherit;
    text-decoration: none;
}

/* Buttons */
.cta-button {
    display: inline-flex;
    align-items: center;
    gap: 0.5rem;
    border: 0;
    border-radius: 1rem;
    padding: 0.75rem 1.5rem;
    background: var(--primary);
    color: #ffffff;
    font: inherit;
    font-weight: 600;
    text-decoration: none;
    cursor: pointer;
    box-shadow: 0 4px 10px rgba(11, 18, 32, 0.15);
    transition: transform 0.15s ease, background 0.15s ease;
}

.cta-button:hover {
    background: var(--primary-hover);
    transform: scale(1.02);
}

.ghost-button {
    display: inline-flex;
    align-items: center;
    gap: 0.5rem;
    border-radius: 1rem;
    padding: 0.75rem 1.5rem;
    border: 1px solid #e2e8f0;
    color: inherit;
    text-decoration: none;
}

/* Sections */
.section {
    padding: 3rem 0;
}

.section-alt {
    background: var(--light);
}

.section h2 {
    margin: 0;
    font-size: 1.75rem;
}

.card-grid {
    display: grid;
    gap: 1.5rem;
    margin-top: 1.5rem;
}

.card {
    border: 1px solid #e2e8f0;
    border-radius: 1rem;
    background: #ffffff;
    overflow: hidden;
}

.card-body {
    padding: 1.25rem;
}

.card-title {
    display: flex;
    align-items: center;
    gap: 0.5rem;
    font-weight: 600;
    font-size: 1.1rem;
}

/* Images: fixed box with a neutral fill so a failed load keeps the layout */
.image-box {
    display: block;
    width: 100%;
    height: 12rem;
    object-fit: cover;
    background: #e2e8f0;
    color: transparent;
}

/* Hero */
.hero-grid {
    display: grid;
    gap: 2.5rem;
    align-items: center;
    padding-top: 3rem;
    padding-bottom: 3rem;
}

.hero h1 {
    margin: 0;
    font-size: 2rem;
    font-weight: 800;
    line-height: 1.15;
}

.hero-lede {
    margin-top: 1rem;
    font-size: 1.1rem;
    opacity: 0.8;
}

.selling-points {
    list-style: none;
    padding: 0;
    margin: 1.5rem 0 0;
    display: grid;
    gap: 0.75rem;
    font-size: 0.9rem;
}

.selling-points li, .bullet-list li {
    display: flex;
    align-items: center;
    gap: 0.5rem;
}

.hero-actions {
    display: flex;
    flex-wrap: wrap;
    align-items: center;
    gap: 0.75rem;
    margin-top: 1.5rem;
}

.serving-line {
    display: flex;
    align-items: center;
    gap: 0.6rem;
    margin-top: 1rem;
    font-size: 0.8rem;
    opacity: 0.7;
}

/* Lead form */
.lead-panel {
    border: 1px solid #e2e8f0;
    border-radius: 1rem;
    padding: 1.5rem;
    background: #ffffff;
    box-shadow: 0 10px 25px rgba(11, 18, 32, 0.08);
}

.lead-panel-title {
    font-size: 1.1rem;
    font-weight: 600;
}

.lead-form {
    display: grid;
    gap: 0.75rem;
    margin-top: 1rem;
}

.lead-form label {
    font-size: 0.9rem;
}

.lead-form input, .lead-form select {
    display: block;
    width: 100%;
    margin-top: 0.25rem;
    border: 1px solid #e2e8f0;
    border-radius: 0.75rem;
    padding: 0.5rem 0.75rem;
    font: inherit;
}

.lead-form input[aria-invalid="true"] {
    border-color: #dc2626;
}

.field-hint {
    margin: 0.25rem 0 0;
    font-size: 0.7rem;
    opacity: 0.6;
}

.field-error {
    display: flex;
    align-items: center;
    gap: 0.3rem;
    margin: 0.25rem 0 0;
    font-size: 0.8rem;
    color: #dc2626;
}

.postal-input {
    text-transform: uppercase;
    letter-spacing: 0.05em;
}

.optional {
    opacity: 0.6;
}

.lead-ack {
    display: flex;
    align-items: center;
    gap: 0.5rem;
    margin-top: 1rem;
    padding: 1rem;
    border-radius: 0.75rem;
    background: #ecfdf5;
    color: #065f46;
    font-weight: 600;
}

/* Badges */
.badge-grid {
    display: grid;
    gap: 1.5rem;
}

.badge {
    border: 1px solid #e2e8f0;
    border-radius: 1rem;
    padding: 1.25rem;
    background: #ffffff;
}

.badge-title {
    display: flex;
    align-items: center;
    gap: 0.75rem;
    font-weight: 600;
}

.badge p {
    margin: 0.25rem 0 0;
    font-size: 0.9rem;
    opacity: 0.8;
}

.bullet-list {
    list-style: none;
    padding: 0;
    margin: 0.75rem 0 1rem;
    display: grid;
    gap: 0.5rem;
    font-size: 0.9rem;
}

.tile-caption {
    display: flex;
    align-items: center;
    gap: 0.5rem;
    padding: 0.75rem;
    font-size: 0.75rem;
    opacity: 0.7;
}

/* Reviews */
.stars {
    display: flex;
    gap: 0.2rem;
    color: #eab308;
}

.review-source {
    margin-top: 0.75rem;
    font-size: 0.75rem;
    opacity: 0.7;
}

.area-list {
    display: flex;
    flex-wrap: wrap;
    gap: 0.5rem;
    list-style: none;
    padding: 0;
    margin: 1rem 0 0;
}

.area-list li {
    border: 1px solid #e2e8f0;
    border-radius: 999px;
    padding: 0.25rem 0.75rem;
    background: #ffffff;
}

/* FAQ */
.faq-item {
    border: 1px solid #e2e8f0;
    border-radius: 0.75rem;
    background: #ffffff;
    padding: 1rem;
}

.faq-item summary {
    display: flex;
    align-items: center;
    justify-content: space-between;
    gap: 1rem;
    font-weight: 500;
    cursor: pointer;
    list-style: none;
}

.faq-item[open] summary svg {
    transform: rotate(180deg);
}

.faq-item p {
    margin: 0.5rem 0 0;
    font-size: 0.9rem;
    opacity: 0.8;
}

/* Footer */
.site-footer {
    border-top: 1px solid #e2e8f0;
}

.footer-grid {
    display: grid;
    gap: 1.5rem;
    align-items: center;
    padding-top: 2rem;
    padding-bottom: 2rem;
}

.footer-actions {
    display: flex;
    flex-wrap: wrap;
    gap: 0.75rem;
}

.footer-copyright {
    font-size: 0.75rem;
    opacity: 0.7;
}

@media (min-width: 768px) {
    .site-nav {
        display: flex;
    }

    .hero h1 {
        font-size: 3rem;
    }

    .hero-grid, .faq-grid {
        grid-template-columns: 1fr 1fr;
    }

    .selling-points {
        grid-template-columns: 1fr 1fr;
    }

    .card-grid, .footer-grid {
        grid-template-columns: repeat(3, 1fr);
    }

    .badge-grid {
        grid-template-columns: repeat(4, 1fr);
    }

    .footer-copyright {
        text-align: right;
    }
}

.faq-grid {
    display: grid;
    gap: 1.5rem;
    margin-top: 1.5rem;
}
"#;

/// Directives that do not depend on the lead-form module.
const CSP_BASE: &str = "default-src 'self'; img-src 'self' https: data:; style-src 'self' 'unsafe-inline'";

/// Content-Security-Policy for the page.
///
/// Inline scripts and styles are rendered by the composer; `form-action 'none'`
/// keeps the browser from ever posting the lead form anywhere. Without a wasm
/// module nothing may be fetched. With one, the page origin (and the module's
/// origin when it is absolute) may serve the JS glue and the `.wasm` binary,
/// which wasm-bindgen's `init()` downloads with `fetch`.
pub fn content_security_policy(lead_form_module: Option<&str>) -> String {
    let module_origin = lead_form_module
        .and_then(absolute_origin)
        .map(|origin| format!(" {}", origin))
        .unwrap_or_default();
    let connect_src = match lead_form_module {
        Some(_) => format!("'self'{}", module_origin),
        None => "'none'".to_string(),
    };
    format!(
        "{}; script-src 'self' 'unsafe-inline' 'wasm-unsafe-eval'{}; connect-src {}; form-action 'none'; base-uri 'none';",
        CSP_BASE, module_origin, connect_src
    )
}

/// `scheme://host[:port]` of an absolute http(s) URL. `None` for relative
/// URLs and for hosts with characters that could end a CSP source.
fn absolute_origin(url: &str) -> Option<&str> {
    let rest = url
        .strip_prefix("https://")
        .or_else(|| url.strip_prefix("http://"))?;
    let host_len = rest.find(['/', '?', '#']).unwrap_or(rest.len());
    let host = &rest[..host_len];
    let clean = !host.is_empty()
        && host
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '.' | '-' | ':' | '[' | ']'));
    clean.then(|| &url[..url.len() - rest.len() + host_len])
}

/// Palette custom properties followed by [`LANDING_CSS`].
pub fn page_css(palette: &Palette) -> String {
    format!(
        ":root {{\n    --primary: {};\n    --primary-hover: {};\n    --accent: {};\n    --dark: {};\n    --light: {};\n}}\n{}",
        palette.primary, palette.primary_hover, palette.accent, palette.dark, palette.light, LANDING_CSS
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn palette_is_injected_before_layout() {
        let css = page_css(&Palette::default());
        assert!(css.starts_with(":root {"));
        assert!(css.contains("--primary: #005EB8;"));
        assert!(css.contains("--accent: #FFB81C;"));
        assert!(css.ends_with(LANDING_CSS));
    }

    #[test]
    fn css_is_safe_as_raw_style_text() {
        // Rendered unescaped inside <style>
        assert!(!LANDING_CSS.contains('<'));
        assert!(!LANDING_CSS.contains('&'));
    }

    #[test]
    fn static_page_fetches_nothing() {
        let csp = content_security_policy(None);
        assert!(csp.contains("connect-src 'none';"));
        assert!(csp.contains("form-action 'none';"));
    }

    #[test]
    fn same_origin_module_may_fetch_its_wasm() {
        let csp = content_security_policy(Some("/pkg/caulking_landing_wasm.js"));
        assert!(csp.contains("connect-src 'self';"));
        assert!(!csp.contains("connect-src 'none'"));
        assert!(csp.contains("script-src 'self' 'unsafe-inline' 'wasm-unsafe-eval';"));
        assert!(csp.contains("form-action 'none';"));
    }

    #[test]
    fn cross_origin_module_is_allowed_by_origin() {
        let csp = content_security_policy(Some("https://cdn.example.com:8443/pkg/lead.js?v=3"));
        assert!(csp.contains("script-src 'self' 'unsafe-inline' 'wasm-unsafe-eval' https://cdn.example.com:8443;"));
        assert!(csp.contains("connect-src 'self' https://cdn.example.com:8443;"));
    }

    #[test]
    fn hostile_module_origin_is_not_spliced_in() {
        let csp = content_security_policy(Some("https://evil.example;script-src *"));
        assert!(csp.contains("connect-src 'self';"));
        assert!(!csp.contains("evil"));
    }
}
