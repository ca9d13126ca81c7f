//! # caulking-landing
//!
//! Static landing page for Toronto Caulking & Grout, rendered with
//! [Leptos](https://leptos.dev/) server-side rendering.
//!
//! One [`BusinessConfig`] feeds every phone link, the email link, the service
//! area list and the schema.org metadata, so contact details can never drift
//! between the header, the hero, the service cards and the footer.
//!
//! ## Quick Start
//!
//! ```rust
//! use caulking_landing::config::{BusinessConfig, BusinessConfigDraft};
//! use caulking_landing::content::PageContent;
//! use caulking_landing::{PageOptions, PageState, render_page};
//!
//! let config = BusinessConfig::try_from(BusinessConfigDraft::toronto_caulking()).unwrap();
//! let content = PageContent::toronto_caulking();
//! let state = PageState::initial(&content);
//!
//! let html = render_page(&config, &content, &state, &PageOptions::new(2025));
//! assert!(html.starts_with("<!DOCTYPE html>"));
//! assert!(html.contains(r#"href="tel:+16475550199""#));
//! ```
//!
//! ## Architecture
//!
//! - [`config`] - Business identity, validated on load
//! - [`content`] - Hand-authored copy, cards, reviews and FAQ entries
//! - [`lead_form`] - Field validation, submission state machine, sink seam
//! - [`faq`] - Accordion expand/collapse state
//! - [`metadata`] - schema.org `LocalBusiness` JSON-LD
//! - [`components`] - Leptos UI components
//! - [`styles`] - CSS and Content-Security-Policy
//!
//! Rendering is a pure function of its inputs: no reactive runtime, no
//! hydration, no network.

#![warn(rustdoc::missing_crate_level_docs)]

pub mod components;
pub mod config;
pub mod content;
pub mod faq;
pub mod lead_form;
pub mod metadata;
pub mod styles;

use components::LandingDocument;
use leptos::prelude::*;
use leptos::tachys::view::RenderHtml;
use tracing::debug;

pub use config::{BusinessConfig, BusinessConfigDraft, ConfigError};
pub use content::PageContent;

use faq::FaqState;
use lead_form::LeadFormView;

/// Interactive state the page is rendered with.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PageState {
    /// One disclosure per entry of [`PageContent::faqs`]
    pub faq: FaqState,
    /// Values, flagged fields and acknowledgment of the quote form
    pub lead_form: LeadFormView,
}

impl PageState {
    /// Every FAQ entry collapsed, empty lead form.
    pub fn initial(content: &PageContent) -> Self {
        Self {
            faq: FaqState::new(content.faqs.len()),
            lead_form: LeadFormView::default(),
        }
    }
}

/// Render-time inputs that are not business data.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PageOptions {
    /// Year printed in the footer copyright line
    pub copyright_year: i32,
    /// URL of the wasm lead-form module's JS entry; the inline fallback handles the form when `None`
    pub lead_form_module: Option<String>,
}

impl PageOptions {
    pub fn new(copyright_year: i32) -> Self {
        Self {
            copyright_year,
            lead_form_module: None,
        }
    }

    pub fn with_lead_form_module(mut self, url: impl Into<String>) -> Self {
        self.lead_form_module = Some(url.into());
        self
    }
}

/// Render the complete landing page.
///
/// # Returns
///
/// A complete HTML document as a `String`, including `<!DOCTYPE html>`.
/// The same inputs always produce the same bytes.
pub fn render_page(
    config: &BusinessConfig,
    content: &PageContent,
    state: &PageState,
    options: &PageOptions,
) -> String {
    debug!(
        business = config.display_name(),
        areas = config.service_areas().len(),
        faqs = content.faqs.len(),
        wasm = options.lead_form_module.is_some(),
        "rendering landing page"
    );

    let doc = view! {
        <LandingDocument
            config=config.clone()
            content=content.clone()
            state=state.clone()
            options=options.clone()
        />
    };

    let html = doc.to_html();

    // Leptos doesn't include DOCTYPE, so we add it
    format!("<!DOCTYPE html>\n{}", html)
}
