//! Leptos components for the landing page.
//!
//! Every component is a pure function of its props. Contact data arrives as
//! a [`crate::config::BusinessConfig`] (or links derived from it), never as a
//! literal.
//!
//! # Component Hierarchy
//!
//! ```text
//! LandingDocument
//! ├── SiteHeader            (nav + SMS link + call CTA)
//! ├── Hero
//! │   └── LeadFormPanel     (#lead)
//! ├── TrustBadges
//! ├── ServiceCards          (#services)
//! ├── Gallery               (#gallery)
//! ├── Reviews               (#reviews)
//! ├── ServiceAreas          (#areas)
//! ├── FaqAccordion          (#faq)
//! ├── SiteFooter            (repeated call CTA + email)
//! └── PageScripts
//! ```

mod areas;
mod badges;
mod cta;
mod document;
mod faq;
mod footer;
mod gallery;
mod header;
mod hero;
mod icons;
mod lead_form;
mod reviews;
mod scripts;
mod services;

pub use areas::ServiceAreas;
pub use badges::TrustBadges;
pub use cta::CallButton;
pub use document::LandingDocument;
pub use faq::FaqAccordion;
pub use footer::SiteFooter;
pub use gallery::Gallery;
pub use header::SiteHeader;
pub use hero::Hero;
pub use icons::*;
pub use lead_form::LeadFormPanel;
pub use reviews::Reviews;
pub use scripts::PageScripts;
pub use services::ServiceCards;

/// In-page anchors in document order, with their navigation labels.
pub const SECTION_ANCHORS: [(&str, &str); 6] = [
    ("lead", "Free quote"),
    ("services", "Services"),
    ("gallery", "Gallery"),
    ("reviews", "Reviews"),
    ("areas", "Areas"),
    ("faq", "FAQ"),
];
