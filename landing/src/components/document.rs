//! Root document component - the complete landing page
//!
//! Section order is fixed: header, hero with lead form, trust badges,
//! services, gallery, reviews, areas, FAQ, footer.

use leptos::prelude::*;

use super::{
    FaqAccordion, Gallery, Hero, PageScripts, Reviews, ServiceAreas, ServiceCards, SiteFooter,
    SiteHeader, TrustBadges,
};
use crate::config::BusinessConfig;
use crate::content::PageContent;
use crate::metadata::json_ld_script_body;
use crate::styles::{content_security_policy, page_css};
use crate::{PageOptions, PageState};

/// The complete HTML document for the landing page
#[component]
pub fn LandingDocument(
    config: BusinessConfig,
    content: PageContent,
    state: PageState,
    options: PageOptions,
) -> impl IntoView {
    let title = format!("{} — {}", config.display_name(), config.tagline());
    let description = content.hero.subheadline.clone();
    let canonical = config.canonical_url().to_string();
    let csp = content_security_policy(options.lead_form_module.as_deref());
    let css = page_css(config.palette());
    let json_ld = json_ld_script_body(&config, &content.services);
    let badges = content.trust_badges(&config);
    let PageContent {
        hero,
        services,
        gallery,
        testimonials,
        faqs,
        areas_heading,
        footer_blurb,
        ..
    } = content;

    view! {
        <html lang="en">
            <head>
                <meta charset="UTF-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <meta http-equiv="Content-Security-Policy" content=csp />
                <title>{title}</title>
                <meta name="description" content=description />
                <link rel="canonical" href=canonical />
                <style>{css}</style>
                <script type="application/ld+json">{json_ld}</script>
            </head>
            <body>
                <SiteHeader config=config.clone() />
                <main>
                    <Hero config=config.clone() hero=hero form=state.lead_form />
                    <TrustBadges badges=badges />
                    <ServiceCards services=services tel_href=config.tel_href() />
                    <Gallery tiles=gallery />
                    <Reviews testimonials=testimonials />
                    <ServiceAreas config=config.clone() heading=areas_heading />
                    <FaqAccordion faqs=faqs state=state.faq />
                </main>
                <SiteFooter config=config blurb=footer_blurb year=options.copyright_year />
                <PageScripts lead_form_module=options.lead_form_module.unwrap_or_default() />
            </body>
        </html>
    }
}
