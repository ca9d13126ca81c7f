//! Call-to-action button

use leptos::prelude::*;

use super::{ICON_PHONE, Icon};

/// Phone CTA. `href` is a `tel:` link from the config.
#[component]
pub fn CallButton(
    href: String,
    text: String,
    /// Where the button sits ("header", "hero", "service", "footer")
    #[prop(default = "")]
    placement: &'static str,
) -> impl IntoView {
    view! {
        <a href=href class="cta-button" data-cta=placement>
            <Icon path=ICON_PHONE class="icon-sm" />
            {text}
        </a>
    }
}
