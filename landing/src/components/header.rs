//! Sticky site header

use leptos::prelude::*;

use super::{CallButton, ICON_CHAT, ICON_DROP, Icon, SECTION_ANCHORS};
use crate::config::BusinessConfig;

/// Brand, section navigation, SMS link and the primary call CTA.
#[component]
pub fn SiteHeader(config: BusinessConfig) -> impl IntoView {
    view! {
        <header class="site-header">
            <div class="container header-inner">
                <a href="#lead" class="brand">
                    <span class="brand-mark">
                        <Icon path=ICON_DROP class="icon-sm" />
                    </span>
                    <span>
                        <span class="brand-name">{config.display_name().to_string()}</span>
                        <span class="brand-tagline">{config.tagline().to_string()}</span>
                    </span>
                </a>
                <nav class="site-nav" aria-label="Sections">
                    {SECTION_ANCHORS
                        .iter()
                        .map(|&(anchor, label)| view! {
                            <a href=format!("#{}", anchor)>{label}</a>
                        })
                        .collect::<Vec<_>>()}
                </nav>
                <div class="header-actions">
                    <a href=config.sms_href() class="sms-link">
                        <Icon path=ICON_CHAT class="icon-sm" />
                        "SMS"
                    </a>
                    <CallButton
                        href=config.tel_href()
                        text=format!("Call: {}", config.phone_display())
                        placement="header"
                    />
                </div>
            </div>
        </header>
    }
}
