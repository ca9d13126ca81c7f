//! Footer with the repeated call CTA

use leptos::prelude::*;

use super::{CallButton, ICON_CHAT, Icon};
use crate::config::BusinessConfig;

#[component]
pub fn SiteFooter(config: BusinessConfig, blurb: String, year: i32) -> impl IntoView {
    let details = format!("{} Hours: {}", blurb, config.opening_hours().schema_value());
    let copyright = format!("© {} {}. All rights reserved.", year, config.display_name());

    view! {
        <footer class="site-footer">
            <div class="container footer-grid">
                <div>
                    <div class="card-title">"Ready to start?"</div>
                    <p class="muted">{details}</p>
                </div>
                <div class="footer-actions">
                    <CallButton
                        href=config.tel_href()
                        text=format!("Call: {}", config.phone_display())
                        placement="footer"
                    />
                    <a href=config.mailto_href() class="ghost-button">
                        <Icon path=ICON_CHAT class="icon-sm" />
                        "Email"
                    </a>
                </div>
                <div class="footer-copyright">{copyright}</div>
            </div>
        </footer>
    }
}
