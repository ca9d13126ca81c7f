//! Trust strip under the hero

use leptos::prelude::*;

use super::{ICON_CLOCK, ICON_MAP_PIN, ICON_SHIELD, ICON_STAR, Icon};
use crate::content::TrustBadge;

const BADGE_ICONS: [&str; 4] = [ICON_CLOCK, ICON_SHIELD, ICON_STAR, ICON_MAP_PIN];

#[component]
pub fn TrustBadges(badges: Vec<TrustBadge>) -> impl IntoView {
    view! {
        <section class="section section-alt" aria-label="Why homeowners choose us">
            <div class="container badge-grid">
                {badges
                    .into_iter()
                    .enumerate()
                    .map(|(idx, badge)| view! {
                        <div class="badge">
                            <div class="badge-title">
                                <Icon path=BADGE_ICONS[idx % BADGE_ICONS.len()] class="icon-sm accent" />
                                {badge.title}
                            </div>
                            <p>{badge.description}</p>
                        </div>
                    })
                    .collect::<Vec<_>>()}
            </div>
        </section>
    }
}
