//! Hero panel: value proposition next to the lead form

use leptos::prelude::*;

use super::{CallButton, ICON_CHECK, ICON_SHIELD, Icon, LeadFormPanel};
use crate::config::BusinessConfig;
use crate::content::HeroCopy;
use crate::lead_form::LeadFormView;

#[component]
pub fn Hero(config: BusinessConfig, hero: HeroCopy, form: LeadFormView) -> impl IntoView {
    let serving = format!("{} • Serving: {}", hero.assurance, config.service_areas().join(", "));

    view! {
        <section class="hero">
            <div class="container hero-grid">
                <div>
                    <h1>{hero.headline}</h1>
                    <p class="hero-lede">{hero.subheadline}</p>
                    <ul class="selling-points">
                        {hero.selling_points.into_iter().map(|point| view! {
                            <li>
                                <Icon path=ICON_CHECK class="icon-sm accent" />
                                {point}
                            </li>
                        }).collect::<Vec<_>>()}
                    </ul>
                    <div class="hero-actions">
                        <CallButton href=config.tel_href() text=hero.call_label placement="hero" />
                        <a href="#lead">{hero.quote_link_label}</a>
                    </div>
                    <div class="serving-line">
                        <Icon path=ICON_SHIELD class="icon-sm" />
                        {serving}
                    </div>
                </div>
                <LeadFormPanel form=form />
            </div>
        </section>
    }
}
