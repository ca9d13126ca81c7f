//! Service-area list, in configuration order

use leptos::prelude::*;

use super::{ICON_MAP_PIN, Icon};
use crate::config::BusinessConfig;

#[component]
pub fn ServiceAreas(config: BusinessConfig, heading: String) -> impl IntoView {
    view! {
        <section id="areas" class="section section-alt">
            <div class="container">
                <h2>{heading}</h2>
                <ul class="area-list">
                    {config
                        .service_areas()
                        .iter()
                        .map(|area| view! {
                            <li>
                                <Icon path=ICON_MAP_PIN size="14" />
                                {area.clone()}
                            </li>
                        })
                        .collect::<Vec<_>>()}
                </ul>
            </div>
        </section>
    }
}
