//! Service cards with a per-card call CTA

use leptos::prelude::*;

use super::{CallButton, ICON_SPARKLE, ICON_WRENCH, Icon};
use crate::content::ServiceOffering;

#[component]
pub fn ServiceCards(services: Vec<ServiceOffering>, tel_href: String) -> impl IntoView {
    view! {
        <section id="services" class="section">
            <div class="container">
                <h2>"Popular services"</h2>
                <div class="card-grid">
                    {services
                        .into_iter()
                        .map(|service| {
                            let alt = service.title.clone();
                            view! {
                                <article class="card">
                                    <img
                                        class="image-box"
                                        src=service.image_url
                                        alt=alt
                                        loading="lazy"
                                        decoding="async"
                                    />
                                    <div class="card-body">
                                        <div class="card-title">
                                            <Icon path=ICON_WRENCH class="icon-sm" />
                                            {service.title}
                                        </div>
                                        <ul class="bullet-list">
                                            {service.bullet_points.into_iter().map(|point| view! {
                                                <li>
                                                    <Icon path=ICON_SPARKLE class="icon-sm accent" />
                                                    {point}
                                                </li>
                                            }).collect::<Vec<_>>()}
                                        </ul>
                                        <CallButton href=tel_href.clone() text="Get Price".to_string() placement="service" />
                                    </div>
                                </article>
                            }
                        })
                        .collect::<Vec<_>>()}
                </div>
            </div>
        </section>
    }
}
