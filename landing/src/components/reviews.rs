//! Testimonials

use leptos::prelude::*;

use super::{ICON_STAR, Icon};
use crate::content::Testimonial;

#[component]
pub fn Reviews(testimonials: Vec<Testimonial>) -> impl IntoView {
    view! {
        <section id="reviews" class="section">
            <div class="container">
                <h2>"What homeowners say"</h2>
                <div class="card-grid">
                    {testimonials
                        .into_iter()
                        .map(|review| view! {
                            <blockquote class="card card-body">
                                <div class="stars" role="img" aria-label=format!("{} out of 5 stars", review.star_rating)>
                                    {(0..review.star_rating)
                                        .map(|_| view! { <Icon path=ICON_STAR size="16" /> })
                                        .collect::<Vec<_>>()}
                                </div>
                                <p>{review.text}</p>
                                <div class="review-source">{review.source}</div>
                            </blockquote>
                        })
                        .collect::<Vec<_>>()}
                </div>
            </div>
        </section>
    }
}
