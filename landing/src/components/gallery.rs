//! Before/after photo grid

use leptos::prelude::*;

use super::{ICON_IMAGE, Icon};
use crate::content::GalleryTile;

#[component]
pub fn Gallery(tiles: Vec<GalleryTile>) -> impl IntoView {
    view! {
        <section id="gallery" class="section section-alt">
            <div class="container">
                <h2>"Before & After"</h2>
                <div class="card-grid">
                    {tiles
                        .into_iter()
                        .map(|tile| {
                            let alt = tile.caption.clone();
                            view! {
                                <figure class="card">
                                    <img class="image-box" src=tile.image_url alt=alt loading="lazy" decoding="async" />
                                    <figcaption class="tile-caption">
                                        <Icon path=ICON_IMAGE class="icon-sm" />
                                        {tile.caption}
                                    </figcaption>
                                </figure>
                            }
                        })
                        .collect::<Vec<_>>()}
                </div>
            </div>
        </section>
    }
}
