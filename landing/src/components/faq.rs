//! FAQ accordion.
//!
//! Each entry is a native `<details>` element so the toggle works without
//! scripts. The server-side [`FaqState`] decides which entries render open;
//! `data-state` mirrors it and is kept in sync in the browser by
//! [`super::PageScripts`].

use leptos::prelude::*;

use super::{ICON_CARET_DOWN, Icon};
use crate::content::FaqEntry;
use crate::faq::FaqState;

#[component]
pub fn FaqAccordion(faqs: Vec<FaqEntry>, state: FaqState) -> impl IntoView {
    view! {
        <section id="faq" class="section">
            <div class="container">
                <h2>"FAQ"</h2>
                <div class="faq-grid">
                    {faqs
                        .into_iter()
                        .enumerate()
                        .map(|(idx, entry)| {
                            let disclosure = state.get(idx);
                            view! {
                                <details
                                    class="faq-item"
                                    data-faq-index=idx.to_string()
                                    data-state=disclosure.as_str()
                                    open=disclosure.is_expanded()
                                >
                                    <summary>
                                        <span>{entry.question}</span>
                                        <Icon path=ICON_CARET_DOWN size="16" />
                                    </summary>
                                    <p>{entry.answer}</p>
                                </details>
                            }
                        })
                        .collect::<Vec<_>>()}
                </div>
            </div>
        </section>
    }
}
