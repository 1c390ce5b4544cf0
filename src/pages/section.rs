//! Placeholder page for one navigation section.

use leptos::prelude::*;

use crate::state::nav::{NavKey, entry};

#[component]
pub fn SectionPage(key: NavKey) -> impl IntoView {
    let title = entry(key).map_or("", |e| e.label);

    view! {
        <section class="section-page">
            <h2 class="section-page__title text-title-md2 font-semibold">{title}</h2>
        </section>
    }
}
