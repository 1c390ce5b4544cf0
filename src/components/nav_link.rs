//! One navigation entry in the sidebar list.

use leptos::prelude::*;
use leptos_router::hooks::use_location;

use crate::state::nav::{NavEntry, link_class};

/// Icon + label link; highlighted when its route rule matches the current path.
#[component]
pub fn NavLink(entry: &'static NavEntry) -> impl IntoView {
    let location = use_location();
    let active = move || location.pathname.with(|path| entry.is_active(path));

    view! {
        <li>
            <a href=entry.path class=move || link_class(active())>
                <i class=entry.icon.class() aria-hidden="true"></i>
                {entry.label}
            </a>
        </li>
    }
}
