//! Header bar above the routed page with the sidebar open button.

use leptos::prelude::*;
use leptos_router::hooks::use_location;

use crate::state::nav::{active_keys, entry};
use crate::state::sidebar::{aria_expanded, handle_toggle};

#[component]
pub fn TopBar(
    #[prop(into)] sidebar_open: Signal<bool>,
    set_sidebar_open: Callback<bool>,
    /// Shared with the sidebar so clicks here count as toggle clicks.
    opener_ref: NodeRef<leptos::html::Button>,
) -> impl IntoView {
    let location = use_location();
    let section_title = move || {
        location.pathname.with(|path| {
            active_keys(path)
                .first()
                .and_then(|key| entry(*key))
                .map_or("", |e| e.label)
        })
    };

    view! {
        <header class="sticky top-0 z-999 flex w-full bg-white drop-shadow-1 dark:bg-boxdark dark:drop-shadow-none">
            <div class="flex flex-grow items-center justify-between px-4 py-4 shadow-2 md:px-6 2xl:px-11">
                <button
                    node_ref=opener_ref
                    class="z-99999 block rounded-sm border border-stroke bg-white p-1.5 shadow-sm dark:border-strokedark dark:bg-boxdark lg:hidden"
                    aria-controls="sidebar"
                    aria-expanded=move || aria_expanded(sidebar_open.get())
                    on:click=move |_| handle_toggle(sidebar_open.get_untracked(), |next| set_sidebar_open.run(next))
                    title="Toggle navigation"
                >
                    "☰"
                </button>
                <span class="top-bar__title font-semibold">{section_title}</span>
            </div>
        </header>
    }
}
