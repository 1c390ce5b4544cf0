//! Dashboard layout: sidebar, top bar, and the routed page.
//!
//! SYSTEM CONTEXT
//! ==============
//! This is the owner of the canonical `sidebar_open` flag. Both the sidebar
//! and the top bar receive it read-only plus a setter callback.

use leptos::prelude::*;
use leptos_router::components::Outlet;

use crate::components::sidebar::Sidebar;
use crate::components::top_bar::TopBar;

#[component]
pub fn AdminLayout() -> impl IntoView {
    let sidebar_open = RwSignal::new(false);
    let set_sidebar_open = Callback::new(move |open: bool| sidebar_open.set(open));
    let opener_ref = NodeRef::<leptos::html::Button>::new();

    view! {
        <div class="flex h-screen overflow-hidden">
            <Sidebar sidebar_open=sidebar_open set_sidebar_open=set_sidebar_open opener_ref=opener_ref/>
            <div class="relative flex flex-1 flex-col overflow-y-auto overflow-x-hidden">
                <TopBar sidebar_open=sidebar_open set_sidebar_open=set_sidebar_open opener_ref=opener_ref/>
                <main>
                    <div class="mx-auto max-w-screen-2xl p-4 md:p-6 2xl:p-10">
                        <Outlet/>
                    </div>
                </main>
            </div>
        </div>
    }
}
