//! Collapsible navigation sidebar.
//!
//! ARCHITECTURE
//! ============
//! The host owns `sidebar_open`; this component renders from it and asks the
//! host to change it on three gestures: a click outside the panel on narrow
//! viewports, the Escape key, and the header toggle button.
//!
//! Document listeners are installed once when the component mounts and
//! removed when its owner is cleaned up (`util::listeners`), so a mounted
//! sidebar holds exactly one click/keydown pair no matter how often it
//! re-renders. Clicks on an external opener button count as toggle clicks.
//!
//! The expanded flag is local, starts `true` on every mount, and is only ever
//! written: each change is stored and mirrored as a `<body>` class.

use leptos::prelude::*;

use crate::components::nav_link::NavLink;
use crate::config::SidebarConfig;
use crate::state::nav::{NAV_ENTRIES, NavIcon};
use crate::state::sidebar::{INITIAL_EXPANDED, aria_expanded, handle_toggle, panel_class};
use crate::util::expanded_pref::{BrowserSink, sync_expanded};

#[cfg(feature = "hydrate")]
use crate::util::browser::DocumentHost;
#[cfg(feature = "hydrate")]
use crate::util::listeners::scope_dismiss_listeners;

#[component]
pub fn Sidebar(
    /// Whether the panel is shown on narrow viewports.
    #[prop(into)]
    sidebar_open: Signal<bool>,
    /// Host setter; the only way this component changes `sidebar_open`.
    set_sidebar_open: Callback<bool>,
    /// Host button outside the panel that also toggles it.
    #[prop(optional)]
    opener_ref: Option<NodeRef<leptos::html::Button>>,
) -> impl IntoView {
    let config = use_context::<SidebarConfig>().unwrap_or_default();
    let panel_ref = NodeRef::<leptos::html::Aside>::new();
    let toggle_ref = NodeRef::<leptos::html::Button>::new();
    let sidebar_expanded = RwSignal::new(INITIAL_EXPANDED);

    let sync_config = config.clone();
    Effect::new(move || {
        let expanded = sidebar_expanded.get();
        if let Err(err) = sync_expanded(&mut BrowserSink, &sync_config, expanded) {
            leptos::logging::warn!("sidebar expanded flag not synced: {err}");
        }
    });

    #[cfg(feature = "hydrate")]
    {
        let refs = DismissRefs { panel: panel_ref, toggle: toggle_ref, opener: opener_ref };
        let (on_click, on_keydown) = dismiss_handlers(refs, sidebar_open, set_sidebar_open, config);
        if let Err(err) = scope_dismiss_listeners(DocumentHost, on_click, on_keydown) {
            leptos::logging::warn!("sidebar dismissal listeners not installed: {err}");
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (config, opener_ref);
    }

    let on_toggle = move |_| handle_toggle(sidebar_open.get_untracked(), |next| set_sidebar_open.run(next));

    view! {
        <aside id="sidebar" node_ref=panel_ref class=move || panel_class(sidebar_open.get())>
            <div class="flex items-center justify-center gap-2 px-6">
                <a href="/">
                    <img width="160" height="160" src="/images/logo/logo.png" alt="Logo"/>
                </a>

                <button
                    node_ref=toggle_ref
                    on:click=on_toggle
                    aria-controls="sidebar"
                    aria-expanded=move || aria_expanded(sidebar_open.get())
                    class="block lg:hidden"
                >
                    <i class=NavIcon::Close.class() aria-hidden="true"></i>
                </button>
            </div>

            <div class="no-scrollbar flex flex-col overflow-y-auto duration-300 ease-linear">
                <nav class="py-4 px-4 lg:px-6">
                    <ul class="mb-6 flex flex-col gap-1.5">
                        {NAV_ENTRIES
                            .iter()
                            .map(|entry| view! { <NavLink entry=entry/> })
                            .collect_view()}
                    </ul>
                </nav>
            </div>
        </aside>
    }
}

#[cfg(feature = "hydrate")]
struct DismissRefs {
    panel: NodeRef<leptos::html::Aside>,
    toggle: NodeRef<leptos::html::Button>,
    opener: Option<NodeRef<leptos::html::Button>>,
}

#[cfg(feature = "hydrate")]
type DocumentHandler = Box<dyn FnMut(web_sys::Event)>;

/// Click and keydown handlers for the document listener pair.
#[cfg(feature = "hydrate")]
fn dismiss_handlers(
    refs: DismissRefs,
    sidebar_open: Signal<bool>,
    set_sidebar_open: Callback<bool>,
    config: SidebarConfig,
) -> (DocumentHandler, DocumentHandler) {
    use wasm_bindgen::JsCast;

    use crate::state::sidebar::{ClickHit, handle_click, handle_key, toggle_hit};
    use crate::util::browser::{node_contains, viewport_is_wide};

    let on_click = Box::new(move |ev: web_sys::Event| {
        let target = ev.target().and_then(|t| t.dyn_into::<web_sys::Node>().ok());
        let contains = |node: Option<web_sys::Node>| node_contains(node.as_ref(), target.as_ref());
        let in_panel = contains(refs.panel.get_untracked().map(web_sys::Node::from));
        let in_toggle = contains(refs.toggle.get_untracked().map(web_sys::Node::from));
        let in_opener = contains(
            refs.opener
                .and_then(|opener| opener.get_untracked())
                .map(web_sys::Node::from),
        );
        let hit = ClickHit::classify(in_panel, toggle_hit(in_toggle, in_opener));
        let wide = viewport_is_wide(&config).unwrap_or_else(|err| {
            leptos::logging::warn!("viewport query failed, keeping sidebar open: {err}");
            true
        });
        handle_click(sidebar_open.get_untracked(), hit, wide, |next| set_sidebar_open.run(next));
    }) as DocumentHandler;

    let on_keydown = Box::new(move |ev: web_sys::Event| {
        let Some(key) = ev.dyn_ref::<web_sys::KeyboardEvent>().map(web_sys::KeyboardEvent::key) else {
            return;
        };
        handle_key(sidebar_open.get_untracked(), &key, |next| set_sidebar_open.run(next));
    }) as DocumentHandler;

    (on_click, on_keydown)
}
