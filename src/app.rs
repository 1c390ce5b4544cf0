//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{ParentRoute, Route, Router, Routes},
};

use crate::components::admin_layout::AdminLayout;
use crate::config::SidebarConfig;
use crate::pages::section::SectionPage;
use crate::state::nav::NavKey;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="id">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the sidebar configuration and sets up client-side routing. Every
/// route renders inside `AdminLayout`.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    provide_context(SidebarConfig::default());

    view! {
        <Stylesheet id="leptos" href="/pkg/admin-sidebar.css"/>
        <Title text="Admin"/>

        <Router>
            <Routes fallback=|| "Halaman tidak ditemukan.".into_view()>
                <ParentRoute path=StaticSegment("") view=AdminLayout>
                    <Route path=StaticSegment("") view=|| view! { <SectionPage key=NavKey::Dashboard/> }/>
                    <Route path=StaticSegment("mata-kuliah") view=|| view! { <SectionPage key=NavKey::Subjects/> }/>
                    <Route
                        path=(StaticSegment("mata-kuliah"), ParamSegment("id"))
                        view=|| view! { <SectionPage key=NavKey::Subjects/> }
                    />
                    <Route path=StaticSegment("informasi") view=|| view! { <SectionPage key=NavKey::Information/> }/>
                    <Route path=StaticSegment("pengguna") view=|| view! { <SectionPage key=NavKey::Users/> }/>
                </ParentRoute>
            </Routes>
        </Router>
    }
}
