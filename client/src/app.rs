//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::navbar::Navbar;
use crate::net::api::{API_BASE_META, ApiConfig};
use crate::pages::{admin::AdminPage, status::StatusPage, submit::SubmitPage};
use crate::state::ui::UiState;
use crate::util::theme;

/// HTML shell rendered on the server for SSR + hydration.
///
/// `api_base` is published as a meta tag so the browser bundle talks to the
/// backend the server was configured with.
pub fn shell(options: LeptosOptions, api_base: String) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en" data-theme="light">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <meta name=API_BASE_META content=api_base/>
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
/// Provides the shared UI state and backend location, then sets up
/// client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let ui = RwSignal::new(UiState::default());
    provide_context(ui);
    provide_context(ApiConfig::from_document());

    // Stored preference is browser-only; read it after hydration so the
    // server-rendered markup matches the first client render.
    Effect::new(move || {
        let stored = theme::read_preference();
        theme::apply(stored);
        ui.update(|u| u.theme = stored);
    });

    view! {
        <Stylesheet id="leptos" href="/pkg/claims-ui.css"/>
        <Title text="InsuranceClaimFusion AI"/>

        <Router>
            <Navbar/>
            <main class="app-main">
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=StaticSegment("") view=SubmitPage/>
                    <Route path=StaticSegment("status") view=StatusPage/>
                    <Route path=StaticSegment("admin") view=AdminPage/>
                </Routes>
            </main>
        </Router>
    }
}
