//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

#[cfg(feature = "hydrate")]
use crate::components::connection_banner::start_connectivity_monitor;
use crate::components::{
    connection_banner::ConnectionBanner, nav_bar::NavBar, route_guard::RouteGuard,
};
use crate::pages::{
    contests::ContestsPage, home::HomePage, ide::IdePage, login::LoginPage, not_found::NotFoundPage,
    problems::ProblemsPage, register::RegisterPage, submissions::SubmissionsPage,
};
use crate::state::SessionSignal;
use crate::state::connectivity::Connectivity;
use crate::state::session::SessionStore;
use crate::state::ui::UiState;
use crate::util::i18n::browser_language;
use crate::util::storage::BrowserStorage;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
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
/// Owns the session store, UI state and connectivity status. Both the server
/// render and the first browser render see a loading session and a pending
/// connectivity check, so hydration starts from identical markup.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let session: SessionSignal = RwSignal::new(SessionStore::new(BrowserStorage));
    let ui = RwSignal::new(UiState::default());
    let connectivity = RwSignal::new(Connectivity::default());

    provide_context(session);
    provide_context(ui);
    provide_context(connectivity);

    // Effects only run in the browser, after hydration.
    Effect::new(move || {
        session.update(SessionStore::initialize);
        ui.update(|s| s.language = browser_language());
        #[cfg(feature = "hydrate")]
        start_connectivity_monitor(connectivity);
    });

    view! {
        <Stylesheet id="leptos" href="/pkg/hydro.css"/>
        <Title text="Hydro"/>

        <Router>
            <NavBar/>
            <ConnectionBanner/>
            <Routes fallback=|| view! { <RouteGuard><NotFoundPage/></RouteGuard> }>
                <Route path=StaticSegment("") view=|| view! { <RouteGuard><HomePage/></RouteGuard> }/>
                <Route path=StaticSegment("login") view=|| view! { <RouteGuard><LoginPage/></RouteGuard> }/>
                <Route path=StaticSegment("register") view=|| view! { <RouteGuard><RegisterPage/></RouteGuard> }/>
                <Route path=StaticSegment("problems") view=|| view! { <RouteGuard><ProblemsPage/></RouteGuard> }/>
                <Route path=StaticSegment("contests") view=|| view! { <RouteGuard><ContestsPage/></RouteGuard> }/>
                <Route
                    path=StaticSegment("submissions")
                    view=|| view! { <RouteGuard><SubmissionsPage/></RouteGuard> }
                />
                <Route path=StaticSegment("ide") view=|| view! { <RouteGuard><IdePage/></RouteGuard> }/>
            </Routes>
        </Router>
    }
}
