//! Route guard wrapping every routed page.
//!
//! SYSTEM CONTEXT
//! ==============
//! Re-evaluates `util::route_gate::decide` whenever the session or location
//! changes and performs the navigation it asks for. While the session is
//! still hydrating, or the first connectivity check is in flight, it shows
//! the loading screen and never redirects.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_location, use_navigate};

use crate::components::loading_screen::LoadingScreen;
use crate::pages::not_found::NotFoundPage;
use crate::state::SessionSignal;
use crate::state::connectivity::Connectivity;
use crate::util::route_gate::{GateDecision, guard_decision};

/// Render `children` only when the gate says so for the current location.
#[component]
pub fn RouteGuard(children: ChildrenFn) -> impl IntoView {
    let session = expect_context::<SessionSignal>();
    let connectivity = expect_context::<RwSignal<Connectivity>>();
    let location = use_location();
    let navigate = use_navigate();

    let decision = Memo::new(move |_| {
        let path = location.pathname.get();
        let status = connectivity.get();
        session.with(|store| guard_decision(status, store.session(), &path))
    });

    Effect::new(move || {
        if let GateDecision::Redirect(target) = decision.get() {
            navigate(target, NavigateOptions { replace: true, ..NavigateOptions::default() });
        }
    });

    move || match decision.get() {
        GateDecision::ShowLoading => view! { <LoadingScreen/> }.into_any(),
        GateDecision::NotFound => view! { <NotFoundPage/> }.into_any(),
        GateDecision::Redirect(_) => ().into_any(),
        GateDecision::Render(_) => children().into_any(),
    }
}
