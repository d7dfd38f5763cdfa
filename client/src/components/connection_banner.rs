//! Offline banner and the background connectivity monitor.
//!
//! SYSTEM CONTEXT
//! ==============
//! The app root starts one monitor after hydration. It probes the judge API,
//! backs off exponentially while offline and stops after the first success.
//! The banner's retry button, and the browser's `online` event, run an extra
//! probe immediately.

use leptos::prelude::*;

use crate::state::connectivity::Connectivity;
#[cfg(feature = "hydrate")]
use crate::state::connectivity::Backoff;
use crate::state::ui::UiState;
use crate::util::i18n;

/// Spawn the startup connectivity check loop (browser only).
#[cfg(feature = "hydrate")]
pub fn start_connectivity_monitor(status: RwSignal<Connectivity>) {
    // Lives as long as the page; the app root never unmounts.
    let _online = window_event_listener(leptos::ev::online, move |_| retry_now(status));
    leptos::task::spawn_local(async move {
        let mut backoff = Backoff::default();
        loop {
            if crate::net::api::check_connection().await {
                status.set(Connectivity::Online);
                return;
            }
            if status.get_untracked().is_online() {
                return;
            }
            let offline = backoff.fail();
            status.set(offline);
            if let Connectivity::Offline { attempt, retry_in } = offline {
                leptos::logging::log!("judge unreachable (attempt {attempt}), retrying in {retry_in:?}");
                gloo_timers::future::sleep(retry_in).await;
            }
            if status.get_untracked().is_online() {
                return;
            }
        }
    });
}

fn retry_now(status: RwSignal<Connectivity>) {
    if status.get_untracked().is_online() {
        return;
    }
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        if crate::net::api::check_connection().await {
            status.set(Connectivity::Online);
        }
    });
}

#[component]
pub fn ConnectionBanner() -> impl IntoView {
    let status = expect_context::<RwSignal<Connectivity>>();
    let ui = expect_context::<RwSignal<UiState>>();

    let notice = move || match status.get() {
        Connectivity::Offline { retry_in, .. } => Some(i18n::offline_notice(ui.get().t(), retry_in.as_secs())),
        Connectivity::Checking | Connectivity::Online => None,
    };

    view! {
        <Show when=move || notice().is_some()>
            <div class="connection-banner" role="status">
                <span>{move || notice().unwrap_or_default()}</span>
                <button class="connection-banner__retry" on:click=move |_| retry_now(status)>
                    {move || ui.get().t().retry}
                </button>
            </div>
        </Show>
    }
}
