//! Full-page loading screen shown while the session hydrates or the first
//! connectivity check is in flight.

use leptos::prelude::*;

use crate::state::ui::UiState;
use crate::util::i18n::{SERVER_LANGUAGE_TAG, browser_language_tag, connecting_message};

#[cfg(feature = "hydrate")]
const FEEDBACK_PROMPT_DELAY: std::time::Duration = std::time::Duration::from_secs(5);

#[component]
pub fn LoadingScreen() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    // Server and first browser render agree; the browser language applies after hydration.
    let message = RwSignal::new(connecting_message(SERVER_LANGUAGE_TAG));
    Effect::new(move || message.set(connecting_message(&browser_language_tag())));
    let show_feedback = RwSignal::new(false);

    #[cfg(feature = "hydrate")]
    {
        let alive = std::sync::Arc::new(std::sync::atomic::AtomicBool::new(true));
        let alive_task = alive.clone();
        leptos::task::spawn_local(async move {
            gloo_timers::future::sleep(FEEDBACK_PROMPT_DELAY).await;
            if alive_task.load(std::sync::atomic::Ordering::Relaxed) {
                show_feedback.set(true);
            }
        });
        on_cleanup(move || alive.store(false, std::sync::atomic::Ordering::Relaxed));
    }

    view! {
        <div class="hydro-loading-screen">
            <div class="hydro-loading-content">
                <div class="hydro-logo">
                    <span class="hydro-logo-text">"Hydro"</span>
                    <div class="hydro-logo-subtext">"Online Judge"</div>
                </div>
                <div class="hydro-loading-bar">
                    <div class="hydro-loading-progress"></div>
                </div>
                <p class="hydro-loading-text">{move || message.get()}</p>
                <Show when=move || show_feedback.get()>
                    <div class="feedback-prompt">
                        <p>
                            {move || ui.get().t().issues}
                            <a href="mailto:feedback@hydro.local">{move || ui.get().t().feedback}</a>
                        </p>
                    </div>
                </Show>
            </div>
        </div>
    }
}
