//! Login page: username + password form against the judge API.
//!
//! SYSTEM CONTEXT
//! ==============
//! A successful login is committed to the session store only if no other
//! login/logout happened while the request was in flight. The route guard
//! then redirects away from this auth-only route.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::pages::auth_form::validate_login_input;
use crate::state::SessionSignal;
use crate::state::session::SessionStore;
use crate::state::ui::UiState;
use crate::util::route_gate::REGISTER_PATH;

#[component]
pub fn LoginPage() -> impl IntoView {
    let session = expect_context::<SessionSignal>();
    let ui = expect_context::<RwSignal<UiState>>();

    let username = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let error = RwSignal::new(None::<String>);
    let busy = RwSignal::new(false);
    let registered = ui.try_update_untracked(UiState::take_registration_notice).unwrap_or(false);

    let t = move || ui.get().t();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let (name, pass) = match validate_login_input(&username.get_untracked(), &password.get_untracked()) {
            Ok(fields) => fields,
            Err(e) => {
                error.set(Some(e.message(ui.get_untracked().t()).to_owned()));
                return;
            }
        };
        error.set(None);
        busy.set(true);
        let epoch = session.with_untracked(SessionStore::epoch);

        leptos::task::spawn_local(async move {
            match crate::net::api::login(&name, &pass).await {
                Ok(user) => {
                    let committed = session.try_update(|s| s.login_if_current(epoch, user)).unwrap_or(false);
                    if !committed {
                        busy.set(false);
                    }
                }
                Err(e) => {
                    leptos::logging::warn!("login failed: {e}");
                    error.set(Some(e.user_message(ui.get_untracked().t())));
                    busy.set(false);
                }
            }
        });
    };

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h2>{move || t().auth.login_title}</h2>
                <Show when=move || registered>
                    <p class="auth-message auth-message--success">{move || t().auth.registered}</p>
                </Show>
                <Show when=move || error.get().is_some()>
                    <p class="auth-message auth-message--error">{move || error.get().unwrap_or_default()}</p>
                </Show>
                <form class="auth-form" on:submit=on_submit>
                    <label class="auth-label">
                        {move || t().auth.username}
                        <input
                            class="auth-input"
                            type="text"
                            autocomplete="username"
                            prop:value=move || username.get()
                            on:input=move |ev| username.set(event_target_value(&ev))
                        />
                    </label>
                    <label class="auth-label">
                        {move || t().auth.password}
                        <input
                            class="auth-input"
                            type="password"
                            autocomplete="current-password"
                            prop:value=move || password.get()
                            on:input=move |ev| password.set(event_target_value(&ev))
                        />
                    </label>
                    <button class="auth-button" type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { t().auth.working } else { t().auth.login_button }}
                    </button>
                </form>
                <p class="auth-switch">
                    {move || t().auth.no_account}
                    " "
                    <A href=REGISTER_PATH>{move || t().auth.register_here}</A>
                </p>
            </div>
        </div>
    }
}
