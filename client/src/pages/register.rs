//! Registration page. On success the user is sent to `/login` with a
//! one-shot success notice.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use crate::pages::auth_form::validate_register_input;
use crate::state::ui::UiState;
use crate::util::route_gate::LOGIN_PATH;

#[component]
pub fn RegisterPage() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let navigate = use_navigate();

    let username = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let confirm = RwSignal::new(String::new());
    let error = RwSignal::new(None::<String>);
    let busy = RwSignal::new(false);

    let t = move || ui.get().t();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let registration = match validate_register_input(
            &username.get_untracked(),
            &email.get_untracked(),
            &password.get_untracked(),
            &confirm.get_untracked(),
        ) {
            Ok(registration) => registration,
            Err(e) => {
                error.set(Some(e.message(ui.get_untracked().t()).to_owned()));
                return;
            }
        };
        error.set(None);
        busy.set(true);

        let navigate = navigate.clone();
        leptos::task::spawn_local(async move {
            let result =
                crate::net::api::register(&registration.username, &registration.email, &registration.password).await;
            busy.set(false);
            match result {
                Ok(()) => {
                    leptos::logging::log!("registered {}", registration.username);
                    ui.update(|s| s.registration_notice = true);
                    navigate(LOGIN_PATH, NavigateOptions::default());
                }
                Err(e) => {
                    leptos::logging::warn!("registration failed: {e}");
                    error.set(Some(e.user_message(ui.get_untracked().t())));
                }
            }
        });
    };

    let field = move |label: fn(&UiState) -> &'static str, kind: &'static str, auto: &'static str, value: RwSignal<String>| {
        view! {
            <label class="auth-label">
                {move || label(&ui.get())}
                <input
                    class="auth-input"
                    type=kind
                    autocomplete=auto
                    prop:value=move || value.get()
                    on:input=move |ev| value.set(event_target_value(&ev))
                />
            </label>
        }
    };

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h2>{move || t().auth.register_title}</h2>
                <Show when=move || error.get().is_some()>
                    <p class="auth-message auth-message--error">{move || error.get().unwrap_or_default()}</p>
                </Show>
                <form class="auth-form" on:submit=on_submit>
                    {field(|s| s.t().auth.username, "text", "username", username)}
                    {field(|s| s.t().auth.email, "email", "email", email)}
                    {field(|s| s.t().auth.password, "password", "new-password", password)}
                    {field(|s| s.t().auth.confirm_password, "password", "new-password", confirm)}
                    <button class="auth-button" type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { t().auth.working } else { t().auth.register_button }}
                    </button>
                </form>
                <p class="auth-switch">
                    {move || t().auth.have_account}
                    " "
                    <A href=LOGIN_PATH>{move || t().auth.login_here}</A>
                </p>
            </div>
        </div>
    }
}
