//! Site header: title, section links, user avatar menu and language switcher.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::state::SessionSignal;
use crate::state::session::SessionStore;
use crate::state::ui::UiState;
use crate::util::i18n::Language;
use crate::util::route_gate::{CONTESTS_PATH, IDE_PATH, LOGIN_PATH, PROBLEMS_PATH, REGISTER_PATH, SUBMISSIONS_PATH};

#[component]
pub fn NavBar() -> impl IntoView {
    let session = expect_context::<SessionSignal>();
    let ui = expect_context::<RwSignal<UiState>>();

    let t = move || ui.get().t();
    let signed_in = move || session.with(|s| s.session().is_authenticated());

    view! {
        <header class="hydro-header">
            <h1 class="hydro-title">
                <A href="/">{move || t().title}</A>
            </h1>
            <nav class="hydro-nav">
                <Show
                    when=signed_in
                    fallback=move || {
                        view! {
                            <A href=LOGIN_PATH>{move || t().nav.login}</A>
                            <A href=REGISTER_PATH>{move || t().nav.register}</A>
                        }
                    }
                >
                    <A href=PROBLEMS_PATH>{move || t().nav.problems}</A>
                    <A href=CONTESTS_PATH>{move || t().nav.contests}</A>
                    <A href=SUBMISSIONS_PATH>{move || t().nav.submissions}</A>
                    <A href=IDE_PATH>{move || t().nav.ide}</A>
                    <UserAvatar/>
                </Show>
                <LanguageSwitcher/>
            </nav>
        </header>
    }
}

#[component]
fn UserAvatar() -> impl IntoView {
    let session = expect_context::<SessionSignal>();
    let ui = expect_context::<RwSignal<UiState>>();

    let username = move || session.with(|s| s.user().map(|u| u.username.clone()).unwrap_or_default());
    let initial = move || session.with(|s| s.user().map(crate::net::types::SessionUser::initial).unwrap_or_default());
    let close_menu = move || ui.update(|s| s.avatar_menu_open = false);

    let on_logout = move |_| {
        close_menu();
        session.update(SessionStore::logout);
    };

    view! {
        <div class="user-avatar-container">
            <button class="avatar-button" on:click=move |_| ui.update(|s| s.avatar_menu_open = !s.avatar_menu_open)>
                {initial}
            </button>
            <Show when=move || ui.get().avatar_menu_open>
                <div class="user-dropdown">
                    <div class="user-info">
                        <span class="username">{username}</span>
                    </div>
                    <button class="dropdown-item" on:click=move |_| close_menu()>
                        {move || ui.get().t().nav.profile}
                    </button>
                    <button class="dropdown-item logout" on:click=on_logout>
                        {move || ui.get().t().nav.logout}
                    </button>
                </div>
            </Show>
        </div>
    }
}

#[component]
fn LanguageSwitcher() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();

    view! {
        <div class="language-switcher">
            <select
                class="language-select"
                prop:value=move || ui.get().language.tag()
                on:change=move |ev| {
                    let tag = event_target_value(&ev);
                    ui.update(|s| s.set_language_tag(&tag));
                }
            >
                {Language::ALL
                    .into_iter()
                    .map(|lang| view! { <option value=lang.tag()>{lang.label()}</option> })
                    .collect_view()}
            </select>
        </div>
    }
}
