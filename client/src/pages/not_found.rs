use leptos::prelude::*;
use leptos_router::components::A;

use crate::state::ui::UiState;
use crate::util::route_gate::HOME_PATH;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();

    view! {
        <main class="hydro-main hydro-not-found">
            <h2>"404"</h2>
            <p>{move || ui.get().t().not_found}</p>
            <A href=HOME_PATH>{move || ui.get().t().back_home}</A>
        </main>
    }
}
