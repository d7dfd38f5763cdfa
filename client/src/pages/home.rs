//! Public landing page.

use leptos::prelude::*;

use crate::pages::problems::{ProblemTable, recent_problems};
use crate::state::ui::UiState;
use crate::util::{clock, i18n};

const RECENT_PROBLEM_COUNT: usize = 3;

#[component]
pub fn HomePage() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let t = move || ui.get().t();
    let year = clock::current_year();

    view! {
        <main class="hydro-main">
            <section class="hydro-welcome">
                <h2>{move || t().welcome.title}</h2>
                <p>{move || t().welcome.subtitle}</p>
            </section>
            <section class="hydro-recent">
                <h3>{move || t().problems.recent}</h3>
                <ProblemTable rows=recent_problems(RECENT_PROBLEM_COUNT)/>
            </section>
            <footer class="hydro-footer">{move || i18n::footer(t(), year)}</footer>
        </main>
    }
}
