//! Problem set page and the shared problem table.

#[cfg(test)]
#[path = "problems_test.rs"]
mod problems_test;

use leptos::prelude::*;

use crate::state::ui::UiState;
use crate::util::i18n::Translations;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    #[must_use]
    pub fn label(self, t: &Translations) -> &'static str {
        match self {
            Self::Easy => t.problems.easy,
            Self::Medium => t.problems.medium,
            Self::Hard => t.problems.hard,
        }
    }

    #[must_use]
    pub const fn css_class(self) -> &'static str {
        match self {
            Self::Easy => "difficulty easy",
            Self::Medium => "difficulty medium",
            Self::Hard => "difficulty hard",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ProblemRow {
    pub id: u32,
    pub title: &'static str,
    pub difficulty: Difficulty,
    pub accepted: u32,
    pub submissions: u32,
}

impl ProblemRow {
    /// Acceptance rate with one decimal, `"-"` when nothing was submitted.
    #[must_use]
    pub fn acceptance(&self) -> String {
        if self.submissions == 0 {
            return "-".to_owned();
        }
        let permille = (u64::from(self.accepted) * 1000 + u64::from(self.submissions) / 2) / u64::from(self.submissions);
        format!("{}.{}%", permille / 10, permille % 10)
    }
}

const PROBLEMS: [ProblemRow; 5] = [
    ProblemRow { id: 101, title: "Two Sum", difficulty: Difficulty::Easy, accepted: 1088, submissions: 1500 },
    ProblemRow { id: 102, title: "Reverse Linked List", difficulty: Difficulty::Medium, accepted: 700, submissions: 1200 },
    ProblemRow { id: 103, title: "Longest Palindromic Substring", difficulty: Difficulty::Hard, accepted: 257, submissions: 800 },
    ProblemRow { id: 104, title: "Valid Parentheses", difficulty: Difficulty::Easy, accepted: 512, submissions: 640 },
    ProblemRow { id: 105, title: "Merge Intervals", difficulty: Difficulty::Medium, accepted: 0, submissions: 0 },
];

/// Whole problem set, ordered by id.
#[must_use]
pub fn all_problems() -> &'static [ProblemRow] {
    &PROBLEMS
}

/// The `n` most recently added problems, newest first.
#[must_use]
pub fn recent_problems(n: usize) -> Vec<ProblemRow> {
    PROBLEMS.iter().rev().take(n).copied().collect()
}

/// Problem table used by the problem set and the home page.
#[component]
pub fn ProblemTable(rows: Vec<ProblemRow>) -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let t = move || ui.get().t();

    view! {
        <table class="hydro-problems">
            <thead>
                <tr>
                    <th>{move || t().problems.id}</th>
                    <th>{move || t().problems.title}</th>
                    <th>{move || t().problems.difficulty}</th>
                    <th>{move || t().problems.acceptance}</th>
                    <th>{move || t().problems.submissions}</th>
                </tr>
            </thead>
            <tbody>
                {rows
                    .into_iter()
                    .map(|row| {
                        view! {
                            <tr>
                                <td>{row.id}</td>
                                <td>{row.title}</td>
                                <td>
                                    <span class=row.difficulty.css_class()>
                                        {move || row.difficulty.label(t())}
                                    </span>
                                </td>
                                <td>{row.acceptance()}</td>
                                <td>{row.submissions}</td>
                            </tr>
                        }
                    })
                    .collect_view()}
            </tbody>
        </table>
    }
}

#[component]
pub fn ProblemsPage() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();

    view! {
        <main class="hydro-main">
            <h2>{move || ui.get().t().problems.heading}</h2>
            <ProblemTable rows=all_problems().to_vec()/>
        </main>
    }
}
