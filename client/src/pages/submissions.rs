//! Submission history for the signed-in user.

#[cfg(test)]
#[path = "submissions_test.rs"]
mod submissions_test;

use leptos::prelude::*;

use crate::state::ui::UiState;
use crate::util::clock;

/// Judge verdict of a finished submission.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Verdict {
    Accepted,
    WrongAnswer,
    CompileError,
    RuntimeError,
    TimeLimitExceeded,
}

impl Verdict {
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Accepted => "Accepted",
            Self::WrongAnswer => "Wrong Answer",
            Self::CompileError => "Compile Error",
            Self::RuntimeError => "Runtime Error",
            Self::TimeLimitExceeded => "Time Limit Exceeded",
        }
    }

    /// `"status wrong-answer"` style class for the verdict badge.
    #[must_use]
    pub fn css_class(self) -> String {
        format!("status {}", self.label().to_ascii_lowercase().replace(' ', "-"))
    }

    /// Whether runtime and memory figures are meaningful.
    #[must_use]
    pub const fn has_metrics(self) -> bool {
        matches!(self, Self::Accepted | Self::WrongAnswer | Self::TimeLimitExceeded)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Submission {
    pub id: u32,
    pub problem_id: u32,
    pub problem_title: &'static str,
    pub language: &'static str,
    pub verdict: Verdict,
    pub runtime_ms: u32,
    pub memory_kb: u32,
    pub submitted_ms: i64,
}

impl Submission {
    #[must_use]
    pub fn runtime(&self) -> String {
        if self.verdict.has_metrics() { format!("{}ms", self.runtime_ms) } else { "N/A".to_owned() }
    }

    #[must_use]
    pub fn memory(&self) -> String {
        if self.verdict.has_metrics() {
            format!("{}.{}MB", self.memory_kb / 1024, (self.memory_kb % 1024) * 10 / 1024)
        } else {
            "N/A".to_owned()
        }
    }
}

pub const SUBMISSIONS: [Submission; 3] = [
    Submission {
        id: 3,
        problem_id: 101,
        problem_title: "Two Sum",
        language: "Rust",
        verdict: Verdict::Accepted,
        runtime_ms: 4,
        memory_kb: 2150,
        submitted_ms: 1_681_137_600_000,
    },
    Submission {
        id: 1,
        problem_id: 101,
        problem_title: "Two Sum",
        language: "Python",
        verdict: Verdict::CompileError,
        runtime_ms: 0,
        memory_kb: 0,
        submitted_ms: 1_681_137_000_000,
    },
    Submission {
        id: 2,
        problem_id: 102,
        problem_title: "Reverse Linked List",
        language: "C++",
        verdict: Verdict::WrongAnswer,
        runtime_ms: 45,
        memory_kb: 14_848,
        submitted_ms: 1_680_945_300_000,
    },
];

#[component]
pub fn SubmissionsPage() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let t = move || ui.get().t();

    view! {
        <main class="hydro-main">
            <h2>{move || t().submissions.heading}</h2>
            <table class="hydro-problems">
                <thead>
                    <tr>
                        <th>"#"</th>
                        <th>{move || t().submissions.problem}</th>
                        <th>{move || t().submissions.language}</th>
                        <th>{move || t().submissions.status}</th>
                        <th>{move || t().submissions.runtime}</th>
                        <th>{move || t().submissions.memory}</th>
                        <th>{move || t().submissions.submitted_at}</th>
                    </tr>
                </thead>
                <tbody>
                    {SUBMISSIONS
                        .into_iter()
                        .map(|sub| {
                            view! {
                                <tr>
                                    <td>{sub.id}</td>
                                    <td>{format!("{} {}", sub.problem_id, sub.problem_title)}</td>
                                    <td>{sub.language}</td>
                                    <td>
                                        <span class=sub.verdict.css_class()>{sub.verdict.label()}</span>
                                    </td>
                                    <td>{sub.runtime()}</td>
                                    <td>{sub.memory()}</td>
                                    <td>{clock::format_utc_minutes(sub.submitted_ms)}</td>
                                </tr>
                            }
                        })
                        .collect_view()}
                </tbody>
            </table>
        </main>
    }
}
