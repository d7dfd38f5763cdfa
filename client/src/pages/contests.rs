//! Contest listing with status derived from the wall clock.

#[cfg(test)]
#[path = "contests_test.rs"]
mod contests_test;

use leptos::prelude::*;

use crate::state::ui::UiState;
use crate::util::clock;
use crate::util::i18n::Translations;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ContestStatus {
    Upcoming,
    Ongoing,
    Ended,
}

impl ContestStatus {
    #[must_use]
    pub fn label(self, t: &Translations) -> &'static str {
        match self {
            Self::Upcoming => t.contests.upcoming,
            Self::Ongoing => t.contests.ongoing,
            Self::Ended => t.contests.ended,
        }
    }

    #[must_use]
    pub const fn css_class(self) -> &'static str {
        match self {
            Self::Upcoming => "upcoming",
            Self::Ongoing => "ongoing",
            Self::Ended => "ended",
        }
    }
}

/// Status at `now_ms`. Both window bounds count as ongoing.
#[must_use]
pub fn contest_status(start_ms: i64, end_ms: i64, now_ms: i64) -> ContestStatus {
    if now_ms < start_ms {
        ContestStatus::Upcoming
    } else if now_ms > end_ms {
        ContestStatus::Ended
    } else {
        ContestStatus::Ongoing
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Contest {
    pub id: u32,
    pub title: &'static str,
    pub description: &'static str,
    pub organizer: &'static str,
    pub start_ms: i64,
    pub end_ms: i64,
    pub participants: u32,
}

impl Contest {
    #[must_use]
    pub fn status_at(&self, now_ms: i64) -> ContestStatus {
        contest_status(self.start_ms, self.end_ms, now_ms)
    }
}

pub const CONTESTS: [Contest; 3] = [
    Contest {
        id: 1,
        title: "Spring Programming Contest",
        description: "The largest contest of the year, covering a wide range of algorithm problems.",
        organizer: "Hydro",
        start_ms: 1_682_931_600_000,
        end_ms: 1_682_942_400_000,
        participants: 1250,
    },
    Contest {
        id: 2,
        title: "Algorithm Challenge",
        description: "Focused on algorithms and data structures.",
        organizer: "Algorithm Society",
        start_ms: 1_686_837_600_000,
        end_ms: 1_686_848_400_000,
        participants: 800,
    },
    Contest {
        id: 3,
        title: "Beginner Training Round",
        description: "An entry-level round for new programmers.",
        organizer: "Programming Education Alliance",
        start_ms: 1_812_402_000_000,
        end_ms: 1_812_402_600_000,
        participants: 10,
    },
];

#[component]
pub fn ContestsPage() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let t = move || ui.get().t();
    let now = clock::now_ms();

    view! {
        <main class="hydro-main">
            <h2>{move || t().contests.heading}</h2>
            <div class="contest-list">
                {CONTESTS
                    .into_iter()
                    .map(|contest| {
                        let status = contest.status_at(now);
                        view! {
                            <div class=format!("contest-card {}", status.css_class())>
                                <div class="contest-header">
                                    <h3 class="contest-title">{contest.title}</h3>
                                    <span class=format!("contest-status {}", status.css_class())>
                                        {move || status.label(t())}
                                    </span>
                                </div>
                                <p class="contest-description">{contest.description}</p>
                                <dl class="contest-meta">
                                    <dt>{move || t().contests.starts}</dt>
                                    <dd>{clock::format_utc_minutes(contest.start_ms)}</dd>
                                    <dt>{move || t().contests.ends}</dt>
                                    <dd>{clock::format_utc_minutes(contest.end_ms)}</dd>
                                    <dt>{move || t().contests.participants}</dt>
                                    <dd>{contest.participants}</dd>
                                    <dt>{move || t().contests.organizer}</dt>
                                    <dd>{contest.organizer}</dd>
                                </dl>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </main>
    }
}
