use super::*;
use crate::util::i18n::{Language, table};

const START: i64 = 1_000;
const END: i64 = 2_000;

#[test]
fn before_start_is_upcoming() {
    assert_eq!(contest_status(START, END, START - 1), ContestStatus::Upcoming);
}

#[test]
fn window_bounds_are_ongoing() {
    assert_eq!(contest_status(START, END, START), ContestStatus::Ongoing);
    assert_eq!(contest_status(START, END, 1_500), ContestStatus::Ongoing);
    assert_eq!(contest_status(START, END, END), ContestStatus::Ongoing);
}

#[test]
fn after_end_is_ended() {
    assert_eq!(contest_status(START, END, END + 1), ContestStatus::Ended);
}

#[test]
fn listed_contests_have_valid_windows() {
    for contest in CONTESTS {
        assert!(contest.start_ms < contest.end_ms, "{}", contest.title);
    }
}

#[test]
fn listed_contest_statuses_at_fixed_instant() {
    // 2024-01-01T00:00:00Z
    let now = 1_704_067_200_000;
    let statuses: Vec<ContestStatus> = CONTESTS.iter().map(|c| c.status_at(now)).collect();
    assert_eq!(statuses, vec![ContestStatus::Ended, ContestStatus::Ended, ContestStatus::Upcoming]);
}

#[test]
fn status_labels_are_translated() {
    assert_eq!(ContestStatus::Ongoing.label(table(Language::En)), "Ongoing");
    assert_eq!(ContestStatus::Ongoing.label(table(Language::Zh)), "进行中");
    assert_eq!(ContestStatus::Ended.css_class(), "ended");
}
