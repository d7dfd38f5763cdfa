use super::*;
use crate::util::i18n::{Language, table};

fn row(accepted: u32, submissions: u32) -> ProblemRow {
    ProblemRow { id: 1, title: "x", difficulty: Difficulty::Easy, accepted, submissions }
}

#[test]
fn acceptance_rounds_to_one_decimal() {
    assert_eq!(row(1088, 1500).acceptance(), "72.5%");
    assert_eq!(row(700, 1200).acceptance(), "58.3%");
    assert_eq!(row(1, 3).acceptance(), "33.3%");
    assert_eq!(row(2, 3).acceptance(), "66.7%");
}

#[test]
fn acceptance_edges() {
    assert_eq!(row(0, 0).acceptance(), "-");
    assert_eq!(row(0, 10).acceptance(), "0.0%");
    assert_eq!(row(10, 10).acceptance(), "100.0%");
}

#[test]
fn recent_problems_are_newest_first() {
    let recent = recent_problems(3);
    let ids: Vec<u32> = recent.iter().map(|p| p.id).collect();
    assert_eq!(ids, vec![105, 104, 103]);
}

#[test]
fn recent_problems_caps_at_available() {
    assert_eq!(recent_problems(100).len(), all_problems().len());
    assert!(recent_problems(0).is_empty());
}

#[test]
fn problem_ids_are_unique_and_sorted() {
    let ids: Vec<u32> = all_problems().iter().map(|p| p.id).collect();
    let mut sorted = ids.clone();
    sorted.sort_unstable();
    sorted.dedup();
    assert_eq!(ids, sorted);
}

#[test]
fn difficulty_labels_follow_language() {
    assert_eq!(Difficulty::Hard.label(table(Language::En)), "Hard");
    assert_eq!(Difficulty::Hard.label(table(Language::Zh)), "困难");
}
