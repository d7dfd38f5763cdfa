use super::*;

// =============================================================
// UiState defaults
// =============================================================

#[test]
fn ui_state_default_is_english_with_menu_closed() {
    let state = UiState::default();
    assert_eq!(state.language, Language::En);
    assert!(!state.avatar_menu_open);
    assert!(!state.registration_notice);
}

#[test]
fn ui_state_t_follows_language() {
    assert_eq!(UiState::with_language(Language::Zh).t().nav.contests, "比赛");
    assert_eq!(UiState::default().t().nav.contests, "Contests");
}

// =============================================================
// Language switching
// =============================================================

#[test]
fn set_language_tag_accepts_supported_tags() {
    let mut state = UiState::default();
    state.set_language_tag("zh");
    assert_eq!(state.language, Language::Zh);
    state.set_language_tag("en-US");
    assert_eq!(state.language, Language::En);
}

#[test]
fn set_language_tag_ignores_unsupported_tags() {
    let mut state = UiState::with_language(Language::Zh);
    state.set_language_tag("klingon");
    assert_eq!(state.language, Language::Zh);
}

// =============================================================
// Registration notice
// =============================================================

#[test]
fn registration_notice_is_consumed_once() {
    let mut state = UiState { registration_notice: true, ..UiState::default() };
    assert!(state.take_registration_notice());
    assert!(!state.take_registration_notice());
}
