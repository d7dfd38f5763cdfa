use super::*;

// =============================================================
// Language tags
// =============================================================

#[test]
fn primary_subtag_lowercases_and_splits() {
    assert_eq!(primary_subtag("zh-CN"), "zh");
    assert_eq!(primary_subtag("EN_us"), "en");
    assert_eq!(primary_subtag(" fr "), "fr");
    assert_eq!(primary_subtag(""), "");
}

#[test]
fn language_from_tag_resolves_supported_languages() {
    assert_eq!(Language::from_tag("en"), Some(Language::En));
    assert_eq!(Language::from_tag("en-GB"), Some(Language::En));
    assert_eq!(Language::from_tag("zh-TW"), Some(Language::Zh));
    assert_eq!(Language::from_tag("de"), None);
}

#[test]
fn language_tags_round_trip() {
    for lang in Language::ALL {
        assert_eq!(Language::from_tag(lang.tag()), Some(lang));
    }
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn browser_language_defaults_to_english_off_browser() {
    assert_eq!(browser_language(), Language::En);
    assert_eq!(browser_language_tag(), "en");
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn server_render_uses_fixed_language_tag() {
    assert_eq!(browser_language_tag(), SERVER_LANGUAGE_TAG);
    assert_eq!(Language::default().tag(), SERVER_LANGUAGE_TAG);
    assert_eq!(connecting_message(SERVER_LANGUAGE_TAG), "Connecting to server...");
}

// =============================================================
// Table lookup
// =============================================================

#[test]
fn translations_pick_matching_table() {
    assert_eq!(translations("zh").nav.problems, "题目");
    assert_eq!(translations("en").nav.problems, "Problems");
}

#[test]
fn translations_fall_back_to_english() {
    assert_eq!(translations("xx").nav.login, "Login");
    assert_eq!(translations("").welcome.title, "Welcome to Hydro");
}

#[test]
fn footer_substitutes_year() {
    assert_eq!(footer(table(Language::En), 2026), "Hydro OJ © 2026");
    assert_eq!(footer(table(Language::Zh), 2025), "Hydro 在线评测 © 2025");
}

#[test]
fn offline_notice_substitutes_seconds() {
    assert_eq!(
        offline_notice(table(Language::En), 4),
        "Cannot reach the judge server. Retrying in 4s."
    );
}

// =============================================================
// Connecting messages
// =============================================================

#[test]
fn connecting_message_uses_primary_subtag_first() {
    assert_eq!(connecting_message("ja-JP"), "サーバーに接続中...");
    // `zh` wins over the exact `zh-TW` entry.
    assert_eq!(connecting_message("zh-TW"), "正在连接服务器...");
}

#[test]
fn connecting_message_falls_back_for_unknown_tags() {
    assert_eq!(connecting_message("sv-SE"), "Connecting to judge server...");
}
