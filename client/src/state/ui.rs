#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

use crate::util::i18n::{self, Language, Translations};

/// Shared presentation state: active language and transient notices.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct UiState {
    pub language: Language,
    pub avatar_menu_open: bool,
    /// Set by the register page, consumed by the login page.
    pub registration_notice: bool,
}

impl UiState {
    #[must_use]
    pub fn with_language(language: Language) -> Self {
        Self { language, ..Self::default() }
    }

    #[must_use]
    pub fn t(&self) -> &'static Translations {
        i18n::table(self.language)
    }

    /// Switch language by tag; unsupported tags leave the language unchanged.
    pub fn set_language_tag(&mut self, tag: &str) {
        if let Some(language) = Language::from_tag(tag) {
            self.language = language;
        }
    }

    /// Read and clear the post-registration notice.
    pub fn take_registration_notice(&mut self) -> bool {
        std::mem::take(&mut self.registration_notice)
    }
}
