//! Input validation shared by the login and register pages.

#[cfg(test)]
#[path = "auth_form_test.rs"]
mod auth_form_test;

use crate::util::i18n::Translations;

/// Client-side rejection of a login or registration form.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FormError {
    MissingFields,
    PasswordMismatch,
    InvalidEmail,
}

impl FormError {
    #[must_use]
    pub fn message(self, t: &Translations) -> &'static str {
        match self {
            Self::MissingFields => t.auth.missing_fields,
            Self::PasswordMismatch => t.auth.password_mismatch,
            Self::InvalidEmail => t.auth.invalid_email,
        }
    }
}

/// Validated registration fields.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Registration {
    pub username: String,
    pub email: String,
    pub password: String,
}

/// Trim the username and require both fields. Passwords are sent verbatim.
pub fn validate_login_input(username: &str, password: &str) -> Result<(String, String), FormError> {
    let username = username.trim();
    if username.is_empty() || password.is_empty() {
        return Err(FormError::MissingFields);
    }
    Ok((username.to_owned(), password.to_owned()))
}

pub fn validate_register_input(
    username: &str,
    email: &str,
    password: &str,
    confirm: &str,
) -> Result<Registration, FormError> {
    let username = username.trim();
    let email = email.trim();
    if username.is_empty() || email.is_empty() || password.is_empty() || confirm.is_empty() {
        return Err(FormError::MissingFields);
    }
    if !looks_like_email(email) {
        return Err(FormError::InvalidEmail);
    }
    if password != confirm {
        return Err(FormError::PasswordMismatch);
    }
    Ok(Registration { username: username.to_owned(), email: email.to_owned(), password: password.to_owned() })
}

/// `local@domain.tld` with no whitespace; the server does the real check.
fn looks_like_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    !local.is_empty()
        && !domain.contains('@')
        && domain
            .split_once('.')
            .is_some_and(|(host, tld)| !host.is_empty() && !tld.is_empty() && !tld.ends_with('.'))
}
