use super::*;
use crate::util::i18n::{Language, table};

#[test]
fn login_trims_username_but_not_password() {
    assert_eq!(
        validate_login_input("  alice ", " secret "),
        Ok(("alice".to_owned(), " secret ".to_owned()))
    );
}

#[test]
fn login_requires_both_fields() {
    assert_eq!(validate_login_input("   ", "pw"), Err(FormError::MissingFields));
    assert_eq!(validate_login_input("alice", ""), Err(FormError::MissingFields));
}

#[test]
fn register_accepts_valid_input() {
    let reg = validate_register_input(" bob ", " bob@example.com ", "pw", "pw").unwrap();
    assert_eq!(reg.username, "bob");
    assert_eq!(reg.email, "bob@example.com");
    assert_eq!(reg.password, "pw");
}

#[test]
fn register_missing_field_wins_over_other_errors() {
    assert_eq!(validate_register_input("bob", "", "a", "b"), Err(FormError::MissingFields));
    assert_eq!(validate_register_input("bob", "bob@example.com", "pw", ""), Err(FormError::MissingFields));
}

#[test]
fn register_rejects_mismatched_passwords() {
    assert_eq!(
        validate_register_input("bob", "bob@example.com", "pw1", "pw2"),
        Err(FormError::PasswordMismatch)
    );
}

#[test]
fn register_rejects_malformed_email() {
    for email in ["bob", "bob@", "@example.com", "bob@example", "bob@@example.com", "bo b@example.com", "bob@.com"] {
        assert_eq!(
            validate_register_input("bob", email, "pw", "pw"),
            Err(FormError::InvalidEmail),
            "{email}"
        );
    }
}

#[test]
fn register_accepts_subdomains() {
    assert!(validate_register_input("bob", "bob@mail.example.co.uk", "pw", "pw").is_ok());
}

#[test]
fn messages_are_translated() {
    let en = table(Language::En);
    let zh = table(Language::Zh);
    assert_eq!(FormError::PasswordMismatch.message(en), "The passwords do not match.");
    assert_eq!(FormError::PasswordMismatch.message(zh), "两次输入的密码不匹配");
    assert_ne!(FormError::MissingFields.message(en), FormError::InvalidEmail.message(en));
}
