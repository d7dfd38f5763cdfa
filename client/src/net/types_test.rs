use super::*;

fn alice() -> SessionUser {
    SessionUser {
        username: "alice".to_owned(),
        access_token: "t1".to_owned(),
        refresh_token: "r1".to_owned(),
    }
}

// =============================================================
// SessionUser
// =============================================================

#[test]
fn session_user_serializes_with_camel_case_keys() {
    let json = serde_json::to_value(alice()).unwrap();
    assert_eq!(
        json,
        serde_json::json!({ "username": "alice", "accessToken": "t1", "refreshToken": "r1" })
    );
}

#[test]
fn session_user_parses_stored_record() {
    let raw = r#"{"username":"alice","accessToken":"t1","refreshToken":"r1"}"#;
    let user: SessionUser = serde_json::from_str(raw).unwrap();
    assert_eq!(user, alice());
}

#[test]
fn session_user_rejects_missing_token() {
    let raw = r#"{"username":"alice","accessToken":"t1"}"#;
    assert!(serde_json::from_str::<SessionUser>(raw).is_err());
}

#[test]
fn session_user_rejects_legacy_token_key() {
    let raw = r#"{"username":"alice","token":"t1","refreshToken":"r1"}"#;
    assert!(serde_json::from_str::<SessionUser>(raw).is_err());
}

#[test]
fn session_user_from_tokens_copies_both_tokens() {
    let tokens = TokenPair { access: "a".to_owned(), refresh: "r".to_owned() };
    let user = SessionUser::from_tokens("bob", tokens);
    assert_eq!(user.username, "bob");
    assert_eq!(user.access_token, "a");
    assert_eq!(user.refresh_token, "r");
}

#[test]
fn session_user_initial_is_uppercased_first_char() {
    assert_eq!(alice().initial(), "A");
    let empty = SessionUser { username: String::new(), ..alice() };
    assert_eq!(empty.initial(), "");
}

// =============================================================
// ApiErrorBody
// =============================================================

#[test]
fn api_error_body_prefers_error_field() {
    let body: ApiErrorBody = serde_json::from_str(r#"{"error":"taken","message":"other"}"#).unwrap();
    assert_eq!(body.into_message().as_deref(), Some("taken"));
}

#[test]
fn api_error_body_blank_message_is_none() {
    let body: ApiErrorBody = serde_json::from_str(r#"{"message":"  "}"#).unwrap();
    assert_eq!(body.into_message(), None);
}

// =============================================================
// RunResponse -> RunOutcome
// =============================================================

#[test]
fn run_response_with_message_is_failure() {
    let resp: RunResponse = serde_json::from_str(r#"{"message":"SyntaxError"}"#).unwrap();
    assert_eq!(RunOutcome::from(resp), RunOutcome::Failed("SyntaxError".to_owned()));
}

#[test]
fn run_response_with_output_is_output() {
    let resp: RunResponse = serde_json::from_str(r#"{"output":"5\n"}"#).unwrap();
    assert_eq!(RunOutcome::from(resp), RunOutcome::Output("5\n".to_owned()));
}

#[test]
fn run_response_empty_is_empty_output() {
    let resp: RunResponse = serde_json::from_str("{}").unwrap();
    assert_eq!(RunOutcome::from(resp), RunOutcome::Output(String::new()));
}
