use super::*;
use crate::util::storage::MemoryStorage;

const SIGNIN_BODY: &str = r#"{"success":true,"data":{"name":"Alice Liddell","token":"abc"}}"#;

// =============================================================
// Session parsing
// =============================================================

#[test]
fn parse_keeps_raw_text_and_exposes_name() {
    let session = Session::parse(SIGNIN_BODY).unwrap();
    assert_eq!(session.raw(), SIGNIN_BODY);
    assert_eq!(session.name(), "Alice Liddell");
    assert!(session.raw().contains(r#""token":"abc""#));
}

#[test]
fn parse_rejects_non_json() {
    assert!(matches!(Session::parse("not json"), Err(SessionError::Json(_))));
}

#[test]
fn parse_rejects_missing_or_non_string_name() {
    assert!(matches!(Session::parse(r#"{"data":{}}"#), Err(SessionError::MissingName)));
    assert!(matches!(Session::parse(r#"{"data":{"name":42}}"#), Err(SessionError::MissingName)));
    assert!(matches!(Session::parse(r#"{"name":"x"}"#), Err(SessionError::MissingName)));
}

// =============================================================
// Storage helpers
// =============================================================

#[test]
fn save_then_load_round_trips_verbatim() {
    let store = MemoryStorage::new();
    let session = Session::parse(SIGNIN_BODY).unwrap();
    save_session(&store, &session).unwrap();

    assert_eq!(store.get(SESSION_KEY).as_deref(), Some(SIGNIN_BODY));
    assert_eq!(load_session(&store), Some(session));
}

#[test]
fn load_returns_none_when_absent() {
    let store = MemoryStorage::new();
    assert_eq!(load_session(&store), None);
}

#[test]
fn load_returns_none_for_corrupt_entry() {
    let store = MemoryStorage::new();
    store.set(SESSION_KEY, "{broken").unwrap();
    assert_eq!(load_session(&store), None);
}

#[test]
fn clear_removes_only_session_key() {
    let store = MemoryStorage::new();
    store.set(SESSION_KEY, SIGNIN_BODY).unwrap();
    store.set("theme", "dark").unwrap();

    clear_session(&store);

    assert_eq!(store.get(SESSION_KEY), None);
    assert_eq!(store.get("theme").as_deref(), Some("dark"));
}
