//! Persisted signin session.
//!
//! SYSTEM CONTEXT
//! ==============
//! The signin response is stored verbatim under `SESSION_KEY` and trusted on
//! later reads without expiry or signature checks. The only structural
//! requirement is a string at `data.name`, which the welcome screen greets.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use serde_json::Value;

use crate::util::storage::{KeyValueStore, StorageError};

/// Storage key holding the serialized signin response.
pub const SESSION_KEY: &str = "user";

#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error("session is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("session has no `data.name` field")]
    MissingName,
}

/// A signin response body, kept as the raw text plus its parsed form.
#[derive(Clone, Debug, PartialEq)]
pub struct Session {
    raw: String,
    value: Value,
}

impl Session {
    /// Parse a signin response body.
    ///
    /// # Errors
    ///
    /// Returns `SessionError` when the body is not JSON or lacks `data.name`.
    pub fn parse(raw: &str) -> Result<Self, SessionError> {
        let value: Value = serde_json::from_str(raw)?;
        if value.pointer("/data/name").and_then(Value::as_str).is_none() {
            return Err(SessionError::MissingName);
        }
        Ok(Self {
            raw: raw.to_owned(),
            value,
        })
    }

    /// The `data.name` field of the response.
    pub fn name(&self) -> &str {
        self.value
            .pointer("/data/name")
            .and_then(Value::as_str)
            .unwrap_or_default()
    }

    /// The response exactly as the server sent it.
    pub fn raw(&self) -> &str {
        &self.raw
    }
}

/// Read the stored session. Missing or unusable entries read as `None`.
pub fn load_session<S: KeyValueStore>(store: &S) -> Option<Session> {
    let raw = store.get(SESSION_KEY)?;
    match Session::parse(&raw) {
        Ok(session) => Some(session),
        Err(e) => {
            log::warn!("ignoring stored session: {e}");
            None
        }
    }
}

/// Persist `session` verbatim.
///
/// # Errors
///
/// Propagates the store's `StorageError`.
pub fn save_session<S: KeyValueStore>(store: &S, session: &Session) -> Result<(), StorageError> {
    store.set(SESSION_KEY, session.raw())
}

pub fn clear_session<S: KeyValueStore>(store: &S) {
    store.remove(SESSION_KEY);
}
