//! Request bodies for the auth API.
//!
//! DESIGN
//! ======
//! Field names match the server's JSON contract exactly; the signup body
//! calls the full name `name` even though the form labels it "Fullname".

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// Body of `POST /api/v1/signin`.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SigninRequest {
    pub username: String,
    pub password: String,
}

/// Body of `POST /api/v1/signup`.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignupRequest {
    pub username: String,
    /// Display name shown on the welcome screen after signin.
    pub name: String,
    pub password: String,
}

// Hand-written so passwords never end up in console logs.
impl std::fmt::Debug for SigninRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SigninRequest")
            .field("username", &self.username)
            .field("password", &"***")
            .finish()
    }
}

impl std::fmt::Debug for SignupRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SignupRequest")
            .field("username", &self.username)
            .field("name", &self.name)
            .field("password", &"***")
            .finish()
    }
}
