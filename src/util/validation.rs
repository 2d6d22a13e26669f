//! Registration form validation.
//!
//! Every field is checked on each submit and reports the first rule it
//! fails, so the form can show one message per field at once. Input is
//! taken as typed: nothing is trimmed, and lengths count UTF-16 code units
//! the way a browser's `String.length` does.

#[cfg(test)]
#[path = "validation_test.rs"]
mod validation_test;

use crate::net::types::SignupRequest;

const MIN_USERNAME_LEN: usize = 6;
const MIN_PASSWORD_LEN: usize = 6;

pub const FULLNAME_EMPTY: &str = "Fullname cannot be empty";
pub const USERNAME_EMPTY: &str = "Username cannot be empty";
pub const USERNAME_TOO_SHORT: &str = "The minimum length of username is 6 characters";
pub const PASSWORD_EMPTY: &str = "Password cannot be empty";
pub const PASSWORD_TOO_SHORT: &str = "The minimum length of password is 6 characters";
pub const PASSWORD_MISMATCH: &str = "Password does not match";

/// Raw registration form values.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RegistrationInput {
    pub fullname: String,
    pub username: String,
    pub password: String,
    pub confirm_password: String,
}

/// One optional message per registration field.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FieldErrors {
    pub fullname: Option<&'static str>,
    pub username: Option<&'static str>,
    pub password: Option<&'static str>,
    pub confirm_password: Option<&'static str>,
}

impl FieldErrors {
    pub fn is_empty(&self) -> bool {
        self.fullname.is_none()
            && self.username.is_none()
            && self.password.is_none()
            && self.confirm_password.is_none()
    }
}

fn check_required(value: &str, empty: &'static str) -> Option<&'static str> {
    value.is_empty().then_some(empty)
}

fn check_min_len(
    value: &str,
    min: usize,
    empty: &'static str,
    too_short: &'static str,
) -> Option<&'static str> {
    check_required(value, empty)
        .or_else(|| (value.encode_utf16().count() < min).then_some(too_short))
}

/// Validate the form and map it to the signup request body.
///
/// # Errors
///
/// Returns the per-field messages when any rule fails.
pub fn validate_registration(input: &RegistrationInput) -> Result<SignupRequest, FieldErrors> {
    let errors = FieldErrors {
        fullname: check_required(&input.fullname, FULLNAME_EMPTY),
        username: check_min_len(
            &input.username,
            MIN_USERNAME_LEN,
            USERNAME_EMPTY,
            USERNAME_TOO_SHORT,
        ),
        password: check_min_len(
            &input.password,
            MIN_PASSWORD_LEN,
            PASSWORD_EMPTY,
            PASSWORD_TOO_SHORT,
        ),
        confirm_password: (input.confirm_password != input.password).then_some(PASSWORD_MISMATCH),
    };

    if !errors.is_empty() {
        return Err(errors);
    }
    Ok(SignupRequest {
        username: input.username.clone(),
        name: input.fullname.clone(),
        password: input.password.clone(),
    })
}
