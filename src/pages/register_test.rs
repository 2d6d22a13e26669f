use std::cell::Cell;

use futures::executor::block_on;

use super::*;
use crate::util::validation::{PASSWORD_MISMATCH, USERNAME_TOO_SHORT};

fn valid_input() -> RegistrationInput {
    RegistrationInput {
        fullname: "Alice Liddell".to_owned(),
        username: "alice01".to_owned(),
        password: "rabbit-hole".to_owned(),
        confirm_password: "rabbit-hole".to_owned(),
    }
}

#[test]
fn password_mismatch_blocks_network_call() {
    let called = Cell::new(false);
    let input = RegistrationInput {
        confirm_password: "something-else".to_owned(),
        ..valid_input()
    };

    let outcome = block_on(submit_registration(&input, |_| {
        called.set(true);
        async { Ok(()) }
    }));

    assert!(!called.get());
    match outcome {
        RegisterOutcome::Invalid(errors) => {
            assert_eq!(errors.confirm_password, Some(PASSWORD_MISMATCH));
        }
        other => panic!("expected Invalid, got {other:?}"),
    }
}

#[test]
fn short_username_blocks_network_call() {
    let called = Cell::new(false);
    let input = RegistrationInput {
        username: "bob".to_owned(),
        ..valid_input()
    };

    let outcome = block_on(submit_registration(&input, |_| {
        called.set(true);
        async { Ok(()) }
    }));

    assert!(!called.get());
    assert!(matches!(
        outcome,
        RegisterOutcome::Invalid(FieldErrors {
            username: Some(USERNAME_TOO_SHORT),
            ..
        })
    ));
}

#[test]
fn valid_form_sends_signup_body() {
    let outcome = block_on(submit_registration(&valid_input(), |body| {
        assert_eq!(
            body,
            SignupRequest {
                username: "alice01".to_owned(),
                name: "Alice Liddell".to_owned(),
                password: "rabbit-hole".to_owned(),
            }
        );
        async { Ok(()) }
    }));

    assert_eq!(outcome, RegisterOutcome::Registered);
}

#[test]
fn server_rejection_shows_server_text() {
    let outcome = block_on(submit_registration(&valid_input(), |_| async {
        Err(ApiError::Rejected {
            status: 400,
            message: "Username already exists".to_owned(),
        })
    }));

    assert_eq!(outcome, RegisterOutcome::Failed("Username already exists".to_owned()));
}

#[test]
fn network_failure_shows_transport_error() {
    let outcome = block_on(submit_registration(&valid_input(), |_| async {
        Err(ApiError::Network("connection refused".to_owned()))
    }));

    assert_eq!(
        outcome,
        RegisterOutcome::Failed("network error: connection refused".to_owned())
    );
}

#[test]
fn no_field_errors_before_first_submit() {
    let errors = live_field_errors(false, &RegistrationInput::default());
    assert!(errors.is_empty());
}

#[test]
fn field_errors_follow_edits_after_first_submit() {
    let mut input = RegistrationInput {
        username: "bob".to_owned(),
        ..valid_input()
    };
    let errors = live_field_errors(true, &input);
    assert_eq!(errors.username, Some(USERNAME_TOO_SHORT));

    input.username = "bobby99".to_owned();
    assert!(live_field_errors(true, &input).is_empty());

    input.confirm_password = "typo".to_owned();
    let errors = live_field_errors(true, &input);
    assert_eq!(errors.username, None);
    assert_eq!(errors.confirm_password, Some(PASSWORD_MISMATCH));
}
