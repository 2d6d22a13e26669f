use super::*;

#[test]
fn signup_request_serializes_full_name_as_name() {
    let body = SignupRequest {
        username: "alice01".to_owned(),
        name: "Alice Liddell".to_owned(),
        password: "rabbit-hole".to_owned(),
    };
    let json = serde_json::to_value(&body).unwrap();
    assert_eq!(
        json,
        serde_json::json!({
            "username": "alice01",
            "name": "Alice Liddell",
            "password": "rabbit-hole",
        })
    );
}

#[test]
fn signin_request_serializes_only_credentials() {
    let body = SigninRequest {
        username: "alice01".to_owned(),
        password: "rabbit-hole".to_owned(),
    };
    let json = serde_json::to_value(&body).unwrap();
    assert_eq!(json.as_object().map(serde_json::Map::len), Some(2));
    assert_eq!(json["username"], "alice01");
    assert_eq!(json["password"], "rabbit-hole");
}

#[test]
fn debug_output_masks_passwords() {
    let signin = SigninRequest {
        username: "alice01".to_owned(),
        password: "rabbit-hole".to_owned(),
    };
    let signup = SignupRequest {
        username: "alice01".to_owned(),
        name: "Alice".to_owned(),
        password: "rabbit-hole".to_owned(),
    };
    assert!(!format!("{signin:?}").contains("rabbit-hole"));
    assert!(!format!("{signup:?}").contains("rabbit-hole"));
    assert!(format!("{signup:?}").contains("alice01"));
}
