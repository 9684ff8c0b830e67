use super::*;
use std::collections::BTreeMap;

#[test]
fn user_endpoint_formats_expected_path() {
    assert_eq!(user_endpoint("u123"), "/api/users/u123");
    assert_eq!(USERS_ENDPOINT, "/api/users");
}

#[test]
fn login_failed_message_formats_status() {
    assert_eq!(login_failed_message(401), "login failed: 401");
}

#[test]
fn save_error_message_flattens_field_error_arrays() {
    let mut errors = BTreeMap::new();
    errors.insert(
        "email".to_owned(),
        vec!["The email has already been taken.".to_owned()],
    );
    errors.insert(
        "password".to_owned(),
        vec![
            "The password must be at least 8 characters.".to_owned(),
            "The password format is invalid.".to_owned(),
        ],
    );
    let body = SaveErrorBody {
        message: "The given data was invalid.".to_owned(),
        errors: Some(errors),
    };
    assert_eq!(
        save_error_message(&body),
        "The email has already been taken. The password must be at least 8 characters. The password format is invalid."
    );
}

#[test]
fn save_error_message_falls_back_to_server_message() {
    let body = SaveErrorBody {
        message: "Server unavailable".to_owned(),
        errors: None,
    };
    assert_eq!(save_error_message(&body), "Server unavailable");

    let empty_map = SaveErrorBody {
        message: "Server unavailable".to_owned(),
        errors: Some(BTreeMap::new()),
    };
    assert_eq!(save_error_message(&empty_map), "Server unavailable");
}

#[test]
fn save_error_message_has_generic_fallback() {
    assert_eq!(save_error_message(&SaveErrorBody::default()), "request failed");
}
