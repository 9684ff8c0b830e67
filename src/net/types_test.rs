use super::*;

fn save_request() -> SaveUserRequest {
    SaveUserRequest {
        email: "a@b.edu".to_owned(),
        password: Some("12345678".to_owned()),
        user_type_id: "2".to_owned(),
        is_active: "1".to_owned(),
        student_number: "2024-00123".to_owned(),
        first_name: "Ana".to_owned(),
        middle_name: String::new(),
        last_name: "Reyes".to_owned(),
        department_id: "d1".to_owned(),
        year_level: "3".to_owned(),
        contact_number: String::new(),
        course: "BS Computer Science".to_owned(),
        org_memberships: vec![OrgMembershipWire {
            organization_id: "org1".to_owned(),
            org_role: Some("officer".to_owned()),
            position: "President".to_owned(),
        }],
    }
}

// =============================================================
// SaveUserRequest serialization
// =============================================================

#[test]
fn save_request_serializes_membership_fields() {
    let value = serde_json::to_value(save_request()).expect("serialize");
    assert_eq!(
        value["org_memberships"][0],
        serde_json::json!({
            "organization_id": "org1",
            "org_role": "officer",
            "position": "President"
        })
    );
}

#[test]
fn member_rows_omit_org_role_entirely() {
    let mut request = save_request();
    request.org_memberships[0].org_role = None;
    let value = serde_json::to_value(request).expect("serialize");
    assert!(value["org_memberships"][0].get("org_role").is_none());
}

#[test]
fn blank_edit_password_is_omitted() {
    let mut request = save_request();
    request.password = None;
    let value = serde_json::to_value(request).expect("serialize");
    assert!(value.get("password").is_none());
    assert_eq!(value["user_type_id"], serde_json::json!("2"));
}

// =============================================================
// Response deserialization
// =============================================================

#[test]
fn login_response_defaults_optional_fields() {
    let raw = r#"{
        "token": "abc",
        "user": {"id": "u1", "email": "a@b.edu", "user_type_id": "3"},
        "role": "student"
    }"#;
    let resp: LoginResponse = serde_json::from_str(raw).expect("deserialize");
    assert_eq!(resp.token, "abc");
    assert!(resp.membership.is_none());
    assert!(resp.organization_id.is_empty());
}

#[test]
fn user_record_defaults_profile_fields() {
    let raw = r#"{"id": "u1", "email": "root@b.edu", "user_type_id": "1"}"#;
    let user: UserRecord = serde_json::from_str(raw).expect("deserialize");
    assert!(user.student_number.is_empty());
    assert!(user.org_memberships.is_empty());
}

#[test]
fn membership_wire_round_trips() {
    let raw = r#"{"organization_id": "org9", "org_role": "adviser", "position": "Coach"}"#;
    let wire: OrgMembershipWire = serde_json::from_str(raw).expect("deserialize");
    assert_eq!(wire.org_role.as_deref(), Some("adviser"));
    let back = serde_json::to_string(&wire).expect("serialize");
    assert!(back.contains("\"org_role\":\"adviser\""));
}

#[test]
fn save_error_body_deserializes_field_errors() {
    let raw = r#"{
        "message": "The given data was invalid.",
        "errors": {
            "email": ["The email has already been taken."],
            "password": ["The password must be at least 8 characters."]
        }
    }"#;
    let body: SaveErrorBody = serde_json::from_str(raw).expect("deserialize");
    let errors = body.errors.expect("errors map");
    assert_eq!(errors.len(), 2);
    assert_eq!(errors["email"].len(), 1);
}
