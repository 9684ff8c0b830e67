use super::*;

// =============================================================
// Role wire mappings
// =============================================================

#[test]
fn role_name_round_trips_for_named_roles() {
    for role in [Role::Admin, Role::Officer, Role::Student] {
        assert_eq!(Role::from_role_name(role.as_role_name()), Some(role));
    }
}

#[test]
fn member_parses_as_student() {
    assert_eq!(Role::from_role_name("member"), Some(Role::Student));
}

#[test]
fn unknown_role_name_parses_as_student() {
    assert_eq!(Role::from_role_name("alumni"), Some(Role::Student));
}

#[test]
fn empty_role_name_parses_as_none() {
    assert_eq!(Role::from_role_name(""), None);
}

#[test]
fn user_type_id_round_trips() {
    assert_eq!(Role::from_user_type_id("1"), Some(Role::Admin));
    assert_eq!(Role::from_user_type_id("2"), Some(Role::Officer));
    assert_eq!(Role::from_user_type_id("3"), Some(Role::Student));
    for role in [Role::Admin, Role::Officer, Role::Student] {
        assert_eq!(Role::from_user_type_id(role.as_user_type_id()), Some(role));
    }
}

#[test]
fn unknown_user_type_id_parses_as_none() {
    assert_eq!(Role::from_user_type_id(""), None);
    assert_eq!(Role::from_user_type_id("4"), None);
}

// =============================================================
// Session
// =============================================================

#[test]
fn default_session_is_not_authenticated() {
    let session = Session::default();
    assert!(!session.is_authenticated());
    assert!(session.role.is_none());
    assert!(session.organization_id.is_empty());
}

#[test]
fn session_with_token_is_authenticated() {
    let session = Session {
        token: Some("t0k3n".to_owned()),
        ..Session::default()
    };
    assert!(session.is_authenticated());
}

#[test]
fn from_login_populates_all_fields() {
    let resp = LoginResponse {
        token: "abc".to_owned(),
        user: UserRecord {
            id: "u1".to_owned(),
            email: "a@b.edu".to_owned(),
            user_type_id: "2".to_owned(),
            ..UserRecord::default()
        },
        role: "officer".to_owned(),
        membership: Some(MembershipRecord {
            id: "m1".to_owned(),
            organization_id: "org1".to_owned(),
            org_role: Some("officer".to_owned()),
            position: Some("President".to_owned()),
        }),
        organization_id: "org1".to_owned(),
    };
    let session = Session::from_login(resp);
    assert!(session.is_authenticated());
    assert_eq!(session.role, Some(Role::Officer));
    assert_eq!(session.user.as_ref().map(|u| u.email.as_str()), Some("a@b.edu"));
    assert_eq!(
        session.membership.as_ref().map(|m| m.organization_id.as_str()),
        Some("org1")
    );
    assert_eq!(session.organization_id, "org1");
}

#[test]
fn from_login_maps_server_student_role() {
    let resp = LoginResponse {
        token: "abc".to_owned(),
        user: UserRecord::default(),
        role: "student".to_owned(),
        membership: None,
        organization_id: String::new(),
    };
    let session = Session::from_login(resp);
    assert_eq!(session.role, Some(Role::Student));
    assert!(session.membership.is_none());
}
