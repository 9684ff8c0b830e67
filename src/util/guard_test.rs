use super::*;

fn signed_in(role: Option<Role>) -> Session {
    Session {
        token: Some("t0k3n".to_owned()),
        role,
        ..Session::default()
    }
}

// =============================================================
// home_path
// =============================================================

#[test]
fn home_path_is_total_over_roles() {
    assert_eq!(home_path(Role::Admin), "/admin/dashboard");
    assert_eq!(home_path(Role::Officer), "/officer/dashboard");
    assert_eq!(home_path(Role::Student), "/student/dashboard");
}

#[test]
fn home_route_does_not_redirect_its_own_role() {
    // Visiting home(r) while authenticated as r renders; no redirect loop.
    let cases = [
        (Role::Admin, &[Role::Admin][..]),
        (Role::Officer, &[Role::Officer][..]),
        (Role::Student, &[Role::Student, Role::Officer][..]),
    ];
    for (role, allowed) in cases {
        let session = signed_in(Some(role));
        assert_eq!(guard_protected(&session, allowed), GuardDecision::Render);
    }
}

// =============================================================
// guard_protected
// =============================================================

#[test]
fn no_token_redirects_to_login() {
    let session = Session::default();
    assert_eq!(
        guard_protected(&session, &[Role::Admin]),
        GuardDecision::Redirect("/login")
    );
}

#[test]
fn unauthenticated_admin_dashboard_visit_lands_on_login() {
    // allowedRoles for /admin/dashboard
    let decision = guard_protected(&Session::default(), &[Role::Admin]);
    assert_eq!(decision, GuardDecision::Redirect(LOGIN_PATH));
}

#[test]
fn wrong_role_redirects_to_own_home_not_login() {
    let session = signed_in(Some(Role::Student));
    let decision = guard_protected(&session, &[Role::Admin]);
    assert_eq!(decision, GuardDecision::Redirect("/student/dashboard"));
}

#[test]
fn authorized_role_renders() {
    let session = signed_in(Some(Role::Admin));
    assert_eq!(guard_protected(&session, &[Role::Admin]), GuardDecision::Render);
}

#[test]
fn empty_allowed_set_renders_any_signed_in_role() {
    for role in [Role::Admin, Role::Officer, Role::Student] {
        let session = signed_in(Some(role));
        assert_eq!(guard_protected(&session, &[]), GuardDecision::Render);
    }
}

#[test]
fn officer_is_permitted_on_student_routes() {
    // The student subtree explicitly allows officers; no redirect.
    let session = signed_in(Some(Role::Officer));
    let decision = guard_protected(&session, &[Role::Student, Role::Officer]);
    assert_eq!(decision, GuardDecision::Render);
}

#[test]
fn officer_is_bounced_from_admin_routes_to_officer_home() {
    let session = signed_in(Some(Role::Officer));
    let decision = guard_protected(&session, &[Role::Admin]);
    assert_eq!(decision, GuardDecision::Redirect("/officer/dashboard"));
}

#[test]
fn token_without_readable_role_counts_as_member() {
    let session = signed_in(None);
    assert_eq!(
        guard_protected(&session, &[Role::Student, Role::Officer]),
        GuardDecision::Render
    );
    assert_eq!(
        guard_protected(&session, &[Role::Admin]),
        GuardDecision::Redirect("/student/dashboard")
    );
}

// =============================================================
// guard_public
// =============================================================

#[test]
fn public_route_renders_when_signed_out() {
    assert_eq!(guard_public(&Session::default()), GuardDecision::Render);
}

#[test]
fn public_route_redirects_signed_in_users_home() {
    for (role, home) in [
        (Role::Admin, "/admin/dashboard"),
        (Role::Officer, "/officer/dashboard"),
        (Role::Student, "/student/dashboard"),
    ] {
        let session = signed_in(Some(role));
        assert_eq!(guard_public(&session), GuardDecision::Redirect(home));
    }
}

#[test]
fn public_route_redirects_roleless_token_to_student_home() {
    let session = signed_in(None);
    assert_eq!(guard_public(&session), GuardDecision::Redirect("/student/dashboard"));
}
