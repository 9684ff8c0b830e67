//! Pure route-guard decisions.
//!
//! SYSTEM CONTEXT
//! ==============
//! `Guarded` and `PublicOnly` must apply identical redirect behavior, so the
//! decision logic lives here as pure functions of the session. Absent data
//! (no token, no role) always maps to a redirect, never to an error.

#[cfg(test)]
#[path = "guard_test.rs"]
mod guard_test;

use crate::state::session::{Role, Session};

/// Path of the login screen.
pub const LOGIN_PATH: &str = "/login";

/// Outcome of a guard check for one navigation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuardDecision {
    /// Render the requested content.
    Render,
    /// Navigate to the given path instead of rendering.
    Redirect(&'static str),
}

/// Canonical home dashboard for a role.
///
/// Used for both the wrong-role redirect and the already-signed-in redirect;
/// keeping one total function for both directions is what prevents redirect
/// loops between them.
pub fn home_path(role: Role) -> &'static str {
    match role {
        Role::Admin => "/admin/dashboard",
        Role::Officer => "/officer/dashboard",
        Role::Student => "/student/dashboard",
    }
}

/// Guard a protected route. An empty `allowed` set means any signed-in role.
pub fn guard_protected(session: &Session, allowed: &[Role]) -> GuardDecision {
    if !session.is_authenticated() {
        return GuardDecision::Redirect(LOGIN_PATH);
    }
    // A token with an unreadable role counts as a member, matching the rule
    // that anything not admin/officer belongs on the student home.
    let role = session.role.unwrap_or(Role::Student);
    if allowed.is_empty() || allowed.contains(&role) {
        GuardDecision::Render
    } else {
        GuardDecision::Redirect(home_path(role))
    }
}

/// Guard a public-only route (login, landing): signed-in users are sent to
/// their own home instead.
pub fn guard_public(session: &Session) -> GuardDecision {
    if session.is_authenticated() {
        GuardDecision::Redirect(home_path(session.role.unwrap_or(Role::Student)))
    } else {
        GuardDecision::Render
    }
}
