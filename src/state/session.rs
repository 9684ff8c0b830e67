//! Session state for the signed-in user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Route guards and shells read the session to decide what to render; the
//! login page writes it once on success and logout clears it. The browser
//! store persists the session across reloads under fixed localStorage keys.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use crate::net::types::{LoginResponse, MembershipRecord, UserRecord};
use crate::util::storage;

/// Account role, unified across the two wire encodings.
///
/// The server speaks two dialects: role names (`"admin"`, `"officer"`,
/// `"student"`, `"member"`) in the login payload and user-type ids (`"1"`,
/// `"2"`, `"3"`) on the account form. Both map onto this one enum.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Role {
    Admin,
    Officer,
    /// Ordinary member. The server uses `"student"` and `"member"`
    /// interchangeably; both parse to this variant.
    Student,
}

impl Role {
    /// Parse a role name from the session/login payload.
    ///
    /// Any non-empty name that is not `admin` or `officer` is treated as a
    /// member, matching the redirect rule that everything else lands on the
    /// student home.
    pub fn from_role_name(name: &str) -> Option<Self> {
        match name {
            "" => None,
            "admin" => Some(Self::Admin),
            "officer" => Some(Self::Officer),
            _ => Some(Self::Student),
        }
    }

    /// Canonical role name for persistence.
    pub fn as_role_name(self) -> &'static str {
        match self {
            Self::Admin => "admin",
            Self::Officer => "officer",
            Self::Student => "student",
        }
    }

    /// Parse the account-form user-type id.
    pub fn from_user_type_id(id: &str) -> Option<Self> {
        match id {
            "1" => Some(Self::Admin),
            "2" => Some(Self::Officer),
            "3" => Some(Self::Student),
            _ => None,
        }
    }

    /// User-type id for the account-form wire encoding.
    pub fn as_user_type_id(self) -> &'static str {
        match self {
            Self::Admin => "1",
            Self::Officer => "2",
            Self::Student => "3",
        }
    }
}

/// The current browser session.
///
/// A session is authenticated exactly when `token` is present; `role` is only
/// meaningful alongside a token.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Session {
    /// Opaque bearer credential from the login response.
    pub token: Option<String>,
    /// Role parsed from the persisted role name.
    pub role: Option<Role>,
    /// The signed-in user record, kept for display purposes.
    pub user: Option<UserRecord>,
    /// Organization-membership record for officers.
    pub membership: Option<MembershipRecord>,
    /// Organization the user administers, empty when none.
    pub organization_id: String,
}

impl Session {
    /// Whether this session counts as signed in.
    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }

    /// Build a session from a successful login response.
    pub fn from_login(resp: LoginResponse) -> Self {
        Self {
            token: Some(resp.token),
            role: Role::from_role_name(&resp.role),
            user: Some(resp.user),
            membership: resp.membership,
            organization_id: resp.organization_id,
        }
    }
}

const KEY_TOKEN: &str = "token";
const KEY_USER: &str = "user";
const KEY_ROLE: &str = "user_role";
const KEY_MEMBERSHIP: &str = "membership";
const KEY_ORGANIZATION: &str = "organization_id";

/// Persistence interface for the session, injected where writes happen so the
/// guard stays a pure function of an explicit `Session` value.
pub trait SessionStore {
    fn load(&self) -> Session;
    fn save(&self, session: &Session);
    fn clear(&self);
}

/// localStorage-backed session store. Reads return an empty (signed-out)
/// session on the server.
pub struct BrowserSessionStore;

impl SessionStore for BrowserSessionStore {
    fn load(&self) -> Session {
        Session {
            token: storage::load_string(KEY_TOKEN),
            role: storage::load_string(KEY_ROLE)
                .as_deref()
                .and_then(Role::from_role_name),
            user: storage::load_json(KEY_USER),
            membership: storage::load_json(KEY_MEMBERSHIP),
            organization_id: storage::load_string(KEY_ORGANIZATION).unwrap_or_default(),
        }
    }

    fn save(&self, session: &Session) {
        match &session.token {
            Some(token) => storage::save_string(KEY_TOKEN, token),
            None => storage::remove(KEY_TOKEN),
        }
        match session.role {
            Some(role) => storage::save_string(KEY_ROLE, role.as_role_name()),
            None => storage::remove(KEY_ROLE),
        }
        match &session.user {
            Some(user) => storage::save_json(KEY_USER, user),
            None => storage::remove(KEY_USER),
        }
        match &session.membership {
            Some(membership) => storage::save_json(KEY_MEMBERSHIP, membership),
            None => storage::remove(KEY_MEMBERSHIP),
        }
        storage::save_string(KEY_ORGANIZATION, &session.organization_id);
    }

    fn clear(&self) {
        for key in [KEY_TOKEN, KEY_USER, KEY_ROLE, KEY_MEMBERSHIP, KEY_ORGANIZATION] {
            storage::remove(key);
        }
    }
}
