//! Wire DTOs for the client/server REST boundary.
//!
//! DESIGN
//! ======
//! These types mirror the server's JSON payloads so serde round-trips stay
//! lossless. Fields the server omits for some account kinds carry
//! `#[serde(default)]` so older records still deserialize.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// A department offering courses, as returned by `/api/departments`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Department {
    pub id: String,
    pub name: String,
    /// Short department code (e.g. `"CCS"`); keys the static course table.
    pub code: String,
}

/// A student organization, as returned by `/api/organizations`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Organization {
    pub id: String,
    pub name: String,
}

/// One organization assignment on the wire.
///
/// `org_role` is present only for officer accounts; students are implicit
/// members and the field is absent entirely.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrgMembershipWire {
    pub organization_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub org_role: Option<String>,
    #[serde(default)]
    pub position: String,
}

/// Organization-membership record attached to the login payload for officers.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MembershipRecord {
    #[serde(default)]
    pub id: String,
    pub organization_id: String,
    #[serde(default)]
    pub org_role: Option<String>,
    #[serde(default)]
    pub position: Option<String>,
}

/// A user account as listed by `/api/users`.
///
/// Profile fields only carry values for officer/student accounts; admins
/// deserialize with empty defaults.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRecord {
    pub id: String,
    pub email: String,
    /// Account-form role encoding: `"1"` admin, `"2"` officer, `"3"` student.
    pub user_type_id: String,
    /// `"1"` active, `"0"` inactive.
    #[serde(default)]
    pub is_active: String,
    #[serde(default)]
    pub student_number: String,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub middle_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub department_id: String,
    #[serde(default)]
    pub year_level: String,
    #[serde(default)]
    pub contact_number: String,
    #[serde(default)]
    pub course: String,
    #[serde(default)]
    pub org_memberships: Vec<OrgMembershipWire>,
}

/// Body for `POST /api/login`.
#[derive(Clone, Debug, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Successful response from `POST /api/login`.
#[derive(Clone, Debug, Deserialize)]
pub struct LoginResponse {
    pub token: String,
    pub user: UserRecord,
    pub role: String,
    #[serde(default)]
    pub membership: Option<MembershipRecord>,
    #[serde(default)]
    pub organization_id: String,
}

/// Flattened account form sent to `POST /api/users` / `PUT /api/users/{id}`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SaveUserRequest {
    pub email: String,
    /// Omitted when editing with a blank password ("keep existing").
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    pub user_type_id: String,
    pub is_active: String,
    pub student_number: String,
    pub first_name: String,
    pub middle_name: String,
    pub last_name: String,
    pub department_id: String,
    pub year_level: String,
    pub contact_number: String,
    pub course: String,
    pub org_memberships: Vec<OrgMembershipWire>,
}

/// Error body for failed create/update calls.
///
/// `errors` is the 422-style per-field map; each entry is a list of messages.
/// `BTreeMap` keeps flattening order deterministic.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct SaveErrorBody {
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub errors: Option<BTreeMap<String, Vec<String>>>,
}
