//! Wire types for the remote account API.
//!
//! Field names follow the backend payload, which mixes snake_case and
//! camelCase; the serde renames keep the wire contract intact.

use serde::{Deserialize, Serialize};

/// One user account as supplied by the backend.
///
/// Name fragments are optional on the wire; a missing fragment renders as a
/// blank piece rather than failing deserialization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    pub id: i64,
    pub username: String,
    #[serde(default)]
    pub id_code: String,
    #[serde(default, rename = "firstName")]
    pub first_name: Option<String>,
    #[serde(default, rename = "lastName")]
    pub last_name: Option<String>,
    #[serde(default, rename = "birthDate")]
    pub birth_date: String,
    /// Display name of the role ("Admin", "Staff").
    #[serde(default, rename = "roleName")]
    pub role_name: String,
    /// Role key ("admin", "staff").
    #[serde(default)]
    pub role: String,
    #[serde(default)]
    pub active: bool,
}

/// The logged-in administrator, as returned by `GET /api/me`.
///
/// Read-only here; it supplies the actor identity recorded with a
/// password reset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurrentUser {
    pub id: i64,
    pub username: String,
}

/// Response payload of `GET /api/accounts`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListAccountsResponse {
    pub accounts: Vec<Account>,
}

/// Role id sent for "Admin".
pub const ROLE_ADMIN: &str = "1";
/// Role id sent for "Staff".
pub const ROLE_STAFF: &str = "2";

/// One selectable role in the role dropdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoleOption {
    pub key: &'static str,
    pub text: &'static str,
    pub value: &'static str,
}

const ROLE_OPTIONS: [RoleOption; 2] = [
    RoleOption {
        key: "admin",
        text: "Admin",
        value: ROLE_ADMIN,
    },
    RoleOption {
        key: "staff",
        text: "Staff",
        value: ROLE_STAFF,
    },
];

/// The closed set of assignable roles.
pub fn role_options() -> &'static [RoleOption] {
    &ROLE_OPTIONS
}

/// Looks a role up by key or display text, case-insensitively.
pub fn role_option_for(role: &str) -> Option<&'static RoleOption> {
    ROLE_OPTIONS
        .iter()
        .find(|option| option.key.eq_ignore_ascii_case(role) || option.text.eq_ignore_ascii_case(role))
}
