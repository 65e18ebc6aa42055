use super::Role;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The `min_invite_role` site setting.
///
/// Values are compared as exact strings: only `"admin"` is the admin setting,
/// `"ADMIN"` or `" admin "` are kept verbatim in `Other` and match no role.
/// Decisions go through [`MinInviteRole::as_str`], so `Other("admin")`
/// behaves exactly like `Admin`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum MinInviteRole {
    User,
    Moderator,
    Admin,
    Other(String),
}

impl MinInviteRole {
    pub fn parse(value: &str) -> Self {
        match value {
            "user" => MinInviteRole::User,
            "moderator" => MinInviteRole::Moderator,
            "admin" => MinInviteRole::Admin,
            _ => MinInviteRole::Other(value.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            MinInviteRole::User => "user",
            MinInviteRole::Moderator => "moderator",
            MinInviteRole::Admin => "admin",
            MinInviteRole::Other(value) => value,
        }
    }

    /// The role a principal must hold, or `None` for an unrecognised setting.
    pub fn required_role(&self) -> Option<Role> {
        match self.as_str() {
            "user" => Some(Role::User),
            "moderator" => Some(Role::Moderator),
            "admin" => Some(Role::Admin),
            _ => None,
        }
    }

    pub fn is_admin(&self) -> bool {
        self.as_str() == "admin"
    }
}

impl Default for MinInviteRole {
    fn default() -> Self {
        MinInviteRole::Admin
    }
}

impl From<Role> for MinInviteRole {
    fn from(role: Role) -> Self {
        match role {
            Role::User => MinInviteRole::User,
            Role::Moderator => MinInviteRole::Moderator,
            Role::Admin => MinInviteRole::Admin,
        }
    }
}

impl From<String> for MinInviteRole {
    fn from(value: String) -> Self {
        MinInviteRole::parse(&value)
    }
}

impl From<&str> for MinInviteRole {
    fn from(value: &str) -> Self {
        MinInviteRole::parse(value)
    }
}

impl From<MinInviteRole> for String {
    fn from(value: MinInviteRole) -> Self {
        value.as_str().to_string()
    }
}

impl fmt::Display for MinInviteRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
