use super::MinInviteRole;
use serde::{Deserialize, Serialize};

/// Site settings the invite policy reads. Passed into every decision.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InviteSettings {
    #[serde(default)]
    pub min_invite_role: MinInviteRole,
}

impl InviteSettings {
    pub fn new(min_invite_role: impl Into<MinInviteRole>) -> Self {
        Self {
            min_invite_role: min_invite_role.into(),
        }
    }
}
