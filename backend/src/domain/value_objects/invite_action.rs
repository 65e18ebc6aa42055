use crate::domain::errors::PolicyError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Actions a principal can request on the invite resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InviteAction {
    Index,
    Create,
    DeactivateAll,
    Destroy,
}

impl InviteAction {
    pub const ALL: [InviteAction; 4] = [
        InviteAction::Index,
        InviteAction::Create,
        InviteAction::DeactivateAll,
        InviteAction::Destroy,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            InviteAction::Index => "index",
            InviteAction::Create => "create",
            InviteAction::DeactivateAll => "deactivate_all",
            InviteAction::Destroy => "destroy",
        }
    }

    /// Whether the decision needs a concrete invite record.
    pub fn requires_record(&self) -> bool {
        matches!(self, InviteAction::Destroy)
    }
}

impl FromStr for InviteAction {
    type Err = PolicyError;

    // Accepts the predicate spelling too ("destroy?").
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim();
        let name = name.strip_suffix('?').unwrap_or(name);
        InviteAction::ALL
            .into_iter()
            .find(|action| action.as_str() == name)
            .ok_or_else(|| PolicyError::InvalidArgument(format!("unknown invite action '{}'", s)))
    }
}

impl fmt::Display for InviteAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
