use crate::domain::entities::Invite;
use crate::domain::value_objects::*;

/// The account requesting an action.
///
/// Staff and admin flags derive from the role, so an admin is always staff.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Principal {
    id: UserId,
    role: Role,
}

impl Principal {
    pub fn new(role: Role) -> Self {
        Self {
            id: UserId::new(),
            role,
        }
    }

    pub fn from_persistence(id: UserId, role: Role) -> Self {
        Self { id, role }
    }

    pub fn id(&self) -> &UserId {
        &self.id
    }

    pub fn role(&self) -> Role {
        self.role
    }

    pub fn is_staff(&self) -> bool {
        self.role.is_staff()
    }

    pub fn is_admin(&self) -> bool {
        self.role.is_admin()
    }

    pub fn owns(&self, invite: &Invite) -> bool {
        invite.owner_id == self.id
    }
}
