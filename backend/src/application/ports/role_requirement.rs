// Driven port - minimum role check consumed by the create decision

use crate::domain::{InviteSettings, Principal};

#[cfg_attr(test, mockall::automock)]
pub trait RoleRequirement: Send + Sync {
    /// Whether `principal` holds at least the role `settings` require for creating invites.
    fn meets_minimum(&self, principal: &Principal, settings: &InviteSettings) -> bool;
}
