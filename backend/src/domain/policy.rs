// Invite policy - pure allow/deny decisions for the invite resource

use super::entities::{Invite, Principal};
use super::value_objects::InviteSettings;

/// Decides what a principal may do with invites under the given settings.
#[derive(Debug, Clone, Copy)]
pub struct InvitePolicy<'a> {
    settings: &'a InviteSettings,
}

impl<'a> InvitePolicy<'a> {
    pub fn new(settings: &'a InviteSettings) -> Self {
        Self { settings }
    }

    pub fn can_index(&self, principal: &Principal) -> bool {
        principal.is_staff()
    }

    /// `meets_min_role_requirement` is computed by the caller from the
    /// `min_invite_role` setting.
    pub fn can_create(&self, _principal: &Principal, meets_min_role_requirement: bool) -> bool {
        meets_min_role_requirement
    }

    pub fn can_deactivate_all(&self, principal: &Principal) -> bool {
        principal.is_admin()
    }

    pub fn can_destroy(&self, principal: &Principal, invite: &Invite) -> bool {
        if principal.owns(invite) {
            return true;
        }
        if self.settings.min_invite_role.is_admin() {
            principal.is_admin()
        } else {
            principal.is_staff()
        }
    }
}
