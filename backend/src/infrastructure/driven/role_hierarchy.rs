use crate::application::ports::RoleRequirement;
use crate::domain::{InviteSettings, Principal};

/// Compares the principal's role against `min_invite_role` on the ordered
/// role scale. An unrecognised setting grants nobody.
#[derive(Debug, Clone, Copy, Default)]
pub struct RoleHierarchy;

impl RoleRequirement for RoleHierarchy {
    fn meets_minimum(&self, principal: &Principal, settings: &InviteSettings) -> bool {
        match settings.min_invite_role.required_role() {
            Some(required) => principal.role() >= required,
            None => {
                tracing::warn!(
                    "Unrecognised min_invite_role '{}', denying invite creation",
                    settings.min_invite_role
                );
                false
            }
        }
    }
}
