// Deactivate-all use case: expires every still-usable invite at once

use crate::application::authorization::{authorize, AuthorizationRequest};
use crate::application::ports::RoleRequirement;
use crate::domain::{Invite, InviteAction, InviteSettings, PolicyError, Principal};

/// Expires each invite in `invites` that is still valid for use.
/// Returns how many were expired; already expired or used-up invites are left alone.
pub fn execute<R: RoleRequirement + ?Sized>(
    requirement: &R,
    settings: &InviteSettings,
    principal: Option<&Principal>,
    invites: &mut [Invite],
) -> Result<usize, PolicyError> {
    let request = AuthorizationRequest {
        action: InviteAction::DeactivateAll,
        principal,
        invite: None,
    };
    authorize(requirement, settings, &request)?;

    let mut expired = 0;
    for invite in invites.iter_mut().filter(|invite| invite.valid_for_use()) {
        invite.expire();
        expired += 1;
    }

    tracing::info!("[invites] deactivate_all expired {} of {} invites", expired, invites.len());
    Ok(expired)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ports::MockRoleRequirement;
    use crate::domain::{Role, UserId};
    use chrono::{Duration, Utc};

    fn never_called() -> MockRoleRequirement {
        let mut requirement = MockRoleRequirement::new();
        requirement.expect_meets_minimum().never();
        requirement
    }

    fn sample_invites() -> Vec<Invite> {
        let mut used_up = Invite::new(UserId::new()).with_max_uses(1);
        used_up.uses = 1;
        vec![
            Invite::new(UserId::new()).with_max_uses(100),
            Invite::new(UserId::new()),
            Invite::new(UserId::new()).with_expiry(Utc::now() - Duration::hours(1)),
            used_up,
        ]
    }

    #[test]
    fn admin_expires_usable_invites() {
        let admin = Principal::new(Role::Admin);
        let mut invites = sample_invites();

        let expired = execute(&never_called(), &InviteSettings::default(), Some(&admin), &mut invites).unwrap();

        assert_eq!(expired, 2);
        assert!(invites.iter().all(|invite| !invite.valid_for_use()));
        assert!(invites[0].expired() && invites[1].expired());
        assert!(invites[3].expires_at.is_none());
    }

    #[test]
    fn non_admin_is_rejected_and_nothing_changes() {
        let moderator = Principal::new(Role::Moderator);
        let mut invites = sample_invites();
        let before = invites.clone();

        let err = execute(&never_called(), &InviteSettings::default(), Some(&moderator), &mut invites)
            .unwrap_err();

        assert_eq!(
            err,
            PolicyError::NotAuthorized {
                action: InviteAction::DeactivateAll
            }
        );
        assert_eq!(invites, before);
    }

    #[test]
    fn missing_principal_is_invalid_argument() {
        let mut invites = sample_invites();
        let err = execute(&never_called(), &InviteSettings::default(), None, &mut invites).unwrap_err();
        assert!(matches!(err, PolicyError::InvalidArgument(_)));
    }

    #[test]
    fn empty_slice_is_fine() {
        let admin = Principal::new(Role::Admin);
        let expired = execute(&never_called(), &InviteSettings::default(), Some(&admin), &mut []).unwrap();
        assert_eq!(expired, 0);
    }
}
