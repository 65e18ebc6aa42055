// Named-action authorization for the invite resource.
// Request handlers call `authorize` and map `NotAuthorized` to 403.

use crate::application::ports::RoleRequirement;
use crate::domain::{Invite, InviteAction, InvitePolicy, InviteSettings, PolicyError, Principal};

pub struct AuthorizationRequest<'a> {
    pub action: InviteAction,
    pub principal: Option<&'a Principal>,
    pub invite: Option<&'a Invite>,
}

impl<'a> AuthorizationRequest<'a> {
    pub fn new(action: InviteAction, principal: &'a Principal) -> Self {
        Self {
            action,
            principal: Some(principal),
            invite: None,
        }
    }

    pub fn on(mut self, invite: &'a Invite) -> Self {
        self.invite = Some(invite);
        self
    }
}

/// Returns the policy decision for `request`. Denial is `Ok(false)`.
pub fn permit<R: RoleRequirement + ?Sized>(
    requirement: &R,
    settings: &InviteSettings,
    request: &AuthorizationRequest<'_>,
) -> Result<bool, PolicyError> {
    let action = request.action;
    let principal = request.principal.ok_or_else(|| {
        PolicyError::InvalidArgument(format!("no principal given for invite action '{}'", action))
    })?;
    if action.requires_record() && request.invite.is_none() {
        return Err(PolicyError::InvalidArgument(format!(
            "no invite given for invite action '{}'",
            action
        )));
    }
    let policy = InvitePolicy::new(settings);

    let allowed = match action {
        InviteAction::Index => policy.can_index(principal),
        InviteAction::Create => {
            let meets = requirement.meets_minimum(principal, settings);
            policy.can_create(principal, meets)
        }
        InviteAction::DeactivateAll => policy.can_deactivate_all(principal),
        InviteAction::Destroy => request
            .invite
            .map_or(false, |invite| policy.can_destroy(principal, invite)),
    };

    tracing::debug!(
        "[invites] {} by user_id={} role={} min_invite_role={} -> {}",
        action,
        principal.id(),
        principal.role(),
        settings.min_invite_role,
        if allowed { "allow" } else { "deny" }
    );
    Ok(allowed)
}

/// Like [`permit`], but a denial becomes `PolicyError::NotAuthorized`.
pub fn authorize<R: RoleRequirement + ?Sized>(
    requirement: &R,
    settings: &InviteSettings,
    request: &AuthorizationRequest<'_>,
) -> Result<(), PolicyError> {
    if permit(requirement, settings, request)? {
        Ok(())
    } else {
        Err(PolicyError::NotAuthorized {
            action: request.action,
        })
    }
}
