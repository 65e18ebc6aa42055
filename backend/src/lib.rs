//! Authorization policy for the invite resource.
//!
//! [`InvitePolicy`] answers the four invite questions (index, create,
//! deactivate all, destroy) for a [`Principal`]. Request handlers normally go
//! through [`authorize`] with a named [`InviteAction`], which also resolves the
//! minimum-role check through a [`RoleRequirement`] port.

pub mod domain;
pub mod application;
pub mod infrastructure;

pub use application::ports::RoleRequirement;
pub use application::{authorize, permit, AuthorizationRequest};
pub use domain::{
    Invite, InviteAction, InvitePolicy, InviteSettings, MinInviteRole, PolicyError, Principal, Role,
    UserId,
};
pub use infrastructure::{RoleHierarchy, SettingsError};
