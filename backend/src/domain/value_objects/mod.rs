pub mod user_id;
pub mod role;
pub mod min_invite_role;
pub mod invite_settings;
pub mod invite_action;

pub use user_id::UserId;
pub use role::Role;
pub use min_invite_role::MinInviteRole;
pub use invite_settings::InviteSettings;
pub use invite_action::InviteAction;
