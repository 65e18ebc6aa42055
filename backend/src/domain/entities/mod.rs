pub mod principal;
pub mod invite;

pub use principal::Principal;
pub use invite::Invite;
