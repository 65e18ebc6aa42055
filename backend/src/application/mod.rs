// Application layer - authorization entry points for request handlers
// Orchestrates domain logic, depends on domain layer only

pub mod authorization;
pub mod deactivate_invites;
pub mod ports;

pub use authorization::{authorize, permit, AuthorizationRequest};
