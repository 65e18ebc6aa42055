use super::value_objects::InviteAction;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PolicyError {
    /// Missing or malformed input, e.g. no principal on the request.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    #[error("not authorized to {action} invites")]
    NotAuthorized { action: InviteAction },
}
