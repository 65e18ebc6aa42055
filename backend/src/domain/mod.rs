// Domain layer - principals, invites and the invite policy
// No dependencies on other layers

pub mod entities;
pub mod value_objects;
pub mod errors;
pub mod policy;

pub use entities::*;
pub use value_objects::*;
pub use errors::PolicyError;
pub use policy::InvitePolicy;
