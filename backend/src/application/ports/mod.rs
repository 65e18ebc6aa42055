// Application ports - Driven ports (output ports implemented by infrastructure)

pub mod role_requirement;

pub use role_requirement::RoleRequirement;
#[cfg(test)]
pub use role_requirement::MockRoleRequirement;
