// Output adapters implementing application ports

pub mod role_hierarchy;

pub use role_hierarchy::RoleHierarchy;
