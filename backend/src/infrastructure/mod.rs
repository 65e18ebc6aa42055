// Infrastructure layer - external concerns (settings source, logging)
// Implements interfaces defined in application layer

pub mod driven;    // Output adapters (port implementations)
pub mod settings;
pub mod telemetry;

pub use driven::RoleHierarchy;
pub use settings::SettingsError;
