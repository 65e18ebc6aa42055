// Invite settings loading: defaults, then `.env`, then INVITES_* variables

use crate::domain::{InviteSettings, MinInviteRole};
use config::{Config, Environment, Source};
use thiserror::Error;

pub const ENV_PREFIX: &str = "INVITES";

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("failed to load invite settings: {0}")]
    Load(#[from] config::ConfigError),
}

/// Loads settings from the process environment, reading `.env` first if present.
pub fn load() -> Result<InviteSettings, SettingsError> {
    if let Err(e) = dotenvy::dotenv() {
        tracing::debug!("No .env file loaded: {}", e);
    }
    load_from(Environment::with_prefix(ENV_PREFIX))
}

/// Loads settings from `source` layered over the defaults.
pub fn load_from<S>(source: S) -> Result<InviteSettings, SettingsError>
where
    S: Source + Send + Sync + 'static,
{
    let settings: InviteSettings = Config::builder()
        .set_default("min_invite_role", MinInviteRole::default().as_str())?
        .add_source(source)
        .build()?
        .try_deserialize()?;

    tracing::info!(
        "Invite settings loaded: min_invite_role={}",
        settings.min_invite_role
    );
    Ok(settings)
}

#[cfg(test)]
mod tests {
    use super::*;
    use config::{File, FileFormat};

    #[test]
    fn empty_source_uses_defaults() -> anyhow::Result<()> {
        let settings = load_from(File::from_str("", FileFormat::Toml))?;
        assert_eq!(settings.min_invite_role, MinInviteRole::Admin);
        Ok(())
    }

    #[test]
    fn reads_known_role() -> anyhow::Result<()> {
        let settings = load_from(File::from_str(
            "min_invite_role = \"moderator\"",
            FileFormat::Toml,
        ))?;
        assert_eq!(settings.min_invite_role, MinInviteRole::Moderator);
        Ok(())
    }

    #[test]
    fn keeps_unknown_role_verbatim() -> anyhow::Result<()> {
        let settings = load_from(File::from_str("min_invite_role = \"else\"", FileFormat::Toml))?;
        assert_eq!(settings.min_invite_role, MinInviteRole::Other("else".to_string()));
        Ok(())
    }

    fn environment(vars: &[(&str, &str)]) -> Environment {
        let mut map = config::Map::new();
        for (key, value) in vars {
            map.insert(key.to_string(), value.to_string());
        }
        Environment::with_prefix(ENV_PREFIX).source(Some(map))
    }

    #[test]
    fn reads_prefixed_environment_variable() -> anyhow::Result<()> {
        let settings = load_from(environment(&[("INVITES_MIN_INVITE_ROLE", "moderator")]))?;
        assert_eq!(settings.min_invite_role, MinInviteRole::Moderator);
        Ok(())
    }

    #[test]
    fn ignores_unprefixed_environment_variable() -> anyhow::Result<()> {
        let settings = load_from(environment(&[("MIN_INVITE_ROLE", "user")]))?;
        assert_eq!(settings.min_invite_role, MinInviteRole::Admin);
        Ok(())
    }

    #[test]
    fn rejects_malformed_source() {
        let result = load_from(File::from_str("min_invite_role = [", FileFormat::Toml));
        assert!(matches!(result, Err(SettingsError::Load(_))));
    }
}
