use crate::server::error::{config::ConfigError, AppError};

/// Process-wide configuration loaded from the environment.
///
/// Per-guild behaviour is not configured here; it lives in the `temp_voice_settings`
/// table.
pub struct Config {
    pub database_url: String,

    pub discord_bot_token: String,
}

impl Config {
    /// Loads configuration from environment variables.
    ///
    /// # Returns
    /// - `Ok(Config)` - All required variables are set and non-empty
    /// - `Err(AppError::ConfigErr)` - A variable is missing or blank
    pub fn from_env() -> Result<Self, AppError> {
        Ok(Self {
            database_url: required_var("DATABASE_URL")?,
            discord_bot_token: required_var("DISCORD_BOT_TOKEN")?,
        })
    }
}

fn required_var(name: &str) -> Result<String, ConfigError> {
    let value = std::env::var(name).map_err(|_| ConfigError::MissingEnvVar(name.to_string()))?;

    if value.trim().is_empty() {
        return Err(ConfigError::EmptyEnvVar(name.to_string()));
    }

    Ok(value)
}
