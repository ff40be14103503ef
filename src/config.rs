use crate::error::{config::ConfigError, AppError};

const DEFAULT_NOTIFY_ROLE_NAME: &str = "notifications";
const DEFAULT_NOTIFY_CHANNEL_NAME: &str = "bot-status-updates";

pub struct Config {
    pub discord_bot_token: String,

    /// Name of the role mentioned in every status notification.
    pub notify_role_name: String,
    /// Name of the text channel status notifications are posted to.
    pub notify_channel_name: String,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary variable lookup.
    ///
    /// `from_env` delegates here with `std::env::var`; tests pass a map so they
    /// never touch the process environment.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let discord_bot_token = lookup("DISCORD_BOT_TOKEN")
            .ok_or_else(|| ConfigError::MissingEnvVar("DISCORD_BOT_TOKEN".to_string()))?;

        let notify_role_name =
            optional_name(&lookup, "NOTIFY_ROLE_NAME", DEFAULT_NOTIFY_ROLE_NAME)?;
        let notify_channel_name =
            optional_name(&lookup, "NOTIFY_CHANNEL_NAME", DEFAULT_NOTIFY_CHANNEL_NAME)?;

        Ok(Self {
            discord_bot_token,
            notify_role_name,
            notify_channel_name,
        })
    }
}

fn optional_name<F>(lookup: &F, key: &str, default: &str) -> Result<String, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    match lookup(key) {
        None => Ok(default.to_string()),
        Some(value) if value.trim().is_empty() => Err(ConfigError::EmptyValue(key.to_string())),
        Some(value) => Ok(value),
    }
}
