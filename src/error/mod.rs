//! Error types for the bot.
//!
//! `AppError` is the top-level error type returned by startup code and by the
//! monitor services. Event handlers have no caller to hand errors back to, so
//! they log whatever they receive and carry on with the next event.

pub mod config;

use serenity::all::GuildId;
use thiserror::Error;

use crate::error::config::ConfigError;

/// Top-level application error type.
///
/// Aggregates configuration, Discord and monitor errors. Most variants use
/// `#[from]` for automatic conversion with `?`.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error during startup or environment variable loading.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Discord API error from Serenity.
    ///
    /// Boxed due to large size. Covers failed role or channel creation, failed
    /// message sends and gateway failures.
    #[error(transparent)]
    DiscordErr(#[from] Box<serenity::Error>),

    /// Resource not found error.
    ///
    /// # Fields
    /// - Message describing what resource was not found
    #[error("{0}")]
    NotFound(String),

    /// The guild's notification role or channel could not be resolved.
    ///
    /// Resolution is attempted once per monitor. After a failure the monitor
    /// stays unavailable for the rest of the process lifetime.
    #[error("Notification role or channel unavailable for guild {guild_id}")]
    MonitorUnavailable {
        /// Guild whose monitor failed to initialize
        guild_id: GuildId,
    },
}

/// Manual conversion from serenity::Error to AppError.
///
/// Boxes the error to reduce the size of the AppError enum, as serenity::Error
/// is very large and would make all AppError variants larger if not boxed.
impl From<serenity::Error> for AppError {
    fn from(err: serenity::Error) -> Self {
        AppError::DiscordErr(Box::new(err))
    }
}
