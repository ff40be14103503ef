use serenity::all::{Client, GatewayIntents};

use crate::bot::handler::Handler;
use crate::config::Config;
use crate::error::AppError;
use crate::model::guild::NotificationNames;

/// Starts the Discord bot in a blocking manner
///
/// Creates the Serenity client with the monitoring event handler and runs it
/// until the connection is shut down.
///
/// # Arguments
/// - `config` - Application configuration with the bot token and object names
///
/// # Returns
/// - `Ok(())` if the bot runs and shuts down cleanly
/// - `Err(AppError)` if client creation or the gateway connection fails
pub async fn start_bot(config: &Config) -> Result<(), AppError> {
    // GUILD_MEMBERS and GUILD_PRESENCES are privileged intents - must be enabled in Discord Developer Portal
    let intents =
        GatewayIntents::GUILDS | GatewayIntents::GUILD_MEMBERS | GatewayIntents::GUILD_PRESENCES;

    let handler = Handler::new(NotificationNames::from_config(config));

    let mut client = Client::builder(&config.discord_bot_token, intents)
        .event_handler(handler)
        .await?;

    tracing::info!("Starting Discord bot...");

    client.start().await?;

    Ok(())
}
