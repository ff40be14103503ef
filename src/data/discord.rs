use serenity::all::{
    ChannelId, ChannelType, CreateChannel, CreateMessage, EditRole, GuildId, RoleId,
};
use serenity::async_trait;
use serenity::http::Http;
use std::sync::Arc;

use crate::error::AppError;

/// Discord operations needed to resolve notification targets and post notifications.
#[async_trait]
pub trait DiscordApi: Send + Sync {
    /// Creates a mentionable role named `name` in the guild.
    async fn create_role(&self, guild_id: GuildId, name: &str) -> Result<RoleId, AppError>;

    /// Creates a text channel named `name` in the guild.
    async fn create_text_channel(
        &self,
        guild_id: GuildId,
        name: &str,
    ) -> Result<ChannelId, AppError>;

    /// Posts a plain text message to the channel.
    async fn send_message(&self, channel_id: ChannelId, content: &str) -> Result<(), AppError>;
}

/// `DiscordApi` backed by the bot's Serenity HTTP client.
pub struct SerenityDiscordApi {
    http: Arc<Http>,
}

impl SerenityDiscordApi {
    pub fn new(http: Arc<Http>) -> Self {
        Self { http }
    }
}

#[async_trait]
impl DiscordApi for SerenityDiscordApi {
    async fn create_role(&self, guild_id: GuildId, name: &str) -> Result<RoleId, AppError> {
        let role = guild_id
            .create_role(&self.http, EditRole::new().name(name).mentionable(true))
            .await?;

        Ok(role.id)
    }

    async fn create_text_channel(
        &self,
        guild_id: GuildId,
        name: &str,
    ) -> Result<ChannelId, AppError> {
        let channel = guild_id
            .create_channel(&self.http, CreateChannel::new(name).kind(ChannelType::Text))
            .await?;

        Ok(channel.id)
    }

    async fn send_message(&self, channel_id: ChannelId, content: &str) -> Result<(), AppError> {
        channel_id
            .send_message(&self.http, CreateMessage::new().content(content))
            .await?;

        Ok(())
    }
}
