//! Per-guild bot uptime monitor.
//!
//! A `GuildMonitor` owns the notification role and channel of one guild and the
//! last recorded offline flag of every bot member it has seen. Presence changes
//! are run through `next_transition`; when a notification is due, the role and
//! the bot are mentioned in the notification channel.
//!
//! The role and channel are resolved once, behind a gate that every operation
//! awaits. If resolution fails, the gate closes empty and the monitor stays
//! unavailable for the rest of the process lifetime.

use serenity::all::{ChannelId, GuildId, Mentionable, RoleId, UserId};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::{Mutex, OnceCell};

use crate::data::DiscordApi;
use crate::error::AppError;
use crate::model::guild::{GuildSnapshot, NotificationNames, NotificationTargets};
use crate::model::presence::{next_transition, BotStatus, MemberPresence};

/// Builds the notification text, e.g. `<@&1> <@2> is offline`.
pub fn format_notification(
    targets: &NotificationTargets,
    user_id: UserId,
    status: BotStatus,
) -> String {
    format!(
        "{} {} is {}",
        targets.role_id.mention(),
        user_id.mention(),
        status
    )
}

pub struct GuildMonitor {
    guild: GuildSnapshot,
    names: NotificationNames,
    api: Arc<dyn DiscordApi>,
    /// Resolved role and channel; `None` once resolution has failed.
    targets: OnceCell<Option<NotificationTargets>>,
    /// Last recorded offline flag per bot member.
    was_offline: Mutex<HashMap<UserId, bool>>,
}

impl GuildMonitor {
    /// Creates a monitor and seeds its state from the guild's current bots.
    ///
    /// Resolution of the role and channel does not start until `initialize` or
    /// the first presence change.
    ///
    /// # Arguments
    /// - `guild` - Snapshot of the guild at startup
    /// - `names` - Role and channel names to locate or create
    /// - `api` - Discord API used for creation and sending
    pub fn new(guild: GuildSnapshot, names: NotificationNames, api: Arc<dyn DiscordApi>) -> Self {
        let was_offline = guild
            .bots
            .iter()
            .map(|bot| (bot.user_id, bot.status.is_offline()))
            .collect();

        Self {
            guild,
            names,
            api,
            targets: OnceCell::new(),
            was_offline: Mutex::new(was_offline),
        }
    }

    pub fn guild_id(&self) -> GuildId {
        self.guild.guild_id
    }

    /// Resolves the notification role and channel.
    ///
    /// Safe to call any number of times and from concurrent tasks; only the
    /// first call talks to Discord and every caller sees the same outcome.
    ///
    /// # Returns
    /// - `Ok(NotificationTargets)` - Role and channel are ready
    /// - `Err(AppError::MonitorUnavailable)` - Resolution failed (now or earlier)
    pub async fn initialize(&self) -> Result<NotificationTargets, AppError> {
        let targets = self
            .targets
            .get_or_init(|| async {
                match self.resolve_targets().await {
                    Ok(targets) => {
                        tracing::info!(
                            "Monitoring bots in guild {} ({}): role {}, channel {}",
                            self.guild.name,
                            self.guild.guild_id,
                            targets.role_id,
                            targets.channel_id
                        );
                        Some(targets)
                    }
                    Err(e) => {
                        tracing::error!(
                            "Failed to resolve notification role/channel for guild {} ({}): {:?}",
                            self.guild.name,
                            self.guild.guild_id,
                            e
                        );
                        None
                    }
                }
            })
            .await;

        (*targets).ok_or(AppError::MonitorUnavailable {
            guild_id: self.guild.guild_id,
        })
    }

    /// Applies a presence change and posts a notification when one is due.
    ///
    /// Waits for initialization before touching state. The state lock is held
    /// until the message has been sent so events for this guild are applied
    /// one at a time in arrival order.
    ///
    /// # Arguments
    /// - `member` - Presence of the member that changed
    ///
    /// # Returns
    /// - `Ok(true)` - A notification was sent
    /// - `Ok(false)` - Not a bot, or the change was suppressed
    /// - `Err(AppError::MonitorUnavailable)` - Role/channel resolution failed
    /// - `Err(AppError::DiscordErr)` - Sending the message failed
    pub async fn handle_presence_change(&self, member: MemberPresence) -> Result<bool, AppError> {
        if !member.is_bot {
            return Ok(false);
        }

        let targets = self.initialize().await?;

        let mut was_offline = self.was_offline.lock().await;
        let previous = was_offline.get(&member.user_id).copied();

        let Some(status) = next_transition(previous, member.status) else {
            tracing::debug!(
                "Suppressed {} notification for bot {} in guild {}",
                member.status,
                member.user_id,
                self.guild.guild_id
            );
            return Ok(false);
        };

        was_offline.insert(member.user_id, status.is_offline());

        let content = format_notification(&targets, member.user_id, status);
        self.api.send_message(targets.channel_id, &content).await?;

        tracing::info!(
            "Bot {} in guild {} is {}",
            member.user_id,
            self.guild.guild_id,
            status
        );

        Ok(true)
    }

    /// Announces every bot that is offline in `current`.
    ///
    /// Used on startup and after reconnecting so bots that went down while the
    /// bot was not watching still get reported. Online bots are skipped.
    ///
    /// # Arguments
    /// - `current` - Fresh snapshot of this monitor's guild
    ///
    /// # Returns
    /// - `Ok(usize)` - Number of notifications sent
    /// - `Err(AppError)` - First failure; remaining bots are not announced
    pub async fn notify_all_currently_offline(
        &self,
        current: &GuildSnapshot,
    ) -> Result<usize, AppError> {
        let mut sent = 0;

        for bot in current.offline_bots() {
            let member = MemberPresence {
                user_id: bot.user_id,
                is_bot: true,
                status: bot.status,
            };

            if self.handle_presence_change(member).await? {
                sent += 1;
            }
        }

        Ok(sent)
    }

    /// Last recorded offline flag for a member.
    #[cfg(test)]
    pub async fn was_offline(&self, user_id: UserId) -> Option<bool> {
        self.was_offline.lock().await.get(&user_id).copied()
    }

    /// Locates or creates the role and channel concurrently.
    async fn resolve_targets(&self) -> Result<NotificationTargets, AppError> {
        let (role_id, channel_id) =
            tokio::try_join!(self.resolve_role(), self.resolve_channel())?;

        Ok(NotificationTargets {
            role_id,
            channel_id,
        })
    }

    async fn resolve_role(&self) -> Result<RoleId, AppError> {
        if let Some(role_id) = self.guild.find_role(&self.names.role) {
            tracing::debug!(
                "Found role {} ({}) in guild {}",
                self.names.role,
                role_id,
                self.guild.guild_id
            );
            return Ok(role_id);
        }

        let role_id = self
            .api
            .create_role(self.guild.guild_id, &self.names.role)
            .await?;
        tracing::info!(
            "Created role {} ({}) in guild {}",
            self.names.role,
            role_id,
            self.guild.guild_id
        );

        Ok(role_id)
    }

    async fn resolve_channel(&self) -> Result<ChannelId, AppError> {
        if let Some(channel_id) = self.guild.find_text_channel(&self.names.channel) {
            tracing::debug!(
                "Found channel {} ({}) in guild {}",
                self.names.channel,
                channel_id,
                self.guild.guild_id
            );
            return Ok(channel_id);
        }

        let channel_id = self
            .api
            .create_text_channel(self.guild.guild_id, &self.names.channel)
            .await?;
        tracing::info!(
            "Created channel {} ({}) in guild {}",
            self.names.channel,
            channel_id,
            self.guild.guild_id
        );

        Ok(channel_id)
    }
}
