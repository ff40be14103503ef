//! Guild domain models used by the monitors.
//!
//! A `GuildSnapshot` is taken from the serenity cache at the handler boundary so
//! the service layer never holds cache references across await points and can
//! be exercised in tests without a live gateway connection.

use serenity::all::{ChannelId, ChannelType, Guild, GuildId, RoleId, UserId};

use crate::config::Config;
use crate::model::presence::BotStatus;

/// Names of the guild objects a monitor locates or creates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotificationNames {
    /// Name of the mentionable role pinged on every status change.
    pub role: String,
    /// Name of the text channel notifications are posted to.
    pub channel: String,
}

impl NotificationNames {
    pub fn new(role: impl Into<String>, channel: impl Into<String>) -> Self {
        Self {
            role: role.into(),
            channel: channel.into(),
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(
            config.notify_role_name.clone(),
            config.notify_channel_name.clone(),
        )
    }
}

/// The resolved role and channel a monitor notifies through.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NotificationTargets {
    pub role_id: RoleId,
    pub channel_id: ChannelId,
}

/// Role or text channel identified by ID and display name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NamedRole {
    pub id: RoleId,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NamedChannel {
    pub id: ChannelId,
    pub name: String,
}

/// A bot account in the guild along with its current status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BotMember {
    pub user_id: UserId,
    pub status: BotStatus,
}

/// `bot` flag of a guild member, if the member is in the guild's member list.
pub fn member_is_bot(guild: &Guild, user_id: UserId) -> Option<bool> {
    guild.members.get(&user_id).map(|member| member.user.bot)
}

/// Point-in-time view of a guild.
///
/// Only holds what the monitor needs: roles and text channels for resolving the
/// notification targets, and bot members for seeding state and the offline sweep.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuildSnapshot {
    pub guild_id: GuildId,
    pub name: String,
    pub roles: Vec<NamedRole>,
    pub text_channels: Vec<NamedChannel>,
    /// Bot members sorted by user ID.
    pub bots: Vec<BotMember>,
}

impl GuildSnapshot {
    /// Converts a cached serenity guild into a snapshot.
    ///
    /// Discord leaves offline members out of the guild's presence list, so a bot
    /// with no presence entry is recorded as offline. Human members and
    /// non-text channels are dropped.
    ///
    /// # Arguments
    /// - `guild` - Guild from the serenity cache or a `guild_create` event
    ///
    /// # Returns
    /// - `GuildSnapshot` - Snapshot with roles and channels sorted by ID
    pub fn from_guild(guild: &Guild) -> Self {
        let mut roles: Vec<NamedRole> = guild
            .roles
            .values()
            .map(|role| NamedRole {
                id: role.id,
                name: role.name.clone(),
            })
            .collect();
        roles.sort_by_key(|role| role.id);

        let mut text_channels: Vec<NamedChannel> = guild
            .channels
            .values()
            .filter(|channel| channel.kind == ChannelType::Text)
            .map(|channel| NamedChannel {
                id: channel.id,
                name: channel.name.clone(),
            })
            .collect();
        text_channels.sort_by_key(|channel| channel.id);

        let mut bots: Vec<BotMember> = guild
            .members
            .values()
            .filter(|member| member.user.bot)
            .map(|member| BotMember {
                user_id: member.user.id,
                status: guild
                    .presences
                    .get(&member.user.id)
                    .map(|presence| BotStatus::from(presence.status))
                    .unwrap_or(BotStatus::Offline),
            })
            .collect();
        bots.sort_by_key(|bot| bot.user_id);

        Self {
            guild_id: guild.id,
            name: guild.name.clone(),
            roles,
            text_channels,
            bots,
        }
    }

    /// Finds a role by exact, case-sensitive name.
    pub fn find_role(&self, name: &str) -> Option<RoleId> {
        self.roles
            .iter()
            .find(|role| role.name == name)
            .map(|role| role.id)
    }

    /// Finds a text channel by exact name.
    pub fn find_text_channel(&self, name: &str) -> Option<ChannelId> {
        self.text_channels
            .iter()
            .find(|channel| channel.name == name)
            .map(|channel| channel.id)
    }

    /// Bot members whose status is currently offline.
    pub fn offline_bots(&self) -> impl Iterator<Item = &BotMember> {
        self.bots.iter().filter(|bot| bot.status.is_offline())
    }
}
