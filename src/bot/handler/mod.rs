use serenity::all::{Context, EventHandler, Guild, GuildId, Presence, Ready};
use serenity::async_trait;
use std::sync::{Arc, OnceLock};

use crate::data::SerenityDiscordApi;
use crate::model::guild::{GuildSnapshot, NotificationNames};
use crate::service::MonitorRegistry;

pub mod guild;
pub mod presence;
pub mod ready;

/// Discord bot event handler
pub struct Handler {
    names: NotificationNames,
    registry: OnceLock<MonitorRegistry>,
}

impl Handler {
    pub fn new(names: NotificationNames) -> Self {
        Self {
            names,
            registry: OnceLock::new(),
        }
    }

    /// Returns the registry, creating it around the client's HTTP handle on first use.
    fn registry(&self, ctx: &Context) -> &MonitorRegistry {
        self.registry.get_or_init(|| {
            MonitorRegistry::new(
                Arc::new(SerenityDiscordApi::new(ctx.http.clone())),
                self.names.clone(),
            )
        })
    }
}

#[async_trait]
impl EventHandler for Handler {
    /// Called when the bot connects or reconnects with a new session
    async fn ready(&self, ctx: Context, ready: Ready) {
        ready::handle_ready(self.registry(&ctx), ctx, ready).await;
    }

    /// Called once every guild from the ready payload has arrived in the cache
    async fn cache_ready(&self, ctx: Context, guilds: Vec<GuildId>) {
        ready::handle_cache_ready(self.registry(&ctx), ctx, guilds).await;
    }

    /// Called when a guild becomes available or the bot joins a new guild
    async fn guild_create(&self, ctx: Context, guild: Guild, is_new: Option<bool>) {
        guild::handle_guild_create(self.registry(&ctx), ctx, guild, is_new).await;
    }

    /// Called when a member's presence changes
    async fn presence_update(&self, ctx: Context, new_data: Presence) {
        presence::handle_presence_update(self.registry(&ctx), ctx, new_data).await;
    }
}

/// Takes a snapshot of a cached guild.
///
/// The cache reference is released before returning so the snapshot can be
/// held across await points.
pub(crate) fn cached_snapshot(ctx: &Context, guild_id: GuildId) -> Option<GuildSnapshot> {
    ctx.cache
        .guild(guild_id)
        .map(|guild| GuildSnapshot::from_guild(&guild))
}

/// Snapshots every guild in `guild_ids` that is present in the cache.
pub(crate) fn cached_snapshots(ctx: &Context, guild_ids: &[GuildId]) -> Vec<GuildSnapshot> {
    guild_ids
        .iter()
        .filter_map(|guild_id| {
            let snapshot = cached_snapshot(ctx, *guild_id);
            if snapshot.is_none() {
                tracing::warn!("Guild {} is not in the cache", guild_id);
            }
            snapshot
        })
        .collect()
}
