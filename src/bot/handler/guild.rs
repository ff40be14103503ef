use serenity::all::{Context, Guild};

use crate::model::guild::GuildSnapshot;
use crate::service::MonitorRegistry;

/// Handles the guild_create event.
///
/// Guilds present at startup are picked up by `cache_ready`. This handler only
/// acts when the bot has joined a new guild, creating a monitor for it and
/// announcing any bots that are already offline there.
///
/// # Arguments
/// - `registry` - Monitor registry
/// - `_ctx` - Discord context (unused, required by event handler signature)
/// - `guild` - Guild data including roles, channels, members and presences
/// - `is_new` - `Some(true)` when the bot just joined this guild
pub async fn handle_guild_create(
    registry: &MonitorRegistry,
    _ctx: Context,
    guild: Guild,
    is_new: Option<bool>,
) {
    if is_new != Some(true) {
        return;
    }

    tracing::info!("Joined guild {} ({})", guild.name, guild.id);

    let snapshot = GuildSnapshot::from_guild(&guild);
    if registry.add_guild(snapshot.clone()).await {
        registry.sweep_all(&[snapshot]).await;
    }
}
