//! Ready event handlers for monitor startup.
//!
//! Serenity fires `ready` when a gateway session is established and
//! `cache_ready` once every guild listed in the ready payload has been
//! received. A new session empties the guild cache, so guild data is only
//! complete after the latter; both the startup build and the per-session
//! offline sweep run there.

use serenity::all::{Context, GuildId, Ready};

use crate::bot::handler::cached_snapshots;
use crate::service::MonitorRegistry;

/// Handles the ready event when the bot connects to Discord.
///
/// Marks a new session so the following `cache_ready` announces offline bots.
///
/// # Arguments
/// - `registry` - Monitor registry
/// - `_ctx` - Discord context (unused, required by event handler signature)
/// - `ready` - Ready event data containing bot user information
pub async fn handle_ready(registry: &MonitorRegistry, _ctx: Context, ready: Ready) {
    tracing::info!(
        "{} is connected to Discord ({} guilds)",
        ready.user.name,
        ready.guilds.len()
    );

    if registry.is_started() {
        tracing::info!("New session; offline bots will be announced once guilds are cached");
    }

    registry.begin_session();
}

/// Handles the cache_ready event once all guilds are cached.
///
/// Builds one monitor per guild the first time it fires. After that, and after
/// every new session, announces every bot that is currently offline.
///
/// # Arguments
/// - `registry` - Monitor registry
/// - `ctx` - Discord context for cache access
/// - `guilds` - IDs of every guild the bot is in
pub async fn handle_cache_ready(registry: &MonitorRegistry, ctx: Context, guilds: Vec<GuildId>) {
    let snapshots = cached_snapshots(&ctx, &guilds);
    let guild_count = snapshots.len();

    let sent = registry.on_cache_ready(snapshots).await;

    tracing::info!(
        "Cache ready for {} guilds; announced {} offline bots",
        guild_count,
        sent
    );
}
