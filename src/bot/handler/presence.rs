use serenity::all::{Context, Presence};

use crate::error::AppError;
use crate::model::guild::member_is_bot;
use crate::model::presence::MemberPresence;
use crate::service::MonitorRegistry;

/// Handles the presence_update event when a member's status changes.
///
/// Presence updates outside of guilds are ignored. Updates for guilds without
/// a monitor are logged as warnings and dropped.
///
/// # Arguments
/// - `registry` - Monitor registry
/// - `ctx` - Discord context for looking up the cached member
/// - `presence` - New presence of the member
pub async fn handle_presence_update(registry: &MonitorRegistry, ctx: Context, presence: Presence) {
    let Some(guild_id) = presence.guild_id else {
        return;
    };

    let cached_is_bot = ctx
        .cache
        .guild(guild_id)
        .and_then(|guild| member_is_bot(&guild, presence.user.id));
    let member = MemberPresence::from_presence(&presence, cached_is_bot);

    match registry.handle_presence(guild_id, member).await {
        Ok(_) => {}
        Err(AppError::NotFound(msg)) => {
            tracing::warn!("Dropping presence update for {}: {}", member.user_id, msg);
        }
        Err(e) => {
            tracing::error!(
                "Failed to handle presence update for {} in guild {}: {:?}",
                member.user_id,
                guild_id,
                e
            );
        }
    }
}
