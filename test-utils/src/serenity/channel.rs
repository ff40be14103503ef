//! Test factory for creating Serenity GuildChannel objects.

use serenity::all::GuildChannel;

/// Channel type of a guild text channel.
pub const TEXT: u8 = 0;
/// Channel type of a guild voice channel.
pub const VOICE: u8 = 2;

/// Creates a test Serenity GuildChannel.
///
/// # Arguments
/// - `guild_id` - Discord guild ID the channel belongs to
/// - `channel_id` - Discord channel ID (snowflake)
/// - `name` - Channel name
/// - `kind` - Raw Discord channel type, e.g. `TEXT` or `VOICE`
///
/// # Panics
/// - If the JSON cannot be deserialized into a GuildChannel (indicates invalid test data)
pub fn create_test_channel(guild_id: u64, channel_id: u64, name: &str, kind: u8) -> GuildChannel {
    serde_json::from_value(serde_json::json!({
        "id": channel_id.to_string(),
        "guild_id": guild_id.to_string(),
        "type": kind,
        "name": name,
        "position": 0,
        "permission_overwrites": [],
        "nsfw": false,
        "parent_id": null,
        "topic": null,
        "flags": 0,
        "available_tags": [],
        "applied_tags": [],
    }))
    .expect("Failed to create test channel - invalid JSON structure")
}
