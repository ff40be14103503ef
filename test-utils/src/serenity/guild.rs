//! Test factory for creating Serenity Guild objects.
//!
//! Guilds are built by deserializing JSON, simulating the `GUILD_CREATE`
//! payload Discord sends. Nested objects are created with the other factories
//! in this module and serialized into the payload.

use serenity::all::{Guild, GuildChannel, Member, Presence, Role};

/// Creates an empty test Serenity Guild.
///
/// # Arguments
/// - `guild_id` - Discord guild ID (snowflake)
/// - `name` - Guild name
///
/// # Panics
/// - If the JSON cannot be deserialized into a Guild (indicates invalid test data)
pub fn create_test_guild(guild_id: u64, name: &str) -> Guild {
    create_test_guild_with(guild_id, name, vec![], vec![], vec![], vec![])
}

/// Creates a test Serenity Guild with roles, channels, members and presences.
///
/// # Arguments
/// - `guild_id` - Discord guild ID (snowflake)
/// - `name` - Guild name
/// - `roles` - Roles in the guild
/// - `channels` - Channels in the guild, of any type
/// - `members` - Members in the guild
/// - `presences` - Presences of members that are not offline
///
/// # Panics
/// - If the JSON cannot be deserialized into a Guild (indicates invalid test data)
///
/// # Examples
///
/// ```rust,ignore
/// use test_utils::serenity::{create_test_guild_with, create_test_member};
///
/// let guild = create_test_guild_with(
///     123456789,
///     "Test Guild",
///     vec![],
///     vec![],
///     vec![create_test_member(123456789, 42, "uptime-bot", true)],
///     vec![],
/// );
/// assert_eq!(guild.members.len(), 1);
/// ```
pub fn create_test_guild_with(
    guild_id: u64,
    name: &str,
    roles: Vec<Role>,
    channels: Vec<GuildChannel>,
    members: Vec<Member>,
    presences: Vec<Presence>,
) -> Guild {
    let member_count = members.len();

    serde_json::from_value(serde_json::json!({
        "id": guild_id.to_string(),
        "name": name,
        "icon": null,
        "icon_hash": null,
        "owner_id": "100000000000000000",
        "afk_timeout": 300,
        "verification_level": 0,
        "default_message_notifications": 0,
        "explicit_content_filter": 0,
        "roles": roles,
        "emojis": [],
        "stickers": [],
        "features": [],
        "mfa_level": 0,
        "system_channel_flags": 0,
        "premium_tier": 0,
        "premium_subscription_count": 0,
        "premium_progress_bar_enabled": false,
        "preferred_locale": "en-US",
        "nsfw_level": 0,
        "joined_at": "2020-01-01T00:00:00.000000+00:00",
        "large": false,
        "member_count": member_count,
        "voice_states": [],
        "channels": channels,
        "threads": [],
        "presences": presences,
        "max_presences": 25000,
        "max_members": 100000,
        "unavailable": false,
        "members": members,
        "stage_instances": [],
        "guild_scheduled_events": [],
    }))
    .expect("Failed to create test guild - invalid JSON structure")
}
