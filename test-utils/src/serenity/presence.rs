//! Test factory for creating Serenity Presence objects.

use serenity::all::Presence;

/// Creates a test Serenity Presence as sent in `PRESENCE_UPDATE`.
///
/// Gateway presence updates carry a partial user; pass `None` for `bot` to
/// leave the flag out the way Discord often does.
///
/// # Arguments
/// - `guild_id` - Discord guild ID the presence was reported in
/// - `user_id` - Discord user ID (snowflake)
/// - `bot` - Bot flag of the partial user, if present
/// - `status` - Raw status string: `online`, `idle`, `dnd`, `invisible` or `offline`
///
/// # Panics
/// - If the JSON cannot be deserialized into a Presence (indicates invalid test data)
pub fn create_test_presence(guild_id: u64, user_id: u64, bot: Option<bool>, status: &str) -> Presence {
    let mut user = serde_json::json!({ "id": user_id.to_string() });
    if let Some(bot) = bot {
        user["bot"] = serde_json::Value::Bool(bot);
    }

    serde_json::from_value(serde_json::json!({
        "user": user,
        "guild_id": guild_id.to_string(),
        "status": status,
        "activities": [],
        "client_status": null,
    }))
    .expect("Failed to create test presence - invalid JSON structure")
}
