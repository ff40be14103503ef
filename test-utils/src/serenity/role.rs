//! Test factory for creating Serenity Role objects.

use serenity::all::Role;

/// Creates a test Serenity Role.
///
/// Creates a Role object by deserializing JSON with the provided values. All
/// other fields are set to defaults (no colour, not hoisted, not managed, zero
/// permissions).
///
/// # Arguments
/// - `role_id` - Discord role ID (snowflake)
/// - `name` - Role name, matched case-sensitively by the monitors
/// - `mentionable` - Whether members can mention the role
///
/// # Panics
/// - If the JSON cannot be deserialized into a Role (indicates invalid test data)
///
/// # Examples
///
/// ```rust,ignore
/// use test_utils::serenity::role::create_test_role;
///
/// let role = create_test_role(123456789, "notifications", true);
/// assert_eq!(role.name, "notifications");
/// assert!(role.mentionable);
/// ```
pub fn create_test_role(role_id: u64, name: &str, mentionable: bool) -> Role {
    serde_json::from_value(serde_json::json!({
        "id": role_id.to_string(),
        "name": name,
        "color": 0,
        "colors": {
            "primary_color": 0,
            "secondary_color": null,
            "tertiary_color": null,
        },
        "hoist": false,
        "icon": null,
        "unicode_emoji": null,
        "position": 1,
        "permissions": "0",
        "managed": false,
        "mentionable": mentionable,
    }))
    .expect("Failed to create test role - invalid JSON structure")
}
