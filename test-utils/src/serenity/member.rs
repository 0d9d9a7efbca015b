//! Test factory for creating Serenity Member objects.

use serenity::all::Member;

use super::{user_json, TEST_GUILD_ID};

/// Creates a test guild member of the test guild.
///
/// # Arguments
/// - `user_id` - Discord user ID (snowflake)
/// - `username` - Username of the member
/// - `joined_at` - Optional RFC 3339 join timestamp
///
/// # Returns
/// - `Member` - A valid Serenity Member struct for testing
///
/// # Panics
/// - If the JSON cannot be deserialized into a Member (indicates invalid test data)
pub fn create_test_member(user_id: u64, username: &str, joined_at: Option<&str>) -> Member {
    create_test_guild_member(TEST_GUILD_ID, user_id, username, joined_at)
}

/// Creates a test member of an arbitrary guild.
///
/// # Panics
/// - If the JSON cannot be deserialized into a Member (indicates invalid test data)
pub fn create_test_guild_member(
    guild_id: u64,
    user_id: u64,
    username: &str,
    joined_at: Option<&str>,
) -> Member {
    serde_json::from_value(serde_json::json!({
        "user": user_json(user_id, username, false),
        "nick": null,
        "avatar": null,
        "roles": [],
        "joined_at": joined_at,
        "premium_since": null,
        "deaf": false,
        "mute": false,
        "flags": 0,
        "pending": false,
        "communication_disabled_until": null,
        "guild_id": guild_id.to_string(),
    }))
    .expect("Failed to create test member - invalid JSON structure")
}
