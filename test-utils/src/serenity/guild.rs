//! Test factory for creating Serenity PartialGuild objects.

use serenity::all::PartialGuild;

/// Creates a guild as delivered by a guild update.
///
/// # Arguments
/// - `guild_id` - Discord guild ID
/// - `name` - Guild name
///
/// # Panics
/// - If the JSON cannot be deserialized into a PartialGuild (indicates invalid test data)
pub fn create_test_partial_guild(guild_id: u64, name: &str) -> PartialGuild {
    serde_json::from_value(serde_json::json!({
        "id": guild_id.to_string(),
        "name": name,
        "icon": null,
        "icon_hash": null,
        "splash": null,
        "discovery_splash": null,
        "owner_id": "1",
        "widget_enabled": null,
        "widget_channel_id": null,
        "verification_level": 0,
        "default_message_notifications": 0,
        "explicit_content_filter": 0,
        "roles": [],
        "emojis": [],
        "features": [],
        "mfa_level": 0,
        "application_id": null,
        "system_channel_id": null,
        "system_channel_flags": 0,
        "rules_channel_id": null,
        "max_presences": null,
        "max_members": null,
        "vanity_url_code": null,
        "description": null,
        "banner": null,
        "premium_tier": 0,
        "premium_subscription_count": null,
        "preferred_locale": "en-US",
        "public_updates_channel_id": null,
        "max_video_channel_users": null,
        "max_stage_video_channel_users": null,
        "approximate_member_count": null,
        "approximate_presence_count": null,
        "welcome_screen": null,
        "nsfw_level": 0,
        "stickers": [],
        "premium_progress_bar_enabled": false,
        "safety_alerts_channel_id": null,
        "incidents_data": null,
    }))
    .expect("Failed to create test guild - invalid JSON structure")
}
