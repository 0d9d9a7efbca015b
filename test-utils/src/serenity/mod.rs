//! Test factories for creating Serenity gateway payloads.
//!
//! These factories build valid Serenity structs by deserializing JSON, simulating what
//! Discord's gateway would deliver. Use them to drive hooks and commands with realistic
//! payloads without a live connection.
//!
//! ```rust,ignore
//! use test_utils::serenity::{create_test_member, create_test_message};
//!
//! let message = create_test_message(1, 100, 42, "Sweetie", "!roll d6");
//! let member = create_test_member(42, "Sweetie", Some("2020-01-01T00:00:00.000000+00:00"));
//! ```

pub mod guild;
pub mod member;
pub mod message;

pub use guild::create_test_partial_guild;
pub use member::{create_test_guild_member, create_test_member};
pub use message::{create_test_message, TestMessageBuilder};

/// Guild ID used by every payload these factories build.
pub const TEST_GUILD_ID: u64 = 200_000_000_000_000_001;

pub(crate) fn user_json(user_id: u64, username: &str, bot: bool) -> serde_json::Value {
    serde_json::json!({
        "id": user_id.to_string(),
        "username": username,
        "discriminator": "0",
        "global_name": null,
        "avatar": null,
        "bot": bot,
        "system": false,
        "public_flags": 0,
    })
}
