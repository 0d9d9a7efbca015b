//! Test factory for creating Serenity Message objects.

use serenity::all::Message;

use super::{user_json, TEST_GUILD_ID};

/// Builder for test messages posted in the test guild.
///
/// # Example
///
/// ```rust,ignore
/// let message = TestMessageBuilder::new(1, 100, 42, "hello <@7>")
///     .mention(7, "Scootaloo")
///     .build();
/// ```
pub struct TestMessageBuilder {
    message_id: u64,
    channel_id: u64,
    author_id: u64,
    author_name: String,
    author_bot: bool,
    content: String,
    mentions: Vec<serde_json::Value>,
    mention_everyone: bool,
    guild_id: Option<u64>,
}

impl TestMessageBuilder {
    /// Creates a guild message from a regular user named `User {author_id}`.
    pub fn new(message_id: u64, channel_id: u64, author_id: u64, content: &str) -> Self {
        Self {
            message_id,
            channel_id,
            author_id,
            author_name: format!("User {}", author_id),
            author_bot: false,
            content: content.to_string(),
            mentions: Vec::new(),
            mention_everyone: false,
            guild_id: Some(TEST_GUILD_ID),
        }
    }

    pub fn author_name(mut self, name: &str) -> Self {
        self.author_name = name.to_string();
        self
    }

    /// Marks the author as a bot account.
    pub fn bot(mut self) -> Self {
        self.author_bot = true;
        self
    }

    /// Adds a user to the message's mention list.
    pub fn mention(mut self, user_id: u64, username: &str) -> Self {
        self.mentions.push(user_json(user_id, username, false));
        self
    }

    pub fn mention_everyone(mut self) -> Self {
        self.mention_everyone = true;
        self
    }

    /// Removes the guild ID, turning the message into a direct message.
    pub fn direct(mut self) -> Self {
        self.guild_id = None;
        self
    }

    /// Posts the message in another guild.
    pub fn guild(mut self, guild_id: u64) -> Self {
        self.guild_id = Some(guild_id);
        self
    }

    /// Builds the message.
    ///
    /// # Panics
    /// - If the JSON cannot be deserialized into a Message (indicates invalid test data)
    pub fn build(self) -> Message {
        let guild_id = self.guild_id.map(|id| id.to_string());

        serde_json::from_value(serde_json::json!({
            "id": self.message_id.to_string(),
            "channel_id": self.channel_id.to_string(),
            "guild_id": guild_id,
            "author": user_json(self.author_id, &self.author_name, self.author_bot),
            "content": self.content,
            "timestamp": "2026-01-01T12:00:00.000000+00:00",
            "edited_timestamp": null,
            "tts": false,
            "mention_everyone": self.mention_everyone,
            "mentions": self.mentions,
            "mention_roles": [],
            "mention_channels": [],
            "attachments": [],
            "embeds": [],
            "reactions": [],
            "pinned": false,
            "type": 0,
            "flags": 0,
            "components": [],
            "sticker_items": [],
        }))
        .expect("Failed to create test message - invalid JSON structure")
    }
}

/// Creates a guild message with default settings.
///
/// # Arguments
/// - `message_id` - Discord message ID
/// - `channel_id` - Channel the message was posted in
/// - `author_id` - Discord user ID of the author
/// - `author_name` - Username of the author
/// - `content` - Message content
pub fn create_test_message(
    message_id: u64,
    channel_id: u64,
    author_id: u64,
    author_name: &str,
    content: &str,
) -> Message {
    TestMessageBuilder::new(message_id, channel_id, author_id, content)
        .author_name(author_name)
        .build()
}
