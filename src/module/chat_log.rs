//! Persists every guild message and edit to the chat log table.

use std::sync::Arc;

use chrono::Utc;
use sea_orm::DatabaseConnection;
use serenity::all::{ChannelId, GuildId, Message, MessageUpdateEvent, User};
use serenity::async_trait;

use crate::{
    bot::event::GatewayEvent,
    data::chat_log::ChatLogRepository,
    error::AppError,
    hook::{EventKind, Hook},
    model::chat_log::LogMessageParam,
    util::sanitize::replace_mentions,
};

use super::{HookRegistrar, Module};

pub struct ChatLogModule {
    hook: Arc<ChatLogHook>,
}

impl ChatLogModule {
    /// Creates the module logging messages posted in `guild_id`.
    ///
    /// Messages in `log_channel` are never stored.
    pub fn new(db: DatabaseConnection, guild_id: GuildId, log_channel: Option<ChannelId>) -> Self {
        Self {
            hook: Arc::new(ChatLogHook {
                db,
                guild_id,
                log_channel,
            }),
        }
    }
}

impl Module for ChatLogModule {
    fn name(&self) -> &'static str {
        "Chat Log"
    }

    fn description(&self) -> &'static str {
        "Logs all messages and edits."
    }

    fn register(&self, registrar: &mut HookRegistrar<'_>) {
        registrar.register_global(EventKind::MessageCreate, self.hook.clone());
        registrar.register_global(EventKind::MessageUpdate, self.hook.clone());
    }
}

pub struct ChatLogHook {
    db: DatabaseConnection,
    guild_id: GuildId,
    log_channel: Option<ChannelId>,
}

impl ChatLogHook {
    fn is_log_channel(&self, channel_id: ChannelId) -> bool {
        self.log_channel == Some(channel_id)
    }

    async fn log_created(&self, message: &Message) -> Result<(), AppError> {
        if self.is_log_channel(message.channel_id) {
            return Ok(());
        }

        let param = LogMessageParam {
            message_id: message.id.get(),
            author_id: message.author.id.get(),
            channel_id: message.channel_id.get(),
            content: readable_content(&message.content, &message.mentions),
            mention_everyone: message.mention_everyone,
            timestamp: message.timestamp.to_utc(),
        };

        ChatLogRepository::new(&self.db).log_message(param).await
    }

    async fn log_updated(&self, event: &MessageUpdateEvent) -> Result<(), AppError> {
        if self.is_log_channel(event.channel_id) {
            return Ok(());
        }

        // Embed-only updates carry neither author nor content
        let (Some(author), Some(content)) = (&event.author, &event.content) else {
            return Ok(());
        };

        let mentions = event.mentions.as_deref().unwrap_or_default();

        let param = LogMessageParam {
            message_id: event.id.get(),
            author_id: author.id.get(),
            channel_id: event.channel_id.get(),
            content: readable_content(content, mentions),
            mention_everyone: event.mention_everyone.unwrap_or(false),
            timestamp: event
                .timestamp
                .map(|t| t.to_utc())
                .unwrap_or_else(Utc::now),
        };

        ChatLogRepository::new(&self.db).log_message(param).await
    }
}

fn readable_content(content: &str, mentions: &[User]) -> String {
    replace_mentions(
        content,
        mentions.iter().map(|user| (user.id.get(), user.name.as_str())),
    )
}

#[async_trait]
impl Hook<GatewayEvent> for ChatLogHook {
    async fn handle(&self, payload: &GatewayEvent) -> Result<(), AppError> {
        // Direct messages and other guilds are never logged
        if !payload.is_from(self.guild_id) {
            return Ok(());
        }

        match payload {
            GatewayEvent::MessageCreate(message) => self.log_created(message).await,
            GatewayEvent::MessageUpdate(event) => self.log_updated(event).await,
            _ => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_utils::{
        builder::TestBuilder,
        serenity::{TestMessageBuilder, TEST_GUILD_ID},
    };

    const LOG_CHANNEL: u64 = 900;

    async fn hook() -> (ChatLogHook, DatabaseConnection) {
        let test = TestBuilder::new()
            .with_table(entity::prelude::ChatLog)
            .build()
            .await
            .unwrap();
        let db = test.db.unwrap();

        let hook = ChatLogHook {
            db: db.clone(),
            guild_id: GuildId::new(TEST_GUILD_ID),
            log_channel: Some(ChannelId::new(LOG_CHANNEL)),
        };

        (hook, db)
    }

    fn update(message_id: u64, content: Option<&str>, with_author: bool) -> MessageUpdateEvent {
        update_in(TEST_GUILD_ID, message_id, content, with_author)
    }

    fn update_in(
        guild_id: u64,
        message_id: u64,
        content: Option<&str>,
        with_author: bool,
    ) -> MessageUpdateEvent {
        let mut json = serde_json::json!({
            "id": message_id.to_string(),
            "channel_id": "100",
            "guild_id": guild_id.to_string(),
        });

        if with_author {
            json["author"] = serde_json::json!({
                "id": "42",
                "username": "Sweetie",
                "discriminator": "0",
                "avatar": null,
            });
        }
        if let Some(content) = content {
            json["content"] = serde_json::json!(content);
        }

        serde_json::from_value(json)
            .expect("Failed to create test message update - invalid JSON structure")
    }

    /// Tests logging a created message with a user mention.
    ///
    /// Expected: row stored with the mention replaced by the username
    #[tokio::test]
    async fn logs_created_message_with_readable_mentions() {
        let (hook, db) = hook().await;
        let message = TestMessageBuilder::new(1, 100, 42, "hi <@7>")
            .mention(7, "Scootaloo")
            .mention_everyone()
            .build();

        hook.handle(&GatewayEvent::MessageCreate(message))
            .await
            .unwrap();

        let logged = ChatLogRepository::new(&db)
            .find_by_message_id(1)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(logged.content, "hi @Scootaloo");
        assert_eq!(logged.author_id, 42);
        assert_eq!(logged.channel_id, 100);
        assert!(logged.mention_everyone);
    }

    /// Tests that the bot-log channel is never logged.
    ///
    /// Expected: no row stored
    #[tokio::test]
    async fn skips_log_channel() {
        let (hook, db) = hook().await;
        let message = TestMessageBuilder::new(1, LOG_CHANNEL, 42, "report").build();

        hook.handle(&GatewayEvent::MessageCreate(message))
            .await
            .unwrap();

        let logged = ChatLogRepository::new(&db).find_by_message_id(1).await.unwrap();
        assert!(logged.is_none());
    }

    /// Tests that an edit overwrites the content of the logged message.
    ///
    /// Expected: content replaced, original timestamp kept
    #[tokio::test]
    async fn edit_replaces_logged_content() {
        let (hook, db) = hook().await;
        let message = TestMessageBuilder::new(1, 100, 42, "tpyo").build();
        let created_at = message.timestamp.to_utc();

        hook.handle(&GatewayEvent::MessageCreate(message))
            .await
            .unwrap();
        hook.handle(&GatewayEvent::MessageUpdate(update(1, Some("typo"), true)))
            .await
            .unwrap();

        let logged = ChatLogRepository::new(&db)
            .find_by_message_id(1)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(logged.content, "typo");
        assert_eq!(logged.timestamp, created_at);
    }

    /// Tests that updates without author or content are ignored.
    ///
    /// Expected: no row stored for either update
    #[tokio::test]
    async fn ignores_partial_updates() {
        let (hook, db) = hook().await;

        hook.handle(&GatewayEvent::MessageUpdate(update(1, None, true)))
            .await
            .unwrap();
        hook.handle(&GatewayEvent::MessageUpdate(update(2, Some("text"), false)))
            .await
            .unwrap();

        let repo = ChatLogRepository::new(&db);
        assert!(repo.find_by_message_id(1).await.unwrap().is_none());
        assert!(repo.find_by_message_id(2).await.unwrap().is_none());
    }

    /// Tests that direct messages and messages from other guilds are not logged.
    ///
    /// Expected: no row stored for the DM, the foreign message or the foreign edit
    #[tokio::test]
    async fn ignores_direct_and_foreign_guild_messages() {
        let (hook, db) = hook().await;
        let direct = TestMessageBuilder::new(77, 555, 42, "secret dm").direct().build();
        let foreign = TestMessageBuilder::new(78, 100, 42, "elsewhere").guild(7).build();

        hook.handle(&GatewayEvent::MessageCreate(direct))
            .await
            .unwrap();
        hook.handle(&GatewayEvent::MessageCreate(foreign))
            .await
            .unwrap();
        hook.handle(&GatewayEvent::MessageUpdate(update_in(7, 79, Some("edit"), true)))
            .await
            .unwrap();

        let repo = ChatLogRepository::new(&db);
        assert!(repo.find_by_message_id(77).await.unwrap().is_none());
        assert!(repo.find_by_message_id(78).await.unwrap().is_none());
        assert!(repo.find_by_message_id(79).await.unwrap().is_none());
    }
}
