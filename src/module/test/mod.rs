//! Shared fixtures for module and command tests.

use std::sync::Arc;

use sea_orm::DatabaseConnection;
use serenity::all::{ChannelId, GuildId, Http, UserId};
use serenity::async_trait;
use test_utils::{builder::TestBuilder, serenity::TEST_GUILD_ID};

use crate::{
    bot::context::{BotContext, BotSettings},
    error::AppError,
    service::bot_log::BotLog,
};

use super::command::{Command, CommandInfo, CommandOutput, Invocation};

mod registry;

/// Bot-log channel of the test context.
pub const LOG_CHANNEL: u64 = 900;

/// Author ID used for invocations built by [`invocation`].
pub const AUTHOR: u64 = 42;

/// Builds a context around `db` whose HTTP client is never contacted.
pub fn context_with_db(db: DatabaseConnection, debug: bool) -> BotContext {
    let http = Arc::new(Http::new(""));

    BotContext {
        db,
        http: http.clone(),
        guild_id: GuildId::new(TEST_GUILD_ID),
        log: Arc::new(BotLog::new(http, Some(ChannelId::new(LOG_CHANNEL)), 60)),
        settings: Arc::new(BotSettings {
            prefix: "!".to_string(),
            debug,
            mod_role: None,
            version: "test",
        }),
    }
}

/// Builds a context over an in-memory database holding every table.
pub async fn test_context(debug: bool) -> BotContext {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .with_table(entity::prelude::ChatLog)
        .with_poll_tables()
        .with_collection_tables()
        .build()
        .await
        .unwrap();

    context_with_db(test.db.unwrap(), debug)
}

/// Parses `content` as if posted by [`AUTHOR`] in the test guild.
pub fn invocation(content: &str) -> Invocation {
    Invocation::parse(
        "!",
        content,
        UserId::new(AUTHOR),
        ChannelId::new(100),
        GuildId::new(TEST_GUILD_ID),
    )
    .unwrap()
}

/// Command echoing its arguments back.
pub struct EchoCommand;

#[async_trait]
impl Command for EchoCommand {
    fn info(&self) -> CommandInfo {
        CommandInfo {
            name: "Echo",
            usage: "Echoes its arguments.",
            sensitive: false,
        }
    }

    async fn process(
        &self,
        _ctx: &BotContext,
        invocation: &Invocation,
    ) -> Result<CommandOutput, AppError> {
        Ok(CommandOutput::public(invocation.joined(0)))
    }
}
