//! Shared state handed to hooks and commands.

use std::sync::Arc;

use sea_orm::DatabaseConnection;
use serenity::all::{ChannelId, GuildId, Http, RoleId};

use crate::{config::Config, service::bot_log::BotLog};

/// Settings fixed at startup.
#[derive(Debug, Clone)]
pub struct BotSettings {
    /// Prefix marking a message as a command.
    pub prefix: String,
    /// When set, messages in the bot-log channel are processed as commands too.
    pub debug: bool,
    /// Role required for sensitive commands; `None` opens them to everyone.
    pub mod_role: Option<RoleId>,
    pub version: &'static str,
}

impl BotSettings {
    pub fn from_config(config: &Config) -> Self {
        Self {
            prefix: config.command_prefix.clone(),
            debug: config.debug,
            mod_role: config.mod_role_id.map(RoleId::new),
            version: env!("CARGO_PKG_VERSION"),
        }
    }
}

/// Everything a hook or command needs to act on the guild.
///
/// Cheap to clone; every field is a handle.
#[derive(Clone)]
pub struct BotContext {
    pub db: DatabaseConnection,
    pub http: Arc<Http>,
    pub guild_id: GuildId,
    pub log: Arc<BotLog>,
    pub settings: Arc<BotSettings>,
}

impl BotContext {
    /// Channel the bot reports to, if it was found at startup.
    pub fn log_channel(&self) -> Option<ChannelId> {
        self.log.channel()
    }
}
