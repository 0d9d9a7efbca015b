//! Reports guild setting changes to the bot log.
//!
//! The channel directory built at startup is not refreshed here; renamed or new channels
//! only take effect for channel-scoped hooks after a restart.

use std::sync::Arc;

use serenity::all::GuildId;
use serenity::async_trait;

use crate::{
    bot::event::GatewayEvent,
    error::AppError,
    hook::{EventKind, Hook},
    service::bot_log::BotLog,
};

use super::{HookRegistrar, Module};

pub struct GuildModule {
    hook: Arc<GuildUpdateHook>,
}

impl GuildModule {
    pub fn new(log: Arc<BotLog>, guild_id: GuildId) -> Self {
        Self {
            hook: Arc::new(GuildUpdateHook { log, guild_id }),
        }
    }
}

impl Module for GuildModule {
    fn name(&self) -> &'static str {
        "Guild"
    }

    fn description(&self) -> &'static str {
        "Reports guild setting changes."
    }

    fn register(&self, registrar: &mut HookRegistrar<'_>) {
        registrar.register_global(EventKind::GuildUpdate, self.hook.clone());
    }
}

pub struct GuildUpdateHook {
    log: Arc<BotLog>,
    guild_id: GuildId,
}

impl GuildUpdateHook {
    /// Bot-log line for an update of the served guild.
    fn report(&self, payload: &GatewayEvent) -> Option<String> {
        match payload {
            GatewayEvent::GuildUpdate(guild) if guild.id == self.guild_id => Some(format!(
                "Guild update detected for {}, restart to pick up channel changes",
                guild.name
            )),
            _ => None,
        }
    }
}

#[async_trait]
impl Hook<GatewayEvent> for GuildUpdateHook {
    async fn handle(&self, payload: &GatewayEvent) -> Result<(), AppError> {
        if let Some(report) = self.report(payload) {
            self.log.log(&report).await;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use serenity::all::{ChannelId, Http};
    use test_utils::serenity::{create_test_partial_guild, TEST_GUILD_ID};

    use super::*;
    use crate::{
        hook::HookRegistry,
        module::{HookRegistrar, Module},
    };

    fn hook() -> GuildUpdateHook {
        GuildUpdateHook {
            log: Arc::new(BotLog::new(Arc::new(Http::new("")), None, 60)),
            guild_id: GuildId::new(TEST_GUILD_ID),
        }
    }

    /// Tests that the module hooks guild updates in every channel.
    ///
    /// Expected: one global guild-update hook and nothing else
    #[test]
    fn registers_global_guild_update_hook() {
        let module = GuildModule::new(
            Arc::new(BotLog::new(Arc::new(Http::new("")), None, 60)),
            GuildId::new(TEST_GUILD_ID),
        );
        let directory: HashMap<String, ChannelId> = HashMap::new();
        let mut hooks = HookRegistry::new();
        let mut unscoped = Vec::new();

        module.register(&mut HookRegistrar {
            hooks: &mut hooks,
            directory: &directory,
            module: module.name(),
            unscoped: &mut unscoped,
        });

        assert_eq!(hooks.hook_count(), 1);
        let entries = hooks.entries(EventKind::GuildUpdate);
        assert_eq!(entries.len(), 1);
        assert!(entries[0].scope.is_global());
        assert!(unscoped.is_empty());
    }

    /// Tests the report for an update of the served guild.
    ///
    /// Expected: report names the guild and asks for a restart
    #[test]
    fn reports_served_guild_update() {
        let guild = create_test_partial_guild(TEST_GUILD_ID, "Crusaders");

        assert_eq!(
            hook().report(&GatewayEvent::GuildUpdate(guild)),
            Some("Guild update detected for Crusaders, restart to pick up channel changes".to_string())
        );
    }

    /// Tests that updates of other guilds are not reported.
    ///
    /// Expected: no report
    #[test]
    fn ignores_foreign_guild_update() {
        let guild = create_test_partial_guild(7, "Elsewhere");

        assert_eq!(hook().report(&GatewayEvent::GuildUpdate(guild)), None);
    }

    /// Tests that events other than guild updates pass through untouched.
    ///
    /// Expected: Ok without reporting
    #[tokio::test]
    async fn ignores_other_events() {
        let hook = hook();
        let message = test_utils::serenity::create_test_message(1, 100, 42, "Sweetie", "hi");
        let event = GatewayEvent::MessageCreate(message);

        assert_eq!(hook.report(&event), None);
        assert!(hook.handle(&event).await.is_ok());
    }
}
