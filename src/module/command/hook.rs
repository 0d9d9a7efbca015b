//! Message hook running prefix commands.

use std::{collections::HashMap, sync::Arc};

use serenity::all::{CreateMessage, Message, RoleId};
use serenity::async_trait;

use crate::{
    bot::{context::BotContext, event::GatewayEvent},
    error::AppError,
    hook::Hook,
};

use super::{code_block, Command, CommandOutput, Invocation};

/// Runs commands found in created messages.
pub struct CommandHook {
    ctx: BotContext,
    commands: HashMap<String, Arc<dyn Command>>,
}

impl CommandHook {
    /// Creates a hook for `commands`, keyed by lowercase name.
    ///
    /// A later command with the same name replaces an earlier one.
    pub fn new(ctx: BotContext, commands: &[Arc<dyn Command>]) -> Self {
        let commands = commands
            .iter()
            .map(|command| (command.info().name.to_lowercase(), command.clone()))
            .collect();

        Self { ctx, commands }
    }

    /// Looks up a command by name, ignoring case.
    pub fn resolve(&self, name: &str) -> Option<&Arc<dyn Command>> {
        self.commands.get(&name.to_lowercase())
    }

    /// Parses `message` into an invocation if the bot should act on it.
    ///
    /// Ignores bots, messages outside the guild, and messages in the bot-log channel
    /// unless debug mode is on.
    pub fn invocation_for(&self, message: &Message) -> Option<Invocation> {
        if message.author.bot {
            return None;
        }

        let guild = message.guild_id.filter(|id| *id == self.ctx.guild_id)?;

        if !self.ctx.settings.debug && Some(message.channel_id) == self.ctx.log_channel() {
            return None;
        }

        Invocation::parse(
            &self.ctx.settings.prefix,
            &message.content,
            message.author.id,
            message.channel_id,
            guild,
        )
    }

    async fn is_moderator(&self, message: &Message, role: RoleId) -> Result<bool, AppError> {
        if let Some(member) = &message.member {
            return Ok(member.roles.contains(&role));
        }

        let member = self.ctx.guild_id.member(&self.ctx.http, message.author.id).await?;

        Ok(member.roles.contains(&role))
    }

    async fn run(&self, message: &Message, invocation: Invocation) -> Result<(), AppError> {
        let Some(command) = self.resolve(&invocation.name) else {
            return Ok(());
        };
        let info = command.info();

        if info.sensitive {
            if let Some(role) = self.ctx.settings.mod_role {
                if !self.is_moderator(message, role).await? {
                    return self
                        .reply(
                            message,
                            CommandOutput::public(code_block(
                                "You are not allowed to use that command.",
                            )),
                        )
                        .await;
                }
            }
        }

        tracing::debug!(
            "Running command {} for user {} in channel {}",
            info.name,
            message.author.id,
            message.channel_id
        );

        match command.process(&self.ctx, &invocation).await {
            Ok(output) => self.reply(message, output).await,
            Err(err) => {
                self.reply(
                    message,
                    CommandOutput::public(code_block(&format!("Error: {}", err))),
                )
                .await?;
                self.ctx
                    .log
                    .log_error(&format!("running command {}", info.name), &err)
                    .await;
                Ok(())
            }
        }
    }

    async fn reply(&self, message: &Message, output: CommandOutput) -> Result<(), AppError> {
        if output.text.is_empty() {
            return Ok(());
        }

        let builder = CreateMessage::new().content(output.text);

        if output.private {
            message
                .author
                .direct_message(&self.ctx.http, builder)
                .await?;
        } else {
            message
                .channel_id
                .send_message(&self.ctx.http, builder)
                .await?;
        }

        Ok(())
    }
}

#[async_trait]
impl Hook<GatewayEvent> for CommandHook {
    async fn handle(&self, payload: &GatewayEvent) -> Result<(), AppError> {
        let GatewayEvent::MessageCreate(message) = payload else {
            return Ok(());
        };

        let Some(invocation) = self.invocation_for(message) else {
            return Ok(());
        };

        self.run(message, invocation).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::module::test::{test_context, EchoCommand, LOG_CHANNEL};
    use test_utils::serenity::{create_test_message, message::TestMessageBuilder};

    async fn hook(debug: bool) -> CommandHook {
        let commands: Vec<Arc<dyn Command>> = vec![Arc::new(EchoCommand)];
        CommandHook::new(test_context(debug).await, &commands)
    }

    #[tokio::test]
    async fn resolves_commands_case_insensitively() {
        let hook = hook(false).await;

        assert!(hook.resolve("echo").is_some());
        assert!(hook.resolve("ECHO").is_some());
        assert!(hook.resolve("unknown").is_none());
    }

    #[tokio::test]
    async fn parses_prefixed_guild_messages() {
        let hook = hook(false).await;
        let message = create_test_message(1, 100, 42, "Sweetie", "!echo hi there");

        let invocation = hook.invocation_for(&message).unwrap();

        assert_eq!(invocation.name, "echo");
        assert_eq!(invocation.joined(0), "hi there");
    }

    #[tokio::test]
    async fn ignores_bots_and_direct_messages() {
        let hook = hook(false).await;

        let from_bot = TestMessageBuilder::new(1, 100, 42, "!echo hi").bot().build();
        let direct = TestMessageBuilder::new(2, 100, 42, "!echo hi").direct().build();

        assert!(hook.invocation_for(&from_bot).is_none());
        assert!(hook.invocation_for(&direct).is_none());
    }

    #[tokio::test]
    async fn ignores_log_channel_unless_debugging() {
        let message = create_test_message(1, LOG_CHANNEL, 42, "Sweetie", "!echo hi");

        assert!(hook(false).await.invocation_for(&message).is_none());
        assert!(hook(true).await.invocation_for(&message).is_some());
    }
}
