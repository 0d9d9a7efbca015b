//! Polling system: guild polls with numbered options and one vote per user.

mod render;


use std::sync::Arc;

use serenity::async_trait;

use crate::{bot::context::BotContext, data::poll::PollRepository, error::AppError};

use self::render::render_results;

use super::{
    command::{code_block, Command, CommandInfo, CommandOutput, Invocation},
    Module,
};

/// Listings longer than this are sent privately.
const MAX_PUBLIC_LINES: usize = 12;

/// Result listings longer than this are sent privately.
const MAX_PUBLIC_RESULT_LINES: usize = 11;

pub struct PollsModule;

impl Module for PollsModule {
    fn name(&self) -> &'static str {
        "Polls"
    }

    fn description(&self) -> &'static str {
        "Manages the polling system."
    }

    fn commands(&self) -> Vec<Arc<dyn Command>> {
        vec![
            Arc::new(PollCommand),
            Arc::new(CreatePollCommand),
            Arc::new(DeletePollCommand),
            Arc::new(VoteCommand),
            Arc::new(ResultsCommand),
            Arc::new(AddOptionCommand),
        ]
    }
}

/// Reply used when the database does not answer.
async fn database_outage(ctx: &BotContext) -> Option<CommandOutput> {
    match ctx.db.ping().await {
        Ok(()) => None,
        Err(e) => {
            tracing::warn!("Database ping failed: {}", e);
            Some(CommandOutput::public(code_block(
                "A temporary database outage is preventing this command from being executed.",
            )))
        }
    }
}

pub struct PollCommand;

#[async_trait]
impl Command for PollCommand {
    fn info(&self) -> CommandInfo {
        CommandInfo {
            name: "Poll",
            usage: "Displays poll description and options.",
            sensitive: false,
        }
    }

    async fn process(
        &self,
        ctx: &BotContext,
        invocation: &Invocation,
    ) -> Result<CommandOutput, AppError> {
        if let Some(outage) = database_outage(ctx).await {
            return Ok(outage);
        }

        let repo = PollRepository::new(&ctx.db);
        let guild_id = invocation.guild.get();

        let Some(name) = invocation.rest(0) else {
            let polls = repo.get_by_guild_id(guild_id).await?;

            let mut lines = vec!["All active polls:".to_string()];
            lines.extend(polls.into_iter().map(|poll| poll.name));

            return Ok(CommandOutput::with_privacy(
                code_block(&lines.join("\n")),
                lines.len() > MAX_PUBLIC_LINES,
            ));
        };

        let Some(poll) = repo.find_by_name(guild_id, &name.to_lowercase()).await? else {
            return Ok(CommandOutput::public(code_block("That poll doesn't exist!")));
        };

        let mut lines = vec![poll.description];
        lines.extend(
            repo.get_options(poll.id)
                .await?
                .into_iter()
                .map(|option| format!("{}. {}", option.position, option.option)),
        );

        Ok(CommandOutput::with_privacy(
            lines.join("\n"),
            lines.len() > MAX_PUBLIC_LINES,
        ))
    }
}

pub struct CreatePollCommand;

#[async_trait]
impl Command for CreatePollCommand {
    fn info(&self) -> CommandInfo {
        CommandInfo {
            name: "CreatePoll",
            usage: "Creates a poll.",
            sensitive: true,
        }
    }

    async fn process(
        &self,
        ctx: &BotContext,
        invocation: &Invocation,
    ) -> Result<CommandOutput, AppError> {
        if let Some(outage) = database_outage(ctx).await {
            return Ok(outage);
        }

        let (Some(name), Some(description)) = (invocation.arg(0), invocation.arg(1)) else {
            return Ok(usage_error(ctx));
        };
        if invocation.len() < 3 {
            return Ok(usage_error(ctx));
        }

        let repo = PollRepository::new(&ctx.db);
        let guild_id = invocation.guild.get();
        let name = name.to_lowercase();

        if repo.find_by_name(guild_id, &name).await?.is_some() {
            return Ok(CommandOutput::public(code_block(
                "Error, poll name already used.",
            )));
        }

        let poll = repo.create(guild_id, &name, description).await?;

        for (position, option) in (1u64..).zip(invocation.args.iter().skip(2)) {
            if !repo.add_option(poll.id, position, &option.text).await? {
                return Ok(CommandOutput::public(code_block(&format!(
                    "Error adding duplicate option {}:{}. Each option must be unique!",
                    position, option.text
                ))));
            }
        }

        Ok(CommandOutput::public(code_block(&format!(
            "Successfully created {} poll.",
            name
        ))))
    }
}

fn usage_error(ctx: &BotContext) -> CommandOutput {
    CommandOutput::public(code_block(&format!(
        "You must provide a name, a description, and one or more options to create the poll. \
         Example: {}createpoll pollname \"Description With Space\" \"Option 1\" \"Option 2\"",
        ctx.settings.prefix
    )))
}

pub struct DeletePollCommand;

#[async_trait]
impl Command for DeletePollCommand {
    fn info(&self) -> CommandInfo {
        CommandInfo {
            name: "DeletePoll",
            usage: "Deletes a poll.",
            sensitive: true,
        }
    }

    async fn process(
        &self,
        ctx: &BotContext,
        invocation: &Invocation,
    ) -> Result<CommandOutput, AppError> {
        if let Some(outage) = database_outage(ctx).await {
            return Ok(outage);
        }

        let Some(name) = invocation.rest(0) else {
            return Ok(CommandOutput::public(code_block(
                "You have to give me a poll name to delete!",
            )));
        };

        let repo = PollRepository::new(&ctx.db);

        let Some(poll) = repo
            .find_by_name(invocation.guild.get(), &name.to_lowercase())
            .await?
        else {
            return Ok(CommandOutput::public(code_block("That poll doesn't exist!")));
        };

        repo.delete(poll.id).await?;

        Ok(CommandOutput::public(code_block(&format!(
            "Successfully removed {}.",
            name
        ))))
    }
}

pub struct VoteCommand;

#[async_trait]
impl Command for VoteCommand {
    fn info(&self) -> CommandInfo {
        CommandInfo {
            name: "Vote",
            usage: "Votes in a poll.",
            sensitive: false,
        }
    }

    async fn process(
        &self,
        ctx: &BotContext,
        invocation: &Invocation,
    ) -> Result<CommandOutput, AppError> {
        if let Some(outage) = database_outage(ctx).await {
            return Ok(outage);
        }

        let repo = PollRepository::new(&ctx.db);
        let guild_id = invocation.guild.get();
        let prefix = &ctx.settings.prefix;

        let (Some(name), Some(choice)) = (invocation.arg(0), invocation.rest(1)) else {
            let latest = repo
                .get_by_guild_id(guild_id)
                .await?
                .into_iter()
                .next()
                .map(|poll| format!(" The most recent poll is \"{}\".", poll.name))
                .unwrap_or_default();

            return Ok(CommandOutput::public(code_block(&format!(
                "You have to provide both a poll name and the option you want to vote for!{} \
                 Use {}poll without any arguments to list all active polls.",
                latest, prefix
            ))));
        };

        let name = name.to_lowercase();
        let Some(poll) = repo.find_by_name(guild_id, &name).await? else {
            return Ok(CommandOutput::public(code_block(&format!(
                "That poll doesn't exist! Use {}poll with no arguments to list all active polls.",
                prefix
            ))));
        };

        let position = match invocation.arg(1).and_then(|arg| arg.parse::<u64>().ok()) {
            Some(index) => {
                if !repo.option_exists(poll.id, index).await? {
                    return Ok(CommandOutput::public(code_block(&format!(
                        "That's not a valid option index! Use \"{}poll {}\" to get all \
                         available options for this poll.",
                        prefix, name
                    ))));
                }
                index
            }
            None => match repo.find_option_position(poll.id, &choice).await? {
                Some(position) => position,
                None => {
                    return Ok(CommandOutput::public(code_block(&format!(
                        "That's not one of the poll options! You have to either type in the \
                         exact name of the option you want, or provide the numeric index. \
                         Use \"{}poll {}\" to list the available options.",
                        prefix, name
                    ))));
                }
            },
        };

        repo.vote(poll.id, invocation.author.get(), position).await?;

        Ok(CommandOutput::public(code_block(&format!(
            "Voted! Use {}results to check the results.",
            prefix
        ))))
    }
}

pub struct ResultsCommand;

#[async_trait]
impl Command for ResultsCommand {
    fn info(&self) -> CommandInfo {
        CommandInfo {
            name: "Results",
            usage: "Gets poll results.",
            sensitive: false,
        }
    }

    async fn process(
        &self,
        ctx: &BotContext,
        invocation: &Invocation,
    ) -> Result<CommandOutput, AppError> {
        if let Some(outage) = database_outage(ctx).await {
            return Ok(outage);
        }

        let prefix = &ctx.settings.prefix;

        let Some(name) = invocation.rest(0) else {
            return Ok(CommandOutput::public(code_block(&format!(
                "You have to give me a valid poll name! Use \"{}poll\" to list active polls.",
                prefix
            ))));
        };

        let repo = PollRepository::new(&ctx.db);

        let Some(poll) = repo
            .find_by_name(invocation.guild.get(), &name.to_lowercase())
            .await?
        else {
            return Ok(CommandOutput::public(code_block(&format!(
                "That poll doesn't exist! Use \"{}poll\" to list active polls.",
                prefix
            ))));
        };

        let options = repo.get_options(poll.id).await?;
        let results = repo.get_results(poll.id).await?;
        let lines = render_results(&poll.description, &options, &results);

        Ok(CommandOutput::with_privacy(
            lines.join("\n"),
            lines.len() > MAX_PUBLIC_RESULT_LINES,
        ))
    }
}

pub struct AddOptionCommand;

#[async_trait]
impl Command for AddOptionCommand {
    fn info(&self) -> CommandInfo {
        CommandInfo {
            name: "AddOption",
            usage: "Appends an option to a poll.",
            sensitive: true,
        }
    }

    async fn process(
        &self,
        ctx: &BotContext,
        invocation: &Invocation,
    ) -> Result<CommandOutput, AppError> {
        if let Some(outage) = database_outage(ctx).await {
            return Ok(outage);
        }

        let Some(name) = invocation.arg(0) else {
            return Ok(CommandOutput::public(code_block(
                "You have to give me a poll name to add an option to!",
            )));
        };
        let Some(option) = invocation.rest(1) else {
            return Ok(CommandOutput::public(code_block(
                "You have to give me an option to add!",
            )));
        };

        let repo = PollRepository::new(&ctx.db);

        let Some(poll) = repo
            .find_by_name(invocation.guild.get(), &name.to_lowercase())
            .await?
        else {
            return Ok(CommandOutput::public(code_block("That poll doesn't exist!")));
        };

        if repo.append_option(poll.id, &option).await?.is_none() {
            return Ok(CommandOutput::public(code_block(
                "Another option is already called this! Options must be unique.",
            )));
        }

        Ok(CommandOutput::public(code_block(&format!(
            "Successfully added {} to {}.",
            option, name
        ))))
    }
}
