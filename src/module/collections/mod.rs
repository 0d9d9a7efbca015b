//! Named per-guild lists of strings, with commands to edit, list, search and pick from them.
//!
//! Collection names are lowercased on every command. Items are stored verbatim and echoed
//! back through [`sanitize_output`] so a stored item can never ping anyone or break out of
//! the reply's code block.

#[cfg(test)]
mod test;

use std::sync::Arc;

use rand::seq::IndexedRandom;
use serenity::async_trait;

use crate::{
    bot::context::BotContext,
    data::collection::CollectionRepository,
    error::AppError,
    model::collection::Collection,
    util::sanitize::sanitize_output,
};

use super::{
    command::{Command, CommandInfo, CommandOutput, Invocation},
    Module,
};

/// Search results above this count are sent privately.
const MAX_PUBLIC_SEARCH_RESULTS: usize = 6;

/// Collections `pick` refuses to draw from.
const UNPICKABLE: [&str; 2] = ["spoiler", "emote"];

/// Collection `searchcollection` refuses to search.
const UNSEARCHABLE: &str = "spoiler";

pub struct CollectionsModule;

impl Module for CollectionsModule {
    fn name(&self) -> &'static str {
        "Collections"
    }

    fn description(&self) -> &'static str {
        "Manages named lists of items."
    }

    fn commands(&self) -> Vec<Arc<dyn Command>> {
        vec![
            Arc::new(AddCommand),
            Arc::new(RemoveCommand),
            Arc::new(CollectionsCommand),
            Arc::new(PickCommand),
            Arc::new(NewCommand),
            Arc::new(SearchCollectionCommand),
        ]
    }
}

fn reply(text: impl AsRef<str>) -> CommandOutput {
    CommandOutput::public(format!("```{}```", text.as_ref()))
}

async fn find(ctx: &BotContext, invocation: &Invocation, name: &str) -> Result<Option<Collection>, AppError> {
    Ok(CollectionRepository::new(&ctx.db)
        .find_by_name(invocation.guild.get(), name)
        .await?)
}

/// Lists every collection of the guild.
async fn list_collections(ctx: &BotContext, invocation: &Invocation) -> Result<CommandOutput, AppError> {
    let names = CollectionRepository::new(&ctx.db)
        .get_names(invocation.guild.get())
        .await?;

    Ok(reply(format!(
        "No collection specified. All collections:\n{}",
        sanitize_output(&names.join("\n"))
    )))
}

pub struct AddCommand;

#[async_trait]
impl Command for AddCommand {
    fn info(&self) -> CommandInfo {
        CommandInfo {
            name: "Add",
            usage: "Adds a line to a collection.",
            sensitive: true,
        }
    }

    async fn process(
        &self,
        ctx: &BotContext,
        invocation: &Invocation,
    ) -> Result<CommandOutput, AppError> {
        let Some(name) = invocation.arg(0) else {
            return Ok(reply("No collection given"));
        };
        if invocation.len() < 2 {
            return Ok(reply("Can't add empty string!"));
        }

        let name = name.to_lowercase();
        let Some(collection) = find(ctx, invocation, &name).await? else {
            return Ok(reply("That collection does not exist!"));
        };

        let item = invocation.joined(1);
        let repo = CollectionRepository::new(&ctx.db);
        repo.add_item(collection.id, &item).await?;
        let length = repo.count_items(collection.id).await?;

        Ok(reply(sanitize_output(&format!(
            "Added {} to {}. Length of {}: {}",
            item, name, name, length
        ))))
    }
}

pub struct RemoveCommand;

#[async_trait]
impl Command for RemoveCommand {
    fn info(&self) -> CommandInfo {
        CommandInfo {
            name: "Remove",
            usage: "Removes a line from a collection.",
            sensitive: true,
        }
    }

    async fn process(
        &self,
        ctx: &BotContext,
        invocation: &Invocation,
    ) -> Result<CommandOutput, AppError> {
        let Some(name) = invocation.arg(0) else {
            return Ok(reply("No collection given"));
        };
        if invocation.len() < 2 {
            return Ok(reply("Can't remove an empty string!"));
        }

        let name = name.to_lowercase();
        let Some(collection) = find(ctx, invocation, &name).await? else {
            return Ok(reply("That collection does not exist!"));
        };

        let item = invocation.joined(1);
        let repo = CollectionRepository::new(&ctx.db);
        if !repo.remove_item(collection.id, &item).await? {
            return Ok(reply(sanitize_output(&format!("Could not find {}!", item))));
        }
        let length = repo.count_items(collection.id).await?;

        Ok(reply(sanitize_output(&format!(
            "Removed {} from {}. Length of {}: {}",
            item, name, name, length
        ))))
    }
}

pub struct CollectionsCommand;

#[async_trait]
impl Command for CollectionsCommand {
    fn info(&self) -> CommandInfo {
        CommandInfo {
            name: "Collections",
            usage: "Lists all collections.",
            sensitive: false,
        }
    }

    async fn process(
        &self,
        ctx: &BotContext,
        invocation: &Invocation,
    ) -> Result<CommandOutput, AppError> {
        let Some(name) = invocation.arg(0) else {
            return list_collections(ctx, invocation).await;
        };

        let name = name.to_lowercase();
        let Some(collection) = find(ctx, invocation, &name).await? else {
            return Ok(reply(
                "That collection doesn't exist! Use this command with no arguments to see a list of all collections.",
            ));
        };

        let items = CollectionRepository::new(&ctx.db)
            .get_items(collection.id)
            .await?;

        Ok(reply(sanitize_output(&format!(
            "{} contains:\n{}",
            name,
            items.join("\n")
        ))))
    }
}

pub struct PickCommand;

#[async_trait]
impl Command for PickCommand {
    fn info(&self) -> CommandInfo {
        CommandInfo {
            name: "Pick",
            usage: "Picks a random item.",
            sensitive: false,
        }
    }

    async fn process(
        &self,
        ctx: &BotContext,
        invocation: &Invocation,
    ) -> Result<CommandOutput, AppError> {
        let Some(name) = invocation.arg(0) else {
            return list_collections(ctx, invocation).await;
        };

        let name = name.to_lowercase();
        if UNPICKABLE.contains(&name.as_str()) {
            return Ok(reply("You cannot pick an item from that collection."));
        }

        let Some(collection) = find(ctx, invocation, &name).await? else {
            return Ok(reply(
                "That collection doesn't exist! Use this command with no arguments to see a list of all collections.",
            ));
        };

        let items = CollectionRepository::new(&ctx.db)
            .get_items(collection.id)
            .await?;

        match items.choose(&mut rand::rng()) {
            Some(item) => Ok(CommandOutput::public(sanitize_output(item))),
            None => Ok(reply("That collection is empty.")),
        }
    }
}

pub struct NewCommand;

#[async_trait]
impl Command for NewCommand {
    fn info(&self) -> CommandInfo {
        CommandInfo {
            name: "New",
            usage: "Creates a new collection.",
            sensitive: true,
        }
    }

    async fn process(
        &self,
        ctx: &BotContext,
        invocation: &Invocation,
    ) -> Result<CommandOutput, AppError> {
        let Some(name) = invocation.arg(0) else {
            return Ok(reply("You have to provide a new collection name."));
        };

        let name = name.to_lowercase();
        let created = CollectionRepository::new(&ctx.db)
            .create(invocation.guild.get(), &name)
            .await?;

        match created {
            Some(collection) => Ok(reply(sanitize_output(&format!(
                "Created the {} collection.",
                collection.name
            )))),
            None => Ok(reply("That collection already exists!")),
        }
    }
}

pub struct SearchCollectionCommand;

#[async_trait]
impl Command for SearchCollectionCommand {
    fn info(&self) -> CommandInfo {
        CommandInfo {
            name: "SearchCollection",
            usage: "Searches a collection.",
            sensitive: false,
        }
    }

    async fn process(
        &self,
        ctx: &BotContext,
        invocation: &Invocation,
    ) -> Result<CommandOutput, AppError> {
        let Some(name) = invocation.arg(0) else {
            return Ok(reply("You have to provide a new collection name."));
        };
        if invocation.len() < 2 {
            return Ok(reply(format!(
                "You have to provide something to search for (use {}collections to dump the contents of a collection).",
                ctx.settings.prefix
            )));
        }

        let name = name.to_lowercase();
        if name == UNSEARCHABLE {
            return Ok(reply("You can't search in that collection."));
        }

        let Some(collection) = find(ctx, invocation, &name).await? else {
            return Ok(reply(format!(
                "That collection doesn't exist! Use {}collections without any arguments to list them.",
                ctx.settings.prefix
            )));
        };

        let results = CollectionRepository::new(&ctx.db)
            .search(collection.id, &invocation.joined(1))
            .await?;

        if results.is_empty() {
            return Ok(reply(sanitize_output(&format!(
                "No results found in the {} collection.",
                name
            ))));
        }

        Ok(CommandOutput::with_privacy(
            format!(
                "```The following collection entries match your query:\n{}```",
                sanitize_output(&results.join("\n"))
            ),
            results.len() > MAX_PUBLIC_SEARCH_RESULTS,
        ))
    }
}
