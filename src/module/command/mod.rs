//! Prefix command layer.
//!
//! A [`CommandHook`] is registered on message-created events. It parses messages that
//! start with the configured prefix into an [`Invocation`], looks the command up by name
//! (case-insensitive), checks permissions and sends the [`CommandOutput`] back either to
//! the channel or privately to the author.

pub mod args;
pub mod hook;

use serenity::all::{ChannelId, GuildId, UserId};
use serenity::async_trait;

use crate::{bot::context::BotContext, error::AppError};

pub use args::{parse_arguments, Argument};
pub use hook::CommandHook;

/// Wraps text in a code block, the format every command reply uses.
pub fn code_block(text: &str) -> String {
    format!("```\n{}```", text)
}

/// Static description of a command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandInfo {
    /// Display name; matched case-insensitively.
    pub name: &'static str,
    /// One line description.
    pub usage: &'static str,
    /// Restricted to holders of the moderator role.
    pub sensitive: bool,
}

/// Reply produced by a command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandOutput {
    pub text: String,
    /// Sent as a direct message to the author instead of to the channel.
    pub private: bool,
}

impl CommandOutput {
    pub fn public(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            private: false,
        }
    }

    /// Private when `private` is set, public otherwise.
    pub fn with_privacy(text: impl Into<String>, private: bool) -> Self {
        Self {
            text: text.into(),
            private,
        }
    }
}

/// A parsed command message.
#[derive(Debug, Clone)]
pub struct Invocation {
    /// Command name as typed, without the prefix.
    pub name: String,
    /// Arguments following the command name.
    pub args: Vec<Argument>,
    /// Full message content the offsets refer to.
    pub content: String,
    pub author: UserId,
    pub channel: ChannelId,
    pub guild: GuildId,
}

impl Invocation {
    /// Parses `content` as a command if it starts with `prefix`.
    ///
    /// # Returns
    /// - `Some(Invocation)` - Content starts with the prefix followed by a command name
    /// - `None` - Not a command
    pub fn parse(
        prefix: &str,
        content: &str,
        author: UserId,
        channel: ChannelId,
        guild: GuildId,
    ) -> Option<Self> {
        if prefix.is_empty() || !content.starts_with(prefix) {
            return None;
        }

        let mut args = parse_arguments(content, prefix.len()).into_iter();
        let name = args.next()?;
        if name.offset != prefix.len() || name.text.is_empty() {
            return None;
        }

        Some(Self {
            name: name.text,
            args: args.collect(),
            content: content.to_string(),
            author,
            channel,
            guild,
        })
    }

    /// Text of the argument at `index`.
    pub fn arg(&self, index: usize) -> Option<&str> {
        self.args.get(index).map(|a| a.text.as_str())
    }

    pub fn len(&self) -> usize {
        self.args.len()
    }

    pub fn is_empty(&self) -> bool {
        self.args.is_empty()
    }

    /// The rest of the line starting at argument `index`.
    ///
    /// For the last argument this is the argument itself, so a trailing quoted argument
    /// loses its quotes. Otherwise it is the raw message text from the argument onward.
    pub fn rest(&self, index: usize) -> Option<String> {
        let argument = self.args.get(index)?;

        if index + 1 == self.args.len() {
            return Some(argument.text.clone());
        }

        self.content
            .get(argument.offset..)
            .map(|rest| rest.trim().to_string())
    }

    /// Arguments from `index` onward joined by single spaces.
    pub fn joined(&self, index: usize) -> String {
        self.args
            .iter()
            .skip(index)
            .map(|a| a.text.as_str())
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// A prefix command.
#[async_trait]
pub trait Command: Send + Sync {
    fn info(&self) -> CommandInfo;

    /// Runs the command.
    ///
    /// User mistakes are reported through the returned output. Errors are reserved for
    /// failures the user cannot fix; they are shown as an error reply and reported to the
    /// bot log.
    async fn process(
        &self,
        ctx: &BotContext,
        invocation: &Invocation,
    ) -> Result<CommandOutput, AppError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(content: &str) -> Option<Invocation> {
        Invocation::parse(
            "!",
            content,
            UserId::new(42),
            ChannelId::new(100),
            GuildId::new(1),
        )
    }

    #[test]
    fn parses_name_and_arguments() {
        let invocation = parse("!Vote ponies \"Twilight Sparkle\"").unwrap();

        assert_eq!(invocation.name, "Vote");
        assert_eq!(invocation.arg(0), Some("ponies"));
        assert_eq!(invocation.arg(1), Some("Twilight Sparkle"));
        assert_eq!(invocation.arg(2), None);
    }

    #[test]
    fn ignores_non_commands() {
        assert!(parse("hello").is_none());
        assert!(parse("!").is_none());
        assert!(parse("! vote").is_none());
        assert!(parse("!\"\" vote").is_none());
    }

    #[test]
    fn rest_returns_raw_tail() {
        let invocation = parse("!poll  My Little   Poll ").unwrap();

        assert_eq!(invocation.rest(0).as_deref(), Some("My Little   Poll"));
        assert_eq!(invocation.rest(2).as_deref(), Some("Poll"));
        assert_eq!(invocation.rest(3), None);
    }

    #[test]
    fn rest_strips_quotes_of_last_argument() {
        let invocation = parse("!vote ponies \"Twilight Sparkle\"").unwrap();

        assert_eq!(invocation.rest(1).as_deref(), Some("Twilight Sparkle"));
    }

    #[test]
    fn joins_arguments() {
        let invocation = parse("!add quotes  hello   world").unwrap();

        assert_eq!(invocation.joined(1), "hello world");
        assert_eq!(invocation.joined(5), "");
    }

    #[test]
    fn supports_multi_character_prefix() {
        let invocation = Invocation::parse(
            "sb!",
            "sb!roll d6",
            UserId::new(42),
            ChannelId::new(100),
            GuildId::new(1),
        )
        .unwrap();

        assert_eq!(invocation.name, "roll");
        assert_eq!(invocation.arg(0), Some("d6"));
    }
}
