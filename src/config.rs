use std::str::FromStr;

use crate::error::{config::ConfigError, AppError};

const DEFAULT_COMMAND_PREFIX: &str = "!";
const DEFAULT_LOG_CHANNEL: &str = "bot-log";
const DEFAULT_ERROR_REPORT_INTERVAL: u64 = 60;

pub struct Config {
    pub discord_bot_token: String,
    pub discord_guild_id: u64,
    pub database_url: String,

    pub command_prefix: String,
    /// Name of the channel the bot reports to.
    pub log_channel: String,
    /// Channel names commands are accepted in; empty means every channel.
    pub command_channels: Vec<String>,
    /// Role required to run sensitive commands, if any.
    pub mod_role_id: Option<u64>,
    /// Minimum seconds between two error reports posted to the log channel.
    pub error_report_interval: u64,
    pub debug: bool,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Ok(Self {
            discord_bot_token: required("DISCORD_BOT_TOKEN")?,
            discord_guild_id: parse("DISCORD_GUILD_ID", required("DISCORD_GUILD_ID")?)?,
            database_url: required("DATABASE_URL")?,
            command_prefix: optional("COMMAND_PREFIX")
                .unwrap_or_else(|| DEFAULT_COMMAND_PREFIX.to_string()),
            log_channel: optional("LOG_CHANNEL").unwrap_or_else(|| DEFAULT_LOG_CHANNEL.to_string()),
            command_channels: optional("COMMAND_CHANNELS")
                .map(|value| split_list(&value))
                .unwrap_or_default(),
            mod_role_id: optional("MOD_ROLE_ID")
                .map(|value| parse("MOD_ROLE_ID", value))
                .transpose()?,
            error_report_interval: optional("ERROR_REPORT_INTERVAL")
                .map(|value| parse("ERROR_REPORT_INTERVAL", value))
                .transpose()?
                .unwrap_or(DEFAULT_ERROR_REPORT_INTERVAL),
            debug: optional("DEBUG")
                .map(|value| parse("DEBUG", value))
                .transpose()?
                .unwrap_or(false),
        })
    }
}

fn required(name: &str) -> Result<String, ConfigError> {
    std::env::var(name).map_err(|_| ConfigError::MissingEnvVar(name.to_string()))
}

/// Reads an optional variable, treating an empty value as unset.
fn optional(name: &str) -> Option<String> {
    std::env::var(name)
        .ok()
        .filter(|value| !value.trim().is_empty())
}

fn parse<T: FromStr>(name: &str, value: String) -> Result<T, ConfigError> {
    value
        .trim()
        .parse::<T>()
        .map_err(|_| ConfigError::InvalidEnvVar {
            name: name.to_string(),
            value,
        })
}

/// Splits a comma separated list, dropping blank entries.
fn split_list(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_channel_list() {
        assert_eq!(
            split_list(" general, bot-commands ,,"),
            vec!["general".to_string(), "bot-commands".to_string()]
        );
        assert!(split_list("").is_empty());
    }

    #[test]
    fn parses_typed_values() {
        assert_eq!(parse::<u64>("X", " 42 ".to_string()).unwrap(), 42);
        assert!(parse::<bool>("X", "true".to_string()).unwrap());
    }

    #[test]
    fn reports_invalid_values() {
        let err = parse::<u64>("DISCORD_GUILD_ID", "abc".to_string()).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::InvalidEnvVar { ref name, ref value } if name == "DISCORD_GUILD_ID" && value == "abc"
        ));
    }
}
