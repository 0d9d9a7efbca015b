//! Chat log domain models.

use chrono::{DateTime, Utc};

#[cfg(test)]
use crate::{error::AppError, util::parse::parse_u64_from_string};

/// A guild message as recorded in the chat log.
#[cfg(test)]
#[derive(Debug, Clone, PartialEq)]
pub struct LoggedMessage {
    pub message_id: u64,
    pub author_id: u64,
    pub channel_id: u64,
    /// Message content with user mentions replaced by `@name`.
    pub content: String,
    pub mention_everyone: bool,
    pub timestamp: DateTime<Utc>,
}

#[cfg(test)]
impl LoggedMessage {
    /// Converts an entity model to a logged message at the repository boundary.
    ///
    /// # Returns
    /// - `Ok(LoggedMessage)` - The converted message
    /// - `Err(AppError::InternalErr(ParseStringId))` - A stored ID is not a valid u64
    pub fn from_entity(entity: entity::chat_log::Model) -> Result<Self, AppError> {
        Ok(Self {
            message_id: parse_u64_from_string(entity.message_id)?,
            author_id: parse_u64_from_string(entity.author_id)?,
            channel_id: parse_u64_from_string(entity.channel_id)?,
            content: entity.content,
            mention_everyone: entity.mention_everyone,
            timestamp: entity.timestamp,
        })
    }
}

/// Parameters for recording a created or edited message.
#[derive(Debug, Clone)]
pub struct LogMessageParam {
    pub message_id: u64,
    pub author_id: u64,
    pub channel_id: u64,
    pub content: String,
    pub mention_everyone: bool,
    pub timestamp: DateTime<Utc>,
}
