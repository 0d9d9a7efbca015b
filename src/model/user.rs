//! User domain models and parameters.
//!
//! Tracks the guild members the bot has seen, keyed by Discord ID, with the earliest
//! and latest time the bot observed them.

use chrono::{DateTime, Utc};

use crate::{error::AppError, util::parse::parse_u64_from_string};

/// Guild member as tracked by the bot.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    /// Discord ID of the user
    pub discord_id: u64,
    /// Discord username.
    pub username: String,
    /// Avatar hash, if the user has one.
    pub avatar: Option<String>,
    /// Earliest time the user is known to have been in the guild.
    pub first_seen: DateTime<Utc>,
    /// Most recent time the bot received an event for the user.
    pub last_seen: DateTime<Utc>,
}

impl User {
    /// Converts an entity model to a user domain model at the repository boundary.
    ///
    /// # Arguments
    /// - `entity` - The entity model from the database
    ///
    /// # Returns
    /// - `Ok(User)` - The converted user domain model
    /// - `Err(AppError::InternalErr(ParseStringId))` - Stored Discord ID is not a valid u64
    pub fn from_entity(entity: entity::user::Model) -> Result<Self, AppError> {
        Ok(Self {
            discord_id: parse_u64_from_string(entity.discord_id)?,
            username: entity.username,
            avatar: entity.avatar,
            first_seen: entity.first_seen,
            last_seen: entity.last_seen,
        })
    }
}

/// Parameters for recording a user from a member event.
#[derive(Debug, Clone)]
pub struct UpsertUserParam {
    /// Discord ID of the user
    pub discord_id: u64,
    /// Discord username.
    pub username: String,
    /// Avatar hash, if any.
    pub avatar: Option<String>,
    /// Guild join date reported by Discord, if known.
    ///
    /// Only moves `first_seen` earlier; a later join date never overwrites an older one.
    pub joined_at: Option<DateTime<Utc>>,
    /// Time the event was observed, stored as `last_seen`.
    pub seen_at: DateTime<Utc>,
}
