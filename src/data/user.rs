//! User data repository for database operations.
//!
//! Records guild members as they are observed through member events. The username,
//! avatar and last-seen time always reflect the latest event, while the first-seen time
//! only ever moves earlier.

use migration::OnConflict;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, EntityTrait};

use crate::{
    error::AppError,
    model::user::{UpsertUserParam, User},
};

/// Repository providing database operations for tracked users.
pub struct UserRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserRepository<'a> {
    /// Creates a new UserRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `UserRepository` - New repository instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts or refreshes a user from a member event.
    ///
    /// New users get `first_seen` set to their join date, or the event time when the join
    /// date is unknown. Existing users get their username, avatar and `last_seen` updated;
    /// `first_seen` is only rewritten when the reported join date is older than the stored
    /// value.
    ///
    /// # Arguments
    /// - `param` - Member data observed in the event
    ///
    /// # Returns
    /// - `Ok(User)` - The created or updated user
    /// - `Err(AppError::DbErr)` - Database error during insert or update
    /// - `Err(AppError::InternalErr)` - Stored Discord ID could not be parsed
    pub async fn upsert(&self, param: UpsertUserParam) -> Result<User, AppError> {
        let first_seen = param.joined_at.unwrap_or(param.seen_at);

        let entity = entity::prelude::User::insert(entity::user::ActiveModel {
            discord_id: ActiveValue::Set(param.discord_id.to_string()),
            username: ActiveValue::Set(param.username),
            avatar: ActiveValue::Set(param.avatar),
            first_seen: ActiveValue::Set(first_seen),
            last_seen: ActiveValue::Set(param.seen_at),
        })
        .on_conflict(
            OnConflict::column(entity::user::Column::DiscordId)
                .update_columns([
                    entity::user::Column::Username,
                    entity::user::Column::Avatar,
                    entity::user::Column::LastSeen,
                ])
                .to_owned(),
        )
        .exec_with_returning(self.db)
        .await?;

        let entity = if first_seen < entity.first_seen {
            let mut active: entity::user::ActiveModel = entity.into();
            active.first_seen = ActiveValue::Set(first_seen);
            active.update(self.db).await?
        } else {
            entity
        };

        User::from_entity(entity)
    }
}

#[cfg(test)]
impl<'a> UserRepository<'a> {
    /// Finds a user by their Discord ID.
    ///
    /// # Returns
    /// - `Ok(Some(User))` - User found
    /// - `Ok(None)` - The bot has never seen that user
    /// - `Err(AppError)` - Database error or unparseable stored ID
    pub async fn find_by_discord_id(&self, discord_id: u64) -> Result<Option<User>, AppError> {
        let entity = entity::prelude::User::find_by_id(discord_id.to_string())
            .one(self.db)
            .await?;

        entity.map(User::from_entity).transpose()
    }
}
