//! Chat log repository.
//!
//! Stores one row per message ID. Edits overwrite the stored content of the original
//! row while keeping its author, channel and original timestamp.

use migration::OnConflict;
use sea_orm::{ActiveValue, DatabaseConnection, EntityTrait};

use crate::{error::AppError, model::chat_log::LogMessageParam};

pub struct ChatLogRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ChatLogRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Records a created message, or the new content of an edited one.
    ///
    /// # Arguments
    /// - `param` - Message data with mentions already replaced
    ///
    /// # Returns
    /// - `Ok(())` - Message stored
    /// - `Err(AppError::DbErr)` - Database error during insert
    pub async fn log_message(&self, param: LogMessageParam) -> Result<(), AppError> {
        entity::prelude::ChatLog::insert(entity::chat_log::ActiveModel {
            message_id: ActiveValue::Set(param.message_id.to_string()),
            author_id: ActiveValue::Set(param.author_id.to_string()),
            channel_id: ActiveValue::Set(param.channel_id.to_string()),
            content: ActiveValue::Set(param.content),
            mention_everyone: ActiveValue::Set(param.mention_everyone),
            timestamp: ActiveValue::Set(param.timestamp),
        })
        .on_conflict(
            OnConflict::column(entity::chat_log::Column::MessageId)
                .update_columns([
                    entity::chat_log::Column::Content,
                    entity::chat_log::Column::MentionEveryone,
                ])
                .to_owned(),
        )
        .exec_without_returning(self.db)
        .await?;

        Ok(())
    }
}

#[cfg(test)]
impl<'a> ChatLogRepository<'a> {
    /// Finds a logged message by its Discord message ID.
    pub async fn find_by_message_id(
        &self,
        message_id: u64,
    ) -> Result<Option<crate::model::chat_log::LoggedMessage>, AppError> {
        let entity = entity::prelude::ChatLog::find_by_id(message_id.to_string())
            .one(self.db)
            .await?;

        entity
            .map(crate::model::chat_log::LoggedMessage::from_entity)
            .transpose()
    }

    /// Gets the logged messages of a channel, oldest first.
    pub async fn get_by_channel_id(
        &self,
        channel_id: u64,
    ) -> Result<Vec<crate::model::chat_log::LoggedMessage>, AppError> {
        use sea_orm::{ColumnTrait, QueryFilter, QueryOrder};

        entity::prelude::ChatLog::find()
            .filter(entity::chat_log::Column::ChannelId.eq(channel_id.to_string()))
            .order_by_asc(entity::chat_log::Column::Timestamp)
            .all(self.db)
            .await?
            .into_iter()
            .map(crate::model::chat_log::LoggedMessage::from_entity)
            .collect()
    }
}
