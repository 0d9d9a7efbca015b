//! Poll factory for creating test poll entities.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test polls with customizable fields.
pub struct PollFactory<'a> {
    db: &'a DatabaseConnection,
    guild_id: u64,
    name: String,
    description: String,
}

impl<'a> PollFactory<'a> {
    /// Creates a new PollFactory with default values.
    ///
    /// Defaults:
    /// - guild_id: `1`
    /// - name: `"poll{id}"`
    /// - description: `"Poll {id}"`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            guild_id: 1,
            name: format!("poll{}", id),
            description: format!("Poll {}", id),
        }
    }

    pub fn guild_id(mut self, guild_id: u64) -> Self {
        self.guild_id = guild_id;
        self
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Builds and inserts the poll entity into the database.
    pub async fn build(self) -> Result<entity::poll::Model, DbErr> {
        entity::poll::ActiveModel {
            guild_id: ActiveValue::Set(self.guild_id.to_string()),
            name: ActiveValue::Set(self.name),
            description: ActiveValue::Set(self.description),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a poll with default values.
pub async fn create_poll(db: &DatabaseConnection) -> Result<entity::poll::Model, DbErr> {
    PollFactory::new(db).build().await
}
