//! Collection factory for creating test collection entities.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test collections with customizable fields.
pub struct CollectionFactory<'a> {
    db: &'a DatabaseConnection,
    guild_id: u64,
    name: String,
}

impl<'a> CollectionFactory<'a> {
    /// Creates a new CollectionFactory in guild `1` named `"collection{id}"`.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self {
            db,
            guild_id: 1,
            name: format!("collection{}", next_id()),
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

    /// Builds and inserts the collection entity into the database.
    pub async fn build(self) -> Result<entity::collection::Model, DbErr> {
        entity::collection::ActiveModel {
            guild_id: ActiveValue::Set(self.guild_id.to_string()),
            name: ActiveValue::Set(self.name),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a collection with default values.
pub async fn create_collection(
    db: &DatabaseConnection,
) -> Result<entity::collection::Model, DbErr> {
    CollectionFactory::new(db).build().await
}
