//! Collection repository.
//!
//! Collections are named lists of unique strings per guild, used by the `pick`,
//! `add`, `remove` and related commands.

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::model::collection::Collection;

pub struct CollectionRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CollectionRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates an empty collection.
    ///
    /// # Returns
    /// - `Ok(Some(Collection))` - The created collection
    /// - `Ok(None)` - The guild already has a collection with that name
    /// - `Err(DbErr)` - Database error during insert
    pub async fn create(&self, guild_id: u64, name: &str) -> Result<Option<Collection>, DbErr> {
        if self.find_by_name(guild_id, name).await?.is_some() {
            return Ok(None);
        }

        let entity = entity::collection::ActiveModel {
            guild_id: ActiveValue::Set(guild_id.to_string()),
            name: ActiveValue::Set(name.to_string()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Some(Collection::from_entity(entity)))
    }

    pub async fn find_by_name(
        &self,
        guild_id: u64,
        name: &str,
    ) -> Result<Option<Collection>, DbErr> {
        let entity = entity::prelude::Collection::find()
            .filter(entity::collection::Column::GuildId.eq(guild_id.to_string()))
            .filter(entity::collection::Column::Name.eq(name))
            .one(self.db)
            .await?;

        Ok(entity.map(Collection::from_entity))
    }

    /// Gets the names of every collection in a guild, alphabetically.
    pub async fn get_names(&self, guild_id: u64) -> Result<Vec<String>, DbErr> {
        let entities = entity::prelude::Collection::find()
            .filter(entity::collection::Column::GuildId.eq(guild_id.to_string()))
            .order_by_asc(entity::collection::Column::Name)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(|e| e.name).collect())
    }

    /// Adds an item to a collection. Adding an item that is already present is a no-op.
    ///
    /// # Returns
    /// - `Ok(true)` - Item inserted
    /// - `Ok(false)` - Item was already in the collection
    /// - `Err(DbErr)` - Database error during insert
    pub async fn add_item(&self, collection_id: i32, value: &str) -> Result<bool, DbErr> {
        if self.contains(collection_id, value).await? {
            return Ok(false);
        }

        entity::collection_item::ActiveModel {
            collection_id: ActiveValue::Set(collection_id),
            value: ActiveValue::Set(value.to_string()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(true)
    }

    /// Removes an item from a collection.
    ///
    /// # Returns
    /// - `Ok(true)` - Item removed
    /// - `Ok(false)` - Item was not in the collection
    /// - `Err(DbErr)` - Database error during delete
    pub async fn remove_item(&self, collection_id: i32, value: &str) -> Result<bool, DbErr> {
        let result = entity::prelude::CollectionItem::delete_many()
            .filter(entity::collection_item::Column::CollectionId.eq(collection_id))
            .filter(entity::collection_item::Column::Value.eq(value))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    pub async fn contains(&self, collection_id: i32, value: &str) -> Result<bool, DbErr> {
        let count = entity::prelude::CollectionItem::find()
            .filter(entity::collection_item::Column::CollectionId.eq(collection_id))
            .filter(entity::collection_item::Column::Value.eq(value))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Gets every item of a collection, alphabetically.
    pub async fn get_items(&self, collection_id: i32) -> Result<Vec<String>, DbErr> {
        let entities = entity::prelude::CollectionItem::find()
            .filter(entity::collection_item::Column::CollectionId.eq(collection_id))
            .order_by_asc(entity::collection_item::Column::Value)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(|e| e.value).collect())
    }

    pub async fn count_items(&self, collection_id: i32) -> Result<u64, DbErr> {
        entity::prelude::CollectionItem::find()
            .filter(entity::collection_item::Column::CollectionId.eq(collection_id))
            .count(self.db)
            .await
    }

    /// Gets the items containing `query` as a case-sensitive substring.
    pub async fn search(&self, collection_id: i32, query: &str) -> Result<Vec<String>, DbErr> {
        let items = self.get_items(collection_id).await?;

        Ok(items
            .into_iter()
            .filter(|item| item.contains(query))
            .collect())
    }
}
