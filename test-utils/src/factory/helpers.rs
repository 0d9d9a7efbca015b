//! Shared helper utilities for factory methods.

use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Counter for generating unique IDs in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// # Returns
/// - `u64` - Next unique counter value
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates a poll in `guild_id` with the given options at positions 1, 2, 3...
///
/// # Arguments
/// - `db` - Database connection
/// - `guild_id` - Discord guild ID the poll belongs to
/// - `options` - Option texts in display order
///
/// # Returns
/// - `Ok((poll, options))` - Created poll and option entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_poll_with_options(
    db: &DatabaseConnection,
    guild_id: u64,
    options: &[&str],
) -> Result<(entity::poll::Model, Vec<entity::poll_option::Model>), DbErr> {
    let poll = crate::factory::poll::PollFactory::new(db)
        .guild_id(guild_id)
        .build()
        .await?;

    let mut created = Vec::with_capacity(options.len());
    for (index, option) in options.iter().enumerate() {
        let model = entity::poll_option::ActiveModel {
            poll_id: ActiveValue::Set(poll.id),
            position: ActiveValue::Set(index as i64 + 1),
            option: ActiveValue::Set(option.to_string()),
            ..Default::default()
        }
        .insert(db)
        .await?;
        created.push(model);
    }

    Ok((poll, created))
}

/// Creates a collection in `guild_id` holding `items`.
pub async fn create_collection_with_items(
    db: &DatabaseConnection,
    guild_id: u64,
    name: &str,
    items: &[&str],
) -> Result<entity::collection::Model, DbErr> {
    let collection = crate::factory::collection::CollectionFactory::new(db)
        .guild_id(guild_id)
        .name(name)
        .build()
        .await?;

    for item in items {
        entity::collection_item::ActiveModel {
            collection_id: ActiveValue::Set(collection.id),
            value: ActiveValue::Set(item.to_string()),
            ..Default::default()
        }
        .insert(db)
        .await?;
    }

    Ok(collection)
}
