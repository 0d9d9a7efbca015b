//! Poll repository for polls, their options and votes.
//!
//! Poll names are unique per guild, option positions and option texts are unique per
//! poll, and each user holds at most one vote per poll. Callers are expected to pass
//! poll names already lowercased.

use std::collections::BTreeMap;

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder, TransactionTrait,
};

use crate::model::poll::{Poll, PollOption, PollResult};

/// Repository providing database operations for polls.
pub struct PollRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> PollRepository<'a> {
    /// Creates a new PollRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets every poll of a guild, most recently created first.
    ///
    /// # Arguments
    /// - `guild_id` - Discord guild ID
    ///
    /// # Returns
    /// - `Ok(Vec<Poll>)` - Polls of the guild, newest first
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_by_guild_id(&self, guild_id: u64) -> Result<Vec<Poll>, DbErr> {
        let entities = entity::prelude::Poll::find()
            .filter(entity::poll::Column::GuildId.eq(guild_id.to_string()))
            .order_by_desc(entity::poll::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Poll::from_entity).collect())
    }

    /// Finds a poll of a guild by name.
    ///
    /// # Returns
    /// - `Ok(Some(Poll))` - Poll found
    /// - `Ok(None)` - No poll with that name in the guild
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_name(&self, guild_id: u64, name: &str) -> Result<Option<Poll>, DbErr> {
        let entity = entity::prelude::Poll::find()
            .filter(entity::poll::Column::GuildId.eq(guild_id.to_string()))
            .filter(entity::poll::Column::Name.eq(name))
            .one(self.db)
            .await?;

        Ok(entity.map(Poll::from_entity))
    }

    /// Creates a poll with no options.
    ///
    /// Does not check for an existing poll of the same name; use `find_by_name` first.
    /// The unique index rejects duplicates that slip through.
    ///
    /// # Returns
    /// - `Ok(Poll)` - The created poll
    /// - `Err(DbErr)` - Database error during insert
    pub async fn create(
        &self,
        guild_id: u64,
        name: &str,
        description: &str,
    ) -> Result<Poll, DbErr> {
        let entity = entity::poll::ActiveModel {
            guild_id: ActiveValue::Set(guild_id.to_string()),
            name: ActiveValue::Set(name.to_string()),
            description: ActiveValue::Set(description.to_string()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Poll::from_entity(entity))
    }

    /// Deletes a poll together with its options and votes.
    ///
    /// Runs in a single transaction so a poll never survives without its options or
    /// leaves orphaned votes behind.
    ///
    /// # Returns
    /// - `Ok(true)` - Poll deleted
    /// - `Ok(false)` - No poll with that ID existed
    /// - `Err(DbErr)` - Database error, the transaction is rolled back
    pub async fn delete(&self, poll_id: i32) -> Result<bool, DbErr> {
        let txn = self.db.begin().await?;

        entity::prelude::PollVote::delete_many()
            .filter(entity::poll_vote::Column::PollId.eq(poll_id))
            .exec(&txn)
            .await?;

        entity::prelude::PollOption::delete_many()
            .filter(entity::poll_option::Column::PollId.eq(poll_id))
            .exec(&txn)
            .await?;

        let result = entity::prelude::Poll::delete_by_id(poll_id)
            .exec(&txn)
            .await?;

        txn.commit().await?;

        Ok(result.rows_affected > 0)
    }

    /// Gets the options of a poll ordered by position.
    pub async fn get_options(&self, poll_id: i32) -> Result<Vec<PollOption>, DbErr> {
        let entities = entity::prelude::PollOption::find()
            .filter(entity::poll_option::Column::PollId.eq(poll_id))
            .order_by_asc(entity::poll_option::Column::Position)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(PollOption::from_entity).collect())
    }

    /// Finds the position of the option whose text matches exactly.
    ///
    /// # Returns
    /// - `Ok(Some(u64))` - Position of the matching option
    /// - `Ok(None)` - No option has that text
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_option_position(
        &self,
        poll_id: i32,
        option: &str,
    ) -> Result<Option<u64>, DbErr> {
        let entity = entity::prelude::PollOption::find()
            .filter(entity::poll_option::Column::PollId.eq(poll_id))
            .filter(entity::poll_option::Column::Option.eq(option))
            .one(self.db)
            .await?;

        Ok(entity.map(|e| PollOption::from_entity(e).position))
    }

    /// Checks whether a poll has an option at `position`.
    pub async fn option_exists(&self, poll_id: i32, position: u64) -> Result<bool, DbErr> {
        let count = entity::prelude::PollOption::find()
            .filter(entity::poll_option::Column::PollId.eq(poll_id))
            .filter(entity::poll_option::Column::Position.eq(position as i64))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Adds an option at a given position.
    ///
    /// # Returns
    /// - `Ok(true)` - Option added
    /// - `Ok(false)` - The poll already has an option with that text or position
    /// - `Err(DbErr)` - Database error during insert
    pub async fn add_option(
        &self,
        poll_id: i32,
        position: u64,
        option: &str,
    ) -> Result<bool, DbErr> {
        if self.find_option_position(poll_id, option).await?.is_some()
            || self.option_exists(poll_id, position).await?
        {
            return Ok(false);
        }

        entity::poll_option::ActiveModel {
            poll_id: ActiveValue::Set(poll_id),
            position: ActiveValue::Set(position as i64),
            option: ActiveValue::Set(option.to_string()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(true)
    }

    /// Appends an option after the current last position.
    ///
    /// # Returns
    /// - `Ok(Some(u64))` - Position assigned to the new option
    /// - `Ok(None)` - The poll already has an option with that text
    /// - `Err(DbErr)` - Database error during insert
    pub async fn append_option(&self, poll_id: i32, option: &str) -> Result<Option<u64>, DbErr> {
        let next = self
            .get_options(poll_id)
            .await?
            .iter()
            .map(|o| o.position)
            .max()
            .unwrap_or(0)
            + 1;

        if self.add_option(poll_id, next, option).await? {
            Ok(Some(next))
        } else {
            Ok(None)
        }
    }

    /// Records a user's vote, replacing any earlier vote in the same poll.
    pub async fn vote(&self, poll_id: i32, user_id: u64, position: u64) -> Result<(), DbErr> {
        let existing = entity::prelude::PollVote::find()
            .filter(entity::poll_vote::Column::PollId.eq(poll_id))
            .filter(entity::poll_vote::Column::UserId.eq(user_id.to_string()))
            .one(self.db)
            .await?;

        match existing {
            Some(vote) => {
                let mut active: entity::poll_vote::ActiveModel = vote.into();
                active.option_position = ActiveValue::Set(position as i64);
                active.update(self.db).await?;
            }
            None => {
                entity::poll_vote::ActiveModel {
                    poll_id: ActiveValue::Set(poll_id),
                    user_id: ActiveValue::Set(user_id.to_string()),
                    option_position: ActiveValue::Set(position as i64),
                    ..Default::default()
                }
                .insert(self.db)
                .await?;
            }
        }

        Ok(())
    }

    /// Counts the votes per option position.
    ///
    /// Positions without votes are omitted; results are ordered by position.
    pub async fn get_results(&self, poll_id: i32) -> Result<Vec<PollResult>, DbErr> {
        let votes = entity::prelude::PollVote::find()
            .filter(entity::poll_vote::Column::PollId.eq(poll_id))
            .all(self.db)
            .await?;

        let mut counts: BTreeMap<u64, u64> = BTreeMap::new();
        for vote in votes {
            *counts.entry(vote.option_position.max(0) as u64).or_default() += 1;
        }

        Ok(counts
            .into_iter()
            .map(|(position, count)| PollResult { position, count })
            .collect())
    }
}
