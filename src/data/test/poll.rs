use sea_orm::{DbErr, EntityTrait, PaginatorTrait};
use test_utils::{
    builder::TestBuilder,
    factory::{helpers::create_poll_with_options, poll::PollFactory},
};

use crate::{data::poll::PollRepository, model::poll::PollResult};

/// Tests that polls are listed newest first and scoped to the guild.
///
/// Expected: Ok with the guild's polls in reverse creation order
#[tokio::test]
async fn lists_guild_polls_newest_first() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_poll_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    PollFactory::new(db).guild_id(1).name("first").build().await?;
    PollFactory::new(db).guild_id(2).name("other").build().await?;
    PollFactory::new(db).guild_id(1).name("second").build().await?;

    let polls = PollRepository::new(db).get_by_guild_id(1).await?;
    let names: Vec<&str> = polls.iter().map(|p| p.name.as_str()).collect();

    assert_eq!(names, vec!["second", "first"]);

    Ok(())
}

/// Tests finding a poll by name within a guild.
///
/// Expected: Ok(Some) in the owning guild, Ok(None) elsewhere
#[tokio::test]
async fn finds_poll_by_name_in_guild() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_poll_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    PollFactory::new(db)
        .guild_id(1)
        .name("ponies")
        .description("Best pony?")
        .build()
        .await?;

    let repo = PollRepository::new(db);

    let poll = repo.find_by_name(1, "ponies").await?.unwrap();
    assert_eq!(poll.description, "Best pony?");
    assert!(repo.find_by_name(2, "ponies").await?.is_none());

    Ok(())
}

/// Tests that duplicate option text or position is refused.
///
/// Expected: Ok(false) for duplicates, Ok(true) for a new option
#[tokio::test]
async fn refuses_duplicate_options() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_poll_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (poll, _) = create_poll_with_options(db, 1, &["yes", "no"]).await?;
    let repo = PollRepository::new(db);

    assert!(!repo.add_option(poll.id, 3, "yes").await?);
    assert!(!repo.add_option(poll.id, 2, "maybe").await?);
    assert!(repo.add_option(poll.id, 3, "maybe").await?);

    Ok(())
}

/// Tests appending options after the last position.
///
/// Expected: Ok(Some(3)) for a new option, Ok(None) for existing text
#[tokio::test]
async fn appends_option_after_last_position() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_poll_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (poll, _) = create_poll_with_options(db, 1, &["yes", "no"]).await?;
    let repo = PollRepository::new(db);

    assert_eq!(repo.append_option(poll.id, "maybe").await?, Some(3));
    assert_eq!(repo.append_option(poll.id, "no").await?, None);

    let options = repo.get_options(poll.id).await?;
    let positions: Vec<u64> = options.iter().map(|o| o.position).collect();
    assert_eq!(positions, vec![1, 2, 3]);

    Ok(())
}

/// Tests looking up options by text and by position.
///
/// Expected: Ok with exact text matches and existing positions found
#[tokio::test]
async fn looks_up_options() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_poll_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (poll, _) = create_poll_with_options(db, 1, &["Twilight", "Rarity"]).await?;
    let repo = PollRepository::new(db);

    assert_eq!(repo.find_option_position(poll.id, "Rarity").await?, Some(2));
    assert_eq!(repo.find_option_position(poll.id, "Applejack").await?, None);
    assert!(repo.option_exists(poll.id, 1).await?);
    assert!(!repo.option_exists(poll.id, 3).await?);

    Ok(())
}

/// Tests that voting again replaces the user's previous vote.
///
/// Expected: Ok with one vote per user and results counted per position
#[tokio::test]
async fn revote_replaces_previous_vote() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_poll_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (poll, _) = create_poll_with_options(db, 1, &["a", "b", "c"]).await?;
    let repo = PollRepository::new(db);

    repo.vote(poll.id, 10, 1).await?;
    repo.vote(poll.id, 11, 1).await?;
    repo.vote(poll.id, 12, 3).await?;
    repo.vote(poll.id, 10, 3).await?;

    let results = repo.get_results(poll.id).await?;

    assert_eq!(
        results,
        vec![
            PollResult {
                position: 1,
                count: 1
            },
            PollResult {
                position: 3,
                count: 2
            },
        ]
    );

    Ok(())
}

/// Tests that deleting a poll removes its options and votes.
///
/// Expected: Ok(true) and no rows left in any poll table
#[tokio::test]
async fn delete_removes_options_and_votes() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_poll_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (poll, _) = create_poll_with_options(db, 1, &["a", "b"]).await?;
    let repo = PollRepository::new(db);
    repo.vote(poll.id, 10, 2).await?;

    assert!(repo.delete(poll.id).await?);
    assert!(!repo.delete(poll.id).await?);

    assert_eq!(entity::prelude::Poll::find().count(db).await?, 0);
    assert_eq!(entity::prelude::PollOption::find().count(db).await?, 0);
    assert_eq!(entity::prelude::PollVote::find().count(db).await?, 0);

    Ok(())
}
