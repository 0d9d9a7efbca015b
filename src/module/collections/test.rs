use test_utils::{factory::helpers::create_collection_with_items, serenity::TEST_GUILD_ID};

use super::*;
use crate::module::test::{invocation, test_context};

async fn run(command: &dyn Command, ctx: &BotContext, content: &str) -> CommandOutput {
    command.process(ctx, &invocation(content)).await.unwrap()
}

/// Tests creating a collection and adding to it.
///
/// Expected: name lowercased, items joined with spaces, length reported
#[tokio::test]
async fn creates_collection_and_adds_items() {
    let ctx = test_context(false).await;

    let created = run(&NewCommand, &ctx, "!new Quotes").await;
    assert_eq!(created.text, "```Created the quotes collection.```");

    let again = run(&NewCommand, &ctx, "!new quotes").await;
    assert_eq!(again.text, "```That collection already exists!```");

    let added = run(&AddCommand, &ctx, "!add quotes get out of my library").await;
    assert_eq!(
        added.text,
        "```Added get out of my library to quotes. Length of quotes: 1```"
    );

    let listed = run(&CollectionsCommand, &ctx, "!collections quotes").await;
    assert_eq!(listed.text, "```quotes contains:\nget out of my library```");
}

/// Tests the add and remove argument checks.
///
/// Expected: each missing piece yields its own reply
#[tokio::test]
async fn rejects_incomplete_edits() {
    let ctx = test_context(false).await;

    assert_eq!(run(&AddCommand, &ctx, "!add").await.text, "```No collection given```");
    assert_eq!(
        run(&AddCommand, &ctx, "!add quotes").await.text,
        "```Can't add empty string!```"
    );
    assert_eq!(
        run(&AddCommand, &ctx, "!add missing thing").await.text,
        "```That collection does not exist!```"
    );
    assert_eq!(
        run(&RemoveCommand, &ctx, "!remove quotes").await.text,
        "```Can't remove an empty string!```"
    );
}

/// Tests removing items.
///
/// Expected: present item removed with the new length, missing item reported
#[tokio::test]
async fn removes_items() {
    let ctx = test_context(false).await;
    create_collection_with_items(&ctx.db, TEST_GUILD_ID, "ponies", &["sweetie", "scootaloo"])
        .await
        .unwrap();

    let removed = run(&RemoveCommand, &ctx, "!remove ponies sweetie").await;
    assert_eq!(
        removed.text,
        "```Removed sweetie from ponies. Length of ponies: 1```"
    );

    let missing = run(&RemoveCommand, &ctx, "!remove ponies sweetie").await;
    assert_eq!(missing.text, "```Could not find sweetie!```");
}

/// Tests listing every collection when no name is given.
///
/// Expected: names sorted alphabetically for both listing commands
#[tokio::test]
async fn lists_all_collections() {
    let ctx = test_context(false).await;
    create_collection_with_items(&ctx.db, TEST_GUILD_ID, "quotes", &[]).await.unwrap();
    create_collection_with_items(&ctx.db, TEST_GUILD_ID, "bored", &[]).await.unwrap();

    let expected = "```No collection specified. All collections:\nbored\nquotes```";
    assert_eq!(run(&CollectionsCommand, &ctx, "!collections").await.text, expected);
    assert_eq!(run(&PickCommand, &ctx, "!pick").await.text, expected);
}

/// Tests picking from collections.
///
/// Expected: an item of the collection, refusals for protected and empty collections
#[tokio::test]
async fn picks_random_item() {
    let ctx = test_context(false).await;
    create_collection_with_items(&ctx.db, TEST_GUILD_ID, "ponies", &["sweetie", "scootaloo"])
        .await
        .unwrap();
    create_collection_with_items(&ctx.db, TEST_GUILD_ID, "empty", &[]).await.unwrap();

    let picked = run(&PickCommand, &ctx, "!pick Ponies").await;
    assert!(["sweetie", "scootaloo"].contains(&picked.text.as_str()));

    assert_eq!(
        run(&PickCommand, &ctx, "!pick spoiler").await.text,
        "```You cannot pick an item from that collection.```"
    );
    assert_eq!(
        run(&PickCommand, &ctx, "!pick empty").await.text,
        "```That collection is empty.```"
    );
}

/// Tests that picked items cannot mention everyone.
///
/// Expected: the mass mention is defanged
#[tokio::test]
async fn picked_item_is_sanitized() {
    let ctx = test_context(false).await;
    create_collection_with_items(&ctx.db, TEST_GUILD_ID, "bad", &["hi @everyone"])
        .await
        .unwrap();

    let picked = run(&PickCommand, &ctx, "!pick bad").await;

    assert!(!picked.text.contains("@everyone"));
}

/// Tests searching a collection.
///
/// Expected: substring matches listed, no-hit and refused collections reported
#[tokio::test]
async fn searches_collection() {
    let ctx = test_context(false).await;
    create_collection_with_items(
        &ctx.db,
        TEST_GUILD_ID,
        "quotes",
        &["cutie mark crusaders", "cutie pox", "library"],
    )
    .await
    .unwrap();

    let hits = run(&SearchCollectionCommand, &ctx, "!searchcollection quotes cutie").await;
    assert_eq!(
        hits.text,
        "```The following collection entries match your query:\ncutie mark crusaders\ncutie pox```"
    );
    assert!(!hits.private);

    let none = run(&SearchCollectionCommand, &ctx, "!searchcollection quotes zzz").await;
    assert_eq!(none.text, "```No results found in the quotes collection.```");

    let spoiler = run(&SearchCollectionCommand, &ctx, "!searchcollection spoiler x").await;
    assert_eq!(spoiler.text, "```You can't search in that collection.```");
}

/// Tests that many search hits are sent privately.
///
/// Expected: private output above six hits
#[tokio::test]
async fn many_search_hits_go_private() {
    let ctx = test_context(false).await;
    let items: Vec<String> = (0..7).map(|i| format!("item {}", i)).collect();
    let items: Vec<&str> = items.iter().map(String::as_str).collect();
    create_collection_with_items(&ctx.db, TEST_GUILD_ID, "many", &items)
        .await
        .unwrap();

    let hits = run(&SearchCollectionCommand, &ctx, "!searchcollection many item").await;

    assert!(hits.private);
}
