//! SeaORM entity models for the bot's persistent state.

pub mod prelude;

pub mod chat_log;
pub mod collection;
pub mod collection_item;
pub mod poll;
pub mod poll_option;
pub mod poll_vote;
pub mod user;
