//! Domain models and parameter types.
//!
//! Domain models are converted from entity models at the repository boundary. Stored
//! Discord IDs are strings in the database and become `u64` here, so hooks and commands
//! never deal with the storage representation.

pub mod chat_log;
pub mod collection;
pub mod poll;
pub mod user;
