//! Database repository layer.
//!
//! Repository structs borrow the database connection and perform all queries, inserts,
//! updates and deletes for one domain. They use SeaORM entity models internally and return
//! domain models from `crate::model`.

pub mod chat_log;
pub mod collection;
pub mod poll;
pub mod user;

#[cfg(test)]
mod test;
