pub use sea_orm_migration::prelude::*;

mod m20260301_000001_create_user_table;
mod m20260301_000002_create_chat_log_table;
mod m20260302_000003_create_poll_table;
mod m20260302_000004_create_poll_option_table;
mod m20260302_000005_create_poll_vote_table;
mod m20260303_000006_create_collection_table;
mod m20260303_000007_create_collection_item_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260301_000001_create_user_table::Migration),
            Box::new(m20260301_000002_create_chat_log_table::Migration),
            Box::new(m20260302_000003_create_poll_table::Migration),
            Box::new(m20260302_000004_create_poll_option_table::Migration),
            Box::new(m20260302_000005_create_poll_vote_table::Migration),
            Box::new(m20260303_000006_create_collection_table::Migration),
            Box::new(m20260303_000007_create_collection_item_table::Migration),
        ]
    }
}
