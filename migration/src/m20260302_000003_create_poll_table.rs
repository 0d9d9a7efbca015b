use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Poll::Table)
                    .if_not_exists()
                    .col(pk_auto(Poll::Id))
                    .col(string(Poll::GuildId))
                    .col(string(Poll::Name))
                    .col(text(Poll::Description))
                    .index(
                        Index::create()
                            .unique()
                            .name("idx_poll_guild_name_unique")
                            .col(Poll::GuildId)
                            .col(Poll::Name),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Poll::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Poll {
    Table,
    Id,
    GuildId,
    Name,
    Description,
}
