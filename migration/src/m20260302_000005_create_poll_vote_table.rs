use sea_orm_migration::{prelude::*, schema::*};

use super::m20260302_000003_create_poll_table::Poll;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(PollVote::Table)
                    .if_not_exists()
                    .col(pk_auto(PollVote::Id))
                    .col(integer(PollVote::PollId))
                    .col(string(PollVote::UserId))
                    .col(big_integer(PollVote::OptionPosition))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_poll_vote_poll_id")
                            .from(PollVote::Table, PollVote::PollId)
                            .to(Poll::Table, Poll::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .index(
                        Index::create()
                            .unique()
                            .name("idx_poll_vote_user_unique")
                            .col(PollVote::PollId)
                            .col(PollVote::UserId),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(PollVote::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum PollVote {
    Table,
    Id,
    PollId,
    UserId,
    OptionPosition,
}
