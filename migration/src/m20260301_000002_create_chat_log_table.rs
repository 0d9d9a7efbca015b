use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ChatLog::Table)
                    .if_not_exists()
                    .col(string(ChatLog::MessageId).primary_key())
                    .col(string(ChatLog::AuthorId))
                    .col(string(ChatLog::ChannelId))
                    .col(text(ChatLog::Content))
                    .col(boolean(ChatLog::MentionEveryone).default(false))
                    .col(timestamp(ChatLog::Timestamp))
                    .index(
                        Index::create()
                            .name("idx_chat_log_channel_id")
                            .col(ChatLog::ChannelId),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(ChatLog::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum ChatLog {
    Table,
    MessageId,
    AuthorId,
    ChannelId,
    Content,
    MentionEveryone,
    Timestamp,
}
