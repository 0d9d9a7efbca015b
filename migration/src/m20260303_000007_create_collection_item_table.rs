use sea_orm_migration::{prelude::*, schema::*};

use super::m20260303_000006_create_collection_table::Collection;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(CollectionItem::Table)
                    .if_not_exists()
                    .col(pk_auto(CollectionItem::Id))
                    .col(integer(CollectionItem::CollectionId))
                    .col(text(CollectionItem::Value))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_collection_item_collection_id")
                            .from(CollectionItem::Table, CollectionItem::CollectionId)
                            .to(Collection::Table, Collection::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .index(
                        Index::create()
                            .unique()
                            .name("idx_collection_item_value_unique")
                            .col(CollectionItem::CollectionId)
                            .col(CollectionItem::Value),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(CollectionItem::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum CollectionItem {
    Table,
    Id,
    CollectionId,
    Value,
}
