use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Owner-scoped listing filters on owner_id; created_at drives the
        // stable insertion ordering.
        manager
            .create_index(
                Index::create()
                    .table(Pets::Table)
                    .col(Pets::OwnerId)
                    .name("idx_pets_owner_id")
                    .to_owned(),
            )
            .await?;
        manager
            .create_index(
                Index::create()
                    .table(Pets::Table)
                    .col(Pets::CreatedAt)
                    .name("idx_pets_created_at")
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(Index::drop().name("idx_pets_created_at").to_owned())
            .await?;
        manager
            .drop_index(Index::drop().name("idx_pets_owner_id").to_owned())
            .await
    }
}

#[derive(Iden)]
enum Pets {
    Table,
    OwnerId,
    CreatedAt,
}
