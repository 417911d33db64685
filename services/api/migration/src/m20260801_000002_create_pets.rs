use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Pets::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Pets::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(Pets::OwnerId).uuid().not_null())
                    .col(ColumnDef::new(Pets::Name).string().not_null())
                    .col(ColumnDef::new(Pets::Email).string().not_null())
                    .col(
                        ColumnDef::new(Pets::Species)
                            .string()
                            .not_null()
                            .default("other"),
                    )
                    .col(ColumnDef::new(Pets::Color).string())
                    .col(ColumnDef::new(Pets::Age).string())
                    .col(ColumnDef::new(Pets::Nature).string())
                    .col(ColumnDef::new(Pets::Likes).string())
                    .col(ColumnDef::new(Pets::Dislikes).string())
                    .col(
                        ColumnDef::new(Pets::Vaccinated)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(
                        ColumnDef::new(Pets::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(Pets::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(Pets::Table, Pets::OwnerId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Pets::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum Pets {
    Table,
    Id,
    OwnerId,
    Name,
    Email,
    Species,
    Color,
    Age,
    Nature,
    Likes,
    Dislikes,
    Vaccinated,
    CreatedAt,
    UpdatedAt,
}

#[derive(Iden)]
enum Users {
    Table,
    Id,
}
