//! Create room_types table

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(RoomTypes::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(RoomTypes::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(RoomTypes::Name)
                            .string()
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(RoomTypes::Description).string())
                    .col(
                        ColumnDef::new(RoomTypes::NightlyRateCents)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(RoomTypes::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(RoomTypes::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
pub enum RoomTypes {
    Table,
    Id,
    Name,
    Description,
    NightlyRateCents,
    CreatedAt,
}
