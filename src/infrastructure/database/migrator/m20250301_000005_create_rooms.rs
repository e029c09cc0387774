//! Create rooms table

use sea_orm_migration::prelude::*;

use super::m20250301_000003_create_hotels::Hotels;
use super::m20250301_000004_create_room_types::RoomTypes;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Rooms::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Rooms::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Rooms::RoomNumber).string().not_null())
                    .col(ColumnDef::new(Rooms::HotelId).string().not_null())
                    .col(ColumnDef::new(Rooms::RoomTypeId).integer().not_null())
                    .col(
                        ColumnDef::new(Rooms::IsActive)
                            .boolean()
                            .not_null()
                            .default(true),
                    )
                    .col(
                        ColumnDef::new(Rooms::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Rooms::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_rooms_hotel")
                            .from(Rooms::Table, Rooms::HotelId)
                            .to(Hotels::Table, Hotels::TaxId)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_rooms_room_type")
                            .from(Rooms::Table, Rooms::RoomTypeId)
                            .to(RoomTypes::Table, RoomTypes::Id),
                    )
                    .to_owned(),
            )
            .await?;

        // One door number per hotel
        manager
            .create_index(
                Index::create()
                    .name("idx_rooms_hotel_number")
                    .table(Rooms::Table)
                    .col(Rooms::HotelId)
                    .col(Rooms::RoomNumber)
                    .unique()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Rooms::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
pub enum Rooms {
    Table,
    Id,
    RoomNumber,
    HotelId,
    RoomTypeId,
    IsActive,
    CreatedAt,
    UpdatedAt,
}
