//! Create reservations table
//!
//! Stores room bookings with half-open stay intervals
//! (check_in inclusive, check_out exclusive).

use sea_orm_migration::prelude::*;

use super::m20250301_000002_create_clients::Clients;
use super::m20250301_000005_create_rooms::Rooms;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Reservations::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Reservations::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Reservations::RoomId).integer().not_null())
                    .col(ColumnDef::new(Reservations::ClientId).integer().not_null())
                    .col(ColumnDef::new(Reservations::CheckIn).date().not_null())
                    .col(ColumnDef::new(Reservations::CheckOut).date().not_null())
                    .col(
                        ColumnDef::new(Reservations::Guests)
                            .integer()
                            .not_null()
                            .default(1),
                    )
                    .col(
                        ColumnDef::new(Reservations::Status)
                            .string_len(20)
                            .not_null()
                            .default("confirmed"),
                    )
                    .col(
                        ColumnDef::new(Reservations::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Reservations::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_reservations_room")
                            .from(Reservations::Table, Reservations::RoomId)
                            .to(Rooms::Table, Rooms::Id),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_reservations_client")
                            .from(Reservations::Table, Reservations::ClientId)
                            .to(Clients::Table, Clients::Id),
                    )
                    .to_owned(),
            )
            .await?;

        // Overlap scans filter on (room, status) and the interval bounds
        manager
            .create_index(
                Index::create()
                    .name("idx_reservations_room_status")
                    .table(Reservations::Table)
                    .col(Reservations::RoomId)
                    .col(Reservations::Status)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_reservations_client")
                    .table(Reservations::Table)
                    .col(Reservations::ClientId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_reservations_check_in")
                    .table(Reservations::Table)
                    .col(Reservations::CheckIn)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Reservations::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
pub enum Reservations {
    Table,
    Id,
    RoomId,
    ClientId,
    CheckIn,
    CheckOut,
    Guests,
    Status,
    CreatedAt,
    UpdatedAt,
}
