//! Create room_photos table

use sea_orm_migration::prelude::*;

use super::m20250301_000005_create_rooms::Rooms;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(RoomPhotos::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(RoomPhotos::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(RoomPhotos::RoomId).integer().not_null())
                    .col(ColumnDef::new(RoomPhotos::Path).string().not_null())
                    .col(ColumnDef::new(RoomPhotos::Description).string())
                    .col(
                        ColumnDef::new(RoomPhotos::UploadedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_room_photos_room")
                            .from(RoomPhotos::Table, RoomPhotos::RoomId)
                            .to(Rooms::Table, Rooms::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_room_photos_room")
                    .table(RoomPhotos::Table)
                    .col(RoomPhotos::RoomId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(RoomPhotos::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
pub enum RoomPhotos {
    Table,
    Id,
    RoomId,
    Path,
    Description,
    UploadedAt,
}
