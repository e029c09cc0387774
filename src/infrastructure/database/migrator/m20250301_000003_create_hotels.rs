//! Create hotels table

use sea_orm_migration::prelude::*;

use super::m20250301_000001_create_users::Users;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Hotels::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Hotels::TaxId)
                            .string()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Hotels::Name).string().not_null())
                    .col(ColumnDef::new(Hotels::LodgingType).string().not_null())
                    .col(ColumnDef::new(Hotels::Province).string().not_null())
                    .col(ColumnDef::new(Hotels::Canton).string().not_null())
                    .col(ColumnDef::new(Hotels::District).string().not_null())
                    .col(ColumnDef::new(Hotels::Address).string())
                    .col(
                        ColumnDef::new(Hotels::Email)
                            .string()
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(Hotels::Website).string())
                    .col(ColumnDef::new(Hotels::SocialLinks).string())
                    .col(
                        ColumnDef::new(Hotels::Phones)
                            .string()
                            .not_null()
                            .default("[]"),
                    )
                    .col(
                        ColumnDef::new(Hotels::Amenities)
                            .string()
                            .not_null()
                            .default("[]"),
                    )
                    .col(ColumnDef::new(Hotels::OwnerUserId).string().not_null())
                    .col(
                        ColumnDef::new(Hotels::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Hotels::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_hotels_owner")
                            .from(Hotels::Table, Hotels::OwnerUserId)
                            .to(Users::Table, Users::Id),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_hotels_province")
                    .table(Hotels::Table)
                    .col(Hotels::Province)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Hotels::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
pub enum Hotels {
    Table,
    TaxId,
    Name,
    LodgingType,
    Province,
    Canton,
    District,
    Address,
    Email,
    Website,
    SocialLinks,
    Phones,
    Amenities,
    OwnerUserId,
    CreatedAt,
    UpdatedAt,
}
