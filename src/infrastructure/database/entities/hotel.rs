//! Hotel entity

use chrono::{DateTime, Utc};
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "hotels")]
pub struct Model {
    /// Legal tax identifier, assigned externally
    #[sea_orm(primary_key, auto_increment = false)]
    pub tax_id: String,

    pub name: String,
    pub lodging_type: String,
    pub province: String,
    pub canton: String,
    pub district: String,

    #[sea_orm(nullable)]
    pub address: Option<String>,

    #[sea_orm(unique)]
    pub email: String,

    #[sea_orm(nullable)]
    pub website: Option<String>,

    #[sea_orm(nullable)]
    pub social_links: Option<String>,

    /// JSON array of phone numbers
    pub phones: String,

    /// JSON array of amenity names
    pub amenities: String,

    pub owner_user_id: String,

    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::OwnerUserId",
        to = "super::user::Column::Id"
    )]
    Owner,
    #[sea_orm(has_many = "super::room::Entity")]
    Rooms,
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Owner.def()
    }
}

impl Related<super::room::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Rooms.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
