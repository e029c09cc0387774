//! SeaORM implementations of RoomRepository and RoomTypeRepository

use async_trait::async_trait;
use chrono::Utc;
use log::debug;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, NotSet, QueryFilter,
    QueryOrder, Set,
};

use crate::domain::room::{
    NewRoom, NewRoomPhoto, NewRoomType, Room, RoomPhoto, RoomRepository, RoomType,
    RoomTypeRepository, UpdateRoomType,
};
use crate::domain::{DomainError, DomainResult};
use crate::infrastructure::database::entities::{room, room_photo, room_type};

use super::map_db_err;

pub struct SeaOrmRoomRepository {
    db: DatabaseConnection,
}

impl SeaOrmRoomRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

// ── Conversion helpers ──────────────────────────────────────────

fn room_to_domain(m: room::Model) -> Room {
    Room {
        id: m.id,
        room_number: m.room_number,
        hotel_id: m.hotel_id,
        room_type_id: m.room_type_id,
        is_active: m.is_active,
        created_at: m.created_at,
        updated_at: m.updated_at,
    }
}

fn photo_to_domain(m: room_photo::Model) -> RoomPhoto {
    RoomPhoto {
        id: m.id,
        room_id: m.room_id,
        path: m.path,
        description: m.description,
        uploaded_at: m.uploaded_at,
    }
}

fn room_type_to_domain(m: room_type::Model) -> RoomType {
    RoomType {
        id: m.id,
        name: m.name,
        description: m.description,
        nightly_rate_cents: m.nightly_rate_cents,
        created_at: m.created_at,
    }
}

// ── RoomRepository impl ─────────────────────────────────────────

#[async_trait]
impl RoomRepository for SeaOrmRoomRepository {
    async fn create(&self, new: NewRoom) -> DomainResult<Room> {
        debug!("Creating room {} in hotel {}", new.room_number, new.hotel_id);

        let now = Utc::now();
        let model = room::ActiveModel {
            id: NotSet,
            room_number: Set(new.room_number),
            hotel_id: Set(new.hotel_id),
            room_type_id: Set(new.room_type_id),
            is_active: Set(true),
            created_at: Set(now),
            updated_at: Set(now),
        };
        let inserted = model.insert(&self.db).await.map_err(map_db_err)?;
        Ok(room_to_domain(inserted))
    }

    async fn find_by_id(&self, id: i32) -> DomainResult<Option<Room>> {
        let model = room::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(map_db_err)?;
        Ok(model.map(room_to_domain))
    }

    async fn find_active(&self) -> DomainResult<Vec<Room>> {
        let models = room::Entity::find()
            .filter(room::Column::IsActive.eq(true))
            .order_by_asc(room::Column::HotelId)
            .order_by_asc(room::Column::RoomNumber)
            .all(&self.db)
            .await
            .map_err(map_db_err)?;
        Ok(models.into_iter().map(room_to_domain).collect())
    }

    async fn find_by_hotel(&self, hotel_id: &str) -> DomainResult<Vec<Room>> {
        let models = room::Entity::find()
            .filter(room::Column::HotelId.eq(hotel_id))
            .order_by_asc(room::Column::RoomNumber)
            .all(&self.db)
            .await
            .map_err(map_db_err)?;
        Ok(models.into_iter().map(room_to_domain).collect())
    }

    async fn set_active(&self, id: i32, active: bool) -> DomainResult<()> {
        let existing = room::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(map_db_err)?
            .ok_or(DomainError::NotFound {
                entity: "Room",
                field: "id",
                value: id.to_string(),
            })?;

        let mut model: room::ActiveModel = existing.into();
        model.is_active = Set(active);
        model.updated_at = Set(Utc::now());
        model.update(&self.db).await.map_err(map_db_err)?;
        Ok(())
    }

    async fn find_photos(&self, room_id: i32) -> DomainResult<Vec<RoomPhoto>> {
        let models = room_photo::Entity::find()
            .filter(room_photo::Column::RoomId.eq(room_id))
            .order_by_desc(room_photo::Column::UploadedAt)
            .all(&self.db)
            .await
            .map_err(map_db_err)?;
        Ok(models.into_iter().map(photo_to_domain).collect())
    }

    async fn add_photo(&self, new: NewRoomPhoto) -> DomainResult<RoomPhoto> {
        let model = room_photo::ActiveModel {
            id: NotSet,
            room_id: Set(new.room_id),
            path: Set(new.path),
            description: Set(new.description),
            uploaded_at: Set(Utc::now()),
        };
        let inserted = model.insert(&self.db).await.map_err(map_db_err)?;
        Ok(photo_to_domain(inserted))
    }
}

// ── RoomTypeRepository impl ─────────────────────────────────────

pub struct SeaOrmRoomTypeRepository {
    db: DatabaseConnection,
}

impl SeaOrmRoomTypeRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl RoomTypeRepository for SeaOrmRoomTypeRepository {
    async fn create(&self, new: NewRoomType) -> DomainResult<RoomType> {
        let model = room_type::ActiveModel {
            id: NotSet,
            name: Set(new.name),
            description: Set(new.description),
            nightly_rate_cents: Set(new.nightly_rate_cents),
            created_at: Set(Utc::now()),
        };
        let inserted = model.insert(&self.db).await.map_err(map_db_err)?;
        Ok(room_type_to_domain(inserted))
    }

    async fn find_by_id(&self, id: i32) -> DomainResult<Option<RoomType>> {
        let model = room_type::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(map_db_err)?;
        Ok(model.map(room_type_to_domain))
    }

    async fn find_all(&self) -> DomainResult<Vec<RoomType>> {
        let models = room_type::Entity::find()
            .order_by_asc(room_type::Column::Name)
            .all(&self.db)
            .await
            .map_err(map_db_err)?;
        Ok(models.into_iter().map(room_type_to_domain).collect())
    }

    async fn update(&self, id: i32, update: UpdateRoomType) -> DomainResult<RoomType> {
        let existing = room_type::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(map_db_err)?
            .ok_or(DomainError::NotFound {
                entity: "RoomType",
                field: "id",
                value: id.to_string(),
            })?;

        let mut active: room_type::ActiveModel = existing.into();
        if let Some(name) = update.name {
            active.name = Set(name);
        }
        if let Some(description) = update.description {
            active.description = Set(Some(description));
        }
        if let Some(rate) = update.nightly_rate_cents {
            active.nightly_rate_cents = Set(rate);
        }
        let updated = active.update(&self.db).await.map_err(map_db_err)?;
        Ok(room_type_to_domain(updated))
    }
}
