//! Room and room-type repository interfaces

use async_trait::async_trait;

use super::model::{NewRoom, NewRoomPhoto, NewRoomType, Room, RoomPhoto, RoomType, UpdateRoomType};
use crate::domain::DomainResult;

#[async_trait]
pub trait RoomRepository: Send + Sync {
    /// Create a room. Duplicate room number within a hotel is a `Conflict`;
    /// an unknown room type or hotel is a `Validation` error.
    async fn create(&self, new: NewRoom) -> DomainResult<Room>;

    /// Find room by ID
    async fn find_by_id(&self, id: i32) -> DomainResult<Option<Room>>;

    /// All active rooms, ordered by hotel then room number
    async fn find_active(&self) -> DomainResult<Vec<Room>>;

    /// All rooms of one hotel (active and inactive)
    async fn find_by_hotel(&self, hotel_id: &str) -> DomainResult<Vec<Room>>;

    /// Set the active flag (soft activation/deactivation)
    async fn set_active(&self, id: i32, active: bool) -> DomainResult<()>;

    /// Photos of a room, newest first
    async fn find_photos(&self, room_id: i32) -> DomainResult<Vec<RoomPhoto>>;

    /// Attach a photo to a room
    async fn add_photo(&self, new: NewRoomPhoto) -> DomainResult<RoomPhoto>;
}

#[async_trait]
pub trait RoomTypeRepository: Send + Sync {
    /// Create a room type. Duplicate name is a `Conflict`.
    async fn create(&self, new: NewRoomType) -> DomainResult<RoomType>;

    /// Find room type by ID
    async fn find_by_id(&self, id: i32) -> DomainResult<Option<RoomType>>;

    /// All room types, ordered by name
    async fn find_all(&self) -> DomainResult<Vec<RoomType>>;

    /// Update a room type
    async fn update(&self, id: i32, update: UpdateRoomType) -> DomainResult<RoomType>;
}
