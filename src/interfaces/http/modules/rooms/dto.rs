//! Room DTOs

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::domain::{Availability, Room, RoomPhoto, RoomType};

/// Room summary in API responses
#[derive(Debug, Serialize, ToSchema)]
pub struct RoomDto {
    pub id: i32,
    pub room_number: String,
    pub hotel_id: String,
    pub room_type_id: i32,
    pub is_active: bool,
}

impl From<Room> for RoomDto {
    fn from(r: Room) -> Self {
        Self {
            id: r.id,
            room_number: r.room_number,
            hotel_id: r.hotel_id,
            room_type_id: r.room_type_id,
            is_active: r.is_active,
        }
    }
}

/// Photo metadata
#[derive(Debug, Serialize, ToSchema)]
pub struct RoomPhotoDto {
    pub id: i32,
    pub path: String,
    pub description: Option<String>,
    pub uploaded_at: String,
}

impl From<RoomPhoto> for RoomPhotoDto {
    fn from(p: RoomPhoto) -> Self {
        Self {
            id: p.id,
            path: p.path,
            description: p.description,
            uploaded_at: p.uploaded_at.to_rfc3339(),
        }
    }
}

/// Room detail: the room, its priced type and its photos
#[derive(Debug, Serialize, ToSchema)]
pub struct RoomDetailDto {
    pub id: i32,
    pub room_number: String,
    pub hotel_id: String,
    pub is_active: bool,
    pub room_type: RoomTypeSummary,
    pub photos: Vec<RoomPhotoDto>,
}

/// Embedded room-type info
#[derive(Debug, Serialize, ToSchema)]
pub struct RoomTypeSummary {
    pub id: i32,
    pub name: String,
    pub description: Option<String>,
    /// Price per night in cents
    pub nightly_rate_cents: i64,
}

impl From<RoomType> for RoomTypeSummary {
    fn from(t: RoomType) -> Self {
        Self {
            id: t.id,
            name: t.name,
            description: t.description,
            nightly_rate_cents: t.nightly_rate_cents,
        }
    }
}

/// Request to create a room
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateRoomRequest {
    #[validate(length(min = 1, max = 20))]
    pub room_number: String,
    #[validate(length(min = 1, max = 30))]
    pub hotel_id: String,
    #[validate(range(min = 1))]
    pub room_type_id: i32,
}

/// Request to change a room's active flag
#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateRoomRequest {
    pub is_active: bool,
}

/// Request to attach a photo
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct AddRoomPhotoRequest {
    #[validate(length(min = 1, max = 500))]
    pub path: String,
    pub description: Option<String>,
}

/// Room-scoped availability request
#[derive(Debug, Deserialize, ToSchema)]
#[schema(example = json!({
    "check_in": "2024-06-01",
    "check_out": "2024-06-05"
}))]
pub struct RoomAvailabilityRequest {
    pub check_in: NaiveDate,
    pub check_out: NaiveDate,
}

/// Availability result
#[derive(Debug, Serialize, ToSchema)]
pub struct AvailabilityDto {
    pub available: bool,
    /// Confirmed reservations overlapping the candidate range
    pub conflicts: u64,
}

impl From<Availability> for AvailabilityDto {
    fn from(a: Availability) -> Self {
        Self {
            available: a.available,
            conflicts: a.conflicts,
        }
    }
}
