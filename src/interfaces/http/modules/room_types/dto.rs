//! Room-type DTOs

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::domain::RoomType;

/// Room type in API responses
#[derive(Debug, Serialize, ToSchema)]
pub struct RoomTypeDto {
    pub id: i32,
    pub name: String,
    pub description: Option<String>,
    /// Price per night in cents
    pub nightly_rate_cents: i64,
}

impl From<RoomType> for RoomTypeDto {
    fn from(t: RoomType) -> Self {
        Self {
            id: t.id,
            name: t.name,
            description: t.description,
            nightly_rate_cents: t.nightly_rate_cents,
        }
    }
}

/// Request to create a room type
#[derive(Debug, Deserialize, Validate, ToSchema)]
#[schema(example = json!({
    "name": "Double deluxe",
    "description": "Two queen beds, garden view",
    "nightly_rate_cents": 85000
}))]
pub struct CreateRoomTypeRequest {
    #[validate(length(min = 1, max = 100))]
    pub name: String,
    pub description: Option<String>,
    #[validate(range(min = 0))]
    pub nightly_rate_cents: i64,
}

/// Request to update a room type; omitted fields are left unchanged
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdateRoomTypeRequest {
    #[validate(length(min = 1, max = 100))]
    pub name: Option<String>,
    pub description: Option<String>,
    #[validate(range(min = 0))]
    pub nightly_rate_cents: Option<i64>,
}
