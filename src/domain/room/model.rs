//! Room, room type and room photo domain entities

use chrono::{DateTime, Utc};

/// Room type: a priced category shared across rooms (e.g. "Double deluxe")
#[derive(Debug, Clone)]
pub struct RoomType {
    pub id: i32,
    pub name: String,
    pub description: Option<String>,
    /// Price per night in the smallest currency unit (cents)
    pub nightly_rate_cents: i64,
    pub created_at: DateTime<Utc>,
}

/// Data needed to create a room type
#[derive(Debug, Clone)]
pub struct NewRoomType {
    pub name: String,
    pub description: Option<String>,
    pub nightly_rate_cents: i64,
}

/// Updatable room-type fields; `None` leaves the stored value untouched
#[derive(Debug, Clone, Default)]
pub struct UpdateRoomType {
    pub name: Option<String>,
    pub description: Option<String>,
    pub nightly_rate_cents: Option<i64>,
}

/// Bookable room belonging to one hotel
#[derive(Debug, Clone)]
pub struct Room {
    pub id: i32,
    /// Door number, unique within the hotel
    pub room_number: String,
    pub hotel_id: String,
    pub room_type_id: i32,
    /// Deactivated rooms stay in the catalog but leave public listings
    /// and cannot take new bookings
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Data needed to create a room
#[derive(Debug, Clone)]
pub struct NewRoom {
    pub room_number: String,
    pub hotel_id: String,
    pub room_type_id: i32,
}

/// Photo attached to a room (metadata only; files live elsewhere)
#[derive(Debug, Clone)]
pub struct RoomPhoto {
    pub id: i32,
    pub room_id: i32,
    pub path: String,
    pub description: Option<String>,
    pub uploaded_at: DateTime<Utc>,
}

/// Data needed to attach a photo
#[derive(Debug, Clone)]
pub struct NewRoomPhoto {
    pub room_id: i32,
    pub path: String,
    pub description: Option<String>,
}
