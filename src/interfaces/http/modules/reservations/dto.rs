//! Reservation DTOs

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::domain::Reservation;

/// Request to create a reservation.
///
/// `client_id` may be omitted by client accounts (their own profile is
/// used); company/admin callers must provide it.
#[derive(Debug, Deserialize, Validate, ToSchema)]
#[schema(example = json!({
    "room_id": 7,
    "check_in": "2024-06-01",
    "check_out": "2024-06-05",
    "guests": 2
}))]
pub struct CreateReservationRequest {
    #[validate(range(min = 1))]
    pub room_id: i32,
    pub client_id: Option<i32>,
    /// First night (inclusive)
    pub check_in: NaiveDate,
    /// Checkout day (exclusive)
    pub check_out: NaiveDate,
    #[validate(range(min = 1))]
    #[serde(default = "default_guests")]
    pub guests: i32,
}

fn default_guests() -> i32 {
    1
}

/// Request to reschedule a reservation
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdateReservationRequest {
    pub check_in: NaiveDate,
    pub check_out: NaiveDate,
    #[validate(range(min = 1))]
    pub guests: i32,
}

/// Availability check request
#[derive(Debug, Deserialize, Validate, ToSchema)]
#[schema(example = json!({
    "room_id": 7,
    "check_in": "2024-06-01",
    "check_out": "2024-06-05"
}))]
pub struct AvailabilityCheckRequest {
    #[validate(range(min = 1))]
    pub room_id: i32,
    pub check_in: NaiveDate,
    pub check_out: NaiveDate,
}

/// Reservation details in API responses
#[derive(Debug, Serialize, ToSchema)]
pub struct ReservationDto {
    pub id: i32,
    pub room_id: i32,
    pub client_id: i32,
    pub check_in: NaiveDate,
    pub check_out: NaiveDate,
    pub guests: i32,
    pub status: String,
    pub created_at: String,
}

impl From<Reservation> for ReservationDto {
    fn from(r: Reservation) -> Self {
        Self {
            id: r.id,
            room_id: r.room_id,
            client_id: r.client_id,
            check_in: r.stay.check_in(),
            check_out: r.stay.check_out(),
            guests: r.guests,
            status: r.status.as_str().to_string(),
            created_at: r.created_at.to_rfc3339(),
        }
    }
}
