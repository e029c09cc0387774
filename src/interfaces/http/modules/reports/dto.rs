//! Report DTOs

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Occupancy of one hotel over a period
#[derive(Debug, Serialize, ToSchema)]
pub struct OccupancyRow {
    pub hotel_id: String,
    pub hotel_name: String,
    /// Active rooms counted for the period
    pub rooms: u64,
    /// Nights in the requested period
    pub period_nights: i64,
    /// Confirmed room-nights falling inside the period
    pub booked_nights: i64,
    /// booked_nights / (rooms * period_nights), 0.0-1.0
    pub occupancy_rate: f64,
}

/// Revenue of one hotel over a period
#[derive(Debug, Serialize, ToSchema)]
pub struct RevenueRow {
    pub hotel_id: String,
    pub hotel_name: String,
    /// Confirmed reservations intersecting the period
    pub reservations: u64,
    /// Billable nights inside the period
    pub nights: i64,
    /// Revenue in cents (nights x nightly rate)
    pub revenue_cents: i64,
}

/// Reservation counts by status
#[derive(Debug, Serialize, ToSchema)]
pub struct ReservationStatusReport {
    pub hotel_id: Option<String>,
    pub confirmed: u64,
    pub cancelled: u64,
    pub completed: u64,
}

/// Booking activity of one client
#[derive(Debug, Serialize, ToSchema)]
pub struct ClientActivityRow {
    pub client_id: i32,
    pub name: String,
    pub email: String,
    pub reservations: u64,
    pub nights: i64,
}

/// Per-hotel summary
#[derive(Debug, Serialize, ToSchema)]
pub struct HotelSummaryRow {
    pub hotel_id: String,
    pub hotel_name: String,
    pub rooms_total: u64,
    pub rooms_active: u64,
    pub confirmed_reservations: u64,
}

/// Common report query parameters
#[derive(Debug, Deserialize, ToSchema, utoipa::IntoParams)]
pub struct ReportParams {
    /// Restrict to one hotel (tax ID)
    pub hotel_id: Option<String>,
    /// Period start (inclusive). Default: 30 days ago
    pub from: Option<chrono::NaiveDate>,
    /// Period end (exclusive). Default: today
    pub to: Option<chrono::NaiveDate>,
}
