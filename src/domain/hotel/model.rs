//! Hotel domain entity

use chrono::{DateTime, Utc};

/// Lodging company. The tax ID (cédula jurídica) is the natural primary
/// key, assigned by the registrar, not generated here.
#[derive(Debug, Clone)]
pub struct Hotel {
    /// Legal tax identifier (primary key)
    pub tax_id: String,
    pub name: String,
    /// Kind of lodging (hotel, hostel, cabin, ...)
    pub lodging_type: String,
    pub province: String,
    pub canton: String,
    pub district: String,
    pub address: Option<String>,
    pub email: String,
    pub website: Option<String>,
    pub social_links: Option<String>,
    /// Contact phone numbers
    pub phones: Vec<String>,
    /// Offered amenities (pool, wifi, breakfast, ...)
    pub amenities: Vec<String>,
    /// Account of the owning company user
    pub owner_user_id: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Data needed to register a hotel
#[derive(Debug, Clone)]
pub struct NewHotel {
    pub tax_id: String,
    pub name: String,
    pub lodging_type: String,
    pub province: String,
    pub canton: String,
    pub district: String,
    pub address: Option<String>,
    pub email: String,
    pub website: Option<String>,
    pub social_links: Option<String>,
    pub phones: Vec<String>,
    pub amenities: Vec<String>,
    pub owner_user_id: String,
}

/// Updatable hotel fields; `None` leaves the stored value untouched
#[derive(Debug, Clone, Default)]
pub struct UpdateHotel {
    pub name: Option<String>,
    pub email: Option<String>,
    pub website: Option<String>,
    pub social_links: Option<String>,
    pub phones: Option<Vec<String>>,
    pub amenities: Option<Vec<String>>,
}

/// Listing filters (all optional, AND-combined)
#[derive(Debug, Clone, Default)]
pub struct HotelFilter {
    pub province: Option<String>,
    pub lodging_type: Option<String>,
    /// Substring match on the hotel name
    pub name: Option<String>,
}
