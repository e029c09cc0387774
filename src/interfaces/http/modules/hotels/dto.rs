//! Hotel DTOs

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::domain::Hotel;

/// Hotel details in API responses
#[derive(Debug, Serialize, ToSchema)]
pub struct HotelDto {
    /// Legal tax identifier
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
}

impl From<Hotel> for HotelDto {
    fn from(h: Hotel) -> Self {
        Self {
            tax_id: h.tax_id,
            name: h.name,
            lodging_type: h.lodging_type,
            province: h.province,
            canton: h.canton,
            district: h.district,
            address: h.address,
            email: h.email,
            website: h.website,
            social_links: h.social_links,
            phones: h.phones,
            amenities: h.amenities,
        }
    }
}

/// Request to register a hotel
#[derive(Debug, Deserialize, Validate, ToSchema)]
#[schema(example = json!({
    "tax_id": "3-101-123456",
    "name": "Hotel Monteverde",
    "lodging_type": "hotel",
    "province": "Puntarenas",
    "canton": "Monteverde",
    "district": "Santa Elena",
    "email": "reservas@monteverde.example.com",
    "phones": ["+506 2645 0000"],
    "amenities": ["wifi", "breakfast"]
}))]
pub struct CreateHotelRequest {
    #[validate(length(min = 1, max = 30))]
    pub tax_id: String,
    #[validate(length(min = 1, max = 150))]
    pub name: String,
    #[validate(length(min = 1, max = 50))]
    pub lodging_type: String,
    #[validate(length(min = 1, max = 50))]
    pub province: String,
    #[validate(length(min = 1, max = 50))]
    pub canton: String,
    #[validate(length(min = 1, max = 50))]
    pub district: String,
    pub address: Option<String>,
    #[validate(email)]
    pub email: String,
    #[validate(url)]
    pub website: Option<String>,
    pub social_links: Option<String>,
    #[serde(default)]
    pub phones: Vec<String>,
    #[serde(default)]
    pub amenities: Vec<String>,
}

/// Request to update a hotel; omitted fields are left unchanged
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdateHotelRequest {
    #[validate(length(min = 1, max = 150))]
    pub name: Option<String>,
    #[validate(email)]
    pub email: Option<String>,
    #[validate(url)]
    pub website: Option<String>,
    pub social_links: Option<String>,
    pub phones: Option<Vec<String>>,
    pub amenities: Option<Vec<String>>,
}

/// Listing filters
#[derive(Debug, Deserialize, ToSchema, utoipa::IntoParams)]
pub struct ListHotelsParams {
    pub province: Option<String>,
    pub lodging_type: Option<String>,
    /// Substring match on the hotel name
    pub name: Option<String>,
}
