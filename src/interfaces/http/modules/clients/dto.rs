//! Client DTOs

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::domain::Client;

/// Client details in API responses
#[derive(Debug, Serialize, ToSchema)]
pub struct ClientDto {
    pub id: i32,
    pub national_id: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: Option<String>,
    pub created_at: String,
}

impl From<Client> for ClientDto {
    fn from(c: Client) -> Self {
        Self {
            id: c.id,
            national_id: c.national_id,
            first_name: c.first_name,
            last_name: c.last_name,
            email: c.email,
            phone: c.phone,
            created_at: c.created_at.to_rfc3339(),
        }
    }
}

/// Request to register a client
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateClientRequest {
    #[validate(length(min = 1, max = 30))]
    pub national_id: String,
    #[validate(length(min = 1, max = 100))]
    pub first_name: String,
    #[validate(length(max = 100))]
    #[serde(default)]
    pub last_name: String,
    #[validate(email)]
    pub email: String,
    pub phone: Option<String>,
}

/// Request to update a client; omitted fields are left unchanged
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdateClientRequest {
    #[validate(length(min = 1, max = 100))]
    pub first_name: Option<String>,
    #[validate(length(max = 100))]
    pub last_name: Option<String>,
    #[validate(email)]
    pub email: Option<String>,
    pub phone: Option<String>,
}

/// Listing query parameters
#[derive(Debug, Deserialize, ToSchema, utoipa::IntoParams)]
pub struct ListClientsParams {
    /// Page number (1-based). Default: 1
    #[serde(default = "default_page")]
    pub page: u32,
    /// Items per page. Default: 50
    #[serde(default = "default_limit")]
    pub limit: u32,
    /// Substring match on name or email
    pub search: Option<String>,
}

fn default_page() -> u32 {
    1
}

fn default_limit() -> u32 {
    50
}
