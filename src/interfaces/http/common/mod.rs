//! Common API DTOs and helpers

pub mod validated_json;

pub use validated_json::ValidatedJson;

use axum::http::StatusCode;
use axum::Json;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::DomainError;

/// Standard API response wrapper.
///
/// Success: `{"success": true, "data": {...}}`,
/// failure: `{"success": false, "error": "description"}`.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ApiResponse<T> {
    /// `true` when the request succeeded
    pub success: bool,
    /// Payload; `null` on error
    pub data: Option<T>,
    /// Error description; `null` on success
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl<T> ApiResponse<T> {
    pub fn success(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(message.into()),
        }
    }
}

/// Pagination query parameters for list endpoints
#[derive(Debug, Deserialize, ToSchema, utoipa::IntoParams)]
pub struct PaginationParams {
    /// Page number (1-based). Default: 1
    #[serde(default = "default_page")]
    pub page: u32,
    /// Items per page (1-100). Default: 50
    #[serde(default = "default_limit")]
    pub limit: u32,
}

fn default_page() -> u32 {
    1
}

fn default_limit() -> u32 {
    50
}

/// Paginated list response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct PaginatedResponse<T> {
    /// Items on the current page
    pub items: Vec<T>,
    /// Total item count across all pages
    pub total: u64,
    /// Current page (1-based)
    pub page: u32,
    /// Page size
    pub limit: u32,
    /// Total page count
    pub total_pages: u32,
}

impl<T> PaginatedResponse<T> {
    pub fn new(items: Vec<T>, total: u64, page: u32, limit: u32) -> Self {
        let total_pages = ((total as f64) / (limit as f64)).ceil() as u32;
        Self {
            items,
            total,
            page,
            limit,
            total_pages,
        }
    }
}

/// Map a domain error onto the HTTP envelope.
///
/// Storage errors are logged with detail but surface a generic message.
pub fn domain_error_response<T>(e: DomainError) -> (StatusCode, Json<ApiResponse<T>>) {
    let status = match &e {
        DomainError::NotFound { .. } => StatusCode::NOT_FOUND,
        DomainError::Validation(_) => StatusCode::BAD_REQUEST,
        DomainError::Conflict(_) => StatusCode::CONFLICT,
        DomainError::Unavailable { .. } => StatusCode::CONFLICT,
        DomainError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
        DomainError::Forbidden(_) => StatusCode::FORBIDDEN,
        DomainError::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
    };

    if status == StatusCode::INTERNAL_SERVER_ERROR {
        tracing::error!("storage error: {}", e);
        (status, Json(ApiResponse::error("Internal server error")))
    } else {
        (status, Json(ApiResponse::error(e.to_string())))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn storage_error_hides_detail() {
        let (status, body) =
            domain_error_response::<()>(DomainError::Storage("connection refused".into()));
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body.0.error.as_deref(), Some("Internal server error"));
    }

    #[test]
    fn unavailable_maps_to_conflict() {
        let (status, _) = domain_error_response::<()>(DomainError::Unavailable { room_id: 3 });
        assert_eq!(status, StatusCode::CONFLICT);
    }

    #[test]
    fn not_found_maps_to_404() {
        let (status, body) = domain_error_response::<()>(DomainError::NotFound {
            entity: "Room",
            field: "id",
            value: "9".into(),
        });
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert!(body.0.error.unwrap().contains("Room"));
    }
}
