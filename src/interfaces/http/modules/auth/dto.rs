//! Authentication DTOs

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::domain::User;

/// Login request
#[derive(Debug, Deserialize, Validate, ToSchema)]
#[schema(example = json!({
    "email": "ana@example.com",
    "password": "secret123!"
}))]
pub struct LoginRequest {
    #[validate(email)]
    pub email: String,
    #[validate(length(min = 1))]
    pub password: String,
}

/// Successful login response.
///
/// Pass the token in the `Authorization: Bearer <token>` header.
#[derive(Debug, Serialize, ToSchema)]
pub struct LoginResponse {
    /// JWT access token
    pub token: String,
    /// Token type (always `Bearer`)
    pub token_type: String,
    /// Token lifetime in seconds
    pub expires_in: i64,
    pub user: UserInfo,
}

/// User account details
#[derive(Debug, Serialize, ToSchema)]
pub struct UserInfo {
    /// User ID (UUID)
    pub id: String,
    pub email: String,
    /// Role: `client`, `company`, `admin`
    pub role: String,
}

impl From<User> for UserInfo {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            email: user.email,
            role: user.role.as_str().to_string(),
        }
    }
}

/// Registration request.
///
/// `role` is `client` or `company`; client registrations also need the
/// guest-profile fields (`national_id`, `first_name`).
#[derive(Debug, Deserialize, Validate, ToSchema)]
#[schema(example = json!({
    "email": "ana@example.com",
    "password": "secret123!",
    "role": "client",
    "national_id": "1-2345-6789",
    "first_name": "Ana",
    "last_name": "Rojas"
}))]
pub struct RegisterRequest {
    #[validate(email)]
    pub email: String,
    /// Minimum 8 characters
    #[validate(length(min = 8))]
    pub password: String,
    /// `client` or `company`
    pub role: String,
    pub national_id: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub phone: Option<String>,
}

/// Password change request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct ChangePasswordRequest {
    /// Current password, for confirmation
    #[validate(length(min = 1))]
    pub current_password: String,
    /// New password (minimum 8 characters)
    #[validate(length(min = 8))]
    pub new_password: String,
}

/// Logout confirmation
#[derive(Debug, Serialize, ToSchema)]
pub struct LogoutResponse {
    pub message: String,
}
