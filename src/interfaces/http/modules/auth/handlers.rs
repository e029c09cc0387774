//! Authentication HTTP handlers
//!
//! Thin wrappers over `IdentityService`.

use std::sync::Arc;

use axum::{extract::State, http::StatusCode, Extension, Json};

use crate::application::identity::{IdentityService, RegisterRequestData};
use crate::domain::{DomainError, UserRole};
use crate::interfaces::http::common::{domain_error_response, ApiResponse, ValidatedJson};
use crate::interfaces::http::middleware::AuthenticatedUser;

use super::dto::*;

/// State for authentication handlers
#[derive(Clone)]
pub struct AuthHandlerState {
    pub identity: Arc<IdentityService>,
}

/// Log in with email + password
///
/// Returns a JWT on success. Disabled accounts get 401.
#[utoipa::path(
    post,
    path = "/api/v1/auth/login",
    tag = "Authentication",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Authenticated, JWT returned", body = ApiResponse<LoginResponse>),
        (status = 401, description = "Invalid credentials or disabled account")
    )
)]
pub async fn login(
    State(state): State<AuthHandlerState>,
    ValidatedJson(request): ValidatedJson<LoginRequest>,
) -> Result<Json<ApiResponse<LoginResponse>>, (StatusCode, Json<ApiResponse<LoginResponse>>)> {
    let result = state
        .identity
        .login(&request.email, &request.password)
        .await
        .map_err(domain_error_response)?;

    Ok(Json(ApiResponse::success(LoginResponse {
        token: result.token,
        token_type: result.token_type,
        expires_in: result.expires_in,
        user: UserInfo::from(result.user),
    })))
}

/// Register a new account
///
/// `role` must be `client` or `company`. A client registration also
/// creates the linked guest profile.
#[utoipa::path(
    post,
    path = "/api/v1/auth/register",
    tag = "Authentication",
    request_body = RegisterRequest,
    responses(
        (status = 201, description = "Account created", body = ApiResponse<UserInfo>),
        (status = 400, description = "Validation error"),
        (status = 409, description = "Email or national ID already registered")
    )
)]
pub async fn register(
    State(state): State<AuthHandlerState>,
    ValidatedJson(request): ValidatedJson<RegisterRequest>,
) -> Result<(StatusCode, Json<ApiResponse<UserInfo>>), (StatusCode, Json<ApiResponse<UserInfo>>)> {
    let role = UserRole::parse(&request.role).ok_or_else(|| {
        domain_error_response(DomainError::Validation(format!(
            "role must be 'client' or 'company', got '{}'",
            request.role
        )))
    })?;

    let user = state
        .identity
        .register(RegisterRequestData {
            email: request.email,
            password: request.password,
            role,
            first_name: request.first_name,
            last_name: request.last_name,
            national_id: request.national_id,
            phone: request.phone,
        })
        .await
        .map_err(domain_error_response)?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(UserInfo::from(user))),
    ))
}

/// Log out
///
/// Stateless JWT: the client discards the token; nothing is revoked
/// server-side.
#[utoipa::path(
    post,
    path = "/api/v1/auth/logout",
    tag = "Authentication",
    responses(
        (status = 200, description = "Session closed", body = ApiResponse<LogoutResponse>)
    )
)]
pub async fn logout() -> Json<ApiResponse<LogoutResponse>> {
    Json(ApiResponse::success(LogoutResponse {
        message: "Session closed".to_string(),
    }))
}

/// Current authenticated user
#[utoipa::path(
    get,
    path = "/api/v1/auth/me",
    tag = "Authentication",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Current user details", body = ApiResponse<UserInfo>),
        (status = 401, description = "Not authenticated")
    )
)]
pub async fn get_current_user(
    State(state): State<AuthHandlerState>,
    Extension(user): Extension<AuthenticatedUser>,
) -> Result<Json<ApiResponse<UserInfo>>, (StatusCode, Json<ApiResponse<UserInfo>>)> {
    let db_user = state
        .identity
        .get_user(&user.user_id)
        .await
        .map_err(domain_error_response)?
        .ok_or_else(|| {
            domain_error_response(DomainError::NotFound {
                entity: "User",
                field: "id",
                value: user.user_id.clone(),
            })
        })?;

    Ok(Json(ApiResponse::success(UserInfo::from(db_user))))
}

/// Change the current user's password
#[utoipa::path(
    put,
    path = "/api/v1/auth/change-password",
    tag = "Authentication",
    security(("bearer_auth" = [])),
    request_body = ChangePasswordRequest,
    responses(
        (status = 200, description = "Password changed"),
        (status = 400, description = "New password too short"),
        (status = 401, description = "Wrong current password or not authenticated")
    )
)]
pub async fn change_password(
    State(state): State<AuthHandlerState>,
    Extension(user): Extension<AuthenticatedUser>,
    ValidatedJson(request): ValidatedJson<ChangePasswordRequest>,
) -> Result<Json<ApiResponse<()>>, (StatusCode, Json<ApiResponse<()>>)> {
    state
        .identity
        .change_password(
            &user.user_id,
            &request.current_password,
            &request.new_password,
        )
        .await
        .map_err(domain_error_response)?;

    Ok(Json(ApiResponse::success(())))
}
