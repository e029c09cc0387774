//! Room-type HTTP handlers
//!
//! The catalog is readable by anyone; changes require company or admin.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Extension, Json,
};

use crate::domain::{DomainError, NewRoomType, RepositoryProvider, UpdateRoomType, UserRole};
use crate::interfaces::http::common::{domain_error_response, ApiResponse, ValidatedJson};
use crate::interfaces::http::middleware::AuthenticatedUser;

use super::dto::*;

/// State for room-type handlers
#[derive(Clone)]
pub struct RoomTypeHandlerState {
    pub repos: Arc<dyn RepositoryProvider>,
}

/// List room types (public)
#[utoipa::path(
    get,
    path = "/api/v1/room-types",
    tag = "Room Types",
    responses(
        (status = 200, description = "Room type catalog", body = ApiResponse<Vec<RoomTypeDto>>)
    )
)]
pub async fn list_room_types(
    State(state): State<RoomTypeHandlerState>,
) -> Result<Json<ApiResponse<Vec<RoomTypeDto>>>, (StatusCode, Json<ApiResponse<Vec<RoomTypeDto>>>)>
{
    let types = state
        .repos
        .room_types()
        .find_all()
        .await
        .map_err(domain_error_response)?;

    Ok(Json(ApiResponse::success(
        types.into_iter().map(RoomTypeDto::from).collect(),
    )))
}

/// Get a room type by ID (public)
#[utoipa::path(
    get,
    path = "/api/v1/room-types/{id}",
    tag = "Room Types",
    params(("id" = i32, Path, description = "Room type ID")),
    responses(
        (status = 200, description = "Room type details", body = ApiResponse<RoomTypeDto>),
        (status = 404, description = "Not found")
    )
)]
pub async fn get_room_type(
    State(state): State<RoomTypeHandlerState>,
    Path(id): Path<i32>,
) -> Result<Json<ApiResponse<RoomTypeDto>>, (StatusCode, Json<ApiResponse<RoomTypeDto>>)> {
    let room_type = state
        .repos
        .room_types()
        .find_by_id(id)
        .await
        .map_err(domain_error_response)?
        .ok_or_else(|| {
            domain_error_response(DomainError::NotFound {
                entity: "RoomType",
                field: "id",
                value: id.to_string(),
            })
        })?;

    Ok(Json(ApiResponse::success(RoomTypeDto::from(room_type))))
}

/// Create a room type (company or admin)
#[utoipa::path(
    post,
    path = "/api/v1/room-types",
    tag = "Room Types",
    security(("bearer_auth" = [])),
    request_body = CreateRoomTypeRequest,
    responses(
        (status = 201, description = "Room type created", body = ApiResponse<RoomTypeDto>),
        (status = 409, description = "Name already used")
    )
)]
pub async fn create_room_type(
    State(state): State<RoomTypeHandlerState>,
    Extension(user): Extension<AuthenticatedUser>,
    ValidatedJson(request): ValidatedJson<CreateRoomTypeRequest>,
) -> Result<
    (StatusCode, Json<ApiResponse<RoomTypeDto>>),
    (StatusCode, Json<ApiResponse<RoomTypeDto>>),
> {
    user.require_role(&[UserRole::Company, UserRole::Admin])
        .map_err(domain_error_response)?;

    let room_type = state
        .repos
        .room_types()
        .create(NewRoomType {
            name: request.name,
            description: request.description,
            nightly_rate_cents: request.nightly_rate_cents,
        })
        .await
        .map_err(domain_error_response)?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(RoomTypeDto::from(room_type))),
    ))
}

/// Update a room type (company or admin)
#[utoipa::path(
    put,
    path = "/api/v1/room-types/{id}",
    tag = "Room Types",
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "Room type ID")),
    request_body = UpdateRoomTypeRequest,
    responses(
        (status = 200, description = "Room type updated", body = ApiResponse<RoomTypeDto>),
        (status = 404, description = "Not found")
    )
)]
pub async fn update_room_type(
    State(state): State<RoomTypeHandlerState>,
    Extension(user): Extension<AuthenticatedUser>,
    Path(id): Path<i32>,
    ValidatedJson(request): ValidatedJson<UpdateRoomTypeRequest>,
) -> Result<Json<ApiResponse<RoomTypeDto>>, (StatusCode, Json<ApiResponse<RoomTypeDto>>)> {
    user.require_role(&[UserRole::Company, UserRole::Admin])
        .map_err(domain_error_response)?;

    let updated = state
        .repos
        .room_types()
        .update(
            id,
            UpdateRoomType {
                name: request.name,
                description: request.description,
                nightly_rate_cents: request.nightly_rate_cents,
            },
        )
        .await
        .map_err(domain_error_response)?;

    Ok(Json(ApiResponse::success(RoomTypeDto::from(updated))))
}
