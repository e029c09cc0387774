//! Room HTTP handlers
//!
//! Browsing is public; room management requires the owning company (or
//! an admin). Deletion is a soft deactivation.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Extension, Json,
};

use crate::application::BookingService;
use crate::domain::{DomainError, NewRoom, NewRoomPhoto, RepositoryProvider, UserRole};
use crate::interfaces::http::common::{domain_error_response, ApiResponse, ValidatedJson};
use crate::interfaces::http::middleware::AuthenticatedUser;

use super::dto::*;

/// State for room handlers
#[derive(Clone)]
pub struct RoomHandlerState {
    pub repos: Arc<dyn RepositoryProvider>,
    pub booking: Arc<BookingService>,
}

/// Resolve the room's hotel and check the caller manages it.
async fn ensure_manages_hotel<T>(
    state: &RoomHandlerState,
    user: &AuthenticatedUser,
    hotel_id: &str,
) -> Result<(), (StatusCode, Json<ApiResponse<T>>)> {
    let hotel = state
        .repos
        .hotels()
        .find_by_tax_id(hotel_id)
        .await
        .map_err(domain_error_response)?
        .ok_or_else(|| {
            domain_error_response(DomainError::NotFound {
                entity: "Hotel",
                field: "tax_id",
                value: hotel_id.to_string(),
            })
        })?;

    let allowed = match user.role {
        UserRole::Admin => true,
        UserRole::Company => hotel.owner_user_id == user.user_id,
        UserRole::Client => false,
    };
    if !allowed {
        return Err(domain_error_response(DomainError::Forbidden(
            "only the owning company may manage this hotel's rooms".into(),
        )));
    }
    Ok(())
}

/// List active rooms (public)
#[utoipa::path(
    get,
    path = "/api/v1/rooms",
    tag = "Rooms",
    responses(
        (status = 200, description = "Active rooms", body = ApiResponse<Vec<RoomDto>>)
    )
)]
pub async fn list_rooms(
    State(state): State<RoomHandlerState>,
) -> Result<Json<ApiResponse<Vec<RoomDto>>>, (StatusCode, Json<ApiResponse<Vec<RoomDto>>>)> {
    let rooms = state
        .repos
        .rooms()
        .find_active()
        .await
        .map_err(domain_error_response)?;

    Ok(Json(ApiResponse::success(
        rooms.into_iter().map(RoomDto::from).collect(),
    )))
}

/// List all rooms of a hotel (public)
#[utoipa::path(
    get,
    path = "/api/v1/rooms/hotel/{hotel_id}",
    tag = "Rooms",
    params(("hotel_id" = String, Path, description = "Hotel tax ID")),
    responses(
        (status = 200, description = "Rooms of the hotel", body = ApiResponse<Vec<RoomDto>>)
    )
)]
pub async fn list_rooms_by_hotel(
    State(state): State<RoomHandlerState>,
    Path(hotel_id): Path<String>,
) -> Result<Json<ApiResponse<Vec<RoomDto>>>, (StatusCode, Json<ApiResponse<Vec<RoomDto>>>)> {
    let rooms = state
        .repos
        .rooms()
        .find_by_hotel(&hotel_id)
        .await
        .map_err(domain_error_response)?;

    Ok(Json(ApiResponse::success(
        rooms.into_iter().map(RoomDto::from).collect(),
    )))
}

/// Room detail with type and photos (public)
#[utoipa::path(
    get,
    path = "/api/v1/rooms/{id}",
    tag = "Rooms",
    params(("id" = i32, Path, description = "Room ID")),
    responses(
        (status = 200, description = "Room details", body = ApiResponse<RoomDetailDto>),
        (status = 404, description = "Not found")
    )
)]
pub async fn get_room(
    State(state): State<RoomHandlerState>,
    Path(id): Path<i32>,
) -> Result<Json<ApiResponse<RoomDetailDto>>, (StatusCode, Json<ApiResponse<RoomDetailDto>>)> {
    let room = state
        .repos
        .rooms()
        .find_by_id(id)
        .await
        .map_err(domain_error_response)?
        .ok_or_else(|| {
            domain_error_response(DomainError::NotFound {
                entity: "Room",
                field: "id",
                value: id.to_string(),
            })
        })?;

    let room_type = state
        .repos
        .room_types()
        .find_by_id(room.room_type_id)
        .await
        .map_err(domain_error_response)?
        .ok_or_else(|| {
            domain_error_response(DomainError::NotFound {
                entity: "RoomType",
                field: "id",
                value: room.room_type_id.to_string(),
            })
        })?;

    let photos = state
        .repos
        .rooms()
        .find_photos(id)
        .await
        .map_err(domain_error_response)?;

    Ok(Json(ApiResponse::success(RoomDetailDto {
        id: room.id,
        room_number: room.room_number,
        hotel_id: room.hotel_id,
        is_active: room.is_active,
        room_type: RoomTypeSummary::from(room_type),
        photos: photos.into_iter().map(RoomPhotoDto::from).collect(),
    })))
}

/// Create a room (owning company or admin)
#[utoipa::path(
    post,
    path = "/api/v1/rooms",
    tag = "Rooms",
    security(("bearer_auth" = [])),
    request_body = CreateRoomRequest,
    responses(
        (status = 201, description = "Room created", body = ApiResponse<RoomDto>),
        (status = 400, description = "Unknown room type or hotel"),
        (status = 409, description = "Room number already used in this hotel")
    )
)]
pub async fn create_room(
    State(state): State<RoomHandlerState>,
    Extension(user): Extension<AuthenticatedUser>,
    ValidatedJson(request): ValidatedJson<CreateRoomRequest>,
) -> Result<(StatusCode, Json<ApiResponse<RoomDto>>), (StatusCode, Json<ApiResponse<RoomDto>>)> {
    ensure_manages_hotel(&state, &user, &request.hotel_id).await?;

    if state
        .repos
        .room_types()
        .find_by_id(request.room_type_id)
        .await
        .map_err(domain_error_response)?
        .is_none()
    {
        return Err(domain_error_response(DomainError::Validation(format!(
            "room type {} does not exist",
            request.room_type_id
        ))));
    }

    let room = state
        .repos
        .rooms()
        .create(NewRoom {
            room_number: request.room_number,
            hotel_id: request.hotel_id,
            room_type_id: request.room_type_id,
        })
        .await
        .map_err(domain_error_response)?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(RoomDto::from(room))),
    ))
}

/// Activate or deactivate a room (owning company or admin)
#[utoipa::path(
    put,
    path = "/api/v1/rooms/{id}",
    tag = "Rooms",
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "Room ID")),
    request_body = UpdateRoomRequest,
    responses(
        (status = 200, description = "Room updated"),
        (status = 404, description = "Not found")
    )
)]
pub async fn update_room(
    State(state): State<RoomHandlerState>,
    Extension(user): Extension<AuthenticatedUser>,
    Path(id): Path<i32>,
    Json(request): Json<UpdateRoomRequest>,
) -> Result<Json<ApiResponse<()>>, (StatusCode, Json<ApiResponse<()>>)> {
    let room = state
        .repos
        .rooms()
        .find_by_id(id)
        .await
        .map_err(domain_error_response)?
        .ok_or_else(|| {
            domain_error_response(DomainError::NotFound {
                entity: "Room",
                field: "id",
                value: id.to_string(),
            })
        })?;

    ensure_manages_hotel(&state, &user, &room.hotel_id).await?;

    state
        .repos
        .rooms()
        .set_active(id, request.is_active)
        .await
        .map_err(domain_error_response)?;

    Ok(Json(ApiResponse::success(())))
}

/// Deactivate a room (soft delete)
#[utoipa::path(
    delete,
    path = "/api/v1/rooms/{id}",
    tag = "Rooms",
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "Room ID")),
    responses(
        (status = 200, description = "Room deactivated"),
        (status = 404, description = "Not found")
    )
)]
pub async fn delete_room(
    State(state): State<RoomHandlerState>,
    Extension(user): Extension<AuthenticatedUser>,
    Path(id): Path<i32>,
) -> Result<Json<ApiResponse<()>>, (StatusCode, Json<ApiResponse<()>>)> {
    let room = state
        .repos
        .rooms()
        .find_by_id(id)
        .await
        .map_err(domain_error_response)?
        .ok_or_else(|| {
            domain_error_response(DomainError::NotFound {
                entity: "Room",
                field: "id",
                value: id.to_string(),
            })
        })?;

    ensure_manages_hotel(&state, &user, &room.hotel_id).await?;

    state
        .repos
        .rooms()
        .set_active(id, false)
        .await
        .map_err(domain_error_response)?;

    Ok(Json(ApiResponse::success(())))
}

/// Attach a photo to a room (owning company or admin)
#[utoipa::path(
    post,
    path = "/api/v1/rooms/{id}/photos",
    tag = "Rooms",
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "Room ID")),
    request_body = AddRoomPhotoRequest,
    responses(
        (status = 201, description = "Photo attached", body = ApiResponse<RoomPhotoDto>),
        (status = 404, description = "Room not found")
    )
)]
pub async fn add_room_photo(
    State(state): State<RoomHandlerState>,
    Extension(user): Extension<AuthenticatedUser>,
    Path(id): Path<i32>,
    ValidatedJson(request): ValidatedJson<AddRoomPhotoRequest>,
) -> Result<
    (StatusCode, Json<ApiResponse<RoomPhotoDto>>),
    (StatusCode, Json<ApiResponse<RoomPhotoDto>>),
> {
    let room = state
        .repos
        .rooms()
        .find_by_id(id)
        .await
        .map_err(domain_error_response)?
        .ok_or_else(|| {
            domain_error_response(DomainError::NotFound {
                entity: "Room",
                field: "id",
                value: id.to_string(),
            })
        })?;

    ensure_manages_hotel(&state, &user, &room.hotel_id).await?;

    let photo = state
        .repos
        .rooms()
        .add_photo(NewRoomPhoto {
            room_id: id,
            path: request.path,
            description: request.description,
        })
        .await
        .map_err(domain_error_response)?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(RoomPhotoDto::from(photo))),
    ))
}

/// Room-scoped availability check (public)
///
/// Same semantics as `POST /api/v1/reservations/availability/check`,
/// scoped to the room in the path.
#[utoipa::path(
    post,
    path = "/api/v1/rooms/{id}/availability",
    tag = "Rooms",
    params(("id" = i32, Path, description = "Room ID")),
    request_body = RoomAvailabilityRequest,
    responses(
        (status = 200, description = "Availability result", body = ApiResponse<AvailabilityDto>),
        (status = 400, description = "Invalid date range"),
        (status = 404, description = "Room not found")
    )
)]
pub async fn check_room_availability(
    State(state): State<RoomHandlerState>,
    Path(id): Path<i32>,
    Json(request): Json<RoomAvailabilityRequest>,
) -> Result<Json<ApiResponse<AvailabilityDto>>, (StatusCode, Json<ApiResponse<AvailabilityDto>>)> {
    let availability = state
        .booking
        .check_availability(id, request.check_in, request.check_out)
        .await
        .map_err(domain_error_response)?;

    Ok(Json(ApiResponse::success(AvailabilityDto::from(
        availability,
    ))))
}
