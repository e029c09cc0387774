//! Reservation HTTP handlers
//!
//! Creation and rescheduling go through `BookingService`, whose
//! repository performs the overlap check and the write atomically; a
//! lost race surfaces as 409, never as a double booking.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Extension, Json,
};

use crate::application::BookingService;
use crate::domain::{DomainError, RepositoryProvider, Reservation, UserRole};
use crate::interfaces::http::common::{domain_error_response, ApiResponse, ValidatedJson};
use crate::interfaces::http::middleware::AuthenticatedUser;
use crate::interfaces::http::modules::rooms::dto::AvailabilityDto;

use super::dto::*;

/// State for reservation handlers
#[derive(Clone)]
pub struct ReservationAppState {
    pub repos: Arc<dyn RepositoryProvider>,
    pub booking: Arc<BookingService>,
}

/// The client profile a client-role caller acts on behalf of.
async fn own_client_id<T>(
    state: &ReservationAppState,
    user: &AuthenticatedUser,
) -> Result<i32, (StatusCode, Json<ApiResponse<T>>)> {
    let client = state
        .repos
        .clients()
        .find_by_user_id(&user.user_id)
        .await
        .map_err(domain_error_response)?
        .ok_or_else(|| {
            domain_error_response(DomainError::NotFound {
                entity: "Client",
                field: "user_id",
                value: user.user_id.clone(),
            })
        })?;
    Ok(client.id)
}

/// May the caller see / act on this reservation? Exhaustive over roles.
async fn can_access<T>(
    state: &ReservationAppState,
    user: &AuthenticatedUser,
    reservation: &Reservation,
) -> Result<bool, (StatusCode, Json<ApiResponse<T>>)> {
    Ok(match user.role {
        UserRole::Admin | UserRole::Company => true,
        UserRole::Client => own_client_id(state, user).await? == reservation.client_id,
    })
}

/// Create a reservation
#[utoipa::path(
    post,
    path = "/api/v1/reservations",
    tag = "Reservations",
    security(("bearer_auth" = [])),
    request_body = CreateReservationRequest,
    responses(
        (status = 201, description = "Reservation created", body = ApiResponse<ReservationDto>),
        (status = 400, description = "Invalid dates or inactive room"),
        (status = 404, description = "Room or client not found"),
        (status = 409, description = "Room already booked for an overlapping interval")
    )
)]
pub async fn create_reservation(
    State(state): State<ReservationAppState>,
    Extension(user): Extension<AuthenticatedUser>,
    ValidatedJson(request): ValidatedJson<CreateReservationRequest>,
) -> Result<
    (StatusCode, Json<ApiResponse<ReservationDto>>),
    (StatusCode, Json<ApiResponse<ReservationDto>>),
> {
    let client_id = match user.role {
        UserRole::Client => {
            let own = own_client_id(&state, &user).await?;
            if let Some(requested) = request.client_id {
                if requested != own {
                    return Err(domain_error_response(DomainError::Forbidden(
                        "clients may only book for themselves".into(),
                    )));
                }
            }
            own
        }
        UserRole::Company | UserRole::Admin => request.client_id.ok_or_else(|| {
            domain_error_response(DomainError::Validation("client_id is required".into()))
        })?,
    };

    let reservation = state
        .booking
        .book(
            request.room_id,
            client_id,
            request.check_in,
            request.check_out,
            request.guests,
        )
        .await
        .map_err(domain_error_response)?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(ReservationDto::from(reservation))),
    ))
}

/// List reservations.
///
/// Clients see their own bookings; company and admin accounts see all.
#[utoipa::path(
    get,
    path = "/api/v1/reservations",
    tag = "Reservations",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Reservations", body = ApiResponse<Vec<ReservationDto>>)
    )
)]
pub async fn list_reservations(
    State(state): State<ReservationAppState>,
    Extension(user): Extension<AuthenticatedUser>,
) -> Result<
    Json<ApiResponse<Vec<ReservationDto>>>,
    (StatusCode, Json<ApiResponse<Vec<ReservationDto>>>),
> {
    let reservations = match user.role {
        UserRole::Admin | UserRole::Company => state
            .repos
            .reservations()
            .find_all()
            .await
            .map_err(domain_error_response)?,
        UserRole::Client => {
            let client_id = own_client_id(&state, &user).await?;
            state
                .repos
                .reservations()
                .find_by_client(client_id)
                .await
                .map_err(domain_error_response)?
        }
    };

    Ok(Json(ApiResponse::success(
        reservations.into_iter().map(ReservationDto::from).collect(),
    )))
}

/// Get a reservation by ID
#[utoipa::path(
    get,
    path = "/api/v1/reservations/{id}",
    tag = "Reservations",
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "Reservation ID")),
    responses(
        (status = 200, description = "Reservation details", body = ApiResponse<ReservationDto>),
        (status = 404, description = "Not found")
    )
)]
pub async fn get_reservation(
    State(state): State<ReservationAppState>,
    Extension(user): Extension<AuthenticatedUser>,
    Path(id): Path<i32>,
) -> Result<Json<ApiResponse<ReservationDto>>, (StatusCode, Json<ApiResponse<ReservationDto>>)> {
    let reservation = state
        .repos
        .reservations()
        .find_by_id(id)
        .await
        .map_err(domain_error_response)?
        .ok_or_else(|| {
            domain_error_response(DomainError::NotFound {
                entity: "Reservation",
                field: "id",
                value: id.to_string(),
            })
        })?;

    if !can_access(&state, &user, &reservation).await? {
        return Err(domain_error_response(DomainError::Forbidden(
            "clients may only access their own reservations".into(),
        )));
    }

    Ok(Json(ApiResponse::success(ReservationDto::from(
        reservation,
    ))))
}

/// List reservations of a client
#[utoipa::path(
    get,
    path = "/api/v1/reservations/client/{client_id}",
    tag = "Reservations",
    security(("bearer_auth" = [])),
    params(("client_id" = i32, Path, description = "Client ID")),
    responses(
        (status = 200, description = "Reservations of the client", body = ApiResponse<Vec<ReservationDto>>),
        (status = 403, description = "Clients may only query their own bookings")
    )
)]
pub async fn list_reservations_by_client(
    State(state): State<ReservationAppState>,
    Extension(user): Extension<AuthenticatedUser>,
    Path(client_id): Path<i32>,
) -> Result<
    Json<ApiResponse<Vec<ReservationDto>>>,
    (StatusCode, Json<ApiResponse<Vec<ReservationDto>>>),
> {
    let allowed = match user.role {
        UserRole::Admin | UserRole::Company => true,
        UserRole::Client => own_client_id(&state, &user).await? == client_id,
    };
    if !allowed {
        return Err(domain_error_response(DomainError::Forbidden(
            "clients may only query their own bookings".into(),
        )));
    }

    let reservations = state
        .repos
        .reservations()
        .find_by_client(client_id)
        .await
        .map_err(domain_error_response)?;

    Ok(Json(ApiResponse::success(
        reservations.into_iter().map(ReservationDto::from).collect(),
    )))
}

/// Reschedule a reservation
#[utoipa::path(
    put,
    path = "/api/v1/reservations/{id}",
    tag = "Reservations",
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "Reservation ID")),
    request_body = UpdateReservationRequest,
    responses(
        (status = 200, description = "Reservation rescheduled", body = ApiResponse<ReservationDto>),
        (status = 404, description = "Not found"),
        (status = 409, description = "New dates overlap another booking")
    )
)]
pub async fn update_reservation(
    State(state): State<ReservationAppState>,
    Extension(user): Extension<AuthenticatedUser>,
    Path(id): Path<i32>,
    ValidatedJson(request): ValidatedJson<UpdateReservationRequest>,
) -> Result<Json<ApiResponse<ReservationDto>>, (StatusCode, Json<ApiResponse<ReservationDto>>)> {
    let reservation = state
        .repos
        .reservations()
        .find_by_id(id)
        .await
        .map_err(domain_error_response)?
        .ok_or_else(|| {
            domain_error_response(DomainError::NotFound {
                entity: "Reservation",
                field: "id",
                value: id.to_string(),
            })
        })?;

    if !can_access(&state, &user, &reservation).await? {
        return Err(domain_error_response(DomainError::Forbidden(
            "clients may only modify their own reservations".into(),
        )));
    }

    let updated = state
        .booking
        .reschedule(id, request.check_in, request.check_out, request.guests)
        .await
        .map_err(domain_error_response)?;

    Ok(Json(ApiResponse::success(ReservationDto::from(updated))))
}

/// Cancel a reservation
#[utoipa::path(
    post,
    path = "/api/v1/reservations/{id}/cancel",
    tag = "Reservations",
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "Reservation ID")),
    responses(
        (status = 200, description = "Reservation cancelled"),
        (status = 400, description = "Reservation is not confirmed"),
        (status = 404, description = "Not found")
    )
)]
pub async fn cancel_reservation(
    State(state): State<ReservationAppState>,
    Extension(user): Extension<AuthenticatedUser>,
    Path(id): Path<i32>,
) -> Result<Json<ApiResponse<()>>, (StatusCode, Json<ApiResponse<()>>)> {
    let reservation = state
        .repos
        .reservations()
        .find_by_id(id)
        .await
        .map_err(domain_error_response)?
        .ok_or_else(|| {
            domain_error_response(DomainError::NotFound {
                entity: "Reservation",
                field: "id",
                value: id.to_string(),
            })
        })?;

    if !can_access(&state, &user, &reservation).await? {
        return Err(domain_error_response(DomainError::Forbidden(
            "clients may only cancel their own reservations".into(),
        )));
    }

    state
        .booking
        .cancel(id)
        .await
        .map_err(domain_error_response)?;

    Ok(Json(ApiResponse::success(())))
}

/// Check room availability (public)
///
/// `{ room_id, check_in, check_out }` → `{ available, conflicts }`.
/// Zero-length or inverted ranges are rejected with 400 before any
/// query runs.
#[utoipa::path(
    post,
    path = "/api/v1/reservations/availability/check",
    tag = "Reservations",
    request_body = AvailabilityCheckRequest,
    responses(
        (status = 200, description = "Availability result", body = ApiResponse<AvailabilityDto>),
        (status = 400, description = "Invalid date range"),
        (status = 404, description = "Room not found")
    )
)]
pub async fn check_availability(
    State(state): State<ReservationAppState>,
    ValidatedJson(request): ValidatedJson<AvailabilityCheckRequest>,
) -> Result<Json<ApiResponse<AvailabilityDto>>, (StatusCode, Json<ApiResponse<AvailabilityDto>>)> {
    let availability = state
        .booking
        .check_availability(request.room_id, request.check_in, request.check_out)
        .await
        .map_err(domain_error_response)?;

    Ok(Json(ApiResponse::success(AvailabilityDto::from(
        availability,
    ))))
}
