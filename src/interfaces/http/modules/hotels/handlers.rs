//! Hotel HTTP handlers
//!
//! Listing and detail are public; registration and updates are limited
//! to company accounts (the owner) and admins.

use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Extension, Json,
};

use crate::domain::{
    DomainError, Hotel, HotelFilter, NewHotel, RepositoryProvider, UpdateHotel, UserRole,
};
use crate::interfaces::http::common::{domain_error_response, ApiResponse, ValidatedJson};
use crate::interfaces::http::middleware::AuthenticatedUser;

use super::dto::*;

/// State for hotel handlers
#[derive(Clone)]
pub struct HotelHandlerState {
    pub repos: Arc<dyn RepositoryProvider>,
}

/// Owner company or admin. Exhaustive over `UserRole`.
fn can_manage(user: &AuthenticatedUser, hotel: &Hotel) -> bool {
    match user.role {
        UserRole::Admin => true,
        UserRole::Company => hotel.owner_user_id == user.user_id,
        UserRole::Client => false,
    }
}

/// List hotels (public), with optional filters
#[utoipa::path(
    get,
    path = "/api/v1/hotels",
    tag = "Hotels",
    params(ListHotelsParams),
    responses(
        (status = 200, description = "Hotel list", body = ApiResponse<Vec<HotelDto>>)
    )
)]
pub async fn list_hotels(
    State(state): State<HotelHandlerState>,
    Query(params): Query<ListHotelsParams>,
) -> Result<Json<ApiResponse<Vec<HotelDto>>>, (StatusCode, Json<ApiResponse<Vec<HotelDto>>>)> {
    let filter = HotelFilter {
        province: params.province,
        lodging_type: params.lodging_type,
        name: params.name,
    };

    let hotels = state
        .repos
        .hotels()
        .list(&filter)
        .await
        .map_err(domain_error_response)?;

    Ok(Json(ApiResponse::success(
        hotels.into_iter().map(HotelDto::from).collect(),
    )))
}

/// Get a hotel by tax ID (public)
#[utoipa::path(
    get,
    path = "/api/v1/hotels/{tax_id}",
    tag = "Hotels",
    params(("tax_id" = String, Path, description = "Hotel tax ID")),
    responses(
        (status = 200, description = "Hotel details", body = ApiResponse<HotelDto>),
        (status = 404, description = "Not found")
    )
)]
pub async fn get_hotel(
    State(state): State<HotelHandlerState>,
    Path(tax_id): Path<String>,
) -> Result<Json<ApiResponse<HotelDto>>, (StatusCode, Json<ApiResponse<HotelDto>>)> {
    let hotel = state
        .repos
        .hotels()
        .find_by_tax_id(&tax_id)
        .await
        .map_err(domain_error_response)?
        .ok_or_else(|| {
            domain_error_response(DomainError::NotFound {
                entity: "Hotel",
                field: "tax_id",
                value: tax_id.clone(),
            })
        })?;

    Ok(Json(ApiResponse::success(HotelDto::from(hotel))))
}

/// Register a hotel (company accounts)
#[utoipa::path(
    post,
    path = "/api/v1/hotels",
    tag = "Hotels",
    security(("bearer_auth" = [])),
    request_body = CreateHotelRequest,
    responses(
        (status = 201, description = "Hotel registered", body = ApiResponse<HotelDto>),
        (status = 403, description = "Only company accounts may register hotels"),
        (status = 409, description = "Tax ID or email already registered")
    )
)]
pub async fn create_hotel(
    State(state): State<HotelHandlerState>,
    Extension(user): Extension<AuthenticatedUser>,
    ValidatedJson(request): ValidatedJson<CreateHotelRequest>,
) -> Result<(StatusCode, Json<ApiResponse<HotelDto>>), (StatusCode, Json<ApiResponse<HotelDto>>)> {
    user.require_role(&[UserRole::Company, UserRole::Admin])
        .map_err(domain_error_response)?;

    if state
        .repos
        .hotels()
        .find_by_tax_id(&request.tax_id)
        .await
        .map_err(domain_error_response)?
        .is_some()
    {
        return Err(domain_error_response(DomainError::Conflict(format!(
            "hotel with tax_id {} already registered",
            request.tax_id
        ))));
    }

    let hotel = state
        .repos
        .hotels()
        .create(NewHotel {
            tax_id: request.tax_id,
            name: request.name,
            lodging_type: request.lodging_type,
            province: request.province,
            canton: request.canton,
            district: request.district,
            address: request.address,
            email: request.email,
            website: request.website,
            social_links: request.social_links,
            phones: request.phones,
            amenities: request.amenities,
            owner_user_id: user.user_id,
        })
        .await
        .map_err(domain_error_response)?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(HotelDto::from(hotel))),
    ))
}

/// Update a hotel (owning company or admin)
#[utoipa::path(
    put,
    path = "/api/v1/hotels/{tax_id}",
    tag = "Hotels",
    security(("bearer_auth" = [])),
    params(("tax_id" = String, Path, description = "Hotel tax ID")),
    request_body = UpdateHotelRequest,
    responses(
        (status = 200, description = "Hotel updated", body = ApiResponse<HotelDto>),
        (status = 403, description = "Not the owning company"),
        (status = 404, description = "Not found")
    )
)]
pub async fn update_hotel(
    State(state): State<HotelHandlerState>,
    Extension(user): Extension<AuthenticatedUser>,
    Path(tax_id): Path<String>,
    ValidatedJson(request): ValidatedJson<UpdateHotelRequest>,
) -> Result<Json<ApiResponse<HotelDto>>, (StatusCode, Json<ApiResponse<HotelDto>>)> {
    let hotel = state
        .repos
        .hotels()
        .find_by_tax_id(&tax_id)
        .await
        .map_err(domain_error_response)?
        .ok_or_else(|| {
            domain_error_response(DomainError::NotFound {
                entity: "Hotel",
                field: "tax_id",
                value: tax_id.clone(),
            })
        })?;

    if !can_manage(&user, &hotel) {
        return Err(domain_error_response(DomainError::Forbidden(
            "only the owning company may update this hotel".into(),
        )));
    }

    let updated = state
        .repos
        .hotels()
        .update(
            &tax_id,
            UpdateHotel {
                name: request.name,
                email: request.email,
                website: request.website,
                social_links: request.social_links,
                phones: request.phones,
                amenities: request.amenities,
            },
        )
        .await
        .map_err(domain_error_response)?;

    Ok(Json(ApiResponse::success(HotelDto::from(updated))))
}
