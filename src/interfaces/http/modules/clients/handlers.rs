//! Client HTTP handlers

use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Extension, Json,
};

use crate::domain::{
    Client, DomainError, NewClient, RepositoryProvider, UpdateClient, UserRole,
};
use crate::interfaces::http::common::{
    domain_error_response, ApiResponse, PaginatedResponse, ValidatedJson,
};
use crate::interfaces::http::middleware::AuthenticatedUser;

use super::dto::*;

/// State for client handlers
#[derive(Clone)]
pub struct ClientHandlerState {
    pub repos: Arc<dyn RepositoryProvider>,
}

/// Who may read/modify a client record. Exhaustive over `UserRole`.
fn can_touch(user: &AuthenticatedUser, client: &Client) -> bool {
    match user.role {
        UserRole::Admin | UserRole::Company => true,
        UserRole::Client => client.user_id.as_deref() == Some(user.user_id.as_str()),
    }
}

/// List clients (paginated, optional search)
#[utoipa::path(
    get,
    path = "/api/v1/clients",
    tag = "Clients",
    security(("bearer_auth" = [])),
    params(ListClientsParams),
    responses(
        (status = 200, description = "Client list", body = PaginatedResponse<ClientDto>),
        (status = 403, description = "Clients may not list other clients")
    )
)]
pub async fn list_clients(
    State(state): State<ClientHandlerState>,
    Extension(user): Extension<AuthenticatedUser>,
    Query(params): Query<ListClientsParams>,
) -> Result<Json<PaginatedResponse<ClientDto>>, (StatusCode, Json<ApiResponse<()>>)> {
    user.require_role(&[UserRole::Company, UserRole::Admin])
        .map_err(domain_error_response)?;

    let result = state
        .repos
        .clients()
        .list(params.search.as_deref(), params.page, params.limit)
        .await
        .map_err(domain_error_response)?;

    let items: Vec<ClientDto> = result.items.into_iter().map(ClientDto::from).collect();
    Ok(Json(PaginatedResponse::new(
        items,
        result.total,
        result.page,
        result.limit,
    )))
}

/// Get a client by ID
#[utoipa::path(
    get,
    path = "/api/v1/clients/{id}",
    tag = "Clients",
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "Client ID")),
    responses(
        (status = 200, description = "Client details", body = ApiResponse<ClientDto>),
        (status = 404, description = "Not found")
    )
)]
pub async fn get_client(
    State(state): State<ClientHandlerState>,
    Extension(user): Extension<AuthenticatedUser>,
    Path(id): Path<i32>,
) -> Result<Json<ApiResponse<ClientDto>>, (StatusCode, Json<ApiResponse<ClientDto>>)> {
    let client = state
        .repos
        .clients()
        .find_by_id(id)
        .await
        .map_err(domain_error_response)?
        .ok_or_else(|| {
            domain_error_response(DomainError::NotFound {
                entity: "Client",
                field: "id",
                value: id.to_string(),
            })
        })?;

    if !can_touch(&user, &client) {
        return Err(domain_error_response(DomainError::Forbidden(
            "clients may only access their own profile".into(),
        )));
    }

    Ok(Json(ApiResponse::success(ClientDto::from(client))))
}

/// Register a client
#[utoipa::path(
    post,
    path = "/api/v1/clients",
    tag = "Clients",
    security(("bearer_auth" = [])),
    request_body = CreateClientRequest,
    responses(
        (status = 201, description = "Client created", body = ApiResponse<ClientDto>),
        (status = 409, description = "National ID or email already registered")
    )
)]
pub async fn create_client(
    State(state): State<ClientHandlerState>,
    Extension(user): Extension<AuthenticatedUser>,
    ValidatedJson(request): ValidatedJson<CreateClientRequest>,
) -> Result<(StatusCode, Json<ApiResponse<ClientDto>>), (StatusCode, Json<ApiResponse<ClientDto>>)>
{
    user.require_role(&[UserRole::Company, UserRole::Admin])
        .map_err(domain_error_response)?;

    if state
        .repos
        .clients()
        .find_by_national_id(&request.national_id)
        .await
        .map_err(domain_error_response)?
        .is_some()
    {
        return Err(domain_error_response(DomainError::Conflict(
            "National ID already registered".into(),
        )));
    }

    let client = state
        .repos
        .clients()
        .create(NewClient {
            national_id: request.national_id,
            first_name: request.first_name,
            last_name: request.last_name,
            email: request.email,
            phone: request.phone,
            user_id: None,
        })
        .await
        .map_err(domain_error_response)?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(ClientDto::from(client))),
    ))
}

/// Update a client
#[utoipa::path(
    put,
    path = "/api/v1/clients/{id}",
    tag = "Clients",
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "Client ID")),
    request_body = UpdateClientRequest,
    responses(
        (status = 200, description = "Client updated", body = ApiResponse<ClientDto>),
        (status = 404, description = "Not found")
    )
)]
pub async fn update_client(
    State(state): State<ClientHandlerState>,
    Extension(user): Extension<AuthenticatedUser>,
    Path(id): Path<i32>,
    ValidatedJson(request): ValidatedJson<UpdateClientRequest>,
) -> Result<Json<ApiResponse<ClientDto>>, (StatusCode, Json<ApiResponse<ClientDto>>)> {
    let client = state
        .repos
        .clients()
        .find_by_id(id)
        .await
        .map_err(domain_error_response)?
        .ok_or_else(|| {
            domain_error_response(DomainError::NotFound {
                entity: "Client",
                field: "id",
                value: id.to_string(),
            })
        })?;

    if !can_touch(&user, &client) {
        return Err(domain_error_response(DomainError::Forbidden(
            "clients may only update their own profile".into(),
        )));
    }

    let updated = state
        .repos
        .clients()
        .update(
            id,
            UpdateClient {
                first_name: request.first_name,
                last_name: request.last_name,
                email: request.email,
                phone: request.phone,
            },
        )
        .await
        .map_err(domain_error_response)?;

    Ok(Json(ApiResponse::success(ClientDto::from(updated))))
}

/// Delete a client
///
/// Refused with 409 while the client holds confirmed reservations.
#[utoipa::path(
    delete,
    path = "/api/v1/clients/{id}",
    tag = "Clients",
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "Client ID")),
    responses(
        (status = 200, description = "Client deleted"),
        (status = 404, description = "Not found"),
        (status = 409, description = "Client has confirmed reservations")
    )
)]
pub async fn delete_client(
    State(state): State<ClientHandlerState>,
    Extension(user): Extension<AuthenticatedUser>,
    Path(id): Path<i32>,
) -> Result<Json<ApiResponse<()>>, (StatusCode, Json<ApiResponse<()>>)> {
    user.require_role(&[UserRole::Admin])
        .map_err(domain_error_response)?;

    state
        .repos
        .clients()
        .delete(id)
        .await
        .map_err(domain_error_response)?;

    Ok(Json(ApiResponse::success(())))
}
