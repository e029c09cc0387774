//! API Router with Swagger UI

use std::sync::Arc;

use axum::{
    middleware,
    routing::{get, post, put},
    Router,
};
use metrics_exporter_prometheus::PrometheusHandle;
use sea_orm::DatabaseConnection;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};
use utoipa_swagger_ui::SwaggerUi;

use crate::application::{BookingService, IdentityService};
use crate::domain::RepositoryProvider;
use crate::infrastructure::crypto::jwt::JwtConfig;
use crate::interfaces::http::common::{ApiResponse, PaginatedResponse, PaginationParams};
use crate::interfaces::http::middleware::{auth_middleware, AuthState};
use crate::interfaces::http::modules::metrics::{
    http_metrics_middleware, prometheus_metrics, MetricsState,
};
use crate::interfaces::http::modules::request_id::request_id_middleware;
use crate::interfaces::http::modules::{
    auth, clients, health, hotels, reports, reservations, room_types, rooms,
};

/// Security scheme modifier for OpenAPI
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .description(Some("JWT Bearer token"))
                        .build(),
                ),
            );
        }
    }
}

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    paths(
        // Health
        health::handlers::health_check,
        // Auth
        auth::handlers::login,
        auth::handlers::register,
        auth::handlers::logout,
        auth::handlers::get_current_user,
        auth::handlers::change_password,
        // Clients
        clients::handlers::list_clients,
        clients::handlers::get_client,
        clients::handlers::create_client,
        clients::handlers::update_client,
        clients::handlers::delete_client,
        // Hotels
        hotels::handlers::list_hotels,
        hotels::handlers::get_hotel,
        hotels::handlers::create_hotel,
        hotels::handlers::update_hotel,
        // Room types
        room_types::handlers::list_room_types,
        room_types::handlers::get_room_type,
        room_types::handlers::create_room_type,
        room_types::handlers::update_room_type,
        // Rooms
        rooms::handlers::list_rooms,
        rooms::handlers::list_rooms_by_hotel,
        rooms::handlers::get_room,
        rooms::handlers::create_room,
        rooms::handlers::update_room,
        rooms::handlers::delete_room,
        rooms::handlers::add_room_photo,
        rooms::handlers::check_room_availability,
        // Reservations
        reservations::handlers::create_reservation,
        reservations::handlers::list_reservations,
        reservations::handlers::get_reservation,
        reservations::handlers::list_reservations_by_client,
        reservations::handlers::update_reservation,
        reservations::handlers::cancel_reservation,
        reservations::handlers::check_availability,
        // Reports
        reports::handlers::occupancy_report,
        reports::handlers::revenue_report,
        reports::handlers::reservation_status_report,
        reports::handlers::client_activity_report,
        reports::handlers::hotel_summary_report,
    ),
    components(
        schemas(
            // Common
            ApiResponse<String>,
            PaginationParams,
            PaginatedResponse<clients::dto::ClientDto>,
            // Health
            health::handlers::HealthResponse,
            // Auth
            auth::dto::LoginRequest,
            auth::dto::LoginResponse,
            auth::dto::RegisterRequest,
            auth::dto::ChangePasswordRequest,
            auth::dto::UserInfo,
            auth::dto::LogoutResponse,
            // Clients
            clients::dto::ClientDto,
            clients::dto::CreateClientRequest,
            clients::dto::UpdateClientRequest,
            // Hotels
            hotels::dto::HotelDto,
            hotels::dto::CreateHotelRequest,
            hotels::dto::UpdateHotelRequest,
            // Room types
            room_types::dto::RoomTypeDto,
            room_types::dto::CreateRoomTypeRequest,
            room_types::dto::UpdateRoomTypeRequest,
            // Rooms
            rooms::dto::RoomDto,
            rooms::dto::RoomDetailDto,
            rooms::dto::RoomTypeSummary,
            rooms::dto::RoomPhotoDto,
            rooms::dto::CreateRoomRequest,
            rooms::dto::UpdateRoomRequest,
            rooms::dto::AddRoomPhotoRequest,
            rooms::dto::RoomAvailabilityRequest,
            rooms::dto::AvailabilityDto,
            // Reservations
            reservations::dto::ReservationDto,
            reservations::dto::CreateReservationRequest,
            reservations::dto::UpdateReservationRequest,
            reservations::dto::AvailabilityCheckRequest,
            // Reports
            reports::dto::OccupancyRow,
            reports::dto::RevenueRow,
            reports::dto::ReservationStatusReport,
            reports::dto::ClientActivityRow,
            reports::dto::HotelSummaryRow,
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "Health", description = "Server health check"),
        (name = "Authentication", description = "Login (JWT), registration, password change"),
        (name = "Clients", description = "Guest profile management"),
        (name = "Hotels", description = "Hotel registry: browse, register, update"),
        (name = "Room Types", description = "Priced room categories"),
        (name = "Rooms", description = "Room catalog, photos and per-room availability"),
        (name = "Reservations", description = "Bookings: create, reschedule, cancel, availability"),
        (name = "Reports", description = "Occupancy, revenue and activity reports"),
    ),
    info(
        title = "Posada Booking API",
        version = "1.0.0",
        description = "REST API for the room-booking marketplace",
        license(name = "MIT")
    )
)]
pub struct ApiDoc;

/// Create the API router with all routes
#[allow(clippy::too_many_arguments)]
pub fn create_api_router(
    repos: Arc<dyn RepositoryProvider>,
    db: DatabaseConnection,
    jwt_config: JwtConfig,
    identity: Arc<IdentityService>,
    booking: Arc<BookingService>,
    prometheus_handle: PrometheusHandle,
) -> Router {
    let auth_state = AuthState { jwt_config };

    // ── Auth ────────────────────────────────────────────────────
    let auth_handler_state = auth::AuthHandlerState { identity };
    let auth_routes = Router::new()
        .route("/login", post(auth::handlers::login))
        .route("/register", post(auth::handlers::register))
        .route("/logout", post(auth::handlers::logout))
        .merge(
            Router::new()
                .route("/me", get(auth::handlers::get_current_user))
                .route("/change-password", put(auth::handlers::change_password))
                .layer(middleware::from_fn_with_state(
                    auth_state.clone(),
                    auth_middleware,
                )),
        )
        .with_state(auth_handler_state);

    // ── Clients (all protected) ─────────────────────────────────
    let client_state = clients::ClientHandlerState {
        repos: repos.clone(),
    };
    let client_routes = Router::new()
        .route(
            "/",
            get(clients::handlers::list_clients).post(clients::handlers::create_client),
        )
        .route(
            "/{id}",
            get(clients::handlers::get_client)
                .put(clients::handlers::update_client)
                .delete(clients::handlers::delete_client),
        )
        .layer(middleware::from_fn_with_state(
            auth_state.clone(),
            auth_middleware,
        ))
        .with_state(client_state);

    // ── Hotels (browse public, manage protected) ────────────────
    let hotel_state = hotels::HotelHandlerState {
        repos: repos.clone(),
    };
    let hotel_routes = Router::new()
        .route("/", get(hotels::handlers::list_hotels))
        .route("/{tax_id}", get(hotels::handlers::get_hotel))
        .merge(
            Router::new()
                .route("/", post(hotels::handlers::create_hotel))
                .route("/{tax_id}", put(hotels::handlers::update_hotel))
                .layer(middleware::from_fn_with_state(
                    auth_state.clone(),
                    auth_middleware,
                )),
        )
        .with_state(hotel_state);

    // ── Room types (browse public, manage protected) ────────────
    let room_type_state = room_types::RoomTypeHandlerState {
        repos: repos.clone(),
    };
    let room_type_routes = Router::new()
        .route("/", get(room_types::handlers::list_room_types))
        .route("/{id}", get(room_types::handlers::get_room_type))
        .merge(
            Router::new()
                .route("/", post(room_types::handlers::create_room_type))
                .route("/{id}", put(room_types::handlers::update_room_type))
                .layer(middleware::from_fn_with_state(
                    auth_state.clone(),
                    auth_middleware,
                )),
        )
        .with_state(room_type_state);

    // ── Rooms (browse + availability public, manage protected) ──
    let room_state = rooms::RoomHandlerState {
        repos: repos.clone(),
        booking: booking.clone(),
    };
    let room_routes = Router::new()
        .route("/", get(rooms::handlers::list_rooms))
        .route("/hotel/{hotel_id}", get(rooms::handlers::list_rooms_by_hotel))
        .route("/{id}", get(rooms::handlers::get_room))
        .route(
            "/{id}/availability",
            post(rooms::handlers::check_room_availability),
        )
        .merge(
            Router::new()
                .route("/", post(rooms::handlers::create_room))
                .route(
                    "/{id}",
                    put(rooms::handlers::update_room).delete(rooms::handlers::delete_room),
                )
                .route("/{id}/photos", post(rooms::handlers::add_room_photo))
                .layer(middleware::from_fn_with_state(
                    auth_state.clone(),
                    auth_middleware,
                )),
        )
        .with_state(room_state);

    // ── Reservations (availability check public, rest protected) ─
    let reservation_state = reservations::ReservationAppState {
        repos: repos.clone(),
        booking,
    };
    let reservation_routes = Router::new()
        .route(
            "/availability/check",
            post(reservations::handlers::check_availability),
        )
        .merge(
            Router::new()
                .route(
                    "/",
                    get(reservations::handlers::list_reservations)
                        .post(reservations::handlers::create_reservation),
                )
                .route(
                    "/{id}",
                    get(reservations::handlers::get_reservation)
                        .put(reservations::handlers::update_reservation),
                )
                .route(
                    "/{id}/cancel",
                    post(reservations::handlers::cancel_reservation),
                )
                .route(
                    "/client/{client_id}",
                    get(reservations::handlers::list_reservations_by_client),
                )
                .layer(middleware::from_fn_with_state(
                    auth_state.clone(),
                    auth_middleware,
                )),
        )
        .with_state(reservation_state);

    // ── Reports (protected) ─────────────────────────────────────
    let report_state = reports::ReportState { db };
    let report_routes = Router::new()
        .route("/occupancy", get(reports::handlers::occupancy_report))
        .route("/revenue", get(reports::handlers::revenue_report))
        .route(
            "/reservations",
            get(reports::handlers::reservation_status_report),
        )
        .route("/clients", get(reports::handlers::client_activity_report))
        .route(
            "/summary/hotels",
            get(reports::handlers::hotel_summary_report),
        )
        .layer(middleware::from_fn_with_state(
            auth_state,
            auth_middleware,
        ))
        .with_state(report_state);

    // ── Metrics ─────────────────────────────────────────────────
    let metrics_state = MetricsState {
        handle: prometheus_handle,
    };
    let metrics_routes = Router::new()
        .route("/metrics", get(prometheus_metrics))
        .with_state(metrics_state);

    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let swagger_routes = SwaggerUi::new("/docs").url("/api-doc/openapi.json", ApiDoc::openapi());

    // Build router
    Router::new()
        // Swagger UI
        .merge(swagger_routes)
        // Health + metrics
        .route("/health", get(health::handlers::health_check))
        .merge(metrics_routes)
        // Resources
        .nest("/api/v1/auth", auth_routes)
        .nest("/api/v1/clients", client_routes)
        .nest("/api/v1/hotels", hotel_routes)
        .nest("/api/v1/room-types", room_type_routes)
        .nest("/api/v1/rooms", room_routes)
        .nest("/api/v1/reservations", reservation_routes)
        .nest("/api/v1/reports", report_routes)
        // Middleware
        .layer(middleware::from_fn(http_metrics_middleware))
        .layer(middleware::from_fn(request_id_middleware))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}
