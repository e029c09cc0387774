//! # Posada Booking
//!
//! Room-booking marketplace backend: hotels, rooms, clients,
//! reservations and availability checks over a REST API.
//!
//! ## Architecture
//!
//! - **domain**: Core business entities, value types and repository traits
//! - **application**: Business logic and use-case orchestration
//! - **infrastructure**: External concerns (database, crypto)
//! - **interfaces**: HTTP REST API with Swagger documentation
//! - **shared**: Cross-cutting types (pagination, shutdown)
//!
//! The core invariant lives in `domain::reservation`: no two confirmed
//! reservations for the same room may hold overlapping half-open stay
//! intervals. The check and the write are atomic at the persistence
//! layer, so concurrent bookings cannot both take the last slot.

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod interfaces;
pub mod shared;

pub use config::{default_config_path, AppConfig};

// Re-export database types for easy access
pub use infrastructure::database::repositories::SeaOrmRepositoryProvider;
pub use infrastructure::{init_database, DatabaseConfig};

// Re-export API router
pub use interfaces::http::create_api_router;
