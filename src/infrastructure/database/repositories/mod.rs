//! SeaORM repository implementations

pub mod client_repository;
pub mod hotel_repository;
pub mod repository_provider;
pub mod reservation_repository;
pub mod room_repository;
pub mod user_repository;

pub use repository_provider::SeaOrmRepositoryProvider;

use crate::domain::DomainError;

/// Translate driver errors into domain errors.
///
/// Unique-constraint violations become `Conflict` (HTTP 409); everything
/// else is a storage error surfaced as a generic 500 with the detail
/// logged at the boundary.
pub(crate) fn map_db_err(e: sea_orm::DbErr) -> DomainError {
    match e.sql_err() {
        Some(sea_orm::SqlErr::UniqueConstraintViolation(msg)) => DomainError::Conflict(msg),
        Some(sea_orm::SqlErr::ForeignKeyConstraintViolation(msg)) => {
            DomainError::Validation(format!("referenced record does not exist: {}", msg))
        }
        _ => DomainError::Storage(e.to_string()),
    }
}
