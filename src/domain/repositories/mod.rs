//! Repository provider: one injection point for all persistence access

use crate::domain::client::ClientRepository;
use crate::domain::hotel::HotelRepository;
use crate::domain::reservation::ReservationRepository;
use crate::domain::room::{RoomRepository, RoomTypeRepository};
use crate::domain::user::UserRepository;

/// Aggregated access to all repositories.
///
/// Constructed once at startup and passed into services and handlers —
/// there is no ambient/global connection state, so tests can substitute
/// an in-memory implementation.
pub trait RepositoryProvider: Send + Sync {
    fn users(&self) -> &dyn UserRepository;
    fn clients(&self) -> &dyn ClientRepository;
    fn hotels(&self) -> &dyn HotelRepository;
    fn rooms(&self) -> &dyn RoomRepository;
    fn room_types(&self) -> &dyn RoomTypeRepository;
    fn reservations(&self) -> &dyn ReservationRepository;
}
