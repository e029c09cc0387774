//! SeaORM implementation of RepositoryProvider

use sea_orm::DatabaseConnection;

use crate::domain::client::ClientRepository;
use crate::domain::hotel::HotelRepository;
use crate::domain::repositories::RepositoryProvider;
use crate::domain::reservation::ReservationRepository;
use crate::domain::room::{RoomRepository, RoomTypeRepository};
use crate::domain::user::UserRepository;

use super::client_repository::SeaOrmClientRepository;
use super::hotel_repository::SeaOrmHotelRepository;
use super::reservation_repository::SeaOrmReservationRepository;
use super::room_repository::{SeaOrmRoomRepository, SeaOrmRoomTypeRepository};
use super::user_repository::SeaOrmUserRepository;

/// Unified repository provider backed by SeaORM.
///
/// Holds one connection pool and exposes per-aggregate repository
/// accessors.
///
/// ```ignore
/// let repos = SeaOrmRepositoryProvider::new(db.clone());
/// let room = repos.rooms().find_by_id(7).await?;
/// let conflicts = repos.reservations().find_conflicting(7, &stay, None).await?;
/// ```
pub struct SeaOrmRepositoryProvider {
    users: SeaOrmUserRepository,
    clients: SeaOrmClientRepository,
    hotels: SeaOrmHotelRepository,
    rooms: SeaOrmRoomRepository,
    room_types: SeaOrmRoomTypeRepository,
    reservations: SeaOrmReservationRepository,
}

impl SeaOrmRepositoryProvider {
    pub fn new(db: DatabaseConnection) -> Self {
        Self {
            users: SeaOrmUserRepository::new(db.clone()),
            clients: SeaOrmClientRepository::new(db.clone()),
            hotels: SeaOrmHotelRepository::new(db.clone()),
            rooms: SeaOrmRoomRepository::new(db.clone()),
            room_types: SeaOrmRoomTypeRepository::new(db.clone()),
            reservations: SeaOrmReservationRepository::new(db),
        }
    }
}

impl RepositoryProvider for SeaOrmRepositoryProvider {
    fn users(&self) -> &dyn UserRepository {
        &self.users
    }

    fn clients(&self) -> &dyn ClientRepository {
        &self.clients
    }

    fn hotels(&self) -> &dyn HotelRepository {
        &self.hotels
    }

    fn rooms(&self) -> &dyn RoomRepository {
        &self.rooms
    }

    fn room_types(&self) -> &dyn RoomTypeRepository {
        &self.room_types
    }

    fn reservations(&self) -> &dyn ReservationRepository {
        &self.reservations
    }
}
