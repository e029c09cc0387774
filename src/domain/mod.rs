//! Core business entities, value types and repository traits

pub mod client;
pub mod error;
pub mod hotel;
pub mod repositories;
pub mod reservation;
pub mod room;
pub mod user;

pub use client::{Client, ClientRepository, NewClient, UpdateClient};
pub use error::{DomainError, DomainResult};
pub use hotel::{Hotel, HotelFilter, HotelRepository, NewHotel, UpdateHotel};
pub use repositories::RepositoryProvider;
pub use reservation::{
    Availability, NewReservation, Reservation, ReservationRepository, ReservationStatus, StayRange,
};
pub use room::{
    NewRoom, NewRoomPhoto, NewRoomType, Room, RoomPhoto, RoomRepository, RoomType,
    RoomTypeRepository, UpdateRoomType,
};
pub use user::{NewUser, User, UserRepository, UserRole};
