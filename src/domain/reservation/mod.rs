//! Reservation aggregate: booking records and the stay-interval value type

pub mod model;
pub mod repository;

pub use model::{Availability, NewReservation, Reservation, ReservationStatus, StayRange};
pub use repository::ReservationRepository;
