//! SeaORM entity definitions

pub mod client;
pub mod hotel;
pub mod reservation;
pub mod room;
pub mod room_photo;
pub mod room_type;
pub mod user;
