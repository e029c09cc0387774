pub mod auth;
pub mod clients;
pub mod health;
pub mod hotels;
pub mod metrics;
pub mod request_id;
pub mod reports;
pub mod reservations;
pub mod room_types;
pub mod rooms;
