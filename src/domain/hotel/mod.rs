//! Hotel aggregate: lodging companies and their properties

pub mod model;
pub mod repository;

pub use model::{Hotel, HotelFilter, NewHotel, UpdateHotel};
pub use repository::HotelRepository;
