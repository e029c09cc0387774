//! Room aggregate: rooms, room types and room photos

pub mod model;
pub mod repository;

pub use model::{NewRoom, NewRoomPhoto, NewRoomType, Room, RoomPhoto, RoomType, UpdateRoomType};
pub use repository::{RoomRepository, RoomTypeRepository};
