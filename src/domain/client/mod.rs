//! Client aggregate: guest profiles

pub mod model;
pub mod repository;

pub use model::{Client, NewClient, UpdateClient};
pub use repository::ClientRepository;
