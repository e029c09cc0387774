//! User aggregate: accounts and roles

pub mod model;
pub mod repository;

pub use model::{NewUser, User, UserRole};
pub use repository::UserRepository;
