pub mod shutdown;
pub mod types;

pub use types::pagination::PaginatedResult;
