//! Hotel repository interface

use async_trait::async_trait;

use super::model::{Hotel, HotelFilter, NewHotel, UpdateHotel};
use crate::domain::DomainResult;

#[async_trait]
pub trait HotelRepository: Send + Sync {
    /// Register a new hotel. Duplicate tax ID or email is a `Conflict`.
    async fn create(&self, new: NewHotel) -> DomainResult<Hotel>;

    /// Find hotel by tax ID
    async fn find_by_tax_id(&self, tax_id: &str) -> DomainResult<Option<Hotel>>;

    /// List hotels matching the filter, ordered by name
    async fn list(&self, filter: &HotelFilter) -> DomainResult<Vec<Hotel>>;

    /// Update basic hotel data
    async fn update(&self, tax_id: &str, update: UpdateHotel) -> DomainResult<Hotel>;
}
