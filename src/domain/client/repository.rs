//! Client repository interface

use async_trait::async_trait;

use super::model::{Client, NewClient, UpdateClient};
use crate::domain::DomainResult;
use crate::shared::PaginatedResult;

#[async_trait]
pub trait ClientRepository: Send + Sync {
    /// Create a new client and return it
    async fn create(&self, new: NewClient) -> DomainResult<Client>;

    /// Find client by ID
    async fn find_by_id(&self, id: i32) -> DomainResult<Option<Client>>;

    /// Find client by unique national ID
    async fn find_by_national_id(&self, national_id: &str) -> DomainResult<Option<Client>>;

    /// Find client by unique email
    async fn find_by_email(&self, email: &str) -> DomainResult<Option<Client>>;

    /// Find the client linked to a login account
    async fn find_by_user_id(&self, user_id: &str) -> DomainResult<Option<Client>>;

    /// Paginated listing, optionally filtered by a name/email search term
    async fn list(
        &self,
        search: Option<&str>,
        page: u32,
        limit: u32,
    ) -> DomainResult<PaginatedResult<Client>>;

    /// Update profile fields
    async fn update(&self, id: i32, update: UpdateClient) -> DomainResult<Client>;

    /// Hard delete. Fails with `Conflict` while the client holds
    /// confirmed reservations.
    async fn delete(&self, id: i32) -> DomainResult<()>;
}
