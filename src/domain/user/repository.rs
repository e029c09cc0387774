//! User repository interface

use async_trait::async_trait;

use super::model::{NewUser, User};
use crate::domain::DomainResult;

#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Create a new user and return it
    async fn create(&self, new: NewUser) -> DomainResult<User>;

    /// Find user by ID
    async fn find_by_id(&self, id: &str) -> DomainResult<Option<User>>;

    /// Find user by email
    async fn find_by_email(&self, email: &str) -> DomainResult<Option<User>>;

    /// Count all users
    async fn count(&self) -> DomainResult<u64>;

    /// Replace the stored password hash
    async fn update_password(&self, id: &str, password_hash: &str) -> DomainResult<()>;

    /// Record a successful login timestamp
    async fn touch_last_login(&self, id: &str) -> DomainResult<()>;
}
