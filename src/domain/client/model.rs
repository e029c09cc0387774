//! Client (guest profile) domain entity

use chrono::{DateTime, Utc};

/// Guest profile. Separate from the login account: a client row may be
/// created by an operator without any linked user.
#[derive(Debug, Clone)]
pub struct Client {
    pub id: i32,
    /// National identity document number (unique)
    pub national_id: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: Option<String>,
    /// Linked login account, when self-registered
    pub user_id: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Client {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// Data needed to create a client
#[derive(Debug, Clone)]
pub struct NewClient {
    pub national_id: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: Option<String>,
    pub user_id: Option<String>,
}

/// Updatable client fields; `None` leaves the stored value untouched
#[derive(Debug, Clone, Default)]
pub struct UpdateClient {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
}
