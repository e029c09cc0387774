//! User domain entity

use chrono::{DateTime, Utc};

/// User role. Closed set: adding a role means updating every `match`
/// over this enum, which is intentional.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UserRole {
    /// Guest who books rooms
    Client,
    /// Hotel company operating properties
    Company,
    /// Platform administrator
    Admin,
}

impl UserRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Client => "client",
            Self::Company => "company",
            Self::Admin => "admin",
        }
    }

    /// Parse a role string. Unknown values are rejected rather than
    /// silently mapped to a default.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "client" => Some(Self::Client),
            "company" => Some(Self::Company),
            "admin" => Some(Self::Admin),
            _ => None,
        }
    }
}

impl std::fmt::Display for UserRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// User account
#[derive(Debug, Clone)]
pub struct User {
    /// Unique user ID (UUID)
    pub id: String,
    pub email: String,
    pub password_hash: String,
    pub role: UserRole,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub last_login_at: Option<DateTime<Utc>>,
}

/// Data needed to create a user
#[derive(Debug, Clone)]
pub struct NewUser {
    pub email: String,
    pub password_hash: String,
    pub role: UserRole,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn role_roundtrip() {
        for role in &[UserRole::Client, UserRole::Company, UserRole::Admin] {
            assert_eq!(UserRole::parse(role.as_str()), Some(*role));
        }
    }

    #[test]
    fn unknown_role_is_rejected() {
        assert_eq!(UserRole::parse("viewer"), None);
        assert_eq!(UserRole::parse(""), None);
    }
}
