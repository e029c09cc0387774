//! Identity service — authentication and account management
//!
//! All user-related business logic lives here. HTTP handlers are thin
//! wrappers that delegate to this service.

use std::sync::Arc;

use tracing::info;

use crate::domain::{
    DomainError, DomainResult, NewClient, NewUser, RepositoryProvider, User, UserRole,
};
use crate::infrastructure::crypto::jwt::{create_token, JwtConfig};
use crate::infrastructure::crypto::password::{hash_password, verify_password};

/// Authentication result returned after a successful login
#[derive(Debug, Clone)]
pub struct AuthResult {
    pub token: String,
    pub token_type: String,
    pub expires_in: i64,
    pub user: User,
}

/// Registration payload. Client registrations carry the guest-profile
/// fields; company registrations create the account only (the hotel is
/// registered separately).
#[derive(Debug, Clone)]
pub struct RegisterRequestData {
    pub email: String,
    pub password: String,
    pub role: UserRole,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub national_id: Option<String>,
    pub phone: Option<String>,
}

/// Identity service — orchestrates login, registration and password
/// changes over the injected repository provider.
pub struct IdentityService {
    repos: Arc<dyn RepositoryProvider>,
    jwt_config: JwtConfig,
}

impl IdentityService {
    pub fn new(repos: Arc<dyn RepositoryProvider>, jwt_config: JwtConfig) -> Self {
        Self { repos, jwt_config }
    }

    // ── Authentication ──────────────────────────────────────────

    /// Authenticate by email + password and return a JWT.
    pub async fn login(&self, email: &str, password: &str) -> DomainResult<AuthResult> {
        let user = self.repos.users().find_by_email(email).await?;

        let Some(user) = user else {
            return Err(DomainError::Unauthorized("Invalid credentials".into()));
        };

        if !user.is_active {
            return Err(DomainError::Unauthorized("Account is disabled".into()));
        }

        let valid = verify_password(password, &user.password_hash).unwrap_or(false);
        if !valid {
            return Err(DomainError::Unauthorized("Invalid credentials".into()));
        }

        self.repos.users().touch_last_login(&user.id).await?;

        let token = create_token(&user.id, &user.email, user.role, &self.jwt_config)
            .map_err(|e| DomainError::Storage(format!("Failed to create token: {}", e)))?;

        Ok(AuthResult {
            token,
            token_type: "Bearer".into(),
            expires_in: self.jwt_config.expiration_hours * 3600,
            user,
        })
    }

    // ── Registration ────────────────────────────────────────────

    /// Register a new account. A client registration also creates the
    /// linked guest profile; uniqueness is pre-checked so the cascade
    /// does not leave a dangling account behind.
    pub async fn register(&self, data: RegisterRequestData) -> DomainResult<User> {
        if data.password.len() < 8 {
            return Err(DomainError::Validation(
                "Password must be at least 8 characters".into(),
            ));
        }
        if !data.email.contains('@') {
            return Err(DomainError::Validation("Invalid email address".into()));
        }
        if data.role == UserRole::Admin {
            return Err(DomainError::Forbidden(
                "Admin accounts cannot be self-registered".into(),
            ));
        }

        if self.repos.users().find_by_email(&data.email).await?.is_some() {
            return Err(DomainError::Conflict("Email already registered".into()));
        }

        // Client accounts need a guest profile; validate it up front.
        let profile = match data.role {
            UserRole::Client => {
                let national_id = data
                    .national_id
                    .clone()
                    .filter(|s| !s.is_empty())
                    .ok_or_else(|| {
                        DomainError::Validation("national_id is required for clients".into())
                    })?;
                let first_name = data
                    .first_name
                    .clone()
                    .filter(|s| !s.is_empty())
                    .ok_or_else(|| {
                        DomainError::Validation("first_name is required for clients".into())
                    })?;
                let last_name = data.last_name.clone().unwrap_or_default();

                if self
                    .repos
                    .clients()
                    .find_by_national_id(&national_id)
                    .await?
                    .is_some()
                {
                    return Err(DomainError::Conflict(
                        "National ID already registered".into(),
                    ));
                }
                if self
                    .repos
                    .clients()
                    .find_by_email(&data.email)
                    .await?
                    .is_some()
                {
                    return Err(DomainError::Conflict("Email already registered".into()));
                }

                Some((national_id, first_name, last_name))
            }
            UserRole::Company => None,
            UserRole::Admin => unreachable!("rejected above"),
        };

        let password_hash = hash_password(&data.password)
            .map_err(|e| DomainError::Storage(format!("Failed to hash password: {}", e)))?;

        let user = self
            .repos
            .users()
            .create(NewUser {
                email: data.email.clone(),
                password_hash,
                role: data.role,
            })
            .await?;

        if let Some((national_id, first_name, last_name)) = profile {
            self.repos
                .clients()
                .create(NewClient {
                    national_id,
                    first_name,
                    last_name,
                    email: data.email.clone(),
                    phone: data.phone.clone(),
                    user_id: Some(user.id.clone()),
                })
                .await?;
        }

        info!(user_id = %user.id, role = %user.role, "New user registered");
        Ok(user)
    }

    // ── Commands ────────────────────────────────────────────────

    /// Change a user's password. Verifies the current password first.
    pub async fn change_password(
        &self,
        user_id: &str,
        current_password: &str,
        new_password: &str,
    ) -> DomainResult<()> {
        if new_password.len() < 8 {
            return Err(DomainError::Validation(
                "New password must be at least 8 characters".into(),
            ));
        }

        let user = self
            .repos
            .users()
            .find_by_id(user_id)
            .await?
            .ok_or(DomainError::NotFound {
                entity: "User",
                field: "id",
                value: user_id.to_string(),
            })?;

        let valid = verify_password(current_password, &user.password_hash).unwrap_or(false);
        if !valid {
            return Err(DomainError::Unauthorized("Invalid current password".into()));
        }

        let new_hash = hash_password(new_password)
            .map_err(|e| DomainError::Storage(format!("Failed to hash password: {}", e)))?;

        self.repos.users().update_password(user_id, &new_hash).await?;

        info!(user_id, "Password changed");
        Ok(())
    }

    /// Fetch the account behind a token subject.
    pub async fn get_user(&self, user_id: &str) -> DomainResult<Option<User>> {
        self.repos.users().find_by_id(user_id).await
    }
}
