//! Authentication middleware for Axum

use axum::{
    body::Body,
    extract::State,
    http::{header, Request, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

use crate::domain::{DomainError, DomainResult, UserRole};
use crate::infrastructure::crypto::jwt::{verify_token, JwtConfig, TokenClaims};

/// Authentication error types
#[derive(Debug)]
pub enum AuthError {
    MissingToken,
    InvalidToken,
    ExpiredToken,
}

/// Authentication state containing the JWT config
#[derive(Clone)]
pub struct AuthState {
    pub jwt_config: JwtConfig,
}

/// Authenticated user information decoded from the bearer token
#[derive(Clone, Debug)]
pub struct AuthenticatedUser {
    pub user_id: String,
    pub email: String,
    pub role: UserRole,
}

impl AuthenticatedUser {
    /// Claims carry the role as a string; an unknown role string means
    /// the token was not issued by this service.
    pub fn from_claims(claims: TokenClaims) -> Option<Self> {
        let role = UserRole::parse(&claims.role)?;
        Some(Self {
            user_id: claims.sub,
            email: claims.email,
            role,
        })
    }

    pub fn is_admin(&self) -> bool {
        self.role == UserRole::Admin
    }

    /// Gate an operation on a set of roles. Exhaustive over `UserRole`:
    /// a new role has to be placed on one side of every gate explicitly.
    pub fn require_role(&self, allowed: &[UserRole]) -> DomainResult<()> {
        if allowed.contains(&self.role) {
            Ok(())
        } else {
            Err(DomainError::Forbidden(format!(
                "role '{}' may not access this resource",
                self.role
            )))
        }
    }
}

fn extract_token(auth_header: &str) -> Option<&str> {
    auth_header.strip_prefix("Bearer ")
}

/// JWT bearer authentication middleware
pub async fn auth_middleware(
    State(auth_state): State<AuthState>,
    mut request: Request<Body>,
    next: Next,
) -> Response {
    let auth_header = request
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .map(String::from);
    let Some(auth_header) = auth_header else {
        return auth_error_response(AuthError::MissingToken);
    };

    let Some(token) = extract_token(&auth_header) else {
        return auth_error_response(AuthError::InvalidToken);
    };

    match verify_token(token, &auth_state.jwt_config) {
        Ok(claims) => {
            if claims.is_expired() {
                return auth_error_response(AuthError::ExpiredToken);
            }
            let Some(user) = AuthenticatedUser::from_claims(claims) else {
                return auth_error_response(AuthError::InvalidToken);
            };
            request.extensions_mut().insert(user);
            next.run(request).await
        }
        Err(_) => auth_error_response(AuthError::InvalidToken),
    }
}

fn auth_error_response(error: AuthError) -> Response {
    let (status, message) = match error {
        AuthError::MissingToken => (StatusCode::UNAUTHORIZED, "Missing authentication token"),
        AuthError::InvalidToken => (StatusCode::UNAUTHORIZED, "Invalid authentication token"),
        AuthError::ExpiredToken => (StatusCode::UNAUTHORIZED, "Token has expired"),
    };

    let body = Json(json!({
        "success": false,
        "error": message
    }));

    (status, body).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(role: UserRole) -> AuthenticatedUser {
        AuthenticatedUser {
            user_id: "u-1".into(),
            email: "u@example.com".into(),
            role,
        }
    }

    #[test]
    fn role_gate_allows_listed_roles() {
        assert!(user(UserRole::Admin)
            .require_role(&[UserRole::Admin, UserRole::Company])
            .is_ok());
        assert!(user(UserRole::Company)
            .require_role(&[UserRole::Admin, UserRole::Company])
            .is_ok());
    }

    #[test]
    fn role_gate_rejects_other_roles() {
        let err = user(UserRole::Client).require_role(&[UserRole::Admin]);
        assert!(matches!(err, Err(DomainError::Forbidden(_))));
    }

    #[test]
    fn unknown_role_claim_is_rejected() {
        let claims = TokenClaims {
            sub: "u-1".into(),
            email: "u@example.com".into(),
            role: "superuser".into(),
            exp: 0,
            iat: 0,
            iss: "posada-booking".into(),
        };
        assert!(AuthenticatedUser::from_claims(claims).is_none());
    }
}
