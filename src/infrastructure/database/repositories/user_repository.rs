//! SeaORM implementation of UserRepository

use async_trait::async_trait;
use chrono::Utc;
use log::debug;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter,
    Set,
};

use crate::domain::user::{NewUser, User, UserRepository, UserRole};
use crate::domain::{DomainError, DomainResult};
use crate::infrastructure::database::entities::user;

use super::map_db_err;

pub struct SeaOrmUserRepository {
    db: DatabaseConnection,
}

impl SeaOrmUserRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

// ── Conversion helpers ──────────────────────────────────────────

fn role_to_entity(role: UserRole) -> user::UserRole {
    match role {
        UserRole::Client => user::UserRole::Client,
        UserRole::Company => user::UserRole::Company,
        UserRole::Admin => user::UserRole::Admin,
    }
}

fn role_to_domain(role: user::UserRole) -> UserRole {
    match role {
        user::UserRole::Client => UserRole::Client,
        user::UserRole::Company => UserRole::Company,
        user::UserRole::Admin => UserRole::Admin,
    }
}

fn model_to_domain(m: user::Model) -> User {
    User {
        id: m.id,
        email: m.email,
        password_hash: m.password_hash,
        role: role_to_domain(m.role),
        is_active: m.is_active,
        created_at: m.created_at,
        updated_at: m.updated_at,
        last_login_at: m.last_login_at,
    }
}

// ── UserRepository impl ─────────────────────────────────────────

#[async_trait]
impl UserRepository for SeaOrmUserRepository {
    async fn create(&self, new: NewUser) -> DomainResult<User> {
        debug!("Creating user: {}", new.email);

        let now = Utc::now();
        let model = user::ActiveModel {
            id: Set(uuid::Uuid::new_v4().to_string()),
            email: Set(new.email),
            password_hash: Set(new.password_hash),
            role: Set(role_to_entity(new.role)),
            is_active: Set(true),
            created_at: Set(now),
            updated_at: Set(now),
            last_login_at: Set(None),
        };
        let inserted = model.insert(&self.db).await.map_err(map_db_err)?;
        Ok(model_to_domain(inserted))
    }

    async fn find_by_id(&self, id: &str) -> DomainResult<Option<User>> {
        let model = user::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(map_db_err)?;
        Ok(model.map(model_to_domain))
    }

    async fn find_by_email(&self, email: &str) -> DomainResult<Option<User>> {
        let model = user::Entity::find()
            .filter(user::Column::Email.eq(email))
            .one(&self.db)
            .await
            .map_err(map_db_err)?;
        Ok(model.map(model_to_domain))
    }

    async fn count(&self) -> DomainResult<u64> {
        user::Entity::find()
            .count(&self.db)
            .await
            .map_err(map_db_err)
    }

    async fn update_password(&self, id: &str, password_hash: &str) -> DomainResult<()> {
        let existing = user::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(map_db_err)?
            .ok_or(DomainError::NotFound {
                entity: "User",
                field: "id",
                value: id.to_string(),
            })?;

        let mut active: user::ActiveModel = existing.into();
        active.password_hash = Set(password_hash.to_string());
        active.updated_at = Set(Utc::now());
        active.update(&self.db).await.map_err(map_db_err)?;
        Ok(())
    }

    async fn touch_last_login(&self, id: &str) -> DomainResult<()> {
        let existing = user::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(map_db_err)?
            .ok_or(DomainError::NotFound {
                entity: "User",
                field: "id",
                value: id.to_string(),
            })?;

        let mut active: user::ActiveModel = existing.into();
        active.last_login_at = Set(Some(Utc::now()));
        active.update(&self.db).await.map_err(map_db_err)?;
        Ok(())
    }
}
