//! SeaORM implementation of ClientRepository

use async_trait::async_trait;
use chrono::Utc;
use log::debug;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, DatabaseConnection, EntityTrait, ModelTrait, NotSet,
    PaginatorTrait, QueryFilter, QueryOrder, Set,
};

use crate::domain::client::{Client, ClientRepository, NewClient, UpdateClient};
use crate::domain::reservation::ReservationStatus;
use crate::domain::{DomainError, DomainResult};
use crate::infrastructure::database::entities::{client, reservation};
use crate::shared::PaginatedResult;

use super::map_db_err;

pub struct SeaOrmClientRepository {
    db: DatabaseConnection,
}

impl SeaOrmClientRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

// ── Conversion helpers ──────────────────────────────────────────

fn model_to_domain(m: client::Model) -> Client {
    Client {
        id: m.id,
        national_id: m.national_id,
        first_name: m.first_name,
        last_name: m.last_name,
        email: m.email,
        phone: m.phone,
        user_id: m.user_id,
        created_at: m.created_at,
        updated_at: m.updated_at,
    }
}

// ── ClientRepository impl ───────────────────────────────────────

#[async_trait]
impl ClientRepository for SeaOrmClientRepository {
    async fn create(&self, new: NewClient) -> DomainResult<Client> {
        debug!("Creating client: {}", new.national_id);

        let now = Utc::now();
        let model = client::ActiveModel {
            id: NotSet,
            national_id: Set(new.national_id),
            first_name: Set(new.first_name),
            last_name: Set(new.last_name),
            email: Set(new.email),
            phone: Set(new.phone),
            user_id: Set(new.user_id),
            created_at: Set(now),
            updated_at: Set(now),
        };
        let inserted = model.insert(&self.db).await.map_err(map_db_err)?;
        Ok(model_to_domain(inserted))
    }

    async fn find_by_id(&self, id: i32) -> DomainResult<Option<Client>> {
        let model = client::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(map_db_err)?;
        Ok(model.map(model_to_domain))
    }

    async fn find_by_national_id(&self, national_id: &str) -> DomainResult<Option<Client>> {
        let model = client::Entity::find()
            .filter(client::Column::NationalId.eq(national_id))
            .one(&self.db)
            .await
            .map_err(map_db_err)?;
        Ok(model.map(model_to_domain))
    }

    async fn find_by_email(&self, email: &str) -> DomainResult<Option<Client>> {
        let model = client::Entity::find()
            .filter(client::Column::Email.eq(email))
            .one(&self.db)
            .await
            .map_err(map_db_err)?;
        Ok(model.map(model_to_domain))
    }

    async fn find_by_user_id(&self, user_id: &str) -> DomainResult<Option<Client>> {
        let model = client::Entity::find()
            .filter(client::Column::UserId.eq(user_id))
            .one(&self.db)
            .await
            .map_err(map_db_err)?;
        Ok(model.map(model_to_domain))
    }

    async fn list(
        &self,
        search: Option<&str>,
        page: u32,
        limit: u32,
    ) -> DomainResult<PaginatedResult<Client>> {
        let mut query = client::Entity::find().order_by_asc(client::Column::LastName);

        if let Some(term) = search {
            let pattern = format!("%{}%", term);
            query = query.filter(
                Condition::any()
                    .add(client::Column::FirstName.like(&pattern))
                    .add(client::Column::LastName.like(&pattern))
                    .add(client::Column::Email.like(&pattern)),
            );
        }

        let paginator = query.paginate(&self.db, limit.max(1) as u64);
        let total = paginator.num_items().await.map_err(map_db_err)?;
        let models = paginator
            .fetch_page(page.saturating_sub(1) as u64)
            .await
            .map_err(map_db_err)?;

        Ok(PaginatedResult::new(
            models.into_iter().map(model_to_domain).collect(),
            total,
            page,
            limit,
        ))
    }

    async fn update(&self, id: i32, update: UpdateClient) -> DomainResult<Client> {
        let existing = client::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(map_db_err)?
            .ok_or(DomainError::NotFound {
                entity: "Client",
                field: "id",
                value: id.to_string(),
            })?;

        let mut active: client::ActiveModel = existing.into();
        if let Some(first_name) = update.first_name {
            active.first_name = Set(first_name);
        }
        if let Some(last_name) = update.last_name {
            active.last_name = Set(last_name);
        }
        if let Some(email) = update.email {
            active.email = Set(email);
        }
        if let Some(phone) = update.phone {
            active.phone = Set(Some(phone));
        }
        active.updated_at = Set(Utc::now());
        let updated = active.update(&self.db).await.map_err(map_db_err)?;
        Ok(model_to_domain(updated))
    }

    async fn delete(&self, id: i32) -> DomainResult<()> {
        let existing = client::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(map_db_err)?
            .ok_or(DomainError::NotFound {
                entity: "Client",
                field: "id",
                value: id.to_string(),
            })?;

        let active_bookings = reservation::Entity::find()
            .filter(reservation::Column::ClientId.eq(id))
            .filter(reservation::Column::Status.eq(ReservationStatus::Confirmed.as_str()))
            .count(&self.db)
            .await
            .map_err(map_db_err)?;

        if active_bookings > 0 {
            return Err(DomainError::Conflict(format!(
                "client {} has {} confirmed reservation(s)",
                id, active_bookings
            )));
        }

        existing.delete(&self.db).await.map_err(map_db_err)?;
        Ok(())
    }
}
