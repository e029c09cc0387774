//! SeaORM implementation of ReservationRepository
//!
//! The overlap check and the insert/update run inside one transaction so
//! two concurrent bookings of the same slot cannot both succeed. SQLite
//! serializes write transactions; when switching to PostgreSQL the
//! transaction must be opened at SERIALIZABLE isolation.

use async_trait::async_trait;
use chrono::Utc;
use log::debug;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, DatabaseConnection, EntityTrait, NotSet,
    PaginatorTrait, QueryFilter, QueryOrder, Set, TransactionTrait,
};

use crate::domain::reservation::{
    NewReservation, Reservation, ReservationRepository, ReservationStatus, StayRange,
};
use crate::domain::{DomainError, DomainResult};
use crate::infrastructure::database::entities::reservation;

use super::map_db_err;

pub struct SeaOrmReservationRepository {
    db: DatabaseConnection,
}

impl SeaOrmReservationRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

// ── Conversion helpers ──────────────────────────────────────────

fn model_to_domain(m: reservation::Model) -> DomainResult<Reservation> {
    let stay = StayRange::new(m.check_in, m.check_out)
        .map_err(|_| DomainError::Storage(format!("reservation {} has invalid interval", m.id)))?;
    Ok(Reservation {
        id: m.id,
        room_id: m.room_id,
        client_id: m.client_id,
        stay,
        guests: m.guests,
        status: ReservationStatus::from_str(&m.status),
        created_at: m.created_at,
        updated_at: m.updated_at,
    })
}

fn models_to_domain(models: Vec<reservation::Model>) -> DomainResult<Vec<Reservation>> {
    models.into_iter().map(model_to_domain).collect()
}

/// Confirmed reservations for `room_id` overlapping `stay`:
/// `existing.check_in < stay.check_out AND existing.check_out > stay.check_in`
fn conflict_query(
    room_id: i32,
    stay: &StayRange,
    exclude: Option<i32>,
) -> sea_orm::Select<reservation::Entity> {
    let mut query = reservation::Entity::find()
        .filter(reservation::Column::RoomId.eq(room_id))
        .filter(reservation::Column::Status.eq(ReservationStatus::Confirmed.as_str()))
        .filter(reservation::Column::CheckIn.lt(stay.check_out()))
        .filter(reservation::Column::CheckOut.gt(stay.check_in()));
    if let Some(id) = exclude {
        query = query.filter(reservation::Column::Id.ne(id));
    }
    query
}

async fn count_conflicts<C: ConnectionTrait>(
    conn: &C,
    room_id: i32,
    stay: &StayRange,
    exclude: Option<i32>,
) -> DomainResult<u64> {
    conflict_query(room_id, stay, exclude)
        .count(conn)
        .await
        .map_err(map_db_err)
}

// ── ReservationRepository impl ──────────────────────────────────

#[async_trait]
impl ReservationRepository for SeaOrmReservationRepository {
    async fn create_checked(&self, new: NewReservation) -> DomainResult<Reservation> {
        debug!(
            "Booking room {} for [{}, {})",
            new.room_id,
            new.stay.check_in(),
            new.stay.check_out()
        );

        let txn = self.db.begin().await.map_err(map_db_err)?;

        let conflicts = count_conflicts(&txn, new.room_id, &new.stay, None).await?;
        if conflicts > 0 {
            txn.rollback().await.map_err(map_db_err)?;
            return Err(DomainError::Unavailable {
                room_id: new.room_id,
            });
        }

        let now = Utc::now();
        let model = reservation::ActiveModel {
            id: NotSet,
            room_id: Set(new.room_id),
            client_id: Set(new.client_id),
            check_in: Set(new.stay.check_in()),
            check_out: Set(new.stay.check_out()),
            guests: Set(new.guests),
            status: Set(ReservationStatus::Confirmed.as_str().to_string()),
            created_at: Set(now),
            updated_at: Set(now),
        };
        let inserted = model.insert(&txn).await.map_err(map_db_err)?;
        txn.commit().await.map_err(map_db_err)?;

        model_to_domain(inserted)
    }

    async fn reschedule_checked(
        &self,
        id: i32,
        stay: StayRange,
        guests: i32,
    ) -> DomainResult<Reservation> {
        let txn = self.db.begin().await.map_err(map_db_err)?;

        let existing = reservation::Entity::find_by_id(id)
            .one(&txn)
            .await
            .map_err(map_db_err)?
            .ok_or(DomainError::NotFound {
                entity: "Reservation",
                field: "id",
                value: id.to_string(),
            })?;

        if existing.status != ReservationStatus::Confirmed.as_str() {
            txn.rollback().await.map_err(map_db_err)?;
            return Err(DomainError::Validation(format!(
                "reservation {} is not confirmed (status: {})",
                id, existing.status
            )));
        }

        let conflicts = count_conflicts(&txn, existing.room_id, &stay, Some(id)).await?;
        if conflicts > 0 {
            txn.rollback().await.map_err(map_db_err)?;
            return Err(DomainError::Unavailable {
                room_id: existing.room_id,
            });
        }

        let mut active: reservation::ActiveModel = existing.into();
        active.check_in = Set(stay.check_in());
        active.check_out = Set(stay.check_out());
        active.guests = Set(guests);
        active.updated_at = Set(Utc::now());
        let updated = active.update(&txn).await.map_err(map_db_err)?;
        txn.commit().await.map_err(map_db_err)?;

        model_to_domain(updated)
    }

    async fn find_by_id(&self, id: i32) -> DomainResult<Option<Reservation>> {
        let model = reservation::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(map_db_err)?;
        model.map(model_to_domain).transpose()
    }

    async fn find_all(&self) -> DomainResult<Vec<Reservation>> {
        let models = reservation::Entity::find()
            .order_by_desc(reservation::Column::Id)
            .all(&self.db)
            .await
            .map_err(map_db_err)?;
        models_to_domain(models)
    }

    async fn find_by_client(&self, client_id: i32) -> DomainResult<Vec<Reservation>> {
        let models = reservation::Entity::find()
            .filter(reservation::Column::ClientId.eq(client_id))
            .order_by_desc(reservation::Column::Id)
            .all(&self.db)
            .await
            .map_err(map_db_err)?;
        models_to_domain(models)
    }

    async fn find_conflicting(
        &self,
        room_id: i32,
        stay: &StayRange,
        exclude: Option<i32>,
    ) -> DomainResult<Vec<Reservation>> {
        let models = conflict_query(room_id, stay, exclude)
            .order_by_asc(reservation::Column::CheckIn)
            .all(&self.db)
            .await
            .map_err(map_db_err)?;
        models_to_domain(models)
    }

    async fn cancel(&self, id: i32) -> DomainResult<()> {
        let existing = reservation::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(map_db_err)?;

        let Some(existing) = existing else {
            return Err(DomainError::NotFound {
                entity: "Reservation",
                field: "id",
                value: id.to_string(),
            });
        };

        if existing.status != ReservationStatus::Confirmed.as_str() {
            return Err(DomainError::Validation(format!(
                "reservation {} is not confirmed (status: {})",
                id, existing.status
            )));
        }

        let mut active: reservation::ActiveModel = existing.into();
        active.status = Set(ReservationStatus::Cancelled.as_str().to_string());
        active.updated_at = Set(Utc::now());
        active.update(&self.db).await.map_err(map_db_err)?;
        Ok(())
    }
}
