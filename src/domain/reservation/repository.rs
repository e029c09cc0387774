//! Reservation repository interface

use async_trait::async_trait;

use super::model::{NewReservation, Reservation, StayRange};
use crate::domain::DomainResult;

#[async_trait]
pub trait ReservationRepository: Send + Sync {
    /// Create a reservation if no confirmed reservation overlaps its stay.
    ///
    /// The overlap check and the insert MUST happen atomically (one
    /// transaction, or equivalent). Returns `DomainError::Unavailable`
    /// when the room is already booked for an overlapping interval.
    async fn create_checked(&self, new: NewReservation) -> DomainResult<Reservation>;

    /// Move an existing reservation to a new stay interval, atomically
    /// re-running the overlap check with the reservation itself excluded.
    async fn reschedule_checked(
        &self,
        id: i32,
        stay: StayRange,
        guests: i32,
    ) -> DomainResult<Reservation>;

    /// Find reservation by ID
    async fn find_by_id(&self, id: i32) -> DomainResult<Option<Reservation>>;

    /// Find all reservations (any status), newest first
    async fn find_all(&self) -> DomainResult<Vec<Reservation>>;

    /// Find all reservations for a client, newest first
    async fn find_by_client(&self, client_id: i32) -> DomainResult<Vec<Reservation>>;

    /// Confirmed reservations for a room whose interval overlaps `stay`.
    /// `exclude` skips one reservation id (used when rescheduling).
    async fn find_conflicting(
        &self,
        room_id: i32,
        stay: &StayRange,
        exclude: Option<i32>,
    ) -> DomainResult<Vec<Reservation>>;

    /// Cancel a reservation (set status = cancelled)
    async fn cancel(&self, id: i32) -> DomainResult<()>;
}
