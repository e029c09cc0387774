//! Booking service — availability checks and reservation lifecycle
//!
//! The availability check is a stateless predicate over persisted
//! reservations; the actual booking delegates to the repository's
//! atomic check-and-insert so concurrent requests cannot both take the
//! same slot.

use std::sync::Arc;

use chrono::NaiveDate;
use tracing::info;

use crate::domain::{
    Availability, DomainError, DomainResult, NewReservation, RepositoryProvider, Reservation,
    StayRange,
};

pub struct BookingService {
    repos: Arc<dyn RepositoryProvider>,
}

impl BookingService {
    pub fn new(repos: Arc<dyn RepositoryProvider>) -> Self {
        Self { repos }
    }

    fn validate_room_id(room_id: i32) -> DomainResult<()> {
        if room_id <= 0 {
            return Err(DomainError::Validation(
                "room_id must be a positive integer".into(),
            ));
        }
        Ok(())
    }

    /// Is the room free for `[check_in, check_out)`?
    ///
    /// Input validation happens before any query; an unknown room is a
    /// not-found error, not "unavailable". A deactivated room reports
    /// unavailable regardless of conflicts.
    pub async fn check_availability(
        &self,
        room_id: i32,
        check_in: NaiveDate,
        check_out: NaiveDate,
    ) -> DomainResult<Availability> {
        Self::validate_room_id(room_id)?;
        let stay = StayRange::new(check_in, check_out)?;

        let room = self
            .repos
            .rooms()
            .find_by_id(room_id)
            .await?
            .ok_or(DomainError::NotFound {
                entity: "Room",
                field: "id",
                value: room_id.to_string(),
            })?;

        let conflicts = self
            .repos
            .reservations()
            .find_conflicting(room_id, &stay, None)
            .await?
            .len() as u64;

        Ok(Availability {
            available: room.is_active && conflicts == 0,
            conflicts,
        })
    }

    /// Book a room. The overlap check and the insert are atomic: when a
    /// competing booking wins the slot, the caller gets
    /// `DomainError::Unavailable` (HTTP 409), never a double booking.
    pub async fn book(
        &self,
        room_id: i32,
        client_id: i32,
        check_in: NaiveDate,
        check_out: NaiveDate,
        guests: i32,
    ) -> DomainResult<Reservation> {
        Self::validate_room_id(room_id)?;
        if client_id <= 0 {
            return Err(DomainError::Validation(
                "client_id must be a positive integer".into(),
            ));
        }
        if guests < 1 {
            return Err(DomainError::Validation("guests must be at least 1".into()));
        }
        let stay = StayRange::new(check_in, check_out)?;

        let room = self
            .repos
            .rooms()
            .find_by_id(room_id)
            .await?
            .ok_or(DomainError::NotFound {
                entity: "Room",
                field: "id",
                value: room_id.to_string(),
            })?;
        if !room.is_active {
            return Err(DomainError::Validation(format!(
                "room {} is not active",
                room_id
            )));
        }

        self.repos
            .clients()
            .find_by_id(client_id)
            .await?
            .ok_or(DomainError::NotFound {
                entity: "Client",
                field: "id",
                value: client_id.to_string(),
            })?;

        let reservation = self
            .repos
            .reservations()
            .create_checked(NewReservation {
                room_id,
                client_id,
                stay,
                guests,
            })
            .await?;

        info!(
            reservation_id = reservation.id,
            room_id, client_id, "Reservation created"
        );
        Ok(reservation)
    }

    /// Move a reservation to new dates, atomically re-checking overlap
    /// with the reservation itself excluded.
    pub async fn reschedule(
        &self,
        id: i32,
        check_in: NaiveDate,
        check_out: NaiveDate,
        guests: i32,
    ) -> DomainResult<Reservation> {
        if guests < 1 {
            return Err(DomainError::Validation("guests must be at least 1".into()));
        }
        let stay = StayRange::new(check_in, check_out)?;

        let reservation = self
            .repos
            .reservations()
            .reschedule_checked(id, stay, guests)
            .await?;

        info!(reservation_id = id, "Reservation rescheduled");
        Ok(reservation)
    }

    /// Cancel a confirmed reservation, freeing its interval.
    pub async fn cancel(&self, id: i32) -> DomainResult<()> {
        self.repos.reservations().cancel(id).await?;
        info!(reservation_id = id, "Reservation cancelled");
        Ok(())
    }
}

// ── Tests ──────────────────────────────────────────────────────
//
// Run against an in-memory repository provider with the same atomic
// contract as the SeaORM implementation.

#[cfg(test)]
mod tests {
    use super::*;

    use std::sync::Mutex;

    use async_trait::async_trait;
    use chrono::{NaiveDate, Utc};

    use crate::domain::{
        Client, ClientRepository, Hotel, HotelFilter, HotelRepository, NewClient, NewHotel,
        NewRoom, NewRoomPhoto, NewRoomType, NewUser, ReservationRepository, ReservationStatus,
        Room, RoomPhoto, RoomRepository, RoomType, RoomTypeRepository, UpdateClient, UpdateHotel,
        UpdateRoomType, User, UserRepository, UserRole,
    };
    use crate::shared::PaginatedResult;

    #[derive(Default)]
    struct InMemoryState {
        reservations: Vec<Reservation>,
        next_reservation_id: i32,
    }

    /// In-memory gateway. Holds one lock across the conflict check and
    /// the insert, matching the transactional contract of the real
    /// repository.
    #[derive(Default)]
    struct InMemoryRepos {
        state: Mutex<InMemoryState>,
        rooms: Vec<Room>,
        clients: Vec<Client>,
    }

    impl InMemoryRepos {
        fn with_room_and_client() -> Self {
            let now = Utc::now();
            Self {
                state: Mutex::new(InMemoryState {
                    reservations: Vec::new(),
                    next_reservation_id: 1,
                }),
                rooms: vec![Room {
                    id: 1,
                    room_number: "101".into(),
                    hotel_id: "3-101-123456".into(),
                    room_type_id: 1,
                    is_active: true,
                    created_at: now,
                    updated_at: now,
                }],
                clients: vec![Client {
                    id: 1,
                    national_id: "1-2345-6789".into(),
                    first_name: "Ana".into(),
                    last_name: "Rojas".into(),
                    email: "ana@example.com".into(),
                    phone: None,
                    user_id: None,
                    created_at: now,
                    updated_at: now,
                }],
            }
        }
    }

    #[async_trait]
    impl ReservationRepository for InMemoryRepos {
        async fn create_checked(&self, new: NewReservation) -> DomainResult<Reservation> {
            let mut state = self.state.lock().unwrap();
            let conflict = state.reservations.iter().any(|r| {
                r.room_id == new.room_id && r.is_active() && r.stay.overlaps(&new.stay)
            });
            if conflict {
                return Err(DomainError::Unavailable {
                    room_id: new.room_id,
                });
            }
            let now = Utc::now();
            let reservation = Reservation {
                id: state.next_reservation_id,
                room_id: new.room_id,
                client_id: new.client_id,
                stay: new.stay,
                guests: new.guests,
                status: ReservationStatus::Confirmed,
                created_at: now,
                updated_at: now,
            };
            state.next_reservation_id += 1;
            state.reservations.push(reservation.clone());
            Ok(reservation)
        }

        async fn reschedule_checked(
            &self,
            id: i32,
            stay: StayRange,
            guests: i32,
        ) -> DomainResult<Reservation> {
            let mut state = self.state.lock().unwrap();
            let room_id = state
                .reservations
                .iter()
                .find(|r| r.id == id)
                .map(|r| r.room_id)
                .ok_or(DomainError::NotFound {
                    entity: "Reservation",
                    field: "id",
                    value: id.to_string(),
                })?;
            let conflict = state.reservations.iter().any(|r| {
                r.id != id && r.room_id == room_id && r.is_active() && r.stay.overlaps(&stay)
            });
            if conflict {
                return Err(DomainError::Unavailable { room_id });
            }
            let target = state
                .reservations
                .iter_mut()
                .find(|r| r.id == id)
                .expect("checked above");
            target.stay = stay;
            target.guests = guests;
            target.updated_at = Utc::now();
            Ok(target.clone())
        }

        async fn find_by_id(&self, id: i32) -> DomainResult<Option<Reservation>> {
            let state = self.state.lock().unwrap();
            Ok(state.reservations.iter().find(|r| r.id == id).cloned())
        }

        async fn find_all(&self) -> DomainResult<Vec<Reservation>> {
            Ok(self.state.lock().unwrap().reservations.clone())
        }

        async fn find_by_client(&self, client_id: i32) -> DomainResult<Vec<Reservation>> {
            let state = self.state.lock().unwrap();
            Ok(state
                .reservations
                .iter()
                .filter(|r| r.client_id == client_id)
                .cloned()
                .collect())
        }

        async fn find_conflicting(
            &self,
            room_id: i32,
            stay: &StayRange,
            exclude: Option<i32>,
        ) -> DomainResult<Vec<Reservation>> {
            let state = self.state.lock().unwrap();
            Ok(state
                .reservations
                .iter()
                .filter(|r| {
                    r.room_id == room_id
                        && Some(r.id) != exclude
                        && r.is_active()
                        && r.stay.overlaps(stay)
                })
                .cloned()
                .collect())
        }

        async fn cancel(&self, id: i32) -> DomainResult<()> {
            let mut state = self.state.lock().unwrap();
            let target = state
                .reservations
                .iter_mut()
                .find(|r| r.id == id)
                .ok_or(DomainError::NotFound {
                    entity: "Reservation",
                    field: "id",
                    value: id.to_string(),
                })?;
            target.cancel();
            Ok(())
        }
    }

    #[async_trait]
    impl RoomRepository for InMemoryRepos {
        async fn create(&self, _new: NewRoom) -> DomainResult<Room> {
            unimplemented!("not needed by booking tests")
        }

        async fn find_by_id(&self, id: i32) -> DomainResult<Option<Room>> {
            Ok(self.rooms.iter().find(|r| r.id == id).cloned())
        }

        async fn find_active(&self) -> DomainResult<Vec<Room>> {
            Ok(self.rooms.iter().filter(|r| r.is_active).cloned().collect())
        }

        async fn find_by_hotel(&self, hotel_id: &str) -> DomainResult<Vec<Room>> {
            Ok(self
                .rooms
                .iter()
                .filter(|r| r.hotel_id == hotel_id)
                .cloned()
                .collect())
        }

        async fn set_active(&self, _id: i32, _active: bool) -> DomainResult<()> {
            unimplemented!("not needed by booking tests")
        }

        async fn find_photos(&self, _room_id: i32) -> DomainResult<Vec<RoomPhoto>> {
            Ok(Vec::new())
        }

        async fn add_photo(&self, _new: NewRoomPhoto) -> DomainResult<RoomPhoto> {
            unimplemented!("not needed by booking tests")
        }
    }

    #[async_trait]
    impl ClientRepository for InMemoryRepos {
        async fn create(&self, _new: NewClient) -> DomainResult<Client> {
            unimplemented!("not needed by booking tests")
        }

        async fn find_by_id(&self, id: i32) -> DomainResult<Option<Client>> {
            Ok(self.clients.iter().find(|c| c.id == id).cloned())
        }

        async fn find_by_national_id(&self, national_id: &str) -> DomainResult<Option<Client>> {
            Ok(self
                .clients
                .iter()
                .find(|c| c.national_id == national_id)
                .cloned())
        }

        async fn find_by_email(&self, email: &str) -> DomainResult<Option<Client>> {
            Ok(self.clients.iter().find(|c| c.email == email).cloned())
        }

        async fn find_by_user_id(&self, user_id: &str) -> DomainResult<Option<Client>> {
            Ok(self
                .clients
                .iter()
                .find(|c| c.user_id.as_deref() == Some(user_id))
                .cloned())
        }

        async fn list(
            &self,
            _search: Option<&str>,
            page: u32,
            limit: u32,
        ) -> DomainResult<PaginatedResult<Client>> {
            Ok(PaginatedResult::new(
                self.clients.clone(),
                self.clients.len() as u64,
                page,
                limit,
            ))
        }

        async fn update(&self, _id: i32, _update: UpdateClient) -> DomainResult<Client> {
            unimplemented!("not needed by booking tests")
        }

        async fn delete(&self, _id: i32) -> DomainResult<()> {
            unimplemented!("not needed by booking tests")
        }
    }

    #[async_trait]
    impl UserRepository for InMemoryRepos {
        async fn create(&self, _new: NewUser) -> DomainResult<User> {
            unimplemented!("not needed by booking tests")
        }

        async fn find_by_id(&self, _id: &str) -> DomainResult<Option<User>> {
            Ok(None)
        }

        async fn find_by_email(&self, _email: &str) -> DomainResult<Option<User>> {
            Ok(None)
        }

        async fn count(&self) -> DomainResult<u64> {
            Ok(0)
        }

        async fn update_password(&self, _id: &str, _hash: &str) -> DomainResult<()> {
            Ok(())
        }

        async fn touch_last_login(&self, _id: &str) -> DomainResult<()> {
            Ok(())
        }
    }

    #[async_trait]
    impl HotelRepository for InMemoryRepos {
        async fn create(&self, _new: NewHotel) -> DomainResult<Hotel> {
            unimplemented!("not needed by booking tests")
        }

        async fn find_by_tax_id(&self, _tax_id: &str) -> DomainResult<Option<Hotel>> {
            Ok(None)
        }

        async fn list(&self, _filter: &HotelFilter) -> DomainResult<Vec<Hotel>> {
            Ok(Vec::new())
        }

        async fn update(&self, _tax_id: &str, _update: UpdateHotel) -> DomainResult<Hotel> {
            unimplemented!("not needed by booking tests")
        }
    }

    #[async_trait]
    impl RoomTypeRepository for InMemoryRepos {
        async fn create(&self, _new: NewRoomType) -> DomainResult<RoomType> {
            unimplemented!("not needed by booking tests")
        }

        async fn find_by_id(&self, _id: i32) -> DomainResult<Option<RoomType>> {
            Ok(None)
        }

        async fn find_all(&self) -> DomainResult<Vec<RoomType>> {
            Ok(Vec::new())
        }

        async fn update(&self, _id: i32, _update: UpdateRoomType) -> DomainResult<RoomType> {
            unimplemented!("not needed by booking tests")
        }
    }

    impl RepositoryProvider for InMemoryRepos {
        fn users(&self) -> &dyn UserRepository {
            self
        }

        fn clients(&self) -> &dyn ClientRepository {
            self
        }

        fn hotels(&self) -> &dyn HotelRepository {
            self
        }

        fn rooms(&self) -> &dyn RoomRepository {
            self
        }

        fn room_types(&self) -> &dyn RoomTypeRepository {
            self
        }

        fn reservations(&self) -> &dyn ReservationRepository {
            self
        }
    }

    fn service() -> (Arc<InMemoryRepos>, BookingService) {
        let repos = Arc::new(InMemoryRepos::with_room_and_client());
        let provider: Arc<dyn RepositoryProvider> = repos.clone();
        (repos, BookingService::new(provider))
    }

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[tokio::test]
    async fn empty_room_is_available() {
        let (_, service) = service();
        let availability = service
            .check_availability(1, d(2024, 6, 1), d(2024, 6, 5))
            .await
            .unwrap();
        assert!(availability.available);
        assert_eq!(availability.conflicts, 0);
    }

    #[tokio::test]
    async fn unknown_room_is_not_found() {
        let (_, service) = service();
        let err = service
            .check_availability(99, d(2024, 6, 1), d(2024, 6, 5))
            .await;
        assert!(matches!(err, Err(DomainError::NotFound { .. })));
    }

    #[tokio::test]
    async fn zero_length_stay_is_rejected_before_any_query() {
        let (_, service) = service();
        // Even for an unknown room, validation fires first.
        let err = service
            .check_availability(99, d(2024, 6, 5), d(2024, 6, 5))
            .await;
        assert!(matches!(err, Err(DomainError::Validation(_))));
    }

    #[tokio::test]
    async fn non_positive_room_id_is_rejected() {
        let (_, service) = service();
        let err = service.check_availability(0, d(2024, 6, 1), d(2024, 6, 5)).await;
        assert!(matches!(err, Err(DomainError::Validation(_))));
    }

    #[tokio::test]
    async fn booked_interval_blocks_overlapping_candidates() {
        let (_, service) = service();
        service
            .book(1, 1, d(2024, 6, 1), d(2024, 6, 5), 2)
            .await
            .unwrap();

        // Partial overlap
        let availability = service
            .check_availability(1, d(2024, 6, 3), d(2024, 6, 10))
            .await
            .unwrap();
        assert!(!availability.available);
        assert_eq!(availability.conflicts, 1);

        // Containment
        let availability = service
            .check_availability(1, d(2024, 5, 20), d(2024, 6, 10))
            .await
            .unwrap();
        assert!(!availability.available);
    }

    #[tokio::test]
    async fn back_to_back_candidate_is_available() {
        let (_, service) = service();
        service
            .book(1, 1, d(2024, 6, 1), d(2024, 6, 5), 2)
            .await
            .unwrap();

        let availability = service
            .check_availability(1, d(2024, 6, 5), d(2024, 6, 8))
            .await
            .unwrap();
        assert!(availability.available);
        assert_eq!(availability.conflicts, 0);
    }

    #[tokio::test]
    async fn double_booking_is_rejected() {
        let (_, service) = service();
        service
            .book(1, 1, d(2024, 6, 1), d(2024, 6, 5), 2)
            .await
            .unwrap();

        let err = service.book(1, 1, d(2024, 6, 3), d(2024, 6, 7), 1).await;
        assert!(matches!(err, Err(DomainError::Unavailable { room_id: 1 })));
    }

    #[tokio::test]
    async fn cancelled_reservation_frees_the_interval() {
        let (_, service) = service();
        let reservation = service
            .book(1, 1, d(2024, 6, 1), d(2024, 6, 5), 2)
            .await
            .unwrap();
        service.cancel(reservation.id).await.unwrap();

        let availability = service
            .check_availability(1, d(2024, 6, 1), d(2024, 6, 5))
            .await
            .unwrap();
        assert!(availability.available);
    }

    #[tokio::test]
    async fn reschedule_ignores_own_interval_but_respects_others() {
        let (_, service) = service();
        let first = service
            .book(1, 1, d(2024, 6, 1), d(2024, 6, 5), 2)
            .await
            .unwrap();
        service
            .book(1, 1, d(2024, 6, 10), d(2024, 6, 15), 2)
            .await
            .unwrap();

        // Shifting within its own old interval is fine.
        let moved = service
            .reschedule(first.id, d(2024, 6, 2), d(2024, 6, 6), 2)
            .await
            .unwrap();
        assert_eq!(moved.stay.check_in(), d(2024, 6, 2));

        // Colliding with the second reservation is not.
        let err = service
            .reschedule(first.id, d(2024, 6, 12), d(2024, 6, 14), 2)
            .await;
        assert!(matches!(err, Err(DomainError::Unavailable { .. })));
    }

    #[tokio::test]
    async fn concurrent_bookings_of_last_slot_yield_one_winner() {
        let (repos, _) = service();
        let provider: Arc<dyn RepositoryProvider> = repos.clone();
        let service = Arc::new(BookingService::new(provider));

        let a = {
            let service = service.clone();
            tokio::spawn(
                async move { service.book(1, 1, d(2024, 6, 1), d(2024, 6, 5), 2).await },
            )
        };
        let b = {
            let service = service.clone();
            tokio::spawn(
                async move { service.book(1, 1, d(2024, 6, 1), d(2024, 6, 5), 2).await },
            )
        };

        let results = [a.await.unwrap(), b.await.unwrap()];
        let wins = results.iter().filter(|r| r.is_ok()).count();
        let conflicts = results
            .iter()
            .filter(|r| matches!(r, Err(DomainError::Unavailable { .. })))
            .count();
        assert_eq!(wins, 1);
        assert_eq!(conflicts, 1);

        let stored = ReservationRepository::find_all(&*repos).await.unwrap();
        assert_eq!(stored.len(), 1);
    }
}
