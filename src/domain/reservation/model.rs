//! Reservation domain entity and the stay-interval value type

use chrono::{DateTime, NaiveDate, Utc};

use crate::domain::{DomainError, DomainResult};

/// Reservation status
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReservationStatus {
    /// Booking holds the room for its stay interval
    Confirmed,
    /// Cancelled by the client or an operator; no longer blocks the room
    Cancelled,
    /// Stay finished (past checkout)
    Completed,
}

impl ReservationStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Confirmed => "confirmed",
            Self::Cancelled => "cancelled",
            Self::Completed => "completed",
        }
    }

    pub fn from_str(s: &str) -> Self {
        match s {
            "confirmed" => Self::Confirmed,
            "completed" => Self::Completed,
            _ => Self::Cancelled,
        }
    }
}

impl std::fmt::Display for ReservationStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Half-open stay interval `[check_in, check_out)`.
///
/// Check-in day is occupied, checkout day is free: a stay ending on the
/// same day another begins does not conflict with it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StayRange {
    check_in: NaiveDate,
    check_out: NaiveDate,
}

impl StayRange {
    /// Build a range, rejecting zero-length and inverted intervals.
    pub fn new(check_in: NaiveDate, check_out: NaiveDate) -> DomainResult<Self> {
        if check_out <= check_in {
            return Err(DomainError::Validation(
                "check_out must be strictly after check_in".into(),
            ));
        }
        Ok(Self {
            check_in,
            check_out,
        })
    }

    pub fn check_in(&self) -> NaiveDate {
        self.check_in
    }

    pub fn check_out(&self) -> NaiveDate {
        self.check_out
    }

    /// Number of nights covered by the interval
    pub fn nights(&self) -> i64 {
        (self.check_out - self.check_in).num_days()
    }

    /// Two half-open intervals `[a,b)` and `[c,d)` overlap iff `a < d && c < b`.
    pub fn overlaps(&self, other: &StayRange) -> bool {
        self.check_in < other.check_out && other.check_in < self.check_out
    }
}

/// Room reservation
#[derive(Debug, Clone)]
pub struct Reservation {
    /// Unique reservation ID
    pub id: i32,
    /// Reserved room
    pub room_id: i32,
    /// Booking client
    pub client_id: i32,
    /// Stay interval (half-open)
    pub stay: StayRange,
    /// Number of guests
    pub guests: i32,
    /// Current status
    pub status: ReservationStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Reservation {
    /// Cancel this reservation
    pub fn cancel(&mut self) {
        self.status = ReservationStatus::Cancelled;
        self.updated_at = Utc::now();
    }

    /// Whether this reservation still blocks its room
    pub fn is_active(&self) -> bool {
        self.status == ReservationStatus::Confirmed
    }
}

/// Data needed to create a reservation
#[derive(Debug, Clone)]
pub struct NewReservation {
    pub room_id: i32,
    pub client_id: i32,
    pub stay: StayRange,
    pub guests: i32,
}

/// Availability check result
#[derive(Debug, Clone, Copy)]
pub struct Availability {
    pub available: bool,
    /// Number of confirmed reservations conflicting with the candidate range
    pub conflicts: u64,
}

// ── Tests ──────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    fn range(a: NaiveDate, b: NaiveDate) -> StayRange {
        StayRange::new(a, b).unwrap()
    }

    #[test]
    fn zero_length_range_is_rejected() {
        let err = StayRange::new(d(2024, 6, 1), d(2024, 6, 1));
        assert!(matches!(err, Err(DomainError::Validation(_))));
    }

    #[test]
    fn inverted_range_is_rejected() {
        let err = StayRange::new(d(2024, 6, 5), d(2024, 6, 1));
        assert!(matches!(err, Err(DomainError::Validation(_))));
    }

    #[test]
    fn back_to_back_does_not_overlap() {
        // Existing checkout == candidate check-in: checkout day is exclusive.
        let existing = range(d(2024, 6, 1), d(2024, 6, 5));
        let candidate = range(d(2024, 6, 5), d(2024, 6, 8));
        assert!(!existing.overlaps(&candidate));
        assert!(!candidate.overlaps(&existing));
    }

    #[test]
    fn partial_overlap_is_detected() {
        let existing = range(d(2024, 6, 1), d(2024, 6, 5));
        let candidate = range(d(2024, 6, 3), d(2024, 6, 10));
        assert!(existing.overlaps(&candidate));
        assert!(candidate.overlaps(&existing));
    }

    #[test]
    fn containment_is_detected() {
        let existing = range(d(2024, 5, 10), d(2024, 5, 15));
        let candidate = range(d(2024, 5, 1), d(2024, 6, 1));
        assert!(candidate.overlaps(&existing));
        assert!(existing.overlaps(&candidate));
    }

    #[test]
    fn identical_ranges_overlap() {
        let a = range(d(2024, 6, 1), d(2024, 6, 5));
        let b = range(d(2024, 6, 1), d(2024, 6, 5));
        assert!(a.overlaps(&b));
    }

    #[test]
    fn disjoint_ranges_do_not_overlap() {
        let a = range(d(2024, 6, 1), d(2024, 6, 5));
        let b = range(d(2024, 7, 1), d(2024, 7, 5));
        assert!(!a.overlaps(&b));
        assert!(!b.overlaps(&a));
    }

    #[test]
    fn nights_counts_half_open_days() {
        let a = range(d(2024, 6, 1), d(2024, 6, 5));
        assert_eq!(a.nights(), 4);
    }

    #[test]
    fn cancel_frees_the_room() {
        let mut r = Reservation {
            id: 1,
            room_id: 7,
            client_id: 3,
            stay: range(d(2024, 6, 1), d(2024, 6, 5)),
            guests: 2,
            status: ReservationStatus::Confirmed,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        };
        assert!(r.is_active());
        r.cancel();
        assert_eq!(r.status, ReservationStatus::Cancelled);
        assert!(!r.is_active());
    }

    #[test]
    fn status_roundtrip() {
        for status in &[
            ReservationStatus::Confirmed,
            ReservationStatus::Cancelled,
            ReservationStatus::Completed,
        ] {
            assert_eq!(&ReservationStatus::from_str(status.as_str()), status);
        }
    }

    #[test]
    fn unknown_status_defaults_to_cancelled() {
        assert_eq!(
            ReservationStatus::from_str("Unknown"),
            ReservationStatus::Cancelled
        );
    }
}
