//! Booking domain entity with time-derived lifecycle status

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::interval::TimeRange;

/// Lifecycle status of a booking, derived from its timestamps and the
/// cancellation mark at evaluation time. Never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BookingStatus {
    /// Future booking, not yet started
    Confirmed,
    /// The booking window contains the evaluation instant
    Active,
    /// The booking window has passed
    Completed,
    /// Cancelled by its owner before the start time
    Cancelled,
}

impl BookingStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Confirmed => "confirmed",
            Self::Active => "active",
            Self::Completed => "completed",
            Self::Cancelled => "cancelled",
        }
    }

    /// Parse a status filter value. Unknown strings are rejected rather than
    /// coerced so a bad query filter fails loudly.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "confirmed" => Some(Self::Confirmed),
            "active" => Some(Self::Active),
            "completed" => Some(Self::Completed),
            "cancelled" => Some(Self::Cancelled),
            _ => None,
        }
    }
}

impl std::fmt::Display for BookingStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A rider's claim on a bike for a bounded time window.
///
/// Immutable after creation except for `cancelled_at` (set at most once,
/// never cleared) and `total_cost` (written by the external billing step).
/// Rows are never deleted; history stays for audit and billing.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Booking {
    pub id: Uuid,
    pub bike_id: Uuid,
    /// Opaque rider identifier from the identity collaborator
    pub user_id: String,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    pub cancelled_at: Option<DateTime<Utc>>,
    /// Cents, set by billing after the ride completes
    pub total_cost: Option<i32>,
    pub created_at: DateTime<Utc>,
}

impl Booking {
    /// Derive the status at wall-clock time.
    pub fn status(&self) -> BookingStatus {
        self.status_at(Utc::now())
    }

    /// Derive the status at a given instant.
    ///
    /// The order is load-bearing: cancellation dominates everything,
    /// completion is checked before activity, and the active window is
    /// inclusive on both ends.
    pub fn status_at(&self, now: DateTime<Utc>) -> BookingStatus {
        if self.cancelled_at.is_some() {
            return BookingStatus::Cancelled;
        }
        if self.end_time < now {
            return BookingStatus::Completed;
        }
        if self.start_time <= now && now <= self.end_time {
            return BookingStatus::Active;
        }
        BookingStatus::Confirmed
    }

    pub fn time_range(&self) -> TimeRange {
        TimeRange::new(self.start_time, self.end_time)
    }
}

/// Candidate for a new booking; the store assigns `id` and `created_at`.
#[derive(Debug, Clone)]
pub struct NewBooking {
    pub bike_id: Uuid,
    pub user_id: String,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
}

/// A booked slot for availability queries. `user_id` is exposed so a caller
/// can flag the rider's own slots.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingSlot {
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    pub user_id: String,
}

// ── Tests ──────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn sample_booking(start_offset: Duration, end_offset: Duration) -> Booking {
        let now = Utc::now();
        Booking {
            id: Uuid::new_v4(),
            bike_id: Uuid::new_v4(),
            user_id: "rider-1".into(),
            start_time: now + start_offset,
            end_time: now + end_offset,
            cancelled_at: None,
            total_cost: None,
            created_at: now,
        }
    }

    #[test]
    fn future_booking_is_confirmed() {
        let b = sample_booking(Duration::hours(2), Duration::hours(4));
        assert_eq!(b.status(), BookingStatus::Confirmed);
    }

    #[test]
    fn booking_containing_now_is_active() {
        let b = sample_booking(Duration::hours(-1), Duration::hours(1));
        assert_eq!(b.status(), BookingStatus::Active);
    }

    #[test]
    fn past_booking_is_completed() {
        let b = sample_booking(Duration::hours(-4), Duration::hours(-2));
        assert_eq!(b.status(), BookingStatus::Completed);
    }

    #[test]
    fn active_window_is_inclusive_on_both_ends() {
        let b = sample_booking(Duration::zero(), Duration::hours(2));
        assert_eq!(b.status_at(b.start_time), BookingStatus::Active);
        assert_eq!(b.status_at(b.end_time), BookingStatus::Active);
        assert_eq!(
            b.status_at(b.end_time + Duration::seconds(1)),
            BookingStatus::Completed
        );
        assert_eq!(
            b.status_at(b.start_time - Duration::seconds(1)),
            BookingStatus::Confirmed
        );
    }

    #[test]
    fn cancellation_dominates_every_window() {
        let mut b = sample_booking(Duration::hours(-4), Duration::hours(-2));
        b.cancelled_at = Some(b.start_time - Duration::hours(1));
        // even a booking whose window has long passed reads as cancelled
        assert_eq!(b.status(), BookingStatus::Cancelled);

        let mut b = sample_booking(Duration::hours(-1), Duration::hours(1));
        b.cancelled_at = Some(Utc::now());
        assert_eq!(b.status(), BookingStatus::Cancelled);
    }

    #[test]
    fn status_parse_roundtrip() {
        for status in [
            BookingStatus::Confirmed,
            BookingStatus::Active,
            BookingStatus::Completed,
            BookingStatus::Cancelled,
        ] {
            assert_eq!(BookingStatus::parse(status.as_str()), Some(status));
        }
    }

    #[test]
    fn unknown_status_is_rejected() {
        assert_eq!(BookingStatus::parse("expired"), None);
        assert_eq!(BookingStatus::parse(""), None);
    }

    #[test]
    fn time_range_feeds_interval_math() {
        let a = sample_booking(Duration::hours(1), Duration::hours(3));
        let mut b = sample_booking(Duration::hours(2), Duration::hours(4));
        assert!(a.time_range().overlaps(&b.time_range()));

        b.start_time = a.end_time;
        assert!(!a.time_range().overlaps(&b.time_range()));
        assert_eq!(a.time_range().duration(), Duration::hours(2));
    }

    #[test]
    fn booking_serializes_camel_case() {
        let b = sample_booking(Duration::hours(2), Duration::hours(4));
        let json = serde_json::to_value(&b).unwrap();
        assert!(json.get("bikeId").is_some());
        assert!(json.get("startTime").is_some());
        assert!(json["cancelledAt"].is_null());
    }
}
