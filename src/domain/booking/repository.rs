//! Booking repository interface

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use uuid::Uuid;

use super::model::{Booking, BookingSlot, BookingStatus, NewBooking};
use crate::domain::BookingResult;

/// Sole owner of persisted booking state; all mutation passes through here.
#[async_trait]
pub trait BookingRepository: Send + Sync {
    /// Fetch a single booking by its id
    async fn find_by_id(&self, id: Uuid) -> BookingResult<Booking>;

    /// All bookings for a rider ascending by start time, optionally filtered
    /// by the status derived at the current instant
    async fn list_by_user(
        &self,
        user_id: &str,
        status: Option<BookingStatus>,
    ) -> BookingResult<Vec<Booking>>;

    /// The rider's non-cancelled booking whose window contains now, if any
    async fn current_for_user(&self, user_id: &str) -> BookingResult<Option<Booking>>;

    /// Insert a new booking after transactionally locking and checking every
    /// overlapping non-cancelled booking for the same bike
    async fn create(&self, candidate: NewBooking) -> BookingResult<Booking>;

    /// Set `cancelled_at` after verifying ownership and that the booking has
    /// not started
    async fn cancel(&self, id: Uuid, requesting_user_id: &str) -> BookingResult<Booking>;

    /// Non-cancelled slots for a bike ascending by start time, optionally
    /// restricted to slots overlapping the `[from, to)` window (either side
    /// may be open-ended)
    async fn slots_for_bike(
        &self,
        bike_id: Uuid,
        from: Option<DateTime<Utc>>,
        to: Option<DateTime<Utc>>,
    ) -> BookingResult<Vec<BookingSlot>>;

    /// Earliest non-cancelled booking for the bike owned by someone other
    /// than `excluding_user_id`, starting strictly after `after`
    async fn next_by_other_user(
        &self,
        bike_id: Uuid,
        excluding_user_id: &str,
        after: DateTime<Utc>,
    ) -> BookingResult<Option<Booking>>;
}
