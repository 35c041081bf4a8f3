//! Booking use cases: creation with conflict policy, cancellation, listings
//! and the handover pre-flight gate.
//!
//! Creation applies three gates in order: duration bounds, asset existence,
//! then the handover buffer against the next booking by a different rider.
//! The hard overlap rule runs last, inside the store transaction, so the
//! soft buffer check never weakens the non-overlap invariant.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::info;
use uuid::Uuid;

use crate::config::BookingPolicy;
use crate::domain::booking::{Booking, BookingSlot, BookingStatus, NewBooking};
use crate::domain::interval::starts_within_buffer;
use crate::domain::{BookingError, BookingResult, RepositoryProvider};

/// Result of the pre-flight handover gate.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HandoverCheck {
    pub allowed: bool,
    /// Start of the other rider's booking that blocks the handover
    pub blocking_start: Option<DateTime<Utc>>,
    pub minutes_until_blocking: Option<i64>,
}

impl HandoverCheck {
    fn allowed() -> Self {
        Self {
            allowed: true,
            blocking_start: None,
            minutes_until_blocking: None,
        }
    }

    fn blocked_by(start: DateTime<Utc>, now: DateTime<Utc>) -> Self {
        Self {
            allowed: false,
            blocking_start: Some(start),
            minutes_until_blocking: Some((start - now).num_minutes()),
        }
    }
}

/// Service for booking operations
pub struct BookingService {
    repos: Arc<dyn RepositoryProvider>,
    policy: BookingPolicy,
}

impl BookingService {
    pub fn new(repos: Arc<dyn RepositoryProvider>, policy: BookingPolicy) -> Self {
        Self { repos, policy }
    }

    /// Create a booking for a bike.
    pub async fn create_booking(
        &self,
        bike_id: Uuid,
        user_id: &str,
        start_time: DateTime<Utc>,
        end_time: DateTime<Utc>,
    ) -> BookingResult<Booking> {
        self.validate_duration(start_time, end_time)?;

        if self.repos.bikes().find_by_id(bike_id).await?.is_none() {
            return Err(BookingError::BikeNotFound(bike_id));
        }

        self.check_buffer(bike_id, user_id, end_time).await?;

        let booking = self
            .repos
            .bookings()
            .create(NewBooking {
                bike_id,
                user_id: user_id.to_string(),
                start_time,
                end_time,
            })
            .await?;

        info!(booking_id = %booking.id, bike_id = %bike_id, user_id, "booking created");
        Ok(booking)
    }

    /// Cancel a booking on behalf of its owner.
    pub async fn cancel_booking(&self, id: Uuid, requesting_user_id: &str) -> BookingResult<Booking> {
        let booking = self.repos.bookings().cancel(id, requesting_user_id).await?;
        info!(booking_id = %id, user_id = requesting_user_id, "booking cancelled");
        Ok(booking)
    }

    pub async fn booking(&self, id: Uuid) -> BookingResult<Booking> {
        self.repos.bookings().find_by_id(id).await
    }

    /// The rider's bookings ascending by start time, optionally filtered by
    /// the status derived at the current instant.
    pub async fn bookings_for_user(
        &self,
        user_id: &str,
        status: Option<BookingStatus>,
    ) -> BookingResult<Vec<Booking>> {
        self.repos.bookings().list_by_user(user_id, status).await
    }

    pub async fn current_booking_for_user(&self, user_id: &str) -> BookingResult<Option<Booking>> {
        self.repos.bookings().current_for_user(user_id).await
    }

    /// Booked slots for a bike, the input to availability calendars.
    pub async fn booked_slots(
        &self,
        bike_id: Uuid,
        from: Option<DateTime<Utc>>,
        to: Option<DateTime<Utc>>,
    ) -> BookingResult<Vec<BookingSlot>> {
        self.repos.bookings().slots_for_bike(bike_id, from, to).await
    }

    pub async fn next_booking_by_other_user(
        &self,
        bike_id: Uuid,
        excluding_user_id: &str,
        after: DateTime<Utc>,
    ) -> BookingResult<Option<Booking>> {
        self.repos
            .bookings()
            .next_by_other_user(bike_id, excluding_user_id, after)
            .await
    }

    /// Pre-flight gate for beginning physical use of a bike: blocked while
    /// a different rider's booking starts within the handover buffer from
    /// now. The rider's own bookings never block them.
    pub async fn check_handover(&self, bike_id: Uuid, user_id: &str) -> BookingResult<HandoverCheck> {
        let now = Utc::now();
        let next = self
            .repos
            .bookings()
            .next_by_other_user(bike_id, user_id, now)
            .await?;

        Ok(match next {
            Some(next)
                if starts_within_buffer(next.start_time, now, self.policy.handover_buffer) =>
            {
                HandoverCheck::blocked_by(next.start_time, now)
            }
            _ => HandoverCheck::allowed(),
        })
    }

    fn validate_duration(
        &self,
        start_time: DateTime<Utc>,
        end_time: DateTime<Utc>,
    ) -> BookingResult<()> {
        if end_time <= start_time {
            return Err(BookingError::InvalidDuration(
                "end time must be after start time".into(),
            ));
        }
        let duration = end_time - start_time;
        if duration < self.policy.min_duration {
            return Err(BookingError::InvalidDuration(format!(
                "booking must last at least {} minutes",
                self.policy.min_duration.num_minutes()
            )));
        }
        if duration > self.policy.max_duration {
            return Err(BookingError::InvalidDuration(format!(
                "booking cannot exceed {} minutes",
                self.policy.max_duration.num_minutes()
            )));
        }
        Ok(())
    }

    /// Soft rule: a different rider's booking must not start inside the
    /// buffer after the candidate's end. Equality at the boundary is allowed.
    async fn check_buffer(
        &self,
        bike_id: Uuid,
        user_id: &str,
        end_time: DateTime<Utc>,
    ) -> BookingResult<()> {
        let next = self
            .repos
            .bookings()
            .next_by_other_user(bike_id, user_id, end_time)
            .await?;

        if let Some(next) = next {
            if starts_within_buffer(next.start_time, end_time, self.policy.handover_buffer) {
                return Err(BookingError::BufferConflict {
                    next_start: next.start_time,
                });
            }
        }
        Ok(())
    }
}

// ── Tests ──────────────────────────────────────────────────────
