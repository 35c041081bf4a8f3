//! Ride lifecycle: buffer-gated start, minute-accounted end

use std::sync::Arc;

use tracing::info;
use uuid::Uuid;

use crate::application::booking::BookingService;
use crate::application::ports::BillingGateway;
use crate::domain::ride::Ride;
use crate::domain::{BookingError, BookingResult, RepositoryProvider};

/// Service for ride (physical handover) operations
pub struct RideService {
    repos: Arc<dyn RepositoryProvider>,
    bookings: Arc<BookingService>,
    billing: Arc<dyn BillingGateway>,
}

impl RideService {
    pub fn new(
        repos: Arc<dyn RepositoryProvider>,
        bookings: Arc<BookingService>,
        billing: Arc<dyn BillingGateway>,
    ) -> Self {
        Self {
            repos,
            bookings,
            billing,
        }
    }

    /// Begin physical use of a bike.
    ///
    /// Runs the handover gate first: another rider's booking starting inside
    /// the buffer blocks the ride before any row is touched.
    pub async fn start_ride(&self, bike_id: Uuid, user_id: &str) -> BookingResult<Ride> {
        let gate = self.bookings.check_handover(bike_id, user_id).await?;
        if let Some(next_start) = gate.blocking_start {
            return Err(BookingError::BufferConflict { next_start });
        }

        let ride = self.repos.rides().start(bike_id, user_id).await?;
        info!(ride_id = %ride.id, bike_id = %bike_id, user_id, "ride started");
        Ok(ride)
    }

    /// End the rider's open ride and report the elapsed minutes to billing.
    /// Returns the minute count.
    pub async fn end_ride(&self, user_id: &str) -> BookingResult<i64> {
        let ride = self.repos.rides().end(user_id).await?;
        let minutes = ride.elapsed_minutes().unwrap_or(0);

        self.billing.report_ride_minutes(user_id, minutes).await?;

        info!(ride_id = %ride.id, user_id, minutes, "ride ended");
        Ok(minutes)
    }

    /// The rider's open ride, if any.
    pub async fn current_ride(&self, user_id: &str) -> BookingResult<Option<Ride>> {
        self.repos.rides().current_for_user(user_id).await
    }
}

// ── Tests ──────────────────────────────────────────────────────
