//! Ride repository interface

use async_trait::async_trait;
use uuid::Uuid;

use super::model::Ride;
use crate::domain::BookingResult;

#[async_trait]
pub trait RideRepository: Send + Sync {
    /// Open a ride after transactionally verifying the bike has no other
    /// open ride. Fails with `RideInProgress` carrying the holder's user id.
    async fn start(&self, bike_id: Uuid, user_id: &str) -> BookingResult<Ride>;

    /// Close the rider's open ride and return it with `ended_at` set.
    /// Fails with `NoRideInProgress` if the rider has none.
    async fn end(&self, user_id: &str) -> BookingResult<Ride>;

    /// The rider's open ride, if any
    async fn current_for_user(&self, user_id: &str) -> BookingResult<Option<Ride>>;
}
