//! Repository aggregation for the domain layer

use super::bike::BikeRepository;
use super::booking::BookingRepository;
use super::ride::RideRepository;

/// Unified access to all per-aggregate repositories.
///
/// Consumers request only the repository they need:
///
/// ```ignore
/// async fn handle(repos: &dyn RepositoryProvider) {
///     let booking = repos.bookings().find_by_id(id).await?;
///     let bike = repos.bikes().find_by_id(booking.bike_id).await?;
/// }
/// ```
pub trait RepositoryProvider: Send + Sync {
    fn bikes(&self) -> &dyn BikeRepository;
    fn bookings(&self) -> &dyn BookingRepository;
    fn rides(&self) -> &dyn RideRepository;
}
