//! Database repository implementations
//!
//! Per-aggregate SeaORM repositories + unified RepositoryProvider.

pub mod bike_repository;
pub mod booking_repository;
pub mod repository_provider;
pub mod ride_repository;

pub use bike_repository::SeaOrmBikeRepository;
pub use booking_repository::SeaOrmBookingRepository;
pub use repository_provider::SeaOrmRepositoryProvider;
pub use ride_repository::SeaOrmRideRepository;
