//! SeaORM implementation of RepositoryProvider

use sea_orm::DatabaseConnection;

use crate::domain::bike::BikeRepository;
use crate::domain::booking::BookingRepository;
use crate::domain::repositories::RepositoryProvider;
use crate::domain::ride::RideRepository;

use super::bike_repository::SeaOrmBikeRepository;
use super::booking_repository::SeaOrmBookingRepository;
use super::ride_repository::SeaOrmRideRepository;

/// Unified repository provider backed by SeaORM.
///
/// Holds one connection pool and exposes per-aggregate repository accessors.
pub struct SeaOrmRepositoryProvider {
    bikes: SeaOrmBikeRepository,
    bookings: SeaOrmBookingRepository,
    rides: SeaOrmRideRepository,
}

impl SeaOrmRepositoryProvider {
    pub fn new(db: DatabaseConnection) -> Self {
        Self {
            bikes: SeaOrmBikeRepository::new(db.clone()),
            bookings: SeaOrmBookingRepository::new(db.clone()),
            rides: SeaOrmRideRepository::new(db),
        }
    }
}

impl RepositoryProvider for SeaOrmRepositoryProvider {
    fn bikes(&self) -> &dyn BikeRepository {
        &self.bikes
    }

    fn bookings(&self) -> &dyn BookingRepository {
        &self.bookings
    }

    fn rides(&self) -> &dyn RideRepository {
        &self.rides
    }
}
