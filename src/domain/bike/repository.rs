//! Bike repository interface

use async_trait::async_trait;
use uuid::Uuid;

use super::model::Bike;
use crate::domain::BookingResult;

#[async_trait]
pub trait BikeRepository: Send + Sync {
    /// Register a bike in the catalog
    async fn save(&self, bike: Bike) -> BookingResult<Bike>;

    /// Find a bike by its id
    async fn find_by_id(&self, id: Uuid) -> BookingResult<Option<Bike>>;
}
