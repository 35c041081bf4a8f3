//! SeaORM implementation of RideRepository
//!
//! Start and end are read-modify-write and therefore transactional, with
//! the same locking discipline as the booking store.

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, DatabaseConnection, DbBackend, EntityTrait,
    QueryFilter, QuerySelect, Set, TransactionTrait,
};
use tracing::debug;
use uuid::Uuid;

use crate::domain::ride::{Ride, RideRepository};
use crate::domain::{BookingError, BookingResult};
use crate::infrastructure::database::entities::ride;

pub struct SeaOrmRideRepository {
    db: DatabaseConnection,
}

impl SeaOrmRideRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

fn model_to_domain(m: ride::Model) -> Ride {
    Ride {
        id: m.id,
        bike_id: m.bike_id,
        user_id: m.user_id,
        started_at: m.started_at,
        ended_at: m.ended_at,
    }
}

#[async_trait]
impl RideRepository for SeaOrmRideRepository {
    async fn start(&self, bike_id: Uuid, user_id: &str) -> BookingResult<Ride> {
        let txn = self.db.begin().await?;

        let mut open = ride::Entity::find()
            .filter(ride::Column::BikeId.eq(bike_id))
            .filter(ride::Column::EndedAt.is_null());
        if txn.get_database_backend() != DbBackend::Sqlite {
            open = open.lock_exclusive();
        }
        if let Some(existing) = open.one(&txn).await? {
            return Err(BookingError::RideInProgress {
                user_id: existing.user_id,
            });
        }

        let model = ride::ActiveModel {
            id: Set(Uuid::new_v4()),
            bike_id: Set(bike_id),
            user_id: Set(user_id.to_string()),
            started_at: Set(Utc::now()),
            ended_at: Set(None),
        };
        let inserted = model.insert(&txn).await?;

        txn.commit().await?;

        debug!(ride_id = %inserted.id, bike_id = %bike_id, "ride started");
        Ok(model_to_domain(inserted))
    }

    async fn end(&self, user_id: &str) -> BookingResult<Ride> {
        let txn = self.db.begin().await?;

        let mut open = ride::Entity::find()
            .filter(ride::Column::UserId.eq(user_id))
            .filter(ride::Column::EndedAt.is_null());
        if txn.get_database_backend() != DbBackend::Sqlite {
            open = open.lock_exclusive();
        }
        let Some(found) = open.one(&txn).await? else {
            return Err(BookingError::NoRideInProgress);
        };

        let mut active: ride::ActiveModel = found.into();
        active.ended_at = Set(Some(Utc::now()));
        let updated = active.update(&txn).await?;

        txn.commit().await?;

        debug!(ride_id = %updated.id, "ride ended");
        Ok(model_to_domain(updated))
    }

    async fn current_for_user(&self, user_id: &str) -> BookingResult<Option<Ride>> {
        let model = ride::Entity::find()
            .filter(ride::Column::UserId.eq(user_id))
            .filter(ride::Column::EndedAt.is_null())
            .one(&self.db)
            .await?;
        Ok(model.map(model_to_domain))
    }
}

// ── Tests ──────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use sea_orm::{ConnectOptions, Database};
    use sea_orm_migration::MigratorTrait;

    use super::*;
    use crate::domain::bike::{Bike, BikeRepository};
    use crate::infrastructure::database::migrator::Migrator;
    use crate::infrastructure::database::repositories::bike_repository::SeaOrmBikeRepository;

    async fn setup() -> (SeaOrmRideRepository, Uuid) {
        let mut opts = ConnectOptions::new("sqlite::memory:");
        opts.max_connections(1);
        let db = Database::connect(opts).await.unwrap();
        Migrator::up(&db, None).await.unwrap();

        let bikes = SeaOrmBikeRepository::new(db.clone());
        let bike = bikes.save(Bike::new("B-01")).await.unwrap();

        (SeaOrmRideRepository::new(db), bike.id)
    }

    #[tokio::test]
    async fn start_then_end_roundtrip() {
        let (repo, bike_id) = setup().await;

        let ride = repo.start(bike_id, "rider-1").await.unwrap();
        assert!(ride.is_open());

        let current = repo.current_for_user("rider-1").await.unwrap().unwrap();
        assert_eq!(current.id, ride.id);

        let ended = repo.end("rider-1").await.unwrap();
        assert_eq!(ended.id, ride.id);
        assert!(!ended.is_open());
        assert!(repo.current_for_user("rider-1").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn open_ride_blocks_a_second_start() {
        let (repo, bike_id) = setup().await;

        repo.start(bike_id, "rider-1").await.unwrap();
        let err = repo.start(bike_id, "rider-2").await.unwrap_err();

        match err {
            BookingError::RideInProgress { user_id } => assert_eq!(user_id, "rider-1"),
            other => panic!("unexpected error: {other}"),
        }

        // ending frees the bike
        repo.end("rider-1").await.unwrap();
        repo.start(bike_id, "rider-2").await.unwrap();
    }

    #[tokio::test]
    async fn end_without_open_ride_fails() {
        let (repo, _) = setup().await;
        let err = repo.end("rider-1").await.unwrap_err();
        assert!(matches!(err, BookingError::NoRideInProgress));
    }
}
