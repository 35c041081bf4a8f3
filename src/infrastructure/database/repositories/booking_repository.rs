//! SeaORM implementation of BookingRepository
//!
//! All writes are transactional. The overlap check reads the conflicting
//! row set with an exclusive lock (`SELECT ... FOR UPDATE`) on backends that
//! support it, so two concurrent creates for intersecting windows serialize
//! and exactly one wins. SQLite has no row locks; there the database-level
//! single writer provides the same guarantee, serialized more coarsely.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, DatabaseConnection, DbBackend, EntityTrait,
    QueryFilter, QueryOrder, QuerySelect, Set, TransactionTrait,
};
use tracing::debug;
use uuid::Uuid;

use crate::domain::booking::{
    Booking, BookingRepository, BookingSlot, BookingStatus, NewBooking,
};
use crate::domain::{BookingError, BookingResult};
use crate::infrastructure::database::entities::booking;

pub struct SeaOrmBookingRepository {
    db: DatabaseConnection,
}

impl SeaOrmBookingRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

// ── Conversion helpers ──────────────────────────────────────────

fn model_to_domain(m: booking::Model) -> Booking {
    Booking {
        id: m.id,
        bike_id: m.bike_id,
        user_id: m.user_id,
        start_time: m.start_time,
        end_time: m.end_time,
        cancelled_at: m.cancelled_at,
        total_cost: m.total_cost,
        created_at: m.created_at,
    }
}

// ── BookingRepository impl ──────────────────────────────────────

#[async_trait]
impl BookingRepository for SeaOrmBookingRepository {
    async fn find_by_id(&self, id: Uuid) -> BookingResult<Booking> {
        let model = booking::Entity::find_by_id(id).one(&self.db).await?;
        model
            .map(model_to_domain)
            .ok_or(BookingError::BookingNotFound(id))
    }

    async fn list_by_user(
        &self,
        user_id: &str,
        status: Option<BookingStatus>,
    ) -> BookingResult<Vec<Booking>> {
        let models = booking::Entity::find()
            .filter(booking::Column::UserId.eq(user_id))
            .order_by_asc(booking::Column::StartTime)
            .all(&self.db)
            .await?;

        let mut bookings: Vec<Booking> = models.into_iter().map(model_to_domain).collect();

        // There is no status column to push down; the filter has to run on
        // the derived status after the fetch.
        if let Some(status) = status {
            let now = Utc::now();
            bookings.retain(|b| b.status_at(now) == status);
        }

        Ok(bookings)
    }

    async fn current_for_user(&self, user_id: &str) -> BookingResult<Option<Booking>> {
        let now = Utc::now();
        let model = booking::Entity::find()
            .filter(booking::Column::UserId.eq(user_id))
            .filter(booking::Column::CancelledAt.is_null())
            .filter(booking::Column::StartTime.lte(now))
            .filter(booking::Column::EndTime.gte(now))
            .one(&self.db)
            .await?;
        Ok(model.map(model_to_domain))
    }

    async fn create(&self, candidate: NewBooking) -> BookingResult<Booking> {
        let txn = self.db.begin().await?;

        let mut overlapping = booking::Entity::find()
            .filter(booking::Column::BikeId.eq(candidate.bike_id))
            .filter(booking::Column::CancelledAt.is_null())
            .filter(booking::Column::StartTime.lt(candidate.end_time))
            .filter(booking::Column::EndTime.gt(candidate.start_time));
        if txn.get_database_backend() != DbBackend::Sqlite {
            overlapping = overlapping.lock_exclusive();
        }

        let conflicts = overlapping.all(&txn).await?;
        if !conflicts.is_empty() {
            // dropping the transaction rolls it back
            return Err(BookingError::OverlapConflict);
        }

        let model = booking::ActiveModel {
            id: Set(Uuid::new_v4()),
            bike_id: Set(candidate.bike_id),
            user_id: Set(candidate.user_id),
            start_time: Set(candidate.start_time),
            end_time: Set(candidate.end_time),
            cancelled_at: Set(None),
            total_cost: Set(None),
            created_at: Set(Utc::now()),
        };
        let inserted = model.insert(&txn).await?;

        txn.commit().await?;

        debug!(booking_id = %inserted.id, bike_id = %inserted.bike_id, "booking created");
        Ok(model_to_domain(inserted))
    }

    async fn cancel(&self, id: Uuid, requesting_user_id: &str) -> BookingResult<Booking> {
        let txn = self.db.begin().await?;

        let mut query = booking::Entity::find_by_id(id);
        if txn.get_database_backend() != DbBackend::Sqlite {
            query = query.lock_exclusive();
        }
        let Some(found) = query.one(&txn).await? else {
            return Err(BookingError::BookingNotFound(id));
        };

        if found.user_id != requesting_user_id {
            return Err(BookingError::NotAuthorized);
        }
        if found.cancelled_at.is_some() {
            return Err(BookingError::CannotCancel);
        }
        let now = Utc::now();
        if found.start_time <= now {
            // already started or finished; only future bookings cancel
            return Err(BookingError::CannotCancel);
        }

        let mut active: booking::ActiveModel = found.into();
        active.cancelled_at = Set(Some(now));
        let updated = active.update(&txn).await?;

        txn.commit().await?;

        debug!(booking_id = %id, "booking cancelled");
        Ok(model_to_domain(updated))
    }

    async fn slots_for_bike(
        &self,
        bike_id: Uuid,
        from: Option<DateTime<Utc>>,
        to: Option<DateTime<Utc>>,
    ) -> BookingResult<Vec<BookingSlot>> {
        let mut query = booking::Entity::find()
            .filter(booking::Column::BikeId.eq(bike_id))
            .filter(booking::Column::CancelledAt.is_null());

        if let Some(from) = from {
            query = query.filter(booking::Column::EndTime.gt(from));
        }
        if let Some(to) = to {
            query = query.filter(booking::Column::StartTime.lt(to));
        }

        let models = query
            .order_by_asc(booking::Column::StartTime)
            .all(&self.db)
            .await?;

        Ok(models
            .into_iter()
            .map(|m| BookingSlot {
                start_time: m.start_time,
                end_time: m.end_time,
                user_id: m.user_id,
            })
            .collect())
    }

    async fn next_by_other_user(
        &self,
        bike_id: Uuid,
        excluding_user_id: &str,
        after: DateTime<Utc>,
    ) -> BookingResult<Option<Booking>> {
        let model = booking::Entity::find()
            .filter(booking::Column::BikeId.eq(bike_id))
            .filter(booking::Column::UserId.ne(excluding_user_id))
            .filter(booking::Column::CancelledAt.is_null())
            .filter(booking::Column::StartTime.gt(after))
            .order_by_asc(booking::Column::StartTime)
            .one(&self.db)
            .await?;
        Ok(model.map(model_to_domain))
    }
}

// ── Tests ──────────────────────────────────────────────────────
