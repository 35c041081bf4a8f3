//! SeaORM implementation of BikeRepository

use async_trait::async_trait;
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, Set};
use uuid::Uuid;

use crate::domain::bike::{Bike, BikeRepository};
use crate::domain::BookingResult;
use crate::infrastructure::database::entities::bike;

pub struct SeaOrmBikeRepository {
    db: DatabaseConnection,
}

impl SeaOrmBikeRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

fn model_to_domain(m: bike::Model) -> Bike {
    Bike {
        id: m.id,
        label: m.label,
        display_name: m.display_name,
    }
}

#[async_trait]
impl BikeRepository for SeaOrmBikeRepository {
    async fn save(&self, b: Bike) -> BookingResult<Bike> {
        let model = bike::ActiveModel {
            id: Set(b.id),
            label: Set(b.label),
            display_name: Set(b.display_name),
        };
        let inserted = model.insert(&self.db).await?;
        Ok(model_to_domain(inserted))
    }

    async fn find_by_id(&self, id: Uuid) -> BookingResult<Option<Bike>> {
        let model = bike::Entity::find_by_id(id).one(&self.db).await?;
        Ok(model.map(model_to_domain))
    }
}
