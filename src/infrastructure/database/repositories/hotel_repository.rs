//! SeaORM implementation of HotelRepository

use async_trait::async_trait;
use chrono::Utc;
use log::debug;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set,
};

use crate::domain::hotel::{Hotel, HotelFilter, HotelRepository, NewHotel, UpdateHotel};
use crate::domain::{DomainError, DomainResult};
use crate::infrastructure::database::entities::hotel;

use super::map_db_err;

pub struct SeaOrmHotelRepository {
    db: DatabaseConnection,
}

impl SeaOrmHotelRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

// ── Conversion helpers ──────────────────────────────────────────

// Phone numbers and amenities are stored as JSON arrays in string columns.
fn decode_list(raw: &str) -> Vec<String> {
    serde_json::from_str(raw).unwrap_or_default()
}

fn encode_list(items: &[String]) -> String {
    serde_json::to_string(items).unwrap_or_else(|_| "[]".to_string())
}

fn model_to_domain(m: hotel::Model) -> Hotel {
    Hotel {
        tax_id: m.tax_id,
        name: m.name,
        lodging_type: m.lodging_type,
        province: m.province,
        canton: m.canton,
        district: m.district,
        address: m.address,
        email: m.email,
        website: m.website,
        social_links: m.social_links,
        phones: decode_list(&m.phones),
        amenities: decode_list(&m.amenities),
        owner_user_id: m.owner_user_id,
        created_at: m.created_at,
        updated_at: m.updated_at,
    }
}

// ── HotelRepository impl ────────────────────────────────────────

#[async_trait]
impl HotelRepository for SeaOrmHotelRepository {
    async fn create(&self, new: NewHotel) -> DomainResult<Hotel> {
        debug!("Registering hotel: {}", new.tax_id);

        let now = Utc::now();
        let model = hotel::ActiveModel {
            tax_id: Set(new.tax_id),
            name: Set(new.name),
            lodging_type: Set(new.lodging_type),
            province: Set(new.province),
            canton: Set(new.canton),
            district: Set(new.district),
            address: Set(new.address),
            email: Set(new.email),
            website: Set(new.website),
            social_links: Set(new.social_links),
            phones: Set(encode_list(&new.phones)),
            amenities: Set(encode_list(&new.amenities)),
            owner_user_id: Set(new.owner_user_id),
            created_at: Set(now),
            updated_at: Set(now),
        };
        let inserted = model.insert(&self.db).await.map_err(map_db_err)?;
        Ok(model_to_domain(inserted))
    }

    async fn find_by_tax_id(&self, tax_id: &str) -> DomainResult<Option<Hotel>> {
        let model = hotel::Entity::find_by_id(tax_id)
            .one(&self.db)
            .await
            .map_err(map_db_err)?;
        Ok(model.map(model_to_domain))
    }

    async fn list(&self, filter: &HotelFilter) -> DomainResult<Vec<Hotel>> {
        let mut query = hotel::Entity::find().order_by_asc(hotel::Column::Name);

        if let Some(province) = &filter.province {
            query = query.filter(hotel::Column::Province.eq(province));
        }
        if let Some(lodging_type) = &filter.lodging_type {
            query = query.filter(hotel::Column::LodgingType.eq(lodging_type));
        }
        if let Some(name) = &filter.name {
            query = query.filter(hotel::Column::Name.like(format!("%{}%", name)));
        }

        let models = query.all(&self.db).await.map_err(map_db_err)?;
        Ok(models.into_iter().map(model_to_domain).collect())
    }

    async fn update(&self, tax_id: &str, update: UpdateHotel) -> DomainResult<Hotel> {
        let existing = hotel::Entity::find_by_id(tax_id)
            .one(&self.db)
            .await
            .map_err(map_db_err)?
            .ok_or(DomainError::NotFound {
                entity: "Hotel",
                field: "tax_id",
                value: tax_id.to_string(),
            })?;

        let mut active: hotel::ActiveModel = existing.into();
        if let Some(name) = update.name {
            active.name = Set(name);
        }
        if let Some(email) = update.email {
            active.email = Set(email);
        }
        if let Some(website) = update.website {
            active.website = Set(Some(website));
        }
        if let Some(social_links) = update.social_links {
            active.social_links = Set(Some(social_links));
        }
        if let Some(phones) = update.phones {
            active.phones = Set(encode_list(&phones));
        }
        if let Some(amenities) = update.amenities {
            active.amenities = Set(encode_list(&amenities));
        }
        active.updated_at = Set(Utc::now());
        let updated = active.update(&self.db).await.map_err(map_db_err)?;
        Ok(model_to_domain(updated))
    }
}
