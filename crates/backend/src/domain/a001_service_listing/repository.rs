use chrono::Utc;
use contracts::domain::a001_service_listing::aggregate::{ServiceId, ServiceListing};
use contracts::domain::common::EntityMetadata;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use sea_orm::entity::prelude::*;
use sea_orm::{ColumnTrait, EntityTrait, QueryFilter, Set};

use crate::shared::data::db::get_connection;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "a001_service_listing")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub name: String,
    pub description: Option<String>,
    pub category: String,
    pub city: String,
    pub address: String,
    /// JSON-массивы строк
    pub contact: String,
    pub images: String,
    pub logo: Option<String>,
    pub location: Option<String>,
    pub social: String,
    pub services_offered: String,
    pub is_deleted: bool,
    pub created_at: Option<chrono::DateTime<chrono::Utc>>,
    pub updated_at: Option<chrono::DateTime<chrono::Utc>>,
    pub version: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

fn decode_string_list(raw: &str) -> Vec<String> {
    serde_json::from_str(raw).unwrap_or_default()
}

fn encode_string_list(values: &[String]) -> String {
    serde_json::to_string(values).unwrap_or_else(|_| "[]".to_string())
}

impl From<Model> for ServiceListing {
    fn from(m: Model) -> Self {
        let metadata = EntityMetadata::with_values(
            m.created_at.unwrap_or_else(Utc::now),
            m.updated_at.unwrap_or_else(Utc::now),
            m.is_deleted,
            m.version,
        );
        let uuid = Uuid::parse_str(&m.id).unwrap_or_else(|_| Uuid::new_v4());

        ServiceListing {
            id: ServiceId(uuid),
            name: m.name,
            description: m.description,
            category: m.category,
            city: m.city,
            address: m.address,
            contact: decode_string_list(&m.contact),
            images: decode_string_list(&m.images),
            logo: m.logo,
            location: m.location,
            social: decode_string_list(&m.social),
            services_offered: decode_string_list(&m.services_offered),
            metadata,
        }
    }
}

fn to_active_model(aggregate: &ServiceListing) -> ActiveModel {
    ActiveModel {
        id: Set(aggregate.id.value().to_string()),
        name: Set(aggregate.name.clone()),
        description: Set(aggregate.description.clone()),
        category: Set(aggregate.category.clone()),
        city: Set(aggregate.city.clone()),
        address: Set(aggregate.address.clone()),
        contact: Set(encode_string_list(&aggregate.contact)),
        images: Set(encode_string_list(&aggregate.images)),
        logo: Set(aggregate.logo.clone()),
        location: Set(aggregate.location.clone()),
        social: Set(encode_string_list(&aggregate.social)),
        services_offered: Set(encode_string_list(&aggregate.services_offered)),
        is_deleted: Set(aggregate.metadata.is_deleted),
        created_at: Set(Some(aggregate.metadata.created_at)),
        updated_at: Set(Some(aggregate.metadata.updated_at)),
        version: Set(aggregate.metadata.version),
    }
}

fn conn() -> &'static DatabaseConnection {
    get_connection()
}

/// Снимок каталога: порядок стабильный, по дате создания
pub async fn list_all() -> anyhow::Result<Vec<ServiceListing>> {
    let mut items: Vec<ServiceListing> = Entity::find()
        .filter(Column::IsDeleted.eq(false))
        .all(conn())
        .await?
        .into_iter()
        .map(Into::into)
        .collect();
    items.sort_by_key(|s| s.metadata.created_at);
    Ok(items)
}

pub async fn get_by_id(id: Uuid) -> anyhow::Result<Option<ServiceListing>> {
    let result = Entity::find_by_id(id.to_string())
        .filter(Column::IsDeleted.eq(false))
        .one(conn())
        .await?;
    Ok(result.map(Into::into))
}

pub async fn insert(aggregate: &ServiceListing) -> anyhow::Result<Uuid> {
    let uuid = aggregate.id.value();
    Entity::insert(to_active_model(aggregate)).exec(conn()).await?;
    Ok(uuid)
}

pub async fn update(aggregate: &ServiceListing) -> anyhow::Result<()> {
    Entity::update(to_active_model(aggregate)).exec(conn()).await?;
    Ok(())
}

/// Мягкое удаление; false если записи нет
pub async fn soft_delete(id: Uuid) -> anyhow::Result<bool> {
    let existing = Entity::find_by_id(id.to_string())
        .filter(Column::IsDeleted.eq(false))
        .one(conn())
        .await?;

    let Some(model) = existing else {
        return Ok(false);
    };

    let mut active: ActiveModel = model.into();
    active.is_deleted = Set(true);
    active.updated_at = Set(Some(Utc::now()));
    active.update(conn()).await?;
    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_string_list_codec() {
        let values = vec!["0100000000".to_string(), "+201000000000".to_string()];
        let encoded = encode_string_list(&values);
        assert_eq!(decode_string_list(&encoded), values);
    }

    #[test]
    fn test_decode_garbage_falls_back_to_empty() {
        assert!(decode_string_list("not json").is_empty());
        assert!(decode_string_list("").is_empty());
    }
}
