use chrono::Utc;
use contracts::domain::a002_contact_message::aggregate::{ContactMessage, ContactMessageId};
use contracts::domain::common::EntityMetadata;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use sea_orm::entity::prelude::*;
use sea_orm::{ColumnTrait, EntityTrait, QueryFilter, Set};

use crate::shared::data::db::get_connection;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "a002_contact_message")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub name: String,
    pub email: String,
    pub message: String,
    pub is_deleted: bool,
    pub created_at: Option<chrono::DateTime<chrono::Utc>>,
    pub updated_at: Option<chrono::DateTime<chrono::Utc>>,
    pub version: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for ContactMessage {
    fn from(m: Model) -> Self {
        let metadata = EntityMetadata::with_values(
            m.created_at.unwrap_or_else(Utc::now),
            m.updated_at.unwrap_or_else(Utc::now),
            m.is_deleted,
            m.version,
        );
        let uuid = Uuid::parse_str(&m.id).unwrap_or_else(|_| Uuid::new_v4());

        ContactMessage {
            id: ContactMessageId(uuid),
            name: m.name,
            email: m.email,
            message: m.message,
            metadata,
        }
    }
}

fn conn() -> &'static DatabaseConnection {
    get_connection()
}

/// Входящие обращения, свежие сверху
pub async fn list_all() -> anyhow::Result<Vec<ContactMessage>> {
    let mut items: Vec<ContactMessage> = Entity::find()
        .filter(Column::IsDeleted.eq(false))
        .all(conn())
        .await?
        .into_iter()
        .map(Into::into)
        .collect();
    items.sort_by_key(|m| std::cmp::Reverse(m.metadata.created_at));
    Ok(items)
}

pub async fn insert(aggregate: &ContactMessage) -> anyhow::Result<Uuid> {
    let uuid = aggregate.id.value();
    let active = ActiveModel {
        id: Set(uuid.to_string()),
        name: Set(aggregate.name.clone()),
        email: Set(aggregate.email.clone()),
        message: Set(aggregate.message.clone()),
        is_deleted: Set(aggregate.metadata.is_deleted),
        created_at: Set(Some(aggregate.metadata.created_at)),
        updated_at: Set(Some(aggregate.metadata.updated_at)),
        version: Set(aggregate.metadata.version),
    };
    Entity::insert(active).exec(conn()).await?;
    Ok(uuid)
}
