use chrono::Utc;
use serde::{Deserialize, Serialize};

use sea_orm::entity::prelude::*;
use sea_orm::{ColumnTrait, EntityTrait, QueryFilter, Set};

use crate::shared::data::db::get_connection;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "sys_user")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub username: String,
    pub password_hash: String,
    pub is_admin: bool,
    pub is_active: bool,
    pub created_at: Option<chrono::DateTime<chrono::Utc>>,
    pub updated_at: Option<chrono::DateTime<chrono::Utc>>,
    pub last_login_at: Option<chrono::DateTime<chrono::Utc>>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

fn conn() -> &'static DatabaseConnection {
    get_connection()
}

pub async fn get_by_id(id: &str) -> anyhow::Result<Option<Model>> {
    Ok(Entity::find_by_id(id.to_string()).one(conn()).await?)
}

pub async fn get_by_username(username: &str) -> anyhow::Result<Option<Model>> {
    Ok(Entity::find()
        .filter(Column::Username.eq(username))
        .one(conn())
        .await?)
}

pub async fn create(user: &Model) -> anyhow::Result<()> {
    let active = ActiveModel {
        id: Set(user.id.clone()),
        username: Set(user.username.clone()),
        password_hash: Set(user.password_hash.clone()),
        is_admin: Set(user.is_admin),
        is_active: Set(user.is_active),
        created_at: Set(user.created_at),
        updated_at: Set(user.updated_at),
        last_login_at: Set(user.last_login_at),
    };
    Entity::insert(active).exec(conn()).await?;
    Ok(())
}

pub async fn touch_last_login(id: &str) -> anyhow::Result<()> {
    let Some(model) = Entity::find_by_id(id.to_string()).one(conn()).await? else {
        return Ok(());
    };
    let mut active: ActiveModel = model.into();
    active.last_login_at = Set(Some(Utc::now()));
    active.update(conn()).await?;
    Ok(())
}
