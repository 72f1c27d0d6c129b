use anyhow::Result;
use chrono::Utc;
use contracts::system::auth::UserInfo;

use super::repository;
use crate::system::auth::password;

/// Create a new user
pub async fn create(username: &str, plain_password: &str, is_admin: bool) -> Result<String> {
    if username.trim().is_empty() {
        return Err(anyhow::anyhow!("Username cannot be empty"));
    }
    if repository::get_by_username(username).await?.is_some() {
        return Err(anyhow::anyhow!("Username already exists"));
    }
    password::validate_password_strength(plain_password)?;

    let password_hash = password::hash_password(plain_password)?;
    let now = Utc::now();
    let user = repository::Model {
        id: uuid::Uuid::new_v4().to_string(),
        username: username.to_string(),
        password_hash,
        is_admin,
        is_active: true,
        created_at: Some(now),
        updated_at: Some(now),
        last_login_at: None,
    };

    repository::create(&user).await?;
    Ok(user.id)
}

/// Verify username/password; None при неверных данных или неактивной учетке
pub async fn verify_credentials(username: &str, plain_password: &str) -> Result<Option<UserInfo>> {
    let Some(user) = repository::get_by_username(username).await? else {
        return Ok(None);
    };
    if !user.is_active {
        return Ok(None);
    }
    if !password::verify_password(plain_password, &user.password_hash)? {
        return Ok(None);
    }

    repository::touch_last_login(&user.id).await?;

    Ok(Some(UserInfo {
        id: user.id,
        username: user.username,
        is_admin: user.is_admin,
    }))
}

pub async fn get_by_id(id: &str) -> Result<Option<UserInfo>> {
    Ok(repository::get_by_id(id).await?.map(|user| UserInfo {
        id: user.id,
        username: user.username,
        is_admin: user.is_admin,
    }))
}
