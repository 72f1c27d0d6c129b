use anyhow::Result;

use crate::shared::config::Config;
use crate::system::users::{repository, service};

/// Ensure the bootstrap admin user exists
///
/// Пароль берется из конфигурации только при первом создании; дальше
/// в базе живет лишь argon2-хеш.
pub async fn ensure_admin_user_exists(config: &Config) -> Result<()> {
    let username = config.admin.username.as_str();

    if repository::get_by_username(username).await?.is_some() {
        tracing::debug!("Admin user '{}' already exists", username);
        return Ok(());
    }

    let user_id = service::create(username, &config.admin.bootstrap_password, true).await?;
    tracing::info!("Created bootstrap admin user '{}' ({})", username, user_id);
    Ok(())
}
