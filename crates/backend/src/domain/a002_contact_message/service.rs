use anyhow::Result;
use contracts::domain::a002_contact_message::aggregate::{ContactMessage, ContactMessageDto};

use super::repository;

pub async fn list_all() -> Result<Vec<ContactMessage>> {
    repository::list_all().await
}

/// Принять обращение из публичной формы.
///
/// Доставка почты — вне рамок проекта; обращение сохраняется и пишется в лог.
pub async fn create(dto: ContactMessageDto) -> Result<ContactMessage> {
    if dto.name.trim().is_empty() {
        return Err(anyhow::anyhow!("Name cannot be empty"));
    }
    if dto.email.trim().is_empty() || !dto.email.contains('@') {
        return Err(anyhow::anyhow!("Invalid email format"));
    }
    if dto.message.trim().is_empty() {
        return Err(anyhow::anyhow!("Message cannot be empty"));
    }

    let aggregate = ContactMessage::new_for_insert(dto);
    repository::insert(&aggregate).await?;
    tracing::info!(
        "Contact form submission from {} <{}>",
        aggregate.name,
        aggregate.email
    );
    Ok(aggregate)
}
