use crate::domain::common::{AggregateId, EntityMetadata};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Уникальный идентификатор обращения
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ContactMessageId(pub Uuid);

impl ContactMessageId {
    pub fn new(value: Uuid) -> Self {
        Self(value)
    }

    pub fn new_v4() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn value(&self) -> Uuid {
        self.0
    }
}

impl AggregateId for ContactMessageId {
    fn as_string(&self) -> String {
        self.0.to_string()
    }

    fn from_string(s: &str) -> Result<Self, String> {
        Uuid::parse_str(s)
            .map(ContactMessageId::new)
            .map_err(|e| format!("Invalid UUID: {}", e))
    }
}

/// Обращение из формы контактов.
///
/// Доставка почты вне рамок проекта: обращения сохраняются и читаются
/// администратором.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContactMessage {
    pub id: ContactMessageId,
    pub name: String,
    pub email: String,
    pub message: String,
    pub metadata: EntityMetadata,
}

/// DTO публичной формы контактов
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ContactMessageDto {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactMessage {
    pub fn new_for_insert(dto: ContactMessageDto) -> Self {
        Self {
            id: ContactMessageId::new_v4(),
            name: dto.name,
            email: dto.email,
            message: dto.message,
            metadata: EntityMetadata::new(),
        }
    }

    pub fn to_string_id(&self) -> String {
        self.id.as_string()
    }
}
