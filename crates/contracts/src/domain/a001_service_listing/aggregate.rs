use crate::domain::common::{AggregateId, EntityMetadata};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// ============================================================================
// ID Type
// ============================================================================

/// Уникальный идентификатор сервиса
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ServiceId(pub Uuid);

impl ServiceId {
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

impl AggregateId for ServiceId {
    fn as_string(&self) -> String {
        self.0.to_string()
    }

    fn from_string(s: &str) -> Result<Self, String> {
        Uuid::parse_str(s)
            .map(ServiceId::new)
            .map_err(|e| format!("Invalid UUID: {}", e))
    }
}

// ============================================================================
// Aggregate Root
// ============================================================================

/// Карточка автосервиса (запись каталога)
///
/// Поле `category` хранит сырой код категории: известные коды соответствуют
/// `ServiceCategory`, незнакомые остаются в каталоге как есть и группируются
/// под собственным значением.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServiceListing {
    pub id: ServiceId,

    pub name: String,

    pub description: Option<String>,

    pub category: String,

    pub city: String,

    pub address: String,

    /// Контактные телефоны; номер с префиксом "+" открывается в WhatsApp
    pub contact: Vec<String>,

    /// Фотографии сервиса, первая — основная
    pub images: Vec<String>,

    pub logo: Option<String>,

    /// URL встраиваемой карты
    pub location: Option<String>,

    /// Ссылки на соцсети, отображается первая
    pub social: Vec<String>,

    #[serde(rename = "servicesOffered")]
    pub services_offered: Vec<String>,

    pub metadata: EntityMetadata,
}

/// DTO создания/обновления карточки (все поля, кроме id и метаданных)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ServiceListingDto {
    pub name: String,
    pub description: Option<String>,
    pub category: String,
    pub city: String,
    pub address: String,
    pub contact: Vec<String>,
    pub images: Vec<String>,
    pub logo: Option<String>,
    pub location: Option<String>,
    pub social: Vec<String>,
    #[serde(rename = "servicesOffered")]
    pub services_offered: Vec<String>,
}

impl ServiceListing {
    /// Создать новую карточку для вставки в БД
    pub fn new_for_insert(dto: ServiceListingDto) -> Self {
        Self {
            id: ServiceId::new_v4(),
            name: dto.name,
            description: dto.description,
            category: dto.category,
            city: dto.city,
            address: dto.address,
            contact: dto.contact,
            images: dto.images,
            logo: dto.logo,
            location: dto.location,
            social: dto.social,
            services_offered: dto.services_offered,
            metadata: EntityMetadata::new(),
        }
    }

    /// Обновить данные из DTO
    pub fn apply_dto(&mut self, dto: ServiceListingDto) {
        self.name = dto.name;
        self.description = dto.description;
        self.category = dto.category;
        self.city = dto.city;
        self.address = dto.address;
        self.contact = dto.contact;
        self.images = dto.images;
        self.logo = dto.logo;
        self.location = dto.location;
        self.social = dto.social;
        self.services_offered = dto.services_offered;
        self.metadata.touch();
        self.metadata.increment_version();
    }

    /// Снять DTO с текущего состояния (для форм редактирования)
    pub fn to_dto(&self) -> ServiceListingDto {
        ServiceListingDto {
            name: self.name.clone(),
            description: self.description.clone(),
            category: self.category.clone(),
            city: self.city.clone(),
            address: self.address.clone(),
            contact: self.contact.clone(),
            images: self.images.clone(),
            logo: self.logo.clone(),
            location: self.location.clone(),
            social: self.social.clone(),
            services_offered: self.services_offered.clone(),
        }
    }

    /// Получить ID как строку
    pub fn to_string_id(&self) -> String {
        self.id.as_string()
    }

    /// Основная фотография (первая в списке)
    pub fn primary_image(&self) -> Option<&str> {
        self.images.first().map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dto() -> ServiceListingDto {
        ServiceListingDto {
            name: "Ahmed Tires".to_string(),
            description: Some("Tires and balancing".to_string()),
            category: "tires".to_string(),
            city: "Giza".to_string(),
            address: "12 Haram St".to_string(),
            contact: vec!["0100000000".to_string()],
            images: vec!["/images/a.jpg".to_string(), "/images/b.jpg".to_string()],
            logo: None,
            location: None,
            social: vec![],
            services_offered: vec!["Balancing".to_string()],
        }
    }

    #[test]
    fn test_new_for_insert_sets_fresh_metadata() {
        let listing = ServiceListing::new_for_insert(dto());
        assert_eq!(listing.metadata.version, 0);
        assert!(!listing.metadata.is_deleted);
        assert_eq!(listing.primary_image(), Some("/images/a.jpg"));
    }

    #[test]
    fn test_apply_dto_bumps_version_and_keeps_id() {
        let mut listing = ServiceListing::new_for_insert(dto());
        let id = listing.id;

        let mut updated = dto();
        updated.name = "Ahmed Tires & Rims".to_string();
        updated.city = "Cairo".to_string();
        listing.apply_dto(updated);

        assert_eq!(listing.id, id);
        assert_eq!(listing.name, "Ahmed Tires & Rims");
        assert_eq!(listing.city, "Cairo");
        assert_eq!(listing.metadata.version, 1);
    }
}
