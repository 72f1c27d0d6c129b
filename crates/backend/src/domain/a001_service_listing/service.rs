use anyhow::Result;
use contracts::domain::a001_service_listing::aggregate::{ServiceListing, ServiceListingDto};
use uuid::Uuid;

use super::repository;

fn validate_dto(dto: &ServiceListingDto) -> Result<()> {
    if dto.name.trim().is_empty() {
        return Err(anyhow::anyhow!("Service name cannot be empty"));
    }
    if dto.category.trim().is_empty() {
        return Err(anyhow::anyhow!("Service category cannot be empty"));
    }
    if dto.city.trim().is_empty() {
        return Err(anyhow::anyhow!("Service city cannot be empty"));
    }
    Ok(())
}

pub async fn list_all() -> Result<Vec<ServiceListing>> {
    repository::list_all().await
}

pub async fn get_by_id(id: Uuid) -> Result<Option<ServiceListing>> {
    repository::get_by_id(id).await
}

pub async fn create(dto: ServiceListingDto) -> Result<ServiceListing> {
    validate_dto(&dto)?;
    let aggregate = ServiceListing::new_for_insert(dto);
    repository::insert(&aggregate).await?;
    Ok(aggregate)
}

pub async fn update(id: Uuid, dto: ServiceListingDto) -> Result<Option<ServiceListing>> {
    validate_dto(&dto)?;

    let Some(mut aggregate) = repository::get_by_id(id).await? else {
        return Ok(None);
    };
    aggregate.apply_dto(dto);
    repository::update(&aggregate).await?;
    Ok(Some(aggregate))
}

pub async fn delete(id: Uuid) -> Result<bool> {
    repository::soft_delete(id).await
}
