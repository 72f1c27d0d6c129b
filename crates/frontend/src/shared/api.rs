//! Клиент каталожного API (gloo-net)

use contracts::domain::a001_service_listing::aggregate::{ServiceListing, ServiceListingDto};
use contracts::domain::a002_contact_message::aggregate::ContactMessageDto;
use contracts::system::auth::{LoginRequest, LoginResponse, UserInfo};
use gloo_net::http::Request;

use crate::shared::api_utils::api_base;

/// Снимок каталога целиком (один fetch на загрузку страницы)
pub async fn fetch_all_services() -> Result<Vec<ServiceListing>, String> {
    let response = Request::get(&format!("{}/api/services", api_base()))
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("HTTP {}", response.status()));
    }

    response
        .json::<Vec<ServiceListing>>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}

pub async fn fetch_service(id: &str) -> Result<ServiceListing, String> {
    let response = Request::get(&format!("{}/api/services/{}", api_base(), id))
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("HTTP {}", response.status()));
    }

    response
        .json::<ServiceListing>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}

pub async fn submit_contact(dto: &ContactMessageDto) -> Result<(), String> {
    let response = Request::post(&format!("{}/api/contact", api_base()))
        .json(dto)
        .map_err(|e| format!("Failed to serialize request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("HTTP {}", response.status()));
    }
    Ok(())
}

/// Login with username and password
pub async fn login(username: String, password: String) -> Result<LoginResponse, String> {
    let request = LoginRequest { username, password };

    let response = Request::post(&format!("{}/api/admin/login", api_base()))
        .json(&request)
        .map_err(|e| format!("Failed to serialize request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("Login failed: {}", response.status()));
    }

    response
        .json::<LoginResponse>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}

/// Validate the stored admin token
pub async fn fetch_me(token: &str) -> Result<UserInfo, String> {
    let response = Request::get(&format!("{}/api/admin/me", api_base()))
        .header("Authorization", &format!("Bearer {}", token))
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("HTTP {}", response.status()));
    }

    response
        .json::<UserInfo>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}

pub async fn create_service(
    token: &str,
    dto: &ServiceListingDto,
) -> Result<ServiceListing, String> {
    let response = Request::post(&format!("{}/api/admin/services", api_base()))
        .header("Authorization", &format!("Bearer {}", token))
        .json(dto)
        .map_err(|e| format!("Failed to serialize request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("HTTP {}", response.status()));
    }

    response
        .json::<ServiceListing>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}

pub async fn update_service(
    token: &str,
    id: &str,
    dto: &ServiceListingDto,
) -> Result<ServiceListing, String> {
    let response = Request::put(&format!("{}/api/admin/services/{}", api_base(), id))
        .header("Authorization", &format!("Bearer {}", token))
        .json(dto)
        .map_err(|e| format!("Failed to serialize request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("HTTP {}", response.status()));
    }

    response
        .json::<ServiceListing>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}

pub async fn delete_service(token: &str, id: &str) -> Result<(), String> {
    let response = Request::delete(&format!("{}/api/admin/services/{}", api_base(), id))
        .header("Authorization", &format!("Bearer {}", token))
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("HTTP {}", response.status()));
    }
    Ok(())
}
