//! API utilities for frontend-backend communication

/// Get the base URL for API requests
///
/// Бэкенд отдает собранный фронтенд сам, поэтому база API — origin
/// текущей страницы. Пустая строка вне браузера (тесты).
pub fn api_base() -> String {
    let window = match web_sys::window() {
        Some(w) => w,
        None => return String::new(),
    };
    window.location().origin().unwrap_or_default()
}

/// Build a full API URL from a path
///
/// # Arguments
/// * `path` - The API path (should start with "/api/")
pub fn api_url(path: &str) -> String {
    format!("{}{}", api_base(), path)
}
