use web_sys::window;

const ADMIN_TOKEN_KEY: &str = "admin_token";

fn get_local_storage() -> Option<web_sys::Storage> {
    window()?.local_storage().ok()?
}

/// Save admin token to localStorage
pub fn save_admin_token(token: &str) {
    if let Some(storage) = get_local_storage() {
        let _ = storage.set_item(ADMIN_TOKEN_KEY, token);
    }
}

/// Get admin token from localStorage
pub fn get_admin_token() -> Option<String> {
    get_local_storage()?.get_item(ADMIN_TOKEN_KEY).ok()?
}

/// Clear the admin session
pub fn clear_admin_token() {
    if let Some(storage) = get_local_storage() {
        let _ = storage.remove_item(ADMIN_TOKEN_KEY);
    }
}
