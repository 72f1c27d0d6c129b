use axum::{
    middleware,
    routing::{get, post, put},
    Router,
};

use crate::{handlers, system};

/// Конфигурация всех роутов приложения
pub fn configure_routes() -> Router {
    // Админские операции живут под /api/admin и целиком за require_admin
    let admin_routes = Router::new()
        .route(
            "/api/admin/me",
            get(system::handlers::auth::current_user),
        )
        .route(
            "/api/admin/services",
            post(handlers::a001_service_listing::create),
        )
        .route(
            "/api/admin/services/:id",
            put(handlers::a001_service_listing::update)
                .delete(handlers::a001_service_listing::delete),
        )
        .route(
            "/api/admin/contact-messages",
            get(handlers::a002_contact_message::list_all),
        )
        .layer(middleware::from_fn(
            system::auth::middleware::require_admin,
        ));

    Router::new()
        .route("/health", get(|| async { "ok" }))
        // ========================================
        // PUBLIC CATALOG ROUTES
        // ========================================
        .route(
            "/api/services",
            get(handlers::a001_service_listing::list_all),
        )
        .route(
            "/api/services/:id",
            get(handlers::a001_service_listing::get_by_id),
        )
        .route(
            "/api/contact",
            post(handlers::a002_contact_message::create),
        )
        .route("/api/admin/login", post(system::handlers::auth::login))
        // ========================================
        // ADMIN ROUTES (JWT)
        // ========================================
        .merge(admin_routes)
}
