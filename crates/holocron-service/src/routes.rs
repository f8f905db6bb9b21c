//! Router configuration.
//!
//! This module sets up the Axum router with all routes and middleware.

use std::sync::Arc;
use std::time::Duration;

use axum::routing::{get, post};
use axum::Router;
use tower::limit::ConcurrencyLimitLayer;
use tower_http::cors::{Any, CorsLayer};
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use crate::handlers::{catalog, favorites, health, users};
use crate::state::AppState;

/// Maximum concurrent requests for API endpoints.
const API_MAX_CONCURRENT_REQUESTS: usize = 50;

/// Create the service router with all routes and middleware.
///
/// # Routes
///
/// ## Public
/// - `GET /health` - Health check
///
/// ## Catalog
/// - `GET /people` - List all people
/// - `GET /people/:people_id` - Get one person
/// - `GET /planets` - List all planets
/// - `GET /planets/:planet_id` - Get one planet
/// - `GET /users` - List all users
///
/// ## Favorites (current user via `?user_id=`, default 1)
/// - `GET /users/favorites` - List the current user's favorites
/// - `POST /favorite/people/:people_id` - Add a favorite person
/// - `DELETE /favorite/people/:people_id` - Remove a favorite person
/// - `POST /favorite/planet/:planet_id` - Add a favorite planet
/// - `DELETE /favorite/planet/:planet_id` - Remove a favorite planet
pub fn create_router(state: AppState) -> Router {
    // Extract config values before moving state
    let cors_origins = state.config.cors_origins.clone();
    let max_body_bytes = state.config.max_body_bytes;
    let request_timeout_seconds = state.config.request_timeout_seconds;

    let cors = build_cors_layer(&cors_origins);

    let state = Arc::new(state);

    // Mutation endpoints share one sub-router. The path segment is singular
    // "planet" but plural "people"; existing clients depend on both.
    let favorite_routes = Router::new()
        .route(
            "/people/:people_id",
            post(favorites::add_favorite_person).delete(favorites::remove_favorite_person),
        )
        .route(
            "/planet/:planet_id",
            post(favorites::add_favorite_planet).delete(favorites::remove_favorite_planet),
        );

    let api_routes = Router::new()
        // Catalog
        .route("/people", get(catalog::list_people))
        .route("/people/:people_id", get(catalog::get_person))
        .route("/planets", get(catalog::list_planets))
        .route("/planets/:planet_id", get(catalog::get_planet))
        // Users
        .route("/users", get(users::list_users))
        .route("/users/favorites", get(favorites::list_favorites))
        // Favorites
        .nest("/favorite", favorite_routes)
        .layer(ConcurrencyLimitLayer::new(API_MAX_CONCURRENT_REQUESTS));

    Router::new()
        // Health (public, no limits)
        .route("/health", get(health::health))
        .merge(api_routes)
        // Global middleware
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .layer(RequestBodyLimitLayer::new(max_body_bytes))
        .layer(TimeoutLayer::new(Duration::from_secs(
            request_timeout_seconds,
        )))
        .with_state(state)
}

/// Build the CORS layer from configured origins.
fn build_cors_layer(origins: &[String]) -> CorsLayer {
    if origins.iter().any(|o| o == "*") {
        CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any)
    } else {
        let origins: Vec<_> = origins.iter().filter_map(|o| o.parse().ok()).collect();

        CorsLayer::new()
            .allow_origin(origins)
            .allow_methods(Any)
            .allow_headers(Any)
    }
}
