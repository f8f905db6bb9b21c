//! Favorites handlers.
//!
//! All endpoints here act on behalf of the [`CurrentUser`] resolved from the
//! request. Adds are unconditional: duplicates are accepted and neither the
//! user nor the catalog id is validated, which matches the stored schema
//! (see the store crate).

use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Serialize;

use holocron_core::{FavoritePerson, FavoritePlanet};

use crate::current_user::CurrentUser;
use crate::error::ApiError;
use crate::state::AppState;

/// Body returned by the removal endpoints.
///
/// The message is kept verbatim (in Spanish) for wire compatibility.
const REMOVED_MSG: &str = "Eliminado";

/// A user's favorites, split by catalog kind.
#[derive(Debug, Serialize)]
pub struct FavoritesResponse {
    /// Favorite characters, oldest first.
    pub people: Vec<FavoritePerson>,
    /// Favorite planets, oldest first.
    pub planets: Vec<FavoritePlanet>,
}

/// List the current user's favorites.
///
/// An unknown user yields two empty arrays rather than a 404.
pub async fn list_favorites(
    State(state): State<Arc<AppState>>,
    user: CurrentUser,
) -> Result<Json<FavoritesResponse>, ApiError> {
    let people = state.store.list_favorite_people(user.user_id).await?;
    let planets = state.store.list_favorite_planets(user.user_id).await?;

    Ok(Json(FavoritesResponse { people, planets }))
}

/// Add a favorite person for the current user.
pub async fn add_favorite_person(
    State(state): State<Arc<AppState>>,
    user: CurrentUser,
    Path(people_id): Path<i64>,
) -> Result<(StatusCode, Json<FavoritePerson>), ApiError> {
    let favorite = state
        .store
        .add_favorite_person(user.user_id, people_id)
        .await?;

    tracing::info!(user_id = user.user_id, people_id, "Favorite person added");

    Ok((StatusCode::CREATED, Json(favorite)))
}

/// Add a favorite planet for the current user.
pub async fn add_favorite_planet(
    State(state): State<Arc<AppState>>,
    user: CurrentUser,
    Path(planet_id): Path<i64>,
) -> Result<(StatusCode, Json<FavoritePlanet>), ApiError> {
    let favorite = state
        .store
        .add_favorite_planet(user.user_id, planet_id)
        .await?;

    tracing::info!(user_id = user.user_id, planet_id, "Favorite planet added");

    Ok((StatusCode::CREATED, Json(favorite)))
}

/// Remove one favorite person for the current user.
pub async fn remove_favorite_person(
    State(state): State<Arc<AppState>>,
    user: CurrentUser,
    Path(people_id): Path<i64>,
) -> Result<Json<serde_json::Value>, ApiError> {
    state
        .store
        .remove_favorite_person(user.user_id, people_id)
        .await?;

    tracing::info!(user_id = user.user_id, people_id, "Favorite person removed");

    Ok(Json(serde_json::json!({ "msg": REMOVED_MSG })))
}

/// Remove one favorite planet for the current user.
pub async fn remove_favorite_planet(
    State(state): State<Arc<AppState>>,
    user: CurrentUser,
    Path(planet_id): Path<i64>,
) -> Result<Json<serde_json::Value>, ApiError> {
    state
        .store
        .remove_favorite_planet(user.user_id, planet_id)
        .await?;

    tracing::info!(user_id = user.user_id, planet_id, "Favorite planet removed");

    Ok(Json(serde_json::json!({ "msg": REMOVED_MSG })))
}
