//! Catalog handlers: the read-only people and planets reference data.

use std::sync::Arc;

use axum::extract::{Path, State};
use axum::Json;

use holocron_core::{Person, Planet};

use crate::error::ApiError;
use crate::state::AppState;

/// List all people, in insertion order.
pub async fn list_people(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<Person>>, ApiError> {
    let people = state.store.list_people().await?;
    Ok(Json(people))
}

/// Get one person by id.
pub async fn get_person(
    State(state): State<Arc<AppState>>,
    Path(people_id): Path<i64>,
) -> Result<Json<Person>, ApiError> {
    let person = state
        .store
        .get_person(people_id)
        .await?
        .ok_or_else(|| ApiError::NotFound(format!("person not found: {people_id}")))?;

    Ok(Json(person))
}

/// List all planets, in insertion order.
pub async fn list_planets(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<Planet>>, ApiError> {
    let planets = state.store.list_planets().await?;
    Ok(Json(planets))
}

/// Get one planet by id.
pub async fn get_planet(
    State(state): State<Arc<AppState>>,
    Path(planet_id): Path<i64>,
) -> Result<Json<Planet>, ApiError> {
    let planet = state
        .store
        .get_planet(planet_id)
        .await?
        .ok_or_else(|| ApiError::NotFound(format!("planet not found: {planet_id}")))?;

    Ok(Json(planet))
}
