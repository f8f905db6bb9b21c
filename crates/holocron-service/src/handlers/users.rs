//! User handlers.

use std::sync::Arc;

use axum::extract::State;
use axum::Json;

use holocron_core::User;

use crate::error::ApiError;
use crate::state::AppState;

/// List all users, in insertion order.
pub async fn list_users(State(state): State<Arc<AppState>>) -> Result<Json<Vec<User>>, ApiError> {
    let users = state.store.list_users().await?;
    Ok(Json(users))
}
