//! Error types for holocron storage.

/// Result type for storage operations.
pub type Result<T> = std::result::Result<T, StoreError>;

/// Errors that can occur in storage operations.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// Database operation failed.
    #[error("database error: {0}")]
    Database(String),

    /// No favorite matches the given user/item pair.
    #[error("no {entity} favorite for user {user_id} and item {item_id}")]
    FavoriteNotFound {
        /// Which kind of favorite ("people" or "planet").
        entity: &'static str,
        /// The user the removal ran for.
        user_id: i64,
        /// The catalog item id.
        item_id: i64,
    },
}

impl From<sqlx::Error> for StoreError {
    fn from(err: sqlx::Error) -> Self {
        Self::Database(err.to_string())
    }
}
