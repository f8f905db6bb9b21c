//! SQLite storage layer for the holocron favorites API.
//!
//! This crate owns the five tables behind the API:
//!
//! - `users`: registered users, seeded on first run
//! - `people` / `planets`: the read-only catalog, seeded on first run
//! - `favorite_people` / `favorite_planets`: join records linking a user to
//!   one catalog item, created and deleted through the API
//!
//! # Example
//!
//! ```no_run
//! use holocron_store::SqliteStore;
//!
//! # async fn run() -> holocron_store::Result<()> {
//! let store = SqliteStore::connect("sqlite://starwars.db").await?;
//! store.seed_if_empty().await?;
//!
//! let favorite = store.add_favorite_person(1, 2).await?;
//! store.remove_favorite_person(favorite.user_id, favorite.people_id).await?;
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod error;
pub mod schema;
pub mod sqlite;

pub use error::{Result, StoreError};
pub use sqlite::SqliteStore;
