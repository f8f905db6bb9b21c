//! Core types for the holocron favorites API.
//!
//! This crate provides the domain types shared by the storage and HTTP
//! layers:
//!
//! - **Catalog**: `Person`, `Planet` - the read-only reference sets
//! - **Users**: `User`
//! - **Favorites**: `FavoritePerson`, `FavoritePlanet` - join records linking
//!   a user to one catalog item
//!
//! All ids are plain `i64` row ids assigned by the database.

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod catalog;
pub mod favorite;
pub mod user;

pub use catalog::{Person, Planet};
pub use favorite::{FavoritePerson, FavoritePlanet};
pub use user::{User, DEFAULT_USER_ID};
