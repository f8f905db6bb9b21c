//! Holocron HTTP API Service.
//!
//! This crate provides the HTTP API for the holocron favorites tracker,
//! including:
//!
//! - Catalog listing and lookup (people, planets)
//! - User listing
//! - Per-user favorites: list, add, remove
//!
//! # Current user
//!
//! There is no authentication. The acting user comes from the optional
//! `user_id` query parameter (default 1); see [`current_user::CurrentUser`].

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
// Allow some pedantic lints that are noisy for Axum handler functions
#![allow(clippy::missing_errors_doc)] // Axum handlers all return Result
#![allow(clippy::unused_async)] // Handlers need async for consistency

pub mod config;
pub mod current_user;
pub mod error;
pub mod handlers;
pub mod routes;
pub mod state;

pub use config::ServiceConfig;
pub use current_user::CurrentUser;
pub use error::ApiError;
pub use routes::create_router;
pub use state::AppState;
