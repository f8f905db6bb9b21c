//! HTTP request handlers.

pub mod catalog;
pub mod favorites;
pub mod health;
pub mod users;
