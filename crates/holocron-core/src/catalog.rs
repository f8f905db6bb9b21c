//! Catalog types.
//!
//! The catalog is the read-only reference data: people (characters) and
//! planets. Both are seeded once and never modified through the API.

use serde::{Deserialize, Serialize};

/// A character from the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Person {
    /// Database-assigned id.
    pub id: i64,
    /// Unique character name.
    pub name: String,
}

/// A planet from the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Planet {
    /// Database-assigned id.
    pub id: i64,
    /// Unique planet name.
    pub name: String,
}
