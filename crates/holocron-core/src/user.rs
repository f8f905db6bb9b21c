//! User types.

use serde::{Deserialize, Serialize};

/// The user id assumed when a request carries no `user_id` parameter.
///
/// There is no authentication yet; this stands in for "the logged-in user"
/// and callers may override it per request.
pub const DEFAULT_USER_ID: i64 = 1;

/// A registered user.
///
/// Users are created at seed time; the API only lists them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Database-assigned id.
    pub id: i64,
    /// Unique display name.
    pub name: String,
}
