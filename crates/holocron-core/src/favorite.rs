//! Favorite join records.
//!
//! A favorite links a user to one catalog item. Each record has its own id;
//! the (user, item) pair is deliberately not unique, matching the stored
//! schema (duplicates are permitted).

use serde::{Deserialize, Serialize};

/// A user's favorite character.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FavoritePerson {
    /// Database-assigned id of the join record itself.
    pub id: i64,
    /// The owning user.
    pub user_id: i64,
    /// The favorited character.
    pub people_id: i64,
}

/// A user's favorite planet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FavoritePlanet {
    /// Database-assigned id of the join record itself.
    pub id: i64,
    /// The owning user.
    pub user_id: i64,
    /// The favorited planet.
    pub planet_id: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    // The wire format uses `people_id` (not `person_id`); clients depend on
    // the exact field names.
    #[test]
    fn favorite_person_field_names() {
        let fav = FavoritePerson {
            id: 1,
            user_id: 1,
            people_id: 2,
        };
        let json = serde_json::to_value(&fav).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"id": 1, "user_id": 1, "people_id": 2})
        );
    }

    #[test]
    fn favorite_planet_field_names() {
        let fav = FavoritePlanet {
            id: 7,
            user_id: 2,
            planet_id: 1,
        };
        let json = serde_json::to_value(&fav).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"id": 7, "user_id": 2, "planet_id": 1})
        );
    }
}
