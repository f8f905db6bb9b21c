//! Database schema definitions and seed data.
//!
//! This module defines the SQLite tables and the fixed rows inserted on
//! first run.

/// Table names.
pub mod table {
    /// Registered users.
    pub const USERS: &str = "users";

    /// Catalog of characters.
    pub const PEOPLE: &str = "people";

    /// Catalog of planets.
    pub const PLANETS: &str = "planets";

    /// Join records: user -> character, keyed by its own row id.
    pub const FAVORITE_PEOPLE: &str = "favorite_people";

    /// Join records: user -> planet, keyed by its own row id.
    pub const FAVORITE_PLANETS: &str = "favorite_planets";
}

/// DDL statements, in creation order.
///
/// The `REFERENCES` clauses on the favorite tables are declarative only:
/// the store connects with the foreign-keys pragma off, so inserts are
/// never rejected for a missing user or catalog row. See
/// `SqliteStore::connect`.
pub mod ddl {
    /// Users table.
    pub const USERS: &str = "CREATE TABLE IF NOT EXISTS users (\
         id INTEGER PRIMARY KEY AUTOINCREMENT, \
         name TEXT NOT NULL UNIQUE)";

    /// People catalog table.
    pub const PEOPLE: &str = "CREATE TABLE IF NOT EXISTS people (\
         id INTEGER PRIMARY KEY AUTOINCREMENT, \
         name TEXT NOT NULL UNIQUE)";

    /// Planets catalog table.
    pub const PLANETS: &str = "CREATE TABLE IF NOT EXISTS planets (\
         id INTEGER PRIMARY KEY AUTOINCREMENT, \
         name TEXT NOT NULL UNIQUE)";

    /// Favorite-people join table. No uniqueness on (user_id, people_id).
    pub const FAVORITE_PEOPLE: &str = "CREATE TABLE IF NOT EXISTS favorite_people (\
         id INTEGER PRIMARY KEY AUTOINCREMENT, \
         user_id INTEGER NOT NULL REFERENCES users(id), \
         people_id INTEGER NOT NULL REFERENCES people(id))";

    /// Favorite-planets join table. No uniqueness on (user_id, planet_id).
    pub const FAVORITE_PLANETS: &str = "CREATE TABLE IF NOT EXISTS favorite_planets (\
         id INTEGER PRIMARY KEY AUTOINCREMENT, \
         user_id INTEGER NOT NULL REFERENCES users(id), \
         planet_id INTEGER NOT NULL REFERENCES planets(id))";
}

/// Returns all DDL statements for database initialization.
#[must_use]
pub fn all_tables() -> Vec<&'static str> {
    vec![
        ddl::USERS,
        ddl::PEOPLE,
        ddl::PLANETS,
        ddl::FAVORITE_PEOPLE,
        ddl::FAVORITE_PLANETS,
    ]
}

/// Seed rows inserted into `users` when the table is empty at startup.
pub const SEED_USERS: [&str; 2] = ["Jazmin", "Pablo"];

/// Seed rows inserted into `people` when the table is empty at startup.
pub const SEED_PEOPLE: [&str; 2] = ["Luke Skywalker", "Darth Vader"];

/// Seed rows inserted into `planets` when the table is empty at startup.
pub const SEED_PLANETS: [&str; 2] = ["Tatooine", "Alderaan"];
