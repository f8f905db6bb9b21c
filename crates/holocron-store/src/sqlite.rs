//! SQLite storage implementation.

use std::str::FromStr;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use sqlx::Row;

use holocron_core::{FavoritePerson, FavoritePlanet, Person, Planet, User};

use crate::error::{Result, StoreError};
use crate::schema::{self, all_tables, table};

/// Maximum number of pooled connections.
const MAX_CONNECTIONS: u32 = 5;

/// SQLite-backed storage.
///
/// Handlers share one instance behind an `Arc`. Every operation is a single
/// statement, so each call is its own implicit transaction; only seeding
/// spans several statements and runs in an explicit one.
pub struct SqliteStore {
    pool: SqlitePool,
}

impl SqliteStore {
    /// Open or create the database at the given URL and apply the schema.
    ///
    /// The foreign-keys pragma is left off on purpose: the favorite tables
    /// declare `REFERENCES` clauses but inserts are not validated against
    /// them, matching the behavior the API has always had.
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be opened or the schema
    /// cannot be applied.
    pub async fn connect(url: &str) -> Result<Self> {
        let options = SqliteConnectOptions::from_str(url)?
            .create_if_missing(true)
            .foreign_keys(false);

        let pool = SqlitePoolOptions::new()
            .max_connections(MAX_CONNECTIONS)
            .connect_with(options)
            .await?;

        let store = Self { pool };
        store.create_tables().await?;
        Ok(store)
    }

    /// Apply the DDL. `CREATE TABLE IF NOT EXISTS` makes this idempotent.
    async fn create_tables(&self) -> Result<()> {
        for statement in all_tables() {
            sqlx::query(statement).execute(&self.pool).await?;
        }
        Ok(())
    }

    /// Insert the fixed seed rows into each table that is still empty.
    ///
    /// Runs as a single transaction, mirroring one commit at startup. Tables
    /// that already hold rows are left untouched, so restarting the service
    /// never duplicates the catalog.
    ///
    /// # Errors
    ///
    /// Returns an error if any count or insert fails.
    pub async fn seed_if_empty(&self) -> Result<()> {
        let mut tx = self.pool.begin().await?;

        let mut seeded = false;
        if Self::count_rows(&mut tx, table::USERS).await? == 0 {
            for name in schema::SEED_USERS {
                sqlx::query("INSERT INTO users (name) VALUES (?1)")
                    .bind(name)
                    .execute(&mut *tx)
                    .await?;
            }
            seeded = true;
        }
        if Self::count_rows(&mut tx, table::PEOPLE).await? == 0 {
            for name in schema::SEED_PEOPLE {
                sqlx::query("INSERT INTO people (name) VALUES (?1)")
                    .bind(name)
                    .execute(&mut *tx)
                    .await?;
            }
            seeded = true;
        }
        if Self::count_rows(&mut tx, table::PLANETS).await? == 0 {
            for name in schema::SEED_PLANETS {
                sqlx::query("INSERT INTO planets (name) VALUES (?1)")
                    .bind(name)
                    .execute(&mut *tx)
                    .await?;
            }
            seeded = true;
        }

        tx.commit().await?;

        if seeded {
            tracing::info!("Seed data inserted");
        } else {
            tracing::debug!("Seed data already present, nothing to do");
        }

        Ok(())
    }

    async fn count_rows(
        tx: &mut sqlx::Transaction<'_, sqlx::Sqlite>,
        table: &str,
    ) -> Result<i64> {
        let count: i64 = sqlx::query_scalar(&format!("SELECT COUNT(*) FROM {table}"))
            .fetch_one(&mut **tx)
            .await?;
        Ok(count)
    }

    // =========================================================================
    // Catalog Operations
    // =========================================================================

    /// List all users in insertion order.
    ///
    /// # Errors
    ///
    /// Returns an error if the database operation fails.
    pub async fn list_users(&self) -> Result<Vec<User>> {
        let rows = sqlx::query("SELECT id, name FROM users ORDER BY id")
            .fetch_all(&self.pool)
            .await?;

        Ok(rows
            .into_iter()
            .map(|row| User {
                id: row.get("id"),
                name: row.get("name"),
            })
            .collect())
    }

    /// List all people in insertion order.
    ///
    /// # Errors
    ///
    /// Returns an error if the database operation fails.
    pub async fn list_people(&self) -> Result<Vec<Person>> {
        let rows = sqlx::query("SELECT id, name FROM people ORDER BY id")
            .fetch_all(&self.pool)
            .await?;

        Ok(rows
            .into_iter()
            .map(|row| Person {
                id: row.get("id"),
                name: row.get("name"),
            })
            .collect())
    }

    /// Get one person by id.
    ///
    /// # Errors
    ///
    /// Returns an error if the database operation fails.
    pub async fn get_person(&self, people_id: i64) -> Result<Option<Person>> {
        let row = sqlx::query("SELECT id, name FROM people WHERE id = ?1")
            .bind(people_id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(row.map(|row| Person {
            id: row.get("id"),
            name: row.get("name"),
        }))
    }

    /// List all planets in insertion order.
    ///
    /// # Errors
    ///
    /// Returns an error if the database operation fails.
    pub async fn list_planets(&self) -> Result<Vec<Planet>> {
        let rows = sqlx::query("SELECT id, name FROM planets ORDER BY id")
            .fetch_all(&self.pool)
            .await?;

        Ok(rows
            .into_iter()
            .map(|row| Planet {
                id: row.get("id"),
                name: row.get("name"),
            })
            .collect())
    }

    /// Get one planet by id.
    ///
    /// # Errors
    ///
    /// Returns an error if the database operation fails.
    pub async fn get_planet(&self, planet_id: i64) -> Result<Option<Planet>> {
        let row = sqlx::query("SELECT id, name FROM planets WHERE id = ?1")
            .bind(planet_id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(row.map(|row| Planet {
            id: row.get("id"),
            name: row.get("name"),
        }))
    }

    // =========================================================================
    // Favorite Operations
    // =========================================================================

    /// List a user's favorite people, oldest first.
    ///
    /// An unknown user simply has no rows; this never fails on the user id.
    ///
    /// # Errors
    ///
    /// Returns an error if the database operation fails.
    pub async fn list_favorite_people(&self, user_id: i64) -> Result<Vec<FavoritePerson>> {
        let rows = sqlx::query(
            "SELECT id, user_id, people_id FROM favorite_people \
             WHERE user_id = ?1 ORDER BY id",
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows
            .into_iter()
            .map(|row| FavoritePerson {
                id: row.get("id"),
                user_id: row.get("user_id"),
                people_id: row.get("people_id"),
            })
            .collect())
    }

    /// List a user's favorite planets, oldest first.
    ///
    /// # Errors
    ///
    /// Returns an error if the database operation fails.
    pub async fn list_favorite_planets(&self, user_id: i64) -> Result<Vec<FavoritePlanet>> {
        let rows = sqlx::query(
            "SELECT id, user_id, planet_id FROM favorite_planets \
             WHERE user_id = ?1 ORDER BY id",
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows
            .into_iter()
            .map(|row| FavoritePlanet {
                id: row.get("id"),
                user_id: row.get("user_id"),
                planet_id: row.get("planet_id"),
            })
            .collect())
    }

    /// Record a favorite person for a user.
    ///
    /// No existence check is made on either id and duplicate pairs are
    /// accepted; the insert is unconditional.
    ///
    /// # Errors
    ///
    /// Returns an error if the database operation fails.
    pub async fn add_favorite_person(
        &self,
        user_id: i64,
        people_id: i64,
    ) -> Result<FavoritePerson> {
        let result = sqlx::query("INSERT INTO favorite_people (user_id, people_id) VALUES (?1, ?2)")
            .bind(user_id)
            .bind(people_id)
            .execute(&self.pool)
            .await?;

        Ok(FavoritePerson {
            id: result.last_insert_rowid(),
            user_id,
            people_id,
        })
    }

    /// Record a favorite planet for a user.
    ///
    /// Same contract as [`Self::add_favorite_person`].
    ///
    /// # Errors
    ///
    /// Returns an error if the database operation fails.
    pub async fn add_favorite_planet(
        &self,
        user_id: i64,
        planet_id: i64,
    ) -> Result<FavoritePlanet> {
        let result = sqlx::query("INSERT INTO favorite_planets (user_id, planet_id) VALUES (?1, ?2)")
            .bind(user_id)
            .bind(planet_id)
            .execute(&self.pool)
            .await?;

        Ok(FavoritePlanet {
            id: result.last_insert_rowid(),
            user_id,
            planet_id,
        })
    }

    /// Remove one favorite person for a user.
    ///
    /// When duplicates exist for the pair, the oldest row (lowest id) is the
    /// one removed; one call removes exactly one row.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::FavoriteNotFound` if no row matches the pair.
    pub async fn remove_favorite_person(&self, user_id: i64, people_id: i64) -> Result<()> {
        let result = sqlx::query(
            "DELETE FROM favorite_people WHERE id = (\
                 SELECT id FROM favorite_people \
                 WHERE user_id = ?1 AND people_id = ?2 \
                 ORDER BY id LIMIT 1)",
        )
        .bind(user_id)
        .bind(people_id)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(StoreError::FavoriteNotFound {
                entity: "people",
                user_id,
                item_id: people_id,
            });
        }
        Ok(())
    }

    /// Remove one favorite planet for a user.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::FavoriteNotFound` if no row matches the pair.
    pub async fn remove_favorite_planet(&self, user_id: i64, planet_id: i64) -> Result<()> {
        let result = sqlx::query(
            "DELETE FROM favorite_planets WHERE id = (\
                 SELECT id FROM favorite_planets \
                 WHERE user_id = ?1 AND planet_id = ?2 \
                 ORDER BY id LIMIT 1)",
        )
        .bind(user_id)
        .bind(planet_id)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(StoreError::FavoriteNotFound {
                entity: "planet",
                user_id,
                item_id: planet_id,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    async fn open_store(dir: &TempDir) -> SqliteStore {
        let url = format!("sqlite://{}", dir.path().join("test.db").display());
        SqliteStore::connect(&url).await.expect("open store")
    }

    #[tokio::test]
    async fn seed_populates_empty_tables() {
        let dir = TempDir::new().unwrap();
        let store = open_store(&dir).await;
        store.seed_if_empty().await.unwrap();

        let users = store.list_users().await.unwrap();
        assert_eq!(users.len(), 2);
        assert_eq!(users[0].id, 1);
        assert_eq!(users[0].name, "Jazmin");
        assert_eq!(users[1].name, "Pablo");

        let people = store.list_people().await.unwrap();
        assert_eq!(people.len(), 2);
        assert_eq!(people[0].name, "Luke Skywalker");
        assert_eq!(people[1].name, "Darth Vader");

        let planets = store.list_planets().await.unwrap();
        assert_eq!(planets.len(), 2);
        assert_eq!(planets[0].name, "Tatooine");
        assert_eq!(planets[1].name, "Alderaan");
    }

    #[tokio::test]
    async fn seed_is_idempotent() {
        let dir = TempDir::new().unwrap();
        let store = open_store(&dir).await;
        store.seed_if_empty().await.unwrap();
        store.seed_if_empty().await.unwrap();

        assert_eq!(store.list_users().await.unwrap().len(), 2);
        assert_eq!(store.list_people().await.unwrap().len(), 2);
        assert_eq!(store.list_planets().await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn get_person_hit_and_miss() {
        let dir = TempDir::new().unwrap();
        let store = open_store(&dir).await;
        store.seed_if_empty().await.unwrap();

        let person = store.get_person(1).await.unwrap().unwrap();
        assert_eq!(person.id, 1);
        assert_eq!(person.name, "Luke Skywalker");

        assert!(store.get_person(99).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn get_planet_hit_and_miss() {
        let dir = TempDir::new().unwrap();
        let store = open_store(&dir).await;
        store.seed_if_empty().await.unwrap();

        let planet = store.get_planet(2).await.unwrap().unwrap();
        assert_eq!(planet.id, 2);
        assert_eq!(planet.name, "Alderaan");

        assert!(store.get_planet(99).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn favorite_round_trip() {
        let dir = TempDir::new().unwrap();
        let store = open_store(&dir).await;
        store.seed_if_empty().await.unwrap();

        let fav = store.add_favorite_person(1, 2).await.unwrap();
        assert_eq!(fav.user_id, 1);
        assert_eq!(fav.people_id, 2);

        let listed = store.list_favorite_people(1).await.unwrap();
        assert_eq!(listed, vec![fav]);

        store.remove_favorite_person(1, 2).await.unwrap();
        assert!(store.list_favorite_people(1).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn duplicate_favorites_are_allowed() {
        let dir = TempDir::new().unwrap();
        let store = open_store(&dir).await;
        store.seed_if_empty().await.unwrap();

        let first = store.add_favorite_planet(1, 1).await.unwrap();
        let second = store.add_favorite_planet(1, 1).await.unwrap();
        assert_ne!(first.id, second.id);

        let listed = store.list_favorite_planets(1).await.unwrap();
        assert_eq!(listed.len(), 2);

        // One removal takes out exactly one of the duplicates.
        store.remove_favorite_planet(1, 1).await.unwrap();
        assert_eq!(store.list_favorite_planets(1).await.unwrap().len(), 1);
    }

    // Pins the unchecked-insert behavior: the store accepts favorites for
    // ids that exist in no table. Tightening this is a product decision.
    #[tokio::test]
    async fn add_favorite_skips_referential_checks() {
        let dir = TempDir::new().unwrap();
        let store = open_store(&dir).await;
        store.seed_if_empty().await.unwrap();

        let fav = store.add_favorite_person(999, 888).await.unwrap();
        assert_eq!(fav.user_id, 999);
        assert_eq!(fav.people_id, 888);

        let listed = store.list_favorite_people(999).await.unwrap();
        assert_eq!(listed.len(), 1);
    }

    #[tokio::test]
    async fn remove_missing_favorite_errors() {
        let dir = TempDir::new().unwrap();
        let store = open_store(&dir).await;
        store.seed_if_empty().await.unwrap();

        let err = store.remove_favorite_person(1, 1).await.unwrap_err();
        assert!(matches!(err, StoreError::FavoriteNotFound { .. }));
    }

    #[tokio::test]
    async fn favorites_are_scoped_per_user() {
        let dir = TempDir::new().unwrap();
        let store = open_store(&dir).await;
        store.seed_if_empty().await.unwrap();

        store.add_favorite_person(1, 1).await.unwrap();
        store.add_favorite_person(2, 2).await.unwrap();

        let user1 = store.list_favorite_people(1).await.unwrap();
        assert_eq!(user1.len(), 1);
        assert_eq!(user1[0].people_id, 1);

        // Removing user 2's favorite must not touch user 1's rows.
        store.remove_favorite_person(2, 2).await.unwrap();
        assert_eq!(store.list_favorite_people(1).await.unwrap().len(), 1);

        // And an unknown user just has nothing.
        assert!(store.list_favorite_people(42).await.unwrap().is_empty());
    }
}
