//! Common test utilities for holocron integration tests.

#![allow(dead_code)] // Some utilities are used by different test files

use std::sync::Arc;

use axum::Router;
use axum_test::TestServer;
use tempfile::TempDir;

use holocron_service::{create_router, AppState, ServiceConfig};
use holocron_store::SqliteStore;

/// Test harness containing everything needed for integration tests.
pub struct TestHarness {
    /// The test server for making HTTP requests.
    pub server: TestServer,
    /// Temporary directory for the database (kept alive for test duration).
    pub _temp_dir: TempDir,
}

impl TestHarness {
    /// Create a new test harness with a fresh, seeded database.
    pub async fn new() -> Self {
        Self::build(true).await
    }

    /// Create a harness without seed data, for empty-catalog cases.
    pub async fn new_unseeded() -> Self {
        Self::build(false).await
    }

    async fn build(seed: bool) -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let db_url = format!(
            "sqlite://{}",
            temp_dir.path().join("holocron.db").display()
        );

        let store = SqliteStore::connect(&db_url)
            .await
            .expect("Failed to open store");
        if seed {
            store.seed_if_empty().await.expect("Failed to seed store");
        }

        let config = ServiceConfig {
            listen_addr: "127.0.0.1:0".into(),
            database_url: db_url,
            cors_origins: vec!["*".into()],
            max_body_bytes: 1024 * 1024,
            request_timeout_seconds: 30,
        };

        let state = AppState::new(Arc::new(store), config);
        let router: Router = create_router(state);

        let server = TestServer::new(router).expect("Failed to create test server");

        Self {
            server,
            _temp_dir: temp_dir,
        }
    }
}
