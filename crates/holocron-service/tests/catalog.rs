//! Catalog and user listing integration tests.

mod common;

use common::TestHarness;
use serde_json::json;

// ============================================================================
// People
// ============================================================================

#[tokio::test]
async fn list_people_returns_seeded_catalog() {
    let harness = TestHarness::new().await;

    let response = harness.server.get("/people").await;

    response.assert_status_ok();
    let body: serde_json::Value = response.json();
    assert_eq!(
        body,
        json!([
            {"id": 1, "name": "Luke Skywalker"},
            {"id": 2, "name": "Darth Vader"}
        ])
    );
}

#[tokio::test]
async fn get_person_echoes_requested_id() {
    let harness = TestHarness::new().await;

    let response = harness.server.get("/people/2").await;

    response.assert_status_ok();
    let body: serde_json::Value = response.json();
    assert_eq!(body["id"], 2);
    assert_eq!(body["name"], "Darth Vader");
}

#[tokio::test]
async fn get_unknown_person_is_404() {
    let harness = TestHarness::new().await;

    let response = harness.server.get("/people/99").await;

    response.assert_status_not_found();
    let body: serde_json::Value = response.json();
    assert_eq!(body["error"]["code"], "not_found");
}

// ============================================================================
// Planets
// ============================================================================

#[tokio::test]
async fn list_planets_returns_seeded_catalog() {
    let harness = TestHarness::new().await;

    let response = harness.server.get("/planets").await;

    response.assert_status_ok();
    let body: serde_json::Value = response.json();
    assert_eq!(
        body,
        json!([
            {"id": 1, "name": "Tatooine"},
            {"id": 2, "name": "Alderaan"}
        ])
    );
}

#[tokio::test]
async fn get_planet_echoes_requested_id() {
    let harness = TestHarness::new().await;

    let response = harness.server.get("/planets/1").await;

    response.assert_status_ok();
    let body: serde_json::Value = response.json();
    assert_eq!(body["id"], 1);
    assert_eq!(body["name"], "Tatooine");
}

#[tokio::test]
async fn get_unknown_planet_is_404() {
    let harness = TestHarness::new().await;

    let response = harness.server.get("/planets/99").await;

    response.assert_status_not_found();
}

// ============================================================================
// Users
// ============================================================================

#[tokio::test]
async fn list_users_returns_seeded_users() {
    let harness = TestHarness::new().await;

    let response = harness.server.get("/users").await;

    response.assert_status_ok();
    let body: serde_json::Value = response.json();
    assert_eq!(
        body,
        json!([
            {"id": 1, "name": "Jazmin"},
            {"id": 2, "name": "Pablo"}
        ])
    );
}

// ============================================================================
// Empty catalog
// ============================================================================

#[tokio::test]
async fn empty_catalog_lists_are_empty_arrays() {
    let harness = TestHarness::new_unseeded().await;

    for path in ["/people", "/planets", "/users"] {
        let response = harness.server.get(path).await;
        response.assert_status_ok();
        let body: serde_json::Value = response.json();
        assert_eq!(body, json!([]), "{path} should be an empty array");
    }
}
