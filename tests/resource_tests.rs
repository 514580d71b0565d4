//! Integration tests for the resource models.
//!
//! These tests verify single-record fetching, not-found mapping, and the
//! verbatim record semantics of the model layer.

use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use starwars_api::{
    ApiBaseUrl, Film, People, Resource, ResourceError, SwapiClient, SwapiConfig,
};

/// Creates a client pointed at the given mock server.
fn create_test_client(server: &MockServer) -> SwapiClient {
    let config = SwapiConfig::builder()
        .base_url(ApiBaseUrl::new(server.uri()).unwrap())
        .build();
    SwapiClient::with_config(&config)
}

// ============================================================================
// Single Fetch Tests
// ============================================================================

#[tokio::test]
async fn test_people_get_wraps_the_fetched_record() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/people/5/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "name": "Leia Organa",
            "height": "150",
            "birth_year": "19BBY"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = create_test_client(&server);
    let leia = People::get(&client, 5).await.unwrap();

    assert_eq!(leia.to_string(), "Person: Leia Organa");
    assert_eq!(leia.height().unwrap(), "150");
    assert_eq!(leia.birth_year().unwrap(), "19BBY");
}

#[tokio::test]
async fn test_film_get_wraps_the_fetched_record() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/films/1/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "title": "A New Hope",
            "episode_id": 4
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = create_test_client(&server);
    let film = Film::get(&client, 1).await.unwrap();

    assert_eq!(film.to_string(), "Film: A New Hope");
    assert_eq!(film.episode_id().unwrap(), 4);
}

#[tokio::test]
async fn test_get_maps_404_to_not_found() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/people/9999/"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({"detail": "Not found"})))
        .mount(&server)
        .await;

    let client = create_test_client(&server);
    let error = People::get(&client, 9999).await.unwrap_err();

    assert!(matches!(
        error,
        ResourceError::NotFound { resource: "people", id: 9999 }
    ));
}

#[tokio::test]
async fn test_get_propagates_other_client_failures() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/films/1/"))
        .respond_with(ResponseTemplate::new(500).set_body_json(json!({"detail": "boom"})))
        .mount(&server)
        .await;

    let client = create_test_client(&server);
    let error = Film::get(&client, 1).await.unwrap_err();

    assert!(matches!(error, ResourceError::Client(_)));
}

// ============================================================================
// Record Semantics Tests
// ============================================================================

#[tokio::test]
async fn test_fetched_record_preserves_every_field_verbatim() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/people/1/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "name": "Luke Skywalker",
            "unknown_future_field": {"nested": [1, 2, 3]}
        })))
        .mount(&server)
        .await;

    let client = create_test_client(&server);
    let luke = People::get(&client, 1).await.unwrap();

    assert_eq!(luke.record().len(), 2);
    assert_eq!(
        luke.record().get("unknown_future_field").unwrap(),
        &json!({"nested": [1, 2, 3]})
    );
}

#[tokio::test]
async fn test_absent_field_errors_only_when_accessed() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/people/1/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"name": "Luke Skywalker"})))
        .mount(&server)
        .await;

    let client = create_test_client(&server);
    // Construction succeeds despite most fields being absent.
    let luke = People::get(&client, 1).await.unwrap();

    assert!(luke.name().is_ok());
    assert!(matches!(
        luke.homeworld(),
        Err(ResourceError::MissingField { field }) if field == "homeworld"
    ));
}
