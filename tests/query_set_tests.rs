//! Integration tests for lazy paginated iteration.
//!
//! These tests drive a query set against a mock server to verify the
//! pagination cursor: page-then-in-page order, exhaustion, restart
//! semantics, counting, and error propagation.

use serde_json::{json, Value};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use starwars_api::{
    ApiBaseUrl, People, Resource, ResourceError, SwapiClient, SwapiConfig,
};

/// Creates a client pointed at the given mock server.
fn create_test_client(server: &MockServer) -> SwapiClient {
    let config = SwapiConfig::builder()
        .base_url(ApiBaseUrl::new(server.uri()).unwrap())
        .build();
    SwapiClient::with_config(&config)
}

/// Builds one raw person record.
fn person(n: usize) -> Value {
    json!({"name": format!("Person {n}")})
}

/// Builds a listing page body with the given records.
fn page_body(count: usize, page: usize, last_page: usize, results: Vec<Value>) -> Value {
    let next = if page < last_page {
        Value::String(format!("people/?page={}", page + 1))
    } else {
        Value::Null
    };
    json!({
        "count": count,
        "next": next,
        "previous": null,
        "results": results
    })
}

/// Mounts a people listing split into pages of `page_size` records.
async fn mount_people_pages(server: &MockServer, total: usize, page_size: usize) {
    let last_page = total.div_ceil(page_size).max(1);
    for page in 1..=last_page {
        let start = (page - 1) * page_size;
        let results: Vec<Value> = (start + 1..=total.min(start + page_size))
            .map(person)
            .collect();
        Mock::given(method("GET"))
            .and(path("/people/"))
            .and(query_param("page", page.to_string()))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(page_body(
                    total, page, last_page, results,
                )),
            )
            .mount(server)
            .await;
    }
}

// ============================================================================
// Draining Tests
// ============================================================================

#[tokio::test]
async fn test_drain_yields_exactly_count_items() {
    let server = MockServer::start().await;
    mount_people_pages(&server, 5, 3).await;

    let client = create_test_client(&server);
    let people = People::all(&client).try_collect().await.unwrap();

    assert_eq!(people.len(), 5);
}

#[tokio::test]
async fn test_three_page_collection_yields_all_items_in_order() {
    // 25 items over pages of 10 (10, 10, 5): every item must appear exactly
    // once, in page-then-in-page order, with no duplicates at the page
    // boundaries.
    let server = MockServer::start().await;
    mount_people_pages(&server, 25, 10).await;

    let client = create_test_client(&server);
    let people = People::all(&client).try_collect().await.unwrap();

    assert_eq!(people.len(), 25);
    let names: Vec<String> = people
        .iter()
        .map(|p| p.name().unwrap().to_string())
        .collect();
    let expected: Vec<String> = (1..=25).map(|n| format!("Person {n}")).collect();
    assert_eq!(names, expected);
}

#[tokio::test]
async fn test_single_page_collection() {
    let server = MockServer::start().await;
    mount_people_pages(&server, 3, 10).await;

    let client = create_test_client(&server);
    let mut people = People::all(&client);

    let first = people.try_next().await.unwrap().unwrap();
    assert_eq!(first.to_string(), "Person: Person 1");

    let second = people.try_next().await.unwrap().unwrap();
    assert_eq!(second.to_string(), "Person: Person 2");

    let third = people.try_next().await.unwrap().unwrap();
    assert_eq!(third.to_string(), "Person: Person 3");

    assert!(people.try_next().await.unwrap().is_none());
}

#[tokio::test]
async fn test_empty_collection_is_immediately_exhausted() {
    let server = MockServer::start().await;
    mount_people_pages(&server, 0, 10).await;

    let client = create_test_client(&server);
    let mut people = People::all(&client);

    assert!(people.try_next().await.unwrap().is_none());
}

// ============================================================================
// Exhaustion and Restart Tests
// ============================================================================

#[tokio::test]
async fn test_exhausted_query_set_keeps_signaling_exhaustion() {
    let server = MockServer::start().await;
    mount_people_pages(&server, 2, 10).await;

    let client = create_test_client(&server);
    let mut people = People::all(&client);

    assert!(people.try_next().await.unwrap().is_some());
    assert!(people.try_next().await.unwrap().is_some());
    assert!(people.try_next().await.unwrap().is_none());
    assert!(people.try_next().await.unwrap().is_none());
}

#[tokio::test]
async fn test_restart_begins_a_fresh_pass_from_the_first_item() {
    let server = MockServer::start().await;
    mount_people_pages(&server, 2, 10).await;

    let client = create_test_client(&server);
    let mut people = People::all(&client);

    while people.try_next().await.unwrap().is_some() {}

    people.restart();
    let first = people.try_next().await.unwrap().unwrap();
    assert_eq!(first.to_string(), "Person: Person 1");
}

#[tokio::test]
async fn test_fresh_all_starts_from_the_first_item() {
    let server = MockServer::start().await;
    mount_people_pages(&server, 2, 10).await;

    let client = create_test_client(&server);

    let drained = People::all(&client).try_collect().await.unwrap();
    assert_eq!(drained.len(), 2);

    let first = People::all(&client).try_next().await.unwrap().unwrap();
    assert_eq!(first.to_string(), "Person: Person 1");
}

// ============================================================================
// Counting Tests
// ============================================================================

#[tokio::test]
async fn test_count_matches_full_drain_of_a_separate_query_set() {
    let server = MockServer::start().await;
    mount_people_pages(&server, 25, 10).await;

    let client = create_test_client(&server);

    let count = People::all(&client).count().await.unwrap();
    let drained = People::all(&client).try_collect().await.unwrap();

    assert_eq!(count, drained.len() as u64);
}

#[tokio::test]
async fn test_count_costs_exactly_one_request() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/people/"))
        .and(query_param("page", "1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "count": 82,
            "next": "people/?page=2",
            "previous": null,
            "results": [person(1)]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = create_test_client(&server);
    let count = People::all(&client).count().await.unwrap();

    assert_eq!(count, 82);
    // The mock's expect(1) verifies no further pages were fetched.
}

#[tokio::test]
async fn test_count_after_iteration_costs_no_extra_request() {
    let server = MockServer::start().await;
    mount_people_pages(&server, 2, 10).await;

    let client = create_test_client(&server);
    let mut people = People::all(&client);

    people.try_next().await.unwrap();
    assert_eq!(people.count().await.unwrap(), 2);
}

// ============================================================================
// Failure Tests
// ============================================================================

#[tokio::test]
async fn test_failure_on_first_fetch_propagates() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/people/"))
        .respond_with(ResponseTemplate::new(500).set_body_json(json!({"detail": "boom"})))
        .mount(&server)
        .await;

    let client = create_test_client(&server);
    let error = People::all(&client).try_next().await.unwrap_err();

    assert!(matches!(error, ResourceError::Client(_)));
}

#[tokio::test]
async fn test_failure_at_page_boundary_stops_the_pass() {
    let server = MockServer::start().await;

    // Page 1 succeeds with 3 of 5 items; page 2 fails.
    Mock::given(method("GET"))
        .and(path("/people/"))
        .and(query_param("page", "1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(page_body(
            5,
            1,
            2,
            vec![person(1), person(2), person(3)],
        )))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/people/"))
        .and(query_param("page", "2"))
        .respond_with(ResponseTemplate::new(500).set_body_json(json!({"detail": "boom"})))
        .mount(&server)
        .await;

    let client = create_test_client(&server);
    let mut people = People::all(&client);

    let mut yielded = 0;
    let error = loop {
        match people.try_next().await {
            Ok(Some(_)) => yielded += 1,
            Ok(None) => panic!("pass must fail before exhausting"),
            Err(e) => break e,
        }
    };

    assert_eq!(yielded, 3);
    assert!(matches!(error, ResourceError::Client(_)));
}

// ============================================================================
// Laziness Tests
// ============================================================================

#[tokio::test]
async fn test_building_a_query_set_performs_no_requests() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "count": 0, "next": null, "previous": null, "results": []
        })))
        .expect(0)
        .mount(&server)
        .await;

    let client = create_test_client(&server);
    let _people = People::all(&client);
    // Dropping without advancing must leave the mock untouched.
}
