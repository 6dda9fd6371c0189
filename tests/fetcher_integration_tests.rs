use serde_json::{Value, json};
use swapi_browser::api::{FetchError, Fetcher, Gender, PageRequest, SwapiClient};
use swapi_browser::core::identifier::CharacterId;
use tokio_test::{assert_err, assert_ok};
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{method, path, query_param},
};

// ============================================================================
// Helper Functions
// ============================================================================

/// A record in the exact shape SWAPI returns, with `url` rooted at `base`.
fn character_json(base: &str, name: &str, id: u32) -> Value {
    json!({
        "name": name,
        "height": "150",
        "mass": "49",
        "hair_color": "brown",
        "skin_color": "light",
        "eye_color": "brown",
        "birth_year": "19BBY",
        "gender": "female",
        "homeworld": format!("{base}/planets/2/"),
        "films": [format!("{base}/films/1/"), format!("{base}/films/2/")],
        "species": [],
        "vehicles": [format!("{base}/vehicles/30/")],
        "starships": [],
        "created": "2014-12-10T15:20:09.791000Z",
        "edited": "2014-12-20T21:17:50.315000Z",
        "url": format!("{base}/people/{id}/")
    })
}

fn page_json(results: Vec<Value>, count: u32, previous: Option<String>, next: Option<String>) -> Value {
    json!({
        "count": count,
        "next": next,
        "previous": previous,
        "results": results,
    })
}

fn first_page(base: &str) -> Value {
    let results = (1..=10)
        .map(|id| character_json(base, &format!("Character {id}"), id))
        .collect();
    page_json(results, 82, None, Some(format!("{base}/people/?page=2")))
}

// ============================================================================
// Listing
// ============================================================================

#[tokio::test]
async fn test_listing_hits_unfiltered_endpoint() {
    let mock_server = MockServer::start().await;
    let base = mock_server.uri();

    Mock::given(method("GET"))
        .and(path("/people"))
        .respond_with(ResponseTemplate::new(200).set_body_json(first_page(&base)))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = SwapiClient::new(base.clone());
    let page = assert_ok!(client.fetch_page(&PageRequest::Listing).await);

    assert_eq!(page.results.len(), 10);
    assert_eq!(page.count, Some(82));
    assert!(page.previous.is_none());
    assert_eq!(page.next, Some(format!("{base}/people/?page=2")));
}

#[tokio::test]
async fn test_empty_search_term_hits_unfiltered_endpoint() {
    let mock_server = MockServer::start().await;
    let base = mock_server.uri();

    Mock::given(method("GET"))
        .and(path("/people"))
        .respond_with(ResponseTemplate::new(200).set_body_json(first_page(&base)))
        .expect(2)
        .mount(&mock_server)
        .await;

    let client = SwapiClient::new(base);
    assert_ok!(client.fetch_page(&PageRequest::resolve(None, Some(""))).await);
    assert_ok!(client.fetch_page(&PageRequest::resolve(None, None)).await);
}

#[tokio::test]
async fn test_search_sends_encoded_term() {
    let mock_server = MockServer::start().await;
    let base = mock_server.uri();

    let luke = character_json(&base, "Luke Skywalker", 1);
    Mock::given(method("GET"))
        .and(path("/people/"))
        .and(query_param("search", "Luke Skywalker"))
        .respond_with(ResponseTemplate::new(200).set_body_json(page_json(vec![luke], 1, None, None)))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = SwapiClient::new(base);
    let request = PageRequest::resolve(None, Some("Luke Skywalker"));
    let page = assert_ok!(client.fetch_page(&request).await);

    assert_eq!(page.results.len(), 1);
    assert_eq!(page.results[0].name, "Luke Skywalker");
    assert!(page.next.is_none());
}

#[tokio::test]
async fn test_search_results_carry_their_own_cursors() {
    let mock_server = MockServer::start().await;
    let base = mock_server.uri();

    let results = (1..=10)
        .map(|id| character_json(&base, &format!("Skywalker {id}"), id))
        .collect();
    Mock::given(method("GET"))
        .and(path("/people/"))
        .and(query_param("search", "a"))
        .respond_with(ResponseTemplate::new(200).set_body_json(page_json(
            results,
            59,
            None,
            Some(format!("{base}/people/?search=a&page=2")),
        )))
        .mount(&mock_server)
        .await;

    let client = SwapiClient::new(base.clone());
    let page = assert_ok!(client.fetch_page(&PageRequest::Search("a".to_string())).await);
    assert_eq!(page.next, Some(format!("{base}/people/?search=a&page=2")));
}

#[tokio::test]
async fn test_cursor_is_fetched_verbatim() {
    let mock_server = MockServer::start().await;
    let base = mock_server.uri();

    let page_two: Vec<Value> = (11..=20)
        .map(|id| character_json(&base, &format!("Character {id}"), id))
        .collect();
    Mock::given(method("GET"))
        .and(path("/people/"))
        .and(query_param("page", "2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(page_json(
            page_two,
            82,
            Some(format!("{base}/people/?page=1")),
            Some(format!("{base}/people/?page=3")),
        )))
        .expect(1)
        .mount(&mock_server)
        .await;

    // Base URL is deliberately wrong: a cursor must not be rebuilt from it.
    let client = SwapiClient::new("http://127.0.0.1:1/unused");
    let cursor = format!("{base}/people/?page=2");
    let page = assert_ok!(client.fetch_page(&PageRequest::Cursor(cursor)).await);

    assert_eq!(page.results[0].name, "Character 11");
    assert!(page.previous.is_some());
    assert!(page.next.is_some());
}

// ============================================================================
// Single record
// ============================================================================

#[tokio::test]
async fn test_fetch_one_by_id() {
    let mock_server = MockServer::start().await;
    let base = mock_server.uri();

    Mock::given(method("GET"))
        .and(path("/people/5"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(character_json(&base, "Leia Organa", 5)),
        )
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = SwapiClient::new(base);
    let id = CharacterId::new(5).unwrap();
    let leia = assert_ok!(client.fetch_one(id).await);

    assert_eq!(leia.name, "Leia Organa");
    assert_eq!(leia.birth_year, "19BBY");
    assert_eq!(leia.gender, Gender::Female);
    assert_eq!(leia.skin_color, "light");
    assert_eq!(leia.hair_color, "brown");
    assert_eq!(leia.eye_color, "brown");
    assert_eq!(assert_ok!(leia.id()), id);
}

#[tokio::test]
async fn test_id_round_trips_from_listing_to_detail() {
    let mock_server = MockServer::start().await;
    let base = mock_server.uri();

    Mock::given(method("GET"))
        .and(path("/people"))
        .respond_with(ResponseTemplate::new(200).set_body_json(first_page(&base)))
        .mount(&mock_server)
        .await;
    Mock::given(method("GET"))
        .and(path("/people/4"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(character_json(&base, "Character 4", 4)),
        )
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = SwapiClient::new(base);
    let page = assert_ok!(client.fetch_page(&PageRequest::Listing).await);
    let id = assert_ok!(page.results[3].id());
    assert_eq!(id.get(), 4);

    let record = assert_ok!(client.fetch_one(id).await);
    assert_eq!(record.name, "Character 4");
}

// ============================================================================
// Failures
// ============================================================================

#[tokio::test]
async fn test_not_found_is_api_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/people/999"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({"detail": "Not found"})))
        .mount(&mock_server)
        .await;

    let client = SwapiClient::new(mock_server.uri());
    let result = client.fetch_one(CharacterId::new(999).unwrap()).await;

    assert!(matches!(result, Err(FetchError::Api { status: 404, .. })));
}

#[tokio::test]
async fn test_server_error_is_api_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/people"))
        .respond_with(ResponseTemplate::new(500).set_body_string("Internal Server Error"))
        .mount(&mock_server)
        .await;

    let client = SwapiClient::new(mock_server.uri());
    let err = assert_err!(client.fetch_page(&PageRequest::Listing).await);

    match err {
        FetchError::Api { status, message } => {
            assert_eq!(status, 500);
            assert_eq!(message, "Internal Server Error");
        }
        other => panic!("expected API error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_non_json_body_is_parse_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/people"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>maintenance</html>"))
        .mount(&mock_server)
        .await;

    let client = SwapiClient::new(mock_server.uri());
    let result = client.fetch_page(&PageRequest::Listing).await;

    assert!(matches!(result, Err(FetchError::Parse(_))));
}

#[tokio::test]
async fn test_unexpected_shape_is_parse_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/people"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"items": []})))
        .mount(&mock_server)
        .await;

    let client = SwapiClient::new(mock_server.uri());
    let result = client.fetch_page(&PageRequest::Listing).await;

    assert!(matches!(result, Err(FetchError::Parse(_))));
}

#[tokio::test]
async fn test_unreachable_host_is_network_error() {
    // Nothing listens on port 1.
    let client = SwapiClient::new("http://127.0.0.1:1/api");
    let result = client.fetch_page(&PageRequest::Listing).await;

    assert!(matches!(result, Err(FetchError::Network(_))));
}
