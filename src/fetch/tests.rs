//! Tests for envelope normalization, pagination math, and hydration

use super::*;
use crate::config::{ClientConfig, CredentialStore};
use crate::error::Error;
use crate::http::Transport;
use crate::request::{BasePath, RequestDescriptor};
use crate::resource::{Character, Game, Resource};
use pretty_assertions::assert_eq;
use serde_json::json;
use test_case::test_case;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn page(offset: u64, page: u64, total: u64) -> PaginatedResult<Character> {
    PaginatedResult {
        page_result_count: Some(page),
        total_result_count: Some(total),
        offset: Some(offset),
        version: Some("1.0".to_string()),
        resources: Vec::new(),
    }
}

mod has_more_cases {
    use super::page;
    use test_case::test_case;

    #[test_case(10, 5, 100 => true; "middle of collection")]
    #[test_case(95, 5, 100 => false; "final page")]
    #[test_case(0, 0, 0 => false; "empty collection")]
    #[test_case(90, 5, 100 => true; "one page remaining")]
    fn test_has_more(offset: u64, count: u64, total: u64) -> bool {
        page(offset, count, total).has_more()
    }
}

#[test]
fn test_has_more_defaults_true_when_metadata_missing() {
    let result: PaginatedResult<Character> = PaginatedResult {
        page_result_count: Some(5),
        total_result_count: None,
        offset: Some(0),
        version: None,
        resources: Vec::new(),
    };
    assert!(result.has_more());
}

async fn transport_for(server: &MockServer) -> Transport {
    let config = ClientConfig::builder()
        .api_base_url(format!("{}/api", server.uri()))
        .build();
    Transport::new(&config, CredentialStore::with_key(Some("K".to_string()))).unwrap()
}

async fn mount_envelope(server: &MockServer, endpoint: &str, body: serde_json::Value) {
    Mock::given(method("GET"))
        .and(path(endpoint.to_string()))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(server)
        .await;
}

#[tokio::test]
async fn test_fetch_page_array_results() {
    let server = MockServer::start().await;
    mount_envelope(
        &server,
        "/api/characters",
        json!({
            "number_of_page_results": 2,
            "number_of_total_results": 5,
            "offset": 0,
            "version": "1.0",
            "results": [{"id": 1, "name": "A"}, {"id": 2, "name": "B"}]
        }),
    )
    .await;

    let transport = transport_for(&server).await;
    let descriptor = RequestDescriptor::builder(BasePath::Api, "characters").build();
    let result: PaginatedResult<Character> = fetch_page(&transport, &descriptor).await.unwrap();

    assert_eq!(result.resources.len(), 2);
    assert_eq!(result.resources[0].core.name.as_deref(), Some("A"));
    assert_eq!(result.resources[1].core.name.as_deref(), Some("B"));
    assert_eq!(result.version.as_deref(), Some("1.0"));
    assert!(result.has_more());
}

#[tokio::test]
async fn test_fetch_page_single_object_results() {
    let server = MockServer::start().await;
    mount_envelope(
        &server,
        "/api/character/3005-1",
        json!({
            "number_of_page_results": 1,
            "number_of_total_results": 1,
            "offset": 0,
            "results": {"id": 1, "name": "Solo"}
        }),
    )
    .await;

    let transport = transport_for(&server).await;
    let descriptor = RequestDescriptor::builder(BasePath::Api, "character/3005-1").build();
    let result: PaginatedResult<Character> = fetch_page(&transport, &descriptor).await.unwrap();

    assert_eq!(result.resources.len(), 1);
    assert_eq!(result.resources[0].core.name.as_deref(), Some("Solo"));
    assert!(!result.has_more());
}

#[tokio::test]
async fn test_fetch_page_missing_results_is_empty_not_error() {
    let server = MockServer::start().await;
    mount_envelope(&server, "/api/characters", json!({"offset": 0})).await;

    let transport = transport_for(&server).await;
    let descriptor = RequestDescriptor::builder(BasePath::Api, "characters").build();
    let result: PaginatedResult<Character> = fetch_page(&transport, &descriptor).await.unwrap();

    assert!(result.resources.is_empty());
    assert!(result.has_more());
}

#[tokio::test]
async fn test_fetch_page_non_object_payload_is_serialization_error() {
    let server = MockServer::start().await;
    mount_envelope(&server, "/api/characters", json!([1, 2, 3])).await;

    let transport = transport_for(&server).await;
    let descriptor = RequestDescriptor::builder(BasePath::Api, "characters").build();
    let err = fetch_page::<Character>(&transport, &descriptor)
        .await
        .unwrap_err();

    assert!(matches!(err, Error::Serialization { .. }));
}

#[tokio::test]
async fn test_fetch_detail_hydrates_and_builds_extended_info() {
    let server = MockServer::start().await;
    mount_envelope(
        &server,
        "/api/character/3005-1",
        json!({
            "results": {
                "id": 1,
                "description": "Full bio",
                "friends": [{"id": 2, "name": "Friend"}]
            }
        }),
    )
    .await;

    let transport = transport_for(&server).await;
    let descriptor = RequestDescriptor::builder(BasePath::Api, "character/3005-1").build();

    let mut character = Character::from_json(
        json!({"id": 1, "name": "Stub"}).as_object().unwrap(),
    );
    fetch_detail(&transport, &descriptor, &mut character)
        .await
        .unwrap();

    // Known fields survive, new fields land
    assert_eq!(character.core.name.as_deref(), Some("Stub"));
    assert_eq!(character.core.description.as_deref(), Some("Full bio"));
    let info = character.extended_info.as_ref().unwrap();
    assert_eq!(info.friends.len(), 1);
    assert_eq!(info.friends[0].core.name.as_deref(), Some("Friend"));
}

#[tokio::test]
async fn test_fetch_detail_twice_merges_one_extended_info() {
    let server = MockServer::start().await;
    mount_envelope(
        &server,
        "/api/game/3030-9",
        json!({
            "results": {"id": 9, "characters": [{"id": 1}]}
        }),
    )
    .await;
    mount_envelope(
        &server,
        "/api/game/3030-9b",
        json!({
            "results": {"id": 9, "developers": [{"id": 50, "name": "Dev"}]}
        }),
    )
    .await;

    let transport = transport_for(&server).await;
    let mut game = Game::from_json(json!({"id": 9}).as_object().unwrap());

    let first = RequestDescriptor::builder(BasePath::Api, "game/3030-9").build();
    fetch_detail(&transport, &first, &mut game).await.unwrap();

    let second = RequestDescriptor::builder(BasePath::Api, "game/3030-9b").build();
    fetch_detail(&transport, &second, &mut game).await.unwrap();

    // Both hydrations merged into the same side-car
    let info = game.extended_info.as_ref().unwrap();
    assert_eq!(info.characters.len(), 1);
    assert_eq!(info.developers.len(), 1);
}

#[tokio::test]
async fn test_fetch_detail_bad_results_shape_leaves_resource_untouched() {
    let server = MockServer::start().await;
    mount_envelope(
        &server,
        "/api/character/3005-1",
        json!({"results": [1, 2, 3]}),
    )
    .await;

    let transport = transport_for(&server).await;
    let descriptor = RequestDescriptor::builder(BasePath::Api, "character/3005-1").build();

    let mut character = Character::from_json(
        json!({"id": 1, "name": "Stub", "deck": "Known"}).as_object().unwrap(),
    );
    let err = fetch_detail(&transport, &descriptor, &mut character)
        .await
        .unwrap_err();

    assert!(matches!(err, Error::Serialization { .. }));
    assert_eq!(character.core.name.as_deref(), Some("Stub"));
    assert_eq!(character.core.deck.as_deref(), Some("Known"));
    assert!(character.extended_info.is_none());
}
