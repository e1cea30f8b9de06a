//! Requests sent through the full router, covering query string and JSON body parsing.

use axum::{
    body::Body,
    http::{header::CONTENT_TYPE, Method, Request},
    Router,
};
use serde_json::{json, Value};
use tower::ServiceExt;

use super::*;
use crate::server::router;

async fn seeded_app() -> (AppState, Router) {
    let state = state().await;
    PlayerFactory::new(&state.db)
        .name("Gimli")
        .race(entity::player::Race::Dwarf)
        .experience(900)
        .build()
        .await
        .unwrap();
    PlayerFactory::new(&state.db)
        .name("Thorin")
        .race(entity::player::Race::Dwarf)
        .experience(100)
        .build()
        .await
        .unwrap();
    PlayerFactory::new(&state.db)
        .name("Legolas")
        .race(entity::player::Race::Elf)
        .experience(50)
        .banned(true)
        .build()
        .await
        .unwrap();

    let app = router::app(state.clone());
    (state, app)
}

async fn send(app: &Router, request: Request<Body>) -> Response {
    app.clone().oneshot(request).await.unwrap()
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

fn with_json(method: Method, uri: &str, body: impl Into<String>) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(CONTENT_TYPE, "application/json")
        .body(Body::from(body.into()))
        .unwrap()
}

fn names(players: &[PlayerDto]) -> Vec<&str> {
    players.iter().map(|p| p.name.as_str()).collect()
}

/// Tests camelCase filter names and upper-case enum values in the query string.
///
/// Expected: 200 OK with only the matching dwarf
#[tokio::test]
async fn parses_camel_case_filters() {
    let (_, app) = seeded_app().await;

    let response = send(&app, get("/rest/players?race=DWARF&minExperience=500")).await;

    assert_eq!(response.status(), StatusCode::OK);
    let players: Vec<PlayerDto> = json_body(response).await;
    assert_eq!(names(&players), vec!["Gimli"]);
}

/// Tests order and page parameters in the query string.
///
/// Expected: 200 OK with the second player by experience
#[tokio::test]
async fn parses_order_and_page_parameters() {
    let (_, app) = seeded_app().await;

    let response = send(
        &app,
        get("/rest/players?order=EXPERIENCE&pageNumber=1&pageSize=1"),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    let players: Vec<PlayerDto> = json_body(response).await;
    assert_eq!(names(&players), vec!["Thorin"]);
}

/// Tests that filters and paging combine in one query string.
///
/// Expected: 200 OK with the banned elf only
#[tokio::test]
async fn combines_filters_with_paging() {
    let (_, app) = seeded_app().await;

    let response = send(&app, get("/rest/players?banned=true&pageSize=10&order=NAME")).await;

    assert_eq!(response.status(), StatusCode::OK);
    let players: Vec<PlayerDto> = json_body(response).await;
    assert_eq!(names(&players), vec!["Legolas"]);
}

/// Tests rejecting unknown enum spellings and non-numeric values in the query string.
///
/// Expected: 400 Bad Request with an error message for each
#[tokio::test]
async fn rejects_malformed_query_values() {
    let (_, app) = seeded_app().await;

    for uri in [
        "/rest/players?race=WIZARD",
        "/rest/players?race=dwarf",
        "/rest/players?profession=BARD",
        "/rest/players?order=AGE",
        "/rest/players?minLevel=high",
        "/rest/players?pageSize=0",
        "/rest/players/count?race=WIZARD",
        "/rest/players/count?banned=maybe",
    ] {
        let response = send(&app, get(uri)).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST, "{}", uri);

        let error: ErrorDto = json_body(response).await;
        assert!(!error.message.is_empty(), "{}", uri);
    }
}

/// Tests page numbers and sizes that do not fit a database row offset.
///
/// Expected: 400 Bad Request instead of a failed query
#[tokio::test]
async fn rejects_out_of_range_pages() {
    let (_, app) = seeded_app().await;

    for uri in [
        "/rest/players?pageNumber=9223372036854775807",
        "/rest/players?pageNumber=4000000000000000000",
        "/rest/players?pageSize=18446744073709551615",
        "/rest/players?pageNumber=-1",
        "/rest/players?pageNumber=4294967295&pageSize=4294967295",
    ] {
        let response = send(&app, get(uri)).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST, "{}", uri);
    }
}

/// Tests the largest page that still fits a row offset.
///
/// Expected: 200 OK with an empty page
#[tokio::test]
async fn serves_empty_page_far_past_the_end() {
    let (_, app) = seeded_app().await;

    let response = send(
        &app,
        get("/rest/players?pageNumber=4294967295&pageSize=2147483648"),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    let players: Vec<PlayerDto> = json_body(response).await;
    assert!(players.is_empty());
}

/// Tests that `/rest/players/count` is not routed as a player id.
///
/// Expected: 200 OK with the number of matching players
#[tokio::test]
async fn count_route_is_not_an_id() {
    let (_, app) = seeded_app().await;

    let response = send(&app, get("/rest/players/count?race=DWARF&pageSize=1")).await;

    assert_eq!(response.status(), StatusCode::OK);
    let count: u64 = json_body(response).await;
    assert_eq!(count, 2);
}

/// Tests creating and fetching a player over HTTP.
///
/// Verifies the camelCase JSON field names of the response and that the created
/// player is reachable at its id.
///
/// Expected: 200 OK on create and on get
#[tokio::test]
async fn creates_and_fetches_player_over_http() {
    let (_, app) = seeded_app().await;

    let body = json!({
        "name": "Frodo",
        "title": "Ring-bearer",
        "race": "HOBBIT",
        "profession": "ROGUE",
        "experience": 300,
        "birthday": BIRTHDAY_2010,
        "level": 99,
        "untilNextLevel": 1
    });
    let response = send(
        &app,
        with_json(Method::POST, "/rest/players", body.to_string()),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    let created: Value = json_body(response).await;
    assert_eq!(created["race"], "HOBBIT");
    assert_eq!(created["level"], 2);
    assert_eq!(created["untilNextLevel"], 300);
    assert_eq!(created["birthday"], BIRTHDAY_2010);
    assert_eq!(created["banned"], false);

    let id = created["id"].as_i64().unwrap();
    let response = send(&app, get(&format!("/rest/players/{}", id))).await;

    assert_eq!(response.status(), StatusCode::OK);
    let fetched: Value = json_body(response).await;
    assert_eq!(fetched, created);
}

/// Tests rejecting malformed and mistyped JSON bodies.
///
/// Expected: 400 Bad Request for create and update
#[tokio::test]
async fn rejects_malformed_json_bodies() {
    let (state, app) = seeded_app().await;
    let player = factory::create_player(&state.db).await.unwrap();
    let player_uri = format!("/rest/players/{}", player.id);

    let requests = [
        with_json(Method::POST, "/rest/players", r#"{"name":"#),
        with_json(Method::POST, "/rest/players", r#"{"experience":"lots"}"#),
        with_json(Method::POST, "/rest/players", r#"{"race":"WIZARD"}"#),
        with_json(Method::PUT, &player_uri, r#"{"banned":"#),
        with_json(Method::PUT, &player_uri, r#"{"birthday":"yesterday"}"#),
        Request::builder()
            .method(Method::POST)
            .uri("/rest/players")
            .body(Body::from(r#"{"name":"Frodo"}"#))
            .unwrap(),
    ];

    for request in requests {
        let uri = request.uri().to_string();
        let response = send(&app, request).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST, "{}", uri);

        let error: ErrorDto = json_body(response).await;
        assert!(!error.message.is_empty(), "{}", uri);
    }
}

/// Tests updating and deleting over HTTP, including malformed ids.
///
/// Expected: 200 OK on update and delete, 404 Not Found afterwards, 400 Bad Request for
/// a non-numeric id
#[tokio::test]
async fn updates_and_deletes_over_http() {
    let (state, app) = seeded_app().await;
    let player = factory::create_player(&state.db).await.unwrap();
    let player_uri = format!("/rest/players/{}", player.id);

    let response = send(
        &app,
        with_json(Method::PUT, &player_uri, r#"{"experience":100,"title":null}"#),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let updated: PlayerDto = json_body(response).await;
    assert_eq!(updated.level, 1);
    assert_eq!(updated.title, player.title);

    let delete = |uri: &str| {
        Request::builder()
            .method(Method::DELETE)
            .uri(uri)
            .body(Body::empty())
            .unwrap()
    };

    let response = send(&app, delete(player_uri.as_str())).await;
    assert_eq!(response.status(), StatusCode::OK);

    let response = send(&app, get(&player_uri)).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let response = send(&app, delete("/rest/players/abc")).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}
