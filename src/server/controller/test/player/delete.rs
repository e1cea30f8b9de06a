use super::*;

/// Tests deleting an existing player then fetching it.
///
/// Expected: 200 OK on delete, then 404 Not Found on get
#[tokio::test]
async fn deleted_player_is_not_found() {
    let state = state().await;
    let player = factory::create_player(&state.db).await.unwrap();

    let response = delete_player(State(state.clone()), Path(player.id.to_string()))
        .await
        .into_response();
    assert_eq!(response.status(), StatusCode::OK);

    let response = get_player(State(state), Path(player.id.to_string()))
        .await
        .into_response();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

/// Tests deleting a nonexistent player.
///
/// Expected: 404 Not Found with the uniform error message
#[tokio::test]
async fn returns_not_found_for_missing_player() {
    let state = state().await;

    let response = delete_player(State(state), Path("777".to_string()))
        .await
        .into_response();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let error: ErrorDto = json_body(response).await;
    assert_eq!(error.message, "Player with id = 777 wasn't found!");
}

/// Tests deleting the same player twice.
///
/// Expected: 200 OK then 404 Not Found
#[tokio::test]
async fn second_delete_is_not_found() {
    let state = state().await;
    let player = factory::create_player(&state.db).await.unwrap();

    let first = delete_player(State(state.clone()), Path(player.id.to_string()))
        .await
        .into_response();
    let second = delete_player(State(state), Path(player.id.to_string()))
        .await
        .into_response();

    assert_eq!(first.status(), StatusCode::OK);
    assert_eq!(second.status(), StatusCode::NOT_FOUND);
}

/// Tests rejecting a malformed id.
///
/// Expected: 400 Bad Request
#[tokio::test]
async fn rejects_invalid_id() {
    let state = state().await;

    let response = delete_player(State(state), Path("not-a-number".to_string()))
        .await
        .into_response();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}
