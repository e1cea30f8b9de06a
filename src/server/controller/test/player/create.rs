use super::*;

/// Tests creating a valid player.
///
/// Verifies that the endpoint returns the stored player with a generated id, computed
/// level fields and `banned` defaulted to false.
///
/// Expected: 200 OK with PlayerDto
#[tokio::test]
async fn creates_player() {
    let state = state().await;

    let response = create_player(State(state), Ok(Json(valid_create_dto())))
        .await
        .into_response();

    assert_eq!(response.status(), StatusCode::OK);
    let player: PlayerDto = json_body(response).await;
    assert!(player.id > 0);
    assert_eq!(player.name, "Boromir");
    assert_eq!(player.title, "Captain of Gondor");
    assert_eq!(player.race, Race::Human);
    assert_eq!(player.profession, Profession::Warrior);
    assert_eq!(player.experience, 2_500);
    assert_eq!(player.level, 6);
    assert_eq!(player.until_next_level, 300);
    assert_eq!(player.birthday, BIRTHDAY_2010);
    assert!(!player.banned);
}

/// Tests the name length boundary.
///
/// Verifies that a 12 character name is accepted and a 13 character name is rejected
/// without storing anything.
///
/// Expected: 200 OK for 12 characters, 400 Bad Request for 13
#[tokio::test]
async fn enforces_name_length_boundary() {
    let state = state().await;

    let mut dto = valid_create_dto();
    dto.name = Some("abcdefghijkl".to_string());
    let response = create_player(State(state.clone()), Ok(Json(dto)))
        .await
        .into_response();
    assert_eq!(response.status(), StatusCode::OK);

    let mut dto = valid_create_dto();
    dto.name = Some("abcdefghijklm".to_string());
    let response = create_player(State(state.clone()), Ok(Json(dto)))
        .await
        .into_response();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let count = get_players_count(State(state), Ok(Query(PlayerFilterParams::default())))
        .await
        .into_response();
    let count: u64 = json_body(count).await;
    assert_eq!(count, 1);
}

/// Tests rejecting a request with a missing required field.
///
/// Expected: 400 Bad Request with an error message
#[tokio::test]
async fn rejects_missing_required_field() {
    let state = state().await;

    let mut dto = valid_create_dto();
    dto.profession = None;
    let response = create_player(State(state), Ok(Json(dto)))
        .await
        .into_response();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let error: ErrorDto = json_body(response).await;
    assert!(error.message.contains("profession"));
}

/// Tests rejecting out-of-range experience and birthday values.
///
/// Expected: 400 Bad Request for each
#[tokio::test]
async fn rejects_out_of_range_values() {
    let state = state().await;

    let mut too_experienced = valid_create_dto();
    too_experienced.experience = Some(10_000_001);

    let mut before_epoch = valid_create_dto();
    before_epoch.birthday = Some(-1);

    let mut born_1999 = valid_create_dto();
    born_1999.birthday = Some(946_684_799_999);

    let mut long_title = valid_create_dto();
    long_title.title = Some("t".repeat(31));

    for dto in [too_experienced, before_epoch, born_1999, long_title] {
        let response = create_player(State(state.clone()), Ok(Json(dto)))
            .await
            .into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}

/// Tests that an explicit banned flag is kept.
///
/// Expected: 200 OK with banned true
#[tokio::test]
async fn keeps_explicit_banned_flag() {
    let state = state().await;

    let mut dto = valid_create_dto();
    dto.banned = Some(true);
    let response = create_player(State(state), Ok(Json(dto)))
        .await
        .into_response();

    assert_eq!(response.status(), StatusCode::OK);
    let player: PlayerDto = json_body(response).await;
    assert!(player.banned);
}
