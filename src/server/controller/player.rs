use axum::{
    extract::{
        rejection::{JsonRejection, QueryRejection},
        Path, Query, State,
    },
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use utoipa::IntoParams;

use crate::{
    model::{
        api::ErrorDto,
        player::{CreatePlayerDto, PlayerDto, PlayerOrder, Profession, Race, UpdatePlayerDto},
    },
    server::{
        error::AppError,
        model::player::{
            datetime_from_millis, CreatePlayerParams, PageRequest, Player, PlayerFilter,
            UpdatePlayerParams, DEFAULT_PAGE_SIZE,
        },
        service::player::PlayerService,
        state::AppState,
        util::parse::parse_player_id,
    },
};

/// Tag for grouping player endpoints in OpenAPI documentation
pub static PLAYER_TAG: &str = "player";

/// Optional filters shared by the listing and count endpoints.
#[derive(Debug, Default, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct PlayerFilterParams {
    /// Substring the name must contain
    pub name: Option<String>,
    /// Substring the title must contain
    pub title: Option<String>,
    pub race: Option<Race>,
    pub profession: Option<Profession>,
    /// Earliest birthday, milliseconds since the Unix epoch (inclusive)
    pub after: Option<i64>,
    /// Latest birthday, milliseconds since the Unix epoch (inclusive)
    pub before: Option<i64>,
    pub banned: Option<bool>,
    pub min_experience: Option<i32>,
    pub max_experience: Option<i32>,
    pub min_level: Option<i32>,
    pub max_level: Option<i32>,
}

impl PlayerFilterParams {
    pub fn into_filter(self) -> Result<PlayerFilter, AppError> {
        Ok(PlayerFilter {
            name: self.name,
            title: self.title,
            race: self.race.map(Into::into),
            profession: self.profession.map(Into::into),
            after: self
                .after
                .map(|millis| datetime_from_millis("after", millis))
                .transpose()?,
            before: self
                .before
                .map(|millis| datetime_from_millis("before", millis))
                .transpose()?,
            banned: self.banned,
            min_experience: self.min_experience,
            max_experience: self.max_experience,
            min_level: self.min_level,
            max_level: self.max_level,
        })
    }
}

/// Sorting and pagination for the listing endpoint.
///
/// Extracted from the same query string as `PlayerFilterParams`; each struct only reads
/// the parameters it declares.
#[derive(Debug, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct PageParams {
    /// Sort field (default: ID)
    #[serde(default)]
    pub order: PlayerOrder,
    /// Zero-based page number (default: 0)
    #[serde(default)]
    pub page_number: u32,
    /// Players per page (default: 3)
    #[serde(default = "default_page_size")]
    pub page_size: u32,
}

fn default_page_size() -> u32 {
    DEFAULT_PAGE_SIZE
}

impl PageParams {
    pub fn into_page_request(self) -> Result<PageRequest, AppError> {
        PageRequest::new(self.page_number, self.page_size, self.order)
    }
}

impl Default for PageParams {
    fn default() -> Self {
        Self {
            order: PlayerOrder::default(),
            page_number: 0,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

/// List players.
///
/// Returns one page of players matching every supplied filter, sorted ascending by the
/// requested field.
///
/// # Returns
/// - `200 OK` - Page of players (possibly empty)
/// - `400 Bad Request` - Malformed query parameter, page size below 1, or a page beyond
///   the last addressable row
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/rest/players",
    tag = PLAYER_TAG,
    params(PlayerFilterParams, PageParams),
    responses(
        (status = 200, description = "Page of matching players", body = Vec<PlayerDto>),
        (status = 400, description = "Invalid query parameters", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_players(
    State(state): State<AppState>,
    filter: Result<Query<PlayerFilterParams>, QueryRejection>,
    page: Result<Query<PageParams>, QueryRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Query(filter) = filter?;
    let Query(page) = page?;
    let filter = filter.into_filter()?;
    let page = page.into_page_request()?;

    let service = PlayerService::new(&state.db);

    let players: Vec<PlayerDto> = service
        .get_paginated(filter, page)
        .await?
        .into_iter()
        .map(Player::into_dto)
        .collect();

    Ok((StatusCode::OK, Json(players)))
}

/// Count players.
///
/// Returns how many players match the filters, regardless of pagination.
///
/// # Returns
/// - `200 OK` - Number of matching players
/// - `400 Bad Request` - Malformed query parameter
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/rest/players/count",
    tag = PLAYER_TAG,
    params(PlayerFilterParams),
    responses(
        (status = 200, description = "Number of matching players", body = u64),
        (status = 400, description = "Invalid query parameters", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_players_count(
    State(state): State<AppState>,
    query: Result<Query<PlayerFilterParams>, QueryRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Query(params) = query?;
    let filter = params.into_filter()?;

    let service = PlayerService::new(&state.db);

    let count = service.count(filter).await?;

    Ok((StatusCode::OK, Json(count)))
}

/// Create a player.
///
/// Name, title, race, profession, experience and birthday are required; `banned`
/// defaults to false. Level and experience to next level are computed server-side.
///
/// # Returns
/// - `200 OK` - The created player
/// - `400 Bad Request` - Missing field, value out of bounds, or malformed body
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/rest/players",
    tag = PLAYER_TAG,
    request_body = CreatePlayerDto,
    responses(
        (status = 200, description = "Successfully created player", body = PlayerDto),
        (status = 400, description = "Invalid player data", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_player(
    State(state): State<AppState>,
    payload: Result<Json<CreatePlayerDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(payload) = payload?;

    let params = CreatePlayerParams::from_dto(payload)?;

    let service = PlayerService::new(&state.db);

    let player = service.create(params).await?;

    Ok((StatusCode::OK, Json(player.into_dto())))
}

/// Get a player by ID.
///
/// # Returns
/// - `200 OK` - The player
/// - `400 Bad Request` - ID is not a positive integer
/// - `404 Not Found` - No player with this ID
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/rest/players/{id}",
    tag = PLAYER_TAG,
    params(
        ("id" = i64, Path, description = "Player ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved player", body = PlayerDto),
        (status = 400, description = "Invalid player ID", body = ErrorDto),
        (status = 404, description = "Player not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_player(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_player_id(&id)?;

    let service = PlayerService::new(&state.db);

    let player = service
        .get_by_id(id)
        .await?
        .ok_or_else(|| AppError::player_not_found(id))?;

    Ok((StatusCode::OK, Json(player.into_dto())))
}

/// Update a player.
///
/// Overwrites only the fields present (and non-null) in the body, then recomputes level
/// and experience to next level. The body is validated before the player is looked up.
///
/// # Returns
/// - `200 OK` - The updated player
/// - `400 Bad Request` - Invalid ID, experience or birthday out of bounds, or malformed body
/// - `404 Not Found` - No player with this ID
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    put,
    path = "/rest/players/{id}",
    tag = PLAYER_TAG,
    params(
        ("id" = i64, Path, description = "Player ID")
    ),
    request_body = UpdatePlayerDto,
    responses(
        (status = 200, description = "Successfully updated player", body = PlayerDto),
        (status = 400, description = "Invalid player ID or data", body = ErrorDto),
        (status = 404, description = "Player not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_player(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<UpdatePlayerDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_player_id(&id)?;
    let Json(payload) = payload?;

    let params = UpdatePlayerParams::from_dto(id, payload)?;

    let service = PlayerService::new(&state.db);

    let player = service
        .update(params)
        .await?
        .ok_or_else(|| AppError::player_not_found(id))?;

    Ok((StatusCode::OK, Json(player.into_dto())))
}

/// Delete a player.
///
/// # Returns
/// - `200 OK` - Player deleted
/// - `400 Bad Request` - ID is not a positive integer
/// - `404 Not Found` - No player with this ID
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    delete,
    path = "/rest/players/{id}",
    tag = PLAYER_TAG,
    params(
        ("id" = i64, Path, description = "Player ID")
    ),
    responses(
        (status = 200, description = "Successfully deleted player"),
        (status = 400, description = "Invalid player ID", body = ErrorDto),
        (status = 404, description = "Player not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_player(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_player_id(&id)?;

    let service = PlayerService::new(&state.db);

    if service.delete(id).await? {
        Ok(StatusCode::OK)
    } else {
        Err(AppError::player_not_found(id))
    }
}
