use axum::Router;
use tower_http::cors::CorsLayer;
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::{
    model::{
        api::ErrorDto,
        player::{CreatePlayerDto, PlayerDto, PlayerOrder, Profession, Race, UpdatePlayerDto},
    },
    server::{controller::player, state::AppState},
};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Player Registry API",
        version = "0.1.0"
    ),
    tags(
        (name = "player", description = "Player management endpoints")
    ),
    components(schemas(
        PlayerDto,
        CreatePlayerDto,
        UpdatePlayerDto,
        Race,
        Profession,
        PlayerOrder,
        ErrorDto
    ))
)]
pub struct ApiDoc;

/// Player REST routes, collected together with their OpenAPI operations.
pub fn router() -> OpenApiRouter<AppState> {
    OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(player::get_players, player::create_player))
        .routes(routes!(player::get_players_count))
        .routes(routes!(
            player::get_player,
            player::update_player,
            player::delete_player
        ))
}

/// Builds the complete application: REST routes, Swagger UI and CORS.
pub fn app(state: AppState) -> Router {
    let (router, api) = router().split_for_parts();

    router
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", api))
        .layer(CorsLayer::permissive())
        .with_state(state)
}
