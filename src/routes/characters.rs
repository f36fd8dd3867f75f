use axum::{Json, Router, extract::State, routing::get};

use crate::{
    error::AppResult, models::Character, response::Message, routes::params::IdPath,
    services::catalog_service, state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/characters", get(list_characters))
        .route("/characters/{id}", get(get_character))
}

#[utoipa::path(
    get,
    path = "/characters",
    responses(
        (status = 200, description = "All characters", body = Vec<Character>),
        (status = 404, description = "No characters", body = Message)
    ),
    tag = "Characters"
)]
pub async fn list_characters(State(state): State<AppState>) -> AppResult<Json<Vec<Character>>> {
    let characters = catalog_service::list_characters(&state).await?;
    Ok(Json(characters))
}

#[utoipa::path(
    get,
    path = "/characters/{id}",
    params(
        ("id" = i32, Path, description = "Character ID")
    ),
    responses(
        (status = 200, description = "Get character", body = Character),
        (status = 404, description = "Character not found", body = Message)
    ),
    tag = "Characters"
)]
pub async fn get_character(
    State(state): State<AppState>,
    IdPath(id): IdPath<i32>,
) -> AppResult<Json<Character>> {
    let character = catalog_service::get_character(&state, id).await?;
    Ok(Json(character))
}
