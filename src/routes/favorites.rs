use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    routing::{delete, get, post},
};

use crate::{
    error::AppResult,
    middleware::current_user::CurrentUser,
    models::Favorite,
    response::Message,
    routes::params::IdPath,
    services::favorite_service::{self, FavoriteTarget},
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/favorites/planets/{planet_id}", post(add_planet_favorite))
        .route(
            "/favorites/characters/{character_id}",
            post(add_character_favorite),
        )
        .route("/favorites/user/{id}", get(list_user_favorites))
        .route("/favorites/{id}", delete(remove_favorite))
}

#[utoipa::path(
    post,
    path = "/favorites/planets/{planet_id}",
    params(
        ("planet_id" = i32, Path, description = "Planet ID"),
        ("X-User-Id" = Option<i32>, Header, description = "Owner of the favorite, defaults to the configured user")
    ),
    responses(
        (status = 201, description = "Favorite created", body = Message),
        (status = 404, description = "Planet or user not found", body = Message)
    ),
    tag = "Favorites"
)]
pub async fn add_planet_favorite(
    State(state): State<AppState>,
    user: CurrentUser,
    IdPath(planet_id): IdPath<i32>,
) -> AppResult<(StatusCode, Json<Message>)> {
    favorite_service::add_favorite(&state, &user, FavoriteTarget::Planet(planet_id)).await?;
    Ok((
        StatusCode::CREATED,
        Json(Message::new("Nuevo favorito creado")),
    ))
}

#[utoipa::path(
    post,
    path = "/favorites/characters/{character_id}",
    params(
        ("character_id" = i32, Path, description = "Character ID"),
        ("X-User-Id" = Option<i32>, Header, description = "Owner of the favorite, defaults to the configured user")
    ),
    responses(
        (status = 201, description = "Favorite created", body = Message),
        (status = 404, description = "Character or user not found", body = Message)
    ),
    tag = "Favorites"
)]
pub async fn add_character_favorite(
    State(state): State<AppState>,
    user: CurrentUser,
    IdPath(character_id): IdPath<i32>,
) -> AppResult<(StatusCode, Json<Message>)> {
    favorite_service::add_favorite(&state, &user, FavoriteTarget::Character(character_id))
        .await?;
    Ok((
        StatusCode::CREATED,
        Json(Message::new("Nuevo favorito creado")),
    ))
}

#[utoipa::path(
    get,
    path = "/favorites/user/{id}",
    params(
        ("id" = i32, Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "Favorites of the user, oldest first", body = Vec<Favorite>),
        (status = 404, description = "User has no favorites", body = Message)
    ),
    tag = "Favorites"
)]
pub async fn list_user_favorites(
    State(state): State<AppState>,
    IdPath(user_id): IdPath<i32>,
) -> AppResult<Json<Vec<Favorite>>> {
    let favorites = favorite_service::list_user_favorites(&state, user_id).await?;
    Ok(Json(favorites))
}

#[utoipa::path(
    delete,
    path = "/favorites/{id}",
    params(
        ("id" = i32, Path, description = "Favorite ID")
    ),
    responses(
        (status = 204, description = "Favorito eliminado"),
        (status = 404, description = "Favorite not found", body = Message)
    ),
    tag = "Favorites"
)]
pub async fn remove_favorite(
    State(state): State<AppState>,
    IdPath(id): IdPath<i32>,
) -> AppResult<StatusCode> {
    favorite_service::remove_favorite(&state, id).await?;
    Ok(StatusCode::NO_CONTENT)
}
