use axum::{Json, Router, extract::State, routing::get};

use crate::{
    error::AppResult, models::Planet, response::Message, routes::params::IdPath,
    services::catalog_service, state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/planets", get(list_planets))
        .route("/planets/{id}", get(get_planet))
}

#[utoipa::path(
    get,
    path = "/planets",
    responses(
        (status = 200, description = "All planets", body = Vec<Planet>),
        (status = 404, description = "No planets", body = Message)
    ),
    tag = "Planets"
)]
pub async fn list_planets(State(state): State<AppState>) -> AppResult<Json<Vec<Planet>>> {
    let planets = catalog_service::list_planets(&state).await?;
    Ok(Json(planets))
}

#[utoipa::path(
    get,
    path = "/planets/{id}",
    params(
        ("id" = i32, Path, description = "Planet ID")
    ),
    responses(
        (status = 200, description = "Get planet", body = Planet),
        (status = 404, description = "Planet not found", body = Message)
    ),
    tag = "Planets"
)]
pub async fn get_planet(
    State(state): State<AppState>,
    IdPath(id): IdPath<i32>,
) -> AppResult<Json<Planet>> {
    let planet = catalog_service::get_planet(&state, id).await?;
    Ok(Json(planet))
}
