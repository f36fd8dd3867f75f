use axum::{
    Json, Router,
    http::{StatusCode, Uri},
    routing::get,
};
use tower::Layer;
use tower_http::{
    cors::CorsLayer,
    normalize_path::{NormalizePath, NormalizePathLayer},
};

use crate::{response::Message, state::AppState};

pub mod characters;
pub mod doc;
pub mod favorites;
pub mod health;
pub mod params;
pub mod planets;
pub mod users;

// Build the API router without binding state; it will be provided at the top level.
pub fn create_api_router() -> Router<AppState> {
    Router::new()
        .merge(users::router())
        .merge(characters::router())
        .merge(planets::router())
        .merge(favorites::router())
}

/// Full application: API routes, sitemap, health, docs and the JSON 404 fallback.
pub fn create_app(state: AppState) -> Router {
    Router::new()
        .route("/", get(health::sitemap))
        .route("/health", get(health::health_check))
        .merge(create_api_router())
        .merge(doc::scalar_docs())
        .fallback(not_found)
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// [`create_app`] behind trailing-slash normalization.
pub fn create_service(state: AppState) -> NormalizePath<Router> {
    normalize_trailing_slash(create_app(state))
}

/// Wrap a finished router so `/planets/` resolves like `/planets`.
/// Normalization has to run before routing, hence outside the `Router`.
pub fn normalize_trailing_slash(app: Router) -> NormalizePath<Router> {
    NormalizePathLayer::trim_trailing_slash().layer(app)
}

async fn not_found(uri: Uri) -> (StatusCode, Json<Message>) {
    tracing::debug!(path = %uri.path(), "no route matched");
    (StatusCode::NOT_FOUND, Json(Message::new("Ruta no encontrada")))
}
