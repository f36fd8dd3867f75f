use axum::Json;
use serde::{Deserialize, Serialize};
use utoipa::{OpenApi, ToSchema};

use crate::routes::doc::{ApiDoc, DOCS_PATH};

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct HealthData {
    pub status: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct Sitemap {
    pub endpoints: Vec<String>,
}

#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "OK", body = HealthData),
    ),
    tag = "Health"
)]
pub async fn health_check() -> Json<HealthData> {
    Json(HealthData {
        status: "ok".to_string(),
    })
}

#[utoipa::path(
    get,
    path = "/",
    responses(
        (status = 200, description = "Every documented endpoint", body = Sitemap),
    ),
    tag = "Health"
)]
pub async fn sitemap() -> Json<Sitemap> {
    // The docs page is served outside the OpenAPI document itself.
    let mut endpoints: Vec<String> = ApiDoc::openapi().paths.paths.into_keys().collect();
    endpoints.push(DOCS_PATH.to_string());
    Json(Sitemap { endpoints })
}
