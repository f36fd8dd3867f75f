use axum::{Json, Router, extract::State, routing::get};

use crate::{
    error::AppResult, models::User, response::Message, services::user_service,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new().route("/user", get(list_users))
}

#[utoipa::path(
    get,
    path = "/user",
    responses(
        (status = 200, description = "All users, without passwords", body = Vec<User>),
        (status = 404, description = "No users", body = Message)
    ),
    tag = "Users"
)]
pub async fn list_users(State(state): State<AppState>) -> AppResult<Json<Vec<User>>> {
    let users = user_service::list_users(&state).await?;
    Ok(Json(users))
}
