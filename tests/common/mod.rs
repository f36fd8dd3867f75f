#![allow(dead_code)]

use axum::{
    Router,
    body::{Body, to_bytes},
    http::{Method, Request, StatusCode},
    response::Response,
};
use sea_orm::{
    ActiveModelTrait, ConnectOptions, Database,
    ActiveValue::{NotSet, Set},
};
use serde_json::Value;
use starwars_favorites_api::{
    db::run_migrations,
    entity::{characters, planets, users},
    middleware::current_user::USER_ID_HEADER,
    routes::{create_app, create_service},
    state::AppState,
};
use tower::ServiceExt;

pub const DEFAULT_USER_ID: i32 = 2;

// A single pooled connection keeps every query on the same in-memory database.
pub async fn setup_state() -> anyhow::Result<AppState> {
    let mut options = ConnectOptions::new("sqlite::memory:");
    options.max_connections(1).min_connections(1);
    let orm = Database::connect(options).await?;
    run_migrations(&orm).await?;

    Ok(AppState {
        orm,
        default_user_id: DEFAULT_USER_ID,
    })
}

pub fn app(state: &AppState) -> Router {
    create_app(state.clone())
}

pub async fn insert_user(state: &AppState, id: i32, username: &str) -> anyhow::Result<users::Model> {
    let user = users::ActiveModel {
        id: Set(id),
        username: Set(username.to_string()),
        email: Set(format!("{username}@rebellion.org")),
        password: Set("secret".into()),
        is_active: Set(true),
    }
    .insert(&state.orm)
    .await?;
    Ok(user)
}

pub async fn insert_planet(
    state: &AppState,
    name: &str,
    climate: &str,
) -> anyhow::Result<planets::Model> {
    let planet = planets::ActiveModel {
        id: NotSet,
        name: Set(name.to_string()),
        climate: Set(climate.to_string()),
    }
    .insert(&state.orm)
    .await?;
    Ok(planet)
}

pub async fn insert_character(
    state: &AppState,
    name: &str,
    gender: &str,
) -> anyhow::Result<characters::Model> {
    let character = characters::ActiveModel {
        id: NotSet,
        name: Set(name.to_string()),
        gender: Set(gender.to_string()),
    }
    .insert(&state.orm)
    .await?;
    Ok(character)
}

pub async fn send(app: &Router, method: Method, uri: &str) -> (StatusCode, Value) {
    send_as(app, method, uri, None).await
}

pub async fn send_as(
    app: &Router,
    method: Method,
    uri: &str,
    user_id: Option<&str>,
) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(user_id) = user_id {
        builder = builder.header(USER_ID_HEADER, user_id);
    }
    let response = app
        .clone()
        .oneshot(builder.body(Body::empty()).unwrap())
        .await
        .unwrap();
    read_json(response).await
}

/// Like [`send`], but through the trailing-slash normalizing service.
pub async fn send_normalized(state: &AppState, method: Method, uri: &str) -> (StatusCode, Value) {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    let response = create_service(state.clone()).oneshot(request).await.unwrap();
    read_json(response).await
}

pub async fn read_json(response: Response) -> (StatusCode, Value) {
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, body)
}
