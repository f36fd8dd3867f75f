mod common;

use axum::http::{Method, StatusCode};
use sea_orm::{EntityTrait, PaginatorTrait};
use serde_json::json;
use starwars_favorites_api::entity::Favorites;

use common::{
    DEFAULT_USER_ID, app, insert_character, insert_planet, insert_user, send, send_as,
    setup_state,
};

// Planet stored directly -> favorite it -> it shows up for the default user.
#[tokio::test]
async fn favorite_planet_shows_up_for_default_user() -> anyhow::Result<()> {
    let state = setup_state().await?;
    insert_user(&state, DEFAULT_USER_ID, "leia").await?;
    let tatooine = insert_planet(&state, "Tatooine", "arid").await?;
    assert_eq!(tatooine.id, 1);
    let app = app(&state);

    let (status, body) = send(&app, Method::POST, "/favorites/planets/1").await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body, json!({ "msg": "Nuevo favorito creado" }));

    let (status, body) = send(&app, Method::GET, "/favorites/user/2").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!([{ "id": 1, "user_id": 2, "character_id": null, "planet_id": 1 }])
    );
    Ok(())
}

#[tokio::test]
async fn missing_planet_creates_nothing() -> anyhow::Result<()> {
    let state = setup_state().await?;
    insert_user(&state, DEFAULT_USER_ID, "leia").await?;

    let (status, body) = send(&app(&state), Method::POST, "/favorites/planets/7").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({ "msg": "No existe el planeta" }));
    assert_eq!(Favorites::find().count(&state.orm).await?, 0);
    Ok(())
}

#[tokio::test]
async fn missing_character_creates_nothing() -> anyhow::Result<()> {
    let state = setup_state().await?;
    insert_user(&state, DEFAULT_USER_ID, "leia").await?;

    let (status, body) = send(&app(&state), Method::POST, "/favorites/characters/3").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({ "msg": "No existe el personaje" }));
    assert_eq!(Favorites::find().count(&state.orm).await?, 0);
    Ok(())
}

#[tokio::test]
async fn favorites_are_listed_in_insertion_order_with_duplicates() -> anyhow::Result<()> {
    let state = setup_state().await?;
    insert_user(&state, DEFAULT_USER_ID, "leia").await?;
    let vader = insert_character(&state, "Darth Vader", "male").await?;
    let hoth = insert_planet(&state, "Hoth", "frozen").await?;
    let app = app(&state);

    for uri in [
        format!("/favorites/characters/{}", vader.id),
        format!("/favorites/planets/{}", hoth.id),
        format!("/favorites/characters/{}", vader.id),
    ] {
        let (status, _) = send(&app, Method::POST, &uri).await;
        assert_eq!(status, StatusCode::CREATED);
    }

    let (status, body) = send(&app, Method::GET, "/favorites/user/2").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!([
            { "id": 1, "user_id": 2, "character_id": vader.id, "planet_id": null },
            { "id": 2, "user_id": 2, "character_id": null, "planet_id": hoth.id },
            { "id": 3, "user_id": 2, "character_id": vader.id, "planet_id": null },
        ])
    );
    Ok(())
}

#[tokio::test]
async fn user_without_favorites_is_not_found() -> anyhow::Result<()> {
    let state = setup_state().await?;
    insert_user(&state, DEFAULT_USER_ID, "leia").await?;

    let (status, body) = send(&app(&state), Method::GET, "/favorites/user/2").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({ "msg": "No tiene favoritos" }));
    Ok(())
}

#[tokio::test]
async fn delete_is_not_idempotent() -> anyhow::Result<()> {
    let state = setup_state().await?;
    insert_user(&state, DEFAULT_USER_ID, "leia").await?;
    let hoth = insert_planet(&state, "Hoth", "frozen").await?;
    let app = app(&state);

    let (status, _) = send(&app, Method::POST, &format!("/favorites/planets/{}", hoth.id)).await;
    assert_eq!(status, StatusCode::CREATED);

    let (status, body) = send(&app, Method::DELETE, "/favorites/1").await;
    assert_eq!(status, StatusCode::NO_CONTENT);
    assert!(body.is_null(), "204 must not carry a body, got {body}");
    assert_eq!(Favorites::find().count(&state.orm).await?, 0);

    let (status, body) = send(&app, Method::DELETE, "/favorites/1").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({ "msg": "No existe el favorito" }));
    Ok(())
}

#[tokio::test]
async fn user_header_selects_the_owner() -> anyhow::Result<()> {
    let state = setup_state().await?;
    insert_user(&state, 1, "luke").await?;
    insert_user(&state, DEFAULT_USER_ID, "leia").await?;
    let dagobah = insert_planet(&state, "Dagobah", "murky").await?;
    let app = app(&state);

    let uri = format!("/favorites/planets/{}", dagobah.id);
    let (status, _) = send_as(&app, Method::POST, &uri, Some("1")).await;
    assert_eq!(status, StatusCode::CREATED);

    let (status, body) = send(&app, Method::GET, "/favorites/user/1").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body[0]["user_id"], 1);
    assert_eq!(body[0]["planet_id"], dagobah.id);

    let (status, _) = send(&app, Method::GET, "/favorites/user/2").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    Ok(())
}

#[tokio::test]
async fn malformed_user_header_is_rejected() -> anyhow::Result<()> {
    let state = setup_state().await?;
    let hoth = insert_planet(&state, "Hoth", "frozen").await?;

    let uri = format!("/favorites/planets/{}", hoth.id);
    let (status, body) = send_as(&app(&state), Method::POST, &uri, Some("leia")).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({ "msg": "Cabecera X-User-Id inválida" }));
    Ok(())
}

#[tokio::test]
async fn favorite_for_unknown_user_is_not_found() -> anyhow::Result<()> {
    let state = setup_state().await?;
    let hoth = insert_planet(&state, "Hoth", "frozen").await?;

    let uri = format!("/favorites/planets/{}", hoth.id);
    let (status, body) = send(&app(&state), Method::POST, &uri).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({ "msg": "No existe el usuario" }));
    assert_eq!(Favorites::find().count(&state.orm).await?, 0);
    Ok(())
}
