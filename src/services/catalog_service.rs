use sea_orm::{EntityTrait, QueryOrder};

use crate::{
    entity::{
        characters::{Column as CharCol, Entity as Characters},
        planets::{Column as PlanetCol, Entity as Planets},
    },
    error::{AppError, AppResult},
    models::{Character, Planet},
    state::AppState,
};

pub async fn list_characters(state: &AppState) -> AppResult<Vec<Character>> {
    let characters: Vec<Character> = Characters::find()
        .order_by_asc(CharCol::Id)
        .all(&state.orm)
        .await?
        .into_iter()
        .map(Character::from)
        .collect();

    if characters.is_empty() {
        return Err(AppError::NotFound("No existen personajes"));
    }
    Ok(characters)
}

pub async fn get_character(state: &AppState, id: i32) -> AppResult<Character> {
    Characters::find_by_id(id)
        .one(&state.orm)
        .await?
        .map(Character::from)
        .ok_or(AppError::NotFound("No existe el personaje"))
}

pub async fn list_planets(state: &AppState) -> AppResult<Vec<Planet>> {
    let planets: Vec<Planet> = Planets::find()
        .order_by_asc(PlanetCol::Id)
        .all(&state.orm)
        .await?
        .into_iter()
        .map(Planet::from)
        .collect();

    if planets.is_empty() {
        return Err(AppError::NotFound("No existen planetas"));
    }
    Ok(planets)
}

pub async fn get_planet(state: &AppState, id: i32) -> AppResult<Planet> {
    Planets::find_by_id(id)
        .one(&state.orm)
        .await?
        .map(Planet::from)
        .ok_or(AppError::NotFound("No existe el planeta"))
}
