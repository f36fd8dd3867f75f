use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, QueryOrder,
    ActiveValue::{NotSet, Set},
};

use crate::{
    entity::{
        Characters, Planets, Users,
        favorites::{ActiveModel as FavoriteActive, Column as FavCol, Entity as Favorites},
    },
    error::{AppError, AppResult},
    middleware::current_user::CurrentUser,
    models::Favorite,
    state::AppState,
};

/// What a new favorite points at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FavoriteTarget {
    Character(i32),
    Planet(i32),
}

pub async fn add_favorite(
    state: &AppState,
    user: &CurrentUser,
    target: FavoriteTarget,
) -> AppResult<Favorite> {
    let (character_id, planet_id) = match target {
        FavoriteTarget::Character(id) => {
            Characters::find_by_id(id)
                .one(&state.orm)
                .await?
                .ok_or(AppError::NotFound("No existe el personaje"))?;
            (Some(id), None)
        }
        FavoriteTarget::Planet(id) => {
            Planets::find_by_id(id)
                .one(&state.orm)
                .await?
                .ok_or(AppError::NotFound("No existe el planeta"))?;
            (None, Some(id))
        }
    };

    Users::find_by_id(user.user_id)
        .one(&state.orm)
        .await?
        .ok_or(AppError::NotFound("No existe el usuario"))?;

    let favorite = FavoriteActive {
        id: NotSet,
        user_id: Set(user.user_id),
        character_id: Set(character_id),
        planet_id: Set(planet_id),
    }
    .insert(&state.orm)
    .await?;

    tracing::info!(
        favorite_id = favorite.id,
        user_id = favorite.user_id,
        ?target,
        "favorite created"
    );

    Ok(favorite.into())
}

/// Favorites of `user_id` in insertion order. An empty result is a 404.
pub async fn list_user_favorites(state: &AppState, user_id: i32) -> AppResult<Vec<Favorite>> {
    let favorites: Vec<Favorite> = Favorites::find()
        .filter(FavCol::UserId.eq(user_id))
        .order_by_asc(FavCol::Id)
        .all(&state.orm)
        .await?
        .into_iter()
        .map(Favorite::from)
        .collect();

    if favorites.is_empty() {
        return Err(AppError::NotFound("No tiene favoritos"));
    }
    Ok(favorites)
}

pub async fn remove_favorite(state: &AppState, id: i32) -> AppResult<()> {
    let result = Favorites::delete_by_id(id).exec(&state.orm).await?;

    if result.rows_affected == 0 {
        return Err(AppError::NotFound("No existe el favorito"));
    }

    tracing::info!(favorite_id = id, "favorite removed");
    Ok(())
}
