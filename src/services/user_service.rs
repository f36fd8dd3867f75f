use sea_orm::{EntityTrait, QueryOrder};

use crate::{
    entity::users::{Column as UserCol, Entity as Users},
    error::{AppError, AppResult},
    models::User,
    state::AppState,
};

pub async fn list_users(state: &AppState) -> AppResult<Vec<User>> {
    let users: Vec<User> = Users::find()
        .order_by_asc(UserCol::Id)
        .all(&state.orm)
        .await?
        .into_iter()
        .map(User::from)
        .collect();

    if users.is_empty() {
        return Err(AppError::NotFound("No existen usuarios"));
    }
    Ok(users)
}
