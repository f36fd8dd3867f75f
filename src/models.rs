use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::entity::{characters, favorites, planets, users};

/// Public projection of a user. The password column is never serialized.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct User {
    pub id: i32,
    pub email: String,
    pub username: String,
    pub is_active: bool,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct Character {
    pub id: i32,
    pub name: String,
    pub gender: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct Planet {
    pub id: i32,
    pub name: String,
    pub climate: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct Favorite {
    pub id: i32,
    pub user_id: i32,
    pub character_id: Option<i32>,
    pub planet_id: Option<i32>,
}

impl From<users::Model> for User {
    fn from(model: users::Model) -> Self {
        Self {
            id: model.id,
            email: model.email,
            username: model.username,
            is_active: model.is_active,
        }
    }
}

impl From<characters::Model> for Character {
    fn from(model: characters::Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            gender: model.gender,
        }
    }
}

impl From<planets::Model> for Planet {
    fn from(model: planets::Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            climate: model.climate,
        }
    }
}

impl From<favorites::Model> for Favorite {
    fn from(model: favorites::Model) -> Self {
        Self {
            id: model.id,
            user_id: model.user_id,
            character_id: model.character_id,
            planet_id: model.planet_id,
        }
    }
}
