use utoipa::{OpenApi, openapi::OpenApi as OpenApiSpec};
use utoipa_scalar::{Scalar, Servable};

use crate::{
    models::{Character, Favorite, Planet, User},
    response::Message,
    routes::{characters, favorites, health, planets, users},
};

#[derive(OpenApi)]
#[openapi(
    paths(
        health::sitemap,
        health::health_check,
        users::list_users,
        characters::list_characters,
        characters::get_character,
        planets::list_planets,
        planets::get_planet,
        favorites::add_planet_favorite,
        favorites::add_character_favorite,
        favorites::list_user_favorites,
        favorites::remove_favorite
    ),
    components(
        schemas(
            User,
            Character,
            Planet,
            Favorite,
            Message,
            health::HealthData,
            health::Sitemap
        )
    ),
    tags(
        (name = "Health", description = "Health check and sitemap"),
        (name = "Users", description = "User listing"),
        (name = "Characters", description = "Character catalog"),
        (name = "Planets", description = "Planet catalog"),
        (name = "Favorites", description = "Favorite endpoints"),
    )
)]
pub struct ApiDoc;

pub const DOCS_PATH: &str = "/docs";

pub fn scalar_docs() -> Scalar<OpenApiSpec> {
    Scalar::with_url(DOCS_PATH, ApiDoc::openapi())
}
