pub use sea_orm_migration::prelude::*;

mod m20261018_000001_create_user;
mod m20261018_000002_create_character;
mod m20261018_000003_create_planet;
mod m20261018_000004_create_favorites;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20261018_000001_create_user::Migration),
            Box::new(m20261018_000002_create_character::Migration),
            Box::new(m20261018_000003_create_planet::Migration),
            Box::new(m20261018_000004_create_favorites::Migration),
        ]
    }
}
