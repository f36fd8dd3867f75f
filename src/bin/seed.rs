use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter,
    ActiveValue::{NotSet, Set},
};
use starwars_favorites_api::{
    config::AppConfig,
    db::{OrmConn, create_orm_conn, run_migrations},
    entity::{
        Characters, Planets, Users,
        characters::ActiveModel as CharacterActive,
        planets::ActiveModel as PlanetActive,
        users::{ActiveModel as UserActive, Column as UserCol},
    },
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let config = AppConfig::from_env()?;

    let orm = create_orm_conn(&config.database_url).await?;
    // Ensure migrations are applied.
    run_migrations(&orm).await?;

    let luke = ensure_user(&orm, "luke", "luke@rebellion.org", "tatooine").await?;
    let leia = ensure_user(&orm, "leia", "leia@rebellion.org", "alderaan").await?;
    seed_characters(&orm).await?;
    seed_planets(&orm).await?;

    println!("Seed completed. User IDs: {luke}, {leia}");
    Ok(())
}

async fn ensure_user(
    orm: &OrmConn,
    username: &str,
    email: &str,
    password: &str,
) -> anyhow::Result<i32> {
    if let Some(existing) = Users::find()
        .filter(UserCol::Username.eq(username))
        .one(orm)
        .await?
    {
        return Ok(existing.id);
    }

    let user = UserActive {
        id: NotSet,
        username: Set(username.to_string()),
        email: Set(email.to_string()),
        password: Set(password.to_string()),
        is_active: Set(true),
    }
    .insert(orm)
    .await?;

    println!("Ensured user {username}");
    Ok(user.id)
}

async fn seed_characters(orm: &OrmConn) -> anyhow::Result<()> {
    if Characters::find().count(orm).await? > 0 {
        println!("Characters already seeded");
        return Ok(());
    }

    let characters = vec![
        ("Luke Skywalker", "male"),
        ("Leia Organa", "female"),
        ("R2-D2", "n/a"),
        ("Darth Vader", "male"),
    ];

    for (name, gender) in characters {
        CharacterActive {
            id: NotSet,
            name: Set(name.to_string()),
            gender: Set(gender.to_string()),
        }
        .insert(orm)
        .await?;
    }

    println!("Seeded characters");
    Ok(())
}

async fn seed_planets(orm: &OrmConn) -> anyhow::Result<()> {
    if Planets::find().count(orm).await? > 0 {
        println!("Planets already seeded");
        return Ok(());
    }

    let planets = vec![
        ("Tatooine", "arid"),
        ("Alderaan", "temperate"),
        ("Hoth", "frozen"),
        ("Dagobah", "murky"),
    ];

    for (name, climate) in planets {
        PlanetActive {
            id: NotSet,
            name: Set(name.to_string()),
            climate: Set(climate.to_string()),
        }
        .insert(orm)
        .await?;
    }

    println!("Seeded planets");
    Ok(())
}
