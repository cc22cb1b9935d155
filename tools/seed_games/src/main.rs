use std::env;

use duo_backend::db::{MIGRATOR, repository};
use serde::Deserialize;
use sqlx::sqlite::SqlitePoolOptions;

const DEFAULT_GAMES_FILE: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/games.json");

fn is_dry_run() -> bool {
    !env::args().any(|a| a == "--apply")
}

fn games_file() -> String {
    env::args()
        .skip(1)
        .find(|a| !a.starts_with("--"))
        .unwrap_or_else(|| DEFAULT_GAMES_FILE.to_string())
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SeedGame {
    name: String,
    banner_url: String,
}

fn load_games(path: &str) -> Result<Vec<SeedGame>, Box<dyn std::error::Error>> {
    Ok(serde_json::from_str(&std::fs::read_to_string(path)?)?)
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();

    let database_url =
        env::var("DATABASE_URL").unwrap_or_else(|_| "sqlite://duo.db?mode=rwc".to_string());
    let path = games_file();

    let games = load_games(&path)?;

    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect(&database_url)
        .await?;
    MIGRATOR.run(&pool).await?;

    let dry_run = is_dry_run();
    let mut inserted = 0;

    for game in &games {
        if repository::find_game_by_name(&pool, &game.name).await?.is_some() {
            continue;
        }

        if dry_run {
            println!("[DRY RUN] Would insert game {}", game.name);
        } else {
            let stored = repository::insert_game(&pool, &game.name, &game.banner_url).await?;
            println!("Inserted game {} -> {}", stored.name, stored.id);
        }

        inserted += 1;
    }

    println!("Games inserted: {} / {} (from {})", inserted, games.len(), path);

    Ok(())
}
