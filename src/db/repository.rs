use chrono::{SecondsFormat, Utc};
use sqlx::SqlitePool;
use uuid::Uuid;

use crate::models::{Ad, ContactResponse, Game, GameWithAdCount};

/// Column values for a new ad, already encoded for storage.
#[derive(Debug, Clone)]
pub struct NewAdRow {
    pub game_id: String,
    pub name: String,
    pub years_playing: u32,
    pub discord: String,
    pub week_days: String,
    pub hour_start: u32,
    pub hour_end: u32,
    pub use_voice_channel: bool,
}

pub async fn fetch_games_with_ad_count(db: &SqlitePool) -> Result<Vec<GameWithAdCount>, sqlx::Error> {
    sqlx::query_as::<_, GameWithAdCount>(
        r#"
        SELECT
            games.id,
            games.name,
            games.banner_url,
            COUNT(ads.id) AS ads
        FROM games
        LEFT JOIN ads ON ads.game_id = games.id
        GROUP BY games.id
        ORDER BY games.name ASC
        "#,
    )
    .fetch_all(db)
    .await
}

pub async fn find_game_by_name(db: &SqlitePool, name: &str) -> Result<Option<Game>, sqlx::Error> {
    sqlx::query_as::<_, Game>("SELECT id, name, banner_url FROM games WHERE name = ?")
        .bind(name)
        .fetch_optional(db)
        .await
}

pub async fn insert_game(db: &SqlitePool, name: &str, banner_url: &str) -> Result<Game, sqlx::Error> {
    let id = Uuid::new_v4().to_string();

    sqlx::query("INSERT INTO games (id, name, banner_url) VALUES (?, ?, ?)")
        .bind(&id)
        .bind(name)
        .bind(banner_url)
        .execute(db)
        .await?;

    Ok(Game {
        id,
        name: name.to_string(),
        banner_url: banner_url.to_string(),
    })
}

pub async fn fetch_ads_by_game(db: &SqlitePool, game_id: &str) -> Result<Vec<Ad>, sqlx::Error> {
    sqlx::query_as::<_, Ad>(
        r#"
        SELECT id, game_id, name, years_playing, discord, week_days,
            hour_start, hour_end, use_voice_channel, created_at
        FROM ads
        WHERE game_id = ?
        ORDER BY created_at DESC, rowid DESC
        "#,
    )
    .bind(game_id)
    .fetch_all(db)
    .await
}

pub async fn fetch_recent_ads(db: &SqlitePool) -> Result<Vec<Ad>, sqlx::Error> {
    sqlx::query_as::<_, Ad>(
        r#"
        SELECT id, game_id, name, years_playing, discord, week_days,
            hour_start, hour_end, use_voice_channel, created_at
        FROM ads
        ORDER BY created_at DESC, rowid DESC
        "#,
    )
    .fetch_all(db)
    .await
}

pub async fn insert_ad(db: &SqlitePool, row: NewAdRow) -> Result<Ad, sqlx::Error> {
    let id = Uuid::new_v4().to_string();
    // Fixed precision keeps text order equal to time order.
    let now = Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true);

    sqlx::query(
        r#"
        INSERT INTO ads
            (id, game_id, name, years_playing, discord, week_days,
            hour_start, hour_end, use_voice_channel, created_at)
        VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10)
        "#,
    )
    .bind(&id)
    .bind(&row.game_id)
    .bind(&row.name)
    .bind(row.years_playing)
    .bind(&row.discord)
    .bind(&row.week_days)
    .bind(row.hour_start)
    .bind(row.hour_end)
    .bind(row.use_voice_channel)
    .bind(&now)
    .execute(db)
    .await?;

    Ok(Ad {
        id,
        game_id: row.game_id,
        name: row.name,
        years_playing: row.years_playing,
        discord: row.discord,
        week_days: row.week_days,
        hour_start: row.hour_start,
        hour_end: row.hour_end,
        use_voice_channel: row.use_voice_channel,
        created_at: now,
    })
}

pub async fn find_contact_by_ad_id(
    db: &SqlitePool,
    ad_id: &str,
) -> Result<Option<ContactResponse>, sqlx::Error> {
    sqlx::query_as::<_, ContactResponse>("SELECT discord FROM ads WHERE id = ?")
        .bind(ad_id)
        .fetch_optional(db)
        .await
}
