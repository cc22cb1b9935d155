use duo_backend::db::{MIGRATOR, repository};
use duo_backend::db::repository::NewAdRow;
use sqlx::SqlitePool;
use sqlx::sqlite::SqlitePoolOptions;

async fn setup_db() -> SqlitePool {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect("sqlite::memory:")
        .await
        .expect("Failed to create database");

    MIGRATOR.run(&pool).await.expect("Failed to run migrations");
    pool
}

fn ad_row(game_id: &str, name: &str) -> NewAdRow {
    NewAdRow {
        game_id: game_id.to_string(),
        name: name.to_string(),
        years_playing: 2,
        discord: format!("{}#0001", name),
        week_days: "1,5".to_string(),
        hour_start: 600,
        hour_end: 720,
        use_voice_channel: false,
    }
}

#[tokio::test]
async fn test_games_are_listed_with_ad_counts() {
    let db = setup_db().await;

    let valorant = repository::insert_game(&db, "Valorant", "https://img/valorant.png")
        .await
        .expect("Failed to insert game");
    let dota = repository::insert_game(&db, "Dota 2", "https://img/dota.png")
        .await
        .expect("Failed to insert game");

    repository::insert_ad(&db, ad_row(&valorant.id, "one")).await.unwrap();
    repository::insert_ad(&db, ad_row(&valorant.id, "two")).await.unwrap();

    let games = repository::fetch_games_with_ad_count(&db).await.unwrap();
    assert_eq!(games.len(), 2);

    // Ordered by name
    assert_eq!(games[0].game.id, dota.id);
    assert_eq!(games[0].count.ads, 0);
    assert_eq!(games[1].game.id, valorant.id);
    assert_eq!(games[1].game.banner_url, "https://img/valorant.png");
    assert_eq!(games[1].count.ads, 2);
}

#[tokio::test]
async fn test_ads_come_back_newest_first() {
    let db = setup_db().await;
    let game = repository::insert_game(&db, "League of Legends", "lol.png").await.unwrap();
    let other = repository::insert_game(&db, "CS2", "cs2.png").await.unwrap();

    let first = repository::insert_ad(&db, ad_row(&game.id, "first")).await.unwrap();
    let second = repository::insert_ad(&db, ad_row(&game.id, "second")).await.unwrap();
    let elsewhere = repository::insert_ad(&db, ad_row(&other.id, "elsewhere")).await.unwrap();

    let ads = repository::fetch_ads_by_game(&db, &game.id).await.unwrap();
    let ids: Vec<&str> = ads.iter().map(|a| a.id.as_str()).collect();
    assert_eq!(ids, vec![second.id.as_str(), first.id.as_str()]);

    let recent = repository::fetch_recent_ads(&db).await.unwrap();
    assert_eq!(recent.len(), 3);
    assert_eq!(recent[0].id, elsewhere.id);
}

#[tokio::test]
async fn test_stored_ad_keeps_encoded_columns() {
    let db = setup_db().await;
    let game = repository::insert_game(&db, "Apex Legends", "apex.png").await.unwrap();

    let created = repository::insert_ad(&db, ad_row(&game.id, "stored")).await.unwrap();
    let stored = repository::fetch_ads_by_game(&db, &game.id).await.unwrap();

    assert_eq!(stored.len(), 1);
    assert_eq!(stored[0].id, created.id);
    assert_eq!(stored[0].week_days, "1,5");
    assert_eq!(stored[0].hour_start, 600);
    assert_eq!(stored[0].hour_end, 720);
    assert!(!stored[0].use_voice_channel);
    assert_eq!(stored[0].created_at, created.created_at);
}

#[tokio::test]
async fn test_unknown_game_has_no_ads() {
    let db = setup_db().await;
    let ads = repository::fetch_ads_by_game(&db, "does-not-exist").await.unwrap();
    assert!(ads.is_empty());
}

#[tokio::test]
async fn test_insert_ad_for_unknown_game_violates_foreign_key() {
    let db = setup_db().await;
    let err = repository::insert_ad(&db, ad_row("missing", "orphan"))
        .await
        .expect_err("Orphan ad should be rejected");

    match err {
        sqlx::Error::Database(db_err) => assert!(db_err.is_foreign_key_violation()),
        other => panic!("unexpected error: {:?}", other),
    }
}

#[tokio::test]
async fn test_contact_lookup() {
    let db = setup_db().await;
    let game = repository::insert_game(&db, "Fortnite", "fortnite.png").await.unwrap();
    let ad = repository::insert_ad(&db, ad_row(&game.id, "caller")).await.unwrap();

    let contact = repository::find_contact_by_ad_id(&db, &ad.id).await.unwrap();
    assert_eq!(contact.map(|c| c.discord), Some("caller#0001".to_string()));

    let missing = repository::find_contact_by_ad_id(&db, "unknown-id").await.unwrap();
    assert!(missing.is_none());
}

#[tokio::test]
async fn test_find_game_by_name() {
    let db = setup_db().await;
    let game = repository::insert_game(&db, "World of Warcraft", "wow.png").await.unwrap();

    let found = repository::find_game_by_name(&db, "World of Warcraft").await.unwrap();
    assert_eq!(found.map(|g| g.id), Some(game.id));
    assert!(repository::find_game_by_name(&db, "Warcraft").await.unwrap().is_none());
}
