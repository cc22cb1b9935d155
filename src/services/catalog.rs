use sqlx::SqlitePool;
use tracing::{debug, info};

use crate::codec::{time, weekdays};
use crate::db::repository::{self, NewAdRow};
use crate::error::AppError;
use crate::models::{Ad, AdListing, GameWithAdCount, NewAdRequest};

/// Games and their ads, with codecs applied at the store boundary.
pub struct CatalogService {
    db: SqlitePool,
}

impl CatalogService {
    pub fn new(db: SqlitePool) -> Self {
        Self { db }
    }

    pub async fn list_games(&self) -> Result<Vec<GameWithAdCount>, AppError> {
        let games = repository::fetch_games_with_ad_count(&self.db).await?;
        Ok(games)
    }

    /// Public listings for one game, newest first. Unknown games have no ads.
    pub async fn list_ads(&self, game_id: &str) -> Result<Vec<AdListing>, AppError> {
        let ads = repository::fetch_ads_by_game(&self.db, game_id).await?;
        debug!("found {} ads for game {}", ads.len(), game_id);
        Ok(ads.into_iter().map(AdListing::from).collect())
    }

    pub async fn list_recent_ads(&self) -> Result<Vec<AdListing>, AppError> {
        let ads = repository::fetch_recent_ads(&self.db).await?;
        Ok(ads.into_iter().map(AdListing::from).collect())
    }

    pub async fn create_ad(&self, game_id: &str, req: NewAdRequest) -> Result<Ad, AppError> {
        let row = encode_ad(game_id, req)?;
        let ad = repository::insert_ad(&self.db, row)
            .await
            .map_err(AppError::from_insert)?;
        info!("created ad {} for game {}", ad.id, ad.game_id);
        Ok(ad)
    }

    pub async fn reveal_contact(&self, ad_id: &str) -> Result<String, AppError> {
        let contact = repository::find_contact_by_ad_id(&self.db, ad_id)
            .await?
            .ok_or(AppError::NotFound)?;
        Ok(contact.discord)
    }
}

fn encode_ad(game_id: &str, req: NewAdRequest) -> Result<NewAdRow, AppError> {
    weekdays::validate(&req.week_days)?;

    Ok(NewAdRow {
        game_id: game_id.to_string(),
        week_days: weekdays::encode(&req.week_days),
        hour_start: time::to_minutes(&req.hour_start)?,
        hour_end: time::to_minutes(&req.hour_end)?,
        name: req.name,
        years_playing: req.years_playing,
        discord: req.discord,
        use_voice_channel: req.use_voice_channel,
    })
}
