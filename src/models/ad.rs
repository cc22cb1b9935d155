use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::codec::{time, weekdays};

/// An ad as stored: weekdays comma-joined, hours as minutes since midnight.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Ad {
    pub id: String,
    pub game_id: String,
    pub name: String,
    pub years_playing: u32,
    pub discord: String,
    pub week_days: String,
    pub hour_start: u32,
    pub hour_end: u32,
    pub use_voice_channel: bool,
    pub created_at: String,
}

/// Public projection of an ad. Never carries the contact handle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdListing {
    pub id: String,
    pub name: String,
    pub week_days: Vec<String>,
    pub use_voice_channel: bool,
    pub years_playing: u32,
    pub hour_start: String,
    pub hour_end: String,
}

impl From<Ad> for AdListing {
    fn from(ad: Ad) -> Self {
        Self {
            id: ad.id,
            name: ad.name,
            week_days: weekdays::decode(&ad.week_days),
            use_voice_channel: ad.use_voice_channel,
            years_playing: ad.years_playing,
            hour_start: time::to_time_string(ad.hour_start),
            hour_end: time::to_time_string(ad.hour_end),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewAdRequest {
    pub name: String,
    pub years_playing: u32,
    pub discord: String,
    pub week_days: Vec<u8>,
    pub hour_start: String,
    pub hour_end: String,
    pub use_voice_channel: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct ContactResponse {
    pub discord: String,
}
