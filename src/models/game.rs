use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Game {
    pub id: String,
    pub name: String,
    pub banner_url: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct GameWithAdCount {
    #[sqlx(flatten)]
    #[serde(flatten)]
    pub game: Game,
    #[sqlx(flatten)]
    #[serde(rename = "_count")]
    pub count: AdCount,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, FromRow)]
pub struct AdCount {
    pub ads: i64,
}
