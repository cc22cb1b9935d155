use axum::extract::{FromRequest, Path};
use axum::{Json, Router, extract::State, http::StatusCode, routing::get};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::error::AppError;
use crate::models::*;
use crate::services::CatalogService;
use crate::state::AppState;

/// `Json` whose rejections render as `AppError` bodies.
#[derive(FromRequest)]
#[from_request(via(Json), rejection(AppError))]
pub struct AppJson<T>(pub T);

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/games", get(list_games))
        .route("/games/{id}/ads", get(list_ads).post(create_ad))
        .route("/ads", get(list_recent_ads))
        .route("/ads/{id}/discord", get(reveal_contact))
        .with_state(state)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}

async fn health(State(state): State<AppState>) -> Result<StatusCode, AppError> {
    sqlx::query("select 1").execute(&state.db).await?;
    Ok(StatusCode::OK)
}

async fn list_games(State(state): State<AppState>) -> Result<Json<Vec<GameWithAdCount>>, AppError> {
    let games = CatalogService::new(state.db).list_games().await?;
    Ok(Json(games))
}

async fn list_ads(
    State(state): State<AppState>,
    Path(game_id): Path<String>,
) -> Result<Json<Vec<AdListing>>, AppError> {
    let ads = CatalogService::new(state.db).list_ads(&game_id).await?;
    Ok(Json(ads))
}

async fn create_ad(
    State(state): State<AppState>,
    Path(game_id): Path<String>,
    AppJson(req): AppJson<NewAdRequest>,
) -> Result<(StatusCode, Json<Ad>), AppError> {
    let ad = CatalogService::new(state.db).create_ad(&game_id, req).await?;
    Ok((StatusCode::CREATED, Json(ad)))
}

async fn list_recent_ads(State(state): State<AppState>) -> Result<Json<Vec<AdListing>>, AppError> {
    let ads = CatalogService::new(state.db).list_recent_ads().await?;
    Ok(Json(ads))
}

async fn reveal_contact(
    State(state): State<AppState>,
    Path(ad_id): Path<String>,
) -> Result<Json<ContactResponse>, AppError> {
    let discord = CatalogService::new(state.db).reveal_contact(&ad_id).await?;
    Ok(Json(ContactResponse { discord }))
}
