//! Route handlers. Each one maps to exactly one client call.
//!
//! Numeric query parameters are parsed permissively: anything that is not a
//! valid `u32` falls back to the default. The photo id in the path is strict.

use std::collections::HashMap;
use std::sync::Arc;

use axum::{
    extract::{rejection::PathRejection, Path, Query, State},
    Json,
};
use pexels_core::{
    ApiError, CuratedResult, PexelsClient, Photo, PopularVideos, SearchResult, Video,
    VideoSearchResult,
};
use serde::{Deserialize, Serialize};

use crate::error::AppError;

pub type AppState = Arc<PexelsClient>;
type Params = HashMap<String, String>;

pub const DEFAULT_QUERY: &str = "nature";
pub const DEFAULT_PAGE: u32 = 1;
pub const DEFAULT_PER_PAGE: u32 = 10;

const INFO_MESSAGE: &str = "Pexels API Client";

#[derive(Debug, Serialize, Deserialize)]
pub struct InfoResponse {
    pub remaining_requests: u32,
    pub message: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
}

/// `query` defaults only when absent; an empty value is forwarded as is.
fn text_param(params: &Params, key: &str, default: &str) -> String {
    params
        .get(key)
        .cloned()
        .unwrap_or_else(|| default.to_string())
}

fn number_param(params: &Params, key: &str, default: u32) -> u32 {
    params
        .get(key)
        .and_then(|raw| raw.parse().ok())
        .unwrap_or(default)
}

fn paging(params: &Params) -> (u32, u32) {
    (
        number_param(params, "page", DEFAULT_PAGE),
        number_param(params, "per_page", DEFAULT_PER_PAGE),
    )
}

/// Run a blocking client call off the async workers.
async fn call<T, F>(client: AppState, f: F) -> Result<Json<T>, AppError>
where
    F: FnOnce(&PexelsClient) -> Result<T, ApiError> + Send + 'static,
    T: Send + 'static,
{
    let result = tokio::task::spawn_blocking(move || f(&client))
        .await
        .map_err(|e| AppError::Worker(e.to_string()))??;
    Ok(Json(result))
}

pub async fn search_photos(
    State(client): State<AppState>,
    Query(params): Query<Params>,
) -> Result<Json<SearchResult>, AppError> {
    let query = text_param(&params, "query", DEFAULT_QUERY);
    let (page, per_page) = paging(&params);
    call(client, move |c| c.search_photos(&query, page, per_page)).await
}

pub async fn curated_photos(
    State(client): State<AppState>,
    Query(params): Query<Params>,
) -> Result<Json<CuratedResult>, AppError> {
    let (page, per_page) = paging(&params);
    call(client, move |c| c.curated_photos(page, per_page)).await
}

pub async fn get_photo(
    State(client): State<AppState>,
    raw_id: Result<Path<String>, PathRejection>,
) -> Result<Json<Photo>, AppError> {
    // A segment that is not even valid UTF-8 is just another bad id.
    let Path(raw_id) = raw_id.map_err(|_| AppError::InvalidPhotoId)?;
    let id: u32 = raw_id.parse().map_err(|_| AppError::InvalidPhotoId)?;
    call(client, move |c| c.get_photo(id)).await
}

pub async fn random_photo(State(client): State<AppState>) -> Result<Json<Photo>, AppError> {
    call(client, |c| c.random_photo()).await
}

pub async fn search_videos(
    State(client): State<AppState>,
    Query(params): Query<Params>,
) -> Result<Json<VideoSearchResult>, AppError> {
    let query = text_param(&params, "query", DEFAULT_QUERY);
    let (page, per_page) = paging(&params);
    call(client, move |c| c.search_videos(&query, page, per_page)).await
}

pub async fn popular_videos(
    State(client): State<AppState>,
    Query(params): Query<Params>,
) -> Result<Json<PopularVideos>, AppError> {
    let (page, per_page) = paging(&params);
    call(client, move |c| c.popular_videos(page, per_page)).await
}

pub async fn random_video(State(client): State<AppState>) -> Result<Json<Video>, AppError> {
    call(client, |c| c.random_video()).await
}

pub async fn info(State(client): State<AppState>) -> Json<InfoResponse> {
    Json(InfoResponse {
        remaining_requests: client.remaining_requests(),
        message: INFO_MESSAGE.to_string(),
    })
}

pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(pairs: &[(&str, &str)]) -> Params {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn paging_defaults_when_absent() {
        assert_eq!(paging(&params(&[])), (1, 10));
    }

    #[test]
    fn paging_falls_back_on_garbage() {
        let p = params(&[("page", "two"), ("per_page", "-5")]);
        assert_eq!(paging(&p), (1, 10));
    }

    #[test]
    fn paging_accepts_valid_numbers() {
        let p = params(&[("page", "4"), ("per_page", "80")]);
        assert_eq!(paging(&p), (4, 80));
    }

    #[test]
    fn padded_numbers_are_not_trimmed() {
        let p = params(&[("page", " 3"), ("per_page", "20 ")]);
        assert_eq!(paging(&p), (1, 10));
    }

    #[test]
    fn empty_query_is_not_defaulted() {
        assert_eq!(text_param(&params(&[("query", "")]), "query", DEFAULT_QUERY), "");
        assert_eq!(text_param(&params(&[]), "query", DEFAULT_QUERY), "nature");
    }
}
