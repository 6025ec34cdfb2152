//! Request builder, response parser and blocking facade for the Pexels API.
//!
//! # Design
//! `build_*` methods are pure and produce an `HttpRequest`; `parse` checks the
//! status, records the rate-limit header and decodes the body. The public
//! operations (`search_photos`, `curated_photos`, ...) run a built request
//! through the configured `Transport` and parse the result. The only mutable
//! state is the last observed rate-limit count.

use std::fmt;
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Arc;

use rand::Rng;
use serde::de::DeserializeOwned;

use crate::error::ApiError;
use crate::http::{HttpRequest, HttpResponse, Transport};
use crate::transport::UreqTransport;
use crate::types::{CuratedResult, Photo, PopularVideos, SearchResult, Video, VideoSearchResult};

/// Photo API root; the video API lives under `{base}/videos`.
pub const DEFAULT_BASE_URL: &str = "https://api.pexels.com/v1";

/// Random picks choose a page in `0..RANDOM_PAGE_LIMIT`.
pub const RANDOM_PAGE_LIMIT: u32 = 1000;

const RATE_LIMIT_HEADER: &str = "X-Ratelimit-Remaining";

/// Blocking client for the Pexels photo and video endpoints.
///
/// Share it behind an `Arc`; the remaining-quota counter is atomic and the
/// last successful call wins.
pub struct PexelsClient {
    api_key: String,
    photos_url: String,
    videos_url: String,
    remaining: AtomicU32,
    transport: Arc<dyn Transport>,
}

impl PexelsClient {
    pub fn new(api_key: &str) -> Self {
        Self::with_base_url(api_key, DEFAULT_BASE_URL)
    }

    pub fn with_base_url(api_key: &str, base_url: &str) -> Self {
        let photos_url = base_url.trim_end_matches('/').to_string();
        let videos_url = format!("{photos_url}/videos");
        Self {
            api_key: api_key.to_string(),
            photos_url,
            videos_url,
            remaining: AtomicU32::new(0),
            transport: Arc::new(UreqTransport::default()),
        }
    }

    /// Replace the transport used by the blocking operations.
    pub fn with_transport(mut self, transport: Arc<dyn Transport>) -> Self {
        self.transport = transport;
        self
    }

    /// Last `X-Ratelimit-Remaining` value seen, 0 before the first success.
    pub fn remaining_requests(&self) -> u32 {
        self.remaining.load(Ordering::Relaxed)
    }

    // -----------------------------------------------------------------------
    // Operations
    // -----------------------------------------------------------------------

    pub fn search_photos(&self, query: &str, page: u32, per_page: u32) -> Result<SearchResult, ApiError> {
        self.fetch(self.build_search_photos(query, page, per_page))
    }

    pub fn curated_photos(&self, page: u32, per_page: u32) -> Result<CuratedResult, ApiError> {
        self.fetch(self.build_curated_photos(page, per_page))
    }

    pub fn get_photo(&self, id: u32) -> Result<Photo, ApiError> {
        self.fetch(self.build_get_photo(id))
    }

    /// One curated photo from a randomly chosen page.
    pub fn random_photo(&self) -> Result<Photo, ApiError> {
        self.curated_photos(random_page(), 1)?
            .photos
            .into_iter()
            .next()
            .ok_or(ApiError::EmptyPage("photos"))
    }

    pub fn search_videos(&self, query: &str, page: u32, per_page: u32) -> Result<VideoSearchResult, ApiError> {
        self.fetch(self.build_search_videos(query, page, per_page))
    }

    pub fn popular_videos(&self, page: u32, per_page: u32) -> Result<PopularVideos, ApiError> {
        self.fetch(self.build_popular_videos(page, per_page))
    }

    /// One popular video from a randomly chosen page.
    pub fn random_video(&self) -> Result<Video, ApiError> {
        self.popular_videos(random_page(), 1)?
            .videos
            .into_iter()
            .next()
            .ok_or(ApiError::EmptyPage("videos"))
    }

    // -----------------------------------------------------------------------
    // Request builders
    // -----------------------------------------------------------------------

    pub fn build_search_photos(&self, query: &str, page: u32, per_page: u32) -> HttpRequest {
        self.request(format!("{}/search", self.photos_url), search_query(query, page, per_page))
    }

    pub fn build_curated_photos(&self, page: u32, per_page: u32) -> HttpRequest {
        self.request(format!("{}/curated", self.photos_url), page_query(page, per_page))
    }

    pub fn build_get_photo(&self, id: u32) -> HttpRequest {
        self.request(format!("{}/photos/{id}", self.photos_url), Vec::new())
    }

    pub fn build_search_videos(&self, query: &str, page: u32, per_page: u32) -> HttpRequest {
        self.request(format!("{}/search", self.videos_url), search_query(query, page, per_page))
    }

    pub fn build_popular_videos(&self, page: u32, per_page: u32) -> HttpRequest {
        self.request(format!("{}/popular", self.videos_url), page_query(page, per_page))
    }

    fn request(&self, url: String, query: Vec<(String, String)>) -> HttpRequest {
        HttpRequest {
            url,
            query,
            headers: vec![("Authorization".to_string(), self.api_key.clone())],
        }
    }

    // -----------------------------------------------------------------------
    // Response parsing
    // -----------------------------------------------------------------------

    /// Check the status, record the rate-limit header, then decode the body.
    ///
    /// The counter is updated before decoding, so a 200 with a bad body still
    /// moves it.
    pub fn parse<T: DeserializeOwned>(&self, response: HttpResponse) -> Result<T, ApiError> {
        if response.status != 200 {
            return Err(ApiError::Status {
                status: response.status,
                body: response.body,
            });
        }

        let raw = response
            .header(RATE_LIMIT_HEADER)
            .ok_or(ApiError::MissingRateLimit)?;
        let remaining: u32 = raw
            .trim()
            .parse()
            .map_err(|_| ApiError::InvalidRateLimit(raw.to_string()))?;
        self.remaining.store(remaining, Ordering::Relaxed);
        tracing::debug!(remaining, "rate limit observed");

        serde_json::from_str(&response.body).map_err(|e| ApiError::Deserialization(e.to_string()))
    }

    fn fetch<T: DeserializeOwned>(&self, request: HttpRequest) -> Result<T, ApiError> {
        tracing::debug!(url = %request.url, query = ?request.query, "upstream request");
        let result = self
            .transport
            .execute(&request)
            .and_then(|response| self.parse(response));
        if let Err(err) = &result {
            tracing::warn!(url = %request.url, error = %err, "upstream call failed");
        }
        result
    }
}

impl fmt::Debug for PexelsClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PexelsClient")
            .field("photos_url", &self.photos_url)
            .field("videos_url", &self.videos_url)
            .field("remaining", &self.remaining_requests())
            .finish_non_exhaustive()
    }
}

fn random_page() -> u32 {
    rand::thread_rng().gen_range(0..RANDOM_PAGE_LIMIT)
}

fn page_query(page: u32, per_page: u32) -> Vec<(String, String)> {
    vec![
        ("page".to_string(), page.to_string()),
        ("per_page".to_string(), per_page.to_string()),
    ]
}

fn search_query(query: &str, page: u32, per_page: u32) -> Vec<(String, String)> {
    let mut pairs = vec![("query".to_string(), query.to_string())];
    pairs.extend(page_query(page, per_page));
    pairs
}
