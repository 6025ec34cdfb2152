//! Synchronous client core for the Pexels photo and video API.
//!
//! # Overview
//! Builds `HttpRequest` values and parses `HttpResponse` values as plain data.
//! A `Transport` executes the actual round-trip; production code uses the
//! blocking `UreqTransport`, tests plug in canned responses.
//!
//! # Design
//! - `PexelsClient` holds the API key, the two base endpoints and the last
//!   observed rate-limit count (`AtomicU32`, last writer wins).
//! - Each operation is split into `build_*` (produces request) and `parse_*`
//!   (consumes response); the convenience methods glue the two through the
//!   transport.
//! - DTOs mirror the provider's JSON and tolerate `null` where it sends one.

pub mod client;
pub mod error;
pub mod http;
pub mod transport;
pub mod types;

pub use client::{PexelsClient, DEFAULT_BASE_URL, RANDOM_PAGE_LIMIT};
pub use error::ApiError;
pub use http::{HttpRequest, HttpResponse, Transport};
pub use transport::{UreqTransport, UPSTREAM_TIMEOUT};
pub use types::{
    CuratedResult, Photo, PhotoSrc, PopularVideos, SearchResult, Video, VideoFile, VideoPicture,
    VideoSearchResult,
};
