//! Domain DTOs for the Pexels API.
//!
//! # Design
//! Field names follow the provider's JSON. Every struct is
//! `#[serde(default)]` and every field goes through `null_as_default`, so
//! an absent or `null` value becomes `""`, `0` or an empty `Vec` instead of
//! failing the whole response. Sequences therefore always serialize as `[]`,
//! never `null`.

use serde::{Deserialize, Deserializer, Serialize};

/// Treat an explicit `null` like a missing field.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// A single photo.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Photo {
    #[serde(deserialize_with = "null_as_default")]
    pub id: u32,
    #[serde(deserialize_with = "null_as_default")]
    pub width: u32,
    #[serde(deserialize_with = "null_as_default")]
    pub height: u32,
    #[serde(deserialize_with = "null_as_default")]
    pub url: String,
    #[serde(deserialize_with = "null_as_default")]
    pub photographer: String,
    #[serde(deserialize_with = "null_as_default")]
    pub photographer_url: String,
    #[serde(deserialize_with = "null_as_default")]
    pub photographer_id: u32,
    #[serde(deserialize_with = "null_as_default")]
    pub avg_color: String,
    #[serde(deserialize_with = "null_as_default")]
    pub alt: String,
    #[serde(deserialize_with = "null_as_default")]
    pub src: PhotoSrc,
}

/// Alternate renditions of a photo.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct PhotoSrc {
    #[serde(deserialize_with = "null_as_default")]
    pub original: String,
    #[serde(deserialize_with = "null_as_default")]
    pub large2x: String,
    #[serde(deserialize_with = "null_as_default")]
    pub large: String,
    #[serde(deserialize_with = "null_as_default")]
    pub medium: String,
    #[serde(deserialize_with = "null_as_default")]
    pub small: String,
    #[serde(deserialize_with = "null_as_default")]
    pub tiny: String,
    #[serde(deserialize_with = "null_as_default")]
    pub portrait: String,
    #[serde(deserialize_with = "null_as_default")]
    pub landscape: String,
    #[serde(deserialize_with = "null_as_default")]
    pub square: String,
}

/// Response of the photo search endpoint.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct SearchResult {
    #[serde(deserialize_with = "null_as_default")]
    pub page: u32,
    #[serde(deserialize_with = "null_as_default")]
    pub per_page: u32,
    #[serde(deserialize_with = "null_as_default")]
    pub total_results: u32,
    #[serde(deserialize_with = "null_as_default")]
    pub next_page: String,
    #[serde(deserialize_with = "null_as_default")]
    pub photos: Vec<Photo>,
}

/// Response of the curated photos endpoint.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct CuratedResult {
    #[serde(deserialize_with = "null_as_default")]
    pub page: u32,
    #[serde(deserialize_with = "null_as_default")]
    pub per_page: u32,
    #[serde(deserialize_with = "null_as_default")]
    pub next_page: String,
    #[serde(deserialize_with = "null_as_default")]
    pub photos: Vec<Photo>,
}

/// A single video with its encoded variants and preview frames.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Video {
    #[serde(deserialize_with = "null_as_default")]
    pub id: u32,
    #[serde(deserialize_with = "null_as_default")]
    pub width: u32,
    #[serde(deserialize_with = "null_as_default")]
    pub height: u32,
    #[serde(deserialize_with = "null_as_default")]
    pub url: String,
    #[serde(deserialize_with = "null_as_default")]
    pub image: String,
    #[serde(deserialize_with = "null_as_default")]
    pub full_res: String,
    #[serde(deserialize_with = "null_as_default")]
    pub duration: u32,
    #[serde(deserialize_with = "null_as_default")]
    pub video_files: Vec<VideoFile>,
    #[serde(deserialize_with = "null_as_default")]
    pub video_pictures: Vec<VideoPicture>,
}

/// One encoded variant of a video.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct VideoFile {
    #[serde(deserialize_with = "null_as_default")]
    pub id: u32,
    #[serde(deserialize_with = "null_as_default")]
    pub quality: String,
    #[serde(deserialize_with = "null_as_default")]
    pub file_type: String,
    #[serde(deserialize_with = "null_as_default")]
    pub link: String,
    #[serde(deserialize_with = "null_as_default")]
    pub height: u32,
    #[serde(deserialize_with = "null_as_default")]
    pub width: u32,
}

/// A preview frame; `nr` is its position in the sequence.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct VideoPicture {
    #[serde(deserialize_with = "null_as_default")]
    pub id: u32,
    #[serde(deserialize_with = "null_as_default")]
    pub picture: String,
    #[serde(deserialize_with = "null_as_default")]
    pub nr: u32,
}

/// Response of the video search endpoint.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct VideoSearchResult {
    #[serde(deserialize_with = "null_as_default")]
    pub page: u32,
    #[serde(deserialize_with = "null_as_default")]
    pub per_page: u32,
    #[serde(deserialize_with = "null_as_default")]
    pub total_results: u32,
    #[serde(deserialize_with = "null_as_default")]
    pub next_page: String,
    #[serde(deserialize_with = "null_as_default")]
    pub videos: Vec<Video>,
}

/// Response of the popular videos endpoint.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct PopularVideos {
    #[serde(deserialize_with = "null_as_default")]
    pub page: u32,
    #[serde(deserialize_with = "null_as_default")]
    pub per_page: u32,
    #[serde(deserialize_with = "null_as_default")]
    pub url: String,
    #[serde(deserialize_with = "null_as_default")]
    pub total_results: u32,
    #[serde(deserialize_with = "null_as_default")]
    pub videos: Vec<Video>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn photo_decodes_provider_payload() {
        let photo: Photo = serde_json::from_str(include_str!("../../test-vectors/photo.json")).unwrap();
        assert_eq!(photo.id, 2014422);
        assert_eq!(photo.photographer, "Joey Farina");
        assert_eq!(photo.photographer_id, 680589);
        assert_eq!(photo.avg_color, "#978E82");
        assert!(photo.src.large2x.ends_with("h=650&w=940"));
        assert_eq!(photo.alt, "Brown Rocks During Golden Hour");
    }

    #[test]
    fn null_scalars_become_defaults() {
        let photo: Photo =
            serde_json::from_str(r#"{"id":1,"avg_color":null,"alt":null,"src":null}"#).unwrap();
        assert_eq!(photo.id, 1);
        assert_eq!(photo.avg_color, "");
        assert_eq!(photo.src, PhotoSrc::default());
    }

    #[test]
    fn missing_sequences_serialize_as_empty_arrays() {
        let result: SearchResult = serde_json::from_str(r#"{"page":3,"per_page":5}"#).unwrap();
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["photos"], serde_json::json!([]));
        assert_eq!(json["next_page"], "");
        assert_eq!(json["page"], 3);
    }

    #[test]
    fn null_sequences_become_empty() {
        let video: Video =
            serde_json::from_str(r#"{"id":9,"video_files":null,"video_pictures":null}"#).unwrap();
        assert!(video.video_files.is_empty());
        assert!(video.video_pictures.is_empty());
    }

    #[test]
    fn video_decodes_provider_payload() {
        let video: Video = serde_json::from_str(include_str!("../../test-vectors/video.json")).unwrap();
        assert_eq!(video.id, 1448735);
        assert_eq!(video.duration, 32);
        assert_eq!(video.full_res, "");
        assert_eq!(video.video_files.len(), 3);
        // HLS entries come back without dimensions.
        assert_eq!(video.video_files[2].width, 0);
        assert_eq!(video.video_files[2].file_type, "application/x-mpegURL");
        assert_eq!(video.video_pictures[1].nr, 1);
    }

    #[test]
    fn null_dimensions_and_duration_become_zero() {
        let video: Video = serde_json::from_str(
            r#"{"id":3,"width":null,"height":null,"duration":null,"video_pictures":[{"id":1,"nr":null}]}"#,
        )
        .unwrap();
        assert_eq!((video.width, video.height, video.duration), (0, 0, 0));
        assert_eq!(video.video_pictures[0].nr, 0);

        let result: SearchResult =
            serde_json::from_str(r#"{"page":null,"per_page":null,"total_results":null}"#).unwrap();
        assert_eq!((result.page, result.per_page, result.total_results), (0, 0, 0));
    }

    #[test]
    fn negative_id_is_rejected() {
        let result: Result<Photo, _> = serde_json::from_str(r#"{"id":-4}"#);
        assert!(result.is_err());
    }

    #[test]
    fn popular_videos_keep_listing_url() {
        let popular: PopularVideos = serde_json::from_str(
            r#"{"page":1,"per_page":1,"total_results":8000,"url":"https://www.pexels.com/videos/","videos":[]}"#,
        )
        .unwrap();
        assert_eq!(popular.url, "https://www.pexels.com/videos/");
        assert_eq!(popular.total_results, 8000);
    }
}
