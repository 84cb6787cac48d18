//! Common utilities shared across Spotify tools.
//!
//! Response reshaping (artists, images, track summaries) and the paging
//! parameter defaults.

use serde::Serialize;

use crate::core::spotify::models::{Image, SimplifiedArtist, Track};
use crate::domains::tools::ToolResult;
use crate::domains::tools::validation::{ensure_index, ensure_limit};

/// Album name used when the response carries no album context.
pub const UNKNOWN_ALBUM: &str = "Unknown Album";

/// Default page size.
pub fn default_limit() -> i64 {
    20
}

/// Validate `limit` then `offset`.
pub fn paging(limit: i64, offset: i64) -> ToolResult<(u32, u32)> {
    let limit = ensure_limit(limit)?;
    let offset = ensure_index("Offset", offset)?;
    Ok((limit, offset))
}

/// Artist names as one display string, e.g. `"Pitbull, Christina Aguilera"`.
pub fn join_artists(artists: &[SimplifiedArtist]) -> String {
    artists
        .iter()
        .map(|a| a.name.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}

/// URL of the widest image, first one on ties.
pub fn best_image(images: &[Image]) -> Option<String> {
    images
        .iter()
        .enumerate()
        .max_by_key(|(i, img)| (img.width.unwrap_or(0), std::cmp::Reverse(*i)))
        .map(|(_, img)| img.url.clone())
}

/// Flat view of a track or episode.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TrackSummary {
    pub id: Option<String>,
    pub name: String,
    pub artists: String,
    pub album: String,
    pub duration_ms: u64,
    pub track_number: Option<u32>,
    pub explicit: bool,
    pub uri: String,
    pub external_url: Option<String>,
}

impl From<Track> for TrackSummary {
    fn from(track: Track) -> Self {
        let album = track
            .album
            .map(|a| a.name)
            .or_else(|| track.show.map(|s| s.name))
            .unwrap_or_else(|| UNKNOWN_ALBUM.to_string());

        Self {
            id: track.id,
            name: track.name,
            artists: join_artists(&track.artists),
            album,
            duration_ms: track.duration_ms,
            track_number: track.track_number,
            explicit: track.explicit,
            uri: track.uri,
            external_url: track.external_urls.spotify,
        }
    }
}
