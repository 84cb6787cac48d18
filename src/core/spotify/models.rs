//! Spotify Web API object shapes.
//!
//! Only the fields the tools read are modelled. Everything the API may omit
//! is either optional or defaulted so that sparse responses still decode.

use serde::{Deserialize, Serialize};

// ============================================================================
// Response objects
// ============================================================================

/// A paging envelope, passed through to callers field-for-field.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub total: u32,
    pub limit: u32,
    pub offset: u32,
    pub next: Option<String>,
    pub previous: Option<String>,
    pub href: String,
}

impl<T> Page<T> {
    /// Reshape every item while keeping the paging fields untouched.
    pub fn map<U>(self, f: impl FnMut(T) -> U) -> Page<U> {
        Page {
            items: self.items.into_iter().map(f).collect(),
            total: self.total,
            limit: self.limit,
            offset: self.offset,
            next: self.next,
            previous: self.previous,
            href: self.href,
        }
    }

    /// Like [`Page::map`], dropping items for which `f` returns `None`.
    ///
    /// `total` still describes the remote collection.
    pub fn filter_map<U>(self, f: impl FnMut(T) -> Option<U>) -> Page<U> {
        Page {
            items: self.items.into_iter().filter_map(f).collect(),
            total: self.total,
            limit: self.limit,
            offset: self.offset,
            next: self.next,
            previous: self.previous,
            href: self.href,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExternalUrls {
    pub spotify: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Image {
    pub url: String,
    pub height: Option<u32>,
    pub width: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimplifiedArtist {
    pub id: Option<String>,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Album {
    pub id: String,
    pub name: String,
    pub album_type: Option<String>,
    #[serde(default)]
    pub artists: Vec<SimplifiedArtist>,
    pub release_date: Option<String>,
    pub total_tracks: Option<u32>,
    #[serde(default)]
    pub images: Vec<Image>,
    #[serde(default)]
    pub external_urls: ExternalUrls,
    pub label: Option<String>,
    pub popularity: Option<u32>,
    #[serde(default)]
    pub genres: Vec<String>,
    pub uri: Option<String>,
}

/// Album context as embedded in track objects.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimplifiedAlbum {
    pub id: Option<String>,
    pub name: String,
    #[serde(default)]
    pub images: Vec<Image>,
    pub release_date: Option<String>,
}

/// Show context as embedded in episode objects.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimplifiedShow {
    pub id: Option<String>,
    pub name: String,
}

/// A track or an episode.
///
/// Album track listings omit `album`; playlist entries may be episodes, which
/// carry `show` instead of `album` and `artists`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Track {
    pub id: Option<String>,
    pub name: String,
    #[serde(default)]
    pub artists: Vec<SimplifiedArtist>,
    pub album: Option<SimplifiedAlbum>,
    pub show: Option<SimplifiedShow>,
    #[serde(default)]
    pub duration_ms: u64,
    #[serde(default)]
    pub explicit: bool,
    pub track_number: Option<u32>,
    pub uri: String,
    #[serde(default)]
    pub external_urls: ExternalUrls,
    #[serde(rename = "type")]
    pub item_type: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SavedTrack {
    pub added_at: String,
    pub track: Track,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlaylistItem {
    pub added_at: Option<String>,
    /// `null` for items that are no longer available.
    pub track: Option<Track>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlaylistOwner {
    pub id: String,
    pub display_name: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Playlist {
    pub id: String,
    pub name: String,
    pub description: Option<String>,
    pub public: Option<bool>,
    #[serde(default)]
    pub collaborative: bool,
    pub owner: Option<PlaylistOwner>,
    pub snapshot_id: Option<String>,
    pub uri: Option<String>,
    #[serde(default)]
    pub external_urls: ExternalUrls,
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct SnapshotResponse {
    pub snapshot_id: String,
}

// ============================================================================
// Request shapes
// ============================================================================

/// Saved-library collections with their per-request batch limits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LibraryItem {
    Album,
    Track,
}

impl LibraryItem {
    /// Path segment under `/me`.
    pub fn path(self) -> &'static str {
        match self {
            Self::Album => "albums",
            Self::Track => "tracks",
        }
    }

    /// Maximum number of IDs accepted by one request.
    pub fn max_batch(self) -> usize {
        match self {
            Self::Album => 20,
            Self::Track => 50,
        }
    }

    /// Singular noun used in messages and resource URIs.
    pub fn noun(self) -> &'static str {
        match self {
            Self::Album => "album",
            Self::Track => "track",
        }
    }
}

/// Playlist attributes for create and change-details requests.
///
/// Absent fields are not sent.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct PlaylistDetails {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub public: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub collaborative: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// One entry of a playlist item removal request.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ItemToRemove {
    pub uri: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub positions: Option<Vec<u32>>,
}

/// The two mutually exclusive ways of updating a playlist's items.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum PlaylistItemsUpdate {
    /// Replace every item with the given URIs.
    Replace { uris: Vec<String> },
    /// Move a contiguous range of items.
    Reorder {
        range_start: u32,
        insert_before: u32,
        #[serde(skip_serializing_if = "Option::is_none")]
        range_length: Option<u32>,
        #[serde(skip_serializing_if = "Option::is_none")]
        snapshot_id: Option<String>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_track_without_album_decodes() {
        let json = r#"{
            "id": "t1", "name": "Intro", "artists": [{"id": "a1", "name": "Band"}],
            "duration_ms": 61000, "track_number": 1, "uri": "spotify:track:t1",
            "external_urls": {"spotify": "https://open.spotify.com/track/t1"},
            "type": "track"
        }"#;
        let track: Track = serde_json::from_str(json).unwrap();
        assert!(track.album.is_none());
        assert_eq!(track.item_type.as_deref(), Some("track"));
        assert!(!track.explicit);
    }

    #[test]
    fn test_page_map_keeps_paging_fields() {
        let page = Page {
            items: vec![1, 2, 3],
            total: 10,
            limit: 3,
            offset: 3,
            next: Some("next".to_string()),
            previous: None,
            href: "href".to_string(),
        };
        let mapped = page.map(|n| n * 2);
        assert_eq!(mapped.items, vec![2, 4, 6]);
        assert_eq!(mapped.total, 10);
        assert_eq!(mapped.offset, 3);
        assert_eq!(mapped.next.as_deref(), Some("next"));
        assert_eq!(mapped.href, "href");
    }

    #[test]
    fn test_reorder_body_skips_absent_fields() {
        let update = PlaylistItemsUpdate::Reorder {
            range_start: 2,
            insert_before: 0,
            range_length: None,
            snapshot_id: None,
        };
        assert_eq!(
            serde_json::to_value(&update).unwrap(),
            serde_json::json!({"range_start": 2, "insert_before": 0})
        );
    }

    #[test]
    fn test_playlist_details_skips_absent_fields() {
        let details = PlaylistDetails {
            name: Some("Mix".to_string()),
            public: Some(false),
            ..Default::default()
        };
        assert_eq!(
            serde_json::to_value(&details).unwrap(),
            serde_json::json!({"name": "Mix", "public": false})
        );
    }
}
