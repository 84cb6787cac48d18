//! Test doubles for tool tests.
//!
//! [`StubSpotify`] records every call it receives and answers from canned
//! fixtures, or fails every call when built with [`StubSpotify::failing`].

use std::sync::Mutex;

use async_trait::async_trait;
use rmcp::model::{CallToolResult, RawContent, ResourceContents};

use crate::core::spotify::models::{
    Album, ExternalUrls, Image, ItemToRemove, LibraryItem, Page, Playlist, PlaylistDetails,
    PlaylistItem, PlaylistItemsUpdate, PlaylistOwner, SavedTrack, SimplifiedAlbum,
    SimplifiedArtist, Track,
};
use crate::core::spotify::{ClientError, ClientResult, SpotifyApi};

/// A call received by the stub, with its arguments.
#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    GetAlbum {
        album_id: String,
        market: Option<String>,
    },
    GetAlbumTracks {
        album_id: String,
        market: Option<String>,
        limit: u32,
        offset: u32,
    },
    SaveLibrary {
        kind: LibraryItem,
        ids: Vec<String>,
    },
    RemoveLibrary {
        kind: LibraryItem,
        ids: Vec<String>,
    },
    CheckLibrary {
        kind: LibraryItem,
        ids: Vec<String>,
    },
    GetSavedTracks {
        market: Option<String>,
        limit: u32,
        offset: u32,
    },
    CreatePlaylist {
        user_id: String,
        details: PlaylistDetails,
    },
    ChangePlaylistDetails {
        playlist_id: String,
        details: PlaylistDetails,
    },
    GetPlaylistItems {
        playlist_id: String,
        market: Option<String>,
        limit: u32,
        offset: u32,
    },
    AddPlaylistItems {
        playlist_id: String,
        uris: Vec<String>,
        position: Option<u32>,
    },
    RemovePlaylistItems {
        playlist_id: String,
        items: Vec<ItemToRemove>,
        snapshot_id: Option<String>,
    },
    UpdatePlaylistItems {
        playlist_id: String,
        update: PlaylistItemsUpdate,
    },
    UploadPlaylistCover {
        playlist_id: String,
        image_base64: String,
    },
    SetVolume {
        volume_percent: u8,
        device_id: Option<String>,
    },
    Seek {
        position_ms: u64,
        device_id: Option<String>,
    },
    AddToQueue {
        uri: String,
        device_id: Option<String>,
    },
}

/// In-memory [`SpotifyApi`].
pub struct StubSpotify {
    calls: Mutex<Vec<Call>>,
    failure: Option<String>,
    pub album: Album,
    pub album_tracks: Page<Track>,
    pub saved_tracks: Page<SavedTrack>,
    pub playlist_items: Page<PlaylistItem>,
    /// Snapshot returned by `add_playlist_items`.
    pub added_snapshot: Option<String>,
    /// Overrides the flags from `check_library_items` (default: "saved" prefix).
    pub check_flags: Option<Vec<bool>>,
}

impl Default for StubSpotify {
    fn default() -> Self {
        Self {
            calls: Mutex::new(Vec::new()),
            failure: None,
            album: album_fixture(),
            album_tracks: page_of(vec![track_fixture("t1"), track_fixture("t2")]),
            saved_tracks: page_of(vec![SavedTrack {
                added_at: "2024-05-01T10:00:00Z".to_string(),
                track: track_fixture("t3"),
            }]),
            playlist_items: page_of(vec![PlaylistItem {
                added_at: Some("2024-05-01T10:00:00Z".to_string()),
                track: Some(track_fixture("t4")),
            }]),
            added_snapshot: None,
            check_flags: None,
        }
    }
}

impl StubSpotify {
    pub fn new() -> Self {
        Self::default()
    }

    /// A stub whose every call fails with `message`.
    pub fn failing(message: &str) -> Self {
        Self {
            failure: Some(message.to_string()),
            ..Self::default()
        }
    }

    /// Calls received so far, in order.
    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, call: Call) -> ClientResult<()> {
        self.calls.lock().unwrap().push(call);
        match &self.failure {
            Some(message) => Err(ClientError::other(message)),
            None => Ok(()),
        }
    }
}

fn owned(value: Option<&str>) -> Option<String> {
    value.map(str::to_string)
}

#[async_trait]
impl SpotifyApi for StubSpotify {
    async fn get_album(&self, album_id: &str, market: Option<&str>) -> ClientResult<Album> {
        self.record(Call::GetAlbum {
            album_id: album_id.to_string(),
            market: owned(market),
        })?;
        Ok(self.album.clone())
    }

    async fn get_album_tracks(
        &self,
        album_id: &str,
        market: Option<&str>,
        limit: u32,
        offset: u32,
    ) -> ClientResult<Page<Track>> {
        self.record(Call::GetAlbumTracks {
            album_id: album_id.to_string(),
            market: owned(market),
            limit,
            offset,
        })?;
        Ok(self.album_tracks.clone())
    }

    async fn save_library_items(&self, kind: LibraryItem, ids: &[String]) -> ClientResult<()> {
        self.record(Call::SaveLibrary {
            kind,
            ids: ids.to_vec(),
        })
    }

    async fn remove_library_items(&self, kind: LibraryItem, ids: &[String]) -> ClientResult<()> {
        self.record(Call::RemoveLibrary {
            kind,
            ids: ids.to_vec(),
        })
    }

    async fn check_library_items(
        &self,
        kind: LibraryItem,
        ids: &[String],
    ) -> ClientResult<Vec<bool>> {
        self.record(Call::CheckLibrary {
            kind,
            ids: ids.to_vec(),
        })?;
        match &self.check_flags {
            Some(flags) => Ok(flags.clone()),
            None => Ok(ids.iter().map(|id| id.starts_with("saved")).collect()),
        }
    }

    async fn get_saved_tracks(
        &self,
        market: Option<&str>,
        limit: u32,
        offset: u32,
    ) -> ClientResult<Page<SavedTrack>> {
        self.record(Call::GetSavedTracks {
            market: owned(market),
            limit,
            offset,
        })?;
        Ok(self.saved_tracks.clone())
    }

    async fn create_playlist(
        &self,
        user_id: &str,
        details: &PlaylistDetails,
    ) -> ClientResult<Playlist> {
        self.record(Call::CreatePlaylist {
            user_id: user_id.to_string(),
            details: details.clone(),
        })?;
        Ok(Playlist {
            id: "new-playlist".to_string(),
            name: details.name.clone().unwrap_or_default(),
            description: details.description.clone(),
            public: details.public,
            collaborative: details.collaborative.unwrap_or(false),
            owner: Some(PlaylistOwner {
                id: user_id.to_string(),
                display_name: None,
            }),
            snapshot_id: Some("snap-0".to_string()),
            uri: Some("spotify:playlist:new-playlist".to_string()),
            external_urls: ExternalUrls {
                spotify: Some("https://open.spotify.com/playlist/new-playlist".to_string()),
            },
        })
    }

    async fn change_playlist_details(
        &self,
        playlist_id: &str,
        details: &PlaylistDetails,
    ) -> ClientResult<()> {
        self.record(Call::ChangePlaylistDetails {
            playlist_id: playlist_id.to_string(),
            details: details.clone(),
        })
    }

    async fn get_playlist_items(
        &self,
        playlist_id: &str,
        market: Option<&str>,
        limit: u32,
        offset: u32,
    ) -> ClientResult<Page<PlaylistItem>> {
        self.record(Call::GetPlaylistItems {
            playlist_id: playlist_id.to_string(),
            market: owned(market),
            limit,
            offset,
        })?;
        Ok(self.playlist_items.clone())
    }

    async fn add_playlist_items(
        &self,
        playlist_id: &str,
        uris: &[String],
        position: Option<u32>,
    ) -> ClientResult<Option<String>> {
        self.record(Call::AddPlaylistItems {
            playlist_id: playlist_id.to_string(),
            uris: uris.to_vec(),
            position,
        })?;
        Ok(self.added_snapshot.clone())
    }

    async fn remove_playlist_items(
        &self,
        playlist_id: &str,
        items: &[ItemToRemove],
        snapshot_id: Option<&str>,
    ) -> ClientResult<String> {
        self.record(Call::RemovePlaylistItems {
            playlist_id: playlist_id.to_string(),
            items: items.to_vec(),
            snapshot_id: owned(snapshot_id),
        })?;
        Ok("snap-removed".to_string())
    }

    async fn update_playlist_items(
        &self,
        playlist_id: &str,
        update: &PlaylistItemsUpdate,
    ) -> ClientResult<String> {
        self.record(Call::UpdatePlaylistItems {
            playlist_id: playlist_id.to_string(),
            update: update.clone(),
        })?;
        Ok("snap-updated".to_string())
    }

    async fn upload_playlist_cover(
        &self,
        playlist_id: &str,
        image_base64: &str,
    ) -> ClientResult<()> {
        self.record(Call::UploadPlaylistCover {
            playlist_id: playlist_id.to_string(),
            image_base64: image_base64.to_string(),
        })
    }

    async fn set_volume(&self, volume_percent: u8, device_id: Option<&str>) -> ClientResult<()> {
        self.record(Call::SetVolume {
            volume_percent,
            device_id: owned(device_id),
        })
    }

    async fn seek(&self, position_ms: u64, device_id: Option<&str>) -> ClientResult<()> {
        self.record(Call::Seek {
            position_ms,
            device_id: owned(device_id),
        })
    }

    async fn add_to_queue(&self, uri: &str, device_id: Option<&str>) -> ClientResult<()> {
        self.record(Call::AddToQueue {
            uri: uri.to_string(),
            device_id: owned(device_id),
        })
    }
}

// ============================================================================
// Fixtures
// ============================================================================

pub fn album_fixture() -> Album {
    Album {
        id: "4aawyAB9vmqN3uQ7FjRGTy".to_string(),
        name: "Global Warming".to_string(),
        album_type: Some("album".to_string()),
        artists: vec![
            SimplifiedArtist {
                id: Some("0TnOYISbd1XYRBk9myaseg".to_string()),
                name: "Pitbull".to_string(),
            },
            SimplifiedArtist {
                id: None,
                name: "Christina Aguilera".to_string(),
            },
        ],
        release_date: Some("2012-11-16".to_string()),
        total_tracks: Some(18),
        images: vec![
            image("https://i.scdn.co/image/640", 640),
            image("https://i.scdn.co/image/300", 300),
        ],
        external_urls: ExternalUrls {
            spotify: Some("https://open.spotify.com/album/4aawyAB9vmqN3uQ7FjRGTy".to_string()),
        },
        label: Some("Mr.305/Polo Grounds Music/RCA Records".to_string()),
        popularity: Some(57),
        genres: Vec::new(),
        uri: Some("spotify:album:4aawyAB9vmqN3uQ7FjRGTy".to_string()),
    }
}

pub fn track_fixture(id: &str) -> Track {
    Track {
        id: Some(id.to_string()),
        name: format!("Track {id}"),
        artists: vec![SimplifiedArtist {
            id: None,
            name: "Pitbull".to_string(),
        }],
        album: None,
        show: None,
        duration_ms: 201_000,
        explicit: false,
        track_number: Some(1),
        uri: format!("spotify:track:{id}"),
        external_urls: ExternalUrls {
            spotify: Some(format!("https://open.spotify.com/track/{id}")),
        },
        item_type: Some("track".to_string()),
    }
}

pub fn album_context(name: &str, images: Vec<Image>) -> SimplifiedAlbum {
    SimplifiedAlbum {
        id: Some("album-ctx".to_string()),
        name: name.to_string(),
        images,
        release_date: None,
    }
}

pub fn image(url: &str, size: u32) -> Image {
    Image {
        url: url.to_string(),
        height: Some(size),
        width: Some(size),
    }
}

pub fn page_of<T>(items: Vec<T>) -> Page<T> {
    Page {
        total: items.len() as u32,
        limit: 20,
        offset: 0,
        next: None,
        previous: None,
        href: "https://api.spotify.com/v1/stub".to_string(),
        items,
    }
}

pub fn ids(prefix: &str, n: usize) -> Vec<String> {
    (0..n).map(|i| format!("{prefix}{i}")).collect()
}

// ============================================================================
// Envelope accessors
// ============================================================================

/// Text of the single text block.
pub fn text_of(result: &CallToolResult) -> &str {
    assert_eq!(result.content.len(), 1, "expected exactly one block");
    match &result.content[0].raw {
        RawContent::Text(text) => &text.text,
        other => panic!("expected text block, got {other:?}"),
    }
}

/// `(uri, mime_type, text)` of the single resource block.
pub fn resource_of(result: &CallToolResult) -> (&str, Option<&str>, &str) {
    assert_eq!(result.content.len(), 1, "expected exactly one block");
    match &result.content[0].raw {
        RawContent::Resource(embedded) => match &embedded.resource {
            ResourceContents::TextResourceContents {
                uri,
                mime_type,
                text,
                ..
            } => (uri, mime_type.as_deref(), text),
            other => panic!("expected text resource, got {other:?}"),
        },
        other => panic!("expected resource block, got {other:?}"),
    }
}

/// Parsed JSON payload of the single resource block.
pub fn resource_json(result: &CallToolResult) -> serde_json::Value {
    serde_json::from_str(resource_of(result).2).unwrap()
}

/// Parsed JSON of the single text block.
pub fn text_json(result: &CallToolResult) -> serde_json::Value {
    serde_json::from_str(text_of(result)).unwrap()
}
