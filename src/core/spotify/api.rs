//! The remote client seam.
//!
//! Tools only ever talk to Spotify through [`SpotifyApi`]. Production wires in
//! [`SpotifyWebClient`](super::SpotifyWebClient); tests substitute an
//! in-memory stub.

use async_trait::async_trait;

use super::error::ClientResult;
use super::models::{
    Album, ItemToRemove, LibraryItem, Page, Playlist, PlaylistDetails, PlaylistItem,
    PlaylistItemsUpdate, SavedTrack, Track,
};

/// One method per remote capability used by the tools.
///
/// Optional arguments are passed as `None` when the caller omitted them.
#[async_trait]
pub trait SpotifyApi: Send + Sync {
    async fn get_album(&self, album_id: &str, market: Option<&str>) -> ClientResult<Album>;

    async fn get_album_tracks(
        &self,
        album_id: &str,
        market: Option<&str>,
        limit: u32,
        offset: u32,
    ) -> ClientResult<Page<Track>>;

    async fn save_library_items(&self, kind: LibraryItem, ids: &[String]) -> ClientResult<()>;

    async fn remove_library_items(&self, kind: LibraryItem, ids: &[String]) -> ClientResult<()>;

    /// Returns one flag per requested ID, in request order.
    async fn check_library_items(
        &self,
        kind: LibraryItem,
        ids: &[String],
    ) -> ClientResult<Vec<bool>>;

    async fn get_saved_tracks(
        &self,
        market: Option<&str>,
        limit: u32,
        offset: u32,
    ) -> ClientResult<Page<SavedTrack>>;

    async fn create_playlist(
        &self,
        user_id: &str,
        details: &PlaylistDetails,
    ) -> ClientResult<Playlist>;

    async fn change_playlist_details(
        &self,
        playlist_id: &str,
        details: &PlaylistDetails,
    ) -> ClientResult<()>;

    async fn get_playlist_items(
        &self,
        playlist_id: &str,
        market: Option<&str>,
        limit: u32,
        offset: u32,
    ) -> ClientResult<Page<PlaylistItem>>;

    /// Returns the new snapshot token when the backend exposes it.
    async fn add_playlist_items(
        &self,
        playlist_id: &str,
        uris: &[String],
        position: Option<u32>,
    ) -> ClientResult<Option<String>>;

    /// Returns the new snapshot token.
    async fn remove_playlist_items(
        &self,
        playlist_id: &str,
        items: &[ItemToRemove],
        snapshot_id: Option<&str>,
    ) -> ClientResult<String>;

    /// Returns the new snapshot token.
    async fn update_playlist_items(
        &self,
        playlist_id: &str,
        update: &PlaylistItemsUpdate,
    ) -> ClientResult<String>;

    /// `image_base64` is a base64 encoded JPEG.
    async fn upload_playlist_cover(&self, playlist_id: &str, image_base64: &str)
    -> ClientResult<()>;

    async fn set_volume(&self, volume_percent: u8, device_id: Option<&str>) -> ClientResult<()>;

    async fn seek(&self, position_ms: u64, device_id: Option<&str>) -> ClientResult<()>;

    async fn add_to_queue(&self, uri: &str, device_id: Option<&str>) -> ClientResult<()>;
}
