//! Spotify Web API client backed by `reqwest`.
//!
//! Authentication is a static bearer token taken from configuration; token
//! refresh is left to whoever provisions `SPOTIFY_ACCESS_TOKEN`.

use async_trait::async_trait;
use reqwest::{Method, RequestBuilder, Response, header::CONTENT_TYPE};
use url::Url;
use serde::Deserialize;
use serde::de::DeserializeOwned;
use serde_json::json;
use tracing::{debug, warn};

use super::api::SpotifyApi;
use super::error::{ClientError, ClientResult};
use super::models::{
    Album, ItemToRemove, LibraryItem, Page, Playlist, PlaylistDetails, PlaylistItem,
    PlaylistItemsUpdate, SavedTrack, SnapshotResponse, Track,
};
use crate::core::config::SpotifyConfig;

/// HTTP implementation of [`SpotifyApi`].
#[derive(Clone)]
pub struct SpotifyWebClient {
    http: reqwest::Client,
    base_url: String,
    access_token: Option<String>,
}

impl std::fmt::Debug for SpotifyWebClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SpotifyWebClient")
            .field("base_url", &self.base_url)
            .field("access_token", &self.access_token.as_ref().map(|_| "[REDACTED]"))
            .finish()
    }
}

/// Error body returned by the Web API on failure.
#[derive(Deserialize)]
struct ApiErrorBody {
    error: ApiErrorDetail,
}

#[derive(Deserialize)]
struct ApiErrorDetail {
    message: String,
}

impl SpotifyWebClient {
    /// Create a client from the Spotify configuration section.
    pub fn new(config: &SpotifyConfig) -> Self {
        if config.access_token.is_none() {
            warn!("SPOTIFY_ACCESS_TOKEN not set - every Spotify call will fail");
        }

        Self {
            http: reqwest::Client::new(),
            base_url: config.api_base_url.trim_end_matches('/').to_string(),
            access_token: config.access_token.clone(),
        }
    }

    /// Resolve an endpoint below the base URL.
    ///
    /// Each segment is percent-encoded on its own, so an ID can never add
    /// path components or a query string.
    fn endpoint(&self, segments: &[&str]) -> ClientResult<Url> {
        let mut url = Url::parse(&self.base_url)
            .map_err(|e| ClientError::other(format!("Invalid API base URL: {e}")))?;
        url.path_segments_mut()
            .map_err(|_| ClientError::other("API base URL cannot carry a path"))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    fn request(&self, method: Method, segments: &[&str]) -> ClientResult<RequestBuilder> {
        let token = self
            .access_token
            .as_deref()
            .ok_or(ClientError::MissingToken)?;
        let url = self.endpoint(segments)?;
        debug!("{} {}", method, url);
        Ok(self.http.request(method, url).bearer_auth(token))
    }

    async fn send(builder: RequestBuilder) -> ClientResult<Response> {
        let response = builder.send().await?;
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        let message = serde_json::from_str::<ApiErrorBody>(&body)
            .map(|b| b.error.message)
            .unwrap_or_else(|_| {
                status
                    .canonical_reason()
                    .unwrap_or("Request failed")
                    .to_string()
            });
        Err(ClientError::api(status.as_u16(), message))
    }

    async fn send_json<T: DeserializeOwned>(builder: RequestBuilder) -> ClientResult<T> {
        let bytes = Self::send(builder).await?.bytes().await?;
        Ok(serde_json::from_slice(&bytes)?)
    }
}

/// Build the query for paged listings.
fn page_query(market: Option<&str>, limit: u32, offset: u32) -> Vec<(&'static str, String)> {
    let mut query = vec![("limit", limit.to_string()), ("offset", offset.to_string())];
    if let Some(market) = market {
        query.push(("market", market.to_string()));
    }
    query
}

fn device_query(device_id: Option<&str>) -> Vec<(&'static str, String)> {
    device_id
        .map(|id| vec![("device_id", id.to_string())])
        .unwrap_or_default()
}

#[async_trait]
impl SpotifyApi for SpotifyWebClient {
    async fn get_album(&self, album_id: &str, market: Option<&str>) -> ClientResult<Album> {
        let mut builder = self.request(Method::GET, &["albums", album_id])?;
        if let Some(market) = market {
            builder = builder.query(&[("market", market)]);
        }
        Self::send_json(builder).await
    }

    async fn get_album_tracks(
        &self,
        album_id: &str,
        market: Option<&str>,
        limit: u32,
        offset: u32,
    ) -> ClientResult<Page<Track>> {
        let builder = self
            .request(Method::GET, &["albums", album_id, "tracks"])?
            .query(&page_query(market, limit, offset));
        Self::send_json(builder).await
    }

    async fn save_library_items(&self, kind: LibraryItem, ids: &[String]) -> ClientResult<()> {
        let builder = self
            .request(Method::PUT, &["me", kind.path()])?
            .json(&json!({ "ids": ids }));
        Self::send(builder).await.map(|_| ())
    }

    async fn remove_library_items(&self, kind: LibraryItem, ids: &[String]) -> ClientResult<()> {
        let builder = self
            .request(Method::DELETE, &["me", kind.path()])?
            .json(&json!({ "ids": ids }));
        Self::send(builder).await.map(|_| ())
    }

    async fn check_library_items(
        &self,
        kind: LibraryItem,
        ids: &[String],
    ) -> ClientResult<Vec<bool>> {
        let builder = self
            .request(Method::GET, &["me", kind.path(), "contains"])?
            .query(&[("ids", ids.join(","))]);
        Self::send_json(builder).await
    }

    async fn get_saved_tracks(
        &self,
        market: Option<&str>,
        limit: u32,
        offset: u32,
    ) -> ClientResult<Page<SavedTrack>> {
        let builder = self
            .request(Method::GET, &["me", "tracks"])?
            .query(&page_query(market, limit, offset));
        Self::send_json(builder).await
    }

    async fn create_playlist(
        &self,
        user_id: &str,
        details: &PlaylistDetails,
    ) -> ClientResult<Playlist> {
        let builder = self
            .request(Method::POST, &["users", user_id, "playlists"])?
            .json(details);
        Self::send_json(builder).await
    }

    async fn change_playlist_details(
        &self,
        playlist_id: &str,
        details: &PlaylistDetails,
    ) -> ClientResult<()> {
        let builder = self
            .request(Method::PUT, &["playlists", playlist_id])?
            .json(details);
        Self::send(builder).await.map(|_| ())
    }

    async fn get_playlist_items(
        &self,
        playlist_id: &str,
        market: Option<&str>,
        limit: u32,
        offset: u32,
    ) -> ClientResult<Page<PlaylistItem>> {
        let builder = self
            .request(Method::GET, &["playlists", playlist_id, "tracks"])?
            .query(&page_query(market, limit, offset));
        Self::send_json(builder).await
    }

    async fn add_playlist_items(
        &self,
        playlist_id: &str,
        uris: &[String],
        position: Option<u32>,
    ) -> ClientResult<Option<String>> {
        let mut body = json!({ "uris": uris });
        if let Some(position) = position {
            body["position"] = json!(position);
        }
        let builder = self
            .request(Method::POST, &["playlists", playlist_id, "tracks"])?
            .json(&body);
        let response: SnapshotResponse = Self::send_json(builder).await?;
        Ok(Some(response.snapshot_id))
    }

    async fn remove_playlist_items(
        &self,
        playlist_id: &str,
        items: &[ItemToRemove],
        snapshot_id: Option<&str>,
    ) -> ClientResult<String> {
        let mut body = json!({ "tracks": items });
        if let Some(snapshot_id) = snapshot_id {
            body["snapshot_id"] = json!(snapshot_id);
        }
        let builder = self
            .request(Method::DELETE, &["playlists", playlist_id, "tracks"])?
            .json(&body);
        let response: SnapshotResponse = Self::send_json(builder).await?;
        Ok(response.snapshot_id)
    }

    async fn update_playlist_items(
        &self,
        playlist_id: &str,
        update: &PlaylistItemsUpdate,
    ) -> ClientResult<String> {
        let builder = self
            .request(Method::PUT, &["playlists", playlist_id, "tracks"])?
            .json(update);
        let response: SnapshotResponse = Self::send_json(builder).await?;
        Ok(response.snapshot_id)
    }

    async fn upload_playlist_cover(
        &self,
        playlist_id: &str,
        image_base64: &str,
    ) -> ClientResult<()> {
        let builder = self
            .request(Method::PUT, &["playlists", playlist_id, "images"])?
            .header(CONTENT_TYPE, "image/jpeg")
            .body(image_base64.to_string());
        Self::send(builder).await.map(|_| ())
    }

    async fn set_volume(&self, volume_percent: u8, device_id: Option<&str>) -> ClientResult<()> {
        let mut query = vec![("volume_percent", volume_percent.to_string())];
        query.extend(device_query(device_id));
        let builder = self
            .request(Method::PUT, &["me", "player", "volume"])?
            .query(&query);
        Self::send(builder).await.map(|_| ())
    }

    async fn seek(&self, position_ms: u64, device_id: Option<&str>) -> ClientResult<()> {
        let mut query = vec![("position_ms", position_ms.to_string())];
        query.extend(device_query(device_id));
        let builder = self.request(Method::PUT, &["me", "player", "seek"])?.query(&query);
        Self::send(builder).await.map(|_| ())
    }

    async fn add_to_queue(&self, uri: &str, device_id: Option<&str>) -> ClientResult<()> {
        let mut query = vec![("uri", uri.to_string())];
        query.extend(device_query(device_id));
        let builder = self.request(Method::POST, &["me", "player", "queue"])?.query(&query);
        Self::send(builder).await.map(|_| ())
    }
}
