//! Album lookup tool.

use async_trait::async_trait;
use rmcp::model::CallToolResult;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use tracing::{info, instrument};

use crate::core::spotify::SpotifyApi;
use crate::core::spotify::models::{Album, Image};
use crate::domains::tools::definitions::common::join_artists;
use crate::domains::tools::envelope::{entity_uri, resource_response};
use crate::domains::tools::validation::{ensure_id, ensure_market};
use crate::domains::tools::{SpotifyTool, ToolError, ToolResult};

/// Parameters for the album lookup.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct GetAlbumParams {
    /// Spotify album ID.
    #[schemars(description = "Spotify ID of the album")]
    pub album_id: String,

    /// Market to resolve track relinking against.
    #[schemars(description = "ISO 3166-1 alpha-2 country code, e.g. US")]
    pub market: Option<String>,
}

/// Album as returned to clients. The full image list is passed through.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AlbumDetails {
    pub id: String,
    pub name: String,
    pub artists: String,
    pub album_type: Option<String>,
    pub release_date: Option<String>,
    pub total_tracks: Option<u32>,
    pub label: Option<String>,
    pub popularity: Option<u32>,
    pub genres: Vec<String>,
    pub images: Vec<Image>,
    pub external_url: Option<String>,
}

impl From<Album> for AlbumDetails {
    fn from(album: Album) -> Self {
        Self {
            artists: join_artists(&album.artists),
            id: album.id,
            name: album.name,
            album_type: album.album_type,
            release_date: album.release_date,
            total_tracks: album.total_tracks,
            label: album.label,
            popularity: album.popularity,
            genres: album.genres,
            images: album.images,
            external_url: album.external_urls.spotify,
        }
    }
}

/// Fetch one album.
pub async fn get_album(
    client: &dyn SpotifyApi,
    album_id: &str,
    market: Option<&str>,
) -> ToolResult<AlbumDetails> {
    ensure_id("Album", album_id)?;
    ensure_market(market)?;

    let album = client
        .get_album(album_id, market)
        .await
        .map_err(|e| ToolError::remote("get album", e))?;
    Ok(album.into())
}

/// Album lookup tool.
pub struct GetAlbumTool;

#[async_trait]
impl SpotifyTool for GetAlbumTool {
    const NAME: &'static str = "get_album";
    const TITLE: &'static str = "Get Album";
    const DESCRIPTION: &'static str = "Get Spotify catalog information for a single album: name, artists, release date, label, track count, images and link.";

    type Params = GetAlbumParams;

    #[instrument(skip_all, fields(album_id = %params.album_id))]
    async fn call(client: &dyn SpotifyApi, params: GetAlbumParams) -> CallToolResult {
        info!("Get album tool called");
        let result = get_album(client, &params.album_id, params.market.as_deref()).await;
        resource_response(result, || entity_uri("album", &params.album_id))
    }
}
