//! Playlist item listing tool (paginated).

use async_trait::async_trait;
use rmcp::model::CallToolResult;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

use crate::core::spotify::SpotifyApi;
use crate::core::spotify::models::{Page, PlaylistItem};
use crate::domains::tools::definitions::common::{
    UNKNOWN_ALBUM, default_limit, join_artists, paging,
};
use crate::domains::tools::envelope::{action_uri, resource_response};
use crate::domains::tools::validation::{ensure_id, ensure_market};
use crate::domains::tools::{SpotifyTool, ToolError, ToolResult};

#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct GetPlaylistItemsParams {
    #[schemars(description = "Spotify ID of the playlist")]
    pub playlist_id: String,

    #[schemars(description = "Maximum number of items (1-50, default: 20)")]
    #[schemars(range(min = 1, max = 50))]
    #[serde(default = "default_limit")]
    pub limit: i64,

    #[schemars(description = "Index of the first item to return (default: 0)")]
    #[schemars(range(min = 0))]
    #[serde(default)]
    pub offset: i64,

    #[schemars(description = "ISO 3166-1 alpha-2 country code, e.g. US")]
    pub market: Option<String>,
}

/// One playlist entry: a track or an episode.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlaylistEntry {
    pub added_at: Option<String>,
    pub id: Option<String>,
    pub name: String,
    pub artists: String,
    /// Album name for tracks, show name for episodes.
    pub album: String,
    pub duration_ms: u64,
    #[serde(rename = "type")]
    pub item_type: Option<String>,
    pub uri: String,
    pub external_url: Option<String>,
}

impl PlaylistEntry {
    /// `None` for entries whose track is no longer available.
    fn from_item(item: PlaylistItem) -> Option<Self> {
        let Some(track) = item.track else {
            debug!("Skipping unavailable playlist item");
            return None;
        };
        let album = track
            .album
            .map(|a| a.name)
            .or_else(|| track.show.map(|s| s.name))
            .unwrap_or_else(|| UNKNOWN_ALBUM.to_string());

        Some(Self {
            added_at: item.added_at,
            id: track.id,
            name: track.name,
            artists: join_artists(&track.artists),
            album,
            duration_ms: track.duration_ms,
            item_type: track.item_type,
            uri: track.uri,
            external_url: track.external_urls.spotify,
        })
    }
}

/// List one page of a playlist's items.
pub async fn get_playlist_items(
    client: &dyn SpotifyApi,
    params: &GetPlaylistItemsParams,
) -> ToolResult<Page<PlaylistEntry>> {
    ensure_id("Playlist", &params.playlist_id)?;
    let (limit, offset) = paging(params.limit, params.offset)?;
    let market = params.market.as_deref();
    ensure_market(market)?;

    let page = client
        .get_playlist_items(&params.playlist_id, market, limit, offset)
        .await
        .map_err(|e| ToolError::remote("get playlist items", e))?;
    Ok(page.filter_map(PlaylistEntry::from_item))
}

pub struct GetPlaylistItemsTool;

#[async_trait]
impl SpotifyTool for GetPlaylistItemsTool {
    const NAME: &'static str = "get_playlist_items";
    const TITLE: &'static str = "Get Playlist Items";
    const DESCRIPTION: &'static str = "List the tracks and episodes of a playlist, one page at a time. Unavailable items are skipped.";

    type Params = GetPlaylistItemsParams;

    #[instrument(skip_all, fields(playlist_id = %params.playlist_id))]
    async fn call(client: &dyn SpotifyApi, params: GetPlaylistItemsParams) -> CallToolResult {
        info!("Get playlist items tool called");
        let result = get_playlist_items(client, &params).await;

        resource_response(result, || {
            action_uri(
                "playlist",
                "items",
                &[
                    ("id", params.playlist_id.clone()),
                    ("limit", params.limit.to_string()),
                    ("offset", params.offset.to_string()),
                ],
            )
        })
    }
}
