//! Album track listing tool (paginated).

use async_trait::async_trait;
use rmcp::model::CallToolResult;
use schemars::JsonSchema;
use serde::Deserialize;
use tracing::{info, instrument};

use crate::core::spotify::SpotifyApi;
use crate::core::spotify::models::Page;
use crate::domains::tools::definitions::common::{TrackSummary, default_limit, paging};
use crate::domains::tools::envelope::{action_uri, resource_response};
use crate::domains::tools::validation::{ensure_id, ensure_market};
use crate::domains::tools::{SpotifyTool, ToolError, ToolResult};

/// Parameters for listing an album's tracks.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct GetAlbumTracksParams {
    #[schemars(description = "Spotify ID of the album")]
    pub album_id: String,

    #[schemars(description = "Maximum number of tracks (1-50, default: 20)")]
    #[schemars(range(min = 1, max = 50))]
    #[serde(default = "default_limit")]
    pub limit: i64,

    #[schemars(description = "Index of the first track to return (default: 0)")]
    #[schemars(range(min = 0))]
    #[serde(default)]
    pub offset: i64,

    #[schemars(description = "ISO 3166-1 alpha-2 country code, e.g. US")]
    pub market: Option<String>,
}

/// List one page of an album's tracks.
///
/// Track objects under an album carry no album context, so every summary
/// reports the unknown-album placeholder.
pub async fn get_album_tracks(
    client: &dyn SpotifyApi,
    album_id: &str,
    limit: i64,
    offset: i64,
    market: Option<&str>,
) -> ToolResult<Page<TrackSummary>> {
    ensure_id("Album", album_id)?;
    let (limit, offset) = paging(limit, offset)?;
    ensure_market(market)?;

    let page = client
        .get_album_tracks(album_id, market, limit, offset)
        .await
        .map_err(|e| ToolError::remote("get album tracks", e))?;
    Ok(page.map(TrackSummary::from))
}

/// Album track listing tool.
pub struct GetAlbumTracksTool;

#[async_trait]
impl SpotifyTool for GetAlbumTracksTool {
    const NAME: &'static str = "get_album_tracks";
    const TITLE: &'static str = "Get Album Tracks";
    const DESCRIPTION: &'static str = "List the tracks of an album, one page at a time. Use limit and offset to page through long albums.";

    type Params = GetAlbumTracksParams;

    #[instrument(skip_all, fields(album_id = %params.album_id))]
    async fn call(client: &dyn SpotifyApi, params: GetAlbumTracksParams) -> CallToolResult {
        info!("Get album tracks tool called");
        let result = get_album_tracks(
            client,
            &params.album_id,
            params.limit,
            params.offset,
            params.market.as_deref(),
        )
        .await;

        resource_response(result, || {
            action_uri(
                "album",
                "tracks",
                &[
                    ("id", params.album_id.clone()),
                    ("limit", params.limit.to_string()),
                    ("offset", params.offset.to_string()),
                ],
            )
        })
    }
}
