//! Liked Songs listing tool (paginated).

use async_trait::async_trait;
use rmcp::model::CallToolResult;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use tracing::{info, instrument};

use crate::core::spotify::SpotifyApi;
use crate::core::spotify::models::{Page, SavedTrack};
use crate::domains::tools::definitions::common::{
    TrackSummary, best_image, default_limit, paging,
};
use crate::domains::tools::envelope::{action_uri, resource_response};
use crate::domains::tools::validation::ensure_market;
use crate::domains::tools::{SpotifyTool, ToolError, ToolResult};

#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct GetSavedTracksParams {
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

/// A saved track with the single best album cover.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SavedTrackEntry {
    pub added_at: String,
    #[serde(flatten)]
    pub track: TrackSummary,
    pub image: Option<String>,
}

impl From<SavedTrack> for SavedTrackEntry {
    fn from(saved: SavedTrack) -> Self {
        let image = saved
            .track
            .album
            .as_ref()
            .and_then(|album| best_image(&album.images));
        Self {
            added_at: saved.added_at,
            track: saved.track.into(),
            image,
        }
    }
}

/// List one page of the user's saved tracks.
pub async fn get_saved_tracks(
    client: &dyn SpotifyApi,
    limit: i64,
    offset: i64,
    market: Option<&str>,
) -> ToolResult<Page<SavedTrackEntry>> {
    let (limit, offset) = paging(limit, offset)?;
    ensure_market(market)?;

    let page = client
        .get_saved_tracks(market, limit, offset)
        .await
        .map_err(|e| ToolError::remote("get saved tracks", e))?;
    Ok(page.map(SavedTrackEntry::from))
}

pub struct GetSavedTracksTool;

#[async_trait]
impl SpotifyTool for GetSavedTracksTool {
    const NAME: &'static str = "get_saved_tracks";
    const TITLE: &'static str = "Get Saved Tracks";
    const DESCRIPTION: &'static str = "List the tracks in the current user's Liked Songs, most recently added first. Use limit and offset to page.";

    type Params = GetSavedTracksParams;

    #[instrument(skip_all, fields(limit = params.limit, offset = params.offset))]
    async fn call(client: &dyn SpotifyApi, params: GetSavedTracksParams) -> CallToolResult {
        info!("Get saved tracks tool called");
        let result =
            get_saved_tracks(client, params.limit, params.offset, params.market.as_deref()).await;

        resource_response(result, || {
            action_uri(
                "library",
                "tracks",
                &[
                    ("limit", params.limit.to_string()),
                    ("offset", params.offset.to_string()),
                ],
            )
        })
    }
}
