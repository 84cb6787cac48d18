//! Playlist item removal tool.

use async_trait::async_trait;
use rmcp::model::CallToolResult;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use tracing::{info, instrument};

use crate::core::spotify::SpotifyApi;
use crate::core::spotify::models::ItemToRemove;
use crate::domains::tools::envelope::json_response;
use crate::domains::tools::validation::{
    MAX_PLAYLIST_ITEMS_PER_REQUEST, ensure_id, ensure_index, ensure_item_count,
    ensure_playable_uri,
};
use crate::domains::tools::{SpotifyTool, ToolError, ToolResult};

/// A track to remove, optionally only at the given positions.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct TrackToRemove {
    #[schemars(description = "Track or episode URI")]
    pub uri: String,

    #[schemars(description = "Zero-based positions of the occurrences to remove")]
    pub positions: Option<Vec<i64>>,
}

#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct RemoveItemsParams {
    #[schemars(description = "Spotify ID of the playlist")]
    pub playlist_id: String,

    #[schemars(description = "URIs to remove everywhere in the playlist (1-100). Mutually exclusive with tracks.")]
    pub uris: Option<Vec<String>>,

    #[schemars(description = "URIs with optional positions (1-100). Mutually exclusive with uris.")]
    pub tracks: Option<Vec<TrackToRemove>>,

    #[schemars(description = "Playlist snapshot to apply the removal against")]
    pub snapshot_id: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RemoveItemsOutcome {
    pub snapshot_id: String,
    pub items_removed: usize,
}

fn items_to_remove(params: &RemoveItemsParams) -> ToolResult<Vec<ItemToRemove>> {
    let items = match (&params.uris, &params.tracks) {
        (Some(_), Some(_)) => {
            return Err(ToolError::validation(
                "Cannot provide both uris and tracks parameters",
            ));
        }
        (None, None) => {
            return Err(ToolError::validation(
                "Either uris or tracks must be provided",
            ));
        }
        (Some(uris), None) => uris
            .iter()
            .map(|uri| (uri, None))
            .collect::<Vec<_>>(),
        (None, Some(tracks)) => tracks
            .iter()
            .map(|t| (&t.uri, t.positions.as_deref()))
            .collect(),
    };

    ensure_item_count(items.len(), MAX_PLAYLIST_ITEMS_PER_REQUEST, "remove")?;

    items
        .into_iter()
        .map(|(uri, positions)| {
            ensure_playable_uri(uri)?;
            let positions = positions
                .map(|ps| {
                    ps.iter()
                        .map(|p| ensure_index("Position", *p))
                        .collect::<ToolResult<Vec<_>>>()
                })
                .transpose()?;
            Ok(ItemToRemove {
                uri: uri.clone(),
                positions,
            })
        })
        .collect()
}

/// Remove items from a playlist.
pub async fn remove_items_from_playlist(
    client: &dyn SpotifyApi,
    params: &RemoveItemsParams,
) -> ToolResult<RemoveItemsOutcome> {
    ensure_id("Playlist", &params.playlist_id)?;
    let items = items_to_remove(params)?;

    let snapshot_id = client
        .remove_playlist_items(&params.playlist_id, &items, params.snapshot_id.as_deref())
        .await
        .map_err(|e| ToolError::remote("remove items from playlist", e))?;

    Ok(RemoveItemsOutcome {
        snapshot_id,
        items_removed: items.len(),
    })
}

pub struct RemoveItemsFromPlaylistTool;

#[async_trait]
impl SpotifyTool for RemoveItemsFromPlaylistTool {
    const NAME: &'static str = "remove_items_from_playlist";
    const TITLE: &'static str = "Remove Items from Playlist";
    const DESCRIPTION: &'static str = "Remove up to 100 tracks or episodes from a playlist. Pass either plain uris, or tracks with positions to remove specific occurrences.";

    type Params = RemoveItemsParams;

    #[instrument(skip_all, fields(playlist_id = %params.playlist_id))]
    async fn call(client: &dyn SpotifyApi, params: RemoveItemsParams) -> CallToolResult {
        info!("Remove items from playlist tool called");
        json_response(remove_items_from_playlist(client, &params).await)
    }
}
