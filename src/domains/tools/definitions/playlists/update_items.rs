//! Playlist item update tool: replace all items, or move a range.

use async_trait::async_trait;
use rmcp::model::CallToolResult;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use tracing::{info, instrument};

use crate::core::spotify::SpotifyApi;
use crate::core::spotify::models::PlaylistItemsUpdate;
use crate::domains::tools::envelope::json_response;
use crate::domains::tools::validation::{
    MAX_PLAYLIST_ITEMS_PER_REQUEST, ensure_id, ensure_index, ensure_playable_uri, ensure_positive,
};
use crate::domains::tools::{SpotifyTool, ToolError, ToolResult};

#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct UpdateItemsParams {
    #[schemars(description = "Spotify ID of the playlist")]
    pub playlist_id: String,

    #[schemars(description = "Replace every item with these track or episode URIs (0-100). Mutually exclusive with the range parameters.")]
    #[schemars(length(max = 100))]
    pub uris: Option<Vec<String>>,

    #[schemars(description = "Position of the first item to move")]
    #[schemars(range(min = 0))]
    pub range_start: Option<i64>,

    #[schemars(description = "Position to move the items before")]
    #[schemars(range(min = 0))]
    pub insert_before: Option<i64>,

    #[schemars(description = "Number of items to move (default: 1)")]
    #[schemars(range(min = 1))]
    pub range_length: Option<i64>,

    #[schemars(description = "Playlist snapshot to apply the reorder against. Not accepted with uris.")]
    pub snapshot_id: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UpdateItemsOutcome {
    pub snapshot_id: String,
}

/// Turn the flat parameter set into exactly one kind of update.
///
/// Replace mode accepts an empty list, which clears the playlist.
fn resolve_update(params: &UpdateItemsParams) -> ToolResult<PlaylistItemsUpdate> {
    let has_range = params.range_start.is_some() || params.insert_before.is_some();

    match (&params.uris, has_range) {
        (Some(_), true) => Err(ToolError::validation(
            "Cannot provide both uris and range parameters",
        )),
        (None, false) => Err(ToolError::validation(
            "Either uris or range_start and insert_before must be provided",
        )),
        (Some(uris), false) => {
            if params.snapshot_id.is_some() {
                return Err(ToolError::validation(
                    "snapshot_id can only be used when moving a range of items",
                ));
            }
            if uris.len() > MAX_PLAYLIST_ITEMS_PER_REQUEST {
                return Err(ToolError::validation(format!(
                    "Cannot replace more than {MAX_PLAYLIST_ITEMS_PER_REQUEST} items at once"
                )));
            }
            uris.iter().try_for_each(|uri| ensure_playable_uri(uri))?;
            Ok(PlaylistItemsUpdate::Replace { uris: uris.clone() })
        }
        (None, true) => {
            let (Some(range_start), Some(insert_before)) =
                (params.range_start, params.insert_before)
            else {
                return Err(ToolError::validation(
                    "range_start and insert_before must be provided together",
                ));
            };
            Ok(PlaylistItemsUpdate::Reorder {
                range_start: ensure_index("Range start", range_start)?,
                insert_before: ensure_index("Insert before", insert_before)?,
                range_length: params
                    .range_length
                    .map(|n| ensure_positive("Range length", n))
                    .transpose()?,
                snapshot_id: params.snapshot_id.clone(),
            })
        }
    }
}

/// Replace or reorder a playlist's items.
pub async fn update_playlist_items(
    client: &dyn SpotifyApi,
    params: &UpdateItemsParams,
) -> ToolResult<UpdateItemsOutcome> {
    ensure_id("Playlist", &params.playlist_id)?;
    let update = resolve_update(params)?;

    let snapshot_id = client
        .update_playlist_items(&params.playlist_id, &update)
        .await
        .map_err(|e| ToolError::remote("update playlist items", e))?;
    Ok(UpdateItemsOutcome { snapshot_id })
}

pub struct UpdatePlaylistItemsTool;

#[async_trait]
impl SpotifyTool for UpdatePlaylistItemsTool {
    const NAME: &'static str = "update_playlist_items";
    const TITLE: &'static str = "Update Playlist Items";
    const DESCRIPTION: &'static str = "Either replace all items of a playlist with a list of URIs, or move a range of items (range_start, insert_before, optional range_length) to a new position.";

    type Params = UpdateItemsParams;

    #[instrument(skip_all, fields(playlist_id = %params.playlist_id))]
    async fn call(client: &dyn SpotifyApi, params: UpdateItemsParams) -> CallToolResult {
        info!("Update playlist items tool called");
        json_response(update_playlist_items(client, &params).await)
    }
}
