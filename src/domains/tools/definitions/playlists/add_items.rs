//! Playlist item insertion tool.

use async_trait::async_trait;
use rmcp::model::CallToolResult;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use tracing::{info, instrument, warn};

use crate::core::spotify::SpotifyApi;
use crate::domains::tools::envelope::json_response;
use crate::domains::tools::validation::{
    MAX_PLAYLIST_ITEMS_PER_REQUEST, ensure_id, ensure_index, ensure_playable_uris,
};
use crate::domains::tools::{SpotifyTool, ToolError, ToolResult};

/// Reported in place of a snapshot when the client cannot provide one.
pub const SNAPSHOT_UNAVAILABLE: &str = "not-available-due-to-sdk-limitation";

#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct AddItemsParams {
    #[schemars(description = "Spotify ID of the playlist")]
    pub playlist_id: String,

    #[schemars(description = "Track or episode URIs to add (1-100), e.g. spotify:track:4iV5W9uYEdYUVa79Axb7Rh")]
    #[schemars(length(min = 1, max = 100))]
    pub uris: Vec<String>,

    #[schemars(description = "Zero-based index to insert at (default: append)")]
    #[schemars(range(min = 0))]
    pub position: Option<i64>,
}

/// Outcome of a playlist item mutation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AddItemsOutcome {
    pub snapshot_id: String,
    pub items_added: usize,
}

/// Insert items into a playlist.
pub async fn add_items_to_playlist(
    client: &dyn SpotifyApi,
    params: &AddItemsParams,
) -> ToolResult<AddItemsOutcome> {
    ensure_id("Playlist", &params.playlist_id)?;
    ensure_playable_uris(&params.uris, MAX_PLAYLIST_ITEMS_PER_REQUEST, "add")?;
    let position = params
        .position
        .map(|p| ensure_index("Position", p))
        .transpose()?;

    let snapshot_id = client
        .add_playlist_items(&params.playlist_id, &params.uris, position)
        .await
        .map_err(|e| ToolError::remote("add items to playlist", e))?
        .unwrap_or_else(|| {
            warn!("Client returned no snapshot for playlist {}", params.playlist_id);
            SNAPSHOT_UNAVAILABLE.to_string()
        });

    Ok(AddItemsOutcome {
        snapshot_id,
        items_added: params.uris.len(),
    })
}

pub struct AddItemsToPlaylistTool;

#[async_trait]
impl SpotifyTool for AddItemsToPlaylistTool {
    const NAME: &'static str = "add_items_to_playlist";
    const TITLE: &'static str = "Add Items to Playlist";
    const DESCRIPTION: &'static str = "Add up to 100 tracks or episodes to a playlist, appended or inserted at a position. Returns the playlist's new snapshot ID.";

    type Params = AddItemsParams;

    #[instrument(skip_all, fields(playlist_id = %params.playlist_id, count = params.uris.len()))]
    async fn call(client: &dyn SpotifyApi, params: AddItemsParams) -> CallToolResult {
        info!("Add items to playlist tool called");
        json_response(add_items_to_playlist(client, &params).await)
    }
}
