//! Saved-track tools: save, remove and check.

use async_trait::async_trait;
use rmcp::model::CallToolResult;
use schemars::JsonSchema;
use serde::Deserialize;
use tracing::{info, instrument};

use crate::core::spotify::SpotifyApi;
use crate::core::spotify::models::LibraryItem;
use crate::domains::tools::SpotifyTool;
use crate::domains::tools::definitions::library::{
    check_library, remove_from_library, removed_message, save_to_library, saved_message,
};
use crate::domains::tools::envelope::{batch_uri, message_response, resource_response};

/// A batch of track IDs.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct TrackIdsParams {
    #[schemars(description = "Spotify track IDs (1-50)")]
    #[schemars(length(min = 1, max = 50))]
    pub ids: Vec<String>,
}

pub struct SaveTracksTool;

#[async_trait]
impl SpotifyTool for SaveTracksTool {
    const NAME: &'static str = "save_tracks";
    const TITLE: &'static str = "Save Tracks";
    const DESCRIPTION: &'static str =
        "Save one or more tracks (up to 50) to the current user's Liked Songs.";

    type Params = TrackIdsParams;

    #[instrument(skip_all, fields(count = params.ids.len()))]
    async fn call(client: &dyn SpotifyApi, params: TrackIdsParams) -> CallToolResult {
        info!("Save tracks tool called");
        let result = save_to_library(client, LibraryItem::Track, &params.ids).await;
        message_response(result, |n| saved_message(LibraryItem::Track, n))
    }
}

pub struct RemoveTracksTool;

#[async_trait]
impl SpotifyTool for RemoveTracksTool {
    const NAME: &'static str = "remove_tracks";
    const TITLE: &'static str = "Remove Saved Tracks";
    const DESCRIPTION: &'static str =
        "Remove one or more tracks (up to 50) from the current user's Liked Songs.";

    type Params = TrackIdsParams;

    #[instrument(skip_all, fields(count = params.ids.len()))]
    async fn call(client: &dyn SpotifyApi, params: TrackIdsParams) -> CallToolResult {
        info!("Remove tracks tool called");
        let result = remove_from_library(client, LibraryItem::Track, &params.ids).await;
        message_response(result, |n| removed_message(LibraryItem::Track, n))
    }
}

pub struct CheckSavedTracksTool;

#[async_trait]
impl SpotifyTool for CheckSavedTracksTool {
    const NAME: &'static str = "check_saved_tracks";
    const TITLE: &'static str = "Check Saved Tracks";
    const DESCRIPTION: &'static str =
        "Check whether one or more tracks (up to 50) are in the current user's Liked Songs.";

    type Params = TrackIdsParams;

    #[instrument(skip_all, fields(count = params.ids.len()))]
    async fn call(client: &dyn SpotifyApi, params: TrackIdsParams) -> CallToolResult {
        info!("Check saved tracks tool called");
        let result = check_library(client, LibraryItem::Track, &params.ids).await;
        resource_response(result, || batch_uri("track", "check", &params.ids))
    }
}
