//! Saved-album tools: save, remove and check.

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

/// A batch of album IDs.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct AlbumIdsParams {
    #[schemars(description = "Spotify album IDs (1-20)")]
    #[schemars(length(min = 1, max = 20))]
    pub ids: Vec<String>,
}

/// Save albums to the user's library.
pub struct SaveAlbumsTool;

#[async_trait]
impl SpotifyTool for SaveAlbumsTool {
    const NAME: &'static str = "save_albums";
    const TITLE: &'static str = "Save Albums";
    const DESCRIPTION: &'static str =
        "Save one or more albums (up to 20) to the current user's library.";

    type Params = AlbumIdsParams;

    #[instrument(skip_all, fields(count = params.ids.len()))]
    async fn call(client: &dyn SpotifyApi, params: AlbumIdsParams) -> CallToolResult {
        info!("Save albums tool called");
        let result = save_to_library(client, LibraryItem::Album, &params.ids).await;
        message_response(result, |n| saved_message(LibraryItem::Album, n))
    }
}

/// Remove albums from the user's library.
pub struct RemoveAlbumsTool;

#[async_trait]
impl SpotifyTool for RemoveAlbumsTool {
    const NAME: &'static str = "remove_albums";
    const TITLE: &'static str = "Remove Saved Albums";
    const DESCRIPTION: &'static str =
        "Remove one or more albums (up to 20) from the current user's library.";

    type Params = AlbumIdsParams;

    #[instrument(skip_all, fields(count = params.ids.len()))]
    async fn call(client: &dyn SpotifyApi, params: AlbumIdsParams) -> CallToolResult {
        info!("Remove albums tool called");
        let result = remove_from_library(client, LibraryItem::Album, &params.ids).await;
        message_response(result, |n| removed_message(LibraryItem::Album, n))
    }
}

/// Check which albums are saved.
pub struct CheckSavedAlbumsTool;

#[async_trait]
impl SpotifyTool for CheckSavedAlbumsTool {
    const NAME: &'static str = "check_saved_albums";
    const TITLE: &'static str = "Check Saved Albums";
    const DESCRIPTION: &'static str = "Check whether one or more albums (up to 20) are already saved in the current user's library.";

    type Params = AlbumIdsParams;

    #[instrument(skip_all, fields(count = params.ids.len()))]
    async fn call(client: &dyn SpotifyApi, params: AlbumIdsParams) -> CallToolResult {
        info!("Check saved albums tool called");
        let result = check_library(client, LibraryItem::Album, &params.ids).await;
        resource_response(result, || batch_uri("album", "check", &params.ids))
    }
}
