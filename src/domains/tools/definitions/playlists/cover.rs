//! Playlist cover upload tool.

use async_trait::async_trait;
use rmcp::model::CallToolResult;
use schemars::JsonSchema;
use serde::Deserialize;
use tracing::{debug, info, instrument};

use crate::core::spotify::SpotifyApi;
use crate::domains::tools::envelope::message_response;
use crate::domains::tools::validation::{decode_cover_image, ensure_id};
use crate::domains::tools::{SpotifyTool, ToolError, ToolResult};

#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct UploadCoverParams {
    #[schemars(description = "Spotify ID of the playlist")]
    pub playlist_id: String,

    #[schemars(description = "Base64-encoded JPEG image, at most 256KB once decoded")]
    pub image_base64: String,
}

/// Replace a playlist's cover image.
pub async fn upload_playlist_cover(
    client: &dyn SpotifyApi,
    params: &UploadCoverParams,
) -> ToolResult<()> {
    ensure_id("Playlist", &params.playlist_id)?;
    let image = decode_cover_image(&params.image_base64)?;
    debug!("Uploading {} byte cover image", image.len());

    client
        .upload_playlist_cover(&params.playlist_id, &params.image_base64)
        .await
        .map_err(|e| ToolError::remote("upload playlist cover", e))
}

pub struct UploadPlaylistCoverTool;

#[async_trait]
impl SpotifyTool for UploadPlaylistCoverTool {
    const NAME: &'static str = "upload_playlist_cover";
    const TITLE: &'static str = "Upload Playlist Cover";
    const DESCRIPTION: &'static str =
        "Replace a playlist's cover image with a base64-encoded JPEG (at most 256KB).";

    type Params = UploadCoverParams;

    #[instrument(skip_all, fields(playlist_id = %params.playlist_id))]
    async fn call(client: &dyn SpotifyApi, params: UploadCoverParams) -> CallToolResult {
        info!("Upload playlist cover tool called");
        let result = upload_playlist_cover(client, &params).await;
        message_response(result, |()| {
            format!(
                "Successfully uploaded cover image for playlist {}",
                params.playlist_id
            )
        })
    }
}
