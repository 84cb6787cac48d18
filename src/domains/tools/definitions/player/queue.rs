use async_trait::async_trait;
use rmcp::model::CallToolResult;
use schemars::JsonSchema;
use serde::Deserialize;
use tracing::{info, instrument};

use super::ensure_device;
use crate::core::spotify::SpotifyApi;
use crate::domains::tools::envelope::message_response;
use crate::domains::tools::validation::ensure_playable_uri;
use crate::domains::tools::{SpotifyTool, ToolError, ToolResult};

#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct AddToQueueParams {
    #[schemars(description = "Track or episode URI, e.g. spotify:track:4iV5W9uYEdYUVa79Axb7Rh")]
    pub uri: String,

    #[schemars(description = "Target device ID (default: the active device)")]
    pub device_id: Option<String>,
}

/// Append an item to the playback queue.
pub async fn add_to_queue(client: &dyn SpotifyApi, params: &AddToQueueParams) -> ToolResult<()> {
    ensure_playable_uri(&params.uri)?;
    let device_id = params.device_id.as_deref();
    ensure_device(device_id)?;

    client
        .add_to_queue(&params.uri, device_id)
        .await
        .map_err(|e| ToolError::remote("add item to queue", e))
}

pub struct AddToQueueTool;

#[async_trait]
impl SpotifyTool for AddToQueueTool {
    const NAME: &'static str = "add_to_queue";
    const TITLE: &'static str = "Add to Queue";
    const DESCRIPTION: &'static str =
        "Add a track or episode to the end of the playback queue of the active or given device.";

    type Params = AddToQueueParams;

    #[instrument(skip_all, fields(uri = %params.uri))]
    async fn call(client: &dyn SpotifyApi, params: AddToQueueParams) -> CallToolResult {
        info!("Add to queue tool called");
        let result = add_to_queue(client, &params).await;
        message_response(result, |()| {
            format!("Successfully added {} to queue", params.uri)
        })
    }
}
