use async_trait::async_trait;
use rmcp::model::CallToolResult;
use schemars::JsonSchema;
use serde::Deserialize;
use tracing::{info, instrument};

use super::ensure_device;
use crate::core::spotify::SpotifyApi;
use crate::domains::tools::envelope::message_response;
use crate::domains::tools::validation::ensure_non_negative;
use crate::domains::tools::{SpotifyTool, ToolError, ToolResult};

#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct SeekParams {
    #[schemars(description = "Position in milliseconds to seek to")]
    #[schemars(range(min = 0))]
    pub position_ms: i64,

    #[schemars(description = "Target device ID (default: the active device)")]
    pub device_id: Option<String>,
}

/// Seek within the current item. Returns the applied position.
pub async fn seek_to_position(client: &dyn SpotifyApi, params: &SeekParams) -> ToolResult<u64> {
    let position = ensure_non_negative("Position", params.position_ms)?;
    let device_id = params.device_id.as_deref();
    ensure_device(device_id)?;

    client
        .seek(position, device_id)
        .await
        .map_err(|e| ToolError::remote("seek to position", e))?;
    Ok(position)
}

pub struct SeekToPositionTool;

#[async_trait]
impl SpotifyTool for SeekToPositionTool {
    const NAME: &'static str = "seek_to_position";
    const TITLE: &'static str = "Seek to Position";
    const DESCRIPTION: &'static str = "Seek to a position (in milliseconds) in the currently playing item. Positions past the end skip to the next item.";

    type Params = SeekParams;

    #[instrument(skip_all, fields(position_ms = params.position_ms))]
    async fn call(client: &dyn SpotifyApi, params: SeekParams) -> CallToolResult {
        info!("Seek tool called");
        message_response(seek_to_position(client, &params).await, |ms| {
            format!("Successfully seeked to position {ms} ms")
        })
    }
}
