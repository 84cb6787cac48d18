use async_trait::async_trait;
use rmcp::model::CallToolResult;
use schemars::JsonSchema;
use serde::Deserialize;
use tracing::{info, instrument};

use super::ensure_device;
use crate::core::spotify::SpotifyApi;
use crate::domains::tools::envelope::message_response;
use crate::domains::tools::validation::ensure_volume;
use crate::domains::tools::{SpotifyTool, ToolError, ToolResult};

#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct SetVolumeParams {
    #[schemars(description = "Volume to set (0-100)")]
    #[schemars(range(min = 0, max = 100))]
    pub volume_percent: i64,

    #[schemars(description = "Target device ID (default: the active device)")]
    pub device_id: Option<String>,
}

/// Set playback volume. Returns the applied percentage.
pub async fn set_volume(client: &dyn SpotifyApi, params: &SetVolumeParams) -> ToolResult<u8> {
    let volume = ensure_volume(params.volume_percent)?;
    let device_id = params.device_id.as_deref();
    ensure_device(device_id)?;

    client
        .set_volume(volume, device_id)
        .await
        .map_err(|e| ToolError::remote("set volume", e))?;
    Ok(volume)
}

pub struct SetVolumeTool;

#[async_trait]
impl SpotifyTool for SetVolumeTool {
    const NAME: &'static str = "set_volume";
    const TITLE: &'static str = "Set Volume";
    const DESCRIPTION: &'static str = "Set the playback volume (0-100) of the active or given device.";

    type Params = SetVolumeParams;

    #[instrument(skip_all, fields(volume = params.volume_percent))]
    async fn call(client: &dyn SpotifyApi, params: SetVolumeParams) -> CallToolResult {
        info!("Set volume tool called");
        message_response(set_volume(client, &params).await, |v| {
            format!("Successfully set volume to {v}%")
        })
    }
}
