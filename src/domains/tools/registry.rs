//! Tool Registry - central registration and dispatch for all tools.
//!
//! This module provides:
//! - A registry of all available tool names
//! - HTTP dispatch for tool calls

use std::sync::Arc;

use tracing::warn;

use crate::core::spotify::SpotifyApi;

use super::definitions::{
    AddItemsToPlaylistTool, AddToQueueTool, ChangePlaylistDetailsTool, CheckSavedAlbumsTool,
    CheckSavedTracksTool, CreatePlaylistTool, GetAlbumTool, GetAlbumTracksTool,
    GetPlaylistItemsTool, GetSavedTracksTool, RemoveAlbumsTool, RemoveItemsFromPlaylistTool,
    RemoveTracksTool, SaveAlbumsTool, SaveTracksTool, SeekToPositionTool, SetVolumeTool,
    UpdatePlaylistItemsTool, UploadPlaylistCoverTool,
};
use super::{SpotifyTool, ToolError, dispatch};

// ============================================================================
// Tool Registry
// ============================================================================

/// Tool registry - manages all available tools.
///
/// This struct provides a central point for:
/// - Listing all available tools
/// - Dispatching HTTP tool calls
pub struct ToolRegistry {
    client: Arc<dyn SpotifyApi>,
}

impl ToolRegistry {
    /// Create a new tool registry backed by `client`.
    pub fn new(client: Arc<dyn SpotifyApi>) -> Self {
        Self { client }
    }

    /// Get all tool names.
    pub fn tool_names(&self) -> Vec<&'static str> {
        vec![
            GetAlbumTool::NAME,
            GetAlbumTracksTool::NAME,
            SaveAlbumsTool::NAME,
            RemoveAlbumsTool::NAME,
            CheckSavedAlbumsTool::NAME,
            SaveTracksTool::NAME,
            RemoveTracksTool::NAME,
            CheckSavedTracksTool::NAME,
            GetSavedTracksTool::NAME,
            CreatePlaylistTool::NAME,
            ChangePlaylistDetailsTool::NAME,
            GetPlaylistItemsTool::NAME,
            AddItemsToPlaylistTool::NAME,
            RemoveItemsFromPlaylistTool::NAME,
            UpdatePlaylistItemsTool::NAME,
            UploadPlaylistCoverTool::NAME,
            SetVolumeTool::NAME,
            SeekToPositionTool::NAME,
            AddToQueueTool::NAME,
        ]
    }

    /// Dispatch an HTTP tool call to the appropriate tool.
    ///
    /// Returns the serialized `CallToolResult`. Tool failures are inside that
    /// envelope; `Err` means the call never reached a tool.
    pub async fn call_tool(
        &self,
        name: &str,
        arguments: serde_json::Value,
    ) -> Result<serde_json::Value, String> {
        let client = self.client.as_ref();
        let result = match name {
            GetAlbumTool::NAME => dispatch::<GetAlbumTool>(client, arguments).await,
            GetAlbumTracksTool::NAME => dispatch::<GetAlbumTracksTool>(client, arguments).await,
            SaveAlbumsTool::NAME => dispatch::<SaveAlbumsTool>(client, arguments).await,
            RemoveAlbumsTool::NAME => dispatch::<RemoveAlbumsTool>(client, arguments).await,
            CheckSavedAlbumsTool::NAME => {
                dispatch::<CheckSavedAlbumsTool>(client, arguments).await
            }
            SaveTracksTool::NAME => dispatch::<SaveTracksTool>(client, arguments).await,
            RemoveTracksTool::NAME => dispatch::<RemoveTracksTool>(client, arguments).await,
            CheckSavedTracksTool::NAME => {
                dispatch::<CheckSavedTracksTool>(client, arguments).await
            }
            GetSavedTracksTool::NAME => dispatch::<GetSavedTracksTool>(client, arguments).await,
            CreatePlaylistTool::NAME => dispatch::<CreatePlaylistTool>(client, arguments).await,
            ChangePlaylistDetailsTool::NAME => {
                dispatch::<ChangePlaylistDetailsTool>(client, arguments).await
            }
            GetPlaylistItemsTool::NAME => {
                dispatch::<GetPlaylistItemsTool>(client, arguments).await
            }
            AddItemsToPlaylistTool::NAME => {
                dispatch::<AddItemsToPlaylistTool>(client, arguments).await
            }
            RemoveItemsFromPlaylistTool::NAME => {
                dispatch::<RemoveItemsFromPlaylistTool>(client, arguments).await
            }
            UpdatePlaylistItemsTool::NAME => {
                dispatch::<UpdatePlaylistItemsTool>(client, arguments).await
            }
            UploadPlaylistCoverTool::NAME => {
                dispatch::<UploadPlaylistCoverTool>(client, arguments).await
            }
            SetVolumeTool::NAME => dispatch::<SetVolumeTool>(client, arguments).await,
            SeekToPositionTool::NAME => dispatch::<SeekToPositionTool>(client, arguments).await,
            AddToQueueTool::NAME => dispatch::<AddToQueueTool>(client, arguments).await,
            _ => {
                warn!(
                    "Unknown tool requested: {} (available: {})",
                    name,
                    self.tool_names().join(", ")
                );
                return Err(ToolError::not_found(name).to_string());
            }
        }?;

        serde_json::to_value(result).map_err(|e| e.to_string())
    }
}
