//! Playlist details tool: rename, describe, change visibility.

use async_trait::async_trait;
use rmcp::model::CallToolResult;
use schemars::JsonSchema;
use serde::Deserialize;
use tracing::{info, instrument};

use crate::core::spotify::SpotifyApi;
use crate::core::spotify::models::PlaylistDetails;
use crate::domains::tools::envelope::message_response;
use crate::domains::tools::validation::{ensure_id, resolve_public_flag};
use crate::domains::tools::{SpotifyTool, ToolError, ToolResult};

#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct ChangePlaylistDetailsParams {
    #[schemars(description = "Spotify ID of the playlist")]
    pub playlist_id: String,

    #[schemars(description = "New playlist name")]
    pub name: Option<String>,

    #[schemars(description = "New playlist description")]
    pub description: Option<String>,

    #[schemars(description = "Whether the playlist is public")]
    pub public: Option<bool>,

    #[schemars(description = "Whether other users can modify the playlist")]
    pub collaborative: Option<bool>,
}

/// Change one or more playlist attributes.
pub async fn change_playlist_details(
    client: &dyn SpotifyApi,
    params: &ChangePlaylistDetailsParams,
) -> ToolResult<()> {
    ensure_id("Playlist", &params.playlist_id)?;
    if params.name.is_none()
        && params.description.is_none()
        && params.public.is_none()
        && params.collaborative.is_none()
    {
        return Err(ToolError::validation(
            "At least one of name, description, public or collaborative must be provided",
        ));
    }
    if params.name.as_deref().is_some_and(|n| n.trim().is_empty()) {
        return Err(ToolError::validation("Playlist name must not be empty"));
    }
    let public = resolve_public_flag(params.public, params.collaborative)?;

    let details = PlaylistDetails {
        name: params.name.clone(),
        public,
        collaborative: params.collaborative,
        description: params.description.clone(),
    };

    client
        .change_playlist_details(&params.playlist_id, &details)
        .await
        .map_err(|e| ToolError::remote("change playlist details", e))
}

pub struct ChangePlaylistDetailsTool;

#[async_trait]
impl SpotifyTool for ChangePlaylistDetailsTool {
    const NAME: &'static str = "change_playlist_details";
    const TITLE: &'static str = "Change Playlist Details";
    const DESCRIPTION: &'static str = "Change a playlist's name, description, public flag or collaborative flag. Only the given fields are changed.";

    type Params = ChangePlaylistDetailsParams;

    #[instrument(skip_all, fields(playlist_id = %params.playlist_id))]
    async fn call(client: &dyn SpotifyApi, params: ChangePlaylistDetailsParams) -> CallToolResult {
        info!("Change playlist details tool called");
        let result = change_playlist_details(client, &params).await;
        message_response(result, |()| {
            format!(
                "Successfully updated details of playlist {}",
                params.playlist_id
            )
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::tools::testing::{Call, StubSpotify, text_of};

    fn params(json: serde_json::Value) -> ChangePlaylistDetailsParams {
        serde_json::from_value(json).unwrap()
    }

    #[tokio::test]
    async fn test_rename_sends_only_name() {
        let stub = StubSpotify::new();
        let result = ChangePlaylistDetailsTool::call(
            &stub,
            params(serde_json::json!({"playlist_id": "p1", "name": "Renamed"})),
        )
        .await;

        assert_eq!(text_of(&result), "Successfully updated details of playlist p1");
        assert_eq!(
            stub.calls(),
            vec![Call::ChangePlaylistDetails {
                playlist_id: "p1".to_string(),
                details: PlaylistDetails {
                    name: Some("Renamed".to_string()),
                    ..Default::default()
                }
            }]
        );
    }

    #[tokio::test]
    async fn test_nothing_to_change() {
        let stub = StubSpotify::new();
        let result =
            ChangePlaylistDetailsTool::call(&stub, params(serde_json::json!({"playlist_id": "p1"})))
                .await;
        assert_eq!(
            text_of(&result),
            "Error: At least one of name, description, public or collaborative must be provided"
        );
    }

    #[tokio::test]
    async fn test_collaborative_public_conflict() {
        let stub = StubSpotify::new();
        let result = ChangePlaylistDetailsTool::call(
            &stub,
            params(serde_json::json!({"playlist_id": "p1", "public": true, "collaborative": true})),
        )
        .await;
        assert_eq!(text_of(&result), "Error: Collaborative playlists must be private");
        assert!(stub.calls().is_empty());
    }

    #[tokio::test]
    async fn test_remote_failure() {
        let stub = StubSpotify::failing("Forbidden (HTTP 403)");
        let result = ChangePlaylistDetailsTool::call(
            &stub,
            params(serde_json::json!({"playlist_id": "p1", "description": "new"})),
        )
        .await;
        assert_eq!(
            text_of(&result),
            "Error: Failed to change playlist details: Forbidden (HTTP 403)"
        );
    }
}
