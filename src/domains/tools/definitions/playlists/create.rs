//! Playlist creation tool.

use async_trait::async_trait;
use rmcp::model::CallToolResult;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use tracing::{info, instrument};

use crate::core::spotify::SpotifyApi;
use crate::core::spotify::models::{Playlist, PlaylistDetails};
use crate::domains::tools::envelope::json_response;
use crate::domains::tools::validation::{ensure_id, resolve_public_flag};
use crate::domains::tools::{SpotifyTool, ToolError, ToolResult};

#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct CreatePlaylistParams {
    #[schemars(description = "Spotify user ID of the playlist owner (the current user)")]
    pub user_id: String,

    #[schemars(description = "Name of the new playlist")]
    pub name: String,

    #[schemars(description = "Playlist description")]
    pub description: Option<String>,

    #[schemars(
        description = "Whether the playlist is public. Collaborative playlists are always private."
    )]
    pub public: Option<bool>,

    #[schemars(description = "Whether other users can modify the playlist")]
    pub collaborative: Option<bool>,
}

/// Playlist as returned to clients.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlaylistSummary {
    pub id: String,
    pub name: String,
    pub description: Option<String>,
    pub public: Option<bool>,
    pub collaborative: bool,
    pub owner: Option<String>,
    pub snapshot_id: Option<String>,
    pub uri: Option<String>,
    pub external_url: Option<String>,
}

impl From<Playlist> for PlaylistSummary {
    fn from(playlist: Playlist) -> Self {
        Self {
            id: playlist.id,
            name: playlist.name,
            description: playlist.description,
            public: playlist.public,
            collaborative: playlist.collaborative,
            owner: playlist
                .owner
                .map(|o| o.display_name.unwrap_or(o.id)),
            snapshot_id: playlist.snapshot_id,
            uri: playlist.uri,
            external_url: playlist.external_urls.spotify,
        }
    }
}

/// Create a playlist for `user_id`.
pub async fn create_playlist(
    client: &dyn SpotifyApi,
    params: &CreatePlaylistParams,
) -> ToolResult<PlaylistSummary> {
    ensure_id("User", &params.user_id)?;
    if params.name.trim().is_empty() {
        return Err(ToolError::validation("Playlist name must not be empty"));
    }
    let public = resolve_public_flag(params.public, params.collaborative)?;

    let details = PlaylistDetails {
        name: Some(params.name.clone()),
        public,
        collaborative: params.collaborative,
        description: params.description.clone(),
    };

    let playlist = client
        .create_playlist(&params.user_id, &details)
        .await
        .map_err(|e| ToolError::remote("create playlist", e))?;
    info!("Created playlist {}", playlist.id);
    Ok(playlist.into())
}

pub struct CreatePlaylistTool;

#[async_trait]
impl SpotifyTool for CreatePlaylistTool {
    const NAME: &'static str = "create_playlist";
    const TITLE: &'static str = "Create Playlist";
    const DESCRIPTION: &'static str = "Create a new playlist for the current user. Collaborative playlists must be private; omitting `public` for a collaborative playlist makes it private.";

    type Params = CreatePlaylistParams;

    #[instrument(skip_all, fields(name = %params.name))]
    async fn call(client: &dyn SpotifyApi, params: CreatePlaylistParams) -> CallToolResult {
        info!("Create playlist tool called");
        json_response(create_playlist(client, &params).await)
    }
}
