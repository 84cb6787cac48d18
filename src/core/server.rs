//! MCP Server implementation and lifecycle management.
//!
//! This module contains the main server handler that implements the MCP
//! protocol. The server only exposes tools; each tool is a Spotify
//! capability backed by one shared [`SpotifyApi`] client.
//!
//! The ToolRouter is built in `domains/tools/router.rs`.
//! **Adding a new tool does NOT require modifying this file!**

use rmcp::{ServerHandler, handler::server::tool::ToolRouter, model::*, tool_handler};
use std::sync::Arc;
use tracing::info;

use super::config::Config;
use super::spotify::{SpotifyApi, SpotifyWebClient};
use crate::domains::tools::{ToolRegistry, build_tool_router};

/// The main MCP server handler.
///
/// This struct implements the `ServerHandler` trait from rmcp. Tool calls are
/// routed by the tool router; every route shares the same Spotify client.
#[derive(Clone)]
pub struct McpServer {
    /// Server configuration.
    config: Arc<Config>,

    /// Spotify client shared by all tools.
    client: Arc<dyn SpotifyApi>,

    /// Tool router for handling tool calls.
    tool_router: ToolRouter<Self>,
}

impl McpServer {
    /// Create a new MCP server talking to the Spotify Web API.
    pub fn new(config: Config) -> Self {
        let client = Arc::new(SpotifyWebClient::new(&config.spotify));
        Self::with_client(config, client)
    }

    /// Create a server backed by an arbitrary Spotify client.
    pub fn with_client(config: Config, client: Arc<dyn SpotifyApi>) -> Self {
        info!("Building tool router");
        Self {
            tool_router: build_tool_router::<Self>(client.clone()),
            config: Arc::new(config),
            client,
        }
    }

    /// Get the server name.
    pub fn name(&self) -> &str {
        &self.config.server.name
    }

    /// Get the server version.
    pub fn version(&self) -> &str {
        &self.config.server.version
    }

    // ========================================================================
    // HTTP Transport Support Methods
    // ========================================================================

    /// List all available tools (for HTTP transport).
    pub fn list_tools(&self) -> Vec<serde_json::Value> {
        self.tool_router
            .list_all()
            .into_iter()
            .map(|t| {
                serde_json::json!({
                    "name": t.name,
                    "title": t.title,
                    "description": t.description,
                    "inputSchema": t.input_schema
                })
            })
            .collect()
    }

    /// Call a tool by name (for HTTP transport).
    ///
    /// Dispatches through the [`ToolRegistry`]. The returned value is the
    /// serialized `CallToolResult`.
    pub async fn call_tool(
        &self,
        name: &str,
        arguments: serde_json::Value,
    ) -> Result<serde_json::Value, String> {
        let registry = ToolRegistry::new(self.client.clone());
        registry.call_tool(name, arguments).await
    }
}

/// ServerHandler implementation with tool_handler macro for automatic tool routing.
#[tool_handler]
impl ServerHandler for McpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            instructions: Some(
                "Spotify tools: look up albums, manage the saved library, edit playlists \
                 and control playback. Failed calls return a single text block starting \
                 with 'Error: '."
                    .to_string(),
            ),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: self.config.server.name.clone(),
                version: self.config.server.version.clone(),
                ..Implementation::from_build_env()
            },
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::tools::testing::StubSpotify;

    fn test_server() -> McpServer {
        McpServer::with_client(Config::default(), Arc::new(StubSpotify::new()))
    }

    #[test]
    fn test_server_info_exposes_tools_only() {
        let info = test_server().get_info();
        assert!(info.capabilities.tools.is_some());
        assert!(info.capabilities.resources.is_none());
        assert!(info.capabilities.prompts.is_none());
        assert_eq!(info.server_info.name, "spotify-mcp-server");
    }

    #[test]
    fn test_list_tools() {
        let tools = test_server().list_tools();
        assert_eq!(tools.len(), 19);
        assert!(tools.iter().all(|t| t["inputSchema"].is_object()));
    }

    #[tokio::test]
    async fn test_call_tool_resource_envelope() {
        let server = test_server();
        let value = server
            .call_tool(
                "check_saved_albums",
                serde_json::json!({ "ids": ["saved1", "other"] }),
            )
            .await
            .unwrap();

        let resource = &value["content"][0]["resource"];
        assert_eq!(value["content"][0]["type"], "resource");
        assert_eq!(resource["uri"], "spotify:album:check?ids=saved1%2Cother");
        assert_eq!(resource["mimeType"], "application/json");
        let payload: serde_json::Value =
            serde_json::from_str(resource["text"].as_str().unwrap()).unwrap();
        assert_eq!(payload[0]["saved"], true);
        assert_eq!(payload[1]["saved"], false);
    }
}
