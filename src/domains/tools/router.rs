//! Tool Router - builds the rmcp ToolRouter.
//!
//! Every route shares one Spotify client; [`tool_route`] turns each tool type
//! into a route.

use std::sync::Arc;

use rmcp::handler::server::tool::ToolRouter;

use crate::core::spotify::SpotifyApi;

use super::definitions::{
    AddItemsToPlaylistTool, AddToQueueTool, ChangePlaylistDetailsTool, CheckSavedAlbumsTool,
    CheckSavedTracksTool, CreatePlaylistTool, GetAlbumTool, GetAlbumTracksTool,
    GetPlaylistItemsTool, GetSavedTracksTool, RemoveAlbumsTool, RemoveItemsFromPlaylistTool,
    RemoveTracksTool, SaveAlbumsTool, SaveTracksTool, SeekToPositionTool, SetVolumeTool,
    UpdatePlaylistItemsTool, UploadPlaylistCoverTool,
};
use super::tool_route;

/// Build the tool router with all registered tools.
pub fn build_tool_router<S>(client: Arc<dyn SpotifyApi>) -> ToolRouter<S>
where
    S: Send + Sync + 'static,
{
    ToolRouter::new()
        .with_route(tool_route::<GetAlbumTool, S>(client.clone()))
        .with_route(tool_route::<GetAlbumTracksTool, S>(client.clone()))
        .with_route(tool_route::<SaveAlbumsTool, S>(client.clone()))
        .with_route(tool_route::<RemoveAlbumsTool, S>(client.clone()))
        .with_route(tool_route::<CheckSavedAlbumsTool, S>(client.clone()))
        .with_route(tool_route::<SaveTracksTool, S>(client.clone()))
        .with_route(tool_route::<RemoveTracksTool, S>(client.clone()))
        .with_route(tool_route::<CheckSavedTracksTool, S>(client.clone()))
        .with_route(tool_route::<GetSavedTracksTool, S>(client.clone()))
        .with_route(tool_route::<CreatePlaylistTool, S>(client.clone()))
        .with_route(tool_route::<ChangePlaylistDetailsTool, S>(client.clone()))
        .with_route(tool_route::<GetPlaylistItemsTool, S>(client.clone()))
        .with_route(tool_route::<AddItemsToPlaylistTool, S>(client.clone()))
        .with_route(tool_route::<RemoveItemsFromPlaylistTool, S>(client.clone()))
        .with_route(tool_route::<UpdatePlaylistItemsTool, S>(client.clone()))
        .with_route(tool_route::<UploadPlaylistCoverTool, S>(client.clone()))
        .with_route(tool_route::<SetVolumeTool, S>(client.clone()))
        .with_route(tool_route::<SeekToPositionTool, S>(client.clone()))
        .with_route(tool_route::<AddToQueueTool, S>(client))
}

#[cfg(test)]
mod tests {
    use super::super::registry::ToolRegistry;
    use super::*;
    use crate::domains::tools::testing::StubSpotify;

    struct TestServer {}

    fn test_client() -> Arc<dyn SpotifyApi> {
        Arc::new(StubSpotify::new())
    }

    #[test]
    fn test_build_router() {
        let router: ToolRouter<TestServer> = build_tool_router(test_client());
        let tools = router.list_all();
        assert_eq!(tools.len(), 19);

        let names: Vec<_> = tools.iter().map(|t| t.name.as_ref()).collect();
        assert!(names.contains(&"get_album_tracks"));
        assert!(names.contains(&"remove_items_from_playlist"));
        assert!(names.contains(&"update_playlist_items"));
        assert!(names.contains(&"add_to_queue"));
    }

    #[test]
    fn test_registry_matches_router() {
        let client = test_client();
        let registry = ToolRegistry::new(client.clone());
        let registry_names = registry.tool_names();

        let router: ToolRouter<TestServer> = build_tool_router(client);
        let router_tools = router.list_all();
        let router_names: Vec<_> = router_tools.iter().map(|t| t.name.as_ref()).collect();

        assert_eq!(registry_names.len(), router_names.len());
        for name in registry_names {
            assert!(router_names.contains(&name));
        }
    }

    #[test]
    fn test_published_schemas_carry_bounds() {
        let router: ToolRouter<TestServer> = build_tool_router(test_client());
        let tools = router.list_all();
        let save_tracks = tools
            .iter()
            .find(|t| t.name == "save_tracks")
            .expect("save_tracks is registered");

        let ids = &save_tracks.input_schema["properties"]["ids"];
        assert_eq!(ids["minItems"], 1);
        assert_eq!(ids["maxItems"], 50);
    }
}
