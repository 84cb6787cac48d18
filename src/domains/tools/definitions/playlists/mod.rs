//! Playlist tools: creation, details, item listing and mutation, cover.

pub mod add_items;
pub mod cover;
pub mod create;
pub mod details;
pub mod get_items;
pub mod remove_items;
pub mod update_items;

pub use add_items::{AddItemsParams, AddItemsToPlaylistTool, SNAPSHOT_UNAVAILABLE};
pub use cover::{UploadCoverParams, UploadPlaylistCoverTool};
pub use create::{CreatePlaylistParams, CreatePlaylistTool, PlaylistSummary};
pub use details::{ChangePlaylistDetailsParams, ChangePlaylistDetailsTool};
pub use get_items::{GetPlaylistItemsParams, GetPlaylistItemsTool};
pub use remove_items::{RemoveItemsFromPlaylistTool, RemoveItemsParams};
pub use update_items::{UpdateItemsParams, UpdatePlaylistItemsTool};
