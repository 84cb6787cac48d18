//! Tool definitions module.
//!
//! One file per tool, grouped by Spotify resource. `common` and `library`
//! hold the reshaping and save/remove/check logic the groups share.

pub mod albums;
pub mod common;
pub mod library;
pub mod player;
pub mod playlists;
pub mod tracks;

pub use albums::{
    CheckSavedAlbumsTool, GetAlbumTool, GetAlbumTracksTool, RemoveAlbumsTool, SaveAlbumsTool,
};
pub use player::{AddToQueueTool, SeekToPositionTool, SetVolumeTool};
pub use playlists::{
    AddItemsToPlaylistTool, ChangePlaylistDetailsTool, CreatePlaylistTool, GetPlaylistItemsTool,
    RemoveItemsFromPlaylistTool, UpdatePlaylistItemsTool, UploadPlaylistCoverTool,
};
pub use tracks::{CheckSavedTracksTool, GetSavedTracksTool, RemoveTracksTool, SaveTracksTool};
