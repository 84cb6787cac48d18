//! Album tools: catalog lookup, track listing and the saved-albums library.

pub mod album_tracks;
pub mod get_album;
pub mod library;

pub use album_tracks::{GetAlbumTracksParams, GetAlbumTracksTool};
pub use get_album::{GetAlbumParams, GetAlbumTool};
pub use library::{AlbumIdsParams, CheckSavedAlbumsTool, RemoveAlbumsTool, SaveAlbumsTool};
