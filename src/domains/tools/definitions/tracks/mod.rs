//! Track tools: the Liked Songs library.

pub mod library;
pub mod saved;

pub use library::{CheckSavedTracksTool, RemoveTracksTool, SaveTracksTool, TrackIdsParams};
pub use saved::{GetSavedTracksParams, GetSavedTracksTool};
