//! Saved-library operations shared by the album and track tools.
//!
//! Save, remove and check all take a batch of IDs bounded by the
//! collection's per-request limit (20 albums, 50 tracks).

use serde::Serialize;
use tracing::info;

use crate::core::spotify::SpotifyApi;
use crate::core::spotify::models::LibraryItem;
use crate::domains::tools::validation::ensure_id_batch;
use crate::domains::tools::{ToolError, ToolResult};

/// Whether one ID is in the user's library.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SavedStatus {
    pub id: String,
    pub saved: bool,
}

fn validate(kind: LibraryItem, ids: &[String]) -> ToolResult<()> {
    ensure_id_batch(kind.noun(), ids, kind.max_batch())
}

/// Save IDs to the library. Returns how many were sent.
pub async fn save_to_library(
    client: &dyn SpotifyApi,
    kind: LibraryItem,
    ids: &[String],
) -> ToolResult<usize> {
    validate(kind, ids)?;
    info!("Saving {} {}(s) to library", ids.len(), kind.noun());

    client
        .save_library_items(kind, ids)
        .await
        .map_err(|e| ToolError::remote(format!("save {}s", kind.noun()), e))?;
    Ok(ids.len())
}

/// Remove IDs from the library. Returns how many were sent.
pub async fn remove_from_library(
    client: &dyn SpotifyApi,
    kind: LibraryItem,
    ids: &[String],
) -> ToolResult<usize> {
    validate(kind, ids)?;
    info!("Removing {} {}(s) from library", ids.len(), kind.noun());

    client
        .remove_library_items(kind, ids)
        .await
        .map_err(|e| ToolError::remote(format!("remove {}s", kind.noun()), e))?;
    Ok(ids.len())
}

/// Check which IDs are saved, pairing each flag with its ID.
pub async fn check_library(
    client: &dyn SpotifyApi,
    kind: LibraryItem,
    ids: &[String],
) -> ToolResult<Vec<SavedStatus>> {
    validate(kind, ids)?;

    let action = format!("check saved {}s", kind.noun());
    let flags = client
        .check_library_items(kind, ids)
        .await
        .map_err(|e| ToolError::remote(action.as_str(), e))?;
    if flags.len() != ids.len() {
        return Err(ToolError::remote(
            action,
            format!("expected {} results, got {}", ids.len(), flags.len()),
        ));
    }

    Ok(ids
        .iter()
        .zip(flags)
        .map(|(id, saved)| SavedStatus {
            id: id.clone(),
            saved,
        })
        .collect())
}

pub fn saved_message(kind: LibraryItem, count: usize) -> String {
    format!("Successfully saved {count} {}(s) to library", kind.noun())
}

pub fn removed_message(kind: LibraryItem, count: usize) -> String {
    format!("Successfully removed {count} {}(s) from library", kind.noun())
}
