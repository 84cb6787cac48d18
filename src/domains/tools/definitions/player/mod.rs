//! Playback control tools.
//!
//! Each takes an optional `device_id`; without one the user's currently
//! active device is targeted.

pub mod queue;
pub mod seek;
pub mod volume;

pub use queue::{AddToQueueParams, AddToQueueTool};
pub use seek::{SeekParams, SeekToPositionTool};
pub use volume::{SetVolumeParams, SetVolumeTool};

use crate::domains::tools::ToolResult;
use crate::domains::tools::validation::ensure_id;

/// A given device ID must not be blank.
fn ensure_device(device_id: Option<&str>) -> ToolResult<()> {
    device_id.map_or(Ok(()), |id| ensure_id("Device", id))
}
