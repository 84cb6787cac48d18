//! Tools domain module.
//!
//! Every Spotify capability is exposed as one MCP tool. A tool validates its
//! input, makes one call through [`SpotifyApi`](crate::core::spotify::SpotifyApi)
//! and renders the outcome as a single-block response envelope.
//!
//! ## Architecture
//!
//! - `definitions/` - Individual tool implementations (one file per tool)
//! - `validation.rs` - Input rules shared by all tools
//! - `envelope.rs` - Result to `CallToolResult` rendering and resource URIs
//! - `handlers.rs` - The `SpotifyTool` trait and route glue
//! - `router.rs` - Dynamic ToolRouter builder for STDIO transport
//! - `registry.rs` - Central tool registry and HTTP dispatch
//! - `error.rs` - Tool-specific error types
//!
//! ## Adding a New Tool
//!
//! 1. Create a new file in `definitions/<group>/`
//! 2. Define params, the operation function and a `SpotifyTool` impl
//! 3. Export in `definitions/mod.rs`
//! 4. Add the route in `router.rs` using `with_route()`
//! 5. Register it in `registry.rs` for HTTP support

pub mod definitions;
pub mod envelope;
mod error;
mod handlers;
mod registry;
pub mod router;
pub mod validation;

#[cfg(test)]
pub(crate) mod testing;

pub use error::{ToolError, ToolResult};
pub use handlers::*;
pub use registry::ToolRegistry;
pub use router::build_tool_router;
