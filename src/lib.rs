//! Spotify MCP Server Library
//!
//! This crate exposes the Spotify Web API as a set of Model Context Protocol
//! (MCP) tools: album lookup, saved-library management, playlist editing and
//! playback control.
//!
//! # Architecture
//!
//! - **core**: Configuration, error handling, the Spotify client and the server
//! - **domains**: Business logic organized by bounded contexts
//!   - **tools**: MCP tools, their input validation and response envelopes
//!
//! Every tool call validates its input, makes at most one Spotify request and
//! answers with exactly one content block. Failures are reported in-band as
//! `Error: <message>` with `isError: true`.
//!
//! # Example
//!
//! ```rust,no_run
//! use spotify_mcp_server::core::{Config, McpServer, TransportService};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::from_env();
//!     let server = McpServer::new(config.clone());
//!     TransportService::new(config.transport).run(server).await?;
//!     Ok(())
//! }
//! ```

pub mod core;
pub mod domains;

// Re-export commonly used types for convenience
pub use core::{Config, Error, McpServer, Result};
