//! Domains module containing business logic organized by bounded contexts.
//!
//! The server only exposes tools; each Spotify capability is one tool.

pub mod tools;
