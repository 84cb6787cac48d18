//! Spotify Web API access.
//!
//! - `api`: the [`SpotifyApi`] trait the tools depend on
//! - `models`: request and response shapes
//! - `web`: the `reqwest` implementation used in production

mod api;
mod error;
pub mod models;
mod web;

pub use api::SpotifyApi;
pub use error::{ClientError, ClientResult};
pub use web::SpotifyWebClient;
