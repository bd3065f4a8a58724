//! # CLI Module
//!
//! This module provides the command-line interface layer: all user-facing
//! commands and the coordination between the Spotify API layer, session
//! management, and terminal output.
//!
//! ## Command Categories
//!
//! ### Session
//!
//! - [`auth`] - Initiates the implicit-grant authentication flow
//! - [`logout`] - Clears the stored session token (durable and in-memory)
//!
//! ### Listening History
//!
//! - [`top`] - Top tracks: a single ranked time range, or the cross-range
//!   trend comparison table when no range is given
//!
//! ### Playlists
//!
//! - [`playlists`] - Full paginated playlist listing with optional name
//!   filtering and per-playlist track attachment
//! - [`featured`] - Spotify's currently featured playlists
//!
//! ### Discovery
//!
//! - [`genres`] - Genre seeds accepted by the recommendation endpoint
//! - [`recommend`] - Track recommendations from seed genres/tracks and
//!   audio-feature targets
//!
//! ## Design
//!
//! Each command resolves the session token first (durable storage wins over
//! any in-memory value), constructs one API client, and passes it by
//! reference into the `spotify` layer. Long-running fetches show indicatif
//! progress feedback; results are rendered as tabled tables; failures are
//! surfaced through the colored logging macros.

mod auth;
mod featured;
mod genres;
mod logout;
mod playlists;
mod recommend;
mod top;

pub use auth::auth;
pub use featured::featured;
pub use genres::genres;
pub use logout::logout;
pub use playlists::playlists;
pub use recommend::recommend;
pub use top::top;

use crate::{error, management, spotify::SpotifyClient};

/// Builds a client with the current session token applied, terminating with
/// a pointer to `trendcli auth` when no usable token exists.
pub(crate) async fn authed_client() -> SpotifyClient {
    let mut client = SpotifyClient::new();

    if management::current_token(&mut client).await.is_none() {
        error!("Failed to load token. Please run trendcli auth");
    }

    if let Ok(manager) = management::TokenManager::load().await {
        if manager.is_expired() {
            error!("Access token has expired. Please run trendcli auth");
        }
    }

    client
}
