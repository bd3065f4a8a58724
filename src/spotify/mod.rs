//! # Spotify Integration Module
//!
//! This module provides the interface to the Spotify Web API: an explicit,
//! passed-by-reference client, exhaustive pagination over collection
//! endpoints, and the implicit-grant authentication flow. It is the layer
//! every CLI command goes through to reach Spotify.
//!
//! ## Architecture
//!
//! ```text
//! Application Layer (CLI, Management)
//!          ↓
//! Spotify Integration Layer
//!     ├── Client (typed endpoints, bearer token)
//!     ├── Pages (exhaustive pagination)
//!     ├── Tracks (top tracks per time range)
//!     ├── Playlists (listing + track attachment)
//!     └── Authentication (implicit grant)
//!          ↓
//! HTTP Layer (reqwest, JSON)
//!          ↓
//! Spotify Web API
//! ```
//!
//! ## Core Modules
//!
//! [`client`] - The [`SpotifyClient`] object. Constructed once at startup
//! and handed by reference to everything that performs API calls; holds the
//! in-memory bearer token and decodes every response into the typed records
//! in [`crate::types`] at this boundary. Undecodable bodies fail fast as
//! [`ApiError::MalformedResponse`] instead of being treated as empty.
//!
//! [`pages`] - Exhaustive pagination. A paginated collection is traversed by
//! following `next` links one at a time until none remains; items are
//! concatenated in visit order. Termination never depends on the `total` and
//! `limit` metadata, which some endpoints report only approximately; that
//! arithmetic survives solely as a progress-display hint.
//!
//! [`tracks`] - Top-track retrieval per rolling time range, with the three
//! independent ranges fetched concurrently and merged by range key.
//!
//! [`playlists`] - Full playlist listing and concurrent per-playlist track
//! attachment (first page per playlist, all-or-nothing).
//!
//! [`auth`] - Implicit-grant flow: authorization URL construction, local
//! callback server hand-off, browser launch, token persistence. The grant
//! returns the token in the redirect's URL fragment, so no client secret is
//! ever held.
//!
//! ## Error Handling
//!
//! All fallible operations return [`ApiError`]. Failures during a
//! multi-page aggregation or a concurrent batch propagate immediately; no
//! retry or partial result is produced at this layer. The CLI layer decides
//! how to surface the failure.
//!
//! ## Concurrency
//!
//! Within one collection, page fetches are sequential by construction (each
//! `next` URL is only known after the previous page is parsed). Across
//! independent collections the module uses spawned tokio tasks and merges
//! results by identity key, never by arrival order. An aggregation in
//! flight cannot be cancelled.

pub mod auth;
pub mod client;
mod error;
pub mod pages;
pub mod playlists;
pub mod tracks;

pub use client::SpotifyClient;
pub use error::ApiError;
