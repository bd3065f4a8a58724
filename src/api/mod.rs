//! # API Module
//!
//! HTTP endpoints for the local callback server that completes the
//! implicit-grant authentication flow, plus a health check.
//!
//! ## Endpoints
//!
//! ### Authentication
//!
//! - [`callback`] - Landing page for the authorization redirect. Spotify
//!   delivers the access token in the URL fragment, which never reaches a
//!   server; this page relays the fragment to `/token` as a query string
//!   and replaces the token-bearing URL so it is not left in the browser
//!   history.
//! - [`token`] - Receives the relayed fragment, extracts the access token
//!   and delivers it to the waiting CLI auth flow through shared state.
//!
//! ### Monitoring
//!
//! - [`health`] - Returns application status and version information.
//!
//! ## Architecture
//!
//! The module is built using the [Axum](https://docs.rs/axum) web framework.
//! Each endpoint is an async function wired into the router in
//! [`crate::server`]. The token slot is shared with the CLI flow through an
//! `Arc<Mutex<Option<Token>>>` extension layer.
//!
//! ## Related Modules
//!
//! - [`crate::spotify::auth`] - Orchestrates the flow this server serves
//! - [`crate::types`] - Token type delivered through shared state

mod callback;
mod health;

pub use callback::callback;
pub use callback::token;
pub use health::health;
