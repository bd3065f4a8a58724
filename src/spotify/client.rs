use reqwest::Client;
use serde::de::DeserializeOwned;

use crate::{
    config,
    spotify::ApiError,
    types::{
        FeaturedPlaylistsResponse, GenreSeedsResponse, Page, Playlist, RecommendationCriteria,
        RecommendationsResponse, TimeRange, Track, UserProfile,
    },
};

/// Page size requested from collection endpoints (50 is the API maximum).
const PAGE_LIMIT: u64 = 50;

/// Authenticated Spotify Web API client.
///
/// One instance is constructed at startup and passed by reference to every
/// operation that talks to the API; there is no ambient global. The client
/// holds the bearer token as its only mutable state. The token held here is
/// the in-memory copy; the durable copy lives in the token cache and wins
/// over this one whenever both exist (see `management::current_token`).
///
/// Cloning is cheap (the underlying HTTP client is reference-counted) and is
/// used to hand the client to concurrently spawned fetch tasks.
///
/// # Example
///
/// ```
/// let mut client = SpotifyClient::new();
/// client.set_access_token("BQC...");
/// let playlists = client.get_user_playlists().await?;
/// ```
#[derive(Debug, Clone)]
pub struct SpotifyClient {
    http: Client,
    token: Option<String>,
}

impl SpotifyClient {
    pub fn new() -> Self {
        SpotifyClient {
            http: Client::new(),
            token: None,
        }
    }

    pub fn with_token(token: impl Into<String>) -> Self {
        SpotifyClient {
            http: Client::new(),
            token: Some(token.into()),
        }
    }

    /// Returns the in-memory access token, if one is held.
    pub fn access_token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    /// Replaces the in-memory access token.
    pub fn set_access_token(&mut self, token: impl Into<String>) {
        self.token = Some(token.into());
    }

    /// Drops the in-memory access token. Part of logout; the durable copy is
    /// cleared separately by the token manager.
    pub fn clear_access_token(&mut self) {
        self.token = None;
    }

    /// Performs an authorized GET against an absolute URL and decodes the
    /// JSON body into the expected record.
    ///
    /// This is the single choke point for all API reads: pagination `next`
    /// links and playlist `tracks.href` links are followed through here, as
    /// are the typed endpoint helpers below.
    ///
    /// # Errors
    ///
    /// - `ApiError::MissingToken` - no access token is held
    /// - `ApiError::Status` - the API answered with a non-2xx status
    /// - `ApiError::Http` - transport-level failure
    /// - `ApiError::MalformedResponse` - the body did not decode into `T`
    ///
    /// No retry is performed; failures propagate to the caller.
    pub async fn get<T: DeserializeOwned>(&self, url: &str) -> Result<T, ApiError> {
        let token = self.token.as_ref().ok_or(ApiError::MissingToken)?;

        let response = self.http.get(url).bearer_auth(token).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Status(status));
        }

        let body = response.text().await?;
        let parsed = serde_json::from_str::<T>(&body)?;
        Ok(parsed)
    }

    /// Fetches the first page of the current user's playlists.
    ///
    /// Covers playlists the user owns or follows. Callers that need the
    /// complete collection hand the result to `pages::get_all_pages`.
    pub async fn get_user_playlists(&self) -> Result<Page<Playlist>, ApiError> {
        let api_url = format!(
            "{uri}/me/playlists?limit={limit}",
            uri = &config::spotify_apiurl(),
            limit = PAGE_LIMIT
        );
        self.get(&api_url).await
    }

    /// Fetches the first page of the user's top tracks.
    ///
    /// `time_range` selects the rolling listening-history window; when
    /// omitted the API applies its own default window.
    pub async fn get_my_top_tracks(
        &self,
        time_range: Option<TimeRange>,
    ) -> Result<Page<Track>, ApiError> {
        let mut api_url = format!(
            "{uri}/me/top/tracks?limit={limit}",
            uri = &config::spotify_apiurl(),
            limit = PAGE_LIMIT
        );
        if let Some(range) = time_range {
            api_url.push_str(&format!("&time_range={}", range));
        }
        self.get(&api_url).await
    }

    /// Fetches the list of genre seeds accepted by the recommendations
    /// endpoint.
    pub async fn get_available_genre_seeds(&self) -> Result<GenreSeedsResponse, ApiError> {
        let api_url = format!(
            "{uri}/recommendations/available-genre-seeds",
            uri = &config::spotify_apiurl()
        );
        self.get(&api_url).await
    }

    /// Fetches Spotify's current featured playlists.
    pub async fn get_featured_playlists(&self) -> Result<FeaturedPlaylistsResponse, ApiError> {
        let api_url = format!(
            "{uri}/browse/featured-playlists",
            uri = &config::spotify_apiurl()
        );
        self.get(&api_url).await
    }

    /// Requests track recommendations for the given seed and audio-feature
    /// criteria.
    pub async fn get_recommendations(
        &self,
        criteria: &RecommendationCriteria,
    ) -> Result<RecommendationsResponse, ApiError> {
        let query = criteria
            .to_query_pairs()
            .iter()
            .map(|(key, value)| format!("{}={}", key, value))
            .collect::<Vec<_>>()
            .join("&");
        let api_url = format!(
            "{uri}/recommendations?{query}",
            uri = &config::spotify_apiurl(),
            query = query
        );
        self.get(&api_url).await
    }

    /// Fetches the authenticated user's profile.
    pub async fn get_me(&self) -> Result<UserProfile, ApiError> {
        let api_url = format!("{uri}/me", uri = &config::spotify_apiurl());
        self.get(&api_url).await
    }
}

impl Default for SpotifyClient {
    fn default() -> Self {
        Self::new()
    }
}
