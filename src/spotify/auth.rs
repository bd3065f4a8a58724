use std::{sync::Arc, time::Duration};

use tokio::sync::Mutex;

use crate::{
    config, error, management::TokenManager, server::start_api_server, success, types::Token,
    warning,
};

/// Constructs the authorization redirect URL for the implicit-grant flow.
///
/// Deterministically assembles the URL from the configured authorization
/// endpoint and client ID, the caller-supplied redirect URL, and the scopes
/// joined by single spaces. `response_type` is fixed to `token`, which makes
/// Spotify deliver the access token in the redirect's URL fragment. Pure
/// string assembly: no side effects, no network call, each parameter appears
/// exactly once.
///
/// # Arguments
///
/// * `redirect_url` - Where Spotify should send the user after authorization
/// * `scopes` - Permission scopes to request
///
/// # Example
///
/// ```
/// let url = build_authentication_url(
///     "http://localhost:8080/callback",
///     &["user-top-read", "playlist-read-private"],
/// );
/// ```
pub fn build_authentication_url(redirect_url: &str, scopes: &[&str]) -> String {
    format!(
        "{auth_url}?client_id={client_id}&response_type=token&redirect_uri={redirect_uri}&scope={scope}",
        auth_url = &config::spotify_apiauth_url(),
        client_id = &config::spotify_client_id(),
        redirect_uri = redirect_url,
        scope = scopes.join(" ")
    )
}

/// Runs the complete implicit-grant authentication flow.
///
/// This function orchestrates the whole process:
/// 1. Starting a local callback server
/// 2. Opening the authorization URL in the user's browser
/// 3. Waiting for the redirected access token to arrive
/// 4. Persisting the obtained token for future runs
///
/// The implicit grant returns the access token directly in the redirect's
/// URL fragment; there is no code exchange and no client secret involved.
/// Because a URL fragment never reaches a server, the callback page relays
/// the fragment back as a query string (see `api::callback`) before the
/// token lands in `shared_state`.
///
/// # Arguments
///
/// * `shared_state` - Thread-safe slot the callback handler fills with the
///   received token
///
/// # Error Handling
///
/// - Browser launch failures result in a warning with manual URL instructions
/// - Token persistence failures terminate the program with an error
/// - Authentication timeouts or failures terminate with an error message
pub async fn auth(shared_state: Arc<Mutex<Option<Token>>>) {
    // start API server
    let server_state = Arc::clone(&shared_state);
    tokio::spawn(async move {
        start_api_server(server_state).await;
    });

    let scope = config::spotify_scope();
    let scopes: Vec<&str> = scope.split(' ').filter(|s| !s.is_empty()).collect();
    let auth_url = build_authentication_url(&config::spotify_redirect_uri(), &scopes);

    // Open the authorization URL in the default browser
    if webbrowser::open(&auth_url).is_err() {
        warning!(
            "Failed to open browser. Please navigate to the following URL manually:\n{}",
            auth_url
        )
    }

    // wait for callback to be hit
    let token = wait_for_token(shared_state).await;

    match token {
        Some(t) => {
            let token_manager = TokenManager::new(t);
            if let Err(e) = token_manager.persist().await {
                error!("Failed to save token to cache: {}", e);
            }

            success!("Authentication successful!");
        }
        None => {
            error!("Authentication failed or timed out.");
        }
    }
}

/// Waits for the callback handler to deliver a token.
///
/// Polls the shared state with a 60-second timeout while the user completes
/// the authorization in their browser. Runs concurrently with the callback
/// server that populates the slot.
///
/// Returns `Some(Token)` if authentication completes within the timeout
/// period, or `None` if the timeout is reached without a token.
async fn wait_for_token(shared_state: Arc<Mutex<Option<Token>>>) -> Option<Token> {
    use std::time::Instant;

    let max_wait = Duration::from_secs(60);
    let start = Instant::now();

    while start.elapsed() < max_wait {
        let lock = shared_state.lock().await;
        if let Some(token) = lock.as_ref() {
            return Some(token.clone());
        }
        drop(lock);
        tokio::time::sleep(Duration::from_secs(1)).await;
    }

    None
}
