use std::{collections::HashMap, sync::Arc};

use axum::{Extension, extract::Query, response::Html};
use tokio::sync::Mutex;

use crate::{types::Token, utils};

/// Landing page for the authorization redirect.
///
/// The implicit grant puts the access token in the URL fragment
/// (`#access_token=...`), and fragments are never sent to a server. This
/// page relays the fragment to the `/token` route as a query string and uses
/// `location.replace`, so the token-bearing URL does not stay behind in the
/// browser history or address bar.
pub async fn callback() -> Html<&'static str> {
    Html(
        r#"<!DOCTYPE html>
<html>
  <body>
    <p>Completing authentication&hellip;</p>
    <script>
      var fragment = window.location.hash ? window.location.hash.substring(1) : '';
      if (fragment) {
        window.location.replace('/token?fragment=' + encodeURIComponent(fragment));
      } else {
        document.body.innerHTML = '<h4>Missing access token.</h4>';
      }
    </script>
  </body>
</html>"#,
    )
}

/// Receives the relayed fragment, extracts the access token and hands it to
/// the waiting auth flow.
pub async fn token(
    Query(params): Query<HashMap<String, String>>,
    Extension(shared_state): Extension<Arc<Mutex<Option<Token>>>>,
) -> Html<&'static str> {
    let Some(fragment) = params.get("fragment") else {
        return Html("<h4>Missing access token.</h4>");
    };

    match utils::parse_token_fragment(fragment) {
        Some(token) => {
            let mut state = shared_state.lock().await;
            *state = Some(token);
            Html("<h2>Authentication successful.</h2><p>Close browser window.</p>")
        }
        None => Html("<h4>Missing access token.</h4>"),
    }
}
