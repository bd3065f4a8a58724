use crate::{management, spotify::SpotifyClient, success, warning};

pub async fn logout() {
    let mut client = SpotifyClient::new();

    let had_session = management::current_token(&mut client).await.is_some();

    match management::logout(&mut client).await {
        Ok(()) => success!("Logged out."),
        Err(_) if !had_session => warning!("No active session found."),
        Err(e) => warning!("Failed to clear stored session: {}", e),
    }
}
