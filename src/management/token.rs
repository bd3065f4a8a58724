use std::path::PathBuf;

use chrono::Utc;

use crate::{spotify::SpotifyClient, types::Token};

pub struct TokenManager {
    token: Token,
}

impl TokenManager {
    pub fn new(token: Token) -> Self {
        TokenManager { token }
    }

    pub async fn load() -> Result<Self, String> {
        let path = Self::token_path();
        let content = async_fs::read_to_string(&path)
            .await
            .map_err(|e| e.to_string())?;
        let token: Token = serde_json::from_str(&content).map_err(|e| e.to_string())?;
        Ok(Self { token })
    }

    pub async fn persist(&self) -> Result<(), String> {
        let path = Self::token_path();
        if let Some(parent) = path.parent() {
            async_fs::create_dir_all(parent)
                .await
                .map_err(|e| e.to_string())?;
        }

        let json = serde_json::to_string_pretty(&self.token).map_err(|e| e.to_string())?;
        async_fs::write(Self::token_path(), json)
            .await
            .map_err(|e| e.to_string())
    }

    pub async fn clear() -> Result<(), String> {
        async_fs::remove_file(Self::token_path())
            .await
            .map_err(|e| e.to_string())
    }

    /// Pushes the stored token into the client's in-memory state. The stored
    /// value is authoritative and overrides whatever the client held.
    pub fn apply(&self, client: &mut SpotifyClient) -> &Token {
        client.set_access_token(self.token.access_token.clone());
        &self.token
    }

    /// Implicit-grant tokens cannot be refreshed; once expired the user has
    /// to run `trendcli auth` again.
    pub fn is_expired(&self) -> bool {
        let now = Utc::now().timestamp() as u64;
        now >= self.token.obtained_at + self.token.expires_in
    }

    fn token_path() -> PathBuf {
        let mut path = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
        path.push("trendcli/cache/token.json");
        path
    }

    pub fn current_token(&self) -> &Token {
        &self.token
    }
}

/// Resolves the current access token: the durable copy wins and is synced
/// into the client; the client's in-memory value is the fallback; absent
/// when neither holds one.
pub async fn current_token(client: &mut SpotifyClient) -> Option<String> {
    match TokenManager::load().await {
        Ok(manager) => {
            let token = manager.apply(client);
            Some(token.access_token.clone())
        }
        Err(_) => client.access_token().map(|t| t.to_string()),
    }
}

/// Ends the session: removes the durable token and drops the client's
/// in-memory copy, so no stale in-memory call can outlive the logout.
pub async fn logout(client: &mut SpotifyClient) -> Result<(), String> {
    client.clear_access_token();
    TokenManager::clear().await
}
