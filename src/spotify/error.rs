use reqwest::StatusCode;

/// Errors surfaced by the Spotify Web API client.
///
/// Network failures and non-2xx responses are kept apart from decode
/// failures so callers can tell a flaky connection from an endpoint whose
/// body did not match the expected shape. A response body that cannot be
/// parsed into the expected record fails fast as `MalformedResponse` and is
/// never treated as an empty result.
#[derive(Debug)]
pub enum ApiError {
    /// Transport-level failure (connection, TLS, timeout).
    Http(reqwest::Error),
    /// The API answered with a non-success status code.
    Status(StatusCode),
    /// The response body did not decode into the expected record.
    MalformedResponse(serde_json::Error),
    /// No access token is held; run `trendcli auth` first.
    MissingToken,
    /// A concurrently spawned fetch task failed to join.
    Task(tokio::task::JoinError),
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ApiError::Http(e) => write!(f, "request failed: {}", e),
            ApiError::Status(status) => write!(f, "API returned {}", status),
            ApiError::MalformedResponse(e) => write!(f, "malformed API response: {}", e),
            ApiError::MissingToken => write!(f, "no access token, run trendcli auth"),
            ApiError::Task(e) => write!(f, "fetch task failed: {}", e),
        }
    }
}

impl std::error::Error for ApiError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ApiError::Http(e) => Some(e),
            ApiError::MalformedResponse(e) => Some(e),
            ApiError::Task(e) => Some(e),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        ApiError::Http(err)
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        ApiError::MalformedResponse(err)
    }
}

impl From<tokio::task::JoinError> for ApiError {
    fn from(err: tokio::task::JoinError) -> Self {
        ApiError::Task(err)
    }
}
