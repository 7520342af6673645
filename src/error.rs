use thiserror::Error;

/// Error returned by a [`Transport`](crate::transport::Transport) when the
/// HTTP exchange itself fails (DNS, refused connection, timeout, ...).
pub type TransportError = Box<dyn std::error::Error + Send + Sync>;

/// Main error type for Toggl API operations
#[derive(Debug, Error)]
pub enum TogglError {
    /// The API rejected the credential (HTTP 403)
    #[error("authentication failed (HTTP {status}): {body}")]
    Auth { status: u16, body: String },

    /// Any other non-2xx response
    #[error("request failed (HTTP {status}): {body}")]
    Request { status: u16, body: String },

    /// A 2xx response whose body is not valid JSON
    #[error("failed to decode response (HTTP {status}): {source}")]
    Decode {
        status: u16,
        body: String,
        #[source]
        source: serde_json::Error,
    },

    /// Empty or blank API token given at construction
    #[error("API token must not be empty")]
    InvalidToken,

    /// Identifier that cannot address a single item
    #[error("invalid resource id: {0:?}")]
    InvalidId(String),

    /// Request payload serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Invalid base URL
    #[error("URL parse error: {0}")]
    UrlParse(#[from] url::ParseError),

    /// The default HTTP client could not be built
    #[error("HTTP client error: {0}")]
    Client(#[from] reqwest::Error),

    /// Failure reported by the transport, passed through as-is
    #[error(transparent)]
    Transport(TransportError),
}

impl TogglError {
    /// Translate a non-2xx status and its body into the matching error kind
    pub fn from_status(status: u16, body: String) -> Self {
        if status == 403 {
            TogglError::Auth { status, body }
        } else {
            TogglError::Request { status, body }
        }
    }

    /// Check if the credential was rejected
    pub fn is_auth_error(&self) -> bool {
        matches!(self, TogglError::Auth { .. })
    }

    /// Check if this error is a not found error (404)
    pub fn is_not_found(&self) -> bool {
        matches!(self, TogglError::Request { status: 404, .. })
    }

    /// Get the HTTP status code if the error came from a response
    pub fn status_code(&self) -> Option<u16> {
        match self {
            TogglError::Auth { status, .. }
            | TogglError::Request { status, .. }
            | TogglError::Decode { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Get the raw response body if the error came from a response
    pub fn body(&self) -> Option<&str> {
        match self {
            TogglError::Auth { body, .. }
            | TogglError::Request { body, .. }
            | TogglError::Decode { body, .. } => Some(body),
            _ => None,
        }
    }
}

/// Result type for Toggl API operations
pub type Result<T> = std::result::Result<T, TogglError>;
