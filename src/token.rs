use base64::{engine::general_purpose::STANDARD, Engine};

use crate::error::{Result, TogglError};

/// Password the service expects alongside an API token in Basic auth.
pub const TOKEN_PASSWORD: &str = "api_token";

/// ApiToken is the per-user credential every request is signed with.
/// It is validated once at construction and never changes afterwards.
#[derive(Clone, PartialEq, Eq)]
pub struct ApiToken(String);

impl ApiToken {
    /// Create a new ApiToken, rejecting empty or blank values
    pub fn new(token: impl Into<String>) -> Result<Self> {
        let token = token.into();
        if token.trim().is_empty() {
            return Err(TogglError::InvalidToken);
        }
        Ok(ApiToken(token))
    }

    /// The raw token value
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Value of the `Authorization` header for this token.
    ///
    /// The token is the username and [`TOKEN_PASSWORD`] the password.
    pub fn basic_auth_header(&self) -> String {
        let credentials = format!("{}:{}", self.0, TOKEN_PASSWORD);
        format!("Basic {}", STANDARD.encode(credentials))
    }
}

// Implement Debug manually to avoid exposing the token
impl std::fmt::Debug for ApiToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("ApiToken(<redacted>)")
    }
}
