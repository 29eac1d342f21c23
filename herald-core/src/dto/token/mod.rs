//! OAuth2 token DTOs

use serde::Serialize;
use std::fmt;

/// Audience requested for every token
pub const AUDIENCE: &str = "api.atlassian.com";

/// Client credentials grant request body
#[derive(Clone, Serialize)]
pub struct TokenRequest {
    pub audience: String,
    pub grant_type: String,
    pub client_id: String,
    pub client_secret: String,
}

impl TokenRequest {
    pub fn client_credentials(client_id: impl Into<String>, client_secret: impl Into<String>) -> Self {
        Self {
            audience: AUDIENCE.to_string(),
            grant_type: "client_credentials".to_string(),
            client_id: client_id.into(),
            client_secret: client_secret.into(),
        }
    }
}

impl fmt::Debug for TokenRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TokenRequest")
            .field("audience", &self.audience)
            .field("grant_type", &self.grant_type)
            .field("client_id", &self.client_id)
            .field("client_secret", &"***")
            .finish()
    }
}

/// Short-lived bearer token
#[derive(Clone, PartialEq, Eq)]
pub struct AccessToken(String);

impl AccessToken {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    pub fn secret(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for AccessToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("AccessToken(***)")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_credentials_body() {
        let request = TokenRequest::client_credentials("id", "secret");
        let json = serde_json::to_value(&request).unwrap();

        assert_eq!(
            json,
            serde_json::json!({
                "audience": "api.atlassian.com",
                "grant_type": "client_credentials",
                "client_id": "id",
                "client_secret": "secret",
            })
        );
    }

    #[test]
    fn test_secrets_are_not_printed() {
        let request = TokenRequest::client_credentials("id", "s3cr3t");
        assert!(!format!("{request:?}").contains("s3cr3t"));

        let token = AccessToken::new("eyJhbGciOi");
        assert_eq!(format!("{token:?}"), "AccessToken(***)");
        assert_eq!(token.secret(), "eyJhbGciOi");
    }
}
