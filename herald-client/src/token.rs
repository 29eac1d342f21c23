//! OAuth2 token endpoint

use crate::error::{ClientError, Result};
use crate::AtlassianClient;
use herald_core::dto::token::{AccessToken, TokenRequest};
use tracing::debug;

impl AtlassianClient {
    /// Exchange client credentials for a bearer token
    ///
    /// # Arguments
    /// * `request` - The client credentials grant
    ///
    /// # Returns
    /// The `access_token` of the response
    pub async fn create_token(&self, request: &TokenRequest) -> Result<AccessToken> {
        let url = format!("{}/oauth/token", self.endpoints.api_url);
        debug!(%url, client_id = %request.client_id, "creating token");

        let response = self.client.post(&url).json(request).send().await?;
        let body: serde_json::Value = self.handle_response(response).await?;

        body.get("access_token")
            .and_then(serde_json::Value::as_str)
            .map(AccessToken::new)
            .ok_or_else(|| {
                ClientError::Type("access_token is missing or not a string".to_string())
            })
    }
}

#[cfg(test)]
mod tests {
    use crate::{AtlassianClient, ClientError, Endpoints};
    use herald_core::dto::token::TokenRequest;
    use httpmock::prelude::*;
    use serde_json::json;

    fn client_for(server: &MockServer) -> AtlassianClient {
        AtlassianClient::with_endpoints(Endpoints::new(server.base_url(), server.base_url()))
    }

    #[tokio::test]
    async fn test_create_token() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(POST)
                    .path("/oauth/token")
                    .header("content-type", "application/json")
                    .json_body(json!({
                        "audience": "api.atlassian.com",
                        "grant_type": "client_credentials",
                        "client_id": "id",
                        "client_secret": "secret",
                    }));
                then.status(200).json_body(json!({
                    "access_token": "eyJhbGciOi",
                    "expires_in": 3600,
                    "token_type": "Bearer",
                }));
            })
            .await;

        let token = client_for(&server)
            .create_token(&TokenRequest::client_credentials("id", "secret"))
            .await
            .unwrap();

        mock.assert_async().await;
        assert_eq!(token.secret(), "eyJhbGciOi");
    }

    #[tokio::test]
    async fn test_create_token_unauthorized() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(POST).path("/oauth/token");
                then.status(401).json_body(json!({ "error": "access_denied" }));
            })
            .await;

        let err = client_for(&server)
            .create_token(&TokenRequest::client_credentials("id", "wrong"))
            .await
            .unwrap_err();

        assert_eq!(err.status(), Some(401));
    }

    #[tokio::test]
    async fn test_create_token_missing_field() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(POST).path("/oauth/token");
                then.status(200).json_body(json!({ "access_token": 42 }));
            })
            .await;

        let err = client_for(&server)
            .create_token(&TokenRequest::client_credentials("id", "secret"))
            .await
            .unwrap_err();

        assert!(matches!(err, ClientError::Type(_)));
    }

    #[tokio::test]
    async fn test_create_token_invalid_json() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(POST).path("/oauth/token");
                then.status(200).body("not json");
            })
            .await;

        let err = client_for(&server)
            .create_token(&TokenRequest::client_credentials("id", "secret"))
            .await
            .unwrap_err();

        assert!(matches!(err, ClientError::Decode(_)));
    }

    #[tokio::test]
    async fn test_create_token_transport_error() {
        // Nothing listens on port 9 of the loopback interface.
        let client = AtlassianClient::with_endpoints(Endpoints::new(
            "http://127.0.0.1:9",
            "http://127.0.0.1:9",
        ));

        let err = client
            .create_token(&TokenRequest::client_credentials("id", "secret"))
            .await
            .unwrap_err();

        assert!(matches!(err, ClientError::Transport(_)));
    }
}
