//! Herald HTTP Client
//!
//! A small, type-safe HTTP client for the three Atlassian endpoints the
//! deployment notifier talks to:
//! - Tenant info lookup (`https://{site}.atlassian.net/_edge/tenant_info`)
//! - OAuth2 client credentials token exchange
//! - Jira bulk deployment submission
//!
//! Every call makes exactly one attempt. Statuses above 299 are reported as
//! [`ClientError::Remote`].
//!
//! # Example
//!
//! ```no_run
//! use herald_client::AtlassianClient;
//! use herald_core::dto::token::TokenRequest;
//!
//! # async fn example() -> herald_client::Result<()> {
//! let client = AtlassianClient::new();
//! let tenant = client.lookup_tenant("droneio").await?;
//! let token = client
//!     .create_token(&TokenRequest::client_credentials("id", "secret"))
//!     .await?;
//! # Ok(())
//! # }
//! ```

mod deployments;
pub mod error;
mod tenant;
mod token;

pub use error::{ClientError, Result};

use reqwest::{Client, Response};
use serde::de::DeserializeOwned;

/// Production API base URL
pub const DEFAULT_API_URL: &str = "https://api.atlassian.com";

/// Production site URL template, `{site}` is replaced by the site name
pub const DEFAULT_SITE_URL: &str = "https://{site}.atlassian.net";

/// Base URLs of the remote services
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoints {
    /// Base URL of the OAuth and Jira REST APIs
    pub api_url: String,
    /// Site URL template containing a `{site}` placeholder
    pub site_url: String,
}

impl Endpoints {
    pub fn new(api_url: impl Into<String>, site_url: impl Into<String>) -> Self {
        Self {
            api_url: api_url.into().trim_end_matches('/').to_string(),
            site_url: site_url.into().trim_end_matches('/').to_string(),
        }
    }

    /// Base URL of a given site
    pub fn site(&self, site: &str) -> String {
        self.site_url.replace("{site}", site)
    }
}

impl Default for Endpoints {
    fn default() -> Self {
        Self::new(DEFAULT_API_URL, DEFAULT_SITE_URL)
    }
}

/// HTTP client for the Atlassian APIs
#[derive(Debug, Clone)]
pub struct AtlassianClient {
    endpoints: Endpoints,
    /// HTTP client instance
    client: Client,
}

impl AtlassianClient {
    /// Create a client for the production endpoints
    pub fn new() -> Self {
        Self::with_endpoints(Endpoints::default())
    }

    /// Create a client for custom endpoints
    ///
    /// # Example
    /// ```
    /// use herald_client::{AtlassianClient, Endpoints};
    ///
    /// let client = AtlassianClient::with_endpoints(Endpoints::new(
    ///     "http://localhost:8080",
    ///     "http://localhost:8080/{site}",
    /// ));
    /// assert_eq!(client.endpoints().site("acme"), "http://localhost:8080/acme");
    /// ```
    pub fn with_endpoints(endpoints: Endpoints) -> Self {
        Self::with_client(endpoints, Client::new())
    }

    /// Create a client with a custom HTTP client
    ///
    /// This allows you to configure timeouts, proxies, TLS settings, etc.
    pub fn with_client(endpoints: Endpoints, client: Client) -> Self {
        Self { endpoints, client }
    }

    pub fn endpoints(&self) -> &Endpoints {
        &self.endpoints
    }

    // =============================================================================
    // Response Handlers
    // =============================================================================

    /// Read the body of a response, failing on statuses above 299
    async fn handle_text(&self, response: Response) -> Result<String> {
        let status = response.status().as_u16();

        if status > 299 {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(ClientError::remote(status, body));
        }

        Ok(response.text().await?)
    }

    /// Read and deserialize a JSON response, failing on statuses above 299
    async fn handle_response<T: DeserializeOwned>(&self, response: Response) -> Result<T> {
        let body = self.handle_text(response).await?;

        serde_json::from_str(&body)
            .map_err(|e| ClientError::Decode(format!("Failed to parse JSON response: {}", e)))
    }
}

impl Default for AtlassianClient {
    fn default() -> Self {
        Self::new()
    }
}
