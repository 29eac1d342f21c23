//! Tenant info endpoint

use crate::error::{ClientError, Result};
use crate::AtlassianClient;
use herald_core::dto::tenant::Tenant;
use tracing::debug;

impl AtlassianClient {
    /// Resolve the cloud id of an Atlassian site
    ///
    /// # Arguments
    /// * `site` - The site name, `droneio` for `droneio.atlassian.net`
    ///
    /// # Returns
    /// The tenant carrying the site's cloud id
    pub async fn lookup_tenant(&self, site: &str) -> Result<Tenant> {
        if site.is_empty() {
            return Err(ClientError::InvalidRequest(
                "site name cannot be empty".to_string(),
            ));
        }

        let url = format!("{}/_edge/tenant_info", self.endpoints.site(site));
        debug!(%url, "looking up tenant");

        let response = self.client.get(&url).send().await?;

        self.handle_response(response).await
    }
}

#[cfg(test)]
mod tests {
    use crate::{AtlassianClient, ClientError, Endpoints};
    use httpmock::prelude::*;
    use serde_json::json;

    fn client_for(server: &MockServer) -> AtlassianClient {
        AtlassianClient::with_endpoints(Endpoints::new(
            server.base_url(),
            format!("{}/sites/{{site}}", server.base_url()),
        ))
    }

    #[tokio::test]
    async fn test_lookup_tenant() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(GET).path("/sites/droneio/_edge/tenant_info");
                then.status(200)
                    .json_body(json!({ "cloudId": "b11a072e-a403-418d-a809-fbf4eb9c434b" }));
            })
            .await;

        let tenant = client_for(&server).lookup_tenant("droneio").await.unwrap();

        mock.assert_async().await;
        assert_eq!(tenant.id, "b11a072e-a403-418d-a809-fbf4eb9c434b");
    }

    #[tokio::test]
    async fn test_lookup_tenant_remote_error() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/sites/missing/_edge/tenant_info");
                then.status(404).body("not found");
            })
            .await;

        let err = client_for(&server).lookup_tenant("missing").await.unwrap_err();

        assert!(matches!(err, ClientError::Remote { status: 404, .. }));
    }

    #[tokio::test]
    async fn test_lookup_tenant_decode_error() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/sites/droneio/_edge/tenant_info");
                then.status(200).body("<html>maintenance</html>");
            })
            .await;

        let err = client_for(&server).lookup_tenant("droneio").await.unwrap_err();

        assert!(matches!(err, ClientError::Decode(_)));
    }

    #[tokio::test]
    async fn test_lookup_tenant_requires_site() {
        let client = AtlassianClient::new();
        let err = client.lookup_tenant("").await.unwrap_err();
        assert!(matches!(err, ClientError::InvalidRequest(_)));
    }
}
