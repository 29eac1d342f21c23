//! Bulk deployment endpoint

use crate::error::Result;
use crate::AtlassianClient;
use herald_core::dto::deployment::DeploymentPayload;
use herald_core::dto::token::AccessToken;
use reqwest::header::FROM;
use tracing::debug;

/// Value of the `From` header sent with every submission
pub const FROM_HEADER: &str = "noreply@localhost";

impl AtlassianClient {
    /// Submit deployments to Jira
    ///
    /// # Arguments
    /// * `cloud_id` - The tenant's cloud id
    /// * `payload` - The deployments to submit
    /// * `token` - Bearer token from [`AtlassianClient::create_token`]
    ///
    /// # Returns
    /// The raw response body, for diagnostics only
    pub async fn create_deployment(
        &self,
        cloud_id: &str,
        payload: &DeploymentPayload,
        token: &AccessToken,
    ) -> Result<String> {
        let url = format!(
            "{}/jira/deployments/0.1/cloud/{}/bulk",
            self.endpoints.api_url, cloud_id
        );
        debug!(%url, deployments = payload.deployments.len(), "creating deployment");

        let response = self
            .client
            .post(&url)
            .header(FROM, FROM_HEADER)
            .bearer_auth(token.secret())
            .json(payload)
            .send()
            .await?;

        self.handle_text(response).await
    }
}
