//! Deployments repository
//!
//! Handles the three remote calls of a notifier run:
//! - Resolving a site name to a cloud id
//! - Exchanging client credentials for a bearer token
//! - Submitting the deployment payload

use async_trait::async_trait;
use herald_client::{AtlassianClient, Result};
use herald_core::dto::deployment::DeploymentPayload;
use herald_core::dto::tenant::Tenant;
use herald_core::dto::token::{AccessToken, TokenRequest};

/// Repository trait for the issue tracker's deployment APIs
#[async_trait]
pub trait DeploymentRepository: Send + Sync {
    /// Resolves the tenant of a site
    ///
    /// # Arguments
    /// * `site` - Site name, never empty
    async fn lookup_tenant(&self, site: &str) -> Result<Tenant>;

    /// Obtains a bearer token
    async fn create_token(&self, request: &TokenRequest) -> Result<AccessToken>;

    /// Submits deployments and returns the raw response body
    async fn create_deployment(
        &self,
        cloud_id: &str,
        payload: &DeploymentPayload,
        token: &AccessToken,
    ) -> Result<String>;
}

/// HTTP implementation of DeploymentRepository
pub struct HttpDeploymentRepository {
    client: AtlassianClient,
}

impl HttpDeploymentRepository {
    /// Creates a new HTTP deployment repository
    pub fn new(client: AtlassianClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl DeploymentRepository for HttpDeploymentRepository {
    async fn lookup_tenant(&self, site: &str) -> Result<Tenant> {
        self.client.lookup_tenant(site).await
    }

    async fn create_token(&self, request: &TokenRequest) -> Result<AccessToken> {
        self.client.create_token(request).await
    }

    async fn create_deployment(
        &self,
        cloud_id: &str,
        payload: &DeploymentPayload,
        token: &AccessToken,
    ) -> Result<String> {
        self.client.create_deployment(cloud_id, payload, token).await
    }
}
