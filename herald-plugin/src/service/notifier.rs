//! Deployment notifier
//!
//! Runs the five stages of a notification in order, stopping at the first
//! failure:
//! 1. Derive the deployment fields from the invocation arguments
//! 2. Refuse to continue without issue keys
//! 3. Resolve the site's cloud id, when a site is set
//! 4. Obtain a bearer token
//! 5. Submit a single deployment
//!
//! Every remote stage races the caller's cancellation token.

use std::future::Future;
use std::sync::Arc;

use chrono::Utc;
use herald_client::ClientError;
use herald_core::args::InvocationArgs;
use herald_core::domain::Derived;
use herald_core::dto::deployment::{Deployment, DeploymentPayload};
use herald_core::dto::token::TokenRequest;
use tokio_util::sync::CancellationToken;

use super::{NotifyError, NotifyEvent, NotifyObserver, Stage};
use crate::repository::DeploymentRepository;

/// Reports one pipeline run as a deployment
pub struct Notifier {
    repository: Arc<dyn DeploymentRepository>,
    observer: Arc<dyn NotifyObserver>,
}

impl Notifier {
    /// Creates a new notifier
    ///
    /// # Arguments
    /// * `repository` - Remote deployment APIs
    /// * `observer` - Receives the progress events of each run
    pub fn new(
        repository: Arc<dyn DeploymentRepository>,
        observer: Arc<dyn NotifyObserver>,
    ) -> Self {
        Self {
            repository,
            observer,
        }
    }

    /// Runs a notification
    ///
    /// # Returns
    /// The remote service's response body on success
    pub async fn notify(
        &self,
        args: &InvocationArgs,
        cancel: &CancellationToken,
    ) -> Result<String, NotifyError> {
        let result = self.run(args, cancel).await;
        if let Err(err) = &result {
            self.observer.on_event(&NotifyEvent::Failed(err));
        }
        result
    }

    async fn run(
        &self,
        args: &InvocationArgs,
        cancel: &CancellationToken,
    ) -> Result<String, NotifyError> {
        let derived = Derived::from_args(args)?;
        self.observer.on_event(&NotifyEvent::Derived(&derived));

        if derived.issues.is_empty() {
            return Err(NotifyError::NoIssuesFound);
        }

        // Working copy, the arguments stay untouched.
        let mut cloud_id = args.cloud_id.clone();

        if !args.site.is_empty() {
            let tenant = self
                .stage(Stage::Tenant, cancel, self.repository.lookup_tenant(&args.site))
                .await?;
            cloud_id = tenant.id;
            self.observer
                .on_event(&NotifyEvent::TenantResolved { cloud_id: &cloud_id });
        }

        let request = TokenRequest::client_credentials(&args.client_id, &args.client_secret);
        let token = self
            .stage(Stage::Token, cancel, self.repository.create_token(&request))
            .await?;
        self.observer.on_event(&NotifyEvent::TokenCreated);

        let payload =
            DeploymentPayload::single(Deployment::from_derived(args, &derived, Utc::now()));
        let response = self
            .stage(
                Stage::Deployment,
                cancel,
                self.repository.create_deployment(&cloud_id, &payload, &token),
            )
            .await?;
        self.observer
            .on_event(&NotifyEvent::DeploymentCreated { response: &response });

        Ok(response)
    }

    /// Runs one remote call unless the run is cancelled first
    async fn stage<T>(
        &self,
        stage: Stage,
        cancel: &CancellationToken,
        call: impl Future<Output = Result<T, ClientError>>,
    ) -> Result<T, NotifyError> {
        self.observer.on_event(&NotifyEvent::StageStarted(stage));

        tokio::select! {
            biased;
            _ = cancel.cancelled() => Err(NotifyError::Cancelled { stage }),
            result = call => result.map_err(|source| NotifyError::Client { stage, source }),
        }
    }
}
