//! Run observer
//!
//! The notifier reports its progress as events. The binary installs
//! [`TracingObserver`]; tests install recorders.

use herald_client::ClientError;
use herald_core::domain::Derived;
use tracing::{debug, error, info};

use super::error::{NotifyError, Stage};

/// Progress event of a notifier run
#[derive(Debug)]
pub enum NotifyEvent<'a> {
    /// Deployment fields were derived from the arguments
    Derived(&'a Derived),
    /// A remote stage is about to start
    StageStarted(Stage),
    /// The site resolved to a cloud id
    TenantResolved { cloud_id: &'a str },
    /// A bearer token was obtained
    TokenCreated,
    /// The deployment was accepted, with the remote diagnostic body
    DeploymentCreated { response: &'a str },
    /// The run stopped with an error
    Failed(&'a NotifyError),
}

/// Receives the progress events of a notifier run
pub trait NotifyObserver: Send + Sync {
    fn on_event(&self, event: &NotifyEvent<'_>);
}

/// Observer that forwards events to `tracing`
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingObserver;

impl NotifyObserver for TracingObserver {
    fn on_event(&self, event: &NotifyEvent<'_>) {
        match event {
            NotifyEvent::Derived(derived) => debug!(
                environment = %derived.environment,
                state = %derived.state,
                version = %derived.version,
                issues = ?derived.issues,
                "derived deployment"
            ),
            NotifyEvent::StageStarted(Stage::Tenant) => debug!("retrieve cloud id"),
            NotifyEvent::StageStarted(Stage::Token) => debug!("creating token"),
            NotifyEvent::StageStarted(Stage::Deployment) => info!("creating deployment"),
            NotifyEvent::StageStarted(stage) => debug!(%stage, "stage started"),
            NotifyEvent::TenantResolved { cloud_id } => {
                debug!(%cloud_id, "successfully retrieved cloud id")
            }
            NotifyEvent::TokenCreated => debug!("successfully created token"),
            NotifyEvent::DeploymentCreated { response } => info!(%response, "deployment created"),
            NotifyEvent::Failed(NotifyError::NoIssuesFound) => {
                debug!("cannot find issue number")
            }
            NotifyEvent::Failed(err) => error!(
                stage = %err.stage(),
                status = ?err.client_error().and_then(ClientError::status),
                "{}",
                err
            ),
        }
    }
}
