//! Herald Plugin
//!
//! A CI plugin that reports a pipeline run to Jira as a deployment, linking
//! the issue keys mentioned in the commit, pull request and branches.
//!
//! Architecture:
//! - Configuration: Flags and CI environment variables
//! - Repositories: HTTP calls to the Atlassian APIs
//! - Services: The notifier and its observer
//!
//! The plugin makes at most one attempt per remote call and exits non-zero on
//! the first error.

mod config;
mod repository;
mod service;

use anyhow::Result;
use clap::Parser;
use std::sync::Arc;
use tokio_util::sync::CancellationToken;
use tracing::{Instrument, info, info_span, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::Config;
use crate::repository::HttpDeploymentRepository;
use crate::service::{Notifier, TracingObserver};
use herald_client::AtlassianClient;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::parse();

    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| config.log_level.clone().into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    config.validate()?;
    let args = config.to_args();

    let cancel = CancellationToken::new();
    watch_for_cancellation(&config, &cancel);

    let repository = Arc::new(HttpDeploymentRepository::new(AtlassianClient::new()));
    let notifier = Notifier::new(repository, Arc::new(TracingObserver));

    let span = info_span!(
        "notify",
        client_id = %args.client_id,
        cloud_id = %args.cloud_id,
        project_id = %args.project,
        instance = %args.site,
        pipeline = %args.name,
    );

    // Failures are already logged by the observer.
    notifier.notify(&args, &cancel).instrument(span).await?;
    info!("Deployment reported");

    Ok(())
}

/// Cancels the run on Ctrl-C or once the configured timeout elapses
fn watch_for_cancellation(config: &Config, cancel: &CancellationToken) {
    let on_signal = cancel.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            warn!("Interrupted, cancelling run");
            on_signal.cancel();
        }
    });

    if let Some(timeout) = config.timeout() {
        let on_timeout = cancel.clone();
        tokio::spawn(async move {
            tokio::time::sleep(timeout).await;
            warn!("Timed out after {:?}, cancelling run", timeout);
            on_timeout.cancel();
        });
    }
}
