//! Notifier errors

use herald_client::ClientError;
use std::fmt;
use thiserror::Error;

/// Stage of a notifier run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Derive,
    Guard,
    Tenant,
    Token,
    Deployment,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Derive => "derive",
            Self::Guard => "guard",
            Self::Tenant => "tenant",
            Self::Token => "token",
            Self::Deployment => "deployment",
        };
        f.write_str(name)
    }
}

/// Terminal error of a notifier run
#[derive(Debug, Error)]
pub enum NotifyError {
    /// The project key produced an unusable pattern
    #[error("invalid project key: {0}")]
    InvalidProjectKey(#[from] regex::Error),

    /// No issue key was found in the commit or pull request
    #[error("failed to extract issue number")]
    NoIssuesFound,

    /// A remote call failed
    #[error("{stage} request failed: {source}")]
    Client {
        stage: Stage,
        #[source]
        source: ClientError,
    },

    /// The run was cancelled while a remote call was in flight
    #[error("cancelled during {stage} request")]
    Cancelled { stage: Stage },
}

impl NotifyError {
    /// Stage the run stopped at
    pub fn stage(&self) -> Stage {
        match self {
            Self::InvalidProjectKey(_) => Stage::Derive,
            Self::NoIssuesFound => Stage::Guard,
            Self::Client { stage, .. } | Self::Cancelled { stage } => *stage,
        }
    }

    /// Underlying client error of a failed remote call
    pub fn client_error(&self) -> Option<&ClientError> {
        match self {
            Self::Client { source, .. } => Some(source),
            _ => None,
        }
    }
}
