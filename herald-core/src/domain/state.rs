//! Deployment state vocabulary

use serde::{Deserialize, Serialize};
use std::fmt;

/// State of a deployment as understood by the issue tracker
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeploymentState {
    Pending,
    InProgress,
    Cancelled,
    Failed,
    RolledBack,
    Successful,
    Unknown,
}

impl DeploymentState {
    /// Maps a free-form CI status onto the fixed vocabulary
    ///
    /// Matching is case-insensitive. Anything unrecognized becomes `Unknown`.
    pub fn normalize(value: &str) -> Self {
        match value.to_lowercase().as_str() {
            "pending" | "waiting" => Self::Pending,
            "running" | "in_progress" => Self::InProgress,
            "cancelled" | "killed" | "stopped" | "terminated" => Self::Cancelled,
            "failed" | "failure" | "error" | "errored" => Self::Failed,
            "rollback" | "rolled_back" => Self::RolledBack,
            "success" | "successful" => Self::Successful,
            _ => Self::Unknown,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::InProgress => "in_progress",
            Self::Cancelled => "cancelled",
            Self::Failed => "failed",
            Self::RolledBack => "rolled_back",
            Self::Successful => "successful",
            Self::Unknown => "unknown",
        }
    }
}

impl fmt::Display for DeploymentState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
