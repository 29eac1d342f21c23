//! Deployment environment vocabulary

use serde::{Deserialize, Serialize};
use std::fmt;

/// Environment type as understood by the issue tracker
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EnvironmentType {
    Production,
    Staging,
    Development,
    Testing,
    Unmapped,
}

impl EnvironmentType {
    /// Maps a free-form environment name onto the fixed vocabulary
    ///
    /// Matching is case-insensitive. Anything unrecognized becomes `Unmapped`.
    pub fn normalize(value: &str) -> Self {
        match value.to_lowercase().as_str() {
            "prod" | "production" => Self::Production,
            "stage" | "staging" => Self::Staging,
            "dev" | "development" => Self::Development,
            "testing" | "test" => Self::Testing,
            _ => Self::Unmapped,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Production => "production",
            Self::Staging => "staging",
            Self::Development => "development",
            Self::Testing => "testing",
            Self::Unmapped => "unmapped",
        }
    }
}

impl fmt::Display for EnvironmentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
