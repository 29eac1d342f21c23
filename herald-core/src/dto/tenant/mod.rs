//! Tenant info DTOs

use serde::{Deserialize, Serialize};

/// Resolved tenant of an Atlassian site
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tenant {
    #[serde(rename = "cloudId")]
    pub id: String,
}
