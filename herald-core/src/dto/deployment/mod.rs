//! Bulk deployment DTOs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::args::InvocationArgs;
use crate::domain::derivation::Derived;
use crate::domain::environment::EnvironmentType;
use crate::domain::state::DeploymentState;

/// Association type linking a deployment to issue keys
pub const ISSUE_KEYS_ASSOCIATION: &str = "issueIdOrKeys";

/// Request body of the bulk deployment endpoint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeploymentPayload {
    pub deployments: Vec<Deployment>,
}

impl DeploymentPayload {
    /// Wraps a single deployment
    pub fn single(deployment: Deployment) -> Self {
        Self {
            deployments: vec![deployment],
        }
    }
}

/// One deployment record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Deployment {
    pub deployment_sequence_number: i64,
    pub update_sequence_number: i64,
    pub associations: Vec<Association>,
    pub display_name: String,
    pub url: String,
    pub description: String,
    pub last_updated: DateTime<Utc>,
    pub state: DeploymentState,
    pub pipeline: Pipeline,
    pub environment: Environment,
}

/// Link between a deployment and tracker entities
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Association {
    pub association_type: String,
    pub values: Vec<String>,
}

impl Association {
    pub fn issue_keys(keys: Vec<String>) -> Self {
        Self {
            association_type: ISSUE_KEYS_ASSOCIATION.to_string(),
            values: keys,
        }
    }
}

/// Pipeline that performed the deployment
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pipeline {
    pub id: String,
    pub display_name: String,
    pub url: String,
}

/// Environment deployed to
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Environment {
    pub id: EnvironmentType,
    pub display_name: EnvironmentType,
    #[serde(rename = "type")]
    pub environment_type: EnvironmentType,
}

impl Environment {
    pub fn new(environment: EnvironmentType) -> Self {
        Self {
            id: environment,
            display_name: environment,
            environment_type: environment,
        }
    }
}

impl Deployment {
    /// Assembles the deployment record for one pipeline run
    ///
    /// Both sequence numbers are the build number.
    pub fn from_derived(args: &InvocationArgs, derived: &Derived, last_updated: DateTime<Utc>) -> Self {
        Self {
            deployment_sequence_number: args.build.number,
            update_sequence_number: args.build.number,
            associations: vec![Association::issue_keys(derived.issues.clone())],
            display_name: derived.version.clone(),
            url: derived.link.clone(),
            description: derived.description.clone(),
            last_updated,
            state: derived.state,
            pipeline: Pipeline {
                id: args.commit.author.email.clone(),
                display_name: derived.pipeline_name.clone(),
                url: derived.link.clone(),
            },
            environment: Environment::new(derived.environment),
        }
    }
}
