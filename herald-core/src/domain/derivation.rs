//! Deployment field derivation
//!
//! Each helper picks the first non-empty candidate from the invocation
//! arguments, falling back to a default.

use crate::args::InvocationArgs;
use crate::domain::environment::EnvironmentType;
use crate::domain::issues::extract_issues;
use crate::domain::state::DeploymentState;

/// Maximum length of a deployment description, in characters
pub const DESCRIPTION_MAX_LEN: usize = 255;

/// Deployment fields derived from one set of invocation arguments
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Derived {
    pub environment: EnvironmentType,
    pub state: DeploymentState,
    pub version: String,
    pub link: String,
    pub description: String,
    pub pipeline_name: String,
    pub issues: Vec<String>,
}

impl Derived {
    /// Derives every reported field from `args`
    pub fn from_args(args: &InvocationArgs) -> Result<Self, regex::Error> {
        Ok(Self {
            environment: to_environment(args),
            state: to_state(args),
            version: to_version(args),
            link: to_link(args),
            description: to_description(args),
            pipeline_name: to_pipeline_name(args),
            issues: extract_issues(args)?,
        })
    }
}

/// State override if set, otherwise the build status
pub fn to_state(args: &InvocationArgs) -> DeploymentState {
    if !args.state.is_empty() {
        return DeploymentState::normalize(&args.state);
    }
    DeploymentState::normalize(&args.build.status)
}

/// Environment override, then deploy target, then production
///
/// The production fallback is taken as is and does not go through
/// normalization.
pub fn to_environment(args: &InvocationArgs) -> EnvironmentType {
    if !args.environment.is_empty() {
        return EnvironmentType::normalize(&args.environment);
    }
    if !args.deploy.target.is_empty() {
        return EnvironmentType::normalize(&args.deploy.target);
    }
    EnvironmentType::Production
}

/// Semver version, then tag name, then commit sha
pub fn to_version(args: &InvocationArgs) -> String {
    first_non_empty(&[
        args.semver.version.as_str(),
        args.tag.name.as_str(),
        args.commit.rev.as_str(),
    ])
}

/// Link override, then build link, then commit link
pub fn to_link(args: &InvocationArgs) -> String {
    first_non_empty(&[
        args.link.as_str(),
        args.build.link.as_str(),
        args.commit.link.as_str(),
    ])
}

/// Commit message, cut to [`DESCRIPTION_MAX_LEN`] characters
pub fn to_description(args: &InvocationArgs) -> String {
    args.commit.message.chars().take(DESCRIPTION_MAX_LEN).collect()
}

/// Pipeline name override, then stage name, then the commit author's name
pub fn to_pipeline_name(args: &InvocationArgs) -> String {
    first_non_empty(&[
        args.name.as_str(),
        args.stage.name.as_str(),
        args.commit.author.name.as_str(),
    ])
}

fn first_non_empty(candidates: &[&str]) -> String {
    candidates
        .iter()
        .find(|value| !value.is_empty())
        .map(|value| value.to_string())
        .unwrap_or_default()
}
