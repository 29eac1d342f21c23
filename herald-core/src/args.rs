//! Invocation arguments
//!
//! The immutable input bundle for one notifier run. It is assembled by the
//! plugin's argument binding from the environment the CI runner exports and is
//! never mutated afterwards.

/// Build metadata reported by the CI system
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Build {
    pub number: i64,
    pub status: String,
    pub link: String,
}

/// Commit author
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Author {
    pub name: String,
    pub email: String,
}

/// Commit metadata
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Commit {
    /// Commit sha
    pub rev: String,
    pub message: String,
    pub link: String,
    /// Source branch
    pub source: String,
    /// Target branch
    pub target: String,
    pub author: Author,
}

/// Pull request metadata
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PullRequest {
    pub title: String,
}

/// Deployment (promotion) metadata
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Deploy {
    /// Target environment of a promotion, e.g. "production"
    pub target: String,
}

/// Semantic version derived from the tag, if any
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Semver {
    pub version: String,
}

/// Git tag
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Tag {
    pub name: String,
}

/// Pipeline stage
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Stage {
    pub name: String,
}

/// Everything a single notifier run needs
///
/// Pipeline metadata comes first, followed by the plugin settings. Empty
/// strings mean "not provided" throughout.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct InvocationArgs {
    pub build: Build,
    pub commit: Commit,
    pub pull_request: PullRequest,
    pub deploy: Deploy,
    pub semver: Semver,
    pub tag: Tag,
    pub stage: Stage,

    /// Atlassian cloud id, used unless `site` resolves a different one
    pub cloud_id: String,
    /// OAuth2 client id
    pub client_id: String,
    /// OAuth2 client secret
    pub client_secret: String,
    /// Site name (`{site}.atlassian.net`), triggers tenant resolution
    pub site: String,
    /// Issue key prefix, e.g. "TEST" for TEST-123
    pub project: String,
    /// Pipeline name override
    pub name: String,
    /// Environment override
    pub environment: String,
    /// Deep link override
    pub link: String,
    /// State override
    pub state: String,
    /// Only report the first issue key found
    pub single_issue: bool,
}

impl std::fmt::Debug for InvocationArgs {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InvocationArgs")
            .field("build", &self.build)
            .field("commit", &self.commit)
            .field("pull_request", &self.pull_request)
            .field("deploy", &self.deploy)
            .field("semver", &self.semver)
            .field("tag", &self.tag)
            .field("stage", &self.stage)
            .field("cloud_id", &self.cloud_id)
            .field("client_id", &self.client_id)
            .field("client_secret", &"***")
            .field("site", &self.site)
            .field("project", &self.project)
            .field("name", &self.name)
            .field("environment", &self.environment)
            .field("link", &self.link)
            .field("state", &self.state)
            .field("single_issue", &self.single_issue)
            .finish()
    }
}
