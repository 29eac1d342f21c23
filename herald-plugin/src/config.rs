//! Plugin configuration
//!
//! Binds command-line flags and the environment variables exported by the CI
//! runner into the invocation arguments of a single run. `PLUGIN_*` variables
//! carry the plugin settings, `DRONE_*` variables the pipeline metadata.

use std::time::Duration;

use clap::{ArgAction, Parser, builder::BoolishValueParser};
use herald_core::args::{
    Author, Build, Commit, Deploy, InvocationArgs, PullRequest, Semver, Stage, Tag,
};

/// Plugin configuration
#[derive(Parser, Clone)]
#[command(name = "herald")]
#[command(about = "Report CI deployments to Jira", long_about = None)]
pub struct Config {
    /// Log level used when RUST_LOG is not set
    #[arg(long, env = "PLUGIN_LOG_LEVEL", default_value = "info")]
    pub log_level: String,

    /// Atlassian cloud id
    #[arg(long, env = "PLUGIN_CLOUD_ID", default_value = "")]
    pub cloud_id: String,

    /// Atlassian OAuth2 client id
    #[arg(long, env = "PLUGIN_CLIENT_ID", default_value = "")]
    pub client_id: String,

    /// Atlassian OAuth2 client secret
    #[arg(long, env = "PLUGIN_CLIENT_SECRET", default_value = "", hide_env_values = true)]
    pub client_secret: String,

    /// Site name, resolves the cloud id when set
    #[arg(long, env = "PLUGIN_INSTANCE", default_value = "")]
    pub site: String,

    /// Issue key prefix
    #[arg(long, env = "PLUGIN_PROJECT", default_value = "")]
    pub project: String,

    /// Pipeline name override
    #[arg(long, env = "PLUGIN_PIPELINE", default_value = "")]
    pub pipeline: String,

    /// Deployment environment override
    #[arg(long, env = "PLUGIN_ENVIRONMENT", default_value = "")]
    pub environment: String,

    /// Deployment link override
    #[arg(long, env = "PLUGIN_LINK", default_value = "")]
    pub link: String,

    /// Deployment state override
    #[arg(long, env = "PLUGIN_STATE", default_value = "")]
    pub state: String,

    /// Report only the first issue key found
    #[arg(
        long,
        env = "PLUGIN_SINGLE_ISSUE_DEPLOYMENT",
        action = ArgAction::Set,
        default_value_t = false,
        value_parser = BoolishValueParser::new()
    )]
    pub single_issue_deployment: bool,

    /// Abort the run after this many seconds, 0 disables the timeout
    #[arg(long, env = "PLUGIN_TIMEOUT", default_value_t = 0)]
    pub timeout: u64,

    #[arg(long, env = "DRONE_BUILD_NUMBER", default_value_t = 0)]
    pub build_number: i64,

    #[arg(long, env = "DRONE_BUILD_STATUS", default_value = "")]
    pub build_status: String,

    #[arg(long, env = "DRONE_BUILD_LINK", default_value = "")]
    pub build_link: String,

    #[arg(long, env = "DRONE_COMMIT_SHA", default_value = "")]
    pub commit_sha: String,

    #[arg(long, env = "DRONE_COMMIT_MESSAGE", default_value = "")]
    pub commit_message: String,

    #[arg(long, env = "DRONE_COMMIT_LINK", default_value = "")]
    pub commit_link: String,

    #[arg(long, env = "DRONE_SOURCE_BRANCH", default_value = "")]
    pub source_branch: String,

    #[arg(long, env = "DRONE_TARGET_BRANCH", default_value = "")]
    pub target_branch: String,

    #[arg(long, env = "DRONE_COMMIT_AUTHOR_NAME", default_value = "")]
    pub commit_author_name: String,

    #[arg(long, env = "DRONE_COMMIT_AUTHOR_EMAIL", default_value = "")]
    pub commit_author_email: String,

    #[arg(long, env = "DRONE_PULL_REQUEST_TITLE", default_value = "")]
    pub pull_request_title: String,

    #[arg(long, env = "DRONE_DEPLOY_TO", default_value = "")]
    pub deploy_to: String,

    #[arg(long, env = "DRONE_SEMVER", default_value = "")]
    pub semver: String,

    #[arg(long, env = "DRONE_TAG", default_value = "")]
    pub tag: String,

    #[arg(long, env = "DRONE_STAGE_NAME", default_value = "")]
    pub stage_name: String,
}

impl Config {
    /// Validates the configuration
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.project.is_empty() {
            anyhow::bail!("project cannot be empty");
        }

        if self.client_id.is_empty() {
            anyhow::bail!("client_id cannot be empty");
        }

        if self.client_secret.is_empty() {
            anyhow::bail!("client_secret cannot be empty");
        }

        if self.cloud_id.is_empty() && self.site.is_empty() {
            anyhow::bail!("cloud_id cannot be empty when no instance is set");
        }

        Ok(())
    }

    /// Overall deadline of the run, if any
    pub fn timeout(&self) -> Option<Duration> {
        (self.timeout > 0).then(|| Duration::from_secs(self.timeout))
    }

    /// Builds the invocation arguments of this run
    pub fn to_args(&self) -> InvocationArgs {
        InvocationArgs {
            build: Build {
                number: self.build_number,
                status: self.build_status.clone(),
                link: self.build_link.clone(),
            },
            commit: Commit {
                rev: self.commit_sha.clone(),
                message: self.commit_message.clone(),
                link: self.commit_link.clone(),
                source: self.source_branch.clone(),
                target: self.target_branch.clone(),
                author: Author {
                    name: self.commit_author_name.clone(),
                    email: self.commit_author_email.clone(),
                },
            },
            pull_request: PullRequest {
                title: self.pull_request_title.clone(),
            },
            deploy: Deploy {
                target: self.deploy_to.clone(),
            },
            semver: Semver {
                version: self.semver.clone(),
            },
            tag: Tag {
                name: self.tag.clone(),
            },
            stage: Stage {
                name: self.stage_name.clone(),
            },
            cloud_id: self.cloud_id.clone(),
            client_id: self.client_id.clone(),
            client_secret: self.client_secret.clone(),
            site: self.site.clone(),
            project: self.project.clone(),
            name: self.pipeline.clone(),
            environment: self.environment.clone(),
            link: self.link.clone(),
            state: self.state.clone(),
            single_issue: self.single_issue_deployment,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(extra: &[&str]) -> Config {
        let mut argv = vec![
            "herald",
            "--project",
            "TEST",
            "--client-id",
            "id",
            "--client-secret",
            "secret",
            "--cloud-id",
            "cloud-123",
        ];
        argv.extend_from_slice(extra);
        Config::try_parse_from(argv).unwrap()
    }

    #[test]
    fn test_config_validation() {
        let mut config = parse(&[]);

        // Valid config should pass
        assert!(config.validate().is_ok());

        // Empty project should fail
        config.project = String::new();
        assert!(config.validate().is_err());
        config.project = "TEST".to_string();

        // Missing credentials should fail
        config.client_secret = String::new();
        assert!(config.validate().is_err());
        config.client_secret = "secret".to_string();

        // A site can stand in for the cloud id
        config.cloud_id = String::new();
        assert!(config.validate().is_err());
        config.site = "droneio".to_string();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_timeout() {
        assert_eq!(parse(&[]).timeout(), None);
        assert_eq!(parse(&["--timeout", "30"]).timeout(), Some(Duration::from_secs(30)));
    }

    #[test]
    fn test_single_issue_flag_accepts_boolish_values() {
        assert!(!parse(&[]).single_issue_deployment);
        assert!(parse(&["--single-issue-deployment", "true"]).single_issue_deployment);
        assert!(!parse(&["--single-issue-deployment", "false"]).single_issue_deployment);
    }

    #[test]
    fn test_to_args() {
        let config = parse(&[
            "--build-number",
            "42",
            "--commit-message",
            "fix TEST-42",
            "--source-branch",
            "feature/TEST-42",
            "--pipeline",
            "deploy",
            "--deploy-to",
            "staging",
        ]);

        let args = config.to_args();
        assert_eq!(args.build.number, 42);
        assert_eq!(args.commit.message, "fix TEST-42");
        assert_eq!(args.commit.source, "feature/TEST-42");
        assert_eq!(args.name, "deploy");
        assert_eq!(args.deploy.target, "staging");
        assert_eq!(args.cloud_id, "cloud-123");
        assert!(!args.single_issue);
    }
}
