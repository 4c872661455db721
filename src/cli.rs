// ABOUTME: Command-line interface definition using clap derive macros.
// ABOUTME: Every input can also be supplied through the environment variables CI sets.

use clap::Parser;
use gh_deployment::config::Inputs;

/// Inputs are taken as raw strings: CI passes unset inputs as empty values,
/// which `Inputs::resolve` treats as absent.
#[derive(Parser)]
#[command(name = "gh-deployment")]
#[command(about = "Create GitHub deployments and update their status from CI")]
#[command(version)]
pub struct Cli {
    /// API token used to authenticate
    #[arg(long, env = "GITHUB_TOKEN", hide_env_values = true)]
    pub token: Option<String>,

    /// Repository in owner/name form
    #[arg(long, env = "GITHUB_REPOSITORY")]
    pub repository: Option<String>,

    /// Fully qualified ref to deploy (refs/heads/<branch> or refs/tags/<tag>)
    #[arg(long = "ref", env = "GITHUB_REF")]
    pub git_ref: Option<String>,

    /// Target environment [default: production]
    #[arg(long, env = "ENVIRONMENT")]
    pub environment: Option<String>,

    /// Existing deployment id to update instead of creating a new deployment
    #[arg(long, env = "DEPLOYMENT")]
    pub deployment: Option<String>,

    /// Deployment state to set
    #[arg(long, env = "STATUS")]
    pub status: Option<String>,

    /// Set the status to failure regardless of --status (true/false, 1/0, t/f)
    #[arg(long, env = "FAIL", num_args = 0..=1, default_missing_value = "true")]
    pub fail: Option<String>,

    /// File that receives step outputs
    #[arg(long, env = "GITHUB_OUTPUT")]
    pub output_file: Option<String>,

    /// GitHub REST API base URL [default: https://api.github.com]
    #[arg(long, env = "GITHUB_API_URL")]
    pub api_url: Option<String>,

    /// Enable debug logging
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    pub fn inputs(self) -> Inputs {
        Inputs {
            token: self.token,
            repository: self.repository,
            git_ref: self.git_ref,
            environment: self.environment,
            deployment: self.deployment,
            status: self.status,
            fail: self.fail,
            output_file: self.output_file,
            api_url: self.api_url,
        }
    }
}
