// ABOUTME: Action inputs: raw values from flags or the environment, and the resolved settings.
// ABOUTME: Empty values count as unset; the library never reads env vars itself.

use crate::api::DEFAULT_API_URL;
use crate::deploy::PRODUCTION_ENVIRONMENT;
use crate::error::{Error, Result};
use crate::types::DeploymentId;
use secrecy::SecretString;
use std::path::PathBuf;
use thiserror::Error as ThisError;
use tracing::warn;

/// Inputs exactly as supplied. CI workflows pass unused inputs as empty
/// strings, so `Some("")` means the same as `None`.
#[derive(Debug, Clone, Default)]
pub struct Inputs {
    pub token: Option<String>,
    pub repository: Option<String>,
    pub git_ref: Option<String>,
    pub environment: Option<String>,
    pub deployment: Option<String>,
    pub status: Option<String>,
    pub fail: Option<String>,
    pub output_file: Option<String>,
    pub api_url: Option<String>,
}

/// Everything a run needs: transport settings plus the action [`Config`].
#[derive(Debug)]
pub struct Settings {
    pub token: SecretString,
    pub api_url: String,
    pub output_file: Option<PathBuf>,
    pub config: Config,
}

/// Inputs for one run of the action.
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Repository in `owner/name` form (`GITHUB_REPOSITORY`).
    pub repository: String,
    /// Fully qualified ref being deployed (`GITHUB_REF`).
    pub git_ref: String,
    /// Target environment (`ENVIRONMENT`); defaults to production.
    pub environment: Option<String>,
    /// Existing deployment to update instead of creating one (`DEPLOYMENT`).
    pub deployment: Option<DeploymentId>,
    /// State to set on the deployment (`STATUS`).
    pub status: Option<String>,
    /// Unparsed `FAIL` flag. Only read when a status is being set.
    pub fail: Option<String>,
}

fn present(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

fn required(value: Option<String>, name: &str) -> Result<String> {
    present(value).ok_or_else(|| Error::MissingEnvVar(name.to_string()))
}

impl Inputs {
    /// Check required inputs and their combinations, logging non-fatal problems.
    pub fn resolve(self) -> Result<Settings> {
        let token = required(self.token, "GITHUB_TOKEN")?;
        let repository = required(self.repository, "GITHUB_REPOSITORY")?;
        let git_ref = required(self.git_ref, "GITHUB_REF")?;

        let environment = present(self.environment);
        let status = present(self.status);
        let fail = present(self.fail);
        let deployment = present(self.deployment);

        if deployment.is_some() && status.is_none() {
            return Err(Error::MissingEnvVar("STATUS".to_string()));
        }

        if deployment.is_some() && environment.is_some() {
            warn!("ENVIRONMENT environmental variable is redundant and can be omitted");
        }

        if fail.is_some() && status.is_none() {
            warn!("FAIL is set but STATUS is not, no status will be updated");
        }

        let deployment = deployment
            .map(|raw| {
                raw.parse::<DeploymentId>()
                    .map_err(|_| Error::InvalidDeploymentId(raw))
            })
            .transpose()?;

        Ok(Settings {
            token: SecretString::from(token),
            api_url: present(self.api_url).unwrap_or_else(|| DEFAULT_API_URL.to_string()),
            output_file: present(self.output_file).map(PathBuf::from),
            config: Config {
                repository,
                git_ref,
                environment,
                deployment,
                status,
                fail,
            },
        })
    }
}

impl Config {
    /// The environment to deploy to.
    pub fn environment(&self) -> &str {
        self.environment.as_deref().unwrap_or(PRODUCTION_ENVIRONMENT)
    }
}

#[derive(Debug, ThisError, PartialEq, Eq)]
#[error("invalid boolean value: {0:?}")]
pub struct ParseFlagError(pub String);

/// Parse a boolean flag: `1 t T TRUE true True` or `0 f F FALSE false False`.
pub fn parse_flag(value: &str) -> std::result::Result<bool, ParseFlagError> {
    match value {
        "1" | "t" | "T" | "TRUE" | "true" | "True" => Ok(true),
        "0" | "f" | "F" | "FALSE" | "false" | "False" => Ok(false),
        _ => Err(ParseFlagError(value.to_string())),
    }
}
