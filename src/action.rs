// ABOUTME: Runs one invocation of the action: create or reuse a deployment, then set its status.
// ABOUTME: Errors carry SNAFU context naming the step that failed.

use crate::api::DeploymentsApi;
use crate::config::{Config, ParseFlagError, parse_flag};
use crate::deploy::{self, DeployError};
use crate::output::StepOutputs;
use crate::types::{DeploymentId, DeploymentState};
use snafu::{ResultExt, Snafu};
use tracing::{info, warn};

/// Name of the step output that carries a newly created deployment id.
pub const DEPLOYMENT_ID_OUTPUT: &str = "ID";

#[derive(Debug, Snafu)]
#[snafu(visibility(pub))]
pub enum ActionError {
    #[snafu(display("error creating deployment: {source}"))]
    CreateDeployment { source: DeployError },

    #[snafu(display("error updating deployment status: {source}"))]
    UpdateStatus { source: DeployError },

    #[snafu(display("error parsing env.var 'FAIL': {source}"))]
    ParseFail { source: ParseFlagError },

    #[snafu(display("error writing output {name}: {source}"))]
    WriteOutput {
        name: String,
        source: std::io::Error,
    },
}

/// Error kind for programmatic handling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionErrorKind {
    /// Creating the deployment failed.
    Create,
    /// Setting the deployment status failed.
    Status,
    /// The deployment exists but its id could not be reported.
    Output,
    /// The FAIL flag could not be parsed.
    InvalidFail,
}

impl ActionError {
    pub fn kind(&self) -> ActionErrorKind {
        match self {
            ActionError::CreateDeployment { .. } => ActionErrorKind::Create,
            ActionError::UpdateStatus { .. } => ActionErrorKind::Status,
            ActionError::WriteOutput { .. } => ActionErrorKind::Output,
            ActionError::ParseFail { .. } => ActionErrorKind::InvalidFail,
        }
    }

    /// The underlying deployment error, if a deployment step failed.
    pub fn deploy_error(&self) -> Option<&DeployError> {
        match self {
            ActionError::CreateDeployment { source } | ActionError::UpdateStatus { source } => {
                Some(source)
            }
            ActionError::WriteOutput { .. } | ActionError::ParseFail { .. } => None,
        }
    }
}

/// What a run did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outcome {
    pub deployment: DeploymentId,
    /// Whether the deployment was created by this run.
    pub created: bool,
    /// The state that was set, if any.
    pub state: Option<String>,
}

/// Execute the action for a validated `config`.
pub async fn run<A>(
    api: &A,
    config: &Config,
    outputs: &StepOutputs,
) -> Result<Outcome, ActionError>
where
    A: DeploymentsApi + ?Sized,
{
    let environment = config.environment();

    let (deployment, created) = match config.deployment {
        Some(id) => (id, false),
        None => {
            info!("creating new deployment for {environment} environment");

            let id = deploy::create_deployment(api, &config.repository, environment, &config.git_ref)
                .await
                .context(CreateDeploymentSnafu)?;

            info!("successfully created deployment {id}");

            outputs
                .set(DEPLOYMENT_ID_OUTPUT, id)
                .context(WriteOutputSnafu {
                    name: DEPLOYMENT_ID_OUTPUT,
                })?;

            (id, true)
        }
    };

    let Some(status) = config.status.as_deref() else {
        return Ok(Outcome {
            deployment,
            created,
            state: None,
        });
    };

    info!("updating status of deployment {deployment} in {environment} environment");

    let failed = match config.fail.as_deref() {
        Some(raw) => parse_flag(raw).context(ParseFailSnafu)?,
        None => false,
    };

    let state = if failed {
        let failure = DeploymentState::Failure.as_str();
        warn!("FAIL={failed}, updating deployment status to '{failure}'");
        failure
    } else {
        status
    };

    deploy::update_status(api, &config.repository, deployment, state)
        .await
        .context(UpdateStatusSnafu)?;

    // Reports the state actually sent, which differs from STATUS after a FAIL override.
    info!("deployment status set to {state}");

    Ok(Outcome {
        deployment,
        created,
        state: Some(state.to_string()),
    })
}
