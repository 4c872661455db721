// ABOUTME: reqwest-backed implementation of DeploymentsApi for GitHub and GitHub Enterprise.
// ABOUTME: Handles bearer authentication, API versioning headers, and error bodies.

use super::error::ApiError;
use super::models::{Deployment, DeploymentStatus, NewDeployment, NewDeploymentStatus};
use super::DeploymentsApi;
use crate::types::{DeploymentId, Repository};
use async_trait::async_trait;
use reqwest::header::{self, HeaderMap, HeaderValue};
use reqwest::{Client, ClientBuilder, Response, StatusCode};
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::debug;

pub const DEFAULT_API_URL: &str = "https://api.github.com";

const API_VERSION: &str = "2022-11-28";
const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// GitHub REST client scoped to the deployments endpoints.
pub struct GitHubClient {
    client: Client,
    base_url: String,
    token: SecretString,
}

/// Error body returned by GitHub for rejected requests.
#[derive(Deserialize)]
struct ErrorBody {
    message: String,
}

impl GitHubClient {
    pub fn new(base_url: &str, token: SecretString) -> Result<Self, ApiError> {
        Self::from_builder(base_url, token, Client::builder())
    }

    /// Build a client on top of a caller-configured `reqwest` builder
    /// (proxies, extra root certificates). GitHub headers and the request
    /// timeout are applied on top.
    pub fn from_builder(
        base_url: &str,
        token: SecretString,
        builder: ClientBuilder,
    ) -> Result<Self, ApiError> {
        let mut headers = HeaderMap::new();
        headers.insert(
            header::ACCEPT,
            HeaderValue::from_static("application/vnd.github+json"),
        );
        headers.insert("X-GitHub-Api-Version", HeaderValue::from_static(API_VERSION));

        let client = builder
            .user_agent(USER_AGENT)
            .default_headers(headers)
            .timeout(REQUEST_TIMEOUT)
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            token,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn deployments_path(repository: &Repository) -> String {
        format!(
            "/repos/{}/{}/deployments",
            urlencoding::encode(repository.owner()),
            urlencoding::encode(repository.name())
        )
    }

    async fn post<B: Serialize + ?Sized>(&self, path: &str, body: &B) -> Result<Response, ApiError> {
        let url = format!("{}{}", self.base_url, path);
        debug!("POST {}", url);

        let response = self
            .client
            .post(&url)
            .bearer_auth(self.token.expose_secret())
            .json(body)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            debug!("POST {} failed: {} - {}", url, status, body);
            return Err(ApiError::Response {
                method: "POST".to_string(),
                url,
                status,
                message: error_message(&body),
            });
        }

        Ok(response)
    }
}

/// Extract GitHub's `message` field, falling back to the raw body.
fn error_message(body: &str) -> String {
    serde_json::from_str::<ErrorBody>(body)
        .map(|parsed| parsed.message)
        .unwrap_or_else(|_| body.trim().to_string())
}

#[async_trait]
impl DeploymentsApi for GitHubClient {
    async fn create_deployment(
        &self,
        repository: &Repository,
        request: &NewDeployment,
    ) -> Result<Deployment, ApiError> {
        let path = Self::deployments_path(repository);
        let response = self.post(&path, request).await?;

        if response.status() == StatusCode::ACCEPTED {
            let body = response.text().await?;
            return Err(ApiError::NotCreated(error_message(&body)));
        }

        Ok(response.json().await?)
    }

    async fn create_deployment_status(
        &self,
        repository: &Repository,
        id: DeploymentId,
        request: &NewDeploymentStatus,
    ) -> Result<DeploymentStatus, ApiError> {
        let path = format!("{}/{}/statuses", Self::deployments_path(repository), id);
        let response = self.post(&path, request).await?;
        Ok(response.json().await?)
    }
}
