// ABOUTME: Shared test support: a recording DeploymentsApi and a one-shot HTTP server.
// ABOUTME: Lets tests assert exactly which requests were (or were not) sent.

#![allow(dead_code)]

use async_trait::async_trait;
use gh_deployment::api::{
    ApiError, Deployment, DeploymentStatus, DeploymentsApi, NewDeployment, NewDeploymentStatus,
};
use gh_deployment::types::{DeploymentId, Repository, StatusId};
use parking_lot::Mutex;
use reqwest::StatusCode;
use std::collections::HashMap;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

pub const DEPLOYMENT_ID: u64 = 123456789;

/// A request the mock API received.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    CreateDeployment {
        repository: Repository,
        request: NewDeployment,
    },
    CreateDeploymentStatus {
        repository: Repository,
        id: DeploymentId,
        request: NewDeploymentStatus,
    },
}

/// In-memory DeploymentsApi that records calls and answers from canned values.
pub struct MockApi {
    calls: Mutex<Vec<Call>>,
    rejection: Option<String>,
}

impl MockApi {
    /// Succeeds every call, assigning deployment id `DEPLOYMENT_ID`.
    pub fn new() -> Self {
        Self {
            calls: Mutex::new(Vec::new()),
            rejection: None,
        }
    }

    /// Fails every call with a 422 carrying `message`.
    pub fn rejecting(message: &str) -> Self {
        Self {
            calls: Mutex::new(Vec::new()),
            rejection: Some(message.to_string()),
        }
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().clone()
    }

    fn answer<T>(&self, value: T) -> Result<T, ApiError> {
        match &self.rejection {
            Some(message) => Err(rejection(message)),
            None => Ok(value),
        }
    }
}

/// The error a rejecting MockApi returns.
pub fn rejection(message: &str) -> ApiError {
    ApiError::Response {
        method: "POST".to_string(),
        url: "https://api.github.com/repos/org/repo/deployments".to_string(),
        status: StatusCode::UNPROCESSABLE_ENTITY,
        message: message.to_string(),
    }
}

#[async_trait]
impl DeploymentsApi for MockApi {
    async fn create_deployment(
        &self,
        repository: &Repository,
        request: &NewDeployment,
    ) -> Result<Deployment, ApiError> {
        self.calls.lock().push(Call::CreateDeployment {
            repository: repository.clone(),
            request: request.clone(),
        });

        self.answer(Deployment {
            id: DeploymentId::new(DEPLOYMENT_ID),
            git_ref: Some(request.git_ref.clone()),
            environment: Some(request.environment.clone()),
            production_environment: Some(request.production_environment),
        })
    }

    async fn create_deployment_status(
        &self,
        repository: &Repository,
        id: DeploymentId,
        request: &NewDeploymentStatus,
    ) -> Result<DeploymentStatus, ApiError> {
        self.calls.lock().push(Call::CreateDeploymentStatus {
            repository: repository.clone(),
            id,
            request: request.clone(),
        });

        self.answer(DeploymentStatus {
            id: StatusId::new(1),
            state: request.state,
        })
    }
}

/// A request captured by `serve_once`.
#[derive(Debug)]
pub struct RecordedRequest {
    pub method: String,
    pub path: String,
    pub headers: HashMap<String, String>,
    pub body: String,
}

impl RecordedRequest {
    pub fn json(&self) -> serde_json::Value {
        serde_json::from_str(&self.body).unwrap()
    }
}

/// Serve a single HTTP request on a loopback port with a canned response.
///
/// Returns the base URL to point a client at and a handle yielding the
/// request that was received.
pub async fn serve_once(
    status: u16,
    response_body: &'static str,
) -> (String, JoinHandle<RecordedRequest>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let url = format!("http://{}", listener.local_addr().unwrap());

    let handle = tokio::spawn(async move {
        let (mut stream, _) = listener.accept().await.unwrap();

        let mut buf = Vec::new();
        let mut chunk = [0u8; 4096];
        let header_end = loop {
            let n = stream.read(&mut chunk).await.unwrap();
            assert!(n > 0, "connection closed before request headers were read");
            buf.extend_from_slice(&chunk[..n]);
            if let Some(pos) = buf.windows(4).position(|w| w == b"\r\n\r\n") {
                break pos;
            }
        };

        let head = String::from_utf8_lossy(&buf[..header_end]).to_string();
        let mut lines = head.lines();
        let request_line = lines.next().unwrap_or_default();
        let mut parts = request_line.split_whitespace();
        let method = parts.next().unwrap_or_default().to_string();
        let path = parts.next().unwrap_or_default().to_string();

        let headers: HashMap<String, String> = lines
            .filter_map(|line| line.split_once(':'))
            .map(|(k, v)| (k.trim().to_ascii_lowercase(), v.trim().to_string()))
            .collect();

        let content_length: usize = headers
            .get("content-length")
            .and_then(|v| v.parse().ok())
            .unwrap_or(0);
        let body_start = header_end + 4;
        while buf.len() < body_start + content_length {
            let n = stream.read(&mut chunk).await.unwrap();
            assert!(n > 0, "connection closed before request body was read");
            buf.extend_from_slice(&chunk[..n]);
        }
        let body =
            String::from_utf8_lossy(&buf[body_start..body_start + content_length]).to_string();

        let reason = StatusCode::from_u16(status)
            .ok()
            .and_then(|s| s.canonical_reason())
            .unwrap_or("Unknown");
        let response = format!(
            "HTTP/1.1 {status} {reason}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{response_body}",
            response_body.len()
        );
        stream.write_all(response.as_bytes()).await.unwrap();
        stream.shutdown().await.ok();

        RecordedRequest {
            method,
            path,
            headers,
            body,
        }
    });

    (url, handle)
}
