//! HTTP client for the profile service.
//!
//! # Responsibilities
//! - Build endpoint URLs under the configured base URL
//! - Attach bearer auth and a per-call request ID
//! - Bound every call with a timeout
//! - Turn error bodies into `ServiceError` with the backend's message

use async_trait::async_trait;
use reqwest::{Client, RequestBuilder};
use serde::de::DeserializeOwned;
use std::time::{Duration, Instant};
use tokio::time::timeout;
use url::Url;
use uuid::Uuid;

use crate::bank::UserProfile;
use crate::config::ServiceConfig;
use crate::observability::metrics;
use crate::service::types::ErrorBody;
use crate::service::{
    IfscLookup, ProfileUpdate, ServiceError, ServiceResult, UpdatedProfile, UserService,
};

/// Header carrying the per-call correlation ID.
pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// `UserService` backed by the profile REST API.
#[derive(Clone)]
pub struct HttpUserService {
    client: Client,
    base_url: Url,
    bearer_token: Option<String>,
    timeout_duration: Duration,
}

impl HttpUserService {
    /// Create a client from service configuration.
    pub fn new(config: &ServiceConfig) -> ServiceResult<Self> {
        let base_url: Url = config.base_url.parse().map_err(|e| {
            ServiceError::InvalidRequest(format!("invalid base URL '{}': {}", config.base_url, e))
        })?;
        if base_url.cannot_be_a_base() {
            return Err(ServiceError::InvalidRequest(format!(
                "base URL '{}' cannot carry a path",
                config.base_url
            )));
        }

        let client = Client::builder()
            .connect_timeout(Duration::from_secs(config.connect_timeout_secs))
            .build()
            .map_err(|e| ServiceError::Transport(e.to_string()))?;

        tracing::debug!(base_url = %base_url, "Profile service client initialized");

        Ok(Self {
            client,
            base_url,
            bearer_token: config.bearer_token.clone(),
            timeout_duration: Duration::from_secs(config.request_timeout_secs),
        })
    }

    /// Base URL extended with the given path segments.
    fn endpoint(&self, segments: &[&str]) -> ServiceResult<Url> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| {
                ServiceError::InvalidRequest(format!(
                    "base URL '{}' cannot carry a path",
                    self.base_url
                ))
            })?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    /// Send a request with auth, request ID and timeout applied.
    async fn execute<T: DeserializeOwned>(
        &self,
        operation: &'static str,
        request: RequestBuilder,
    ) -> ServiceResult<T> {
        let request_id = Uuid::new_v4();
        let mut request = request.header(REQUEST_ID_HEADER, request_id.to_string());
        if let Some(token) = &self.bearer_token {
            request = request.bearer_auth(token);
        }

        let started = Instant::now();
        let result = match timeout(self.timeout_duration, send(request)).await {
            Ok(result) => result,
            Err(_) => Err(ServiceError::Timeout(self.timeout_duration.as_secs())),
        };
        metrics::record_service_call(operation, started);

        match &result {
            Ok(_) => tracing::debug!(
                %request_id,
                operation,
                elapsed_ms = started.elapsed().as_millis() as u64,
                "Profile service call succeeded"
            ),
            Err(e) => tracing::warn!(
                %request_id,
                operation,
                error = %e,
                "Profile service call failed"
            ),
        }
        result
    }
}

async fn send<T: DeserializeOwned>(request: RequestBuilder) -> ServiceResult<T> {
    let response = request
        .send()
        .await
        .map_err(|e| ServiceError::Transport(e.to_string()))?;

    let status = response.status();
    let text = response
        .text()
        .await
        .map_err(|e| ServiceError::Transport(e.to_string()))?;

    if !status.is_success() {
        return Err(ServiceError::Status {
            status: status.as_u16(),
            message: error_message(&text),
        });
    }

    serde_json::from_str::<T>(&text).map_err(|e| ServiceError::Decode(e.to_string()))
}

/// Non-empty `message` field of a JSON error body.
fn error_message(body: &str) -> Option<String> {
    serde_json::from_str::<ErrorBody>(body)
        .ok()
        .and_then(|body| body.message)
        .filter(|message| !message.trim().is_empty())
}

#[async_trait]
impl UserService for HttpUserService {
    async fn get_profile(&self) -> ServiceResult<UserProfile> {
        let url = self.endpoint(&["users", "me"])?;
        self.execute("get_profile", self.client.get(url)).await
    }

    async fn validate_ifsc(&self, code: &str) -> ServiceResult<IfscLookup> {
        let url = self.endpoint(&["users", "ifsc", code])?;
        self.execute("validate_ifsc", self.client.get(url)).await
    }

    async fn update_profile(&self, update: ProfileUpdate) -> ServiceResult<UpdatedProfile> {
        let url = self.endpoint(&["users", "me"])?;
        self.execute("update_profile", self.client.put(url).json(&update))
            .await
    }
}
