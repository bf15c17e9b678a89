use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use std::time::Duration;
use tracing::{debug, warn};
use uuid::Uuid;

use crate::config::UpstreamConfig;
use crate::envelope::{parse_error_envelope, unwrap_envelope};
use crate::error::ClientError;

/// Shared HTTP adapter for the remote commerce API.
///
/// Every request is attempted exactly once; integrators needing retries or
/// circuit breaking layer them on top of this client.
#[derive(Debug, Clone)]
pub struct HttpClient {
    client: Client,
    base_url: String,
    health_timeout: Duration,
}

impl HttpClient {
    pub fn new(config: &UpstreamConfig) -> Result<Self, ClientError> {
        let client = Client::builder()
            .connect_timeout(Duration::from_millis(config.connect_timeout_ms))
            .timeout(Duration::from_millis(config.effective_timeout_ms()))
            .build()
            .map_err(|e| ClientError::Transport(e.to_string()))?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            health_timeout: Duration::from_millis(config.health_timeout_ms),
        })
    }

    /// Perform a GET request, attaching the bearer token when one is given.
    pub async fn get<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
        token: Option<&str>,
    ) -> Result<T, ClientError> {
        let url = format!("{}{}", self.base_url, path);
        let request_id = Uuid::new_v4();
        debug!(request_id = %request_id, url = %url, "GET request");

        let mut request = self.client.get(&url);
        if !query.is_empty() {
            request = request.query(query);
        }
        if let Some(token) = token {
            request = request.bearer_auth(token);
        }

        let response = request.send().await?;
        read_body(response, request_id).await
    }

    /// Perform a POST request with a JSON body.
    pub async fn post<T: DeserializeOwned, B: Serialize>(
        &self,
        path: &str,
        body: &B,
        token: Option<&str>,
    ) -> Result<T, ClientError> {
        let url = format!("{}{}", self.base_url, path);
        let request_id = Uuid::new_v4();
        debug!(request_id = %request_id, url = %url, "POST request");

        let mut request = self.client.post(&url).json(body);
        if let Some(token) = token {
            request = request.bearer_auth(token);
        }

        let response = request.send().await?;
        read_body(response, request_id).await
    }

    /// Perform a PUT request with a JSON body.
    pub async fn put<T: DeserializeOwned, B: Serialize>(
        &self,
        path: &str,
        body: &B,
        token: Option<&str>,
    ) -> Result<T, ClientError> {
        let url = format!("{}{}", self.base_url, path);
        let request_id = Uuid::new_v4();
        debug!(request_id = %request_id, url = %url, "PUT request");

        let mut request = self.client.put(&url).json(body);
        if let Some(token) = token {
            request = request.bearer_auth(token);
        }

        let response = request.send().await?;
        read_body(response, request_id).await
    }

    /// Probe remote availability with a short dedicated deadline.
    /// Any failure reads as unhealthy.
    pub async fn health_check(&self) -> bool {
        let url = format!("{}/health", self.base_url);
        match self
            .client
            .get(&url)
            .timeout(self.health_timeout)
            .send()
            .await
        {
            Ok(response) => response.status().is_success(),
            Err(err) => {
                warn!(url = %url, error = %err, "health probe failed");
                false
            }
        }
    }
}

async fn read_body<T: DeserializeOwned>(
    response: reqwest::Response,
    request_id: Uuid,
) -> Result<T, ClientError> {
    let status = response.status();
    let text = response.text().await?;

    if !status.is_success() {
        warn!(request_id = %request_id, status = status.as_u16(), "upstream request failed");
        if let Some(envelope) = parse_error_envelope(&text) {
            return Err(ClientError::Api {
                status: status.as_u16(),
                message: envelope.message,
                errors: envelope.errors,
            });
        }
        return Err(ClientError::Status {
            status: status.as_u16(),
            body: text,
        });
    }

    let value = if text.is_empty() {
        Value::Null
    } else {
        serde_json::from_str(&text)?
    };
    Ok(serde_json::from_value(unwrap_envelope(value))?)
}
