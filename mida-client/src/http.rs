//! HTTP gateway for the admin API
//!
//! Every call carries the stored bearer token and the per-attempt timeout
//! from the retry policy. Failures that are neither timeouts nor 401s are
//! retried once with a fixed backoff. A 401 clears the session before
//! surfacing, so the next login starts from a clean slate.

use std::sync::Arc;

use reqwest::header::CONTENT_TYPE;
use reqwest::{Method, Response, StatusCode};
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

use shared::response::ErrorBody;

use crate::config::ClientConfig;
use crate::error::{ClientError, ClientResult};
use crate::session::SessionStore;

/// HTTP gateway wrapping `reqwest` with auth, timeout, and bounded retry
#[derive(Clone)]
pub struct ApiGateway {
    client: reqwest::Client,
    base_url: String,
    config: ClientConfig,
    session: Arc<dyn SessionStore>,
}

impl ApiGateway {
    /// Create a new gateway from configuration and a session store
    pub fn new(config: ClientConfig, session: Arc<dyn SessionStore>) -> Self {
        // Timeouts are applied per request attempt, not on the client
        let client = reqwest::Client::builder()
            .build()
            .expect("Failed to build HTTP client");

        Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            config,
            session,
        }
    }

    /// The injected session store
    pub fn session(&self) -> &Arc<dyn SessionStore> {
        &self.session
    }

    /// The gateway configuration
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    // ========== Request helpers ==========

    /// Make a GET request
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T> {
        self.request_json(Method::GET, path, None).await
    }

    /// Make a POST request with JSON body
    pub async fn post<T: DeserializeOwned, B: Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<T> {
        let body = serde_json::to_value(body)?;
        self.request_json(Method::POST, path, Some(body)).await
    }

    /// Make a POST request without body
    pub async fn post_empty<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T> {
        self.request_json(Method::POST, path, None).await
    }

    /// Make a PUT request with JSON body
    pub async fn put<T: DeserializeOwned, B: Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<T> {
        let body = serde_json::to_value(body)?;
        self.request_json(Method::PUT, path, Some(body)).await
    }

    /// Make a DELETE request, discarding the response body
    pub async fn delete(&self, path: &str) -> ClientResult<()> {
        self.request_json::<Value>(Method::DELETE, path, None)
            .await?;
        Ok(())
    }

    /// Make a GET request for a raw binary response (spreadsheet export)
    pub async fn get_bytes(&self, path: &str) -> ClientResult<Vec<u8>> {
        let url = self.url(path);
        let attempts = self.config.retry.attempts.max(1);
        let mut attempt = 0;
        loop {
            let result = async {
                let response = self.dispatch(&Method::GET, &url, None, attempt).await?;
                let response = self.check_status(response).await?;
                response.bytes().await.map(|b| b.to_vec()).map_err(|err| {
                    if err.is_timeout() {
                        ClientError::Timeout
                    } else {
                        ClientError::Http(err)
                    }
                })
            }
            .await;

            match result {
                Ok(bytes) => return Ok(bytes),
                Err(err) if !err.is_retryable() => return Err(err),
                Err(err) => {
                    attempt += 1;
                    if attempt >= attempts {
                        return Err(err);
                    }
                    tracing::warn!(error = %err, attempt, path, "Request failed, retrying");
                    tokio::time::sleep(self.config.retry.backoff).await;
                }
            }
        }
    }

    // ========== Core request loop ==========

    async fn request_json<T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        body: Option<Value>,
    ) -> ClientResult<T> {
        let url = self.url(path);
        let attempts = self.config.retry.attempts.max(1);
        let mut attempt = 0;
        loop {
            let result = async {
                let response = self
                    .dispatch(&method, &url, body.as_ref(), attempt)
                    .await?;
                let response = self.check_status(response).await?;
                Self::decode_json(response).await
            }
            .await;

            match result {
                Ok(value) => return Ok(value),
                Err(err) if !err.is_retryable() => return Err(err),
                Err(err) => {
                    attempt += 1;
                    if attempt >= attempts {
                        return Err(err);
                    }
                    tracing::warn!(error = %err, attempt, path, "Request failed, retrying");
                    tokio::time::sleep(self.config.retry.backoff).await;
                }
            }
        }
    }

    /// Send one attempt, mapping timeout aborts to their own variant.
    async fn dispatch(
        &self,
        method: &Method,
        url: &str,
        body: Option<&Value>,
        attempt: u32,
    ) -> ClientResult<Response> {
        tracing::debug!(%method, url, attempt, "Dispatching request");

        let mut request = self
            .client
            .request(method.clone(), url)
            .timeout(self.config.retry.timeout_for(attempt))
            .header(CONTENT_TYPE, "application/json");

        if let Some(token) = self.session.get() {
            request = request.bearer_auth(token);
        }
        if let Some(body) = body {
            request = request.json(body);
        }

        request.send().await.map_err(|err| {
            if err.is_timeout() {
                ClientError::Timeout
            } else {
                ClientError::Http(err)
            }
        })
    }

    /// Map non-success statuses; clears the session on 401.
    async fn check_status(&self, response: Response) -> ClientResult<Response> {
        let status = response.status();

        if status == StatusCode::UNAUTHORIZED {
            if let Err(err) = self.session.clear() {
                tracing::warn!(error = %err, "Failed to clear session after 401");
            }
            tracing::warn!("Backend returned 401, session cleared");
            return Err(ClientError::SessionExpired);
        }

        if !status.is_success() {
            let message = Self::server_message(response)
                .await
                .unwrap_or_else(|| format!("HTTP {}", status.as_u16()));
            return Err(ClientError::Api {
                status: status.as_u16(),
                message,
            });
        }

        Ok(response)
    }

    /// Extract the backend's `{"error": "..."}` message when the body is JSON.
    async fn server_message(response: Response) -> Option<String> {
        if !Self::is_json(&response) {
            return None;
        }
        response
            .json::<ErrorBody>()
            .await
            .ok()
            .map(|body| body.error)
    }

    async fn decode_json<T: DeserializeOwned>(response: Response) -> ClientResult<T> {
        if !Self::is_json(&response) {
            let content_type = response
                .headers()
                .get(CONTENT_TYPE)
                .and_then(|v| v.to_str().ok())
                .unwrap_or("none")
                .to_string();
            return Err(ClientError::InvalidResponse(format!(
                "Unexpected content type: {content_type}"
            )));
        }

        response.json().await.map_err(|err| {
            if err.is_timeout() {
                ClientError::Timeout
            } else {
                ClientError::InvalidResponse(err.to_string())
            }
        })
    }

    fn is_json(response: &Response) -> bool {
        response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(|v| v.starts_with("application/json"))
            .unwrap_or(false)
    }
}
