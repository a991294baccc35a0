//! # Bridge Client
//!
//! HTTP client for the PyCharm Refactoring Bridge plugin.
//!
//! Every call issues exactly one HTTP request and yields either the typed
//! response or a classified [`BridgeError`]. There is no retry at this layer.
//! The underlying transport is created lazily and can be released with
//! [`BridgeClient::close`]; a closed client reopens on the next call.

use crate::config::BridgeConfig;
use crate::errors::BridgeError;
use crate::types::*;

use reqwest::header::{AUTHORIZATION, CONTENT_TYPE, HeaderMap, HeaderValue};
use reqwest::{Client, RequestBuilder, StatusCode};
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::{debug, warn};

pub struct BridgeClient {
    config: BridgeConfig,
    http: Option<Client>,
}

impl Default for BridgeClient {
    fn default() -> Self {
        Self::new(BridgeConfig::default())
    }
}

impl BridgeClient {
    pub fn new(config: BridgeConfig) -> Self {
        Self { config, http: None }
    }

    pub fn config(&self) -> &BridgeConfig {
        &self.config
    }

    /// Whether a transport is currently held
    pub fn is_open(&self) -> bool {
        self.http.is_some()
    }

    /// Release the transport. Safe to call repeatedly.
    pub fn close(&mut self) {
        if self.http.take().is_some() {
            debug!("Closed bridge transport for {}", self.config.base_url);
        }
    }

    fn transport(&mut self) -> Result<Client, BridgeError> {
        if let Some(client) = &self.http {
            return Ok(client.clone());
        }

        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        if let Some(token) = &self.config.auth_token {
            match HeaderValue::from_str(&format!("Bearer {token}")) {
                Ok(mut value) => {
                    value.set_sensitive(true);
                    headers.insert(AUTHORIZATION, value);
                }
                Err(_) => warn!("Bridge auth token is not a valid header value, sending none"),
            }
        }

        let client = Client::builder()
            .default_headers(headers)
            .timeout(self.config.timeout)
            .build()
            .map_err(|e| {
                warn!("Failed to build bridge HTTP client: {e}");
                BridgeError::connectivity()
            })?;

        debug!("Opened bridge transport for {}", self.config.base_url);
        self.http = Some(client.clone());
        Ok(client)
    }

    async fn get<T: DeserializeOwned>(&mut self, path: &str) -> Result<T, BridgeError> {
        let client = self.transport()?;
        let builder = client.get(self.config.endpoint(path));
        Self::execute(builder, "GET", path).await
    }

    async fn post<R: BridgeRequest>(&mut self, request: &R) -> Result<R::Response, BridgeError> {
        let client = self.transport()?;
        let builder = client.post(self.config.endpoint(R::PATH)).json(request);
        Self::execute(builder, "POST", R::PATH).await
    }

    async fn execute<T: DeserializeOwned>(
        builder: RequestBuilder,
        method: &str,
        path: &str,
    ) -> Result<T, BridgeError> {
        let response = builder.send().await.map_err(|e| {
            warn!("{method} {path} failed to reach the bridge: {e}");
            BridgeError::connectivity()
        })?;

        let status = response.status();
        let body = response.text().await.map_err(|e| {
            warn!("{method} {path} failed while reading the response body: {e}");
            BridgeError::connectivity()
        })?;
        debug!("{method} {path} -> {status} ({} bytes)", body.len());

        if !status.is_success() {
            let err = rejection_from_status(status, &body);
            warn!("{method} {path} rejected: {err}");
            return Err(err);
        }

        decode_success(path, &body)
    }

    pub async fn health(&mut self) -> Result<HealthResponse, BridgeError> {
        self.get("/health").await
    }

    pub async fn list_projects(&mut self) -> Result<ProjectListResponse, BridgeError> {
        self.get("/projects").await
    }

    pub async fn rename(&mut self, request: &RenameRequest) -> Result<RenameResponse, BridgeError> {
        self.post(request).await
    }

    pub async fn move_element(
        &mut self,
        request: &MoveRequest,
    ) -> Result<MoveResponse, BridgeError> {
        self.post(request).await
    }

    pub async fn extract_method(
        &mut self,
        request: &ExtractMethodRequest,
    ) -> Result<ExtractMethodResponse, BridgeError> {
        self.post(request).await
    }

    pub async fn extract_variable(
        &mut self,
        request: &ExtractVariableRequest,
    ) -> Result<ExtractVariableResponse, BridgeError> {
        self.post(request).await
    }

    pub async fn inline(&mut self, request: &InlineRequest) -> Result<InlineResponse, BridgeError> {
        self.post(request).await
    }

    pub async fn change_signature(
        &mut self,
        request: &ChangeSignatureRequest,
    ) -> Result<ChangeSignatureResponse, BridgeError> {
        self.post(request).await
    }

    pub async fn safe_delete(
        &mut self,
        request: &SafeDeleteRequest,
    ) -> Result<SafeDeleteResponse, BridgeError> {
        self.post(request).await
    }

    pub async fn find_usages(
        &mut self,
        request: &FindUsagesRequest,
    ) -> Result<FindUsagesResponse, BridgeError> {
        self.post(request).await
    }
}

// Dropping a client mid-call (cancellation) releases the transport too.
impl Drop for BridgeClient {
    fn drop(&mut self) {
        self.close();
    }
}

/// Classify a non-2xx reply. A parseable envelope supplies the message,
/// anything else falls back to the bare status code.
fn rejection_from_status(status: StatusCode, body: &str) -> BridgeError {
    if body.trim().is_empty() {
        return BridgeError::from_status(status.as_u16());
    }
    // Only a JSON object can be an envelope; serde would also accept an array
    let value = match serde_json::from_str::<Value>(body) {
        Ok(value) if value.is_object() => value,
        _ => return BridgeError::from_status(status.as_u16()),
    };
    match serde_json::from_value::<ErrorEnvelope>(value) {
        Ok(envelope) => BridgeError::application(
            envelope
                .error
                .unwrap_or_else(|| format!("HTTP {}", status.as_u16())),
            envelope.details,
        ),
        Err(_) => BridgeError::from_status(status.as_u16()),
    }
}

/// Decode a 2xx reply. An explicit `success: false` always wins over any
/// payload fields that may be present.
fn decode_success<T: DeserializeOwned>(path: &str, body: &str) -> Result<T, BridgeError> {
    let value: Value = serde_json::from_str(body).map_err(|e| BridgeError::decode(path, e))?;
    // Derived struct deserializers also accept sequences
    if !value.is_object() {
        return Err(BridgeError::decode(path, "expected a JSON object"));
    }

    if value.get("success").and_then(Value::as_bool) == Some(false) {
        let envelope: ErrorEnvelope = serde_json::from_value(value).unwrap_or_default();
        return Err(BridgeError::application(
            envelope.error.unwrap_or_else(|| "Unknown error".to_string()),
            envelope.details,
        ));
    }

    serde_json::from_value(value).map_err(|e| BridgeError::decode(path, e))
}
