//! Low-level request execution against a fixed base address.

use std::time::Duration;

use http::{Method, StatusCode};
use reqwest::blocking::Client;
use serde_json::Value;
use url::Url;

use super::error::ApiError;
use crate::config;

const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// HTTP verbs the harness can issue.
///
/// A closed enumeration: the executor treats every verb identically, so new
/// verbs are added here rather than as new entry points.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verb {
    /// Retrieve a resource.
    Get,
    /// Create a resource.
    Post,
    /// Replace a resource.
    Put,
    /// Partially update a resource.
    Patch,
    /// Remove a resource.
    Delete,
}

impl Verb {
    /// Returns the wire method for this verb.
    #[must_use]
    pub const fn method(self) -> Method {
        match self {
            Self::Get => Method::GET,
            Self::Post => Method::POST,
            Self::Put => Method::PUT,
            Self::Patch => Method::PATCH,
            Self::Delete => Method::DELETE,
        }
    }
}

/// Normalized capture of a completed HTTP exchange.
///
/// Produced for every response the remote service sends, including 4xx and
/// 5xx replies. Interpreting the status code is entirely the caller's
/// responsibility; scenario suites assert on error codes as valid outcomes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiResponse {
    /// Status code returned by the remote service.
    pub status: StatusCode,
    /// Raw response body text, possibly empty.
    pub body: String,
}

impl ApiResponse {
    /// Parses the body as JSON, if it is JSON.
    #[must_use]
    pub fn json(&self) -> Option<Value> {
        serde_json::from_str(&self.body).ok()
    }
}

/// Blocking HTTP executor bound to one base address.
///
/// The base address is fixed at construction and never changes for the
/// lifetime of the executor; callers needing a different address construct a
/// new one. The underlying client is safe to share across threads, so
/// concurrent calls against one executor are permitted.
#[derive(Debug)]
pub struct RequestExecutor {
    client: Client,
    base_url: String,
}

impl RequestExecutor {
    /// Builds an executor whose base address comes from the layered
    /// configuration lookup.
    ///
    /// The address is resolved as environment override, then document value
    /// for `key`, then `fallback`.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Configuration`] when the resolved address is
    /// blank or unparseable, or when the HTTP client cannot be constructed.
    pub fn from_settings(key: &str, env_override: &str, fallback: &str) -> Result<Self, ApiError> {
        let base_address =
            config::resolve(key, Some(env_override)).unwrap_or_else(|| fallback.to_owned());
        Self::new(base_address)
    }

    /// Builds an executor for an explicit base address.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Configuration`] when the address is empty or
    /// whitespace-only, is not an absolute URL, or when the HTTP client
    /// cannot be constructed.
    pub fn new(base_address: impl AsRef<str>) -> Result<Self, ApiError> {
        let trimmed = base_address.as_ref().trim();
        if trimmed.is_empty() {
            return Err(ApiError::Configuration {
                message: "base address is not configured; provide a configuration document value, \
                          an environment override, or a non-empty default"
                    .to_owned(),
            });
        }

        Url::parse(trimmed).map_err(|error| ApiError::Configuration {
            message: format!("base address '{trimmed}' is invalid: {error}"),
        })?;

        let client = Client::builder()
            .timeout(Duration::from_secs(DEFAULT_TIMEOUT_SECS))
            .build()
            .map_err(|error| ApiError::Configuration {
                message: format!("failed to configure HTTP client: {error}"),
            })?;

        Ok(Self {
            client,
            base_url: trimmed.trim_end_matches('/').to_owned(),
        })
    }

    /// Returns the base address requests are issued against.
    #[must_use]
    pub fn base_url(&self) -> &str {
        self.base_url.as_str()
    }

    /// Executes one request and normalizes whatever comes back.
    ///
    /// The request targets `base address + resource` with the given verb.
    /// When `body` is present it is serialized as JSON and attached
    /// regardless of verb; the protocol permits a payload on any method and
    /// the executor does not second-guess it. Any status code in the reply
    /// is a success from this layer's perspective.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Transport`] when the exchange does not complete:
    /// DNS failure, refused connection, timeout, or an interrupted body
    /// read. Transport failures are never coerced into fake status codes.
    pub fn execute(
        &self,
        resource: &str,
        verb: Verb,
        body: Option<&Value>,
    ) -> Result<ApiResponse, ApiError> {
        let request_url = self.request_url(resource);
        tracing::debug!(
            url = %request_url,
            method = %verb.method(),
            has_body = body.is_some(),
            "dispatching request"
        );

        let mut request = self.client.request(verb.method(), request_url.as_str());
        if let Some(payload) = body {
            request = request.json(payload);
        }

        let response = request.send().map_err(|error| ApiError::Transport {
            message: format!("request to {request_url} failed: {error}"),
        })?;

        let status = response.status();
        let text = response.text().map_err(|error| ApiError::Transport {
            message: format!("reading response body from {request_url} failed: {error}"),
        })?;
        tracing::trace!(status = status.as_u16(), body_len = text.len(), "received response");

        Ok(ApiResponse { status, body: text })
    }

    fn request_url(&self, resource: &str) -> String {
        let separator = if resource.starts_with('/') { "" } else { "/" };
        format!("{}{separator}{resource}", self.base_url)
    }
}

#[cfg(test)]
#[path = "executor_tests.rs"]
mod tests;
