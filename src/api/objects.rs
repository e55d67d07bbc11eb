//! Verb-named facade over the executor for the `/objects` resource.
//!
//! Each method is a direct pass-through to [`RequestExecutor::execute`] with
//! the fixed resource prefix and, for item-scoped operations, an appended
//! identifier segment. No identifier validation happens here: malformed ids
//! are forwarded verbatim and the remote service's verdict is authoritative.

use serde_json::Value;

use super::error::ApiError;
use super::executor::{ApiResponse, RequestExecutor, Verb};

const RESOURCE: &str = "/objects";

/// Configuration document key holding the service base address.
pub const BASE_URL_KEY: &str = "api.base_url";

/// Environment variable overriding the configured base address.
pub const BASE_URL_ENV: &str = "RESTCHECK_BASE_URL";

/// Fallback base address when neither the environment nor the document
/// provides one.
pub const DEFAULT_BASE_URL: &str = "https://api.restful-api.dev";

/// CRUD facade permanently bound to one executor and the `/objects` prefix.
#[derive(Debug)]
pub struct ObjectsEndpoint {
    executor: RequestExecutor,
}

impl ObjectsEndpoint {
    /// Wraps an existing executor.
    #[must_use]
    pub const fn new(executor: RequestExecutor) -> Self {
        Self { executor }
    }

    /// Builds an endpoint against the configured service address.
    ///
    /// Resolution order: [`BASE_URL_ENV`], then [`BASE_URL_KEY`] in the
    /// configuration document, then [`DEFAULT_BASE_URL`].
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Configuration`] when the resolved address is
    /// unusable.
    pub fn from_config() -> Result<Self, ApiError> {
        RequestExecutor::from_settings(BASE_URL_KEY, BASE_URL_ENV, DEFAULT_BASE_URL).map(Self::new)
    }

    /// Creates an object by POSTing `payload` to the collection.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Transport`] when the exchange does not complete.
    pub fn create(&self, payload: &Value) -> Result<ApiResponse, ApiError> {
        self.executor.execute(RESOURCE, Verb::Post, Some(payload))
    }

    /// Retrieves the object with `id`.
    ///
    /// An empty `id` targets the bare collection endpoint; that request is
    /// forwarded, not rejected client-side.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Transport`] when the exchange does not complete.
    pub fn get(&self, id: &str) -> Result<ApiResponse, ApiError> {
        self.executor.execute(&item_path(id), Verb::Get, None)
    }

    /// Replaces the object with `id` by PUTting `payload`.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Transport`] when the exchange does not complete.
    pub fn update(&self, id: &str, payload: &Value) -> Result<ApiResponse, ApiError> {
        self.executor.execute(&item_path(id), Verb::Put, Some(payload))
    }

    /// Partially updates the object with `id` by PATCHing `payload`.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Transport`] when the exchange does not complete.
    pub fn patch(&self, id: &str, payload: &Value) -> Result<ApiResponse, ApiError> {
        self.executor
            .execute(&item_path(id), Verb::Patch, Some(payload))
    }

    /// Deletes the object with `id`; same empty-id behavior as [`Self::get`].
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Transport`] when the exchange does not complete.
    pub fn delete(&self, id: &str) -> Result<ApiResponse, ApiError> {
        self.executor.execute(&item_path(id), Verb::Delete, None)
    }
}

fn item_path(id: &str) -> String {
    format!("{RESOURCE}/{id}")
}
