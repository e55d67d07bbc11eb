//! Restcheck library crate for verifying a remote objects CRUD service.
//!
//! The library resolves the target service address through a layered
//! configuration lookup, executes HTTP requests uniformly across verbs
//! through a single blocking executor, and normalizes every completed
//! exchange into a status-plus-body response that scenario suites assert
//! on. Any HTTP status code, including 4xx/5xx, is a valid outcome; only
//! configuration and transport problems are errors.

pub mod api;
pub mod config;
pub mod fixtures;
pub mod models;

pub use api::{ApiError, ApiResponse, ObjectsEndpoint, RequestExecutor, Verb};
pub use fixtures::{FixtureError, FixtureSet};
pub use models::{CreatePayload, ObjectRecord, PatchPayload};
