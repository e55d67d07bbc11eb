//! HTTP request execution against the configured objects service.
//!
//! This module owns the harness's single outbound seam: a blocking HTTP
//! client bound to a base address resolved at construction time, a uniform
//! [`RequestExecutor::execute`] entry point parameterized by resource path,
//! verb, and optional JSON body, and the [`ObjectsEndpoint`] facade that the
//! scenario suite drives. Every completed exchange is captured as an
//! [`ApiResponse`] regardless of status code; only configuration and
//! transport problems surface as errors.

pub mod error;
pub mod executor;
pub mod objects;

pub use error::ApiError;
pub use executor::{ApiResponse, RequestExecutor, Verb};
pub use objects::ObjectsEndpoint;
