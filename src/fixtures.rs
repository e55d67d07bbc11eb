//! Static fixture data consumed by the scenario suite.
//!
//! Fixtures live in a JSON document (`tests/data/testdata.json`) so payload
//! shapes can change without touching scenario code. Unlike the
//! configuration document, a missing or malformed fixture document is a hard
//! error: scenarios cannot run without their inputs.

use std::fs;
use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

use crate::models::{CreatePayload, PatchPayload};

/// Errors raised while loading the fixture document.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum FixtureError {
    /// The document could not be read.
    #[error("fixture I/O error: {message}")]
    Io {
        /// Detail from the failed read, including the path.
        message: String,
    },

    /// The document did not match the expected schema.
    #[error("fixture document is malformed: {message}")]
    Malformed {
        /// Detail from the failed deserialization, including the path.
        message: String,
    },
}

/// Named payloads driving the CRUD scenarios.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FixtureSet {
    /// Payload for create scenarios.
    pub create_object: CreatePayload,
    /// Payload for full-replace scenarios.
    pub update_object: CreatePayload,
    /// Payload for partial-update scenarios.
    pub patch_object: PatchPayload,
}

impl FixtureSet {
    /// Loads and deserializes the fixture document at `path`.
    ///
    /// # Errors
    ///
    /// Returns [`FixtureError::Io`] when the document cannot be read and
    /// [`FixtureError::Malformed`] when it cannot be deserialized.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, FixtureError> {
        let document_path = path.as_ref();
        let text = fs::read_to_string(document_path).map_err(|error| FixtureError::Io {
            message: format!("failed to read {}: {error}", document_path.display()),
        })?;

        serde_json::from_str(&text).map_err(|error| FixtureError::Malformed {
            message: format!(
                "{} is not a valid fixture document: {error}",
                document_path.display()
            ),
        })
    }
}
