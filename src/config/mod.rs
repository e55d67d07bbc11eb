//! Layered configuration lookup for the harness.
//!
//! Settings are resolved with the following precedence (highest to lowest):
//!
//! 1. **Environment variable** – the per-setting override named by the
//!    caller, used when set to a non-empty value
//! 2. **Configuration document** – `restcheck.json` in the working
//!    directory, addressed with dot-separated keys
//! 3. **Caller default** – whatever fallback the call site supplies when
//!    [`resolve`] returns `None`
//!
//! The document is parsed once per process on first lookup. A missing or
//! malformed file behaves as an empty document; configuration lookup never
//! fails and never panics.
//!
//! # Document format
//!
//! ```json
//! {
//!   "api": {
//!     "base_url": "https://api.restful-api.dev"
//!   }
//! }
//! ```
//!
//! The value above is addressed as `api.base_url`.

use std::env;
use std::fs;
use std::path::Path;
use std::sync::OnceLock;

use serde_json::Value;

/// Configuration document file name, relative to the working directory.
const DEFAULT_DOCUMENT_PATH: &str = "restcheck.json";

static DOCUMENT: OnceLock<ConfigDocument> = OnceLock::new();

/// An immutable, parsed configuration document.
///
/// The process-wide instance behind [`resolve`] is loaded lazily and cached
/// for the process lifetime. Separate instances can be constructed directly
/// for tests or tools that read configuration from somewhere else.
#[derive(Debug, Clone, PartialEq)]
pub struct ConfigDocument {
    root: Value,
}

impl ConfigDocument {
    /// Returns a document containing no values.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            root: Value::Object(serde_json::Map::new()),
        }
    }

    /// Parses a document from JSON text.
    ///
    /// Malformed input degrades to an empty document rather than failing;
    /// the harness treats unreadable configuration as "no values found".
    #[must_use]
    pub fn from_json(text: &str) -> Self {
        serde_json::from_str::<Value>(text).map_or_else(|_| Self::empty(), |root| Self { root })
    }

    /// Reads and parses the document at `path`.
    ///
    /// A missing or unreadable file degrades to an empty document.
    #[must_use]
    pub fn from_path(path: &Path) -> Self {
        fs::read_to_string(path).map_or_else(|_| Self::empty(), |text| Self::from_json(&text))
    }

    /// Looks up `key` as a dot-separated path of nested object fields.
    ///
    /// String values are returned verbatim. Numbers and booleans are
    /// rendered in their JSON text form, and objects or arrays as compact
    /// JSON. A JSON `null` counts as absent.
    #[must_use]
    pub fn lookup(&self, key: &str) -> Option<String> {
        let mut node = &self.root;
        for segment in key.split('.') {
            node = node.as_object()?.get(segment)?;
        }
        render(node)
    }
}

/// Resolves a named setting through the layered lookup.
///
/// When `env_override` names an environment variable that is set to a
/// non-empty value, that value wins regardless of the document's content.
/// Otherwise the process-wide document is consulted. Absence from both
/// sources yields `None`, never an error.
#[must_use]
pub fn resolve(key: &str, env_override: Option<&str>) -> Option<String> {
    env_override
        .and_then(|name| env::var(name).ok())
        .filter(|value| !value.is_empty())
        .or_else(|| document().lookup(key))
}

/// Returns the process-wide document, loading it on first access.
///
/// `OnceLock` guarantees the load happens exactly once even when the first
/// lookups race; subsequent reads are lock-free.
fn document() -> &'static ConfigDocument {
    DOCUMENT.get_or_init(|| ConfigDocument::from_path(Path::new(DEFAULT_DOCUMENT_PATH)))
}

fn render(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(text) => Some(text.clone()),
        other => Some(other.to_string()),
    }
}
