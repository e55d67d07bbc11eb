//! Shared harness for scenario tests.
//!
//! The system under test issues blocking requests, while wiremock needs an
//! async runtime. Each test therefore owns a dedicated Tokio runtime that
//! drives the mock server in the background; the blocking client runs on the
//! test thread itself.

use tokio::runtime::Runtime;
use wiremock::{Mock, MockServer};

/// A wiremock server paired with the runtime that drives it.
///
/// The server is declared before the runtime so it shuts down while the
/// runtime is still alive.
pub struct MockService {
    server: MockServer,
    runtime: Runtime,
}

impl MockService {
    /// Starts a fresh mock service on a random local port.
    ///
    /// # Panics
    ///
    /// Panics when the Tokio runtime cannot be created; scenario tests
    /// cannot proceed without one.
    #[must_use]
    pub fn start() -> Self {
        let runtime = Runtime::new()
            .unwrap_or_else(|error| panic!("failed to create Tokio runtime: {error}"));
        let server = runtime.block_on(MockServer::start());
        Self { server, runtime }
    }

    /// Mounts a mock on the server.
    pub fn mount(&self, mock: Mock) {
        self.runtime.block_on(mock.mount(&self.server));
    }

    /// Base URI the service listens on.
    #[must_use]
    pub fn uri(&self) -> String {
        self.server.uri()
    }
}
