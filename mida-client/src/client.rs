//! The admin client
//!
//! One client instance per admin session. Typed endpoint wrappers live in
//! the `api` module, one impl block per resource.

use std::sync::Arc;

use crate::config::ClientConfig;
use crate::http::ApiGateway;
use crate::session::{MemorySession, SessionStore};

/// Typed client for the storefront admin API.
///
/// All state lives in the injected [`SessionStore`]; the client itself is
/// cheap to clone and safe to share.
#[derive(Clone)]
pub struct MidaClient {
    gateway: ApiGateway,
}

impl MidaClient {
    /// Create a client with an injected session store.
    pub fn new(config: ClientConfig, session: Arc<dyn SessionStore>) -> Self {
        Self {
            gateway: ApiGateway::new(config, session),
        }
    }

    /// Create a client with an in-memory session (useful for tests and
    /// one-shot tooling).
    pub fn in_memory(config: ClientConfig) -> Self {
        Self::new(config, Arc::new(MemorySession::new()))
    }

    /// The underlying gateway.
    pub(crate) fn gateway(&self) -> &ApiGateway {
        &self.gateway
    }

    /// The current admin token, if a session is active.
    pub fn token(&self) -> Option<String> {
        self.gateway.session().get()
    }

    /// Whether a token is stored.
    pub fn is_authenticated(&self) -> bool {
        self.token().is_some()
    }

    /// The client configuration.
    pub fn config(&self) -> &ClientConfig {
        self.gateway.config()
    }
}
