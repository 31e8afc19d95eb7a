//! Session storage
//!
//! The admin token is the only client-side persisted state. It is loaded
//! once at startup and cleared on 401 or explicit logout. The store is
//! injected into the client so the storage medium stays swappable.

use std::path::{Path, PathBuf};
use std::sync::Mutex;

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SessionStoreError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Where the admin token lives between calls.
pub trait SessionStore: Send + Sync {
    /// Returns the stored token, if any.
    fn get(&self) -> Option<String>;

    /// Stores a fresh token.
    fn set(&self, token: &str) -> Result<(), SessionStoreError>;

    /// Forgets the token.
    fn clear(&self) -> Result<(), SessionStoreError>;
}

// ============================================================================
// In-memory store
// ============================================================================

/// Process-local session, gone on drop. The default for tests.
#[derive(Debug, Default)]
pub struct MemorySession {
    token: Mutex<Option<String>>,
}

impl MemorySession {
    pub fn new() -> Self {
        Self::default()
    }

    /// A session pre-seeded with a token.
    pub fn with_token(token: impl Into<String>) -> Self {
        Self {
            token: Mutex::new(Some(token.into())),
        }
    }
}

impl SessionStore for MemorySession {
    fn get(&self) -> Option<String> {
        self.token.lock().unwrap().clone()
    }

    fn set(&self, token: &str) -> Result<(), SessionStoreError> {
        *self.token.lock().unwrap() = Some(token.to_string());
        Ok(())
    }

    fn clear(&self) -> Result<(), SessionStoreError> {
        *self.token.lock().unwrap() = None;
        Ok(())
    }
}

// ============================================================================
// File-backed store
// ============================================================================

/// On-disk session file: {dir}/session.json
#[derive(Debug, Clone, Serialize, Deserialize)]
struct StoredSession {
    token: String,
}

/// File-backed session surviving restarts.
///
/// The token is cached in memory after load; disk is only touched on
/// `set`/`clear`.
#[derive(Debug)]
pub struct FileSession {
    file_path: PathBuf,
    token: Mutex<Option<String>>,
}

impl FileSession {
    /// Loads the session file under `dir`, tolerating its absence.
    pub fn load(dir: &Path) -> Result<Self, SessionStoreError> {
        let file_path = dir.join("session.json");

        let token = if file_path.exists() {
            let content = std::fs::read_to_string(&file_path)?;
            let stored: StoredSession = serde_json::from_str(&content)?;
            tracing::debug!("Loaded stored admin session");
            Some(stored.token)
        } else {
            None
        };

        Ok(Self {
            file_path,
            token: Mutex::new(token),
        })
    }
}

impl SessionStore for FileSession {
    fn get(&self) -> Option<String> {
        self.token.lock().unwrap().clone()
    }

    fn set(&self, token: &str) -> Result<(), SessionStoreError> {
        if let Some(parent) = self.file_path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let stored = StoredSession {
            token: token.to_string(),
        };
        std::fs::write(&self.file_path, serde_json::to_string_pretty(&stored)?)?;
        *self.token.lock().unwrap() = Some(token.to_string());
        tracing::debug!("Admin session saved");
        Ok(())
    }

    fn clear(&self) -> Result<(), SessionStoreError> {
        if self.file_path.exists() {
            std::fs::remove_file(&self.file_path)?;
        }
        *self.token.lock().unwrap() = None;
        tracing::debug!("Admin session cleared");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_session_round_trip() {
        let session = MemorySession::new();
        assert!(session.get().is_none());

        session.set("tok-123").unwrap();
        assert_eq!(session.get().as_deref(), Some("tok-123"));

        session.clear().unwrap();
        assert!(session.get().is_none());
    }
}
